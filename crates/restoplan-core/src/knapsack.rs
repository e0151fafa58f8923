//! Budget-constrained selection: 0/1 knapsack over integer minutes.
//!
//! Greedy by value density is not optimal for this weight/value shape, so
//! selection runs a dynamic program over remaining capacity with per-item
//! take rows for reconstruction. O(items x capacity) time, O(capacity)
//! value cells.

use tracing::debug;

use crate::candidate::CandidateItem;

/// One DP cell: best achievable value at this capacity, and the smallest
/// total time that achieves it.
#[derive(Debug, Clone, Copy)]
struct Cell {
    value: f64,
    time: u32,
}

/// Select the value-maximizing subset of `items` whose total time cost fits
/// within `capacity_min`. Returns items in canonical (component id) order.
///
/// Tie-breaking is deterministic: on equal value the subset with smaller
/// total time wins; on a full tie the incumbent wins. Items are processed in
/// sorted component-id order, so incumbent subsets are built from earlier
/// ids and full ties resolve toward lexicographically earlier components.
///
/// Callers guarantee `time_cost_min >= 1` for every item (the candidate
/// builder enforces this).
pub fn select_under_budget(items: &[CandidateItem], capacity_min: u32) -> Vec<CandidateItem> {
    if items.is_empty() || capacity_min == 0 {
        return Vec::new();
    }

    let mut ordered: Vec<&CandidateItem> = items.iter().collect();
    ordered.sort_by(|a, b| a.component.cmp(&b.component));

    let capacity = capacity_min as usize;
    let mut dp = vec![
        Cell {
            value: 0.0,
            time: 0
        };
        capacity + 1
    ];
    // take[i][c]: item i participates in the best subset for capacity c
    let mut take = vec![vec![false; capacity + 1]; ordered.len()];

    for (i, item) in ordered.iter().enumerate() {
        let weight = item.time_cost_min as usize;
        if weight > capacity {
            continue;
        }
        // descending capacity keeps each item 0/1
        for c in (weight..=capacity).rev() {
            let prev = dp[c - weight];
            let cand = Cell {
                value: prev.value + item.expected_value,
                time: prev.time + item.time_cost_min,
            };
            let cur = dp[c];
            let better = cand.value > cur.value
                || (cand.value == cur.value && cand.time < cur.time);
            if better {
                dp[c] = cand;
                take[i][c] = true;
            }
        }
    }

    let mut chosen = Vec::new();
    let mut c = capacity;
    for i in (0..ordered.len()).rev() {
        if take[i][c] {
            chosen.push(ordered[i].clone());
            c -= ordered[i].time_cost_min as usize;
        }
    }
    chosen.reverse();

    debug!(
        candidates = items.len(),
        chosen = chosen.len(),
        capacity_min,
        total_value = dp[capacity].value,
        total_time = dp[capacity].time,
        "budget selection complete"
    );

    chosen
}
