//! Restoplan - Budget-Constrained Restoration Planning CLI
//!
//! The `restoplan` command scores candidate restoration work items against
//! trained per-component models and prints a priced work plan.
//!
//! ## Commands
//!
//! - `plan`: produce a work plan for a job description (JSON file)
//! - `components`: list component ids discoverable in the artifact store
//! - `refresh`: load every bundle once and report how many are usable
//!
//! Artifacts come either from a local directory (`--artifacts-dir`) or from
//! the cloud backend configured through `RESTOPLAN_STORE_*` environment
//! variables (`--cloud`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use restoplan_core::JobRecord;
use restoplan_engine::PlanEngine;
use restoplan_store::{ArtifactStore, CloudArtifactStore, CloudConfig, LocalArtifactStore};

#[derive(Parser, Debug)]
#[command(name = "restoplan")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Budget-constrained vehicle restoration planning", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Produce a work plan for a job description
    Plan {
        /// Path to the job description (JSON)
        #[arg(short, long)]
        job: PathBuf,

        /// Local artifact directory (default: ./artifacts)
        #[arg(long)]
        artifacts_dir: Option<PathBuf>,

        /// Use the cloud artifact backend (RESTOPLAN_STORE_* env vars)
        #[arg(long, conflicts_with = "artifacts_dir")]
        cloud: bool,
    },

    /// List component ids discoverable in the artifact store
    Components {
        /// Local artifact directory (default: ./artifacts)
        #[arg(long)]
        artifacts_dir: Option<PathBuf>,

        /// Use the cloud artifact backend (RESTOPLAN_STORE_* env vars)
        #[arg(long, conflicts_with = "artifacts_dir")]
        cloud: bool,
    },

    /// Reload every artifact bundle and report how many loaded cleanly
    Refresh {
        /// Local artifact directory (default: ./artifacts)
        #[arg(long)]
        artifacts_dir: Option<PathBuf>,

        /// Use the cloud artifact backend (RESTOPLAN_STORE_* env vars)
        #[arg(long, conflicts_with = "artifacts_dir")]
        cloud: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // configuration may live in a .env next to the binary, like the
    // cloud store credentials
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Plan {
            job,
            artifacts_dir,
            cloud,
        } => {
            let raw = std::fs::read_to_string(&job)
                .with_context(|| format!("failed to read job file '{}'", job.display()))?;
            let record: JobRecord =
                serde_json::from_str(&raw).context("failed to parse job description")?;

            let plan = if cloud {
                run_plan(cloud_store()?, &record).await?
            } else {
                run_plan(local_store(artifacts_dir), &record).await?
            };
            println!("{plan}");
        }

        Commands::Components {
            artifacts_dir,
            cloud,
        } => {
            let components = if cloud {
                list_components(cloud_store()?).await?
            } else {
                list_components(local_store(artifacts_dir)).await?
            };
            if components.is_empty() {
                println!("(no components discovered)");
            } else {
                for component in components {
                    println!("{component}");
                }
            }
        }

        Commands::Refresh {
            artifacts_dir,
            cloud,
        } => {
            let loaded = if cloud {
                refresh(cloud_store()?).await?
            } else {
                refresh(local_store(artifacts_dir)).await?
            };
            println!("{loaded} component bundle(s) loaded");
        }
    }

    Ok(())
}

fn local_store(artifacts_dir: Option<PathBuf>) -> LocalArtifactStore {
    let dir = artifacts_dir.unwrap_or_else(|| PathBuf::from("artifacts"));
    LocalArtifactStore::new(dir)
}

fn cloud_store() -> Result<CloudArtifactStore> {
    let config = CloudConfig::from_env().context("cloud artifact store misconfigured")?;
    CloudArtifactStore::new(config).context("failed to initialize cloud artifact store")
}

async fn run_plan<S: ArtifactStore>(store: S, job: &JobRecord) -> Result<String> {
    let engine = PlanEngine::new(store);
    let plan = engine.plan(job).await.context("planning failed")?;
    serde_json::to_string_pretty(&plan).context("failed to serialize plan")
}

async fn list_components<S: ArtifactStore>(store: S) -> Result<Vec<String>> {
    let engine = PlanEngine::new(store);
    Ok(engine.components().await?)
}

async fn refresh<S: ArtifactStore>(store: S) -> Result<usize> {
    let engine = PlanEngine::new(store);
    Ok(engine.refresh_artifacts().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn refresh_subcommand_parses() {
        let cli = Cli::try_parse_from(["restoplan", "refresh", "--artifacts-dir", "/tmp/a"])
            .expect("refresh must parse");
        assert!(matches!(
            cli.command,
            Commands::Refresh { cloud: false, .. }
        ));
    }

    #[test]
    fn cloud_conflicts_with_artifacts_dir() {
        let err = Cli::try_parse_from([
            "restoplan",
            "components",
            "--cloud",
            "--artifacts-dir",
            "/tmp/a",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }
}
