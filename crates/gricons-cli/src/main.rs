//! gricons - build tool for icon projects
//!
//! One subcommand, `build`, which packages the icon project in the
//! current (or given) directory. Quiet on success; set `RUST_LOG` for
//! diagnostics, including inline-style warnings from the optimizer.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "gricons",
    about = "Package an icon project into its distributable artifacts",
    version
)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the icon build pipeline
    #[command(long_about = "Optimize every icon under src/svg, reconcile the catalog in \n\
                      src/data.json, and emit the icon package, symbol sprite, and \n\
                      cheatsheet under icons/ and dist/.")]
    Build {
        /// Icon project root
        #[arg(long, default_value = ".")]
        root: PathBuf,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    if let Err(err) = run(args).await {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Commands::Build { root } => {
            let summary = gricons_build::build(&root)
                .await
                .with_context(|| format!("build failed in {}", root.display()))?;
            log::info!(
                "packaged {} icons for v{}",
                summary.icon_count,
                summary.version
            );
            Ok(())
        }
    }
}
