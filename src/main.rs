use devtools_shim::*;

use anyhow::{Context, Result};
use devtools_shim::patcher::PatchPipeline;
use tracing_subscriber::EnvFilter;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    tracing::info!("devtools-shim patcher.");

    let config = config::AppConfig::load()?;
    tracing::info!("Configuration loaded");

    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "check" => return run_check(&config).await,
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Usage:");
                eprintln!("  devtools-shim          Patch the frontend bundle at FRONTEND_DIR in place");
                eprintln!("  devtools-shim check    Dry run: report which patch patterns still match");
                std::process::exit(1);
            }
        }
    }

    let pipeline = PatchPipeline::new(&config.patch_config);
    let count = pipeline.patch_build(&config.frontend_dir).await?;
    tracing::info!("Done, {} files rewritten", count);

    Ok(())
}

/// Walks the bundle without writing anything and reports, per file, which
/// rules would apply and which patterns are missing. Run this after
/// pulling a new frontend drop to see what drifted.
async fn run_check(config: &config::AppConfig) -> Result<()> {
    let pipeline = PatchPipeline::new(&config.patch_config);
    let missing = pipeline
        .check_build(&config.frontend_dir)
        .await
        .context(format!(
            "Could not read {:?}. Set FRONTEND_DIR to the bundle directory.",
            config.frontend_dir
        ))?;

    if missing > 0 {
        tracing::warn!("{} patch patterns no longer match; update the catalog", missing);
    } else {
        tracing::info!("All enabled patch patterns match");
    }
    Ok(())
}
