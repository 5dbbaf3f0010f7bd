// This is the primary entry point for the logo optimizer binary.
// The lib.rs file serves as the public API for consuming this crate as a library.

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use logo_optimizer::{OptimizeSettings, OptimizeTask, optimize};

/// Logo shipped with the site, overwritten in place.
const LOGO_PATH: &str = "public/logo.png";
/// Output dimensions, chosen to match the logo's aspect ratio.
const TARGET_WIDTH: u32 = 256;
const TARGET_HEIGHT: u32 = 68;
/// Colors kept in the output palette.
const PALETTE_SIZE: u32 = 256;

fn main() -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_file(false)         // Remove file path
        .with_line_number(false)  // Remove line numbers
        .with_thread_ids(false)   // Remove thread IDs
        .with_thread_names(false) // Remove thread names
        .with_target(false)       // Remove module path
        .with_ansi(true)          // Keep colored output
        .with_writer(std::io::stdout)
        .compact();               // Use compact formatter instead of pretty

    subscriber.init();

    info!("=== Logo Optimizer Starting ===");

    let task = OptimizeTask::for_source(
        LOGO_PATH,
        OptimizeSettings {
            target_width: TARGET_WIDTH,
            target_height: TARGET_HEIGHT,
            palette_size: PALETTE_SIZE,
        },
    );

    let report = optimize(&task).with_context(|| format!("failed to optimize '{LOGO_PATH}'"))?;

    info!(
        "Dimensions: {}×{} → {}×{}",
        report.original_width, report.original_height, report.optimized_width, report.optimized_height
    );
    info!(
        "Size: {} → {} bytes ({} saved, {:.1}%)",
        report.baseline_size, report.optimized_size, report.saved_bytes, report.compression_ratio
    );
    info!(
        "Backup: {} ({})",
        report.backup_path,
        if report.backup_created {
            "created"
        } else {
            "already existed"
        }
    );

    Ok(())
}
