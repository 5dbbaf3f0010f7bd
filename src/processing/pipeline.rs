//! The linear optimization pipeline.
//!
//! Mirrors the manual workflow it replaces: read the logo, back it up once,
//! shrink it, reduce its palette, overwrite it, report the savings.

use std::fs;

use image::GenericImageView;
use tracing::{debug, info};

use crate::core::{OptimizationReport, OptimizeTask};
use crate::utils::{OptimizerError, OptimizerResult, ensure_backup, extract_filename, file_size};

use super::encode::encode_png;
use super::quantize::quantize;
use super::resize::apply_resize;

/// Optimizes one logo in place.
///
/// Validates the task, decodes the source, writes the backup unless one is
/// already present, then resizes, quantizes and re-encodes the image over
/// the source path. Savings are measured against the file at the backup
/// path; after a skipped backup that baseline may predate the current
/// source. There is no rollback: a failed overwrite leaves the source in
/// whatever state the write reached.
pub fn optimize(task: &OptimizeTask) -> OptimizerResult<OptimizationReport> {
    task.validate()?;

    let source = &task.source_path;
    let original_size = file_size(source)?;

    let image = image::open(source).map_err(|e| {
        OptimizerError::decode(format!("Failed to decode '{}': {e}", source.display()))
    })?;
    let (original_width, original_height) = image.dimensions();

    debug!(
        "Loaded '{}': {}×{}, {} bytes",
        extract_filename(source),
        original_width,
        original_height,
        original_size
    );

    let backup_created = ensure_backup(source, &task.backup_path)?;
    let baseline_size = file_size(&task.backup_path)?;

    let resized = apply_resize(&image, &task.settings);
    let indexed = quantize(&resized, task.settings.palette_size)?;
    let encoded = encode_png(&indexed)?;

    fs::write(source, &encoded).map_err(|e| {
        OptimizerError::io(format!("Failed to overwrite '{}': {e}", source.display()))
    })?;

    let optimized_size = encoded.len() as u64;
    let saved_bytes = baseline_size as i64 - optimized_size as i64;
    let compression_ratio = if baseline_size > 0 {
        saved_bytes as f64 / baseline_size as f64 * 100.0
    } else {
        0.0
    };

    let report = OptimizationReport {
        source_path: source.display().to_string(),
        backup_path: task.backup_path.display().to_string(),
        original_width,
        original_height,
        original_size,
        baseline_size,
        optimized_width: task.settings.target_width,
        optimized_height: task.settings.target_height,
        optimized_size,
        saved_bytes,
        compression_ratio,
        backup_created,
    };

    info!(
        "'{}' optimized: {} bytes saved ({:.1}%)",
        extract_filename(source),
        saved_bytes,
        compression_ratio
    );

    debug!(
        "{}",
        serde_json::json!({
            "fileName": extract_filename(source),
            "originalSize": baseline_size,
            "optimizedSize": optimized_size,
            "savedBytes": saved_bytes,
            "compressionRatio": format!("{:.2}", compression_ratio),
        })
    );

    Ok(report)
}
