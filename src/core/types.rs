//! Core types for optimization settings and run reports.

use serde::{Deserialize, Serialize};

/// Maximum number of entries an indexed PNG palette can carry.
pub const MAX_PALETTE_SIZE: u32 = 256;

/// Configuration settings for one optimization run.
///
/// The resize is a direct non-uniform resize to exactly these dimensions;
/// the caller picks targets that approximate the source aspect ratio.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OptimizeSettings {
    /// Output raster width in pixels
    pub target_width: u32,
    /// Output raster height in pixels
    pub target_height: u32,
    /// Maximum number of colors retained in the output palette (1-256)
    pub palette_size: u32,
}

/// Result of an optimization run.
///
/// Savings are measured against the file at the backup path. When the backup
/// predates the current source (it is written at most once), the baseline is
/// that older file, not the bytes this run just read.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizationReport {
    /// Path of the file that was optimized in place
    pub source_path: String,
    /// Path of the untouched backup copy
    pub backup_path: String,
    /// Source dimensions before the resize
    pub original_width: u32,
    pub original_height: u32,
    /// Source file size before the overwrite, in bytes
    pub original_size: u64,
    /// Size of the file at the backup path, in bytes; the savings baseline
    pub baseline_size: u64,
    /// Output dimensions
    pub optimized_width: u32,
    pub optimized_height: u32,
    /// Output file size in bytes
    pub optimized_size: u64,
    /// Bytes saved against the baseline (negative if the file grew)
    pub saved_bytes: i64,
    /// Savings as a percentage of the baseline
    pub compression_ratio: f64,
    /// Whether this run wrote the backup file
    pub backup_created: bool,
}
