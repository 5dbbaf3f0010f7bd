pub mod error;
pub mod fs;

pub use error::{OptimizerError, OptimizerResult, PathError, ValidationError};
pub use fs::{backup_path_for, ensure_backup, extract_filename, file_size};
