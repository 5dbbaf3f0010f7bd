use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::{MAX_PALETTE_SIZE, OptimizeSettings};
use crate::utils::{OptimizerResult, ValidationError, backup_path_for};

/// A single optimization task: where to read, where to back up, how to transform.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizeTask {
    pub source_path: PathBuf,
    pub backup_path: PathBuf,
    pub settings: OptimizeSettings,
}

impl OptimizeTask {
    pub fn new(
        source_path: impl Into<PathBuf>,
        backup_path: impl Into<PathBuf>,
        settings: OptimizeSettings,
    ) -> Self {
        Self {
            source_path: source_path.into(),
            backup_path: backup_path.into(),
            settings,
        }
    }

    /// Task for `source` with the backup path derived next to it.
    pub fn for_source(source: impl Into<PathBuf>, settings: OptimizeSettings) -> Self {
        let source_path = source.into();
        let backup_path = backup_path_for(&source_path);
        Self {
            source_path,
            backup_path,
            settings,
        }
    }

    pub fn validate(&self) -> OptimizerResult<()> {
        self.validate_source_path()?;
        self.validate_backup_path()?;
        self.validate_settings()?;
        Ok(())
    }

    fn validate_source_path(&self) -> OptimizerResult<()> {
        let path = &self.source_path;

        if !path.exists() {
            return Err(ValidationError::path_not_found(path).into());
        }

        if !path.is_file() {
            return Err(ValidationError::not_a_file(path).into());
        }

        if !is_png(path) {
            return Err(ValidationError::not_png(path).into());
        }

        Ok(())
    }

    fn validate_backup_path(&self) -> OptimizerResult<()> {
        if let Some(parent) = self.backup_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(ValidationError::settings(format!(
                    "Backup directory does not exist: {}",
                    parent.display()
                ))
                .into());
            }
        }
        Ok(())
    }

    fn validate_settings(&self) -> OptimizerResult<()> {
        let settings = &self.settings;

        if settings.target_width == 0 {
            return Err(ValidationError::settings("Target width cannot be 0").into());
        }

        if settings.target_height == 0 {
            return Err(ValidationError::settings("Target height cannot be 0").into());
        }

        if settings.palette_size == 0 || settings.palette_size > MAX_PALETTE_SIZE {
            return Err(ValidationError::settings(format!(
                "Invalid palette size: {}. Must be between 1 and {}",
                settings.palette_size, MAX_PALETTE_SIZE
            ))
            .into());
        }

        Ok(())
    }
}

fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{OptimizerError, PathError};

    fn settings() -> OptimizeSettings {
        OptimizeSettings {
            target_width: 256,
            target_height: 68,
            palette_size: 256,
        }
    }

    #[test]
    fn derives_backup_path_next_to_source() {
        let task = OptimizeTask::for_source("public/logo.png", settings());
        assert_eq!(task.backup_path, PathBuf::from("public/logo-original.png"));
    }

    #[test]
    fn rejects_missing_source() {
        let task = OptimizeTask::for_source("does/not/exist.png", settings());
        let err = task.validate().unwrap_err();
        assert!(matches!(
            err,
            OptimizerError::Validation(ValidationError::Path(PathError::NotFound(_)))
        ));
    }

    #[test]
    fn rejects_non_png_source() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("logo.jpg");
        std::fs::write(&source, b"jpg bytes").unwrap();

        let task = OptimizeTask::for_source(&source, settings());
        let err = task.validate().unwrap_err();
        assert!(matches!(
            err,
            OptimizerError::Validation(ValidationError::Path(PathError::NotPng(_)))
        ));
    }

    #[test]
    fn rejects_out_of_range_settings() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("logo.png");
        std::fs::write(&source, b"png bytes").unwrap();

        for bad in [
            OptimizeSettings {
                target_width: 0,
                ..settings()
            },
            OptimizeSettings {
                target_height: 0,
                ..settings()
            },
            OptimizeSettings {
                palette_size: 0,
                ..settings()
            },
            OptimizeSettings {
                palette_size: 257,
                ..settings()
            },
        ] {
            let task = OptimizeTask::for_source(&source, bad);
            assert!(matches!(
                task.validate().unwrap_err(),
                OptimizerError::Validation(ValidationError::Settings(_))
            ));
        }
    }
}
