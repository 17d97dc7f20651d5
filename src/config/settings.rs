//! Validation of merged settings

use std::path::Path;

use crate::error::{InspectError, Result, ResultExt};
use crate::models::config::Settings;
use crate::parsers::PackagePatternTable;
use crate::core::host_resolver::is_plain_name;

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid
    pub fn validate(settings: &Settings) -> Result<()> {
        if !settings.project_root.exists() {
            return Err(InspectError::invalid_path(&settings.project_root));
        }

        if let Some(hostname) = &settings.hostname {
            let hostname = hostname.trim();
            if !hostname.is_empty() && !is_plain_name(hostname) {
                return Err(InspectError::config_error(format!(
                    "Host name must be a plain directory name: {}",
                    hostname
                )));
            }
        }

        for pattern in &settings.exclude_patterns {
            glob::Pattern::new(pattern).with_context(|| format!("Invalid exclude pattern: {}", pattern))?;
        }

        if let Some(depth) = settings.max_depth {
            if depth == 0 {
                return Err(InspectError::config_error("Max depth must be at least 1"));
            }
        }

        PackagePatternTable::with_extra(&settings.package_patterns)?;

        if let Some(path) = &settings.output_file {
            Self::validate_output_path(path)?;
        }

        Ok(())
    }

    /// Validate that an output path is writable
    fn validate_output_path(path: &Path) -> Result<()> {
        let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
            return Ok(());
        };

        if !parent.exists() {
            return Err(InspectError::OutputDirectoryNotFound {
                path: parent.to_path_buf(),
            });
        }

        let metadata = std::fs::metadata(parent).map_err(InspectError::io_error)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if metadata.permissions().mode() & 0o200 == 0 {
                return Err(InspectError::permission_denied(parent));
            }
        }
        #[cfg(not(unix))]
        {
            if metadata.permissions().readonly() {
                return Err(InspectError::permission_denied(parent));
            }
        }

        Ok(())
    }
}
