//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading exemption
//! calendars from YAML files.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{AssessmentError, AssessmentResult};
use crate::models::ExemptionType;

use super::types::{ExemptionCalendar, ExemptionWindow, ExemptionsConfig, JurisdictionMetadata};

/// Loads and provides access to an exemption calendar.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/boston/
/// ├── jurisdiction.yaml  # Jurisdiction metadata
/// └── exemptions.yaml    # Per-type exemption anchors
/// ```
///
/// # Example
///
/// ```no_run
/// use assessing_core::config::ConfigLoader;
/// use assessing_core::models::ExemptionType;
///
/// let loader = ConfigLoader::load("./config/boston").unwrap();
/// let window = loader.window(ExemptionType::Residential);
/// println!("{} deadline: {}", window.name, window.deadline);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    calendar: ExemptionCalendar,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if a file is missing, contains invalid YAML, or
    /// describes anchors that are out of order.
    pub fn load<P: AsRef<Path>>(path: P) -> AssessmentResult<Self> {
        let path = path.as_ref();

        let jurisdiction =
            Self::load_yaml::<JurisdictionMetadata>(&path.join("jurisdiction.yaml"))?;
        let exemptions = Self::load_yaml::<ExemptionsConfig>(&path.join("exemptions.yaml"))?;

        let calendar = ExemptionCalendar::new(
            jurisdiction,
            exemptions.residential,
            exemptions.personal,
        )
        .inspect_err(|e| warn!(path = %path.display(), error = %e, "Rejected exemption calendar"))?;

        debug!(
            jurisdiction = %calendar.jurisdiction().code,
            "Loaded exemption calendar"
        );
        Ok(Self { calendar })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> AssessmentResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| AssessmentError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| AssessmentError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded calendar.
    pub fn calendar(&self) -> &ExemptionCalendar {
        &self.calendar
    }

    /// Consumes the loader, returning the calendar.
    pub fn into_calendar(self) -> ExemptionCalendar {
        self.calendar
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        self.calendar.jurisdiction()
    }

    /// Returns the anchors for an exemption type.
    pub fn window(&self, exemption_type: ExemptionType) -> &ExemptionWindow {
        self.calendar.window(exemption_type)
    }
}
