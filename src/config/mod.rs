//! Configuration loading and management for the assessing core.
//!
//! This module provides functionality to load exemption calendars from YAML
//! files: jurisdiction metadata plus the yearly filing anchors of each
//! exemption type. [`ExemptionCalendar::default`] carries the same anchors
//! as the shipped `config/boston` directory.
//!
//! # Example
//!
//! ```no_run
//! use assessing_core::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/boston").unwrap();
//! println!("Loaded calendar: {}", config.jurisdiction().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    ExemptionCalendar, ExemptionWindow, ExemptionsConfig, JurisdictionMetadata, MonthDay,
};
