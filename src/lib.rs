//! Exemption phase and fiscal period rules for municipal property assessment
//!
//! This crate determines, for a parcel's exemption amounts and a date, which
//! stage of the yearly exemption cycle the residential and personal
//! exemptions are in, which fiscal year and billing half the date belongs to,
//! and how the parcel's tax figures are shown.

#![warn(missing_docs)]

pub mod calculation;
pub mod clock;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod models;
