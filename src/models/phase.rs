//! Exemption phase models.
//!
//! This module contains the [`PhaseLabel`] states of the annual exemption
//! cycle, the per-type [`ExemptionPhase`] descriptor and the aggregated
//! [`ExemptionPhaseData`] record consumed by exemption status displays.

use serde::{Deserialize, Serialize};

/// The stage of the annual exemption cycle an exemption occupies.
///
/// # Example
///
/// ```
/// use assessing_core::models::PhaseLabel;
///
/// let label = PhaseLabel::OpenForApplication;
/// assert_eq!(serde_json::to_string(&label).unwrap(), "\"open_for_application\"");
/// assert!(!label.is_active());
/// assert!(PhaseLabel::Granted.is_active());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseLabel {
    /// Applications for the cycle are not being accepted yet.
    NotOpen,
    /// Applications are being accepted and the deadline has not passed.
    OpenForApplication,
    /// An approved application is awaiting its amount on the bill.
    UnderReview,
    /// The exemption amount is on the bill.
    Granted,
    /// The filing deadline passed without the exemption being granted.
    Missed,
}

impl PhaseLabel {
    /// Whether this label denotes an active exemption that needs no explanation.
    pub fn is_active(&self) -> bool {
        matches!(self, PhaseLabel::Granted)
    }
}

impl std::fmt::Display for PhaseLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PhaseLabel::NotOpen => write!(f, "Not Open"),
            PhaseLabel::OpenForApplication => write!(f, "Open for Application"),
            PhaseLabel::UnderReview => write!(f, "Under Review"),
            PhaseLabel::Granted => write!(f, "Granted"),
            PhaseLabel::Missed => write!(f, "Missed"),
        }
    }
}

/// The phase of one exemption type at one evaluation date.
///
/// `message` is `None` exactly when the phase is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExemptionPhase {
    /// The phase label.
    pub phase: PhaseLabel,
    /// Explanation shown to the owner when the exemption is not active.
    pub message: Option<String>,
}

impl ExemptionPhase {
    /// Creates the phase for an exemption that is on the bill.
    pub fn granted() -> Self {
        Self {
            phase: PhaseLabel::Granted,
            message: None,
        }
    }

    /// Creates a non-active phase with its explanation.
    pub fn explained(phase: PhaseLabel, message: impl Into<String>) -> Self {
        Self {
            phase,
            message: Some(message.into()),
        }
    }
}

/// Both exemption phases with their approval and granted signals.
///
/// `calendar_year` is the single year both phases were resolved against;
/// consumers read it from here rather than recomputing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExemptionPhaseData {
    /// Phase of the residential exemption.
    pub residential_phase: ExemptionPhase,
    /// Phase of the personal exemption.
    pub personal_phase: ExemptionPhase,
    /// The residential approval flag, passed through unchanged.
    pub residential_exemption_approved: bool,
    /// The personal approval flag, passed through unchanged.
    pub personal_exemption_approved: bool,
    /// Whether a residential exemption amount is on the bill.
    pub residential_granted: bool,
    /// Whether a personal exemption amount is on the bill.
    pub personal_granted: bool,
    /// The calendar year the phases were resolved against.
    pub calendar_year: i32,
}
