//! Integration tests for the assessing core.
//!
//! This test suite covers the parcel page scenarios end to end:
//! - Exemption phases across the yearly cycle
//! - Fiscal year and preliminary period detection
//! - Tax figure formatting
//! - Calendars loaded from the shipped configuration
//! - Error cases

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;

use assessing_core::calculation::{ExemptionPhaseParams, format_tax_value, get_exemption_phase};
use assessing_core::clock::FixedClock;
use assessing_core::config::{ConfigLoader, ExemptionCalendar};
use assessing_core::error::AssessmentError;
use assessing_core::evaluator::Evaluator;
use assessing_core::models::{ExemptionAmounts, ExemptionType, PhaseLabel, PropertyRecord, TaxValue};

// =============================================================================
// Test Helpers
// =============================================================================

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn load_calendar() -> ExemptionCalendar {
    ConfigLoader::load("./config/boston")
        .expect("Failed to load config")
        .into_calendar()
}

fn evaluator_on(day: &str) -> Evaluator<FixedClock> {
    Evaluator::new(FixedClock::new(date(day)), load_calendar())
}

fn sample_amounts() -> ExemptionAmounts {
    ExemptionAmounts {
        residential_exemption_amount: decimal("3716.40"),
        residential_exemption_flag: true,
        personal_exemption_amount: decimal("0"),
        personal_exemption_flag: false,
    }
}

fn sample_record_json() -> Value {
    json!({
        "parcel_id": "0504203000",
        "exemptions": {
            "residential_exemption_amount": 3716.40,
            "residential_exemption_flag": true,
            "personal_exemption_amount": 0,
            "personal_exemption_flag": false
        },
        "tax": {
            "gross_tax": 9427.2,
            "residential_exemption": "$3,716.40",
            "personal_exemption": 0,
            "community_preservation": "abc",
            "net_tax": "$5,710.80"
        }
    })
}

fn sample_record() -> PropertyRecord {
    serde_json::from_value(sample_record_json()).unwrap()
}

// =============================================================================
// Exemption Aggregation Scenarios
// =============================================================================

#[test]
fn test_march_residential_granted_personal_explained() {
    let data = evaluator_on("2024-03-01")
        .exemption_phases(&sample_amounts())
        .unwrap();

    assert!(data.residential_granted);
    assert!(!data.personal_granted);
    assert_eq!(data.calendar_year, 2024);
    assert!(data.residential_phase.message.is_none());
    assert!(data.personal_phase.message.is_some());
}

#[test]
fn test_march_personal_is_open_for_application() {
    let data = evaluator_on("2024-03-01")
        .exemption_phases(&sample_amounts())
        .unwrap();

    assert_eq!(data.personal_phase.phase, PhaseLabel::OpenForApplication);
    assert_eq!(
        data.personal_phase.message.as_deref(),
        Some(
            "The FY2024 Personal Exemption has not been applied to this property. \
             Applications are due by April 1, 2024."
        )
    );
}

#[test]
fn test_may_personal_has_missed_deadline() {
    let data = evaluator_on("2024-05-20")
        .exemption_phases(&sample_amounts())
        .unwrap();

    assert_eq!(data.residential_phase.phase, PhaseLabel::Granted);
    assert_eq!(data.personal_phase.phase, PhaseLabel::Missed);
}

#[test]
fn test_autumn_personal_waits_for_next_cycle() {
    let data = evaluator_on("2024-09-15")
        .exemption_phases(&sample_amounts())
        .unwrap();

    assert_eq!(data.personal_phase.phase, PhaseLabel::NotOpen);
    assert!(
        data.personal_phase
            .message
            .as_deref()
            .unwrap()
            .contains("January 1, 2025")
    );
}

#[test]
fn test_approved_flag_without_amount_is_under_review() {
    let amounts = ExemptionAmounts {
        residential_exemption_amount: decimal("0"),
        residential_exemption_flag: true,
        personal_exemption_amount: decimal("0"),
        personal_exemption_flag: false,
    };
    let data = evaluator_on("2024-04-15")
        .exemption_phases(&amounts)
        .unwrap();

    assert!(data.residential_exemption_approved);
    assert!(!data.residential_granted);
    assert_eq!(data.residential_phase.phase, PhaseLabel::UnderReview);
    assert_eq!(data.personal_phase.phase, PhaseLabel::Missed);
}

#[test]
fn test_repeated_evaluation_is_identical() {
    let evaluator = evaluator_on("2024-09-15");
    let first = evaluator
        .property_tax_calculations(&sample_record())
        .unwrap();
    let second = evaluator
        .property_tax_calculations(&sample_record())
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_vec(&first).unwrap(),
        serde_json::to_vec(&second).unwrap()
    );
}

// =============================================================================
// Tax Section Scenarios
// =============================================================================

#[test]
fn test_september_is_preliminary_fiscal_2025() {
    let calculations = evaluator_on("2024-09-15")
        .property_tax_calculations(&sample_record())
        .unwrap();

    assert!(calculations.is_prelim_period);
    assert_eq!(calculations.fiscal_year, 2025);
    assert_eq!(calculations.display_fy, "FY2025");
    assert_eq!(calculations.calendar_year(), 2024);
}

#[test]
fn test_tax_section_formats_mixed_figures() {
    let calculations = evaluator_on("2024-03-01")
        .property_tax_calculations(&sample_record())
        .unwrap();

    assert_eq!(calculations.parcel_id, "0504203000");
    assert_eq!(calculations.figures.gross_tax, "$9,427.20");
    assert_eq!(calculations.figures.residential_exemption, "$3,716.40");
    assert_eq!(calculations.figures.personal_exemption, "N/A");
    assert_eq!(calculations.figures.community_preservation, "N/A");
    assert_eq!(calculations.figures.net_tax, "$5,710.80");
}

#[test]
fn test_tax_section_json_contract() {
    let calculations = evaluator_on("2024-09-15")
        .property_tax_calculations(&sample_record())
        .unwrap();
    let json = serde_json::to_value(&calculations).unwrap();

    for field in [
        "fiscal_year",
        "display_fy",
        "is_prelim_period",
        "calendar_year",
        "residential_phase",
        "personal_phase",
        "residential_exemption_approved",
        "personal_exemption_approved",
        "residential_granted",
        "personal_granted",
        "figures",
    ] {
        assert!(json.get(field).is_some(), "missing field {}", field);
    }
    assert_eq!(json["is_prelim_period"], true);
    assert!(json["residential_phase"]["message"].is_null());
    assert_eq!(json["personal_phase"]["phase"], "not_open");
}

#[test]
fn test_formatter_business_rules() {
    assert_eq!(format_tax_value(&TaxValue::from(0_i64)), "N/A");
    assert_eq!(format_tax_value(&TaxValue::from("0")), "N/A");
    assert_eq!(format_tax_value(&TaxValue::from(1250_i64)), "$1,250");
    assert_eq!(format_tax_value(&TaxValue::from("$9,427.20")), "$9,427.20");
    assert_eq!(format_tax_value(&TaxValue::from("abc")), "N/A");
    assert_eq!(format_tax_value(&TaxValue::from(f64::NAN)), "N/A");
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn test_error_unknown_exemption_type_string() {
    let result = ExemptionPhaseParams::from_raw(0, "Commercial");

    match result {
        Err(AssessmentError::UnknownExemptionType { value }) => assert_eq!(value, "Commercial"),
        other => panic!("Expected UnknownExemptionType, got {:?}", other),
    }
}

#[test]
fn test_error_unknown_exemption_type_in_json() {
    let result: Result<ExemptionType, _> = serde_json::from_value(json!("commercial"));
    assert!(result.is_err());
}

#[test]
fn test_error_invalid_granted_count() {
    let params = ExemptionPhaseParams::new(3, ExemptionType::Personal);
    let result = get_exemption_phase(date("2024-03-01"), 2024, &params, &load_calendar());

    assert!(matches!(
        result,
        Err(AssessmentError::InvalidArgument { .. })
    ));
}

#[test]
fn test_error_missing_config_directory() {
    let result = ConfigLoader::load("./config/does-not-exist");
    assert!(matches!(
        result,
        Err(AssessmentError::ConfigNotFound { .. })
    ));
}

#[test]
fn test_error_record_missing_exemptions() {
    let result: Result<PropertyRecord, _> =
        serde_json::from_value(json!({ "parcel_id": "0504203000" }));
    assert!(result.is_err());
}
