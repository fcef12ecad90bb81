//! Calculation logic for the assessing core.
//!
//! This module contains the fiscal calendar, exemption phase resolution,
//! exemption aggregation across types, tax value formatting, and the tax
//! section calculations built from them.

mod exemption_phase;
mod exemption_phases;
mod fiscal_year;
mod property_tax;
mod tax_value;

pub use exemption_phase::{ExemptionPhaseParams, get_exemption_phase};
pub use exemption_phases::get_exemption_phases;
pub use fiscal_year::{
    BillPeriod, FISCAL_YEAR_START_MONTH, FiscalYear, get_fiscal_year, is_prelim_period,
};
pub use property_tax::{format_tax_figures, get_property_tax_calculations};
pub use tax_value::{NOT_APPLICABLE, format_currency, format_optional_tax_value, format_tax_value};
