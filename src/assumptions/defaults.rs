//! Default planning assumptions
//!
//! One documented table of fallback values applied once, during input
//! construction. Call sites never invent their own defaults.

use serde::{Deserialize, Serialize};

use crate::input::Ratio;

/// Fallback values for optional scenario fields.
///
/// Benefit amounts are the current maximum monthly CPP and OAS payments;
/// the horizon and rate defaults match the planning conventions used by
/// the input wizard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanningDefaults {
    /// Monthly CPP benefit
    pub cpp_benefit: f64,

    /// Monthly OAS benefit
    pub oas_benefit: f64,

    /// Decumulation horizon in years
    pub years_in_retirement: u32,

    /// Annual inflation applied to the retirement income target
    pub inflation_rate: Ratio,

    /// Annual growth applied to working income
    pub income_growth_rate: Ratio,
}

impl Default for PlanningDefaults {
    fn default() -> Self {
        Self {
            cpp_benefit: 1433.00,
            oas_benefit: 727.67,
            years_in_retirement: 25,
            inflation_rate: Ratio::new(0.025),
            income_growth_rate: Ratio::new(0.021),
        }
    }
}

/// Investment approach presets offered by the input wizard.
///
/// Each resolves to a pre-retirement and a retirement-phase return rate;
/// the presets use the same rate for both phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReturnProfile {
    /// 4–5% range
    Conservative,
    /// 6–7% range
    Balanced,
    /// 8–9% range
    Growth,
}

impl ReturnProfile {
    /// Annual return used during the accumulation phase.
    pub fn pre_retirement_return(self) -> Ratio {
        match self {
            ReturnProfile::Conservative => Ratio::new(0.045),
            ReturnProfile::Balanced => Ratio::new(0.065),
            ReturnProfile::Growth => Ratio::new(0.085),
        }
    }

    /// Annual return used during the decumulation phase.
    pub fn retirement_return(self) -> Ratio {
        // Presets keep the same allocation through retirement.
        self.pre_retirement_return()
    }
}
