use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ScreeningError;
use crate::{Instrument, InstrumentKind};

/// Qualitative severity derived from an instrument total. Ordered from
/// least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SeverityBand {
    Minimal,
    Mild,
    Moderate,
    /// PHQ-9 only.
    ModeratelySevere,
    Severe,
}

impl SeverityBand {
    pub fn key(self) -> &'static str {
        match self {
            SeverityBand::Minimal => "minimal",
            SeverityBand::Mild => "mild",
            SeverityBand::Moderate => "moderate",
            SeverityBand::ModeratelySevere => "moderately_severe",
            SeverityBand::Severe => "severe",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SeverityBand::Minimal => "Minimal",
            SeverityBand::Mild => "Mild",
            SeverityBand::Moderate => "Moderate",
            SeverityBand::ModeratelySevere => "Moderately Severe",
            SeverityBand::Severe => "Severe",
        }
    }
}

/// One row of a severity table. Both bounds are inclusive.
#[derive(Debug, Clone, Copy)]
pub struct SeverityBoundary {
    pub lower: u32,
    pub upper: u32,
    pub band: SeverityBand,
    pub guidance: &'static str,
}

impl SeverityBoundary {
    pub const fn new(lower: u32, upper: u32, band: SeverityBand, guidance: &'static str) -> Self {
        Self {
            lower,
            upper,
            band,
            guidance,
        }
    }

    pub fn contains(&self, total: u32) -> bool {
        (self.lower..=self.upper).contains(&total)
    }
}

/// Result of looking a total up in a severity table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Interpretation {
    pub band: SeverityBand,
    /// Stable key for localized guidance, e.g. `phq9.mild`.
    pub guidance_key: String,
    pub guidance: String,
}

/// Classify a total for the instrument named by `instrument_id`.
pub fn classify_severity(total: u32, instrument_id: &str) -> Result<Interpretation, ScreeningError> {
    let kind = InstrumentKind::from_id(instrument_id)?;
    kind.instrument().classify(total)
}
