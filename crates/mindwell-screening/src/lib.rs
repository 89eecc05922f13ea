//! mindwell-screening
//!
//! PHQ-9 / GAD-7 self-assessment scoring and interpretation. Pure data and
//! pure functions: instrument definitions, severity tables, problem-area and
//! risk derivation, the solution catalog, and the question-by-question
//! wizard that drives a session.

pub mod analytics;
pub mod error;
pub mod guidance;
pub mod instruments;
pub mod report;
pub mod scoring;
pub mod severity;
pub mod solutions;
pub mod wizard;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use error::ScreeningError;
use scoring::Item;
use severity::{Interpretation, SeverityBoundary};

pub use analytics::{ProblemArea, RiskLevel, derive_problem_areas, derive_risk_level};
pub use report::{AssessmentReport, assess};
pub use scoring::{Frequency, ResponseSet, ScoreResult, evaluate, score};
pub use severity::{SeverityBand, classify_severity};
pub use solutions::{Solution, derive_solutions};
pub use wizard::{AssessmentSession, WizardPhase, WizardState};

/// Trait implemented by each screening questionnaire.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "phq9", "gad7").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "PHQ-9").
    fn name(&self) -> &str;

    /// Items in presentation order. The index of an item is significant: it
    /// selects the problem area the item feeds.
    fn items(&self) -> &[Item];

    /// Contiguous severity boundaries covering `0..=max_total()`, ascending.
    fn severity_bands(&self) -> &[SeverityBoundary];

    fn item_count(&self) -> usize {
        self.items().len()
    }

    fn max_total(&self) -> u32 {
        self.items().len() as u32 * Frequency::MAX
    }

    /// Map a total onto this instrument's severity table. Totals beyond the
    /// last boundary land in the last (open-ended) band.
    fn classify(&self, total: u32) -> Result<Interpretation, ScreeningError> {
        let bands = self.severity_bands();
        let boundary = bands
            .iter()
            .find(|b| total <= b.upper)
            .or_else(|| bands.last())
            .ok_or_else(|| ScreeningError::NoSeverityBands(self.id().to_string()))?;

        Ok(Interpretation {
            band: boundary.band,
            guidance_key: format!("{}.{}", self.id(), boundary.band.key()),
            guidance: boundary.guidance.to_string(),
        })
    }
}

/// Typed tag for the two supported questionnaires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InstrumentKind {
    /// 9-item depression screen.
    Phq9,
    /// 7-item anxiety screen.
    Gad7,
}

impl InstrumentKind {
    pub fn id(self) -> &'static str {
        match self {
            InstrumentKind::Phq9 => "phq9",
            InstrumentKind::Gad7 => "gad7",
        }
    }

    pub fn from_id(id: &str) -> Result<Self, ScreeningError> {
        match id {
            "phq9" => Ok(InstrumentKind::Phq9),
            "gad7" => Ok(InstrumentKind::Gad7),
            other => Err(ScreeningError::UnknownInstrument(other.to_string())),
        }
    }

    pub fn instrument(self) -> &'static dyn Instrument {
        match self {
            InstrumentKind::Phq9 => &instruments::phq9::Phq9,
            InstrumentKind::Gad7 => &instruments::gad7::Gad7,
        }
    }
}

/// Return all registered instruments, in the order a session presents them.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::phq9::Phq9),
        Box::new(instruments::gad7::Gad7),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}
