//! Problem-area and overall-risk derivation.
//!
//! Problem areas look at individual item scores; risk looks only at the two
//! instrument totals and is independent of the per-instrument severity bands.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::Instrument;
use crate::scoring::ResponseSet;

/// Symptom domain flagged when its item crosses the activation threshold.
/// Declaration order follows the questionnaires (PHQ-9 first, then GAD-7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ProblemArea {
    LossOfInterest,
    DepressedMood,
    SleepDisturbances,
    LowEnergy,
    AppetiteChanges,
    LowSelfEsteem,
    ConcentrationDifficulties,
    PsychomotorChanges,
    SuicidalThoughts,
    Nervousness,
    UncontrollableWorry,
    ExcessiveWorry,
    DifficultyRelaxing,
    Restlessness,
    Irritability,
    AnticipatoryFear,
}

impl ProblemArea {
    pub fn label(self) -> &'static str {
        match self {
            ProblemArea::LossOfInterest => "Loss of interest in activities",
            ProblemArea::DepressedMood => "Feeling down, depressed, or hopeless",
            ProblemArea::SleepDisturbances => "Sleep disturbances",
            ProblemArea::LowEnergy => "Low energy and fatigue",
            ProblemArea::AppetiteChanges => "Appetite changes",
            ProblemArea::LowSelfEsteem => "Low self-esteem and guilt",
            ProblemArea::ConcentrationDifficulties => "Concentration difficulties",
            ProblemArea::PsychomotorChanges => "Psychomotor changes",
            ProblemArea::SuicidalThoughts => "Suicidal thoughts",
            ProblemArea::Nervousness => "Persistent nervousness and anxiety",
            ProblemArea::UncontrollableWorry => "Uncontrollable worry",
            ProblemArea::ExcessiveWorry => "Excessive worry about various issues",
            ProblemArea::DifficultyRelaxing => "Difficulty relaxing",
            ProblemArea::Restlessness => "Restlessness and agitation",
            ProblemArea::Irritability => "Irritability",
            ProblemArea::AnticipatoryFear => "Fear and anticipatory anxiety",
        }
    }
}

/// Flag every item whose score meets its threshold. Items without an answer
/// never activate.
pub fn derive_problem_areas(depression: &ResponseSet, anxiety: &ResponseSet) -> BTreeSet<ProblemArea> {
    [depression, anxiety]
        .into_iter()
        .flat_map(|responses| {
            let items = responses.instrument().instrument().items();
            responses.iter().filter_map(move |(index, frequency)| {
                let item = items.get(index)?;
                (frequency.points() >= item.activation_threshold).then_some(item.problem_area)
            })
        })
        .collect()
}

/// Overall urgency across both instruments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Mild,
    Moderate,
    High,
}

impl RiskLevel {
    fn from_total(total: u32) -> Self {
        match total {
            15.. => RiskLevel::High,
            10.. => RiskLevel::Moderate,
            5.. => RiskLevel::Mild,
            _ => RiskLevel::Low,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Mild => "Mild",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            RiskLevel::High => {
                "Your responses indicate significant mental health concerns that require immediate attention."
            }
            RiskLevel::Moderate => {
                "You're experiencing notable mental health symptoms that would benefit from professional support."
            }
            RiskLevel::Mild => {
                "You're showing some signs of mental health concerns that can be managed with proper self-care."
            }
            RiskLevel::Low => {
                "Your mental health appears to be in good condition. Continue your current wellness practices."
            }
        }
    }
}

/// The worse of the two totals governs.
pub fn derive_risk_level(depression_total: u32, anxiety_total: u32) -> RiskLevel {
    RiskLevel::from_total(depression_total).max(RiskLevel::from_total(anxiety_total))
}
