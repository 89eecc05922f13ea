use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::analytics::{ProblemArea, RiskLevel, derive_problem_areas, derive_risk_level};
use crate::error::ScreeningError;
use crate::guidance::{ActionPlan, DISCLAIMER, action_plan};
use crate::scoring::{ResponseSet, ScoreResult, evaluate};
use crate::solutions::{Solution, derive_solutions};
use crate::InstrumentKind;

/// Everything the results view needs, as structured data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentReport {
    pub depression: ScoreResult,
    pub anxiety: ScoreResult,
    pub problem_areas: Vec<ProblemArea>,
    pub risk_level: RiskLevel,
    pub risk_summary: String,
    pub solutions: Vec<Solution>,
    pub action_plan: ActionPlan,
    pub disclaimer: String,
}

impl AssessmentReport {
    pub fn has_problem_area(&self, area: ProblemArea) -> bool {
        self.problem_areas.contains(&area)
    }
}

/// Score both completed questionnaires and derive the full report.
pub fn assess(depression: &ResponseSet, anxiety: &ResponseSet) -> Result<AssessmentReport, ScreeningError> {
    expect_instrument(depression, InstrumentKind::Phq9)?;
    expect_instrument(anxiety, InstrumentKind::Gad7)?;

    let depression_result = evaluate(depression)?;
    let anxiety_result = evaluate(anxiety)?;

    let problem_areas = derive_problem_areas(depression, anxiety);
    let risk_level = derive_risk_level(depression_result.total, anxiety_result.total);
    let solutions = derive_solutions(&problem_areas, risk_level);

    debug!(
        depression_total = depression_result.total,
        anxiety_total = anxiety_result.total,
        risk = ?risk_level,
        problem_areas = problem_areas.len(),
        solutions = solutions.len(),
        "assessment report assembled"
    );

    Ok(AssessmentReport {
        depression: depression_result,
        anxiety: anxiety_result,
        problem_areas: problem_areas.into_iter().collect(),
        risk_level,
        risk_summary: risk_level.summary().to_string(),
        solutions,
        action_plan: action_plan(risk_level),
        disclaimer: DISCLAIMER.to_string(),
    })
}

fn expect_instrument(responses: &ResponseSet, expected: InstrumentKind) -> Result<(), ScreeningError> {
    if responses.instrument() != expected {
        return Err(ScreeningError::InstrumentMismatch {
            expected: expected.id().to_string(),
            actual: responses.instrument().id().to_string(),
        });
    }
    Ok(())
}
