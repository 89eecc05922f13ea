use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::analytics::{ProblemArea, RiskLevel};

/// Personalized advice for one problem, with suggested library resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Solution {
    pub problem: String,
    pub advice: String,
    pub resources: Vec<String>,
}

enum Trigger {
    AnyOf(&'static [ProblemArea]),
    /// Either instrument total above 9, i.e. overall risk at least moderate.
    RiskAtLeast(RiskLevel),
}

impl Trigger {
    fn matches(&self, problem_areas: &BTreeSet<ProblemArea>, risk: RiskLevel) -> bool {
        match self {
            Trigger::AnyOf(areas) => areas.iter().any(|a| problem_areas.contains(a)),
            Trigger::RiskAtLeast(level) => risk >= *level,
        }
    }
}

struct SolutionEntry {
    trigger: Trigger,
    problem: &'static str,
    advice: &'static str,
    resources: &'static [&'static str],
}

const CATALOG: [SolutionEntry; 6] = [
    SolutionEntry {
        trigger: Trigger::AnyOf(&[ProblemArea::SleepDisturbances]),
        problem: "Sleep Issues",
        advice: "Establish a consistent sleep schedule, avoid screens 1 hour before bed, practice relaxation techniques",
        resources: &["Sleep Hygiene Guide", "Bedtime Meditation Audio"],
    },
    SolutionEntry {
        trigger: Trigger::AnyOf(&[ProblemArea::ConcentrationDifficulties]),
        problem: "Focus & Concentration",
        advice: "Break tasks into smaller chunks, use the Pomodoro technique, minimize distractions during study",
        resources: &["Study Techniques Guide", "Mindfulness for Focus"],
    },
    SolutionEntry {
        trigger: Trigger::AnyOf(&[ProblemArea::Nervousness, ProblemArea::UncontrollableWorry]),
        problem: "Anxiety & Worry",
        advice: "Practice deep breathing exercises, challenge negative thoughts, engage in regular physical activity",
        resources: &["Anxiety Management Toolkit", "Breathing Exercises Video"],
    },
    SolutionEntry {
        trigger: Trigger::AnyOf(&[ProblemArea::LowEnergy]),
        problem: "Low Energy",
        advice: "Maintain regular exercise routine, ensure proper nutrition, consider vitamin D supplementation",
        resources: &["Energy Boosting Tips", "Nutrition for Mental Health"],
    },
    SolutionEntry {
        trigger: Trigger::AnyOf(&[ProblemArea::LowSelfEsteem]),
        problem: "Self-Esteem",
        advice: "Practice self-compassion, keep a gratitude journal, challenge self-critical thoughts",
        resources: &["Self-Compassion Exercises", "Building Confidence Guide"],
    },
    SolutionEntry {
        trigger: Trigger::RiskAtLeast(RiskLevel::Moderate),
        problem: "Academic Stress",
        advice: "Connect with academic advisors, join study groups, practice time management techniques",
        resources: &["Academic Support Resources", "Stress Management for Students"],
    },
];

/// Every catalog entry whose trigger matches, in catalog order.
pub fn derive_solutions(problem_areas: &BTreeSet<ProblemArea>, risk: RiskLevel) -> Vec<Solution> {
    CATALOG
        .iter()
        .filter(|entry| entry.trigger.matches(problem_areas, risk))
        .map(|entry| Solution {
            problem: entry.problem.to_string(),
            advice: entry.advice.to_string(),
            resources: entry.resources.iter().map(|r| r.to_string()).collect(),
        })
        .collect()
}
