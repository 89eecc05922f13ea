use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::analytics::RiskLevel;

/// Next steps shown beneath the results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ActionPlan {
    /// Next 24–48 hours.
    pub priority: Vec<String>,
    pub this_week: Vec<String>,
    pub regional_note: String,
}

const URGENT_ACTIONS: [&str; 2] = [
    "Urgent: Contact our crisis support hotline or emergency services",
    "Schedule an immediate virtual counseling session",
];

const PRIORITY_ACTIONS: [&str; 3] = [
    "Talk to our 24/7 AI counselor for immediate support and coping strategies",
    "Join our anonymous support forums to connect with peers facing similar challenges",
    "Download our mobile app for daily mood tracking and guided exercises",
];

const WEEKLY_ACTIONS: [&str; 3] = [
    "Explore our curated resource library for specific techniques",
    "Practice daily mindfulness exercises (start with 5 minutes)",
    "Establish a consistent sleep and meal schedule",
];

const COUNSELING_ACTION: &str =
    "Schedule a virtual counseling session with our qualified professionals";

const REGIONAL_NOTE: &str = "For J&K Students: We understand the unique challenges you face, \
including academic pressure, regional stressors, and cultural expectations. Our platform provides \
culturally sensitive support with counselors who understand your context. Resources are available \
in English, Hindi, and Urdu to ensure you feel comfortable and understood.";

pub const DISCLAIMER: &str = "This assessment is for informational purposes only and does not \
replace professional medical advice. If you're experiencing thoughts of self-harm, please contact \
emergency services immediately.";

pub fn action_plan(risk: RiskLevel) -> ActionPlan {
    let mut priority = Vec::new();
    if risk == RiskLevel::High {
        priority.extend(URGENT_ACTIONS.iter().map(|s| s.to_string()));
    }
    priority.extend(PRIORITY_ACTIONS.iter().map(|s| s.to_string()));

    let mut this_week: Vec<String> = WEEKLY_ACTIONS.iter().map(|s| s.to_string()).collect();
    if risk != RiskLevel::Low {
        this_week.push(COUNSELING_ACTION.to_string());
    }

    ActionPlan {
        priority,
        this_week,
        regional_note: REGIONAL_NOTE.to_string(),
    }
}
