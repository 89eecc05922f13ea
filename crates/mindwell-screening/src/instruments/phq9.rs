use crate::analytics::ProblemArea;
use crate::scoring::Item;
use crate::severity::{SeverityBand, SeverityBoundary};
use crate::Instrument;

/// PHQ-9: Patient Health Questionnaire, depression module.
/// 9 items, each rated 0–3. Total 0–27.
pub struct Phq9;

/// Index of the self-harm item. Flagged at any endorsement.
pub const SELF_HARM_ITEM: usize = 8;

const BANDS: [SeverityBoundary; 5] = [
    SeverityBoundary::new(
        0,
        4,
        SeverityBand::Minimal,
        "Your responses suggest minimal depression symptoms. Continue maintaining good mental health practices.",
    ),
    SeverityBoundary::new(
        5,
        9,
        SeverityBand::Mild,
        "You may be experiencing mild depression symptoms. Consider speaking with a counselor for support.",
    ),
    SeverityBoundary::new(
        10,
        14,
        SeverityBand::Moderate,
        "Your responses indicate moderate depression symptoms. We recommend professional consultation.",
    ),
    SeverityBoundary::new(
        15,
        19,
        SeverityBand::ModeratelySevere,
        "You may be experiencing significant depression symptoms. Please consider seeking professional help.",
    ),
    SeverityBoundary::new(
        20,
        27,
        SeverityBand::Severe,
        "Your responses suggest severe depression symptoms. We strongly recommend immediate professional support.",
    ),
];

impl Instrument for Phq9 {
    fn id(&self) -> &str {
        "phq9"
    }

    fn name(&self) -> &str {
        "PHQ-9"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            let items = [
                (
                    "interest",
                    "Little interest or pleasure in doing things",
                    ProblemArea::LossOfInterest,
                ),
                (
                    "mood",
                    "Feeling down, depressed, or hopeless",
                    ProblemArea::DepressedMood,
                ),
                (
                    "sleep",
                    "Trouble falling or staying asleep, or sleeping too much",
                    ProblemArea::SleepDisturbances,
                ),
                (
                    "energy",
                    "Feeling tired or having little energy",
                    ProblemArea::LowEnergy,
                ),
                (
                    "appetite",
                    "Poor appetite or overeating",
                    ProblemArea::AppetiteChanges,
                ),
                (
                    "self_worth",
                    "Feeling bad about yourself or that you are a failure or have let yourself or your family down",
                    ProblemArea::LowSelfEsteem,
                ),
                (
                    "concentration",
                    "Trouble concentrating on things, such as reading the newspaper or watching television",
                    ProblemArea::ConcentrationDifficulties,
                ),
                (
                    "psychomotor",
                    "Moving or speaking so slowly that other people could have noticed, or the opposite being so fidgety or restless that you have been moving around a lot more than usual",
                    ProblemArea::PsychomotorChanges,
                ),
                (
                    "self_harm",
                    "Thoughts that you would be better off dead, or of hurting yourself",
                    ProblemArea::SuicidalThoughts,
                ),
            ];

            items
                .iter()
                .enumerate()
                .map(|(index, (id, prompt, area))| Item {
                    id: id.to_string(),
                    prompt: prompt.to_string(),
                    problem_area: *area,
                    activation_threshold: if index == SELF_HARM_ITEM { 1 } else { 2 },
                })
                .collect()
        });
        &ITEMS
    }

    fn severity_bands(&self) -> &[SeverityBoundary] {
        &BANDS
    }
}
