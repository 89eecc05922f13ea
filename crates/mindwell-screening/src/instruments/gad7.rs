use crate::analytics::ProblemArea;
use crate::scoring::Item;
use crate::severity::{SeverityBand, SeverityBoundary};
use crate::Instrument;

/// GAD-7: Generalized Anxiety Disorder scale.
/// 7 items, each rated 0–3. Total 0–21. No moderately-severe band.
pub struct Gad7;

const BANDS: [SeverityBoundary; 4] = [
    SeverityBoundary::new(
        0,
        4,
        SeverityBand::Minimal,
        "Your responses suggest minimal anxiety symptoms. Keep up your current coping strategies.",
    ),
    SeverityBoundary::new(
        5,
        9,
        SeverityBand::Mild,
        "You may be experiencing mild anxiety symptoms. Consider stress management techniques or counseling.",
    ),
    SeverityBoundary::new(
        10,
        14,
        SeverityBand::Moderate,
        "Your responses indicate moderate anxiety symptoms. Professional support may be beneficial.",
    ),
    SeverityBoundary::new(
        15,
        21,
        SeverityBand::Severe,
        "You may be experiencing significant anxiety symptoms. We recommend seeking professional help.",
    ),
];

impl Instrument for Gad7 {
    fn id(&self) -> &str {
        "gad7"
    }

    fn name(&self) -> &str {
        "GAD-7"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            let items = [
                ("nervous", "Feeling nervous, anxious, or on edge", ProblemArea::Nervousness),
                (
                    "uncontrolled_worry",
                    "Not being able to stop or control worrying",
                    ProblemArea::UncontrollableWorry,
                ),
                (
                    "excessive_worry",
                    "Worrying too much about different things",
                    ProblemArea::ExcessiveWorry,
                ),
                ("relaxing", "Trouble relaxing", ProblemArea::DifficultyRelaxing),
                (
                    "restless",
                    "Being so restless that it is hard to sit still",
                    ProblemArea::Restlessness,
                ),
                ("irritable", "Becoming easily annoyed or irritable", ProblemArea::Irritability),
                (
                    "afraid",
                    "Feeling afraid, as if something awful might happen",
                    ProblemArea::AnticipatoryFear,
                ),
            ];

            items
                .iter()
                .map(|(id, prompt, area)| Item {
                    id: id.to_string(),
                    prompt: prompt.to_string(),
                    problem_area: *area,
                    activation_threshold: 2,
                })
                .collect()
        });
        &ITEMS
    }

    fn severity_bands(&self) -> &[SeverityBoundary] {
        &BANDS
    }
}
