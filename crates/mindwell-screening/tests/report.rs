use mindwell_screening::analytics::{ProblemArea, RiskLevel};
use mindwell_screening::error::ScreeningError;
use mindwell_screening::{InstrumentKind, ResponseSet, SeverityBand, assess};

fn phq9(scores: [u8; 9]) -> ResponseSet {
    ResponseSet::from_ordered(InstrumentKind::Phq9, &scores).unwrap()
}

fn gad7(scores: [u8; 7]) -> ResponseSet {
    ResponseSet::from_ordered(InstrumentKind::Gad7, &scores).unwrap()
}

#[test]
fn mild_end_to_end() {
    let report = assess(&phq9([2, 2, 1, 1, 1, 1, 1, 0, 0]), &gad7([1; 7])).unwrap();

    assert_eq!(report.depression.total, 9);
    assert_eq!(report.depression.band, SeverityBand::Mild);
    assert_eq!(report.anxiety.total, 7);
    assert_eq!(report.anxiety.band, SeverityBand::Mild);
    assert_eq!(report.risk_level, RiskLevel::Mild);

    assert!(report.has_problem_area(ProblemArea::LossOfInterest));
    assert!(report.has_problem_area(ProblemArea::DepressedMood));
    assert!(!report.has_problem_area(ProblemArea::SleepDisturbances));
    assert_eq!(report.problem_areas.len(), 2);

    let labels: Vec<&str> = report.problem_areas.iter().map(|a| a.label()).collect();
    assert_eq!(
        labels,
        vec!["Loss of interest in activities", "Feeling down, depressed, or hopeless"]
    );

    // Neither total is above 9 and no solution-bearing area is active.
    assert!(report.solutions.is_empty());
    assert!(report.action_plan.this_week.iter().any(|s| s.contains("counseling session")));
    assert!(!report.action_plan.priority.iter().any(|s| s.starts_with("Urgent")));
}

#[test]
fn high_risk_report_includes_urgent_steps() {
    let report = assess(&phq9([3, 3, 3, 2, 2, 2, 1, 0, 1]), &gad7([0; 7])).unwrap();

    assert_eq!(report.depression.total, 17);
    assert_eq!(report.depression.band, SeverityBand::ModeratelySevere);
    assert_eq!(report.risk_level, RiskLevel::High);
    assert!(report.has_problem_area(ProblemArea::SuicidalThoughts));
    assert!(report.action_plan.priority[0].starts_with("Urgent"));
    assert_eq!(report.action_plan.priority.len(), 5);

    let problems: Vec<&str> = report.solutions.iter().map(|s| s.problem.as_str()).collect();
    assert_eq!(
        problems,
        vec!["Sleep Issues", "Low Energy", "Self-Esteem", "Academic Stress"]
    );
}

#[test]
fn low_risk_report_skips_counseling_suggestion() {
    let report = assess(&phq9([0; 9]), &gad7([0; 7])).unwrap();

    assert_eq!(report.risk_level, RiskLevel::Low);
    assert!(report.problem_areas.is_empty());
    assert_eq!(report.action_plan.priority.len(), 3);
    assert_eq!(report.action_plan.this_week.len(), 3);
    assert!(report.risk_summary.contains("good condition"));
}

#[test]
fn incomplete_set_is_rejected() {
    let mut depression = phq9([1; 9]);
    depression.clear(4);

    let err = assess(&depression, &gad7([1; 7])).unwrap_err();
    assert!(matches!(err, ScreeningError::Incomplete { ref missing, .. } if missing == &vec![4]));
}

#[test]
fn swapped_instruments_are_rejected() {
    let err = assess(&gad7([0; 7]), &phq9([0; 9])).unwrap_err();
    assert_eq!(
        err,
        ScreeningError::InstrumentMismatch {
            expected: "phq9".to_string(),
            actual: "gad7".to_string(),
        }
    );
}

#[test]
fn report_serializes_snake_case() {
    let report = assess(&phq9([3; 9]), &gad7([3; 7])).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["risk_level"], "high");
    assert_eq!(json["depression"]["band"], "severe");
    assert_eq!(json["depression"]["guidance_key"], "phq9.severe");
    assert_eq!(json["problem_areas"][0], "loss_of_interest");
}
