use mindwell_screening::error::ScreeningError;
use mindwell_screening::{AssessmentSession, InstrumentKind, RiskLevel, WizardPhase, WizardState};

#[test]
fn wizard_walks_through_both_instruments() {
    let mut state = WizardState::default();
    assert_eq!(state.phase, WizardPhase::Intro);

    state = state.next();
    assert_eq!(state.current_item(), Some((InstrumentKind::Phq9, 0)));

    for _ in 0..8 {
        state = state.next();
    }
    assert_eq!(state.current_item(), Some((InstrumentKind::Phq9, 8)));

    state = state.next();
    assert_eq!(state.current_item(), Some((InstrumentKind::Gad7, 0)));

    for _ in 0..6 {
        state = state.next();
    }
    assert_eq!(state.index, 6);

    state = state.next();
    assert_eq!(state.phase, WizardPhase::Results);
    assert_eq!(state.next(), state);
}

#[test]
fn previous_crosses_instrument_boundaries() {
    let first_anxiety = WizardState {
        phase: WizardPhase::Anxiety,
        index: 0,
    };
    assert_eq!(first_anxiety.previous().current_item(), Some((InstrumentKind::Phq9, 8)));

    let first_depression = WizardState {
        phase: WizardPhase::Depression,
        index: 0,
    };
    assert_eq!(first_depression.previous().phase, WizardPhase::Intro);
    assert_eq!(WizardState::default().previous(), WizardState::default());
}

#[test]
fn progress_percentages() {
    let state = WizardState {
        phase: WizardPhase::Depression,
        index: 3,
    };
    assert_eq!(state.question_progress(), 33);
    assert_eq!(state.step_progress(), 33);

    let state = WizardState {
        phase: WizardPhase::Anxiety,
        index: 0,
    };
    assert_eq!(state.question_progress(), 0);
    assert_eq!(state.step_progress(), 67);

    assert_eq!(WizardState::default().step_progress(), 0);
}

#[test]
fn session_refuses_to_advance_without_answer() {
    let mut session = AssessmentSession::new();
    session.next().unwrap();

    assert!(!session.can_proceed());
    assert_eq!(session.next(), Err(ScreeningError::Unanswered));
    assert_eq!(session.state().index, 0);

    session.answer(2).unwrap();
    assert!(session.can_proceed());
    assert_eq!(session.next().unwrap().index, 1);
}

#[test]
fn session_rejects_invalid_answer() {
    let mut session = AssessmentSession::new();
    assert_eq!(session.answer(1), Err(ScreeningError::NoActiveQuestion));

    session.next().unwrap();
    assert!(matches!(
        session.answer(7),
        Err(ScreeningError::ScoreOutOfRange { value: 7, .. })
    ));
}

#[test]
fn report_only_available_at_results() {
    let mut session = AssessmentSession::new();
    assert_eq!(session.report(), Err(ScreeningError::NotFinished));

    session.next().unwrap();
    let depression = [2, 2, 1, 1, 1, 1, 1, 0, 0];
    for value in depression {
        assert!(session.current_question().is_some());
        session.answer(value).unwrap();
        session.next().unwrap();
    }
    assert_eq!(session.state().phase, WizardPhase::Anxiety);
    assert_eq!(
        session.current_question().unwrap().prompt,
        "Feeling nervous, anxious, or on edge"
    );

    for _ in 0..7 {
        session.answer(1).unwrap();
        session.next().unwrap();
    }
    assert_eq!(session.state().phase, WizardPhase::Results);

    let report = session.report().unwrap();
    assert_eq!(report.depression.total, 9);
    assert_eq!(report.anxiety.total, 7);
    assert_eq!(report.risk_level, RiskLevel::Mild);
}

#[test]
fn going_back_keeps_answers() {
    let mut session = AssessmentSession::new();
    session.next().unwrap();
    session.answer(3).unwrap();
    session.next().unwrap();
    session.previous();

    assert_eq!(session.state().index, 0);
    assert_eq!(session.current_answer().map(u8::from), Some(3));
    assert_eq!(session.depression().answered(), 1);
}
