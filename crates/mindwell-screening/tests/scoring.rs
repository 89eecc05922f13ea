use mindwell_screening::error::ScreeningError;
use mindwell_screening::scoring::{Frequency, response_options};
use mindwell_screening::{InstrumentKind, ResponseSet, SeverityBand, evaluate, score};

#[test]
fn all_zero_responses_are_minimal_for_both_instruments() {
    let phq9 = ResponseSet::from_ordered(InstrumentKind::Phq9, &[0; 9]).unwrap();
    let gad7 = ResponseSet::from_ordered(InstrumentKind::Gad7, &[0; 7]).unwrap();

    let phq9 = evaluate(&phq9).unwrap();
    let gad7 = evaluate(&gad7).unwrap();

    assert_eq!(phq9.total, 0);
    assert_eq!(phq9.band, SeverityBand::Minimal);
    assert_eq!(gad7.total, 0);
    assert_eq!(gad7.band, SeverityBand::Minimal);
}

#[test]
fn all_max_responses_are_severe() {
    let phq9 = evaluate(&ResponseSet::from_ordered(InstrumentKind::Phq9, &[3; 9]).unwrap()).unwrap();
    let gad7 = evaluate(&ResponseSet::from_ordered(InstrumentKind::Gad7, &[3; 7]).unwrap()).unwrap();

    assert_eq!(phq9.total, 27);
    assert_eq!(phq9.max_total, 27);
    assert_eq!(phq9.band, SeverityBand::Severe);
    assert_eq!(gad7.total, 21);
    assert_eq!(gad7.max_total, 21);
    assert_eq!(gad7.band, SeverityBand::Severe);
}

#[test]
fn partial_set_scores_but_does_not_evaluate() {
    let mut responses = ResponseSet::new(InstrumentKind::Gad7);
    responses.record(0, 3).unwrap();
    responses.record(4, 2).unwrap();

    assert_eq!(score(&responses), 5);
    assert!(!responses.is_complete());
    assert_eq!(responses.missing_items(), vec![1, 2, 3, 5, 6]);

    match evaluate(&responses) {
        Err(ScreeningError::Incomplete { instrument_id, missing }) => {
            assert_eq!(instrument_id, "gad7");
            assert_eq!(missing, vec![1, 2, 3, 5, 6]);
        }
        other => panic!("expected Incomplete, got {other:?}"),
    }
}

#[test]
fn out_of_range_score_rejected_on_insert() {
    let mut responses = ResponseSet::new(InstrumentKind::Phq9);
    let err = responses.record(2, 4).unwrap_err();

    assert_eq!(
        err,
        ScreeningError::ScoreOutOfRange {
            instrument_id: "phq9".to_string(),
            item: 2,
            value: 4,
        }
    );
    assert_eq!(responses.answered(), 0);
}

#[test]
fn wide_scores_outside_u8_are_out_of_range() {
    let mut responses = ResponseSet::new(InstrumentKind::Gad7);
    for value in [-1, 256] {
        assert_eq!(
            responses.record_score(0, value),
            Err(ScreeningError::ScoreOutOfRange {
                instrument_id: "gad7".to_string(),
                item: 0,
                value,
            })
        );
    }
    assert_eq!(responses.answered(), 0);

    let err = ResponseSet::from_scores(InstrumentKind::Phq9, [(0usize, 2i64), (8, -3)]).unwrap_err();
    assert!(matches!(err, ScreeningError::ScoreOutOfRange { item: 8, value: -3, .. }));
}

#[test]
fn unknown_item_rejected_on_insert() {
    let mut responses = ResponseSet::new(InstrumentKind::Gad7);
    let err = responses.record(7, 1).unwrap_err();

    assert!(matches!(
        err,
        ScreeningError::ItemOutOfRange { item: 7, item_count: 7, .. }
    ));
}

#[test]
fn rerecording_an_item_overwrites_it() {
    let mut responses = ResponseSet::new(InstrumentKind::Phq9);
    responses.record(0, 3).unwrap();
    responses.record(0, 1).unwrap();

    assert_eq!(responses.get(0), Some(Frequency::SeveralDays));
    assert_eq!(score(&responses), 1);

    assert_eq!(responses.clear(0), Some(Frequency::SeveralDays));
    assert_eq!(score(&responses), 0);
}

#[test]
fn scoring_is_idempotent() {
    let responses =
        ResponseSet::from_ordered(InstrumentKind::Phq9, &[1, 2, 3, 0, 1, 2, 3, 0, 1]).unwrap();

    assert_eq!(score(&responses), score(&responses));
    assert_eq!(evaluate(&responses).unwrap(), evaluate(&responses).unwrap());
}

#[test]
fn frequency_rejects_values_above_three() {
    assert_eq!(Frequency::try_from(3).unwrap(), Frequency::NearlyEveryDay);
    assert!(Frequency::try_from(4).is_err());
}

#[test]
fn frequency_deserializes_from_number() {
    let f: Frequency = serde_json::from_str("2").unwrap();
    assert_eq!(f, Frequency::MoreThanHalfTheDays);
    assert!(serde_json::from_str::<Frequency>("9").is_err());
    assert_eq!(serde_json::to_string(&Frequency::SeveralDays).unwrap(), "1");
}

#[test]
fn response_options_cover_zero_to_three() {
    let options = response_options();
    let values: Vec<u8> = options.iter().map(|o| o.value).collect();
    assert_eq!(values, vec![0, 1, 2, 3]);
    assert_eq!(options[0].label, "Not at all");
    assert_eq!(options[3].label, "Nearly every day");
}
