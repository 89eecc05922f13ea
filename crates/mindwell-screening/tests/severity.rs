use mindwell_screening::error::ScreeningError;
use mindwell_screening::scoring::Item;
use mindwell_screening::severity::SeverityBoundary;
use mindwell_screening::{Instrument, InstrumentKind, SeverityBand, all_instruments, classify_severity, get_instrument};

fn band(total: u32, id: &str) -> SeverityBand {
    classify_severity(total, id).unwrap().band
}

#[test]
fn phq9_boundaries() {
    let cases = [
        (0, SeverityBand::Minimal),
        (4, SeverityBand::Minimal),
        (5, SeverityBand::Mild),
        (9, SeverityBand::Mild),
        (10, SeverityBand::Moderate),
        (14, SeverityBand::Moderate),
        (15, SeverityBand::ModeratelySevere),
        (19, SeverityBand::ModeratelySevere),
        (20, SeverityBand::Severe),
        (27, SeverityBand::Severe),
    ];
    for (total, expected) in cases {
        assert_eq!(band(total, "phq9"), expected, "phq9 total {total}");
    }
}

#[test]
fn gad7_boundaries() {
    let cases = [
        (0, SeverityBand::Minimal),
        (4, SeverityBand::Minimal),
        (5, SeverityBand::Mild),
        (9, SeverityBand::Mild),
        (10, SeverityBand::Moderate),
        (14, SeverityBand::Moderate),
        (15, SeverityBand::Severe),
        (21, SeverityBand::Severe),
    ];
    for (total, expected) in cases {
        assert_eq!(band(total, "gad7"), expected, "gad7 total {total}");
    }
}

#[test]
fn totals_beyond_range_fall_into_open_ended_band() {
    assert_eq!(band(28, "phq9"), SeverityBand::Severe);
    assert_eq!(band(100, "gad7"), SeverityBand::Severe);
}

#[test]
fn unknown_instrument_is_an_error() {
    assert_eq!(
        classify_severity(5, "bdi2"),
        Err(ScreeningError::UnknownInstrument("bdi2".to_string()))
    );
}

#[test]
fn guidance_key_names_instrument_and_band() {
    let interpretation = classify_severity(17, "phq9").unwrap();
    assert_eq!(interpretation.guidance_key, "phq9.moderately_severe");
    assert!(interpretation.guidance.contains("significant depression"));

    let interpretation = classify_severity(3, "gad7").unwrap();
    assert_eq!(interpretation.guidance_key, "gad7.minimal");
    assert!(interpretation.guidance.contains("minimal anxiety"));
}

#[test]
fn gad7_has_no_moderately_severe_band() {
    let gad7 = InstrumentKind::Gad7.instrument();
    assert!(gad7.severity_bands().iter().all(|b| b.band != SeverityBand::ModeratelySevere));
}

#[test]
fn tables_partition_the_score_range() {
    for instrument in all_instruments() {
        let bands = instrument.severity_bands();
        assert_eq!(bands[0].lower, 0, "{}", instrument.id());
        for pair in bands.windows(2) {
            assert_eq!(pair[0].upper + 1, pair[1].lower, "{}", instrument.id());
            assert!(pair[0].band < pair[1].band, "{}", instrument.id());
        }
        assert_eq!(bands[bands.len() - 1].upper, instrument.max_total());
        for total in 0..=instrument.max_total() {
            assert_eq!(bands.iter().filter(|b| b.contains(total)).count(), 1);
        }
    }
}

#[test]
fn registry_lookup() {
    assert_eq!(get_instrument("phq9").unwrap().item_count(), 9);
    assert_eq!(get_instrument("gad7").unwrap().item_count(), 7);
    assert!(get_instrument("nope").is_none());
    assert_eq!(InstrumentKind::from_id("gad7").unwrap(), InstrumentKind::Gad7);
}

struct Unbanded;

impl Instrument for Unbanded {
    fn id(&self) -> &str {
        "unbanded"
    }

    fn name(&self) -> &str {
        "Unbanded"
    }

    fn items(&self) -> &[Item] {
        &[]
    }

    fn severity_bands(&self) -> &[SeverityBoundary] {
        &[]
    }
}

#[test]
fn empty_severity_table_is_an_error() {
    assert_eq!(
        Unbanded.classify(0),
        Err(ScreeningError::NoSeverityBands("unbanded".to_string()))
    );
}

#[test]
fn classify_on_instrument_matches_lookup_by_id() {
    let direct = InstrumentKind::Phq9.instrument().classify(12).unwrap();
    assert_eq!(direct, classify_severity(12, "phq9").unwrap());
}
