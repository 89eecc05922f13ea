use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScreeningError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("{0}: severity table has no bands")]
    NoSeverityBands(String),

    #[error("{instrument_id}: score {value} for item {item} is outside range [0, 3]")]
    ScoreOutOfRange {
        instrument_id: String,
        item: usize,
        value: i64,
    },

    #[error("{instrument_id}: item {item} does not exist (instrument has {item_count} items)")]
    ItemOutOfRange {
        instrument_id: String,
        item: usize,
        item_count: usize,
    },

    #[error("{instrument_id}: responses incomplete, missing items {missing:?}")]
    Incomplete {
        instrument_id: String,
        missing: Vec<usize>,
    },

    #[error("expected {expected} responses, got {actual}")]
    InstrumentMismatch { expected: String, actual: String },

    #[error("current question has not been answered")]
    Unanswered,

    #[error("no question is active in the current phase")]
    NoActiveQuestion,

    #[error("results are not available until both questionnaires are finished")]
    NotFinished,
}
