use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::analytics::ProblemArea;
use crate::error::ScreeningError;
use crate::severity::SeverityBand;
use crate::{Instrument, InstrumentKind};

/// How often a symptom bothered the respondent over the last two weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Frequency {
    NotAtAll,
    SeveralDays,
    MoreThanHalfTheDays,
    NearlyEveryDay,
}

impl Frequency {
    pub const MAX: u32 = 3;

    pub const ALL: [Frequency; 4] = [
        Frequency::NotAtAll,
        Frequency::SeveralDays,
        Frequency::MoreThanHalfTheDays,
        Frequency::NearlyEveryDay,
    ];

    pub fn points(self) -> u8 {
        match self {
            Frequency::NotAtAll => 0,
            Frequency::SeveralDays => 1,
            Frequency::MoreThanHalfTheDays => 2,
            Frequency::NearlyEveryDay => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Frequency::NotAtAll => "Not at all",
            Frequency::SeveralDays => "Several days",
            Frequency::MoreThanHalfTheDays => "More than half the days",
            Frequency::NearlyEveryDay => "Nearly every day",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("response score {0} is outside range [0, 3]")]
pub struct InvalidFrequency(pub u8);

impl TryFrom<u8> for Frequency {
    type Error = InvalidFrequency;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Frequency::NotAtAll),
            1 => Ok(Frequency::SeveralDays),
            2 => Ok(Frequency::MoreThanHalfTheDays),
            3 => Ok(Frequency::NearlyEveryDay),
            other => Err(InvalidFrequency(other)),
        }
    }
}

impl From<Frequency> for u8 {
    fn from(f: Frequency) -> Self {
        f.points()
    }
}

/// One selectable answer, as shown next to every question.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResponseOption {
    pub value: u8,
    pub label: String,
}

pub fn response_options() -> Vec<ResponseOption> {
    Frequency::ALL
        .iter()
        .map(|f| ResponseOption {
            value: f.points(),
            label: f.label().to_string(),
        })
        .collect()
}

/// A single questionnaire item.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    pub id: String,
    pub prompt: String,
    pub problem_area: ProblemArea,
    /// Minimum score at which `problem_area` is flagged.
    pub activation_threshold: u8,
}

/// Answers collected so far for one instrument.
///
/// Values are validated on insertion, so everything stored is a legal
/// response for a legal item. The set may be partial while the user is
/// still working through the questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseSet {
    instrument: InstrumentKind,
    responses: BTreeMap<usize, Frequency>,
}

impl ResponseSet {
    pub fn new(instrument: InstrumentKind) -> Self {
        Self {
            instrument,
            responses: BTreeMap::new(),
        }
    }

    /// Build a set from raw `index -> score` pairs, validating each one.
    pub fn from_scores<V: Into<i64>>(
        instrument: InstrumentKind,
        scores: impl IntoIterator<Item = (usize, V)>,
    ) -> Result<Self, ScreeningError> {
        let mut set = Self::new(instrument);
        for (item, value) in scores {
            set.record_score(item, value.into())?;
        }
        Ok(set)
    }

    /// Build a set from scores listed in item order.
    pub fn from_ordered(instrument: InstrumentKind, scores: &[u8]) -> Result<Self, ScreeningError> {
        Self::from_scores(instrument, scores.iter().copied().enumerate())
    }

    pub fn instrument(&self) -> InstrumentKind {
        self.instrument
    }

    pub fn item_count(&self) -> usize {
        self.instrument.instrument().item_count()
    }

    /// Record (or overwrite) the answer for `item`.
    pub fn record(&mut self, item: usize, value: u8) -> Result<(), ScreeningError> {
        self.record_score(item, i64::from(value))
    }

    /// Same as `record`, for scores that arrive as unchecked integers (a
    /// decoded request body, say). Negative values are out of range too.
    pub fn record_score(&mut self, item: usize, value: i64) -> Result<(), ScreeningError> {
        let item_count = self.item_count();
        if item >= item_count {
            return Err(ScreeningError::ItemOutOfRange {
                instrument_id: self.instrument.id().to_string(),
                item,
                item_count,
            });
        }

        let frequency = u8::try_from(value)
            .ok()
            .and_then(|v| Frequency::try_from(v).ok())
            .ok_or_else(|| ScreeningError::ScoreOutOfRange {
                instrument_id: self.instrument.id().to_string(),
                item,
                value,
            })?;

        self.responses.insert(item, frequency);
        Ok(())
    }

    pub fn clear(&mut self, item: usize) -> Option<Frequency> {
        self.responses.remove(&item)
    }

    pub fn get(&self, item: usize) -> Option<Frequency> {
        self.responses.get(&item).copied()
    }

    pub fn answered(&self) -> usize {
        self.responses.len()
    }

    pub fn is_complete(&self) -> bool {
        self.responses.len() == self.item_count()
    }

    pub fn missing_items(&self) -> Vec<usize> {
        (0..self.item_count())
            .filter(|i| !self.responses.contains_key(i))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, Frequency)> + '_ {
        self.responses.iter().map(|(i, f)| (*i, *f))
    }

    /// Total for a fully answered set. Missing items are never treated as
    /// zero here, since that would understate severity.
    pub fn complete_total(&self) -> Result<u32, ScreeningError> {
        let missing = self.missing_items();
        if !missing.is_empty() {
            return Err(ScreeningError::Incomplete {
                instrument_id: self.instrument.id().to_string(),
                missing,
            });
        }
        Ok(score(self))
    }
}

/// Sum of every answer present. On a partial set this is a partial total and
/// must not be fed to severity classification.
pub fn score(responses: &ResponseSet) -> u32 {
    responses.iter().map(|(_, f)| u32::from(f.points())).sum()
}

/// Total and severity for one completed instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub instrument_id: String,
    pub total: u32,
    pub max_total: u32,
    pub band: SeverityBand,
    pub guidance_key: String,
    pub guidance: String,
}

/// Score and classify a completed response set.
pub fn evaluate(responses: &ResponseSet) -> Result<ScoreResult, ScreeningError> {
    let instrument = responses.instrument().instrument();
    let total = responses.complete_total()?;
    let interpretation = instrument.classify(total)?;

    Ok(ScoreResult {
        instrument_id: instrument.id().to_string(),
        total,
        max_total: instrument.max_total(),
        band: interpretation.band,
        guidance_key: interpretation.guidance_key,
        guidance: interpretation.guidance,
    })
}
