//! One-question-at-a-time assessment flow.
//!
//! `WizardState` is a plain value with explicit transitions; it knows nothing
//! about answers. `AssessmentSession` pairs it with the two response sets and
//! enforces that the current question is answered before moving on.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ScreeningError;
use crate::report::{AssessmentReport, assess};
use crate::scoring::{Frequency, Item, ResponseSet};
use crate::{Instrument, InstrumentKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum WizardPhase {
    Intro,
    Depression,
    Anxiety,
    Results,
}

impl WizardPhase {
    pub fn instrument(self) -> Option<InstrumentKind> {
        match self {
            WizardPhase::Depression => Some(InstrumentKind::Phq9),
            WizardPhase::Anxiety => Some(InstrumentKind::Gad7),
            WizardPhase::Intro | WizardPhase::Results => None,
        }
    }

    /// Position among the intro, two questionnaires and results (0–3).
    pub fn step(self) -> u8 {
        match self {
            WizardPhase::Intro => 0,
            WizardPhase::Depression => 1,
            WizardPhase::Anxiety => 2,
            WizardPhase::Results => 3,
        }
    }
}

/// Current phase plus question index. `index` is always within the current
/// instrument's item range, and 0 outside the questionnaire phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WizardState {
    pub phase: WizardPhase,
    pub index: usize,
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            phase: WizardPhase::Intro,
            index: 0,
        }
    }
}

impl WizardState {
    fn at(phase: WizardPhase, index: usize) -> Self {
        Self { phase, index }
    }

    fn last_index(kind: InstrumentKind) -> usize {
        kind.instrument().item_count() - 1
    }

    pub fn next(self) -> Self {
        match self.phase {
            WizardPhase::Intro => Self::at(WizardPhase::Depression, 0),
            WizardPhase::Depression if self.index < Self::last_index(InstrumentKind::Phq9) => {
                Self::at(WizardPhase::Depression, self.index + 1)
            }
            WizardPhase::Depression => Self::at(WizardPhase::Anxiety, 0),
            WizardPhase::Anxiety if self.index < Self::last_index(InstrumentKind::Gad7) => {
                Self::at(WizardPhase::Anxiety, self.index + 1)
            }
            WizardPhase::Anxiety | WizardPhase::Results => Self::at(WizardPhase::Results, 0),
        }
    }

    pub fn previous(self) -> Self {
        match self.phase {
            WizardPhase::Intro => self,
            WizardPhase::Depression | WizardPhase::Anxiety if self.index > 0 => {
                Self::at(self.phase, self.index - 1)
            }
            WizardPhase::Depression => Self::default(),
            WizardPhase::Anxiety => {
                Self::at(WizardPhase::Depression, Self::last_index(InstrumentKind::Phq9))
            }
            WizardPhase::Results => {
                Self::at(WizardPhase::Anxiety, Self::last_index(InstrumentKind::Gad7))
            }
        }
    }

    pub fn current_item(self) -> Option<(InstrumentKind, usize)> {
        self.phase.instrument().map(|kind| (kind, self.index))
    }

    /// Percent of the current questionnaire already behind the user.
    pub fn question_progress(self) -> u8 {
        match self.phase.instrument() {
            Some(kind) => {
                let count = kind.instrument().item_count() as f64;
                ((self.index as f64 / count) * 100.0).round() as u8
            }
            None if self.phase == WizardPhase::Results => 100,
            None => 0,
        }
    }

    /// Percent of the overall flow (intro, two questionnaires, results).
    pub fn step_progress(self) -> u8 {
        ((f64::from(self.phase.step()) / 3.0) * 100.0).round() as u8
    }
}

/// A single in-memory assessment. Nothing is retained once it is dropped.
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    state: WizardState,
    depression: ResponseSet,
    anxiety: ResponseSet,
}

impl Default for AssessmentSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentSession {
    pub fn new() -> Self {
        Self {
            state: WizardState::default(),
            depression: ResponseSet::new(InstrumentKind::Phq9),
            anxiety: ResponseSet::new(InstrumentKind::Gad7),
        }
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn depression(&self) -> &ResponseSet {
        &self.depression
    }

    pub fn anxiety(&self) -> &ResponseSet {
        &self.anxiety
    }

    pub fn current_question(&self) -> Option<&'static Item> {
        let (kind, index) = self.state.current_item()?;
        kind.instrument().items().get(index)
    }

    pub fn current_answer(&self) -> Option<Frequency> {
        let (kind, index) = self.state.current_item()?;
        self.responses(kind).get(index)
    }

    /// Answer the question currently on screen.
    pub fn answer(&mut self, value: u8) -> Result<(), ScreeningError> {
        let (kind, index) = self.state.current_item().ok_or(ScreeningError::NoActiveQuestion)?;
        self.responses_mut(kind).record(index, value)
    }

    pub fn can_proceed(&self) -> bool {
        match self.state.current_item() {
            Some(_) => self.current_answer().is_some(),
            None => true,
        }
    }

    pub fn next(&mut self) -> Result<WizardState, ScreeningError> {
        if !self.can_proceed() {
            return Err(ScreeningError::Unanswered);
        }
        self.state = self.state.next();
        Ok(self.state)
    }

    pub fn previous(&mut self) -> WizardState {
        self.state = self.state.previous();
        self.state
    }

    /// The results, once the user has reached the results phase.
    pub fn report(&self) -> Result<AssessmentReport, ScreeningError> {
        if self.state.phase != WizardPhase::Results {
            return Err(ScreeningError::NotFinished);
        }
        assess(&self.depression, &self.anxiety)
    }

    fn responses(&self, kind: InstrumentKind) -> &ResponseSet {
        match kind {
            InstrumentKind::Phq9 => &self.depression,
            InstrumentKind::Gad7 => &self.anxiety,
        }
    }

    fn responses_mut(&mut self, kind: InstrumentKind) -> &mut ResponseSet {
        match kind {
            InstrumentKind::Phq9 => &mut self.depression,
            InstrumentKind::Gad7 => &mut self.anxiety,
        }
    }
}
