//! Stage Sequencer - simulated multi-step processing
//!
//! A pure, tick-driven state machine over a static stage list. It performs
//! no I/O and cannot fail at runtime; timers live in [`crate::driver`], so
//! every transition here is directly testable without waiting on a clock.
//!
//! State machine: `NotStarted -> Running -> Done`. `Done` is terminal;
//! there is no reset transition (the demo recreates the sequencer instead).

use crate::error::FixtureError;
use crate::types::{SequencerConfig, Stage, StageStatus};
use serde::{Deserialize, Serialize};

/// Sequencer lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerState {
    /// `start()` not called yet
    NotStarted,
    /// One stage active, the rest partitioned into Completed/Pending
    Running {
        /// Ordinal of the active stage
        active: usize,
        /// Progress of the active stage, 0..=100
        progress: u8,
        /// Index into the active stage's detail lines
        detail_index: usize,
    },
    /// All stages completed; terminal
    Done,
}

/// Events emitted by [`Sequencer::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerEvent {
    /// An intermediate stage reached 100 and the next one became active
    StageCompleted(usize),
    /// The last stage reached 100; emitted exactly once
    Completed,
}

/// Read-only view of one stage for the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageView {
    /// Stage title
    pub title: String,
    /// Stage description
    pub description: String,
    /// Derived run-state
    pub status: StageStatus,
    /// Progress, 0..=100 (100 for completed stages, 0 for pending)
    pub progress: u8,
}

/// Read-only view of the whole sequencer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequencerSnapshot {
    /// Per-stage views, in ordinal order
    pub stages: Vec<StageView>,
    /// Ordinal of the active stage, if any
    pub active: Option<usize>,
    /// Detail line currently shown for the active stage
    pub active_detail: Option<String>,
    /// Overall percentage across all stages
    pub overall_pct: f64,
    /// Whether the sequence has finished
    pub done: bool,
}

/// The sequencer advancing through stages and signaling completion
#[derive(Debug, Clone)]
pub struct Sequencer {
    stages: Vec<Stage>,
    config: SequencerConfig,
    state: SequencerState,
}

impl Sequencer {
    /// Create a sequencer over a static stage list
    ///
    /// # Errors
    /// - [`FixtureError::NoStages`] if `stages` is empty
    /// - [`FixtureError::StageWithoutDetails`] if a stage has no detail lines
    /// - [`FixtureError::InvalidProgressStep`] if the step is outside 1..=100
    pub fn new(stages: Vec<Stage>, config: SequencerConfig) -> Result<Self, FixtureError> {
        if stages.is_empty() {
            return Err(FixtureError::NoStages);
        }
        if let Some(idx) = stages.iter().position(|s| s.details.is_empty()) {
            return Err(FixtureError::StageWithoutDetails(idx));
        }
        if config.progress_step == 0 || config.progress_step > 100 {
            return Err(FixtureError::InvalidProgressStep(config.progress_step));
        }

        Ok(Self {
            stages,
            config,
            state: SequencerState::NotStarted,
        })
    }

    /// Begin at stage 0, progress 0
    ///
    /// Starting a sequencer that is already running or done is a logged
    /// no-op, not an error.
    pub fn start(&mut self) {
        match self.state {
            SequencerState::NotStarted => {
                tracing::debug!(stages = self.stages.len(), "sequencer started");
                self.state = SequencerState::Running {
                    active: 0,
                    progress: 0,
                    detail_index: 0,
                };
            }
            SequencerState::Running { active, .. } => {
                tracing::warn!(active, "start ignored: sequencer already running");
            }
            SequencerState::Done => {
                tracing::warn!("start ignored: sequencer already done");
            }
        }
    }

    /// Advance the active stage's progress by one step
    ///
    /// When progress reaches 100 the active stage completes and the next
    /// one becomes active with progress 0 and detail index 0. Completing
    /// the last stage moves the machine to `Done` and returns
    /// [`SequencerEvent::Completed`] exactly once. No-op when not running.
    pub fn tick(&mut self) -> Option<SequencerEvent> {
        let SequencerState::Running {
            active, progress, ..
        } = &mut self.state
        else {
            return None;
        };

        *progress = progress
            .saturating_add(self.config.progress_step)
            .min(100);
        if *progress < 100 {
            return None;
        }

        let finished = *active;
        if finished + 1 < self.stages.len() {
            tracing::debug!(stage = finished, "stage completed");
            self.state = SequencerState::Running {
                active: finished + 1,
                progress: 0,
                detail_index: 0,
            };
            Some(SequencerEvent::StageCompleted(finished))
        } else {
            tracing::info!(stages = self.stages.len(), "processing completed");
            self.state = SequencerState::Done;
            Some(SequencerEvent::Completed)
        }
    }

    /// Advance the active stage's detail line, wrapping around
    ///
    /// No-op unless a stage is active.
    pub fn rotate_detail(&mut self) {
        if let SequencerState::Running {
            active,
            detail_index,
            ..
        } = &mut self.state
        {
            *detail_index = (*detail_index + 1) % self.stages[*active].details.len();
        }
    }

    /// Derived run-state of the stage at `ordinal`
    #[must_use]
    pub fn status_of(&self, ordinal: usize) -> StageStatus {
        match self.state {
            SequencerState::NotStarted => StageStatus::Pending,
            SequencerState::Running { active, .. } => {
                if ordinal < active {
                    StageStatus::Completed
                } else if ordinal == active {
                    StageStatus::Active
                } else {
                    StageStatus::Pending
                }
            }
            SequencerState::Done => StageStatus::Completed,
        }
    }

    /// Current lifecycle state
    #[inline]
    #[must_use]
    pub fn state(&self) -> SequencerState {
        self.state
    }

    /// Whether the sequence has finished
    #[inline]
    #[must_use]
    pub fn is_done(&self) -> bool {
        matches!(self.state, SequencerState::Done)
    }

    /// The static stage definitions
    #[inline]
    #[must_use]
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// The configuration this sequencer was built with
    #[inline]
    #[must_use]
    pub fn config(&self) -> &SequencerConfig {
        &self.config
    }

    /// Read-only view for the presentation layer
    #[must_use]
    pub fn snapshot(&self) -> SequencerSnapshot {
        let (active, active_progress, detail_index) = match self.state {
            SequencerState::Running {
                active,
                progress,
                detail_index,
            } => (Some(active), progress, detail_index),
            _ => (None, 0, 0),
        };

        let stages = self
            .stages
            .iter()
            .enumerate()
            .map(|(i, stage)| {
                let status = self.status_of(i);
                StageView {
                    title: stage.title.clone(),
                    description: stage.description.clone(),
                    status,
                    progress: match status {
                        StageStatus::Completed => 100,
                        StageStatus::Active => active_progress,
                        StageStatus::Pending => 0,
                    },
                }
            })
            .collect();

        let active_detail =
            active.map(|i| self.stages[i].details[detail_index].clone());

        let total = self.stages.len() as f64;
        let overall_pct = match self.state {
            SequencerState::NotStarted => 0.0,
            SequencerState::Running { active, progress, .. } => {
                (active as f64 * 100.0 + f64::from(progress)) / total
            }
            SequencerState::Done => 100.0,
        };

        SequencerSnapshot {
            stages,
            active,
            active_detail,
            overall_pct,
            done: self.is_done(),
        }
    }
}
