//! Core types for the Nexo demo engines
//!
//! Defines the fundamental types shared by the sequencer and responder:
//! - Stage definitions and derived run-state
//! - Sequencer configuration
//! - Answer bundles and chart attachments
//! - Conversation messages

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use ulid::Ulid;

/// One unit of simulated ingestion work.
///
/// Stages are immutable fixtures: all of them exist before the sequencer
/// starts and only their derived run-state changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    /// Display title ("Leyendo archivos", ...)
    pub title: String,
    /// Display description shown under the title
    pub description: String,
    /// Rotating detail lines; must be non-empty
    pub details: Vec<String>,
}

impl Stage {
    /// Create a stage definition
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            details,
        }
    }
}

/// Derived run-state of a stage, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageStatus {
    /// Not reached yet
    Pending,
    /// Currently progressing; at most one stage at a time
    Active,
    /// Finished; never revisited
    Completed,
}

/// Sequencer timing and progress configuration
///
/// Defaults mirror the demo: 4 progress points per 100ms tick, detail
/// rotation every 1200ms, and a 1.5s hold on the finished screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequencerConfig {
    /// Progress points added per tick, 1..=100
    pub progress_step: u8,
    /// Period of the progress tick timer
    pub tick_period: Duration,
    /// Period of the detail rotation timer, longer than `tick_period`
    pub detail_period: Duration,
    /// How long consumers keep the "done" state visible before moving on
    pub completion_hold: Duration,
}

impl SequencerConfig {
    /// Create the default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With progress step
    #[inline]
    #[must_use]
    pub fn with_progress_step(mut self, step: u8) -> Self {
        self.progress_step = step;
        self
    }

    /// With tick period
    #[inline]
    #[must_use]
    pub fn with_tick_period(mut self, period: Duration) -> Self {
        self.tick_period = period;
        self
    }

    /// With detail rotation period
    #[inline]
    #[must_use]
    pub fn with_detail_period(mut self, period: Duration) -> Self {
        self.detail_period = period;
        self
    }

    /// With completion hold
    #[inline]
    #[must_use]
    pub fn with_completion_hold(mut self, hold: Duration) -> Self {
        self.completion_hold = hold;
        self
    }

    /// Ticks needed to complete one stage with this step size
    #[inline]
    #[must_use]
    pub fn ticks_per_stage(&self) -> u32 {
        (100u32).div_ceil(u32::from(self.progress_step))
    }
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            progress_step: 4,
            tick_period: Duration::from_millis(100),
            detail_period: Duration::from_millis(1200),
            completion_hold: Duration::from_millis(1500),
        }
    }
}

/// Opaque chart attachment key, resolved to data by the session layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartRef {
    /// Weekly sales bar chart
    SalesByDay,
}

/// One point of the weekly sales series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesPoint {
    /// Day label ("Lun", "Mar", ...)
    pub day: String,
    /// Sales for the day, in pesos
    pub sales: u32,
    /// Costs for the day, in pesos
    pub costs: u32,
    /// Gross margin percentage
    pub margin_pct: u8,
}

impl SalesPoint {
    /// Create a sales point
    #[must_use]
    pub fn new(day: impl Into<String>, sales: u32, costs: u32, margin_pct: u8) -> Self {
        Self {
            day: day.into(),
            sales,
            costs,
            margin_pct,
        }
    }
}

/// Answer payload returned by the responder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerBundle {
    /// Answer text
    pub text: String,
    /// Ordered reasoning steps shown next to the answer
    pub steps: Vec<String>,
    /// Optional chart attachment
    pub chart: Option<ChartRef>,
}

impl AnswerBundle {
    /// Create a bundle without a chart attachment
    #[must_use]
    pub fn new(text: impl Into<String>, steps: Vec<String>) -> Self {
        Self {
            text: text.into(),
            steps,
            chart: None,
        }
    }

    /// Attach a chart
    #[inline]
    #[must_use]
    pub fn with_chart(mut self, chart: ChartRef) -> Self {
        self.chart = Some(chart);
        self
    }
}

/// Unique message identifier (ULID for sortability)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MessageId(pub Ulid);

impl MessageId {
    /// Generate a new message ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who authored a conversation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatRole {
    /// The person asking questions
    User,
    /// The canned responder
    Assistant,
}

/// One entry of the conversation log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message ID
    pub id: MessageId,
    /// Author
    pub role: ChatRole,
    /// Message text
    pub content: String,
    /// When the message was appended
    pub timestamp: DateTime<Utc>,
    /// Reasoning steps (assistant messages only)
    pub steps: Vec<String>,
    /// Resolved chart data (assistant messages only)
    pub chart: Option<Vec<SalesPoint>>,
}

impl ChatMessage {
    /// Create a user message
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            role: ChatRole::User,
            content: content.into(),
            timestamp: Utc::now(),
            steps: Vec::new(),
            chart: None,
        }
    }

    /// Create an assistant message
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            role: ChatRole::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
            steps: Vec::new(),
            chart: None,
        }
    }

    /// With reasoning steps
    #[inline]
    #[must_use]
    pub fn with_steps(mut self, steps: Vec<String>) -> Self {
        self.steps = steps;
        self
    }

    /// With resolved chart data
    #[inline]
    #[must_use]
    pub fn with_chart(mut self, chart: Vec<SalesPoint>) -> Self {
        self.chart = Some(chart);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = SequencerConfig::new()
            .with_progress_step(10)
            .with_tick_period(Duration::from_millis(50));

        assert_eq!(config.progress_step, 10);
        assert_eq!(config.tick_period, Duration::from_millis(50));
        assert_eq!(config.detail_period, Duration::from_millis(1200));
    }

    #[test]
    fn ticks_per_stage_divides_evenly() {
        let config = SequencerConfig::new().with_progress_step(4);
        assert_eq!(config.ticks_per_stage(), 25);

        let config = SequencerConfig::new().with_progress_step(100);
        assert_eq!(config.ticks_per_stage(), 1);
    }

    #[test]
    fn ticks_per_stage_rounds_up() {
        // 3 does not divide 100: the last tick clamps at 100
        let config = SequencerConfig::new().with_progress_step(3);
        assert_eq!(config.ticks_per_stage(), 34);
    }

    #[test]
    fn message_ids_are_unique() {
        let a = ChatMessage::user("hola");
        let b = ChatMessage::user("hola");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn bundle_with_chart() {
        let bundle = AnswerBundle::new("texto", vec![]).with_chart(ChartRef::SalesByDay);
        assert_eq!(bundle.chart, Some(ChartRef::SalesByDay));
    }
}
