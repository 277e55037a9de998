//! Nexo Core - demo engines for the restaurant analytics showcase
//!
//! Two small, independent engines drive the whole demo:
//! - [`Sequencer`]: advances through named processing stages on timer
//!   ticks, rotates their detail lines, and signals completion once
//! - [`Responder`]: answers free-text questions from an ordered table of
//!   keyword rules, falling back to a default bundle
//!
//! Everything renders from static fixtures; there is no ingestion, no
//! persistence, and no inference. The sequencer is a pure state machine
//! (timers live in [`driver`]), and the responder is a pure lookup.
//!
//! # Example
//!
//! ```rust,ignore
//! use nexo_core::{Sequencer, SequencerDriver};
//! use nexo_fixtures as fixtures;
//!
//! # async fn example() -> Result<(), nexo_core::NexoError> {
//! let sequencer = Sequencer::new(fixtures::processing_stages(), Default::default())?;
//! let handle = SequencerDriver::spawn(sequencer);
//! handle.completed().await;
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]

// Core modules
pub mod driver;
pub mod error;
pub mod responder;
pub mod sequencer;
pub mod session;
pub mod types;

// Re-exports for convenience
pub use driver::{DriverHandle, SequencerDriver};
pub use error::{FixtureError, NexoError};
pub use responder::{Predicate, Responder, ResponseRule};
pub use sequencer::{Sequencer, SequencerEvent, SequencerSnapshot, SequencerState, StageView};
pub use session::ChatSession;
pub use types::{
    AnswerBundle, ChartRef, ChatMessage, ChatRole, MessageId, SalesPoint, SequencerConfig, Stage,
    StageStatus,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the Nexo engines
    pub use crate::{
        AnswerBundle, ChatSession, Responder, ResponseRule, Sequencer, SequencerConfig,
        SequencerDriver, Stage, StageStatus,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
