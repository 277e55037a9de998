//! Error types for Nexo Core
//!
//! The engines themselves cannot fail at runtime (no I/O, no parsing, no
//! external calls); errors only arise when fixtures or configuration are
//! rejected at construction time.

/// Main Nexo error type
#[derive(Debug, thiserror::Error)]
pub enum NexoError {
    /// Fixture or configuration rejected at construction
    #[error("fixture error: {0}")]
    Fixture(#[from] FixtureError),
}

/// Fixture and configuration validation errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FixtureError {
    /// Sequencer constructed with no stages
    #[error("stage list is empty")]
    NoStages,

    /// A stage has no detail lines to rotate through
    #[error("stage {0} has no detail lines")]
    StageWithoutDetails(usize),

    /// Progress step outside 1..=100
    #[error("progress step {0} outside 1..=100")]
    InvalidProgressStep(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_error_display() {
        let err = FixtureError::StageWithoutDetails(2);
        assert!(err.to_string().contains("stage 2"));

        let err = FixtureError::InvalidProgressStep(0);
        assert!(err.to_string().contains("progress step 0"));
    }

    #[test]
    fn nexo_error_from_fixture() {
        let err: NexoError = FixtureError::NoStages.into();
        assert!(err.to_string().contains("fixture error"));
    }
}
