use std::fmt;

use crate::global_constants::{USER_MESSAGE_CAPTURE_ERROR_PREFIX, USER_MESSAGE_CAPTURE_UNSUPPORTED};

/// One recognition result delivered by the capture collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionSegment {
    pub text: String,
    pub is_final: bool,
}

impl RecognitionSegment {
    #[allow(dead_code)]
    pub fn interim(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: false,
        }
    }

    pub fn finalized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureSignal {
    Unavailable,
    Error(String),
}

impl fmt::Display for CaptureSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureSignal::Unavailable => write!(f, "{}", USER_MESSAGE_CAPTURE_UNSUPPORTED),
            CaptureSignal::Error(reason) => {
                write!(f, "{}{}", USER_MESSAGE_CAPTURE_ERROR_PREFIX, reason)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CaptureState {
    #[default]
    Idle,
    Listening,
    Error(CaptureSignal),
    Stopped,
}

/// Lifecycle callbacks from the capture collaborator, in message form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureEvent {
    Results(Vec<RecognitionSegment>),
    Failed(String),
    Ended,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_signal_display_for_unavailable() {
        let signal = CaptureSignal::Unavailable;
        assert_eq!(
            signal.to_string(),
            "Speech recognition is not supported in this environment."
        );
    }

    #[test]
    fn test_capture_signal_display_includes_reason() {
        let signal = CaptureSignal::Error("not-allowed".to_string());
        assert_eq!(signal.to_string(), "Speech recognition error: not-allowed");
    }

    #[test]
    fn test_capture_state_default_is_idle() {
        assert_eq!(CaptureState::default(), CaptureState::Idle);
    }
}
