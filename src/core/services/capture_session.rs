use super::query_text::trim_query;
use crate::core::models::{CaptureSignal, CaptureState, RecognitionSegment};
use crate::global_constants::LOG_TAG_CAPTURE;

/// Lifecycle handle for the speech-capture collaborator.
///
/// Tracks whether capture is listening and assembles recognition segments
/// into a transcript. A finalized utterance is handed back from
/// [`CaptureSession::receive`] at most once per listening session.
#[derive(Debug, Default)]
pub struct CaptureSession {
    state: CaptureState,
    transcript: String,
    finalized: bool,
}

impl CaptureSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CaptureState {
        &self.state
    }

    pub fn is_listening(&self) -> bool {
        self.state == CaptureState::Listening
    }

    /// The live transcript: final text when present, otherwise interim text.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn start(&mut self) -> bool {
        match self.state {
            CaptureState::Listening => {
                log::debug!("{} Already listening", LOG_TAG_CAPTURE);
                false
            }
            CaptureState::Error(CaptureSignal::Unavailable) => {
                log::warn!("{} Capture unavailable, refusing to start", LOG_TAG_CAPTURE);
                false
            }
            _ => {
                log::info!("{} Listening started", LOG_TAG_CAPTURE);
                self.state = CaptureState::Listening;
                self.transcript.clear();
                self.finalized = false;
                true
            }
        }
    }

    pub fn stop(&mut self) {
        if self.is_listening() {
            log::info!("{} Listening stopped", LOG_TAG_CAPTURE);
            self.state = CaptureState::Stopped;
        }
    }

    /// Applies one batch of recognition results and returns the finalized
    /// utterance the first time a batch carries non-empty final text.
    pub fn receive(&mut self, segments: &[RecognitionSegment]) -> Option<String> {
        if !self.is_listening() {
            log::warn!(
                "{} Ignoring {} segment(s) received while not listening",
                LOG_TAG_CAPTURE,
                segments.len()
            );
            return None;
        }

        let mut final_text = String::new();
        let mut interim_text = String::new();

        for segment in segments {
            if segment.is_final {
                final_text.push_str(&segment.text);
                final_text.push(' ');
            } else {
                interim_text.push_str(&segment.text);
            }
        }

        self.transcript = if final_text.is_empty() {
            interim_text
        } else {
            final_text.clone()
        };
        log::debug!("{} Transcript: {}", LOG_TAG_CAPTURE, self.transcript);

        let utterance = trim_query(&final_text);
        if utterance.is_empty() || self.finalized {
            return None;
        }

        self.finalized = true;
        Some(utterance.to_string())
    }

    pub fn fail(&mut self, reason: impl Into<String>) {
        let signal = CaptureSignal::Error(reason.into());
        log::error!("{} {}", LOG_TAG_CAPTURE, signal);
        self.state = CaptureState::Error(signal);
    }

    pub fn end(&mut self) {
        if self.is_listening() {
            log::debug!("{} Recognition ended", LOG_TAG_CAPTURE);
            self.state = CaptureState::Stopped;
        }
    }

    pub fn mark_unavailable(&mut self) {
        log::error!("{} {}", LOG_TAG_CAPTURE, CaptureSignal::Unavailable);
        self.state = CaptureState::Error(CaptureSignal::Unavailable);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listening_session() -> CaptureSession {
        let mut session = CaptureSession::new();
        session.start();
        session
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = CaptureSession::new();

        assert_eq!(session.state(), &CaptureState::Idle);
        assert!(!session.is_listening());
    }

    #[test]
    fn test_start_moves_to_listening_and_clears_transcript() {
        let mut session = listening_session();
        session.receive(&[RecognitionSegment::interim("hello")]);
        session.stop();

        assert!(session.start());
        assert!(session.is_listening());
        assert_eq!(session.transcript(), "");
    }

    #[test]
    fn test_start_while_listening_is_no_op() {
        let mut session = listening_session();

        assert!(!session.start());
        assert!(session.is_listening());
    }

    #[test]
    fn test_stop_moves_to_stopped() {
        let mut session = listening_session();
        session.stop();

        assert_eq!(session.state(), &CaptureState::Stopped);
    }

    #[test]
    fn test_interim_segments_update_transcript_without_finalizing() {
        let mut session = listening_session();

        let utterance = session.receive(&[
            RecognitionSegment::interim("weather "),
            RecognitionSegment::interim("in"),
        ]);

        assert_eq!(utterance, None);
        assert_eq!(session.transcript(), "weather in");
    }

    #[test]
    fn test_final_segments_are_joined_and_trimmed() {
        let mut session = listening_session();

        let utterance = session.receive(&[
            RecognitionSegment::finalized("weather in"),
            RecognitionSegment::finalized("New York"),
            RecognitionSegment::interim("tomo"),
        ]);

        assert_eq!(utterance.as_deref(), Some("weather in New York"));
        assert_eq!(session.transcript(), "weather in New York ");
    }

    #[test]
    fn test_final_transcript_is_delivered_once_per_session() {
        let mut session = listening_session();

        assert!(session
            .receive(&[RecognitionSegment::finalized("news")])
            .is_some());
        assert!(session
            .receive(&[RecognitionSegment::finalized("news again")])
            .is_none());

        session.end();
        session.start();
        assert!(session
            .receive(&[RecognitionSegment::finalized("news")])
            .is_some());
    }

    #[test]
    fn test_whitespace_only_final_text_is_not_delivered() {
        let mut session = listening_session();

        assert_eq!(session.receive(&[RecognitionSegment::finalized("  ")]), None);
    }

    #[test]
    fn test_segments_ignored_when_not_listening() {
        let mut session = CaptureSession::new();

        assert_eq!(session.receive(&[RecognitionSegment::finalized("find cats")]), None);
        assert_eq!(session.transcript(), "");
    }

    #[test]
    fn test_fail_moves_to_error_with_reason() {
        let mut session = listening_session();
        session.fail("network");

        assert_eq!(
            session.state(),
            &CaptureState::Error(CaptureSignal::Error("network".to_string()))
        );
        assert!(session.start());
    }

    #[test]
    fn test_end_stops_listening() {
        let mut session = listening_session();
        session.end();

        assert_eq!(session.state(), &CaptureState::Stopped);
    }

    #[test]
    fn test_unavailable_capture_cannot_start() {
        let mut session = CaptureSession::new();
        session.mark_unavailable();

        assert!(!session.start());
        assert_eq!(
            session.state(),
            &CaptureState::Error(CaptureSignal::Unavailable)
        );
    }
}
