use std::io::{BufRead, ErrorKind};

use tokio::sync::mpsc;

use crate::core::models::{CaptureEvent, RecognitionSegment};
use crate::core::orchestrators::voice_search_orchestrator::OrchestratorMessage;
use crate::global_constants::LOG_TAG_STDIN_LISTENER;

/// Speech-capture stand-in: every non-empty line typed on stdin is one
/// finalized utterance.
pub struct StdinTranscriptListener;

impl StdinTranscriptListener {
    pub fn spawn(sender: mpsc::Sender<OrchestratorMessage>) -> std::io::Result<()> {
        std::thread::Builder::new()
            .name("stdin-transcripts".to_string())
            .spawn(move || {
                log::info!(
                    "{} Starting stdin transcript listener thread",
                    LOG_TAG_STDIN_LISTENER
                );
                let stdin = std::io::stdin();
                Self::forward_lines(stdin.lock(), &sender);
            })?;
        Ok(())
    }

    fn forward_lines<R: BufRead>(reader: R, sender: &mpsc::Sender<OrchestratorMessage>) {
        for line in reader.lines() {
            let (messages, is_fatal) = match line {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => (Self::voice_session_messages(line), false),
                Err(error) => {
                    log::error!("{} Failed to read stdin: {}", LOG_TAG_STDIN_LISTENER, error);
                    // A line that is not valid UTF-8 has already been consumed;
                    // any other read error will keep repeating.
                    let is_fatal = error.kind() != ErrorKind::InvalidData;
                    let failed =
                        OrchestratorMessage::Capture(CaptureEvent::Failed(error.to_string()));
                    (vec![failed], is_fatal)
                }
            };

            for message in messages {
                if sender.blocking_send(message).is_err() {
                    log::debug!("{} Receiver dropped, stopping", LOG_TAG_STDIN_LISTENER);
                    return;
                }
            }

            if is_fatal {
                break;
            }
        }

        log::info!("{} End of input", LOG_TAG_STDIN_LISTENER);
        let _ = sender.blocking_send(OrchestratorMessage::InputClosed);
    }

    fn voice_session_messages(line: String) -> Vec<OrchestratorMessage> {
        vec![
            OrchestratorMessage::StartListening,
            OrchestratorMessage::Capture(CaptureEvent::Results(vec![
                RecognitionSegment::finalized(line),
            ])),
            OrchestratorMessage::Capture(CaptureEvent::Ended),
        ]
    }
}
