mod stdin_transcript_listener;

pub use stdin_transcript_listener::StdinTranscriptListener;
