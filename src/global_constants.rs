#![allow(dead_code)]

pub const APPLICATION_NAME: &str = "Voice-Enabled Search";
pub const APPLICATION_SUBTITLE: &str = "Speak naturally, search intelligently";

pub const LOG_TAG_MAIN: &str = "[MAIN]";
pub const LOG_TAG_APP: &str = "[APP]";
pub const LOG_TAG_ORCHESTRATOR: &str = "[ORCHESTRATOR]";
pub const LOG_TAG_INTERPRETER: &str = "[INTERPRETER]";
pub const LOG_TAG_MOCK_SEARCH: &str = "[MOCK_SEARCH]";
pub const LOG_TAG_CAPTURE: &str = "[CAPTURE]";
pub const LOG_TAG_STDIN_LISTENER: &str = "[STDIN_LISTENER]";
pub const LOG_TAG_SETTINGS: &str = "[SETTINGS]";

pub const MESSAGE_STARTING_APP: &str = "starting voice-search";
pub const MESSAGE_EXITING_APP: &str = "input closed, exiting application";

pub const USER_MESSAGE_PROMPT: &str = "Type what you would say and press Enter (Ctrl+D to quit).";
pub const USER_MESSAGE_PROCESSING: &str = "Processing your request...";
pub const USER_MESSAGE_CAPTURE_UNSUPPORTED: &str =
    "Speech recognition is not supported in this environment.";
pub const USER_MESSAGE_CAPTURE_ERROR_PREFIX: &str = "Speech recognition error: ";

pub const DEFAULT_SIMULATED_LATENCY_MS: u64 = 800;

pub const SEARCH_RESULT_COUNT: usize = 5;

pub const SETTINGS_DIRECTORY_NAME: &str = "voice-search";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

pub const EXAMPLE_UTTERANCES: [&str; 5] = [
    "Search for JavaScript tutorials",
    "What is artificial intelligence?",
    "Find the latest news about technology",
    "How to learn React",
    "Weather in New York",
];
