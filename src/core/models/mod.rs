mod capture;
mod interpretation;
mod search_result;
mod user_settings;

pub use capture::{CaptureEvent, CaptureSignal, CaptureState, RecognitionSegment};
pub use interpretation::{IntentLabel, Interpretation};
pub use search_result::{ResultRecord, SearchOutcome};
pub use user_settings::{OutputFormat, UserSettings};
