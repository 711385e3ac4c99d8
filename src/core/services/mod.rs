mod capture_session;
mod intent_interpreter;
mod query_text;

pub use capture_session::CaptureSession;
pub use intent_interpreter::interpret;
pub use query_text::{slugify, trim_query};
