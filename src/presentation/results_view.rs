use std::fmt::Write;

use crate::core::models::OutputFormat;
use crate::core::orchestrators::voice_search_orchestrator::VoiceSearchOrchestrator;
use crate::global_constants::{
    APPLICATION_NAME, APPLICATION_SUBTITLE, EXAMPLE_UTTERANCES, USER_MESSAGE_PROCESSING,
    USER_MESSAGE_PROMPT,
};

pub fn render_banner(show_tips: bool) -> String {
    let mut banner = format!("{}\n{}\n\n{}\n", APPLICATION_NAME, APPLICATION_SUBTITLE, USER_MESSAGE_PROMPT);

    if show_tips {
        banner.push_str("\nTry saying:\n");
        for utterance in EXAMPLE_UTTERANCES {
            let _ = writeln!(banner, "  \"{}\"", utterance);
        }
    }

    banner
}

/// Only the text format shows progress; JSON output stays machine-readable.
pub fn render_processing(output_format: OutputFormat) -> Option<&'static str> {
    match output_format {
        OutputFormat::Text => Some(USER_MESSAGE_PROCESSING),
        OutputFormat::Json => None,
    }
}

pub fn render_view(
    orchestrator: &VoiceSearchOrchestrator,
    output_format: OutputFormat,
) -> anyhow::Result<String> {
    match output_format {
        OutputFormat::Text => Ok(render_text(orchestrator)),
        OutputFormat::Json => render_json(orchestrator),
    }
}

fn render_text(orchestrator: &VoiceSearchOrchestrator) -> String {
    let mut view = String::new();

    if let Some(error) = orchestrator.error() {
        let _ = writeln!(view, "[ERROR] {}", error);
    }

    let transcript = orchestrator.transcript().trim();
    if !transcript.is_empty() {
        let _ = writeln!(view, "You said: {}", transcript);
    }

    if let Some(interpretation) = orchestrator.interpretation() {
        let _ = writeln!(view, "AI Interpretation: {}", interpretation.interpretation());
    }

    if !orchestrator.results().is_empty() {
        view.push_str("\nSearch Results\n");
        for (index, result) in orchestrator.results().iter().enumerate() {
            let _ = writeln!(view, "{}. {}", index + 1, result.title);
            let _ = writeln!(view, "   {}", result.url);
            let _ = writeln!(view, "   {}", result.snippet);
        }
    }

    view
}

fn render_json(orchestrator: &VoiceSearchOrchestrator) -> anyhow::Result<String> {
    if let Some(outcome) = orchestrator.outcome() {
        return Ok(serde_json::to_string_pretty(&outcome)?);
    }

    let error = orchestrator.error().unwrap_or_default();
    Ok(serde_json::to_string_pretty(&serde_json::json!({ "error": error }))?)
}
