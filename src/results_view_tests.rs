#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::adapters::MockSearchProvider;
    use crate::core::models::{CaptureEvent, OutputFormat, RecognitionSegment};
    use crate::core::orchestrators::voice_search_orchestrator::{
        OrchestratorMessage, VoiceSearchOrchestrator,
    };
    use crate::presentation::results_view::*;

    async fn searched_orchestrator(utterance: &str) -> VoiceSearchOrchestrator {
        let mut orchestrator =
            VoiceSearchOrchestrator::build(Arc::new(MockSearchProvider::without_latency()));
        orchestrator.update(OrchestratorMessage::StartListening);
        let mut next = orchestrator.update(OrchestratorMessage::Capture(CaptureEvent::Results(
            vec![RecognitionSegment::finalized(utterance)],
        )));
        while let Some(task) = next {
            let message = task.await;
            next = orchestrator.update(message);
        }
        orchestrator
    }

    #[test]
    fn test_render_banner_with_tips_lists_example_utterances() {
        let banner = render_banner(true);

        assert!(banner.starts_with("Voice-Enabled Search"));
        assert!(banner.contains("Try saying:"));
        assert!(banner.contains("\"Weather in New York\""));
    }

    #[test]
    fn test_render_banner_without_tips() {
        let banner = render_banner(false);

        assert!(!banner.contains("Try saying:"));
    }

    #[test]
    fn test_render_processing_only_in_text_mode() {
        assert_eq!(
            render_processing(OutputFormat::Text),
            Some("Processing your request...")
        );
        assert_eq!(render_processing(OutputFormat::Json), None);
    }

    #[tokio::test]
    async fn test_render_text_shows_transcript_interpretation_and_results() {
        let orchestrator = searched_orchestrator("Weather in New York").await;

        let view = render_view(&orchestrator, OutputFormat::Text).unwrap();

        assert!(view.contains("You said: Weather in New York"));
        assert!(view.contains("AI Interpretation: Weather information for: New York"));
        assert!(view.contains("1. New York - Complete Guide"));
        assert!(view.contains("   https://forum.example.com/new-york"));
        assert!(view.contains("5. New York Community Forum"));
    }

    #[tokio::test]
    async fn test_render_json_emits_outcome_shape() {
        let orchestrator = searched_orchestrator("search for JavaScript tutorials").await;

        let view = render_view(&orchestrator, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&view).unwrap();

        assert_eq!(value["interpretation"], "Searching for: JavaScript tutorials");
        assert_eq!(value["results"].as_array().unwrap().len(), 5);
        assert_eq!(
            value["results"][0]["url"],
            "https://example.com/javascript-tutorials"
        );
    }

    #[test]
    fn test_render_json_reports_capture_error() {
        let mut orchestrator =
            VoiceSearchOrchestrator::build(Arc::new(MockSearchProvider::without_latency()));
        orchestrator.update(OrchestratorMessage::CaptureUnavailable);

        let view = render_view(&orchestrator, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&view).unwrap();

        assert_eq!(
            value["error"],
            "Speech recognition is not supported in this environment."
        );
    }

    #[test]
    fn test_render_text_shows_error_line() {
        let mut orchestrator =
            VoiceSearchOrchestrator::build(Arc::new(MockSearchProvider::without_latency()));
        orchestrator.update(OrchestratorMessage::StartListening);
        orchestrator.update(OrchestratorMessage::Capture(CaptureEvent::Failed(
            "audio-capture".to_string(),
        )));

        let view = render_view(&orchestrator, OutputFormat::Text).unwrap();

        assert!(view.contains("[ERROR] Speech recognition error: audio-capture"));
    }
}
