use std::sync::Arc;

use futures::future::BoxFuture;
use uuid::Uuid;

use crate::core::interfaces::adapters::SearchProvider;
use crate::core::models::{
    CaptureEvent, CaptureSignal, CaptureState, Interpretation, ResultRecord, SearchOutcome,
};
use crate::core::services::{interpret, trim_query, CaptureSession};
use crate::global_constants::LOG_TAG_ORCHESTRATOR;

/// Deferred work whose output is fed back into [`VoiceSearchOrchestrator::update`].
pub type Task = BoxFuture<'static, OrchestratorMessage>;

pub enum OrchestratorMessage {
    StartListening,
    #[allow(dead_code)]
    StopListening,
    Capture(CaptureEvent),
    CaptureUnavailable,
    SearchCompleted(Uuid, Result<Vec<ResultRecord>, String>),
    InputClosed,
}

impl std::fmt::Debug for OrchestratorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrchestratorMessage::StartListening => write!(f, "StartListening"),
            OrchestratorMessage::StopListening => write!(f, "StopListening"),
            OrchestratorMessage::Capture(event) => write!(f, "Capture({:?})", event),
            OrchestratorMessage::CaptureUnavailable => write!(f, "CaptureUnavailable"),
            OrchestratorMessage::SearchCompleted(id, result) => {
                write!(f, "SearchCompleted({}, {:?})", id, result.is_ok())
            }
            OrchestratorMessage::InputClosed => write!(f, "InputClosed"),
        }
    }
}

pub struct VoiceSearchOrchestrator {
    search_provider: Arc<dyn SearchProvider>,
    capture_session: CaptureSession,
    session_id: Uuid,
    interpretation: Option<Interpretation>,
    results: Vec<ResultRecord>,
    is_processing: bool,
    error: Option<String>,
    input_closed: bool,
    render_requested: bool,
}

impl VoiceSearchOrchestrator {
    pub fn build(search_provider: Arc<dyn SearchProvider>) -> Self {
        Self {
            search_provider,
            capture_session: CaptureSession::new(),
            session_id: Uuid::new_v4(),
            interpretation: None,
            results: Vec::new(),
            is_processing: false,
            error: None,
            input_closed: false,
            render_requested: false,
        }
    }

    pub fn update(&mut self, message: OrchestratorMessage) -> Option<Task> {
        log::info!("{} Received message: {:?}", LOG_TAG_ORCHESTRATOR, message);

        match message {
            OrchestratorMessage::StartListening => self.handle_start_listening(),
            OrchestratorMessage::StopListening => self.handle_stop_listening(),
            OrchestratorMessage::Capture(event) => self.handle_capture_event(event),
            OrchestratorMessage::CaptureUnavailable => self.handle_capture_unavailable(),
            OrchestratorMessage::SearchCompleted(session_id, result) => {
                self.handle_search_completed(session_id, result)
            }
            OrchestratorMessage::InputClosed => {
                self.input_closed = true;
                None
            }
        }
    }

    /// Entry point for finalized text from any capture mechanism.
    pub fn on_final_transcript(&mut self, text: &str) -> Option<Task> {
        if self.is_processing {
            log::warn!(
                "{} Search already in flight, ignoring transcript: {}",
                LOG_TAG_ORCHESTRATOR,
                text
            );
            return None;
        }

        let text = trim_query(text);
        if text.is_empty() {
            log::debug!("{} Ignoring empty transcript", LOG_TAG_ORCHESTRATOR);
            return None;
        }

        let interpretation = interpret(text);
        log::info!(
            "{} [{}] {:?} -> {}",
            LOG_TAG_ORCHESTRATOR,
            self.session_id,
            interpretation.label(),
            interpretation.interpretation()
        );

        let query = interpretation.search_query().to_string();
        self.interpretation = Some(interpretation);
        self.is_processing = true;

        let search_provider = Arc::clone(&self.search_provider);
        let session_id = self.session_id;

        let task: Task = Box::pin(async move {
            match search_provider.perform_search(&query).await {
                Ok(results) => {
                    log::info!(
                        "{} [{}] Search completed with {} results",
                        LOG_TAG_ORCHESTRATOR,
                        session_id,
                        results.len()
                    );
                    OrchestratorMessage::SearchCompleted(session_id, Ok(results))
                }
                Err(e) => {
                    log::error!(
                        "{} [{}] Search failed: {}",
                        LOG_TAG_ORCHESTRATOR,
                        session_id,
                        e
                    );
                    OrchestratorMessage::SearchCompleted(session_id, Err(e.to_string()))
                }
            }
        });
        Some(task)
    }

    fn handle_start_listening(&mut self) -> Option<Task> {
        if self.is_processing {
            log::warn!(
                "{} Search in progress, not starting a new voice session",
                LOG_TAG_ORCHESTRATOR
            );
            return None;
        }

        if !self.capture_session.start() {
            if let CaptureState::Error(CaptureSignal::Unavailable) = self.capture_session.state() {
                self.error = Some(CaptureSignal::Unavailable.to_string());
                self.render_requested = true;
            }
            return None;
        }

        self.session_id = Uuid::new_v4();
        self.error = None;
        self.interpretation = None;
        self.results.clear();
        log::debug!(
            "{} Voice session {} started",
            LOG_TAG_ORCHESTRATOR,
            self.session_id
        );
        None
    }

    fn handle_stop_listening(&mut self) -> Option<Task> {
        self.capture_session.stop();
        None
    }

    fn handle_capture_event(&mut self, event: CaptureEvent) -> Option<Task> {
        match event {
            CaptureEvent::Results(segments) => {
                let utterance = self.capture_session.receive(&segments)?;
                self.on_final_transcript(&utterance)
            }
            CaptureEvent::Failed(reason) => {
                self.capture_session.fail(reason);
                if let CaptureState::Error(signal) = self.capture_session.state() {
                    self.error = Some(signal.to_string());
                }
                self.render_requested = true;
                None
            }
            CaptureEvent::Ended => {
                self.capture_session.end();
                None
            }
        }
    }

    fn handle_capture_unavailable(&mut self) -> Option<Task> {
        self.capture_session.mark_unavailable();
        self.error = Some(CaptureSignal::Unavailable.to_string());
        self.render_requested = true;
        None
    }

    fn handle_search_completed(
        &mut self,
        session_id: Uuid,
        result: Result<Vec<ResultRecord>, String>,
    ) -> Option<Task> {
        if session_id != self.session_id {
            log::warn!(
                "{} Dropping results from stale session {}",
                LOG_TAG_ORCHESTRATOR,
                session_id
            );
            return None;
        }

        self.is_processing = false;
        match result {
            Ok(results) => self.results = results,
            Err(error) => self.error = Some(format!("Search failed: {}", error)),
        }
        self.render_requested = true;
        None
    }

    pub fn transcript(&self) -> &str {
        self.capture_session.transcript()
    }

    #[allow(dead_code)]
    pub fn capture_state(&self) -> &CaptureState {
        self.capture_session.state()
    }

    pub fn interpretation(&self) -> Option<&Interpretation> {
        self.interpretation.as_ref()
    }

    pub fn results(&self) -> &[ResultRecord] {
        &self.results
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[allow(dead_code)]
    pub fn is_processing(&self) -> bool {
        self.is_processing
    }

    pub fn outcome(&self) -> Option<SearchOutcome> {
        let interpretation = self.interpretation.as_ref()?;
        if self.results.is_empty() {
            return None;
        }
        Some(SearchOutcome::new(
            interpretation.interpretation(),
            self.results.clone(),
        ))
    }

    pub fn take_render_request(&mut self) -> bool {
        std::mem::take(&mut self.render_requested)
    }

    pub fn should_exit(&self) -> bool {
        self.input_closed && !self.is_processing
    }
}
