use std::sync::Arc;

use tokio::sync::mpsc;

use crate::adapters::MockSearchProvider;
use crate::core::models::UserSettings;
use crate::core::orchestrators::voice_search_orchestrator::{
    OrchestratorMessage, VoiceSearchOrchestrator,
};
use crate::global_constants::{LOG_TAG_APP, MESSAGE_EXITING_APP};
use crate::ports::StdinTranscriptListener;
use crate::presentation::results_view;

const MESSAGE_CHANNEL_CAPACITY: usize = 16;

pub struct VoiceSearchApp {
    orchestrator: VoiceSearchOrchestrator,
    settings: UserSettings,
}

impl VoiceSearchApp {
    pub fn build() -> Self {
        log::info!("{} Initializing application", LOG_TAG_APP);

        let settings = UserSettings::load().unwrap_or_else(|e| {
            log::warn!("{} Failed to load settings: {}, using defaults", LOG_TAG_APP, e);
            UserSettings::default()
        });

        let search_provider = Arc::new(MockSearchProvider::new(settings.simulated_latency()));
        let orchestrator = VoiceSearchOrchestrator::build(search_provider);

        Self {
            orchestrator,
            settings,
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        println!("{}", results_view::render_banner(self.settings.show_tips));

        let (sender, mut receiver) = mpsc::channel(MESSAGE_CHANNEL_CAPACITY);
        if let Err(e) = StdinTranscriptListener::spawn(sender) {
            log::error!("{} Failed to start transcript listener: {}", LOG_TAG_APP, e);
            self.handle_message(OrchestratorMessage::CaptureUnavailable)
                .await?;
            return Ok(());
        }

        while let Some(message) = receiver.recv().await {
            self.handle_message(message).await?;

            if self.orchestrator.should_exit() {
                log::info!("{} {}", LOG_TAG_APP, MESSAGE_EXITING_APP);
                break;
            }
        }

        Ok(())
    }

    // Searches are awaited here before the next message is read, so overlapping
    // searches never happen.
    async fn handle_message(&mut self, message: OrchestratorMessage) -> anyhow::Result<()> {
        let mut next = self.orchestrator.update(message);

        while let Some(task) = next {
            if let Some(processing) = results_view::render_processing(self.settings.output_format) {
                println!("{}", processing);
            }
            let completed = task.await;
            next = self.orchestrator.update(completed);
        }

        if self.orchestrator.take_render_request() {
            let view = results_view::render_view(&self.orchestrator, self.settings.output_format)?;
            println!("{}", view);
        }

        Ok(())
    }
}
