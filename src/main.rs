mod adapters;
mod app;
mod core;
mod global_constants;
mod ports;
mod presentation;

#[cfg(test)]
mod results_view_tests;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    log::info!(
        "{} {}",
        global_constants::LOG_TAG_MAIN,
        global_constants::MESSAGE_STARTING_APP
    );

    app::VoiceSearchApp::build().run().await
}
