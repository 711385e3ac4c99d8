pub mod voice_search_orchestrator;
