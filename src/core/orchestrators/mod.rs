pub mod analysis_orchestrator;
