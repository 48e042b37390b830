pub mod ai_providers;
pub mod analysis_pipeline;
pub mod detectors;
pub mod file_inventory;
pub mod fix_synthesizer;
pub mod result_persister;
pub mod scoring_engine;
pub mod verification_simulator;
pub mod workspace_manager;
