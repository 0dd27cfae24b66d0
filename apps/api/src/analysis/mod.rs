// Simulated AI analysis: a fixed scenario catalog plus the delayed
// background task that applies a drawn outcome to an uploaded record and
// fans out the result notifications.

pub mod scenarios;
pub mod simulator;

pub use scenarios::{
    AnalysisScenario, FixedScenarioSource, ScenarioSource, UniformScenarioSource, SCENARIOS,
};
pub use simulator::{spawn_analysis, ANALYSIS_DELAY};
