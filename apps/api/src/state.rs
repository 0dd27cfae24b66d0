use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::analysis::scenarios::{ScenarioSource, UniformScenarioSource};
use crate::config::Config;
use crate::notify::{Mailer, Outbox, SimulatedMailer};
use crate::store::Ats;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The whole in-memory store behind one lock, so every
    /// read-modify-write against it is atomic.
    pub ats: Arc<RwLock<Ats>>,
    /// Pluggable analysis outcome source. Default: uniform random draw
    /// from the catalog; tests pin a fixed entry.
    pub scenarios: Arc<dyn ScenarioSource>,
    /// Pluggable delivery backend. Default: the simulated mailer.
    pub mailer: Arc<dyn Mailer>,
    pub outbox: Outbox,
    pub config: Config,
}

impl AppState {
    /// Production wiring: seeded store, random scenarios, simulated mail.
    pub fn new(config: Config) -> Self {
        let outbox = Outbox::default();
        AppState {
            ats: Arc::new(RwLock::new(Ats::seeded(Utc::now()))),
            scenarios: Arc::new(UniformScenarioSource),
            mailer: Arc::new(SimulatedMailer::new(outbox.clone())),
            outbox,
            config,
        }
    }
}
