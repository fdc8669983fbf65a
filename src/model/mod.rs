//! The in-memory activity roster and the shared handle the web layer talks to.

mod activity;
mod error;
mod roster;

pub use activity::Activity;
pub use error::{Error, Result, RosterError, RosterResult};
pub use roster::Roster;

use std::sync::Arc;

use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::info;

use crate::config::RosterConfig;

/// Whether `max_participants` is checked on signup.
#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CapacityPolicy {
    /// Capacity is informational only.
    #[default]
    Advisory,
    /// Signups are rejected once an activity holds `max_participants` students.
    Enforced,
}

/// Owns the roster for the lifetime of the process.
/// Cheap to clone, all clones share the same roster behind a single `RwLock`.
#[derive(Clone, Debug)]
pub struct ModelManager {
    roster: Arc<RwLock<Roster>>,
    capacity_policy: CapacityPolicy,
}

impl ModelManager {
    /// Loads the seed roster named in the config, or the embedded default one.
    pub fn init(config: &RosterConfig) -> Result<Self> {
        let roster = match &config.seed_file {
            Some(path) => {
                info!("{:<20} - Loading roster from {}", "init_roster", path.display());
                Roster::from_toml_str(&std::fs::read_to_string(path)?)?
            }
            None => {
                info!("{:<20} - Loading the default roster", "init_roster");
                Roster::seeded()?
            }
        };

        Ok(Self::new(roster, config.capacity_policy))
    }

    pub fn new(roster: Roster, capacity_policy: CapacityPolicy) -> Self {
        Self {
            roster: Arc::new(RwLock::new(roster)),
            capacity_policy,
        }
    }

    pub fn capacity_policy(&self) -> CapacityPolicy {
        self.capacity_policy
    }

    /// A snapshot of the whole roster.
    pub async fn list_activities(&self) -> Roster {
        self.roster.read().await.clone()
    }

    pub async fn signup(&self, activity_name: &str, email: &str) -> RosterResult<()> {
        self.roster
            .write()
            .await
            .signup(activity_name, email, self.capacity_policy)
    }

    pub async fn unregister(&self, activity_name: &str, email: &str) -> RosterResult<()> {
        self.roster.write().await.unregister(activity_name, email)
    }
}
