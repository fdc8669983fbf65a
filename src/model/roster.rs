//! The roster: every activity keyed by its name, plus the signup and unregister operations.
//! Everything here is synchronous and lock-free, `ModelManager` adds the sharing.

use std::collections::BTreeMap;

use derive_more::Deref;
use serde::{Deserialize, Serialize};

use super::{
    error::{Error, Result, RosterError, RosterResult},
    Activity, CapacityPolicy,
};

const DEFAULT_SEED: &str = include_str!("../../data/activities.toml");

/// Activity name -> activity record.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Deref)]
#[serde(transparent)]
pub struct Roster(BTreeMap<String, Activity>);

/// Shape of a seed file: one `[activities."<name>"]` table per activity.
#[derive(Deserialize)]
struct SeedFile {
    activities: BTreeMap<String, Activity>,
}

impl Roster {
    /// The roster compiled into the binary.
    pub fn seeded() -> Result<Self> {
        Self::from_toml_str(DEFAULT_SEED)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let seed: SeedFile = toml::from_str(content)?;

        for (name, activity) in &seed.activities {
            if let Some(email) = activity.first_duplicate() {
                return Err(Error::DuplicateParticipant {
                    activity: name.clone(),
                    email: email.to_string(),
                });
            }
        }

        Ok(Roster(seed.activities))
    }

    /// Appends `email` to the participants of `activity_name`.
    ///
    /// The duplicate check runs before the capacity check, so a student already on a full
    /// activity is told they are signed up rather than that it is full.
    pub fn signup(
        &mut self,
        activity_name: &str,
        email: &str,
        policy: CapacityPolicy,
    ) -> RosterResult<()> {
        let activity = self.activity_mut(activity_name)?;

        if activity.has_participant(email) {
            return Err(RosterError::AlreadyRegistered {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }

        if policy == CapacityPolicy::Enforced && activity.is_full() {
            return Err(RosterError::ActivityFull {
                activity: activity_name.to_string(),
                max_participants: activity.max_participants,
            });
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    pub fn unregister(&mut self, activity_name: &str, email: &str) -> RosterResult<()> {
        let activity = self.activity_mut(activity_name)?;

        let Some(idx) = activity.participants.iter().position(|p| p == email) else {
            return Err(RosterError::NotRegistered {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        };
        activity.participants.remove(idx);

        Ok(())
    }

    fn activity_mut(&mut self, activity_name: &str) -> RosterResult<&mut Activity> {
        self.0
            .get_mut(activity_name)
            .ok_or_else(|| RosterError::ActivityNotFound {
                activity: activity_name.to_string(),
            })
    }
}
