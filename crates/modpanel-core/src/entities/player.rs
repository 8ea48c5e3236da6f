//! Active player snapshot
//!
//! Advisory roster pushed by the game server. Never consulted for kick or ban decisions.

use std::collections::hash_map::{Entry, HashMap};

use chrono::{DateTime, Utc};

use crate::value_objects::UserId;

/// Player currently online, as last reported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePlayer {
    pub user_id: UserId,
    pub name: String,
    pub last_seen: DateTime<Utc>,
}

/// Roster entry received from the game server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub user_id: UserId,
    pub name: String,
}

impl RosterEntry {
    pub fn new(user_id: UserId, name: impl Into<String>) -> Self {
        Self {
            user_id,
            name: name.into(),
        }
    }

    /// Collapse duplicate user ids, keeping the last occurrence in its original slot order
    pub fn dedup_last_wins(entries: &[RosterEntry]) -> Vec<RosterEntry> {
        let mut slots: HashMap<UserId, usize> = HashMap::with_capacity(entries.len());
        let mut out: Vec<RosterEntry> = Vec::with_capacity(entries.len());
        for entry in entries {
            match slots.entry(entry.user_id) {
                Entry::Occupied(slot) => out[*slot.get()].name.clone_from(&entry.name),
                Entry::Vacant(slot) => {
                    slot.insert(out.len());
                    out.push(entry.clone());
                }
            }
        }
        out
    }
}
