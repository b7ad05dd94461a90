// prose-core-client/prose-muc-owner
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use jid::BareJid;
use parking_lot::Mutex;

use super::{RoomAffiliation, RoomSettings};

/// A room behind its exclusive lock. All owner requests for a room are serialized through it.
pub type SharedRoom = Arc<Mutex<Room>>;

#[derive(Debug, Clone)]
pub struct Room {
    pub jid: BareJid,
    pub settings: RoomSettings,
    /// Affiliations by bare address. Entries may denote groups, which are stored as such and
    /// never expanded.
    pub affiliations: HashMap<BareJid, RoomAffiliation>,
    /// The room has been created but not yet configured.
    pub is_locked: bool,
    /// The room was explicitly locked and stays locked after configuration.
    pub is_manually_locked: bool,
    pub modified_at: DateTime<Utc>,
}

impl Room {
    /// Creates a locked room with default settings owned by `owner`.
    pub fn new(jid: BareJid, owner: BareJid, created_at: DateTime<Utc>) -> Self {
        Room {
            jid,
            settings: Default::default(),
            affiliations: HashMap::from([(owner, RoomAffiliation::Owner)]),
            is_locked: true,
            is_manually_locked: false,
            modified_at: created_at,
        }
    }

    pub fn affiliation_of(&self, jid: &BareJid) -> RoomAffiliation {
        self.affiliations.get(jid).copied().unwrap_or_default()
    }

    /// Returns the previous affiliation.
    pub fn set_affiliation(
        &mut self,
        jid: BareJid,
        affiliation: RoomAffiliation,
    ) -> RoomAffiliation {
        if affiliation == RoomAffiliation::None {
            return self.affiliations.remove(&jid).unwrap_or_default();
        }
        self.affiliations
            .insert(jid, affiliation)
            .unwrap_or_default()
    }

    pub fn owners(&self) -> Vec<BareJid> {
        self.jids_with_affiliation(RoomAffiliation::Owner)
    }

    pub fn admins(&self) -> Vec<BareJid> {
        self.jids_with_affiliation(RoomAffiliation::Admin)
    }

    fn jids_with_affiliation(&self, affiliation: RoomAffiliation) -> Vec<BareJid> {
        let mut jids = self
            .affiliations
            .iter()
            .filter_map(|(jid, a)| (a == &affiliation).then(|| jid.clone()))
            .collect::<Vec<_>>();
        jids.sort_by_key(|jid| jid.to_string());
        jids
    }
}
