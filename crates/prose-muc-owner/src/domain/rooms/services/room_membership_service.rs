// prose-core-client/prose-muc-owner
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use jid::Jid;
use xmpp_parsers::presence::Presence;

use crate::domain::rooms::models::{AffiliationChange, Room, RoomAffiliation};

/// The membership logic of a room.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait RoomMembershipService: Send + Sync {
    /// Called after the affiliation of `change.jid` was changed in `room`. Returns the
    /// presences to broadcast to the occupants.
    fn affiliation_changed(
        &self,
        room: &Room,
        change: &AffiliationChange,
        actor_affiliation: RoomAffiliation,
    ) -> Result<Vec<Presence>>;

    /// Called after the members-only flag of `room` was changed. Kicks or converts
    /// non-members as needed and returns the presences to broadcast to the occupants.
    fn members_only_changed(
        &self,
        room: &Room,
        actor_affiliation: RoomAffiliation,
        actor: Option<Jid>,
    ) -> Result<Vec<Presence>>;

    fn occupants_count(&self, room: &Room) -> usize;
}
