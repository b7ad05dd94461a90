// prose-core-client/prose-muc-owner
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use jid::Jid;

use crate::domain::rooms::models::{Room, RoomDestruction};

#[cfg_attr(feature = "test", mockall::automock)]
pub trait RoomLifecycleService: Send + Sync {
    /// Tears down `room`, kicking all occupants.
    fn destroy_room(&self, room: &Room, destruction: RoomDestruction) -> Result<()>;

    /// Called after a locked room has been unlocked by its first configuration. Implementations
    /// notify `actor` that the room is now open.
    fn room_unlocked(&self, room: &Room, actor: Option<Jid>) -> Result<()>;
}
