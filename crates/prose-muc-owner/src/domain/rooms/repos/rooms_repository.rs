// prose-core-client/prose-muc-owner
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use jid::BareJid;

use crate::domain::rooms::models::{Room, SharedRoom};

pub struct RoomAlreadyExistsError;

/// The rooms hosted by this service.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait RoomsRepository: Send + Sync {
    fn get(&self, room: &BareJid) -> Option<SharedRoom>;

    fn set(&self, room: Room) -> Result<SharedRoom, RoomAlreadyExistsError>;

    /// Deletes the room identified by `room` from the repository and returns the removed room.
    fn delete(&self, room: &BareJid) -> Option<SharedRoom>;
}
