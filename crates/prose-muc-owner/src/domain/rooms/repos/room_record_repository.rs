// prose-core-client/prose-muc-owner
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use jid::BareJid;

use crate::domain::rooms::models::Room;

/// Durable storage of persistent rooms.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait RoomRecordRepository: Send + Sync {
    fn save(&self, room: &Room) -> Result<()>;
    fn delete(&self, room: &BareJid) -> Result<()>;
}
