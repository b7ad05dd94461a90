// prose-core-client/prose-muc-owner
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use jid::Jid;

use crate::domain::rooms::models::Room;

/// Gets a say in whether a room may be destroyed.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait DestroyDelegate: Send + Sync {
    fn may_destroy(&self, room: &Room, actor: Option<Jid>) -> bool;
}
