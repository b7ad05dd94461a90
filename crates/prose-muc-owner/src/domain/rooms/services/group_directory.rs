// prose-core-client/prose-muc-owner
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use jid::BareJid;

/// Resolves group identities. Groups may appear in the affiliation lists of a room.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait GroupDirectory: Send + Sync {
    fn is_group(&self, jid: &BareJid) -> bool;

    /// Returns the current members of the group `jid`.
    fn members(&self, jid: &BareJid) -> Result<Vec<BareJid>>;
}
