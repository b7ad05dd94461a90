// prose-core-client/prose-muc-owner
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use jid::BareJid;
use xmpp_parsers::presence::Presence;

use prose_muc_xmpp::stanza::muc::ConfigChangeNotification;

/// Sends stanzas to all occupants of a room on behalf of the room itself.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait RoomBroadcastService: Send + Sync {
    fn send_presence(&self, room: &BareJid, presence: Presence) -> Result<()>;
    fn broadcast_configuration_change(&self, notification: ConfigChangeNotification) -> Result<()>;
}
