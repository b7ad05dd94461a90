// prose-core-client/prose-muc-owner
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use jid::{BareJid, Jid};
use xmpp_parsers::data_forms::DataForm;

use prose_muc_xmpp::stanza::muc::{Destroy, OwnerPayload};

/// An owner request addressed to a single room.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnerRequest {
    /// The real address of the requester. `None` for requests generated by the server itself.
    pub from: Option<Jid>,
    pub payload: OwnerPayload,
}

impl OwnerRequest {
    pub fn new(from: impl Into<Option<Jid>>, payload: OwnerPayload) -> Self {
        OwnerRequest {
            from: from.into(),
            payload,
        }
    }

    pub fn sender(&self) -> Option<BareJid> {
        self.from.as_ref().map(|jid| jid.to_bare())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OwnerResponse {
    /// The request was processed. The reply carries no payload.
    Empty,
    /// The current room configuration, in reply to an empty query.
    ConfigurationForm(DataForm),
}

/// How to tear down a room.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoomDestruction {
    /// A venue the occupants should move to.
    pub alternate_room: Option<BareJid>,
    pub password: Option<String>,
    pub reason: Option<String>,
}

impl From<Destroy> for RoomDestruction {
    fn from(value: Destroy) -> Self {
        RoomDestruction {
            alternate_room: value.jid,
            password: value.password,
            reason: value.reason,
        }
    }
}
