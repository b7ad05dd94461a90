// prose-core-client/prose-muc-owner
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use jid::Jid;
use xmpp_parsers::data_forms::DataForm;

use crate::domain::rooms::models::{
    OwnerError, OwnerRequest, OwnerResponse, Room, RoomAffiliation,
};

#[cfg_attr(feature = "test", mockall::automock)]
pub trait OwnerRequestHandler: Send + Sync {
    /// Handles `request` for `room`. The caller must hold the room's lock.
    ///
    /// `actor_affiliation` is the affiliation of the occupant that sent the request. If `None`
    /// the affiliation of the sender's bare address is looked up in the room.
    fn handle(
        &self,
        room: &mut Room,
        request: OwnerRequest,
        actor_affiliation: Option<RoomAffiliation>,
    ) -> Result<OwnerResponse, OwnerError>;

    /// Renders the current configuration of `room` as seen by `recipient`.
    fn configuration_form(&self, room: &Room, recipient: Option<Jid>) -> DataForm;
}
