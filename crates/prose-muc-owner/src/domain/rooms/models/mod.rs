// prose-core-client/prose-muc-owner
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use affiliation_changes::{AffiliationChange, AffiliationChanges};
pub use owner_config::OwnerConfig;
pub use owner_error::OwnerError;
pub use owner_request::{OwnerRequest, OwnerResponse, RoomDestruction};
pub use room::{Room, SharedRoom};
pub use room_affiliation::RoomAffiliation;
pub use room_config_update::RoomConfigUpdate;
pub use room_settings::{Anonymity, BroadcastRole, PrivateMessagePolicy, RoomSettings};

mod affiliation_changes;
mod owner_config;
mod owner_error;
mod owner_request;
mod room;
mod room_affiliation;
mod room_config_update;
mod room_settings;
