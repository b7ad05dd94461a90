// prose-core-client/prose-muc-owner
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;

use crate::domain::rooms::models::Room;

/// Mirrors rooms on remote servers.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait FederationService: Send + Sync {
    fn apply_configuration_changes(&self, room: &Room) -> Result<()>;
}
