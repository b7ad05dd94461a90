// prose-core-client/prose-muc-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use config_status::{ConfigChangeNotification, ConfigStatus};
pub use destroy::Destroy;
pub use owner_query::{OwnerPayload, OwnerQuery};

mod config_status;
mod destroy;
pub mod ns;
mod owner_query;
