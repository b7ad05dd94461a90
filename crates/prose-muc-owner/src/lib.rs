// prose-core-client/prose-muc-owner
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app::deps::AppDependencies;
pub use app::services::MucOwnerService;
pub use domain::rooms::models::{OwnerConfig, OwnerError, Room, RoomAffiliation, SharedRoom};


pub mod app;
pub mod domain;
pub mod infra;
