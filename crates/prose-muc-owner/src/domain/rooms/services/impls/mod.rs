// prose-core-client/prose-muc-owner
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use owner_request_handler::{OwnerRequestHandler, OwnerRequestHandlerDependencies};

mod owner_request_handler;
mod room_config_form;
