// prose-core-client/prose-muc-owner
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use localizer::Localizer;
pub use stanza_router::StanzaRouter;
pub use time_provider::TimeProvider;

mod localizer;
mod stanza_router;
mod time_provider;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::localizer::MockLocalizer;
    pub use super::stanza_router::MockStanzaRouter;
}
