// prose-core-client/prose-muc-owner
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use jid::Jid;

use crate::domain::general::models::FormText;

/// Provides human-readable strings in the preferred language of a recipient.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait Localizer: Send + Sync {
    fn localize(&self, text: &FormText, recipient: Option<Jid>) -> String;
}
