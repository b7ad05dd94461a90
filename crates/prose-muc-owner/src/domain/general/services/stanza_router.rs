// prose-core-client/prose-muc-owner
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use minidom::Element;

/// Delivers stanzas to their recipients.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait StanzaRouter: Send + Sync {
    fn route(&self, stanza: Element) -> Result<()>;
}
