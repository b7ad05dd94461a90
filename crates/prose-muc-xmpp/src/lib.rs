// prose-core-client/prose-muc-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use stanza::ns;
pub use util::{parse_bool, ElementExt, ParseError};

pub mod stanza;
mod util;

#[cfg(any(test, feature = "test"))]
pub mod test;
