// prose-core-client/prose-muc-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Parse error: {msg}")]
    Generic { msg: String },
    #[error(transparent)]
    JidError(#[from] jid::Error),
    #[error(transparent)]
    ParseIntError(#[from] std::num::ParseIntError),
}

impl ParseError {
    /// Wraps errors of the `xmpp_parsers` element conversions whose concrete type differs
    /// between payloads.
    pub fn xmpp(error: impl std::fmt::Display) -> Self {
        Self::Generic {
            msg: error.to_string(),
        }
    }
}
