// prose-core-client/prose-muc-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::str::FromStr;

use jid::BareJid;
use minidom::Element;

use crate::ns;
use crate::util::{ElementExt, ParseError};

/// `<destroy/>` as sent by an owner inside a `muc#owner` query.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Destroy {
    /// An alternate venue the occupants are pointed to.
    pub jid: Option<BareJid>,
    /// The password of the alternate venue.
    pub password: Option<String>,
    pub reason: Option<String>,
}

impl TryFrom<Element> for Destroy {
    type Error = ParseError;

    fn try_from(root: Element) -> Result<Self, Self::Error> {
        root.expect_is("destroy", ns::MUC_OWNER)?;

        Ok(Destroy {
            jid: root.attr("jid").map(BareJid::from_str).transpose()?,
            password: root.trimmed_child_text("password", ns::MUC_OWNER),
            reason: root.trimmed_child_text("reason", ns::MUC_OWNER),
        })
    }
}

impl From<Destroy> for Element {
    fn from(value: Destroy) -> Self {
        Element::builder("destroy", ns::MUC_OWNER)
            .attr("jid", value.jid.map(|jid| jid.to_string()))
            .append_all(value.password.map(|password| {
                Element::builder("password", ns::MUC_OWNER)
                    .append(password)
                    .build()
            }))
            .append_all(value.reason.map(|reason| {
                Element::builder("reason", ns::MUC_OWNER)
                    .append(reason)
                    .build()
            }))
            .build()
    }
}
