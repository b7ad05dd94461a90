// prose-core-client/prose-muc-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::str::FromStr;

use jid::BareJid;
use minidom::Element;

use crate::ns;
use crate::util::{ElementExt, ParseError};

/// Status codes announcing a configuration change to all occupants.
/// https://xmpp.org/extensions/xep-0045.html#roomconfig-notify
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub enum ConfigStatus {
    /// 104: A configuration change that is not privacy-related.
    NonPrivacyChange,
    /// 170: Room logging is now enabled.
    LoggingEnabled,
    /// 171: Room logging is now disabled.
    LoggingDisabled,
    /// 172: The room is now non-anonymous.
    NonAnonymous,
    /// 173: The room is now semi-anonymous.
    SemiAnonymous,
}

impl ConfigStatus {
    pub fn code(&self) -> u16 {
        match self {
            Self::NonPrivacyChange => 104,
            Self::LoggingEnabled => 170,
            Self::LoggingDisabled => 171,
            Self::NonAnonymous => 172,
            Self::SemiAnonymous => 173,
        }
    }
}

impl TryFrom<u16> for ConfigStatus {
    type Error = ParseError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        Ok(match code {
            104 => Self::NonPrivacyChange,
            170 => Self::LoggingEnabled,
            171 => Self::LoggingDisabled,
            172 => Self::NonAnonymous,
            173 => Self::SemiAnonymous,
            _ => {
                return Err(ParseError::Generic {
                    msg: format!("Unexpected configuration status code {}.", code),
                })
            }
        })
    }
}

/// The groupchat message a room sends to itself after its configuration changed.
#[derive(Debug, PartialEq, Clone)]
pub struct ConfigChangeNotification {
    pub room: BareJid,
    pub statuses: Vec<ConfigStatus>,
}

impl From<ConfigChangeNotification> for Element {
    fn from(value: ConfigChangeNotification) -> Self {
        let room = value.room.to_string();

        Element::builder("message", ns::JABBER_CLIENT)
            .attr("from", room.clone())
            .attr("to", room)
            .attr("type", "groupchat")
            .append(
                Element::builder("x", ns::MUC_USER)
                    .append_all(value.statuses.into_iter().map(|status| {
                        Element::builder("status", ns::MUC_USER)
                            .attr("code", status.code().to_string())
                            .build()
                    }))
                    .build(),
            )
            .build()
    }
}

impl TryFrom<Element> for ConfigChangeNotification {
    type Error = ParseError;

    fn try_from(root: Element) -> Result<Self, Self::Error> {
        root.expect_is("message", ns::JABBER_CLIENT)?;

        let room = root.attr("from").ok_or(ParseError::Generic {
            msg: "Missing required attribute from in element message.".to_string(),
        })?;

        let statuses = root
            .get_child("x", ns::MUC_USER)
            .map(|x| {
                x.children()
                    .filter(|child| child.is("status", ns::MUC_USER))
                    .map(|status| {
                        let code = status.attr("code").unwrap_or_default();
                        ConfigStatus::try_from(u16::from_str(code)?)
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?
            .unwrap_or_default();

        Ok(ConfigChangeNotification {
            room: BareJid::from_str(room)?,
            statuses,
        })
    }
}
