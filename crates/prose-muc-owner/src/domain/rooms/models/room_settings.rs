// prose-core-client/prose-muc-owner
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::BTreeSet;

use secrecy::{ExposeSecret, SecretString};
use strum_macros::{Display, EnumIter, EnumString};

use prose_muc_xmpp::stanza::muc::ns::whois;

/// The configurable attributes of a room.
#[derive(Debug, Clone)]
pub struct RoomSettings {
    /// Natural-language name of the room.
    pub name: String,
    pub description: String,
    /// Maximum number of occupants. `0` means unlimited.
    pub max_occupants: u32,
    /// Roles whose presence is broadcast to the room.
    pub broadcast_roles: BTreeSet<BroadcastRole>,
    pub is_public: bool,
    pub is_moderated: bool,
    pub is_members_only: bool,
    pub is_persistent: bool,
    pub is_logging_enabled: bool,
    /// Who may discover the real addresses of occupants.
    pub anonymity: Anonymity,
    pub can_occupants_change_subject: bool,
    pub can_occupants_invite: bool,
    pub can_change_nickname: bool,
    /// Only registered members may use their reserved nickname to join.
    pub is_nickname_reserved: bool,
    pub is_registration_enabled: bool,
    pub retire_on_deletion: bool,
    pub preserve_history_on_deletion: bool,
    pub private_messages: PrivateMessagePolicy,
    /// The room is password-protected iff a password is set.
    pub password: Option<SecretString>,
}

impl RoomSettings {
    pub fn is_password_protected(&self) -> bool {
        self.password.is_some()
    }

    pub fn password(&self) -> Option<&str> {
        self.password
            .as_ref()
            .map(|password| password.expose_secret().as_str())
    }
}

impl Default for RoomSettings {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            max_occupants: 30,
            broadcast_roles: BroadcastRole::all(),
            is_public: true,
            is_moderated: false,
            is_members_only: false,
            is_persistent: false,
            is_logging_enabled: false,
            anonymity: Anonymity::SemiAnonymous,
            can_occupants_change_subject: false,
            can_occupants_invite: false,
            can_change_nickname: true,
            is_nickname_reserved: false,
            is_registration_enabled: true,
            retire_on_deletion: false,
            preserve_history_on_deletion: true,
            private_messages: PrivateMessagePolicy::Anyone,
            password: None,
        }
    }
}

#[derive(
    Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum BroadcastRole {
    Moderator,
    Participant,
    Visitor,
}

impl BroadcastRole {
    pub fn all() -> BTreeSet<BroadcastRole> {
        BTreeSet::from([
            BroadcastRole::Moderator,
            BroadcastRole::Participant,
            BroadcastRole::Visitor,
        ])
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Anonymity {
    /// Anyone may discover the real addresses of occupants.
    NonAnonymous,
    /// Only moderators may discover the real addresses of occupants.
    SemiAnonymous,
}

impl Anonymity {
    /// Maps a `muc#roomconfig_whois` value. Everything but `anyone` restricts discovery to
    /// moderators.
    pub fn from_whois(value: &str) -> Self {
        if value == whois::ANYONE {
            Anonymity::NonAnonymous
        } else {
            Anonymity::SemiAnonymous
        }
    }

    pub fn whois(&self) -> &'static str {
        match self {
            Anonymity::NonAnonymous => whois::ANYONE,
            Anonymity::SemiAnonymous => whois::MODERATORS,
        }
    }
}

/// Who may send private messages to other occupants.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum PrivateMessagePolicy {
    Anyone,
    Moderators,
    Participants,
    None,
}
