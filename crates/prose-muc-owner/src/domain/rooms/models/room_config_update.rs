// prose-core-client/prose-muc-owner
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::{BTreeSet, HashMap};
use std::str::FromStr;

use jid::{BareJid, Jid};
use secrecy::Secret;
use xmpp_parsers::data_forms::{DataForm, Field};

use prose_muc_xmpp::parse_bool;
use prose_muc_xmpp::stanza::muc::ns::roomconfig;
use prose_muc_xmpp::stanza::muc::ConfigStatus;

use super::{Anonymity, BroadcastRole, OwnerConfig, OwnerError, PrivateMessagePolicy, RoomSettings};

/// A fully validated configuration submission that has not been applied yet.
///
/// Every member is `None` if the corresponding field was absent from the submitted form, in
/// which case the current value stays untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoomConfigUpdate {
    /// The requested owners. `Some` with at least one entry if the field was submitted.
    pub owners: Option<Vec<BareJid>>,
    /// The requested admins. May be empty if the field was submitted without values.
    pub admins: Option<Vec<BareJid>>,

    /// `Some("")` if the name field was submitted without a value.
    pub name: Option<String>,
    /// `Some("")` if the description field was submitted without a value.
    pub description: Option<String>,
    pub can_occupants_change_subject: Option<bool>,
    pub max_occupants: Option<u32>,
    pub broadcast_roles: Option<BTreeSet<BroadcastRole>>,
    pub is_public: Option<bool>,
    pub retire_on_deletion: Option<bool>,
    pub preserve_history_on_deletion: Option<bool>,
    pub is_persistent: Option<bool>,
    pub is_moderated: Option<bool>,
    pub is_members_only: Option<bool>,
    pub can_occupants_invite: Option<bool>,
    pub is_password_protected: Option<bool>,
    /// `Some(None)` if the password field was submitted empty.
    pub password: Option<Option<String>>,
    pub anonymity: Option<Anonymity>,
    pub private_messages: Option<PrivateMessagePolicy>,
    pub is_logging_enabled: Option<bool>,
    pub is_nickname_reserved: Option<bool>,
    pub can_change_nickname: Option<bool>,
    pub is_registration_enabled: Option<bool>,
}

impl RoomConfigUpdate {
    /// Parses and validates all fields of a submitted `muc#roomconfig` form. Fields with unknown
    /// variables are ignored.
    pub fn parse(form: &DataForm, config: &OwnerConfig) -> Result<Self, OwnerError> {
        let fields = SubmittedFields::new(form);

        let admins = fields.jids(roomconfig::ROOM_ADMINS)?;
        let owners = fields.jids(roomconfig::ROOM_OWNERS)?;

        // A room must never lose all of its owners.
        if owners.as_ref().is_some_and(|owners| owners.is_empty()) {
            return Err(OwnerError::Conflict);
        }

        Ok(RoomConfigUpdate {
            owners,
            admins,
            name: fields.text(roomconfig::ROOM_NAME),
            description: fields.text(roomconfig::ROOM_DESC),
            can_occupants_change_subject: fields.bool(roomconfig::CHANGE_SUBJECT, true)?,
            max_occupants: fields.max_occupants(config.default_max_occupants)?,
            broadcast_roles: fields.broadcast_roles()?,
            is_public: fields.bool(roomconfig::PUBLIC_ROOM, true)?,
            retire_on_deletion: fields.bool(roomconfig::RETIRE_ON_DELETION, false)?,
            preserve_history_on_deletion: fields
                .bool(roomconfig::PRESERVE_HISTORY_ON_DELETION, true)?,
            is_persistent: fields.bool(roomconfig::PERSISTENT_ROOM, true)?,
            is_moderated: fields.bool(roomconfig::MODERATED_ROOM, true)?,
            is_members_only: fields.bool(roomconfig::MEMBERS_ONLY, true)?,
            can_occupants_invite: fields.bool(roomconfig::ALLOW_INVITES, true)?,
            is_password_protected: fields.bool(roomconfig::PASSWORD_PROTECTED_ROOM, true)?,
            password: fields.get(roomconfig::ROOM_SECRET).map(|field| {
                first_value(field)
                    .filter(|value| !value.is_empty())
                    .map(ToString::to_string)
            }),
            anonymity: fields
                .get(roomconfig::WHOIS)
                .map(|field| Anonymity::from_whois(first_value(field).unwrap_or_default())),
            private_messages: fields.private_messages()?,
            is_logging_enabled: fields.bool(roomconfig::ENABLE_LOGGING, true)?,
            is_nickname_reserved: fields.bool(roomconfig::RESERVED_NICK, true)?,
            can_change_nickname: fields.bool(roomconfig::CAN_CHANGE_NICK, true)?,
            is_registration_enabled: fields.bool(roomconfig::REGISTRATION, true)?,
        })
    }

    /// Computes the settings that result from applying this update to `current` together with
    /// the privacy-related status codes the change produces.
    pub fn apply_to(
        &self,
        current: &RoomSettings,
    ) -> Result<(RoomSettings, BTreeSet<ConfigStatus>), OwnerError> {
        let mut settings = current.clone();
        let mut statuses = BTreeSet::new();

        macro_rules! assign {
            ($($field:ident),+ $(,)?) => {
                $(
                    if let Some(value) = &self.$field {
                        settings.$field = value.clone();
                    }
                )+
            };
        }

        assign!(
            name,
            description,
            can_occupants_change_subject,
            max_occupants,
            broadcast_roles,
            is_public,
            retire_on_deletion,
            preserve_history_on_deletion,
            is_persistent,
            is_moderated,
            is_members_only,
            can_occupants_invite,
            anonymity,
            private_messages,
            is_logging_enabled,
            is_nickname_reserved,
            can_change_nickname,
            is_registration_enabled,
        );

        match (self.is_password_protected, &self.password) {
            (Some(false), _) => settings.password = None,
            (Some(true), Some(Some(password))) => {
                settings.password = Some(Secret::new(password.clone()))
            }
            (Some(true), _) if current.password.is_none() => {
                return Err(OwnerError::NotAcceptable {
                    reason: "Room is made password-protected, but is missing a password."
                        .to_string(),
                })
            }
            (Some(true), _) => (),
            (None, Some(password)) => settings.password = password.clone().map(Secret::new),
            (None, None) => (),
        }

        match (current.anonymity, settings.anonymity) {
            (Anonymity::SemiAnonymous, Anonymity::NonAnonymous) => {
                statuses.insert(ConfigStatus::NonAnonymous);
            }
            (Anonymity::NonAnonymous, Anonymity::SemiAnonymous) => {
                statuses.insert(ConfigStatus::SemiAnonymous);
            }
            _ => (),
        }

        match (current.is_logging_enabled, settings.is_logging_enabled) {
            (false, true) => {
                statuses.insert(ConfigStatus::LoggingEnabled);
            }
            (true, false) => {
                statuses.insert(ConfigStatus::LoggingDisabled);
            }
            _ => (),
        }

        Ok((settings, statuses))
    }
}

struct SubmittedFields<'a> {
    fields: HashMap<&'a str, &'a Field>,
}

impl<'a> SubmittedFields<'a> {
    fn new(form: &'a DataForm) -> Self {
        let mut fields = HashMap::new();
        for field in &form.fields {
            let Some(var) = field.var.as_deref() else {
                continue;
            };
            fields.entry(var).or_insert(field);
        }
        SubmittedFields { fields }
    }

    fn get(&self, var: &str) -> Option<&'a Field> {
        self.fields.get(var).copied()
    }

    fn text(&self, var: &str) -> Option<String> {
        self.get(var)
            .map(|field| first_value(field).unwrap_or_default().to_string())
    }

    fn bool(&self, var: &str, default: bool) -> Result<Option<bool>, OwnerError> {
        let Some(field) = self.get(var) else {
            return Ok(None);
        };

        match first_value(field) {
            None | Some("") => Ok(Some(default)),
            Some(value) => parse_bool(value)
                .map(Some)
                .map_err(|_| OwnerError::invalid_value(var, value)),
        }
    }

    /// Trimmed, non-blank values normalized to their bare form.
    fn jids(&self, var: &str) -> Result<Option<Vec<BareJid>>, OwnerError> {
        let Some(field) = self.get(var) else {
            return Ok(None);
        };

        let mut jids = Vec::<BareJid>::new();
        for value in field.values.iter().map(|value| value.trim()) {
            if value.is_empty() {
                continue;
            }
            let jid = Jid::from_str(value)
                .map_err(|_| OwnerError::invalid_value(var, value))?
                .into_bare();
            if !jids.contains(&jid) {
                jids.push(jid);
            }
        }
        Ok(Some(jids))
    }

    fn max_occupants(&self, default: u32) -> Result<Option<u32>, OwnerError> {
        let Some(field) = self.get(roomconfig::MAX_USERS) else {
            return Ok(None);
        };

        match first_value(field).map(str::trim) {
            None | Some("") => Ok(Some(default)),
            Some(value) => u32::from_str(value)
                .map(Some)
                .map_err(|_| OwnerError::invalid_value(roomconfig::MAX_USERS, value)),
        }
    }

    fn broadcast_roles(&self) -> Result<Option<BTreeSet<BroadcastRole>>, OwnerError> {
        let Some(field) = self.get(roomconfig::PRESENCE_BROADCAST) else {
            return Ok(None);
        };

        field
            .values
            .iter()
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .map(|value| {
                BroadcastRole::from_str(value)
                    .map_err(|_| OwnerError::invalid_value(roomconfig::PRESENCE_BROADCAST, value))
            })
            .collect::<Result<BTreeSet<_>, _>>()
            .map(Some)
    }

    fn private_messages(&self) -> Result<Option<PrivateMessagePolicy>, OwnerError> {
        let Some(field) = self.get(roomconfig::ALLOW_PM) else {
            return Ok(None);
        };

        match first_value(field) {
            None | Some("") => Ok(Some(PrivateMessagePolicy::Anyone)),
            Some(value) => PrivateMessagePolicy::from_str(value)
                .map(Some)
                .map_err(|_| OwnerError::invalid_value(roomconfig::ALLOW_PM, value)),
        }
    }
}

fn first_value(field: &Field) -> Option<&str> {
    field.values.first().map(String::as_str)
}
