// prose-core-client/prose-muc-owner
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use jid::{BareJid, Jid};
use strum::IntoEnumIterator;
use tracing::warn;
use xmpp_parsers::data_forms::{DataForm, DataFormType, Field, FieldType, Option_};

use prose_muc_xmpp::ns;
use prose_muc_xmpp::stanza::muc::ns::{roomconfig, whois};

use crate::app::deps::{DynGroupDirectory, DynLocalizer, DynOwnerConfig};
use crate::domain::general::models::FormText;
use crate::domain::rooms::models::{BroadcastRole, PrivateMessagePolicy, Room};

/// Renders the configuration of a room as a `muc#roomconfig` form.
pub(super) struct RoomConfigFormBuilder<'a> {
    pub config: &'a DynOwnerConfig,
    pub localizer: &'a DynLocalizer,
    pub group_directory: &'a DynGroupDirectory,
    pub recipient: Option<Jid>,
}

impl<'a> RoomConfigFormBuilder<'a> {
    pub fn build(&self, room: &Room) -> DataForm {
        let settings = &room.settings;

        let fields = vec![
            self.text_single(roomconfig::ROOM_NAME, FormText::RoomName, &settings.name),
            self.text_single(
                roomconfig::ROOM_DESC,
                FormText::RoomDescription,
                &settings.description,
            ),
            self.boolean(
                roomconfig::CHANGE_SUBJECT,
                FormText::ChangeSubject,
                settings.can_occupants_change_subject,
            ),
            self.max_users(settings.max_occupants),
            self.presence_broadcast(room),
            self.boolean(
                roomconfig::PUBLIC_ROOM,
                FormText::PublicRoom,
                settings.is_public,
            ),
            self.boolean(
                roomconfig::PERSISTENT_ROOM,
                FormText::PersistentRoom,
                settings.is_persistent,
            ),
            self.boolean(
                roomconfig::RETIRE_ON_DELETION,
                FormText::RetireOnDeletion,
                settings.retire_on_deletion,
            ),
            self.boolean(
                roomconfig::MODERATED_ROOM,
                FormText::ModeratedRoom,
                settings.is_moderated,
            ),
            self.boolean(
                roomconfig::MEMBERS_ONLY,
                FormText::MembersOnly,
                settings.is_members_only,
            ),
            self.fixed(FormText::AllowInvitesHint),
            self.boolean(
                roomconfig::ALLOW_INVITES,
                FormText::AllowInvites,
                settings.can_occupants_invite,
            ),
            self.boolean(
                roomconfig::PASSWORD_PROTECTED_ROOM,
                FormText::PasswordProtectedRoom,
                settings.is_password_protected(),
            ),
            self.fixed(FormText::RoomSecretHint),
            self.room_secret(settings.password()),
            self.whois(room),
            self.allow_private_messages(room),
            self.boolean(
                roomconfig::ENABLE_LOGGING,
                FormText::EnableLogging,
                settings.is_logging_enabled,
            ),
            self.boolean(
                roomconfig::PRESERVE_HISTORY_ON_DELETION,
                FormText::PreserveHistoryOnDeletion,
                settings.preserve_history_on_deletion,
            ),
            self.boolean(
                roomconfig::RESERVED_NICK,
                FormText::ReservedNick,
                settings.is_nickname_reserved,
            ),
            self.boolean(
                roomconfig::CAN_CHANGE_NICK,
                FormText::CanChangeNick,
                settings.can_change_nickname,
            ),
            self.fixed(FormText::Registration),
            self.boolean(
                roomconfig::REGISTRATION,
                FormText::Registration,
                settings.is_registration_enabled,
            ),
            self.fixed(FormText::RoomAdminsHint),
            self.jid_multi(
                roomconfig::ROOM_ADMINS,
                FormText::RoomAdmins,
                &room.admins(),
            ),
            self.fixed(FormText::RoomOwnersHint),
            self.jid_multi(
                roomconfig::ROOM_OWNERS,
                FormText::RoomOwners,
                &room.owners(),
            ),
        ];

        DataForm {
            type_: DataFormType::Form,
            form_type: Some(ns::MUC_ROOMCONFIG.to_string()),
            title: Some(self.localize(FormText::Title)),
            instructions: Some(self.localize(FormText::Instructions {
                room: room.jid.node_str().unwrap_or_default().to_string(),
            })),
            fields,
        }
    }
}

impl<'a> RoomConfigFormBuilder<'a> {
    fn localize(&self, text: FormText) -> String {
        self.localizer.localize(&text, self.recipient.clone())
    }

    fn field(&self, var: &str, type_: FieldType, label: FormText) -> Field {
        let mut field = Field::new(var, type_);
        field.label = Some(self.localize(label));
        field
    }

    fn option(&self, label: String, value: impl ToString) -> Option_ {
        Option_ {
            label: Some(label),
            value: value.to_string(),
        }
    }

    fn fixed(&self, text: FormText) -> Field {
        let mut field = Field::new("", FieldType::Fixed);
        field.var = None;
        field.values = vec![self.localize(text)];
        field
    }

    fn boolean(&self, var: &str, label: FormText, value: bool) -> Field {
        self.field(var, FieldType::Boolean, label)
            .with_value(if value { "1" } else { "0" })
    }

    fn text_single(&self, var: &str, label: FormText, value: &str) -> Field {
        let mut field = self.field(var, FieldType::TextSingle, label);
        field.values = vec![value.to_string()];
        field
    }

    fn room_secret(&self, password: Option<&str>) -> Field {
        let mut field = self.field(
            roomconfig::ROOM_SECRET,
            FieldType::TextPrivate,
            FormText::RoomSecret,
        );
        field.values = password.into_iter().map(ToString::to_string).collect();
        field
    }

    fn max_users(&self, max_occupants: u32) -> Field {
        let mut field = self.field(roomconfig::MAX_USERS, FieldType::ListSingle, FormText::MaxUsers);
        field.options = self
            .config
            .max_occupants_options
            .iter()
            .map(|option| {
                let label = match option {
                    0 => self.localize(FormText::None),
                    _ => option.to_string(),
                };
                self.option(label, option)
            })
            .collect();
        field.values = vec![max_occupants.to_string()];
        field
    }

    fn presence_broadcast(&self, room: &Room) -> Field {
        let mut field = self.field(
            roomconfig::PRESENCE_BROADCAST,
            FieldType::ListMulti,
            FormText::PresenceBroadcast,
        );
        field.options = BroadcastRole::iter()
            .map(|role| {
                let label = match role {
                    BroadcastRole::Moderator => FormText::Moderator,
                    BroadcastRole::Participant => FormText::Participant,
                    BroadcastRole::Visitor => FormText::Visitor,
                };
                self.option(self.localize(label), role)
            })
            .collect();
        field.values = room
            .settings
            .broadcast_roles
            .iter()
            .map(ToString::to_string)
            .collect();
        field
    }

    fn whois(&self, room: &Room) -> Field {
        let mut field = self.field(roomconfig::WHOIS, FieldType::ListSingle, FormText::Whois);
        field.options = vec![
            self.option(self.localize(FormText::Moderator), whois::MODERATORS),
            self.option(self.localize(FormText::Anyone), whois::ANYONE),
        ];
        field.values = vec![room.settings.anonymity.whois().to_string()];
        field
    }

    fn allow_private_messages(&self, room: &Room) -> Field {
        let mut field = self.field(
            roomconfig::ALLOW_PM,
            FieldType::ListSingle,
            FormText::AllowPrivateMessages,
        );
        field.options = PrivateMessagePolicy::iter()
            .map(|policy| {
                let label = match policy {
                    PrivateMessagePolicy::Anyone => FormText::Anyone,
                    PrivateMessagePolicy::Moderators => FormText::Moderator,
                    PrivateMessagePolicy::Participants => FormText::Participant,
                    PrivateMessagePolicy::None => FormText::None,
                };
                self.option(self.localize(label), policy)
            })
            .collect();
        field.values = vec![room.settings.private_messages.to_string()];
        field
    }

    /// Lists `jids` with groups replaced by their current members.
    fn jid_multi(&self, var: &str, label: FormText, jids: &[BareJid]) -> Field {
        let mut field = self.field(var, FieldType::JidMulti, label);

        for jid in jids {
            if !self.group_directory.is_group(jid) {
                field.values.push(jid.to_string());
                continue;
            }

            match self.group_directory.members(jid) {
                Ok(members) => field
                    .values
                    .extend(members.into_iter().map(|member| member.to_string())),
                Err(err) => warn!("Failed to resolve members of group {}: {}", jid, err),
            }
        }

        field
    }
}
