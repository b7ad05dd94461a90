// prose-core-client/prose-muc-owner
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use jid::Jid;

use crate::domain::general::models::FormText;
use crate::domain::general::services::Localizer;

/// Built-in English strings, regardless of the recipient.
#[derive(Default)]
pub struct EnglishLocalizer {}

impl Localizer for EnglishLocalizer {
    fn localize(&self, text: &FormText, _recipient: Option<Jid>) -> String {
        let text = match text {
            FormText::Title => "Room configuration",
            FormText::Instructions { room } => {
                return format!(
                    "The room \"{}\" was created successfully. Complete this form to change its configuration.",
                    room
                )
            }
            FormText::RoomName => "Room Name",
            FormText::RoomDescription => "Description",
            FormText::ChangeSubject => "Allow Occupants to Change Subject",
            FormText::MaxUsers => "Maximum Room Occupants",
            FormText::PresenceBroadcast => "Roles for Which Presence is Broadcast",
            FormText::PublicRoom => "List Room in Directory",
            FormText::PersistentRoom => "Make Room Persistent",
            FormText::RetireOnDeletion => "Retire the room name when the room is destroyed",
            FormText::ModeratedRoom => "Make Room Moderated",
            FormText::MembersOnly => "Make Room Members-only",
            FormText::AllowInvitesHint => {
                "Note: by default, only admins can send invitations in an invite-only room"
            }
            FormText::AllowInvites => "Allow Occupants to Invite Others",
            FormText::PasswordProtectedRoom => "Password Required to Enter",
            FormText::RoomSecretHint => "If a password is required to enter this room, you must specify the password below.",
            FormText::RoomSecret => "Password",
            FormText::Whois => "Affiliations that May Discover Real JIDs of Occupants",
            FormText::AllowPrivateMessages => "Allowed to Send Private Messages",
            FormText::EnableLogging => "Log Room Conversations",
            FormText::PreserveHistoryOnDeletion => {
                "Keep the message history when the room is destroyed"
            }
            FormText::ReservedNick => "Only login with registered nickname",
            FormText::CanChangeNick => "Allow Occupants to change nicknames",
            FormText::Registration => "Allow users to register with the room",
            FormText::RoomAdminsHint => "You may specify additional people who have admin status in the room. Please provide one Jabber ID per line.",
            FormText::RoomAdmins => "Room Admins",
            FormText::RoomOwnersHint => "You may specify additional owners for this room. Please provide one Jabber ID per line.",
            FormText::RoomOwners => "Room Owners",
            FormText::Anyone => "Anyone",
            FormText::Moderator => "Moderator",
            FormText::Participant => "Participant",
            FormText::Visitor => "Visitor",
            FormText::None => "None",
        };
        text.to_string()
    }
}
