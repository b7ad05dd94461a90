// prose-core-client/prose-muc-owner
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

/// The strings of the room configuration form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FormText {
    Title,
    /// Instructions for configuring the room named `room`.
    Instructions { room: String },

    RoomName,
    RoomDescription,
    ChangeSubject,
    MaxUsers,
    PresenceBroadcast,
    PublicRoom,
    PersistentRoom,
    RetireOnDeletion,
    ModeratedRoom,
    MembersOnly,
    AllowInvitesHint,
    AllowInvites,
    PasswordProtectedRoom,
    RoomSecretHint,
    RoomSecret,
    Whois,
    AllowPrivateMessages,
    EnableLogging,
    PreserveHistoryOnDeletion,
    ReservedNick,
    CanChangeNick,
    Registration,
    RoomAdminsHint,
    RoomAdmins,
    RoomOwnersHint,
    RoomOwners,

    // Option labels
    Anyone,
    Moderator,
    Participant,
    Visitor,
    None,
}
