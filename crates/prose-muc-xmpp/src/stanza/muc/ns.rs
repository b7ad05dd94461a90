// prose-core-client/prose-muc-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

/// https://xmpp.org/extensions/xep-0045.html#registrar-formtype-owner
pub mod roomconfig {
    /// Whether to Allow Occupants to Invite Others
    pub const ALLOW_INVITES: &str = "muc#roomconfig_allowinvites";
    /// Roles that May Send Private Messages
    pub const ALLOW_PM: &str = "muc#roomconfig_allowpm";
    /// Whether to Allow Occupants to Change Subject
    pub const CHANGE_SUBJECT: &str = "muc#roomconfig_changesubject";
    /// Whether to Enable Public Logging of Room Conversations
    pub const ENABLE_LOGGING: &str = "muc#roomconfig_enablelogging";
    /// Maximum Number of Room Occupants
    pub const MAX_USERS: &str = "muc#roomconfig_maxusers";
    /// Whether to Make Room Members-Only
    pub const MEMBERS_ONLY: &str = "muc#roomconfig_membersonly";
    /// Whether to Make Room Moderated
    pub const MODERATED_ROOM: &str = "muc#roomconfig_moderatedroom";
    /// Whether a Password is Required to Enter
    pub const PASSWORD_PROTECTED_ROOM: &str = "muc#roomconfig_passwordprotectedroom";
    /// Whether to Make Room Persistent
    pub const PERSISTENT_ROOM: &str = "muc#roomconfig_persistentroom";
    /// Roles for which Presence is Broadcasted
    pub const PRESENCE_BROADCAST: &str = "muc#roomconfig_presencebroadcast";
    /// Whether to Allow Public Searching for Room
    pub const PUBLIC_ROOM: &str = "muc#roomconfig_publicroom";
    /// Full List of Room Admins
    pub const ROOM_ADMINS: &str = "muc#roomconfig_roomadmins";
    /// Short Description of Room
    pub const ROOM_DESC: &str = "muc#roomconfig_roomdesc";
    /// Natural-Language Room Name
    pub const ROOM_NAME: &str = "muc#roomconfig_roomname";
    /// Full List of Room Owners
    pub const ROOM_OWNERS: &str = "muc#roomconfig_roomowners";
    /// The Room Password
    pub const ROOM_SECRET: &str = "muc#roomconfig_roomsecret";
    /// Affiliations that May Discover Real JIDs of Occupants
    pub const WHOIS: &str = "muc#roomconfig_whois";

    /// Whether the room's name is retired (cannot be reused) once the room is deleted
    pub const RETIRE_ON_DELETION: &str = "{http://igniterealtime.org}muc#roomconfig_retireondel";
    /// Whether the message history is kept after the room is deleted
    pub const PRESERVE_HISTORY_ON_DELETION: &str =
        "{http://igniterealtime.org}muc#roomconfig_preservehistondel";
    /// Whether only registered members may use their reserved nickname to join
    pub const RESERVED_NICK: &str = "x-muc#roomconfig_reservednick";
    /// Whether occupants may change their nickname
    pub const CAN_CHANGE_NICK: &str = "x-muc#roomconfig_canchangenick";
    /// Whether users may register with the room
    pub const REGISTRATION: &str = "x-muc#roomconfig_registration";
}

/// Values of the `muc#roomconfig_whois` list.
pub mod whois {
    pub const ANYONE: &str = "anyone";
    pub const MODERATORS: &str = "moderators";
}
