// prose-core-client/prose-muc-owner
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::sync::Arc;

use jid::BareJid;
use parking_lot::{Mutex, RwLock};

use crate::domain::rooms::models::{Room, SharedRoom};
use crate::domain::rooms::repos::{RoomAlreadyExistsError, RoomsRepository};

pub struct InMemoryRoomsRepository {
    rooms: RwLock<HashMap<BareJid, SharedRoom>>,
}

impl InMemoryRoomsRepository {
    pub fn new() -> Self {
        InMemoryRoomsRepository {
            rooms: Default::default(),
        }
    }
}

impl RoomsRepository for InMemoryRoomsRepository {
    fn get(&self, room_jid: &BareJid) -> Option<SharedRoom> {
        self.rooms.read().get(room_jid).cloned()
    }

    fn set(&self, room: Room) -> Result<SharedRoom, RoomAlreadyExistsError> {
        let mut rooms = self.rooms.write();

        if rooms.contains_key(&room.jid) {
            return Err(RoomAlreadyExistsError);
        }

        let jid = room.jid.clone();
        let room = Arc::new(Mutex::new(room));
        rooms.insert(jid, room.clone());
        Ok(room)
    }

    fn delete(&self, room_jid: &BareJid) -> Option<SharedRoom> {
        self.rooms.write().remove(room_jid)
    }
}
