// prose-core-client/prose-muc-owner
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use room_record_repository::RoomRecordRepository;
pub use rooms_repository::{RoomAlreadyExistsError, RoomsRepository};

mod room_record_repository;
mod rooms_repository;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::room_record_repository::MockRoomRecordRepository;
    pub use super::rooms_repository::MockRoomsRepository;
}
