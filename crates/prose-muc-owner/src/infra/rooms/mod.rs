// prose-core-client/prose-muc-owner
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use in_memory_rooms_repository::InMemoryRoomsRepository;

mod in_memory_rooms_repository;
