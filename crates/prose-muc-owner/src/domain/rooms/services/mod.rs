// prose-core-client/prose-muc-owner
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use destroy_delegate::DestroyDelegate;
pub use federation_service::FederationService;
pub use group_directory::GroupDirectory;
pub use owner_request_handler::OwnerRequestHandler;
pub use room_broadcast_service::RoomBroadcastService;
pub use room_lifecycle_service::RoomLifecycleService;
pub use room_membership_service::RoomMembershipService;

mod destroy_delegate;
mod federation_service;
mod group_directory;
pub mod impls;
mod owner_request_handler;
mod room_broadcast_service;
mod room_lifecycle_service;
mod room_membership_service;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::destroy_delegate::MockDestroyDelegate;
    pub use super::federation_service::MockFederationService;
    pub use super::group_directory::MockGroupDirectory;
    pub use super::owner_request_handler::MockOwnerRequestHandler;
    pub use super::room_broadcast_service::MockRoomBroadcastService;
    pub use super::room_lifecycle_service::MockRoomLifecycleService;
    pub use super::room_membership_service::MockRoomMembershipService;
}
