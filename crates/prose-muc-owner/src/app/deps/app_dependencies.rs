// prose-core-client/prose-muc-owner
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::domain::general::services::{Localizer, StanzaRouter, TimeProvider};
use crate::domain::rooms::models::OwnerConfig;
use crate::domain::rooms::repos::{RoomRecordRepository, RoomsRepository};
use crate::domain::rooms::services::{
    DestroyDelegate, FederationService, GroupDirectory, OwnerRequestHandler,
    RoomBroadcastService, RoomLifecycleService, RoomMembershipService,
};

pub type DynDestroyDelegate = Arc<dyn DestroyDelegate>;
pub type DynFederationService = Arc<dyn FederationService>;
pub type DynGroupDirectory = Arc<dyn GroupDirectory>;
pub type DynLocalizer = Arc<dyn Localizer>;
pub type DynOwnerConfig = Arc<OwnerConfig>;
pub type DynOwnerRequestHandler = Arc<dyn OwnerRequestHandler>;
pub type DynRoomBroadcastService = Arc<dyn RoomBroadcastService>;
pub type DynRoomLifecycleService = Arc<dyn RoomLifecycleService>;
pub type DynRoomMembershipService = Arc<dyn RoomMembershipService>;
pub type DynRoomRecordRepository = Arc<dyn RoomRecordRepository>;
pub type DynRoomsRepository = Arc<dyn RoomsRepository>;
pub type DynStanzaRouter = Arc<dyn StanzaRouter>;
pub type DynTimeProvider = Arc<dyn TimeProvider>;

pub struct AppDependencies {
    pub config: DynOwnerConfig,
    pub owner_request_handler: DynOwnerRequestHandler,
    pub rooms_repo: DynRoomsRepository,
    pub stanza_router: DynStanzaRouter,
}
