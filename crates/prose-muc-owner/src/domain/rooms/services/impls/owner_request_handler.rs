// prose-core-client/prose-muc-owner
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::BTreeSet;

use jid::Jid;
use tracing::{debug, info, warn};
use xmpp_parsers::data_forms::{DataForm, DataFormType};

use prose_muc_xmpp::stanza::muc::{ConfigChangeNotification, ConfigStatus, Destroy, OwnerPayload};
use prose_proc_macros::DependenciesStruct;

use crate::app::deps::{
    DynDestroyDelegate, DynFederationService, DynGroupDirectory, DynLocalizer, DynOwnerConfig,
    DynRoomBroadcastService, DynRoomLifecycleService, DynRoomMembershipService,
    DynRoomRecordRepository, DynTimeProvider,
};
use crate::domain::rooms::models::{
    AffiliationChanges, OwnerError, OwnerRequest, OwnerResponse, Room, RoomAffiliation,
    RoomConfigUpdate, RoomDestruction, RoomSettings,
};

use super::super::OwnerRequestHandler as OwnerRequestHandlerTrait;
use super::room_config_form::RoomConfigFormBuilder;

#[derive(DependenciesStruct)]
pub struct OwnerRequestHandler {
    config: DynOwnerConfig,
    destroy_delegate: Option<DynDestroyDelegate>,
    federation_service: DynFederationService,
    group_directory: DynGroupDirectory,
    localizer: DynLocalizer,
    room_broadcast_service: DynRoomBroadcastService,
    room_lifecycle_service: DynRoomLifecycleService,
    room_membership_service: DynRoomMembershipService,
    room_record_repo: DynRoomRecordRepository,
    time_provider: DynTimeProvider,
}

/// A validated submission, ready to be committed.
struct StagedConfiguration {
    settings: RoomSettings,
    statuses: BTreeSet<ConfigStatus>,
    affiliation_changes: AffiliationChanges,
}

#[derive(Debug, PartialEq)]
enum Submission {
    Applied,
    RoomDestroyed,
}

impl OwnerRequestHandlerTrait for OwnerRequestHandler {
    #[tracing::instrument(skip(self, room), fields(room = %room.jid))]
    fn handle(
        &self,
        room: &mut Room,
        request: OwnerRequest,
        actor_affiliation: Option<RoomAffiliation>,
    ) -> Result<OwnerResponse, OwnerError> {
        let actor_affiliation = actor_affiliation.unwrap_or_else(|| {
            request
                .sender()
                .map(|sender| room.affiliation_of(&sender))
                .unwrap_or_default()
        });

        if !actor_affiliation.is_owner() {
            debug!("Rejecting owner request from {:?}.", request.from);
            return Err(OwnerError::Forbidden);
        }

        let actor = request.from;

        match request.payload {
            OwnerPayload::Form(form) => {
                self.handle_form(room, form, actor_affiliation, actor)?;
                Ok(OwnerResponse::Empty)
            }
            OwnerPayload::Destroy(destroy) => {
                self.destroy_room(room, destroy, actor)?;
                Ok(OwnerResponse::Empty)
            }
            OwnerPayload::Empty => Ok(OwnerResponse::ConfigurationForm(
                self.configuration_form(room, actor),
            )),
            OwnerPayload::Unknown(payload) => Err(OwnerError::BadRequest {
                payload: Some(payload),
            }),
        }
    }

    fn configuration_form(&self, room: &Room, recipient: Option<Jid>) -> DataForm {
        RoomConfigFormBuilder {
            config: &self.config,
            localizer: &self.localizer,
            group_directory: &self.group_directory,
            recipient,
        }
        .build(room)
    }
}

impl OwnerRequestHandler {
    fn destroy_room(
        &self,
        room: &Room,
        destroy: Destroy,
        actor: Option<Jid>,
    ) -> Result<(), OwnerError> {
        if let Some(delegate) = &self.destroy_delegate {
            if !delegate.may_destroy(room, actor.clone()) {
                info!("Destruction of room {} was vetoed.", room.jid);
                return Err(OwnerError::Forbidden);
            }
        }

        info!("Destroying room {} on request of {:?}.", room.jid, actor);
        self.room_lifecycle_service
            .destroy_room(room, RoomDestruction::from(destroy))?;
        Ok(())
    }

    fn handle_form(
        &self,
        room: &mut Room,
        form: DataForm,
        actor_affiliation: RoomAffiliation,
        actor: Option<Jid>,
    ) -> Result<(), OwnerError> {
        match form.type_ {
            DataFormType::Cancel => {
                // Cancelling the initial configuration destroys the room.
                if room.is_locked {
                    info!("Destroying room {} after cancelled configuration.", room.jid);
                    self.room_lifecycle_service
                        .destroy_room(room, RoomDestruction::default())?;
                }
            }
            DataFormType::Submit => {
                // An empty form requests an instant room with the default configuration.
                let submission = if form.fields.is_empty() {
                    Submission::Applied
                } else {
                    self.process_configuration_form(room, &form, actor_affiliation, actor.clone())?
                };

                if submission == Submission::RoomDestroyed {
                    return Ok(());
                }

                if room.is_locked && !room.is_manually_locked {
                    room.is_locked = false;
                    self.room_lifecycle_service.room_unlocked(room, actor)?;
                }
            }
            _ => warn!("Cannot handle data form of type {:?}.", form.type_),
        }

        Ok(())
    }

    fn process_configuration_form(
        &self,
        room: &mut Room,
        form: &DataForm,
        actor_affiliation: RoomAffiliation,
        actor: Option<Jid>,
    ) -> Result<Submission, OwnerError> {
        let staged = match self.stage_configuration(room, form) {
            Ok(staged) => staged,
            Err(err) => {
                warn!("Rejecting configuration of room {}: {}", room.jid, err);
                return Err(err);
            }
        };

        let StagedConfiguration {
            settings,
            mut statuses,
            affiliation_changes,
        } = staged;

        let members_only_changed = room.settings.is_members_only != settings.is_members_only;

        if room.settings.is_persistent && !settings.is_persistent {
            self.room_record_repo.delete(&room.jid)?;
        }

        room.settings = settings;
        room.modified_at = self.time_provider.now();

        if room.settings.is_persistent {
            self.room_record_repo.save(room)?;
        }

        self.federation_service.apply_configuration_changes(room)?;

        let mut presences = vec![];

        if members_only_changed {
            presences.extend(self.room_membership_service.members_only_changed(
                room,
                actor_affiliation,
                actor,
            )?);
        }

        for change in affiliation_changes {
            room.set_affiliation(change.jid.clone(), change.affiliation);
            presences.extend(self.room_membership_service.affiliation_changed(
                room,
                &change,
                actor_affiliation,
            )?);
        }

        if !room.settings.is_persistent && self.room_membership_service.occupants_count(room) == 0
        {
            info!("Destroying empty temporary room {}.", room.jid);
            self.room_lifecycle_service
                .destroy_room(room, RoomDestruction::default())?;
            return Ok(Submission::RoomDestroyed);
        }

        for presence in presences {
            self.room_broadcast_service
                .send_presence(&room.jid, presence)?;
        }

        if statuses.is_empty() {
            statuses.insert(ConfigStatus::NonPrivacyChange);
        }

        self.room_broadcast_service
            .broadcast_configuration_change(ConfigChangeNotification {
                room: room.jid.clone(),
                statuses: statuses.into_iter().collect(),
            })?;

        Ok(Submission::Applied)
    }

    /// Validates the complete submission without touching `room`.
    fn stage_configuration(
        &self,
        room: &Room,
        form: &DataForm,
    ) -> Result<StagedConfiguration, OwnerError> {
        let update = RoomConfigUpdate::parse(form, &self.config)?;
        let (settings, statuses) = update.apply_to(&room.settings)?;
        let affiliation_changes = AffiliationChanges::reconcile(
            &room.affiliations,
            update.owners.as_deref(),
            update.admins.as_deref(),
            |jid| self.group_directory.is_group(jid),
        )?;

        Ok(StagedConfiguration {
            settings,
            statuses,
            affiliation_changes,
        })
    }
}
