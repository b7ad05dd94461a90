// prose-core-client/prose-muc-integration-tests
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use chrono::{TimeZone, Utc};
use jid::Jid;
use mockall::{predicate, Sequence};
use pretty_assertions::assert_eq;
use xmpp_parsers::data_forms::{DataForm, DataFormType};
use xmpp_parsers::presence::Presence;
use xmpp_parsers::stanza_error::DefinedCondition;

use prose_muc_owner::domain::rooms::models::{
    AffiliationChange, OwnerError, OwnerRequest, OwnerResponse, Room, RoomAffiliation,
    RoomDestruction,
};
use prose_muc_owner::domain::rooms::services::impls::OwnerRequestHandler;
use prose_muc_owner::domain::rooms::services::mocks::MockDestroyDelegate;
use prose_muc_owner::domain::rooms::services::OwnerRequestHandler as _;
use prose_muc_owner::test::{mock_data, ConstantTimeProvider, MockOwnerRequestHandlerDependencies};
use prose_muc_xmpp::stanza::muc::ns::roomconfig;
use prose_muc_xmpp::stanza::muc::{ConfigChangeNotification, ConfigStatus, Destroy, OwnerPayload};
use prose_muc_xmpp::{bare, full};

use super::helpers::{accept_submissions, field, owner_request, submit, submission, value_of};

#[test]
fn test_rejects_requests_from_non_owners() -> Result<()> {
    // Mocks without expectations panic when called, so nothing is touched.
    let handler =
        OwnerRequestHandler::from(MockOwnerRequestHandlerDependencies::default().into_deps());
    let mut room = mock_data::room();

    let request = OwnerRequest::new(
        Jid::from(full!("hag66@shakespeare.lit/pda")),
        OwnerPayload::Form(submission(vec![field(
            roomconfig::ROOM_NAME,
            &["Hijacked"],
        )])),
    );
    let result = handler.handle(&mut room, request, None);
    assert!(matches!(result, Err(OwnerError::Forbidden)));

    let result = handler.handle(
        &mut room,
        submit(vec![field(roomconfig::ROOM_NAME, &["Hijacked"])]),
        Some(RoomAffiliation::Admin),
    );
    assert!(matches!(result, Err(OwnerError::Forbidden)));

    let result = handler.handle(
        &mut room,
        owner_request(OwnerPayload::Empty),
        Some(RoomAffiliation::Member),
    );
    assert!(matches!(result, Err(OwnerError::Forbidden)));

    assert_eq!(room.settings.name, "");
    assert_eq!(room.owners(), vec![mock_data::owner_jid().to_bare()]);
    Ok(())
}

#[test]
fn test_rejects_blank_owner_list() -> Result<()> {
    let handler =
        OwnerRequestHandler::from(MockOwnerRequestHandlerDependencies::default().into_deps());
    let mut room = mock_data::room();

    let result = handler.handle(
        &mut room,
        submit(vec![
            field(roomconfig::ROOM_NAME, &["The Coven"]),
            field(roomconfig::ROOM_OWNERS, &["  ", ""]),
        ]),
        None,
    );

    assert!(matches!(result, Err(OwnerError::Conflict)));
    assert_eq!(room.settings.name, "");
    assert_eq!(room.owners(), vec![mock_data::owner_jid().to_bare()]);
    assert_eq!(room.modified_at, mock_data::reference_date());
    Ok(())
}

#[test]
fn test_resubmitting_probed_form_changes_nothing() -> Result<()> {
    let mut deps = MockOwnerRequestHandlerDependencies::default();
    let recorder = accept_submissions(&mut deps);
    let handler = OwnerRequestHandler::from(deps.into_deps());

    let mut room = mock_data::room();
    room.settings.name = "A Dark Cave".to_string();
    room.set_affiliation(bare!("wiccarocks@shakespeare.lit"), RoomAffiliation::Admin);

    let probed = handler.configuration_form(&room, None);
    let mut form = probed.clone();
    form.type_ = DataFormType::Submit;

    let response = handler.handle(&mut room, owner_request(OwnerPayload::Form(form)), None)?;
    assert_eq!(response, OwnerResponse::Empty);

    assert_eq!(
        recorder.notifications.lock().clone(),
        vec![ConfigChangeNotification {
            room: mock_data::room_jid(),
            statuses: vec![ConfigStatus::NonPrivacyChange],
        }]
    );
    assert!(recorder.affiliation_changes.lock().is_empty());
    assert_eq!(
        minidom::Element::from(handler.configuration_form(&room, None)),
        minidom::Element::from(probed)
    );
    Ok(())
}

#[test]
fn test_boolean_fields_round_trip() -> Result<()> {
    let mut deps = MockOwnerRequestHandlerDependencies::default();
    accept_submissions(&mut deps);
    let handler = OwnerRequestHandler::from(deps.into_deps());

    let mut room = mock_data::room();

    let vars = [
        roomconfig::CHANGE_SUBJECT,
        roomconfig::PUBLIC_ROOM,
        roomconfig::PERSISTENT_ROOM,
        roomconfig::RETIRE_ON_DELETION,
        roomconfig::MODERATED_ROOM,
        roomconfig::MEMBERS_ONLY,
        roomconfig::ALLOW_INVITES,
        roomconfig::ENABLE_LOGGING,
        roomconfig::PRESERVE_HISTORY_ON_DELETION,
        roomconfig::RESERVED_NICK,
        roomconfig::CAN_CHANGE_NICK,
        roomconfig::REGISTRATION,
    ];

    for var in vars {
        for value in ["1", "0", "true", "false"] {
            handler.handle(&mut room, submit(vec![field(var, &[value])]), None)?;

            let expected = if value == "1" || value == "true" { "1" } else { "0" };
            assert_eq!(
                value_of(&handler.configuration_form(&room, None), var).as_deref(),
                Some(expected),
                "{} after submitting {}",
                var,
                value
            );
        }
    }

    Ok(())
}

#[test]
fn test_rejects_invalid_boolean() -> Result<()> {
    let handler =
        OwnerRequestHandler::from(MockOwnerRequestHandlerDependencies::default().into_deps());
    let mut room = mock_data::room();

    let result = handler.handle(
        &mut room,
        submit(vec![field(roomconfig::MODERATED_ROOM, &["yes"])]),
        None,
    );

    let Err(err) = result else {
        panic!("Expected an error")
    };
    assert!(matches!(err, OwnerError::InvalidValue { .. }));
    assert_eq!(err.defined_condition(), DefinedCondition::BadRequest);
    assert!(!room.settings.is_moderated);
    Ok(())
}

#[test]
fn test_password_protection_requires_password() -> Result<()> {
    let handler =
        OwnerRequestHandler::from(MockOwnerRequestHandlerDependencies::default().into_deps());
    let mut room = mock_data::room();

    let result = handler.handle(
        &mut room,
        submit(vec![
            field(roomconfig::PASSWORD_PROTECTED_ROOM, &["1"]),
            field(roomconfig::ROOM_SECRET, &[""]),
        ]),
        None,
    );

    let Err(OwnerError::NotAcceptable { reason }) = result else {
        panic!("Expected OwnerError::NotAcceptable")
    };
    assert_eq!(
        reason,
        "Room is made password-protected, but is missing a password."
    );
    assert!(!room.settings.is_password_protected());
    Ok(())
}

#[test]
fn test_sets_and_removes_password() -> Result<()> {
    let mut deps = MockOwnerRequestHandlerDependencies::default();
    accept_submissions(&mut deps);
    let handler = OwnerRequestHandler::from(deps.into_deps());
    let mut room = mock_data::room();

    handler.handle(
        &mut room,
        submit(vec![
            field(roomconfig::PASSWORD_PROTECTED_ROOM, &["1"]),
            field(roomconfig::ROOM_SECRET, &["cauldronburn"]),
        ]),
        None,
    )?;

    assert_eq!(room.settings.password(), Some("cauldronburn"));
    let form = handler.configuration_form(&room, None);
    assert_eq!(
        value_of(&form, roomconfig::PASSWORD_PROTECTED_ROOM).as_deref(),
        Some("1")
    );
    assert_eq!(
        value_of(&form, roomconfig::ROOM_SECRET).as_deref(),
        Some("cauldronburn")
    );

    // Keeps the existing password if none was submitted.
    handler.handle(
        &mut room,
        submit(vec![
            field(roomconfig::PASSWORD_PROTECTED_ROOM, &["1"]),
            field(roomconfig::ROOM_SECRET, &[]),
        ]),
        None,
    )?;
    assert_eq!(room.settings.password(), Some("cauldronburn"));

    handler.handle(
        &mut room,
        submit(vec![field(roomconfig::PASSWORD_PROTECTED_ROOM, &["0"])]),
        None,
    )?;
    assert!(!room.settings.is_password_protected());
    assert_eq!(
        value_of(&handler.configuration_form(&room, None), roomconfig::ROOM_SECRET),
        None
    );

    // An empty password without the protection flag clears the password.
    handler.handle(
        &mut room,
        submit(vec![field(roomconfig::ROOM_SECRET, &["toil"])]),
        None,
    )?;
    assert_eq!(room.settings.password(), Some("toil"));

    handler.handle(
        &mut room,
        submit(vec![field(roomconfig::ROOM_SECRET, &[""])]),
        None,
    )?;
    assert!(!room.settings.is_password_protected());
    assert_eq!(room.settings.password(), None);
    assert_eq!(
        value_of(
            &handler.configuration_form(&room, None),
            roomconfig::PASSWORD_PROTECTED_ROOM
        )
        .as_deref(),
        Some("0")
    );
    Ok(())
}

#[test]
fn test_reports_privacy_changes() -> Result<()> {
    let mut deps = MockOwnerRequestHandlerDependencies::default();
    let recorder = accept_submissions(&mut deps);
    let handler = OwnerRequestHandler::from(deps.into_deps());
    let mut room = mock_data::room();

    handler.handle(&mut room, submit(vec![field(roomconfig::WHOIS, &["anyone"])]), None)?;
    handler.handle(&mut room, submit(vec![field(roomconfig::WHOIS, &["moderators"])]), None)?;
    handler.handle(
        &mut room,
        submit(vec![
            field(roomconfig::WHOIS, &["anyone"]),
            field(roomconfig::ENABLE_LOGGING, &["1"]),
        ]),
        None,
    )?;
    handler.handle(&mut room, submit(vec![field(roomconfig::ENABLE_LOGGING, &["0"])]), None)?;

    let statuses = recorder
        .notifications
        .lock()
        .iter()
        .map(|notification| {
            notification
                .statuses
                .iter()
                .map(ConfigStatus::code)
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    assert_eq!(
        statuses,
        vec![vec![172], vec![173], vec![170, 172], vec![171]]
    );
    Ok(())
}

#[test]
fn test_adds_owner_without_demotions() -> Result<()> {
    let mut deps = MockOwnerRequestHandlerDependencies::default();
    let recorder = accept_submissions(&mut deps);
    let handler = OwnerRequestHandler::from(deps.into_deps());
    let mut room = mock_data::room();

    handler.handle(
        &mut room,
        submit(vec![
            field(
                roomconfig::ROOM_OWNERS,
                &["crone1@shakespeare.lit", "wiccarocks@shakespeare.lit/laptop"],
            ),
            field(roomconfig::ROOM_ADMINS, &[]),
        ]),
        None,
    )?;

    assert_eq!(
        room.owners(),
        vec![
            bare!("crone1@shakespeare.lit"),
            bare!("wiccarocks@shakespeare.lit")
        ]
    );
    assert_eq!(
        recorder.affiliation_changes.lock().clone(),
        vec![AffiliationChange {
            jid: bare!("wiccarocks@shakespeare.lit"),
            previous: RoomAffiliation::None,
            affiliation: RoomAffiliation::Owner,
        }]
    );
    Ok(())
}

#[test]
fn test_demotes_unlisted_owners_and_admins() -> Result<()> {
    let mut deps = MockOwnerRequestHandlerDependencies::default();

    deps.group_directory.expect_is_group().returning(|_| false);
    deps.federation_service
        .expect_apply_configuration_changes()
        .once()
        .returning(|_| Ok(()));
    deps.room_membership_service
        .expect_occupants_count()
        .returning(|_| 3);
    deps.room_membership_service
        .expect_affiliation_changed()
        .times(2)
        .returning(|_, _, _| Ok(vec![Presence::available()]));
    deps.room_broadcast_service
        .expect_send_presence()
        .times(2)
        .with(predicate::eq(mock_data::room_jid()), predicate::always())
        .returning(|_, _| Ok(()));
    deps.room_broadcast_service
        .expect_broadcast_configuration_change()
        .once()
        .with(predicate::eq(ConfigChangeNotification {
            room: mock_data::room_jid(),
            statuses: vec![ConfigStatus::NonPrivacyChange],
        }))
        .returning(|_| Ok(()));

    let handler = OwnerRequestHandler::from(deps.into_deps());

    let mut room = mock_data::room();
    room.set_affiliation(bare!("wiccarocks@shakespeare.lit"), RoomAffiliation::Owner);
    room.set_affiliation(bare!("hag66@shakespeare.lit"), RoomAffiliation::Admin);

    handler.handle(
        &mut room,
        submit(vec![
            field(roomconfig::ROOM_OWNERS, &["crone1@shakespeare.lit"]),
            field(roomconfig::ROOM_ADMINS, &[]),
        ]),
        None,
    )?;

    assert_eq!(room.owners(), vec![bare!("crone1@shakespeare.lit")]);
    assert!(room.admins().is_empty());
    assert_eq!(
        room.affiliation_of(&bare!("wiccarocks@shakespeare.lit")),
        RoomAffiliation::Member
    );
    assert_eq!(
        room.affiliation_of(&bare!("hag66@shakespeare.lit")),
        RoomAffiliation::Member
    );
    Ok(())
}

#[test]
fn test_owner_cannot_remove_all_owners() -> Result<()> {
    let mut deps = MockOwnerRequestHandlerDependencies::default();
    deps.group_directory.expect_is_group().returning(|_| false);
    let handler = OwnerRequestHandler::from(deps.into_deps());
    let mut room = mock_data::room();

    let result = handler.handle(
        &mut room,
        submit(vec![field(
            roomconfig::ROOM_ADMINS,
            &["crone1@shakespeare.lit"],
        )]),
        None,
    );

    assert!(matches!(result, Err(OwnerError::Conflict)));
    assert_eq!(room.owners(), vec![bare!("crone1@shakespeare.lit")]);
    Ok(())
}

#[test]
fn test_destroys_empty_temporary_room_after_submission() -> Result<()> {
    let mut deps = MockOwnerRequestHandlerDependencies::default();

    deps.group_directory.expect_is_group().returning(|_| false);
    deps.federation_service
        .expect_apply_configuration_changes()
        .once()
        .returning(|_| Ok(()));
    deps.room_membership_service
        .expect_occupants_count()
        .once()
        .returning(|_| 0);
    deps.room_lifecycle_service
        .expect_destroy_room()
        .once()
        .with(predicate::always(), predicate::eq(RoomDestruction::default()))
        .returning(|_, _| Ok(()));

    let handler = OwnerRequestHandler::from(deps.into_deps());

    let mut room = Room::new(
        mock_data::room_jid(),
        mock_data::owner_jid().to_bare(),
        mock_data::reference_date(),
    );

    let response = handler.handle(
        &mut room,
        submit(vec![field(roomconfig::ROOM_NAME, &["The Coven"])]),
        None,
    )?;

    assert_eq!(response, OwnerResponse::Empty);
    assert_eq!(room.settings.name, "The Coven");
    Ok(())
}

#[test]
fn test_deletes_record_before_room_becomes_temporary() -> Result<()> {
    let mut deps = MockOwnerRequestHandlerDependencies::default();
    let mut seq = Sequence::new();

    deps.room_record_repo
        .expect_delete()
        .once()
        .in_sequence(&mut seq)
        .with(predicate::eq(mock_data::room_jid()))
        .returning(|_| Ok(()));
    deps.federation_service
        .expect_apply_configuration_changes()
        .once()
        .in_sequence(&mut seq)
        .returning(|room| {
            assert!(!room.settings.is_persistent);
            Ok(())
        });
    deps.room_membership_service
        .expect_occupants_count()
        .returning(|_| 1);
    deps.room_broadcast_service
        .expect_broadcast_configuration_change()
        .once()
        .in_sequence(&mut seq)
        .returning(|_| Ok(()));

    let handler = OwnerRequestHandler::from(deps.into_deps());

    let mut room = mock_data::room();
    room.settings.is_persistent = true;

    handler.handle(
        &mut room,
        submit(vec![field(roomconfig::PERSISTENT_ROOM, &["0"])]),
        None,
    )?;

    assert!(!room.settings.is_persistent);
    Ok(())
}

#[test]
fn test_saves_persistent_room() -> Result<()> {
    let mut deps = MockOwnerRequestHandlerDependencies::default();

    deps.room_record_repo
        .expect_save()
        .once()
        .returning(|room| {
            assert_eq!(room.settings.name, "The Coven");
            assert_eq!(room.modified_at, mock_data::reference_date());
            Ok(())
        });
    deps.federation_service
        .expect_apply_configuration_changes()
        .once()
        .returning(|_| Ok(()));
    deps.room_membership_service
        .expect_occupants_count()
        .returning(|_| 0);
    deps.room_broadcast_service
        .expect_broadcast_configuration_change()
        .once()
        .returning(|_| Ok(()));

    let handler = OwnerRequestHandler::from(deps.into_deps());

    let mut room = mock_data::room();
    room.settings.is_persistent = true;

    // Persistent rooms survive without occupants.
    handler.handle(
        &mut room,
        submit(vec![field(roomconfig::ROOM_NAME, &["The Coven"])]),
        None,
    )?;

    assert_eq!(room.settings.name, "The Coven");
    Ok(())
}

#[test]
fn test_updates_modification_date() -> Result<()> {
    let mut deps = MockOwnerRequestHandlerDependencies::default();
    accept_submissions(&mut deps);
    let modified_at = Utc.with_ymd_and_hms(2021, 9, 7, 12, 30, 0).unwrap();
    deps.time_provider = Arc::new(ConstantTimeProvider::new(modified_at));
    let handler = OwnerRequestHandler::from(deps.into_deps());

    let mut room = mock_data::room();
    handler.handle(
        &mut room,
        submit(vec![field(roomconfig::ROOM_DESC, &["Meeting place of the witches"])]),
        None,
    )?;

    assert_eq!(room.settings.description, "Meeting place of the witches");
    assert_eq!(room.modified_at, modified_at);
    Ok(())
}

#[test]
fn test_notifies_membership_service_when_members_only_changes() -> Result<()> {
    let mut deps = MockOwnerRequestHandlerDependencies::default();

    deps.federation_service
        .expect_apply_configuration_changes()
        .returning(|_| Ok(()));
    deps.room_membership_service
        .expect_occupants_count()
        .returning(|_| 2);
    deps.room_membership_service
        .expect_members_only_changed()
        .once()
        .with(
            predicate::always(),
            predicate::eq(RoomAffiliation::Owner),
            predicate::eq(Some(Jid::from(mock_data::owner_jid()))),
        )
        .returning(|_, _, _| Ok(vec![Presence::available()]));
    deps.room_broadcast_service
        .expect_send_presence()
        .once()
        .returning(|_, _| Ok(()));
    deps.room_broadcast_service
        .expect_broadcast_configuration_change()
        .times(2)
        .returning(|_| Ok(()));

    let handler = OwnerRequestHandler::from(deps.into_deps());
    let mut room = mock_data::room();

    handler.handle(&mut room, submit(vec![field(roomconfig::MEMBERS_ONLY, &["1"])]), None)?;
    // Unchanged flag, no second call.
    handler.handle(&mut room, submit(vec![field(roomconfig::MEMBERS_ONLY, &["1"])]), None)?;

    assert!(room.settings.is_members_only);
    Ok(())
}

#[test]
fn test_cancel_destroys_locked_room() -> Result<()> {
    let mut deps = MockOwnerRequestHandlerDependencies::default();
    deps.room_lifecycle_service
        .expect_destroy_room()
        .once()
        .with(predicate::always(), predicate::eq(RoomDestruction::default()))
        .returning(|_, _| Ok(()));
    let handler = OwnerRequestHandler::from(deps.into_deps());

    let mut locked_room = Room::new(
        mock_data::room_jid(),
        mock_data::owner_jid().to_bare(),
        mock_data::reference_date(),
    );
    let mut unlocked_room = mock_data::room();

    let cancel = || {
        owner_request(OwnerPayload::Form(DataForm {
            type_: DataFormType::Cancel,
            form_type: None,
            title: None,
            instructions: None,
            fields: vec![],
        }))
    };

    assert_eq!(
        handler.handle(&mut locked_room, cancel(), None)?,
        OwnerResponse::Empty
    );
    assert_eq!(
        handler.handle(&mut unlocked_room, cancel(), None)?,
        OwnerResponse::Empty
    );
    Ok(())
}

#[test]
fn test_instant_room_is_unlocked() -> Result<()> {
    let mut deps = MockOwnerRequestHandlerDependencies::default();
    deps.room_lifecycle_service
        .expect_room_unlocked()
        .once()
        .with(
            predicate::always(),
            predicate::eq(Some(Jid::from(mock_data::owner_jid()))),
        )
        .returning(|_, _| Ok(()));
    let handler = OwnerRequestHandler::from(deps.into_deps());

    let mut room = Room::new(
        mock_data::room_jid(),
        mock_data::owner_jid().to_bare(),
        mock_data::reference_date(),
    );
    handler.handle(&mut room, submit(vec![]), None)?;
    assert!(!room.is_locked);

    // Already unlocked.
    handler.handle(&mut room, submit(vec![]), None)?;

    let mut manually_locked_room = Room::new(
        mock_data::room_jid(),
        mock_data::owner_jid().to_bare(),
        mock_data::reference_date(),
    );
    manually_locked_room.is_manually_locked = true;
    handler.handle(&mut manually_locked_room, submit(vec![]), None)?;
    assert!(manually_locked_room.is_locked);

    Ok(())
}

#[test]
fn test_configuring_locked_room_unlocks_it() -> Result<()> {
    let mut deps = MockOwnerRequestHandlerDependencies::default();
    accept_submissions(&mut deps);
    deps.room_lifecycle_service
        .expect_room_unlocked()
        .once()
        .returning(|room, _| {
            assert!(!room.is_locked);
            assert_eq!(room.settings.name, "The Coven");
            Ok(())
        });
    let handler = OwnerRequestHandler::from(deps.into_deps());

    let mut room = Room::new(
        mock_data::room_jid(),
        mock_data::owner_jid().to_bare(),
        mock_data::reference_date(),
    );
    handler.handle(
        &mut room,
        submit(vec![field(roomconfig::ROOM_NAME, &["The Coven"])]),
        None,
    )?;

    assert!(!room.is_locked);
    Ok(())
}

#[test]
fn test_destroys_room() -> Result<()> {
    let mut deps = MockOwnerRequestHandlerDependencies::default();
    deps.room_lifecycle_service
        .expect_destroy_room()
        .once()
        .with(
            predicate::always(),
            predicate::eq(RoomDestruction {
                alternate_room: Some(bare!("heath@chat.shakespeare.lit")),
                password: None,
                reason: Some("Macbeth doth come.".to_string()),
            }),
        )
        .returning(|_, _| Ok(()));
    let handler = OwnerRequestHandler::from(deps.into_deps());
    let mut room = mock_data::room();

    let response = handler.handle(
        &mut room,
        owner_request(OwnerPayload::Destroy(Destroy {
            jid: Some(bare!("heath@chat.shakespeare.lit")),
            password: None,
            reason: Some("Macbeth doth come.".to_string()),
        })),
        None,
    )?;

    assert_eq!(response, OwnerResponse::Empty);
    Ok(())
}

#[test]
fn test_destroy_delegate_can_veto_destruction() -> Result<()> {
    let mut deps = MockOwnerRequestHandlerDependencies::default();
    let mut delegate = MockDestroyDelegate::new();
    delegate
        .expect_may_destroy()
        .once()
        .returning(|_, _| false);
    deps.destroy_delegate = Some(delegate);
    let handler = OwnerRequestHandler::from(deps.into_deps());
    let mut room = mock_data::room();

    let result = handler.handle(
        &mut room,
        owner_request(OwnerPayload::Destroy(Destroy::default())),
        None,
    );

    assert!(matches!(result, Err(OwnerError::Forbidden)));
    Ok(())
}

#[test]
fn test_rejects_unknown_payload() -> Result<()> {
    let handler =
        OwnerRequestHandler::from(MockOwnerRequestHandlerDependencies::default().into_deps());
    let mut room = mock_data::room();

    let query = minidom::Element::builder("query", prose_muc_xmpp::ns::MUC_OWNER)
        .append(minidom::Element::builder("unknown", "urn:example:unknown").build())
        .build();

    let result = handler.handle(
        &mut room,
        owner_request(OwnerPayload::Unknown(query.clone())),
        None,
    );

    let Err(OwnerError::BadRequest { payload }) = result else {
        panic!("Expected OwnerError::BadRequest")
    };
    assert_eq!(payload, Some(query));
    Ok(())
}

#[test]
fn test_returns_configuration_form() -> Result<()> {
    let mut deps = MockOwnerRequestHandlerDependencies::default();
    deps.group_directory.expect_is_group().returning(|_| false);
    let handler = OwnerRequestHandler::from(deps.into_deps());
    let mut room = mock_data::room();

    let OwnerResponse::ConfigurationForm(form) =
        handler.handle(&mut room, owner_request(OwnerPayload::Empty), None)?
    else {
        panic!("Expected OwnerResponse::ConfigurationForm")
    };

    assert_eq!(form.type_, DataFormType::Form);
    assert_eq!(
        value_of(&form, roomconfig::ROOM_OWNERS).as_deref(),
        Some("crone1@shakespeare.lit")
    );
    Ok(())
}
