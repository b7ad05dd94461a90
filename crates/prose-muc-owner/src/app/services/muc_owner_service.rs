// prose-core-client/prose-muc-owner
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::{bail, Result};
use jid::Jid;
use minidom::Element;
use tracing::{debug, error};
use xmpp_parsers::iq::{Iq, IqType};
use xmpp_parsers::stanza_error::{DefinedCondition, ErrorType, StanzaError};

use prose_muc_xmpp::stanza::muc::{OwnerPayload, OwnerQuery};
use prose_proc_macros::InjectDependencies;

use crate::app::deps::{
    DynOwnerConfig, DynOwnerRequestHandler, DynRoomsRepository, DynStanzaRouter,
};
use crate::domain::rooms::models::{
    OwnerError, OwnerRequest, OwnerResponse, RoomAffiliation, SharedRoom,
};

/// Answers `muc#owner` IQs addressed to the rooms of this service.
#[derive(InjectDependencies)]
pub struct MucOwnerService {
    #[inject]
    config: DynOwnerConfig,
    #[inject]
    owner_request_handler: DynOwnerRequestHandler,
    #[inject]
    rooms_repo: DynRoomsRepository,
    #[inject]
    stanza_router: DynStanzaRouter,
}

impl MucOwnerService {
    /// Handles an owner request and returns the reply. The reply is routed to the sender unless
    /// the request was generated by the server itself.
    ///
    /// `actor_affiliation` is the affiliation of the occupant that sent the request, if known.
    #[tracing::instrument(skip(self))]
    pub async fn handle_iq(
        &self,
        iq: Iq,
        actor_affiliation: Option<RoomAffiliation>,
    ) -> Result<Element> {
        let payload = match iq.payload {
            IqType::Get(payload) | IqType::Set(payload) => payload,
            IqType::Result(_) | IqType::Error(_) => {
                bail!("Expected IQ of type get or set.")
            }
        };

        let Some(room_jid) = iq.to.as_ref().map(|to| to.to_bare()) else {
            bail!("Owner request is missing a recipient.")
        };

        let mut reply = match self.rooms_repo.get(&room_jid) {
            Some(room) => {
                match self
                    .process(room, iq.from.clone(), payload, actor_affiliation)
                    .await
                {
                    Ok(response) => Element::from(Self::result_iq(&iq.id, response)),
                    Err(err) => self.error_iq(&iq.id, err),
                }
            }
            None => Element::from(Iq::from_error(
                iq.id.as_str(),
                StanzaError::new(
                    ErrorType::Cancel,
                    DefinedCondition::ItemNotFound,
                    self.config.form_language.as_str(),
                    format!("Room {} does not exist.", room_jid),
                ),
            )),
        };

        reply.set_attr("from", room_jid.to_string());

        if let Some(from) = iq.from {
            reply.set_attr("to", from.to_string());
            self.stanza_router.route(reply.clone())?;
        }

        Ok(reply)
    }
}

impl MucOwnerService {
    async fn process(
        &self,
        room: SharedRoom,
        from: Option<Jid>,
        payload: Element,
        actor_affiliation: Option<RoomAffiliation>,
    ) -> Result<OwnerResponse, OwnerError> {
        let query = match OwnerQuery::try_from(payload.clone()) {
            Ok(query) => query,
            Err(err) => {
                debug!("Failed to parse owner request. {}", err);
                return Err(OwnerError::BadRequest {
                    payload: Some(payload),
                });
            }
        };

        let handler = self.owner_request_handler.clone();
        let request = OwnerRequest::new(from, query.payload);

        tokio::task::spawn_blocking(move || {
            let mut room = room.lock();
            handler.handle(&mut room, request, actor_affiliation)
        })
        .await
        .map_err(|err| OwnerError::Collaborator(err.into()))?
    }

    fn result_iq(id: &str, response: OwnerResponse) -> Iq {
        match response {
            OwnerResponse::Empty => Iq::from_result(id, None::<OwnerQuery>),
            OwnerResponse::ConfigurationForm(form) => {
                Iq::from_result(id, Some(OwnerQuery::new(OwnerPayload::Form(form))))
            }
        }
    }

    fn error_iq(&self, id: &str, err: OwnerError) -> Element {
        if let OwnerError::Collaborator(inner) = &err {
            error!("Failed to handle owner request. {:?}", inner);
        }

        let stanza_error = StanzaError::new(
            err.error_type(),
            err.defined_condition(),
            self.config.form_language.as_str(),
            err.text(),
        );

        let mut reply = Element::from(Iq::from_error(id, stanza_error));
        if let Some(payload) = err.echoed_payload() {
            reply.append_child(payload.clone());
        }
        reply
    }
}
