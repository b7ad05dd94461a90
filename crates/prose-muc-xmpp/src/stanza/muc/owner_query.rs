// prose-core-client/prose-muc-xmpp
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use minidom::Element;
use xmpp_parsers::data_forms::DataForm;
use xmpp_parsers::iq::{IqGetPayload, IqResultPayload, IqSetPayload};

use crate::ns;
use crate::util::{ElementExt, ParseError};

use super::Destroy;

/// The `<query xmlns='http://jabber.org/protocol/muc#owner'/>` payload of an owner request.
#[derive(Debug, PartialEq, Clone)]
pub struct OwnerQuery {
    pub payload: OwnerPayload,
}

/// What an owner asks the room to do. The variants are mutually exclusive and checked in
/// declaration order.
#[derive(Debug, PartialEq, Clone)]
pub enum OwnerPayload {
    /// A configuration form (submitted, cancelled or of another type).
    Form(DataForm),
    /// The room should be destroyed.
    Destroy(Destroy),
    /// No child elements, i.e. a request for the configuration form.
    Empty,
    /// Anything else. Carries the complete `<query/>` so that it can be echoed back.
    Unknown(Element),
}

impl OwnerQuery {
    pub fn new(payload: OwnerPayload) -> Self {
        OwnerQuery { payload }
    }
}

impl TryFrom<Element> for OwnerQuery {
    type Error = ParseError;

    fn try_from(root: Element) -> Result<Self, Self::Error> {
        root.expect_is("query", ns::MUC_OWNER)?;

        if let Some(form) = root.get_child("x", ns::DATA_FORMS) {
            return Ok(OwnerQuery::new(OwnerPayload::Form(
                DataForm::try_from(form.clone()).map_err(ParseError::xmpp)?,
            )));
        }

        if let Some(destroy) = root.get_child("destroy", ns::MUC_OWNER) {
            return Ok(OwnerQuery::new(OwnerPayload::Destroy(Destroy::try_from(
                destroy.clone(),
            )?)));
        }

        if root.children().next().is_none() {
            return Ok(OwnerQuery::new(OwnerPayload::Empty));
        }

        Ok(OwnerQuery::new(OwnerPayload::Unknown(root)))
    }
}

impl From<OwnerQuery> for Element {
    fn from(value: OwnerQuery) -> Self {
        match value.payload {
            OwnerPayload::Form(form) => Element::builder("query", ns::MUC_OWNER)
                .append(Element::from(form))
                .build(),
            OwnerPayload::Destroy(destroy) => Element::builder("query", ns::MUC_OWNER)
                .append(Element::from(destroy))
                .build(),
            OwnerPayload::Empty => Element::builder("query", ns::MUC_OWNER).build(),
            OwnerPayload::Unknown(query) => query,
        }
    }
}

impl IqGetPayload for OwnerQuery {}
impl IqSetPayload for OwnerQuery {}
impl IqResultPayload for OwnerQuery {}
