// prose-core-client/prose-muc-owner
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use minidom::Element;
use xmpp_parsers::stanza_error::{DefinedCondition, ErrorType};

#[derive(thiserror::Error, Debug)]
pub enum OwnerError {
    /// The requester is not an owner of the room or the destruction was vetoed.
    #[error("Forbidden.")]
    Forbidden,
    /// The room would lose all of its owners.
    #[error("The room must have at least one owner.")]
    Conflict,
    #[error("{reason}")]
    NotAcceptable { reason: String },
    /// The request carried an unexpected payload, which is echoed back to the requester.
    #[error("Unexpected owner request payload.")]
    BadRequest { payload: Option<Element> },
    #[error("Invalid value '{value}' for field {var}.")]
    InvalidValue { var: String, value: String },
    #[error(transparent)]
    Collaborator(#[from] anyhow::Error),
}

impl OwnerError {
    pub(crate) fn invalid_value(var: impl Into<String>, value: impl Into<String>) -> Self {
        OwnerError::InvalidValue {
            var: var.into(),
            value: value.into(),
        }
    }

    pub fn defined_condition(&self) -> DefinedCondition {
        match self {
            OwnerError::Forbidden => DefinedCondition::Forbidden,
            OwnerError::Conflict => DefinedCondition::Conflict,
            OwnerError::NotAcceptable { .. } => DefinedCondition::NotAcceptable,
            OwnerError::BadRequest { .. } | OwnerError::InvalidValue { .. } => {
                DefinedCondition::BadRequest
            }
            OwnerError::Collaborator(_) => DefinedCondition::InternalServerError,
        }
    }

    pub fn error_type(&self) -> ErrorType {
        match self {
            OwnerError::Forbidden => ErrorType::Auth,
            OwnerError::Conflict => ErrorType::Cancel,
            OwnerError::NotAcceptable { .. } => ErrorType::Cancel,
            OwnerError::BadRequest { .. } | OwnerError::InvalidValue { .. } => ErrorType::Modify,
            OwnerError::Collaborator(_) => ErrorType::Wait,
        }
    }

    /// The text sent along with the error condition. Collaborator failures are not disclosed.
    pub fn text(&self) -> String {
        match self {
            OwnerError::Collaborator(_) => "Internal server error.".to_string(),
            _ => self.to_string(),
        }
    }

    /// The payload to echo back in the error reply.
    pub fn echoed_payload(&self) -> Option<&Element> {
        let OwnerError::BadRequest { payload } = self else {
            return None;
        };
        payload.as_ref()
    }
}
