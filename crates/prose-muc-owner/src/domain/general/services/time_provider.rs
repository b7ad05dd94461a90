// prose-core-client/prose-muc-owner
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};

/// Source of the modification dates recorded on rooms.
pub trait TimeProvider: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
