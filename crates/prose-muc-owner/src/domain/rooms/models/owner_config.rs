// prose-core-client/prose-muc-owner
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::Deserialize;

/// Service-wide settings of the owner request handler.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OwnerConfig {
    /// Applied when `muc#roomconfig_maxusers` is submitted without a value.
    pub default_max_occupants: u32,
    /// The choices offered in the configuration form. `0` stands for "no limit".
    pub max_occupants_options: Vec<u32>,
    /// Language tag of error texts.
    pub form_language: String,
}

impl Default for OwnerConfig {
    fn default() -> Self {
        OwnerConfig {
            default_max_occupants: 30,
            max_occupants_options: vec![10, 20, 30, 40, 50, 0],
            form_language: "en".to_string(),
        }
    }
}
