// prose-core-client/prose-muc-owner
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use english_localizer::EnglishLocalizer;
pub use system_time_provider::SystemTimeProvider;

mod english_localizer;
mod system_time_provider;
