//! Build metadata: stamped onto every action at `build()` time.

use chrono::{SubsecRound, Utc};

use varsel_action::action::Metadata;
use varsel_action::VARSEL_ACTION_VERSION;

/// Identifies this builder implementation to downstream consumers.
pub const BUILDER_LANG: &str = "rust";

/// Fresh metadata with `built_at` set to now, UTC, millisecond precision.
pub fn generate_metadata() -> Metadata {
    Metadata {
        version: VARSEL_ACTION_VERSION.to_string(),
        built_at: Utc::now().trunc_subsecs(3),
        builder_lang: BUILDER_LANG.to_string(),
    }
}
