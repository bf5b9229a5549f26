/// Varsel action: Action Records
///
/// Actions are pure data: the frozen output of a builder.
/// They carry the payload and the `@event_name` discriminator only.
/// No validation happens here, see `validation`.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{EksternVarslingBestilling, Produsent, Sensitivitet, Tekst, Varseltype};

/// Discriminator written as `@event_name` on every action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventName {
    Opprett,
    Inaktiver,
}

/// Build metadata attached to every action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub version: String,
    pub built_at: DateTime<Utc>,
    pub builder_lang: String,
}

/// Create-varsel action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpprettVarsel {
    #[serde(rename = "type")]
    pub varseltype: Varseltype,
    pub varsel_id: String,
    pub ident: String,
    pub sensitivitet: Sensitivitet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub tekster: Vec<Tekst>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ekstern_varsling: Option<EksternVarslingBestilling>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aktiv_frem_til: Option<DateTime<Utc>>,
    pub produsent: Produsent,
    pub metadata: Metadata,
    #[serde(rename = "@event_name")]
    event_name: EventName,
}

impl OpprettVarsel {
    /// Create an action from its mandatory fields.
    /// Optional fields start unset and are assigned directly.
    pub fn new(
        varseltype: Varseltype,
        varsel_id: impl Into<String>,
        ident: impl Into<String>,
        sensitivitet: Sensitivitet,
        tekster: Vec<Tekst>,
        produsent: Produsent,
        metadata: Metadata,
    ) -> Self {
        Self {
            varseltype,
            varsel_id: varsel_id.into(),
            ident: ident.into(),
            sensitivitet,
            link: None,
            tekster,
            ekstern_varsling: None,
            aktiv_frem_til: None,
            produsent,
            metadata,
            event_name: EventName::Opprett,
        }
    }

    pub fn event_name(&self) -> EventName {
        self.event_name
    }
}

/// Deactivate-varsel action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InaktiverVarsel {
    pub varsel_id: String,
    pub produsent: Produsent,
    pub metadata: Metadata,
    #[serde(rename = "@event_name")]
    event_name: EventName,
}

impl InaktiverVarsel {
    pub fn new(varsel_id: impl Into<String>, produsent: Produsent, metadata: Metadata) -> Self {
        Self {
            varsel_id: varsel_id.into(),
            produsent,
            metadata,
            event_name: EventName::Inaktiver,
        }
    }

    pub fn event_name(&self) -> EventName {
        self.event_name
    }
}
