/// Varsel action: Core Domain Types
///
/// Pure data. No behaviour, no validation logic.
/// Wire names are fixed by the downstream readers and must not change.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ── Enumerations ───────────────────────────────────────────────────

/// Kind of varsel shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Varseltype {
    Beskjed,
    Oppgave,
    Innboks,
}

/// Required authentication level for reading the varsel content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sensitivitet {
    Substantial,
    High,
}

/// Channel for external dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EksternKanal {
    Sms,
    Epost,
    BetingetSms,
}

// ── Records ────────────────────────────────────────────────────────

/// One language variant of the varsel text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tekst {
    pub spraakkode: String,
    pub tekst: String,
    pub default: bool,
}

impl Tekst {
    pub fn new(spraakkode: impl Into<String>, tekst: impl Into<String>, default: bool) -> Self {
        Self {
            spraakkode: spraakkode.into(),
            tekst: tekst.into(),
            default,
        }
    }
}

/// Identity of the application emitting the action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Produsent {
    pub cluster: String,
    pub namespace: String,
    pub appnavn: String,
}

impl Produsent {
    pub fn new(
        cluster: impl Into<String>,
        namespace: impl Into<String>,
        appnavn: impl Into<String>,
    ) -> Self {
        Self {
            cluster: cluster.into(),
            namespace: namespace.into(),
            appnavn: appnavn.into(),
        }
    }
}

/// Request for SMS/e-mail dispatch accompanying a varsel.
///
/// `prefererte_kanaler` is always serialized, an empty list meaning
/// "no preference". The remaining fields are omitted when unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EksternVarslingBestilling {
    pub prefererte_kanaler: Vec<EksternKanal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_varslingstekst: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epost_varslingstittel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epost_varslingstekst: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kan_batches: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utsett_sending_til: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_use_wire_tokens() {
        assert_eq!(serde_json::to_string(&Varseltype::Innboks).unwrap(), "\"innboks\"");
        assert_eq!(serde_json::to_string(&Sensitivitet::Substantial).unwrap(), "\"substantial\"");
        assert_eq!(serde_json::to_string(&EksternKanal::Epost).unwrap(), "\"EPOST\"");
        assert_eq!(serde_json::to_string(&EksternKanal::BetingetSms).unwrap(), "\"BETINGET_SMS\"");
    }

    #[test]
    fn empty_bestilling_keeps_only_channel_list() {
        let json = serde_json::to_string(&EksternVarslingBestilling::default()).unwrap();
        assert_eq!(json, r#"{"prefererteKanaler":[]}"#);
    }
}
