/// Varsel action: Canonical Serialization
///
/// Produces the JSON text read by downstream consumers.
///
/// Rules:
///   - Field order follows the record declaration (serde_json preserve_order)
///   - Unset optional fields are omitted, never written as null
///   - Timestamps as ISO-8601 in UTC with `Z`
///   - UTF-8 JSON, no whitespace
///
/// Only actions that passed validation should reach this module.

use serde::Serialize;

use crate::action::{InaktiverVarsel, OpprettVarsel};

/// Canonical JSON of a create action.
pub fn serialize_opprett_varsel(varsel: &OpprettVarsel) -> serde_json::Result<String> {
    to_canonical_json(varsel)
}

/// Canonical JSON of a deactivate action.
pub fn serialize_inaktiver_varsel(varsel: &InaktiverVarsel) -> serde_json::Result<String> {
    to_canonical_json(varsel)
}

fn to_canonical_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string(value)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::action::Metadata;
    use crate::domain::{Produsent, Sensitivitet, Tekst, Varseltype};

    fn metadata() -> Metadata {
        Metadata {
            version: "v2.1".to_string(),
            built_at: Utc.timestamp_millis_opt(1_700_000_000_123).unwrap(),
            builder_lang: "rust".to_string(),
        }
    }

    #[test]
    fn test_inaktiver_is_exact() {
        let varsel = InaktiverVarsel::new(
            "11111111-1111-1111-1111-111111111111",
            Produsent::new("cluster", "namespace", "app"),
            metadata(),
        );

        assert_eq!(
            serialize_inaktiver_varsel(&varsel).unwrap(),
            concat!(
                r#"{"varselId":"11111111-1111-1111-1111-111111111111","#,
                r#""produsent":{"cluster":"cluster","namespace":"namespace","appnavn":"app"},"#,
                r#""metadata":{"version":"v2.1","built_at":"2023-11-14T22:13:20.123Z","builder_lang":"rust"},"#,
                r#""@event_name":"inaktiver"}"#
            )
        );
    }

    #[test]
    fn test_opprett_omits_unset_optionals() {
        let varsel = OpprettVarsel::new(
            Varseltype::Oppgave,
            "11111111-1111-1111-1111-111111111111",
            "12345678910",
            Sensitivitet::Substantial,
            vec![Tekst::new("no", "tekst", true)],
            Produsent::new("cluster", "namespace", "app"),
            metadata(),
        );

        let json: serde_json::Value =
            serde_json::from_str(&serialize_opprett_varsel(&varsel).unwrap()).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj["type"], "oppgave");
        assert_eq!(obj["sensitivitet"], "substantial");
        assert_eq!(obj["@event_name"], "opprett");
        assert!(!obj.contains_key("link"));
        assert!(!obj.contains_key("eksternVarsling"));
        assert!(!obj.contains_key("aktivFremTil"));
    }

    #[test]
    fn test_timestamps_are_iso_utc() {
        let mut varsel = OpprettVarsel::new(
            Varseltype::Beskjed,
            "11111111-1111-1111-1111-111111111111",
            "12345678910",
            Sensitivitet::High,
            vec![Tekst::new("no", "tekst", true)],
            Produsent::new("cluster", "namespace", "app"),
            metadata(),
        );
        varsel.aktiv_frem_til = Some(Utc.with_ymd_and_hms(2023, 10, 10, 10, 0, 0).unwrap());

        let json: serde_json::Value =
            serde_json::from_str(&serialize_opprett_varsel(&varsel).unwrap()).unwrap();

        assert_eq!(json["aktivFremTil"], "2023-10-10T10:00:00Z");
        assert_eq!(json["metadata"]["built_at"], "2023-11-14T22:13:20.123Z");
    }
}
