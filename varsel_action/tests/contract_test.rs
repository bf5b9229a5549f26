/// Contract test: serializes fixed actions and compares them with the
/// JSON documents downstream readers are built against.
///
/// The fixtures must NEVER be modified to match new behavior.
/// If this fails, the wire contract has been broken.

use std::fs;
use std::path::PathBuf;

use chrono::{TimeZone, Utc};
use serde_json::Value;

use varsel_action::action::{InaktiverVarsel, Metadata, OpprettVarsel};
use varsel_action::domain::{
    EksternKanal, EksternVarslingBestilling, Produsent, Sensitivitet, Tekst, Varseltype,
};
use varsel_action::serialize::{serialize_inaktiver_varsel, serialize_opprett_varsel};
use varsel_action::validation::validate_opprett_varsel;
use varsel_action::VARSEL_ACTION_VERSION;

fn load_golden(name: &str) -> Value {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("golden")
        .join(name);
    let data = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
    serde_json::from_str(&data).expect("Failed to parse golden JSON")
}

fn produsent() -> Produsent {
    Produsent::new("cluster", "namespace", "app")
}

fn golden_opprett_varsel() -> OpprettVarsel {
    let mut varsel = OpprettVarsel::new(
        Varseltype::Beskjed,
        "11111111-1111-1111-1111-111111111111",
        "12345678910",
        Sensitivitet::High,
        vec![Tekst::new("no", "tekst", true), Tekst::new("en", "text", false)],
        produsent(),
        Metadata {
            version: VARSEL_ACTION_VERSION.to_string(),
            built_at: Utc.timestamp_millis_opt(1_696_161_600_456).unwrap(),
            builder_lang: "rust".to_string(),
        },
    );
    varsel.link = Some("https://link".to_string());
    varsel.ekstern_varsling = Some(EksternVarslingBestilling {
        prefererte_kanaler: vec![EksternKanal::Sms],
        sms_varslingstekst: Some("sms".to_string()),
        kan_batches: Some(true),
        utsett_sending_til: Some(Utc.with_ymd_and_hms(2023, 10, 9, 8, 0, 0).unwrap()),
        ..Default::default()
    });
    varsel.aktiv_frem_til = Some(Utc.with_ymd_and_hms(2023, 10, 10, 10, 0, 0).unwrap());
    varsel
}

#[test]
fn opprett_varsel_matches_golden_document() {
    let varsel = golden_opprett_varsel();
    validate_opprett_varsel(&varsel).expect("golden action must be valid");

    let json = serialize_opprett_varsel(&varsel).expect("serialization failed");
    let actual: Value = serde_json::from_str(&json).unwrap();

    assert_eq!(
        actual,
        load_golden("opprett_varsel.json"),
        "CONTRACT TEST FAILED: opprett action no longer matches the golden document.\n\
         Got: {}",
        json
    );
}

#[test]
fn opprett_varsel_field_order_is_stable() {
    let json = serialize_opprett_varsel(&golden_opprett_varsel()).unwrap();
    let actual: Value = serde_json::from_str(&json).unwrap();
    let keys: Vec<&str> = actual.as_object().unwrap().keys().map(String::as_str).collect();

    assert_eq!(
        keys,
        [
            "type",
            "varselId",
            "ident",
            "sensitivitet",
            "link",
            "tekster",
            "eksternVarsling",
            "aktivFremTil",
            "produsent",
            "metadata",
            "@event_name",
        ]
    );
}

#[test]
fn inaktiver_varsel_matches_golden_document() {
    let varsel = InaktiverVarsel::new(
        "01ARZ3NDEKTSV4RRFFQ69G5FAV",
        produsent(),
        Metadata {
            version: VARSEL_ACTION_VERSION.to_string(),
            built_at: Utc.with_ymd_and_hms(2023, 10, 1, 12, 0, 0).unwrap(),
            builder_lang: "rust".to_string(),
        },
    );

    let json = serialize_inaktiver_varsel(&varsel).expect("serialization failed");
    let actual: Value = serde_json::from_str(&json).unwrap();

    assert_eq!(actual, load_golden("inaktiver_varsel.json"));
}

#[test]
fn action_version_is_v2_1() {
    assert_eq!(VARSEL_ACTION_VERSION, "v2.1", "contract version must match the consumers");
}
