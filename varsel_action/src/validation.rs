/// Varsel action: Validation
///
/// Two kinds of failure:
///   - missing required field: reported by the builders before an action
///     exists, always exactly one explanation
///   - structural violation: every failing rule below is collected, in
///     rule order, and reported together
///
/// Rule descriptions are consumed verbatim by producers and must not change.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::action::OpprettVarsel;
use crate::domain::{Tekst, Varseltype};
use crate::ids::is_valid_varsel_id;

const MAX_LENGTH_TEKST_BESKJED: usize = 300;
const MAX_LENGTH_TEKST_OPPGAVE_INNBOKS: usize = 500;
const MAX_LENGTH_LINK: usize = 200;
const MAX_LENGTH_SMS_VARSLINGSTEKST: usize = 160;
const MAX_LENGTH_EPOST_VARSLINGSTITTEL: usize = 40;
const MAX_LENGTH_EPOST_VARSLINGSTEKST: usize = 4000;

/// Schemes a downstream `java.net.URL` has a handler for.
const LINK_SCHEMES: &[&str] = &["http", "https", "ftp", "file", "jar", "mailto"];

static LANGUAGE_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[a-zA-Z]{2,8}$").expect("valid regex"));

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    MissingRequiredField,
    StructuralViolation,
}

/// Rejection of a varsel action, raised before anything is serialized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct VarselValidationError {
    kind: ValidationKind,
    message: String,
    explanation: Vec<String>,
}

impl VarselValidationError {
    pub fn missing_field(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            kind: ValidationKind::MissingRequiredField,
            explanation: vec![message.clone()],
            message,
        }
    }

    /// Aggregate failed rule descriptions. `explanation` must not be empty.
    pub fn structural(explanation: Vec<String>) -> Self {
        let message = match explanation.as_slice() {
            [single] => format!("Feil ved validering av varsel-action: {single}"),
            many => format!("Fant {} feil ved validering av varsel-action", many.len()),
        };
        Self {
            kind: ValidationKind::StructuralViolation,
            message,
            explanation,
        }
    }

    pub fn kind(&self) -> ValidationKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Violations in the order they were found.
    pub fn explanation(&self) -> &[String] {
        &self.explanation
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Presence check used by the builders before an action is assembled.
pub fn require_field<'a, T>(
    value: &'a Option<T>,
    message: &str,
) -> Result<&'a T, VarselValidationError> {
    value
        .as_ref()
        .ok_or_else(|| VarselValidationError::missing_field(message))
}

type Rule = (&'static str, fn(&OpprettVarsel) -> bool);

/// Rule table, evaluated in order.
const OPPRETT_VARSEL_RULES: &[Rule] = &[
    ("Fodselsnummer må være 11 tegn", ident_has_valid_length),
    ("Eventid må være gyldig UUID eller ULID", varsel_id_has_valid_format),
    ("Tekst må ha gyldig ISO 639 språkkode", language_codes_are_valid),
    ("Tekst kan ikke være null, og over makslengde", tekster_within_max_length),
    (
        "Presist 1 tekst må være satt som default hvis det finnes flere tekster",
        exactly_one_default_tekst,
    ),
    ("Kan kun ha opp til 1 tekst per språkkode", one_tekst_per_language),
    ("Link må være gyldig URL og maks 200 tegn", link_is_valid_url),
    ("link er påkrevd for innboks og oppgave", link_present_when_required),
    ("Innboks støtter ikke aktivFremTil", aktiv_frem_til_supported),
    ("Sms-varsel kan ikke være tom string, og maks 160 tegn", sms_tekst_is_valid),
    ("Epost-tittel kan ikke være tom string, og maks 40 tegn", epost_tittel_is_valid),
    ("Epost-tekst kan ikke være tom string, og maks 4000 tegn", epost_tekst_is_valid),
];

/// Run every structural rule against a create action.
/// Returns all failing rule descriptions at once.
pub fn validate_opprett_varsel(varsel: &OpprettVarsel) -> Result<(), VarselValidationError> {
    let failed: Vec<String> = OPPRETT_VARSEL_RULES
        .iter()
        .filter(|(_, rule)| !rule(varsel))
        .map(|(description, _)| description.to_string())
        .collect();

    if failed.is_empty() {
        Ok(())
    } else {
        Err(VarselValidationError::structural(failed))
    }
}

// ---------------------------------------------------------------------------
// Individual rules (private)
// ---------------------------------------------------------------------------

fn ident_has_valid_length(varsel: &OpprettVarsel) -> bool {
    utf16_len(&varsel.ident) == 11
}

fn varsel_id_has_valid_format(varsel: &OpprettVarsel) -> bool {
    is_valid_varsel_id(&varsel.varsel_id)
}

fn language_codes_are_valid(varsel: &OpprettVarsel) -> bool {
    varsel
        .tekster
        .iter()
        .all(|t| LANGUAGE_CODE_PATTERN.is_match(&t.spraakkode))
}

fn tekster_within_max_length(varsel: &OpprettVarsel) -> bool {
    let max_length = match varsel.varseltype {
        Varseltype::Beskjed => MAX_LENGTH_TEKST_BESKJED,
        Varseltype::Oppgave | Varseltype::Innboks => MAX_LENGTH_TEKST_OPPGAVE_INNBOKS,
    };
    varsel
        .tekster
        .iter()
        .all(|t| utf16_len(&t.tekst) <= max_length)
}

fn exactly_one_default_tekst(varsel: &OpprettVarsel) -> bool {
    varsel.tekster.len() == 1 || varsel.tekster.iter().filter(|t| t.default).count() == 1
}

fn one_tekst_per_language(varsel: &OpprettVarsel) -> bool {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for Tekst { spraakkode, .. } in &varsel.tekster {
        *counts.entry(spraakkode.as_str()).or_default() += 1;
    }
    counts.values().all(|&count| count == 1)
}

fn link_is_valid_url(varsel: &OpprettVarsel) -> bool {
    match &varsel.link {
        None => true,
        Some(link) => {
            utf16_len(link) <= MAX_LENGTH_LINK
                && url::Url::parse(link).is_ok_and(|url| LINK_SCHEMES.contains(&url.scheme()))
        }
    }
}

fn link_present_when_required(varsel: &OpprettVarsel) -> bool {
    match varsel.varseltype {
        Varseltype::Beskjed => true,
        Varseltype::Oppgave | Varseltype::Innboks => varsel.link.is_some(),
    }
}

fn aktiv_frem_til_supported(varsel: &OpprettVarsel) -> bool {
    match varsel.varseltype {
        Varseltype::Innboks => varsel.aktiv_frem_til.is_none(),
        Varseltype::Beskjed | Varseltype::Oppgave => true,
    }
}

fn sms_tekst_is_valid(varsel: &OpprettVarsel) -> bool {
    optional_text_is_valid(
        varsel.ekstern_varsling.as_ref().and_then(|e| e.sms_varslingstekst.as_deref()),
        MAX_LENGTH_SMS_VARSLINGSTEKST,
    )
}

fn epost_tittel_is_valid(varsel: &OpprettVarsel) -> bool {
    optional_text_is_valid(
        varsel.ekstern_varsling.as_ref().and_then(|e| e.epost_varslingstittel.as_deref()),
        MAX_LENGTH_EPOST_VARSLINGSTITTEL,
    )
}

fn epost_tekst_is_valid(varsel: &OpprettVarsel) -> bool {
    optional_text_is_valid(
        varsel.ekstern_varsling.as_ref().and_then(|e| e.epost_varslingstekst.as_deref()),
        MAX_LENGTH_EPOST_VARSLINGSTEKST,
    )
}

/// Unset passes; set must be non-blank and within `max_length`.
fn optional_text_is_valid(text: Option<&str>, max_length: usize) -> bool {
    match text {
        None => true,
        Some(text) => !text.trim().is_empty() && utf16_len(text) <= max_length,
    }
}

/// Length in UTF-16 code units, the unit downstream readers measure in.
fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}
