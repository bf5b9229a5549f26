//! Create-varsel builder.
//!
//! `build()` order:
//!   1. presence check, fails on the first missing field
//!   2. structural validation, reports every failing rule
//!   3. freeze fields plus fresh metadata into an `OpprettVarsel`
//!   4. serialize

use chrono::{DateTime, TimeZone, Utc};

use varsel_action::action::OpprettVarsel;
use varsel_action::domain::{
    EksternKanal, EksternVarslingBestilling, Produsent, Sensitivitet, Tekst, Varseltype,
};
use varsel_action::serialize::serialize_opprett_varsel;
use varsel_action::validation::{require_field, validate_opprett_varsel, VarselValidationError};

use crate::environment::{resolve_produsent, Environment, ProcessEnvironment};
use crate::error::Result;
use crate::metadata::generate_metadata;

/// Accumulates the fields of a create action.
#[derive(Debug, Clone)]
pub struct OpprettVarselBuilder {
    varseltype: Option<Varseltype>,
    varsel_id: Option<String>,
    ident: Option<String>,
    sensitivitet: Option<Sensitivitet>,
    link: Option<String>,
    tekster: Vec<Tekst>,
    ekstern_varsling: Option<EksternVarslingBuilder>,
    aktiv_frem_til: Option<DateTime<Utc>>,
    produsent: Option<Produsent>,
}

impl Default for OpprettVarselBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl OpprettVarselBuilder {
    /// Empty builder with the producer taken from the process environment
    /// when available.
    pub fn new() -> Self {
        Self::with_environment(&ProcessEnvironment)
    }

    /// Empty builder with the producer taken from `env` when available.
    pub fn with_environment<E: Environment + ?Sized>(env: &E) -> Self {
        Self {
            varseltype: None,
            varsel_id: None,
            ident: None,
            sensitivitet: None,
            link: None,
            tekster: Vec::new(),
            ekstern_varsling: None,
            aktiv_frem_til: None,
            produsent: resolve_produsent(env),
        }
    }

    /// Fresh sub-builder for [`with_ekstern_varsling`](Self::with_ekstern_varsling).
    pub fn ekstern_varsling() -> EksternVarslingBuilder {
        EksternVarslingBuilder::new()
    }

    #[must_use]
    pub fn with_type(mut self, varseltype: Varseltype) -> Self {
        self.varseltype = Some(varseltype);
        self
    }

    #[must_use]
    pub fn with_varsel_id(mut self, varsel_id: impl Into<String>) -> Self {
        self.varsel_id = Some(varsel_id.into());
        self
    }

    #[must_use]
    pub fn with_ident(mut self, ident: impl Into<String>) -> Self {
        self.ident = Some(ident.into());
        self
    }

    #[must_use]
    pub fn with_sensitivitet(mut self, sensitivitet: Sensitivitet) -> Self {
        self.sensitivitet = Some(sensitivitet);
        self
    }

    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Appends a text. Earlier texts are kept.
    #[must_use]
    pub fn with_tekst(
        mut self,
        spraakkode: impl Into<String>,
        tekst: impl Into<String>,
        default: bool,
    ) -> Self {
        self.tekster.push(Tekst::new(spraakkode, tekst, default));
        self
    }

    /// Appends a text that is not the default one.
    #[must_use]
    pub fn with_non_default_tekst(
        self,
        spraakkode: impl Into<String>,
        tekst: impl Into<String>,
    ) -> Self {
        self.with_tekst(spraakkode, tekst, false)
    }

    #[must_use]
    pub fn with_tekster(mut self, tekster: impl IntoIterator<Item = Tekst>) -> Self {
        self.tekster.extend(tekster);
        self
    }

    /// Requests external dispatch with no preferences.
    /// Not suited for oppgave or other important varsler.
    #[must_use]
    pub fn with_standard_ekstern_varsling(self) -> Self {
        self.with_ekstern_varsling(EksternVarslingBuilder::new())
    }

    #[must_use]
    pub fn with_ekstern_varsling(mut self, ekstern_varsling: EksternVarslingBuilder) -> Self {
        self.ekstern_varsling = Some(ekstern_varsling);
        self
    }

    #[must_use]
    pub fn with_aktiv_frem_til<Tz: TimeZone>(mut self, aktiv_frem_til: DateTime<Tz>) -> Self {
        self.aktiv_frem_til = Some(aktiv_frem_til.with_timezone(&Utc));
        self
    }

    /// Overrides any producer resolved from the environment.
    #[must_use]
    pub fn with_produsent(
        mut self,
        cluster: impl Into<String>,
        namespace: impl Into<String>,
        appnavn: impl Into<String>,
    ) -> Self {
        self.produsent = Some(Produsent::new(cluster, namespace, appnavn));
        self
    }

    /// Validate and serialize. The builder is left untouched and may be
    /// built again.
    pub fn build(&self) -> Result<String> {
        let varsel = self.freeze().inspect_err(|err| {
            tracing::warn!(
                varsel_id = self.varsel_id.as_deref().unwrap_or_default(),
                error = %err,
                "opprett-varsel rejected"
            );
        })?;

        let json = serialize_opprett_varsel(&varsel)?;
        tracing::debug!(
            varsel_id = %varsel.varsel_id,
            varseltype = ?varsel.varseltype,
            "built opprett-varsel action"
        );
        Ok(json)
    }

    fn freeze(&self) -> std::result::Result<OpprettVarsel, VarselValidationError> {
        let varseltype = require_field(&self.varseltype, "type kan ikke være null")?;
        let varsel_id = require_field(&self.varsel_id, "varselId kan ikke være null")?;
        let ident = require_field(&self.ident, "ident kan ikke være null")?;
        let sensitivitet = require_field(&self.sensitivitet, "sensitivitet kan ikke være null")?;
        let produsent = require_field(&self.produsent, "produsent kan ikke være null")?;
        if self.tekster.is_empty() {
            return Err(VarselValidationError::missing_field("Må ha satt minst 1 tekst"));
        }

        let mut varsel = OpprettVarsel::new(
            *varseltype,
            varsel_id.clone(),
            ident.clone(),
            *sensitivitet,
            self.tekster.clone(),
            produsent.clone(),
            generate_metadata(),
        );
        varsel.link = self.link.clone();
        varsel.ekstern_varsling = self.ekstern_varsling.as_ref().map(EksternVarslingBuilder::build);
        varsel.aktiv_frem_til = self.aktiv_frem_til;

        validate_opprett_varsel(&varsel)?;
        Ok(varsel)
    }
}

/// Accumulates an external dispatch request. Every field is optional.
#[derive(Debug, Clone, Default)]
pub struct EksternVarslingBuilder {
    preferert_kanal: Option<EksternKanal>,
    sms_varslingstekst: Option<String>,
    epost_varslingstittel: Option<String>,
    epost_varslingstekst: Option<String>,
    kan_batches: Option<bool>,
    utsett_sending_til: Option<DateTime<Utc>>,
}

impl EksternVarslingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_preferert_kanal(mut self, kanal: EksternKanal) -> Self {
        self.preferert_kanal = Some(kanal);
        self
    }

    #[must_use]
    pub fn with_sms_varslingstekst(mut self, tekst: impl Into<String>) -> Self {
        self.sms_varslingstekst = Some(tekst.into());
        self
    }

    #[must_use]
    pub fn with_epost_varslingstittel(mut self, tittel: impl Into<String>) -> Self {
        self.epost_varslingstittel = Some(tittel.into());
        self
    }

    #[must_use]
    pub fn with_epost_varslingstekst(mut self, tekst: impl Into<String>) -> Self {
        self.epost_varslingstekst = Some(tekst.into());
        self
    }

    #[must_use]
    pub fn with_kan_batches(mut self, kan_batches: bool) -> Self {
        self.kan_batches = Some(kan_batches);
        self
    }

    #[must_use]
    pub fn with_utsett_sending_til<Tz: TimeZone>(mut self, tidspunkt: DateTime<Tz>) -> Self {
        self.utsett_sending_til = Some(tidspunkt.with_timezone(&Utc));
        self
    }

    /// No preferred channel becomes an empty list, not an absent one.
    fn build(&self) -> EksternVarslingBestilling {
        EksternVarslingBestilling {
            prefererte_kanaler: self.preferert_kanal.into_iter().collect(),
            sms_varslingstekst: self.sms_varslingstekst.clone(),
            epost_varslingstittel: self.epost_varslingstittel.clone(),
            epost_varslingstekst: self.epost_varslingstekst.clone(),
            kan_batches: self.kan_batches,
            utsett_sending_til: self.utsett_sending_til,
        }
    }
}
