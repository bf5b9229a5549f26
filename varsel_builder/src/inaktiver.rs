//! Deactivate-varsel builder.

use varsel_action::action::InaktiverVarsel;
use varsel_action::domain::Produsent;
use varsel_action::serialize::serialize_inaktiver_varsel;
use varsel_action::validation::{require_field, VarselValidationError};

use crate::environment::{resolve_produsent, Environment, ProcessEnvironment};
use crate::error::Result;
use crate::metadata::generate_metadata;

#[derive(Debug, Clone)]
pub struct InaktiverVarselBuilder {
    varsel_id: Option<String>,
    produsent: Option<Produsent>,
}

impl Default for InaktiverVarselBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InaktiverVarselBuilder {
    pub fn new() -> Self {
        Self::with_environment(&ProcessEnvironment)
    }

    pub fn with_environment<E: Environment + ?Sized>(env: &E) -> Self {
        Self {
            varsel_id: None,
            produsent: resolve_produsent(env),
        }
    }

    #[must_use]
    pub fn with_varsel_id(mut self, varsel_id: impl Into<String>) -> Self {
        self.varsel_id = Some(varsel_id.into());
        self
    }

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

    pub fn build(&self) -> Result<String> {
        let varsel = self.freeze().inspect_err(|err| {
            tracing::warn!(
                varsel_id = self.varsel_id.as_deref().unwrap_or_default(),
                error = %err,
                "inaktiver-varsel rejected"
            );
        })?;

        let json = serialize_inaktiver_varsel(&varsel)?;
        tracing::debug!(varsel_id = %varsel.varsel_id, "built inaktiver-varsel action");
        Ok(json)
    }

    fn freeze(&self) -> std::result::Result<InaktiverVarsel, VarselValidationError> {
        let varsel_id = require_field(&self.varsel_id, "varselId kan ikke være null")?;
        let produsent = require_field(&self.produsent, "produsent kan ikke være null")?;

        Ok(InaktiverVarsel::new(
            varsel_id.clone(),
            produsent.clone(),
            generate_metadata(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::BuilderEnvironment;

    #[test]
    fn test_varsel_id_checked_before_produsent() {
        let err = InaktiverVarselBuilder::with_environment(&BuilderEnvironment::empty())
            .build()
            .unwrap_err();
        assert_eq!(err.to_string(), "varselId kan ikke være null");
    }

    #[test]
    fn test_explicit_produsent() {
        let json = InaktiverVarselBuilder::with_environment(&BuilderEnvironment::empty())
            .with_varsel_id("11111111-1111-1111-1111-111111111111")
            .with_produsent("cluster", "namespace", "app")
            .build()
            .unwrap();

        let json: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(json["@event_name"], "inaktiver");
        assert_eq!(json["produsent"]["appnavn"], "app");
    }
}
