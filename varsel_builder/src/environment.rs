//! Deployment environment: resolves the producer identity.
//!
//! The builders never read the process environment directly; they take an
//! [`Environment`] so tests can supply their own view. [`BuilderEnvironment`]
//! is a snapshot of the process environment that can be extended and reset
//! without touching the real one.

use std::collections::HashMap;

use varsel_action::domain::Produsent;

pub const NAIS_CLUSTER_NAME: &str = "NAIS_CLUSTER_NAME";
pub const NAIS_NAMESPACE: &str = "NAIS_NAMESPACE";
pub const NAIS_APP_NAME: &str = "NAIS_APP_NAME";

/// Read-only view of environment variables.
pub trait Environment {
    fn get(&self, name: &str) -> Option<String>;
}

/// The live process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Overridable snapshot of an environment.
///
/// `extend` layers variables on top of the snapshot, `reset` drops every
/// override and restores the view it was created with.
#[derive(Debug, Clone, Default)]
pub struct BuilderEnvironment {
    base: HashMap<String, String>,
    env: HashMap<String, String>,
}

impl BuilderEnvironment {
    /// Snapshot of the current process environment.
    /// Variables that are not valid unicode are left out.
    pub fn from_process() -> Self {
        Self::from_base(std::env::vars_os().filter_map(|(k, v)| {
            Some((k.into_string().ok()?, v.into_string().ok()?))
        }))
    }

    /// An environment with no variables at all.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_base<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let base: HashMap<String, String> =
            vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self {
            env: base.clone(),
            base,
        }
    }

    pub fn extend<I, K, V>(&mut self, vars: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env
            .extend(vars.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn reset(&mut self) -> &mut Self {
        self.env = self.base.clone();
        self
    }
}

impl Environment for BuilderEnvironment {
    fn get(&self, name: &str) -> Option<String> {
        self.env.get(name).cloned()
    }
}

/// Producer identity from `NAIS_CLUSTER_NAME`, `NAIS_NAMESPACE` and
/// `NAIS_APP_NAME`. `None` unless all three are set and non-blank.
pub fn resolve_produsent<E: Environment + ?Sized>(env: &E) -> Option<Produsent> {
    let lookup = |name: &str| env.get(name).filter(|value| !value.trim().is_empty());

    match (lookup(NAIS_CLUSTER_NAME), lookup(NAIS_NAMESPACE), lookup(NAIS_APP_NAME)) {
        (Some(cluster), Some(namespace), Some(appnavn)) => {
            Some(Produsent::new(cluster, namespace, appnavn))
        }
        _ => {
            tracing::debug!("producer identity not available from environment");
            None
        }
    }
}
