#![forbid(unsafe_code)]

//! Varsel builder
//!
//! Fluent builders that producer applications use to create the JSON
//! for opprett- and inaktiver-varsel actions. The producer identity is
//! picked up from the NAIS environment unless set explicitly.
//!
//! No contract logic lives here. Record shapes, validation rules and
//! serialization are delegated to `varsel_action`.

pub mod environment;
pub mod error;
pub mod inaktiver;
pub mod metadata;
pub mod opprett;

pub use error::BuildError;
pub use inaktiver::InaktiverVarselBuilder;
pub use opprett::{EksternVarslingBuilder, OpprettVarselBuilder};
pub use varsel_action::domain::{EksternKanal, Sensitivitet, Tekst, Varseltype};
pub use varsel_action::validation::{ValidationKind, VarselValidationError};

/// Closure-style entry points over the fluent builders.
///
/// ```no_run
/// use varsel_builder::{Sensitivitet, VarselActionBuilder, Varseltype};
///
/// let json = VarselActionBuilder::opprett(|varsel| {
///     varsel
///         .with_type(Varseltype::Beskjed)
///         .with_varsel_id("11111111-1111-1111-1111-111111111111")
///         .with_ident("12345678910")
///         .with_sensitivitet(Sensitivitet::High)
///         .with_tekst("no", "Du har fått et nytt brev", true)
/// })?;
/// # Ok::<(), varsel_builder::BuildError>(())
/// ```
pub struct VarselActionBuilder;

impl VarselActionBuilder {
    pub fn opprett<F>(configure: F) -> error::Result<String>
    where
        F: FnOnce(OpprettVarselBuilder) -> OpprettVarselBuilder,
    {
        configure(OpprettVarselBuilder::new()).build()
    }

    pub fn inaktiver<F>(configure: F) -> error::Result<String>
    where
        F: FnOnce(InaktiverVarselBuilder) -> InaktiverVarselBuilder,
    {
        configure(InaktiverVarselBuilder::new()).build()
    }
}
