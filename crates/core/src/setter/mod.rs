//! Parameter setters that turn command-line tokens into typed values.
//!
//! Every setter here is a [`VocabularySetter`]: it resolves the token
//! against a [`Vocabulary`], suggests close matches when that fails, runs any
//! attached checks and finally hands the value to a [`Placement`] that
//! writes it into storage owned by the caller.
//!
//! The four variants are:
//!
//! - [`UnitSetter`]: sets a single [`Unit`](crate::units::Unit)
//! - [`FamilySetter`]: sets a single [`Family`](crate::units::Family)
//! - [`TagSetter`]: sets a single [`Tag`](crate::units::Tag)
//! - [`TagListAppender`]: appends tags to a list, refusing duplicates

pub mod placement;
pub mod variants;

use std::marker::PhantomData;

use log::{debug, warn};

use crate::config::SuggestionConfig;
use crate::error::{CheckError, ConfigurationFault, Error, Fault, Result};
use crate::suggest::{suggest, suggestion_clause};
use crate::vocabulary::{allowed_values, Vocabulary};

pub use placement::{Append, Overwrite, Placement};
pub use variants::{FamilySetter, TagListAppender, TagSetter, UnitSetter};

/// A check run against a resolved value before it is stored. It may borrow
/// anything that outlives the setter.
pub type Check<'a, T> = Box<dyn Fn(&T) -> std::result::Result<(), CheckError> + 'a>;

/// The contract a parameter framework relies on to drive a setter.
pub trait ParamSetter {
    /// Resolves `token` and, if it is acceptable, stores the value.
    ///
    /// On any error the target is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an unknown token,
    /// [`Error::Duplicate`] when a list already holds the value,
    /// [`Error::CheckFailed`] when a check rejects it and
    /// [`Error::Configuration`] when the setter has nowhere to write.
    fn set_with_value(&mut self, param_name: &str, token: &str) -> Result<()>;

    /// Verifies the setter was built correctly. Called once by the host
    /// before the setter is used.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationFault`] if the target or the vocabulary is
    /// missing, or the vocabulary is empty.
    fn check_setter(&self, param_name: &str) -> std::result::Result<(), ConfigurationFault>;

    /// The legal values, for help text.
    fn allowed_values(&self) -> String;

    /// A short description of the expected value.
    fn value_description(&self) -> String;

    /// The current contents of the target, or "" if it is empty.
    fn current_value(&self) -> String;
}

/// A setter resolving tokens against a vocabulary `V` and storing values
/// with the placement strategy `P`.
pub struct VocabularySetter<'a, V, P>
where
    V: Vocabulary,
    P: Placement<V::Value>,
{
    target: Option<&'a mut P::Target>,
    vocabulary: Option<&'a V>,
    checks: Vec<Check<'a, V::Value>>,
    value_description: Option<String>,
    suggestions: SuggestionConfig,
    placement: PhantomData<P>,
}

impl<'a, V, P> VocabularySetter<'a, V, P>
where
    V: Vocabulary,
    P: Placement<V::Value>,
{
    pub fn new(target: &'a mut P::Target, vocabulary: &'a V) -> Self {
        Self::unset().with_target(target).with_vocabulary(vocabulary)
    }

    /// A setter with no target and no vocabulary. It fails `check_setter`
    /// until both are supplied.
    #[must_use]
    pub fn unset() -> Self {
        Self {
            target: None,
            vocabulary: None,
            checks: Vec::new(),
            value_description: None,
            suggestions: SuggestionConfig::default(),
            placement: PhantomData,
        }
    }

    #[must_use]
    pub fn with_target(mut self, target: &'a mut P::Target) -> Self {
        self.target = Some(target);
        self
    }

    #[must_use]
    pub fn with_vocabulary(mut self, vocabulary: &'a V) -> Self {
        self.vocabulary = Some(vocabulary);
        self
    }

    /// Adds a check. Checks run in the order they were added.
    #[must_use]
    pub fn with_check<F>(mut self, check: F) -> Self
    where
        F: Fn(&V::Value) -> std::result::Result<(), CheckError> + 'a,
    {
        self.checks.push(Box::new(check));
        self
    }

    /// Overrides the value description shown in help text.
    #[must_use]
    pub fn with_value_description(mut self, description: impl Into<String>) -> Self {
        self.value_description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_suggestions(mut self, suggestions: SuggestionConfig) -> Self {
        self.suggestions = suggestions;
        self
    }

    #[must_use]
    pub fn count_checks(&self) -> usize {
        self.checks.len()
    }

    /// The setter's name as used in configuration faults, e.g. "UnitSetter".
    #[must_use]
    pub fn setter_name() -> String {
        format!("{}{}", V::KIND, P::SUFFIX)
    }

    fn fault(param_name: &str, reason: Fault) -> ConfigurationFault {
        ConfigurationFault::new(param_name, Self::setter_name(), reason)
    }

    fn suggest_alternatives(&self, vocabulary: &V, token: &str) -> String {
        let names = vocabulary.legal_names();
        suggestion_clause(&suggest(token, &names, &self.suggestions))
    }
}

impl<V, P> ParamSetter for VocabularySetter<'_, V, P>
where
    V: Vocabulary,
    P: Placement<V::Value>,
{
    fn set_with_value(&mut self, param_name: &str, token: &str) -> Result<()> {
        if self.target.is_none() {
            return Err(Self::fault(param_name, Fault::NilTarget).into());
        }

        let vocabulary = self
            .vocabulary
            .ok_or_else(|| Self::fault(param_name, Fault::NoVocabulary))?;

        let Some(value) = vocabulary.resolve(token) else {
            warn!("Rejected `{token}` for `{param_name}`: not a {}", vocabulary.label());
            return Err(Error::not_found(
                vocabulary.label(),
                token.to_string(),
                self.suggest_alternatives(vocabulary, token),
            ));
        };

        if let Some(target) = self.target.as_deref() {
            P::admit(target, &value)?;
        }

        for check in &self.checks {
            check(&value).map_err(Error::CheckFailed)?;
        }

        debug!("Setting `{param_name}` to `{value}` (from `{token}`)");

        if let Some(target) = self.target.as_deref_mut() {
            P::place(target, value);
        }

        Ok(())
    }

    fn check_setter(&self, param_name: &str) -> std::result::Result<(), ConfigurationFault> {
        if self.target.is_none() {
            return Err(Self::fault(param_name, Fault::NilTarget));
        }

        match self.vocabulary {
            None => Err(Self::fault(param_name, Fault::NoVocabulary)),
            Some(vocabulary) if vocabulary.is_empty() => Err(Self::fault(
                param_name,
                Fault::EmptyVocabulary(vocabulary.label()),
            )),
            Some(_) => Ok(()),
        }
    }

    fn allowed_values(&self) -> String {
        match self.vocabulary {
            Some(vocabulary) if !vocabulary.is_empty() => {
                let mut rval = allowed_values(vocabulary).join(", ");
                if !self.checks.is_empty() {
                    rval.push_str(" (subject to checks)");
                }
                rval
            }
            Some(vocabulary) => format!("there are no valid values for {}", vocabulary.label()),
            None => "there are no valid values".to_string(),
        }
    }

    fn value_description(&self) -> String {
        if let Some(description) = &self.value_description {
            return description.clone();
        }

        self.vocabulary.map_or_else(
            || V::KIND.to_lowercase(),
            |vocabulary| vocabulary.value_description(),
        )
    }

    fn current_value(&self) -> String {
        self.target.as_deref().map(P::render).unwrap_or_default()
    }
}
