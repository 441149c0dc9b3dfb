use indexmap::IndexMap;
use log::{debug, error};

use unit_setters_core::config::SuggestionConfig;
use unit_setters_core::error::{Error, Result};
use unit_setters_core::setter::ParamSetter;
use unit_setters_core::suggest::{suggest, suggestion_clause};

/// An ordered set of named parameters, each backed by a setter.
///
/// Setters borrow the storage they write to, so the registry must be
/// dropped before the caller reads the values back.
pub struct Parameters<'a> {
    setters: IndexMap<String, Box<dyn ParamSetter + 'a>>,
    suggestions: SuggestionConfig,
}

impl<'a> Parameters<'a> {
    #[must_use]
    pub fn new(suggestions: SuggestionConfig) -> Self {
        Self {
            setters: IndexMap::new(),
            suggestions,
        }
    }

    /// Registers a setter under `name`, running its `check_setter` first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the setter was built incorrectly,
    /// or [`Error::DuplicateParameter`] if `name` is already taken. The
    /// caller must not go on to use the registry in either case.
    pub fn register<S: ParamSetter + 'a>(&mut self, name: &str, setter: S) -> Result<()> {
        if self.setters.contains_key(name) {
            error!("Refusing to register `{name}` twice");
            return Err(Error::DuplicateParameter(name.to_string()));
        }

        if let Err(fault) = setter.check_setter(name) {
            error!("Refusing to register `{name}`: {fault}");
            return Err(fault.into());
        }

        debug!("Registered parameter `{name}`");
        self.setters.insert(name.to_string(), Box::new(setter));
        Ok(())
    }

    /// Passes `value` to the setter registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownParameter`] if nothing is registered under
    /// `name`, otherwise whatever the setter returns.
    pub fn set(&mut self, name: &str, value: &str) -> Result<()> {
        match self.setters.get_mut(name) {
            Some(setter) => setter.set_with_value(name, value),
            None => {
                let names = self.names();
                let suggestion = suggestion_clause(&suggest(name, &names, &self.suggestions));
                Err(Error::unknown_parameter(name.to_string(), suggestion))
            }
        }
    }

    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.setters.keys().map(String::as_str).collect()
    }

    #[must_use]
    pub fn current_value(&self, name: &str) -> Option<String> {
        self.setters.get(name).map(|setter| setter.current_value())
    }

    /// Help text for every parameter, one block per parameter.
    #[must_use]
    pub fn describe(&self) -> Vec<String> {
        self.setters
            .iter()
            .map(|(name, setter)| {
                format!(
                    "--{name} <{}>\n    allowed values: {}\n    current value: {}",
                    setter.value_description(),
                    setter.allowed_values(),
                    setter.current_value()
                )
            })
            .collect()
    }
}
