use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// The error type returned by check functions. Whatever a check returns is
/// surfaced to the caller unchanged.
pub type CheckError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised while setting a parameter value.
///
/// `NotFound`, `Duplicate` and `CheckFailed` are problems with the user's
/// input and can be reported and recovered from. `Configuration` means the
/// setter itself was wired up wrongly and the program must not proceed.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{} '{}' is not recognised.{}", .label, .token, .suggestion)]
    NotFound {
        label: String,
        token: String,
        suggestion: String,
    },

    #[error("{} is already in the list", .value)]
    Duplicate { value: String },

    #[error(transparent)]
    CheckFailed(CheckError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationFault),

    #[error("There is no parameter called `{}`.{}", .name, .suggestion)]
    UnknownParameter { name: String, suggestion: String },

    #[error("A setter is already registered for `{}`", .0)]
    DuplicateParameter(String),

    #[error("Invalid parameter format: `{}`. Expected name=value", .0)]
    ParameterFormat(String),

    #[error("No unit details are available for the `{}` family", .0)]
    NoUnitDetails(String),
}

impl Error {
    pub fn not_found(label: String, token: String, suggestion: String) -> Self {
        Self::NotFound {
            label,
            token,
            suggestion,
        }
    }

    pub fn duplicate(value: String) -> Self {
        Self::Duplicate { value }
    }

    pub fn unknown_parameter(name: String, suggestion: String) -> Self {
        Self::UnknownParameter { name, suggestion }
    }

    /// True when the error reports bad program wiring rather than bad input.
    #[must_use]
    pub fn is_configuration_fault(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::DuplicateParameter(_))
    }
}

/// A setter that has been constructed incorrectly.
///
/// Returned by `check_setter` before the setter is put to use. A host that
/// receives one of these must stop setting up its parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}: {} Check failed: {}", .parameter, .setter, .reason)]
pub struct ConfigurationFault {
    pub parameter: String,
    pub setter: String,
    pub reason: Fault,
}

impl ConfigurationFault {
    pub fn new(parameter: &str, setter: String, reason: Fault) -> Self {
        Self {
            parameter: parameter.to_string(),
            setter,
            reason,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Fault {
    #[error("the Value to be set is nil")]
    NilTarget,

    #[error("there is no vocabulary of valid values")]
    NoVocabulary,

    #[error("there are no valid values for {}", .0)]
    EmptyVocabulary(String),
}
