use thiserror::Error;

use crate::suggestions::StrategyKind;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("garment is missing required field `{field}`")]
    MissingRequiredField { field: &'static str },
    #[error("{strategy} strategy requires a context {field}")]
    MissingContext { strategy: StrategyKind, field: &'static str },
    #[error("unknown {kind} `{value}`")]
    UnknownVocabulary { kind: &'static str, value: String },
    #[error("domain invariant violation: {0}")]
    InvariantViolation(String),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("configuration failure: {0}")]
    Configuration(String),
    #[error("wardrobe intake failure: {0}")]
    Intake(String),
}

impl ApplicationError {
    /// Stable machine-readable class used by the command layer.
    pub fn error_class(&self) -> &'static str {
        match self {
            Self::Domain(DomainError::MissingContext { .. }) => "contract_violation",
            Self::Domain(_) => "domain_validation",
            Self::Configuration(_) => "config_validation",
            Self::Intake(_) => "wardrobe_intake",
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::{ApplicationError, DomainError};
    use crate::suggestions::StrategyKind;

    #[test]
    fn missing_context_is_reported_as_contract_violation() {
        let error = ApplicationError::from(DomainError::MissingContext {
            strategy: StrategyKind::Mood,
            field: "mood",
        });

        assert_eq!(error.error_class(), "contract_violation");
        assert_eq!(error.to_string(), "mood strategy requires a context mood");
    }

    #[test]
    fn missing_field_maps_to_domain_validation() {
        let error =
            ApplicationError::from(DomainError::MissingRequiredField { field: "color" });

        assert_eq!(error.error_class(), "domain_validation");
        assert_eq!(error.to_string(), "garment is missing required field `color`");
    }

    #[test]
    fn intake_and_configuration_have_distinct_classes() {
        assert_eq!(ApplicationError::Intake("bad toml".to_owned()).error_class(), "wardrobe_intake");
        assert_eq!(
            ApplicationError::Configuration("bad level".to_owned()).error_class(),
            "config_validation"
        );
    }
}
