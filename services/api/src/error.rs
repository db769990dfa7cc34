/// Reasons the api service refuses to start.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or empty. Carries the variable name.
    #[error("{0} is required")]
    MissingRequired(&'static str),
}

impl ConfigError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingRequired(_) => "MISSING_REQUIRED",
        }
    }

    /// Name of the environment variable that needs fixing.
    pub fn variable(&self) -> &'static str {
        match self {
            Self::MissingRequired(var) => var,
        }
    }
}
