//! Error types for expression substitution.
//!
//! The builder itself never fails; errors only arise when its output is
//! rewritten into DynamoDB's native placeholder form.

/// Invalid [`SubstitutionConfig`](crate::SubstitutionConfig) value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A placeholder prefix does not start with the sigil DynamoDB requires.
    #[error("{field} must start with '{sigil}', got {value:?}")]
    MissingSigil {
        /// The offending configuration field.
        field: &'static str,
        /// The required leading character.
        sigil: char,
        /// The configured value.
        value: String,
    },

    /// A placeholder prefix contains characters DynamoDB does not accept.
    #[error("{field} may only contain ASCII alphanumerics and '_' after the sigil, got {value:?}")]
    InvalidCharacter {
        /// The offending configuration field.
        field: &'static str,
        /// The configured value.
        value: String,
    },
}

/// Errors produced while rewriting `'path'` / `?` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubstitutionError {
    /// Nothing to substitute; callers should check `has_filter` first.
    #[error("expression is empty")]
    EmptyExpression,

    /// A quoted attribute path is missing its closing quote.
    #[error("unterminated attribute path starting at byte {offset}")]
    UnterminatedPath {
        /// Byte offset of the opening quote.
        offset: usize,
    },

    /// More `?` placeholders than bound arguments.
    #[error("no argument bound to placeholder #{placeholder}")]
    MissingArgument {
        /// Zero-based index of the placeholder without a value.
        placeholder: usize,
    },

    /// More bound arguments than `?` placeholders.
    #[error("{provided} arguments provided but only {used} placeholders found")]
    UnusedArguments {
        /// Number of placeholders in the expression.
        used: usize,
        /// Number of arguments supplied.
        provided: usize,
    },

    /// The substitution configuration is invalid.
    #[error("invalid substitution config: {0}")]
    Config(#[from] ConfigError),
}
