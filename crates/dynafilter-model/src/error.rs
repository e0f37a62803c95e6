//! Error types for the dynafilter model.

/// Errors raised when parsing model enumerations from their wire form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// The string is not one of the ten DynamoDB attribute type codes.
    #[error("unknown attribute type: {0} (expected one of S, SS, N, NS, B, BS, BOOL, NULL, L, M)")]
    UnknownAttributeType(String),

    /// The string is not a DynamoDB comparison operator symbol.
    #[error("unknown comparison operator: {0} (expected one of =, <>, <, <=, >, >=)")]
    UnknownOperator(String),
}
