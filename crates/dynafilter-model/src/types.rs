//! Closed enumerations used when composing DynamoDB expressions.
//!
//! Enum variants use idiomatic Rust `PascalCase` naming and map to the codes
//! and symbols DynamoDB uses through [`as_str`](AttributeType::as_str), which
//! also drives `Display` and the serde representation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

// ---------------------------------------------------------------------------
// Attribute type
// ---------------------------------------------------------------------------

/// DynamoDB attribute data type, as accepted by `attribute_type(path, :type)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeType {
    /// String.
    #[serde(rename = "S")]
    S,
    /// String set.
    #[serde(rename = "SS")]
    Ss,
    /// Number.
    #[serde(rename = "N")]
    N,
    /// Number set.
    #[serde(rename = "NS")]
    Ns,
    /// Binary.
    #[serde(rename = "B")]
    B,
    /// Binary set.
    #[serde(rename = "BS")]
    Bs,
    /// Boolean.
    #[serde(rename = "BOOL")]
    Bool,
    /// Null.
    #[serde(rename = "NULL")]
    Null,
    /// List.
    #[serde(rename = "L")]
    L,
    /// Map.
    #[serde(rename = "M")]
    M,
}

impl AttributeType {
    /// Every attribute type, in DynamoDB documentation order.
    pub const ALL: [Self; 10] = [
        Self::S,
        Self::Ss,
        Self::N,
        Self::Ns,
        Self::B,
        Self::Bs,
        Self::Bool,
        Self::Null,
        Self::L,
        Self::M,
    ];

    /// Returns the DynamoDB type code for this attribute type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::S => "S",
            Self::Ss => "SS",
            Self::N => "N",
            Self::Ns => "NS",
            Self::B => "B",
            Self::Bs => "BS",
            Self::Bool => "BOOL",
            Self::Null => "NULL",
            Self::L => "L",
            Self::M => "M",
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttributeType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ModelError::UnknownAttributeType(s.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Comparison operator
// ---------------------------------------------------------------------------

/// Comparison operators of the DynamoDB expression language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
    /// Equal (`=`).
    Eq,
    /// Not equal (`<>`).
    Ne,
    /// Less than (`<`).
    Lt,
    /// Less than or equal (`<=`).
    Le,
    /// Greater than (`>`).
    Gt,
    /// Greater than or equal (`>=`).
    Ge,
}

impl ComparisonOperator {
    /// Returns the literal symbol rendered into expressions.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "<>",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
        }
    }

    /// Returns the operator that holds exactly when `self` does not.
    #[must_use]
    pub fn negate(self) -> Self {
        match self {
            Self::Eq => Self::Ne,
            Self::Ne => Self::Eq,
            Self::Lt => Self::Ge,
            Self::Ge => Self::Lt,
            Self::Le => Self::Gt,
            Self::Gt => Self::Le,
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComparisonOperator {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" => Ok(Self::Eq),
            "<>" => Ok(Self::Ne),
            "<" => Ok(Self::Lt),
            "<=" => Ok(Self::Le),
            ">" => Ok(Self::Gt),
            ">=" => Ok(Self::Ge),
            other => Err(ModelError::UnknownOperator(other.to_owned())),
        }
    }
}
