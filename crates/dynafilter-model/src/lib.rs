//! DynamoDB model types for dynafilter.
//!
//! Values bound to expression placeholders are DynamoDB [`AttributeValue`]s so
//! that a rendered filter can be handed to any DynamoDB API without another
//! conversion layer. The closed enumerations [`AttributeType`] and
//! [`ComparisonOperator`] render to the exact codes and symbols the DynamoDB
//! expression language expects.
// "DynamoDB" appears in virtually every doc comment in this crate.
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]

pub mod attribute_value;
pub mod error;
pub mod types;

pub use attribute_value::AttributeValue;
pub use error::ModelError;
pub use types::{AttributeType, ComparisonOperator};
