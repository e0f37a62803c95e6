//! DynamoDB filter and condition expression builder.
//!
//! [`ExpressionBuilder`] accumulates predicate fragments such as
//! `'Name' = ?` or `begins_with('Name', ?)` together with the values bound to
//! their `?` placeholders, and renders them as one AND- or OR-joined
//! expression. Sub-expressions nest by splicing one builder's rendered output
//! into another with [`ExpressionBuilder::append`].
//!
//! [`substitute`] rewrites the rendered form into DynamoDB's native
//! `#name` / `:value` placeholder syntax so it can be sent with a `Scan`,
//! `Query` or conditional write.
#![allow(clippy::doc_markdown, clippy::module_name_repetitions)]

pub mod builder;
pub mod config;
pub mod error;
pub mod substitute;

pub use builder::{Conjunction, ExpressionBuilder};
pub use config::SubstitutionConfig;
pub use dynafilter_model::{AttributeType, AttributeValue, ComparisonOperator};
pub use error::{ConfigError, SubstitutionError};
pub use substitute::{FilterExpression, substitute};
