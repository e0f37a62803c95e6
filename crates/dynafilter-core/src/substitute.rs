//! Rewrite builder output into DynamoDB's native placeholder syntax.
//!
//! The builder renders attribute paths as `'Name'` and values as positional
//! `?`. DynamoDB itself only understands expression attribute names (`#n0`)
//! and values (`:v0`), so before a request is sent every quoted path becomes a
//! name placeholder and every `?` takes the next bound argument.

use std::collections::HashMap;

use dynafilter_model::AttributeValue;
use serde::{Deserialize, Serialize};

use crate::config::SubstitutionConfig;
use crate::error::SubstitutionError;

/// A filter ready to be merged into a `Scan` or `Query` request.
///
/// Serializes with DynamoDB's `PascalCase` field names; empty maps are omitted
/// because DynamoDB rejects empty `ExpressionAttributeNames` /
/// `ExpressionAttributeValues`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FilterExpression {
    /// The expression with native `#name` / `:value` placeholders.
    pub filter_expression: String,

    /// Substitution tokens for attribute names.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expression_attribute_names: HashMap<String, String>,

    /// Substitution tokens for attribute values.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expression_attribute_values: HashMap<String, AttributeValue>,
}

/// Rewrite `expression` using `arguments` for its `?` placeholders, in order.
///
/// Text between single quotes is an attribute name and is replaced by a name
/// placeholder; the same name always maps to the same placeholder. A `?`
/// inside quotes belongs to the name. All other text is copied unchanged.
pub fn substitute(
    expression: &str,
    arguments: &[AttributeValue],
    config: &SubstitutionConfig,
) -> Result<FilterExpression, SubstitutionError> {
    config.validate()?;
    if expression.trim().is_empty() {
        return Err(SubstitutionError::EmptyExpression);
    }

    let mut out = String::with_capacity(expression.len());
    let mut placeholders: HashMap<&str, String> = HashMap::new();
    let mut names = HashMap::new();
    let mut values = HashMap::new();
    let mut args = arguments.iter();

    let mut rest = expression;
    let mut offset = 0;
    while let Some(idx) = rest.find(['\'', '?']) {
        out.push_str(&rest[..idx]);
        let at = offset + idx;

        if rest[idx..].starts_with('?') {
            let placeholder = values.len();
            let value = args
                .next()
                .ok_or(SubstitutionError::MissingArgument { placeholder })?;
            let key = format!("{}{placeholder}", config.value_prefix);
            out.push_str(&key);
            values.insert(key, value.clone());

            rest = &rest[idx + 1..];
            offset = at + 1;
        } else {
            let quoted = &rest[idx + 1..];
            let end = quoted
                .find('\'')
                .ok_or(SubstitutionError::UnterminatedPath { offset: at })?;
            let name = &quoted[..end];
            let key = placeholders
                .entry(name)
                .or_insert_with(|| {
                    let key = format!("{}{}", config.name_prefix, names.len());
                    names.insert(key.clone(), name.to_owned());
                    key
                })
                .clone();
            out.push_str(&key);

            rest = &quoted[end + 1..];
            offset = at + end + 2;
        }
    }
    out.push_str(rest);

    if values.len() < arguments.len() {
        return Err(SubstitutionError::UnusedArguments {
            used: values.len(),
            provided: arguments.len(),
        });
    }

    tracing::debug!(
        expression = %out,
        names = names.len(),
        values = values.len(),
        "substituted filter expression"
    );

    Ok(FilterExpression {
        filter_expression: out,
        expression_attribute_names: names,
        expression_attribute_values: values,
    })
}
