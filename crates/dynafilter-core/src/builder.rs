//! Fluent builder for DynamoDB filter and condition expressions.
//!
//! Every appending method writes one fragment and the values it binds, then
//! returns the builder for chaining:
//!
//! ```
//! use dynafilter_core::ExpressionBuilder;
//!
//! let mut names = ExpressionBuilder::new();
//! names.equal("Name", "Taro").equal("Name", "Hanako");
//!
//! let mut filter = ExpressionBuilder::new();
//! filter
//!     .equal("Age", 1)
//!     .append(names.join_or(), names.arguments().to_vec());
//!
//! assert_eq!(
//!     filter.join_and(),
//!     "('Age' = ?) AND (('Name' = ?) OR ('Name' = ?))"
//! );
//! assert_eq!(filter.arguments().len(), 3);
//! ```
//!
//! Attribute paths are written verbatim between single quotes; embedded quote
//! characters are not escaped. `is_in` with no values renders `IN ()`, which
//! DynamoDB rejects.

use dynafilter_model::{AttributeType, AttributeValue, ComparisonOperator};

use crate::config::SubstitutionConfig;
use crate::error::SubstitutionError;
use crate::substitute::{FilterExpression, substitute};

/// How fragments are combined when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Conjunction {
    /// Every fragment must hold. See [`ExpressionBuilder::join_and`].
    #[default]
    And,
    /// At least one fragment must hold. See [`ExpressionBuilder::join_or`].
    Or,
}

impl Conjunction {
    /// Returns the keyword placed between parenthesized fragments.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

impl std::fmt::Display for Conjunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accumulates expression fragments and the arguments bound to their `?`
/// placeholders, in left-to-right order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpressionBuilder {
    fragments: Vec<String>,
    arguments: Vec<AttributeValue>,
}

impl ExpressionBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Comparisons
    // -----------------------------------------------------------------------

    /// `'<path>' <op> ?`
    pub fn op(
        &mut self,
        path: impl AsRef<str>,
        op: ComparisonOperator,
        value: impl Into<AttributeValue>,
    ) -> &mut Self {
        self.push(format!("'{}' {op} ?", path.as_ref()), vec![value.into()])
    }

    /// `'<path>' = ?`
    pub fn equal(&mut self, path: impl AsRef<str>, value: impl Into<AttributeValue>) -> &mut Self {
        self.op(path, ComparisonOperator::Eq, value)
    }

    /// `'<path>' BETWEEN ? AND ?`, binding `low` then `high`.
    ///
    /// The bounds are not checked against each other.
    pub fn between(
        &mut self,
        path: impl AsRef<str>,
        low: impl Into<AttributeValue>,
        high: impl Into<AttributeValue>,
    ) -> &mut Self {
        self.push(
            format!("'{}' BETWEEN ? AND ?", path.as_ref()),
            vec![low.into(), high.into()],
        )
    }

    /// `'<path>' IN (?,?,...)` with one placeholder per value.
    pub fn is_in<I, V>(&mut self, path: impl AsRef<str>, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<AttributeValue>,
    {
        let values: Vec<AttributeValue> = values.into_iter().map(Into::into).collect();
        let binds = vec!["?"; values.len()].join(",");
        self.push(format!("'{}' IN ({binds})", path.as_ref()), values)
    }

    // -----------------------------------------------------------------------
    // Functions
    // -----------------------------------------------------------------------

    /// `attribute_exists('<path>')`
    pub fn attribute_exists(&mut self, path: impl AsRef<str>) -> &mut Self {
        self.append_fragment(format!("attribute_exists('{}')", path.as_ref()))
    }

    /// `attribute_not_exists('<path>')`
    pub fn attribute_not_exists(&mut self, path: impl AsRef<str>) -> &mut Self {
        self.append_fragment(format!("attribute_not_exists('{}')", path.as_ref()))
    }

    /// `attribute_type('<path>', ?)`, binding the type code as a string value.
    pub fn attribute_type(&mut self, path: impl AsRef<str>, ty: AttributeType) -> &mut Self {
        self.push(
            format!("attribute_type('{}', ?)", path.as_ref()),
            vec![ty.into()],
        )
    }

    /// `begins_with('<path>', ?)`
    pub fn begins_with(
        &mut self,
        path: impl AsRef<str>,
        value: impl Into<AttributeValue>,
    ) -> &mut Self {
        self.push(
            format!("begins_with('{}', ?)", path.as_ref()),
            vec![value.into()],
        )
    }

    /// `contains('<path>', ?)`
    pub fn contains(&mut self, path: impl AsRef<str>, value: impl Into<AttributeValue>) -> &mut Self {
        self.push(format!("contains('{}', ?)", path.as_ref()), vec![value.into()])
    }

    /// `size('<path>')`
    ///
    /// Appended as a fragment of its own; it is not combined with a following
    /// comparison.
    pub fn size(&mut self, path: impl AsRef<str>) -> &mut Self {
        self.append_fragment(format!("size('{}')", path.as_ref()))
    }

    // -----------------------------------------------------------------------
    // Raw fragments
    // -----------------------------------------------------------------------

    /// Append an arbitrary fragment and the arguments bound to its placeholders.
    ///
    /// Passing another builder's [`join_or`](Self::join_or) output together with
    /// its [`arguments`](Self::arguments) nests that builder at this position.
    /// The number of `?` in `fragment` is not checked against `args`.
    pub fn append<I, V>(&mut self, fragment: impl Into<String>, args: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<AttributeValue>,
    {
        self.push(fragment.into(), args.into_iter().map(Into::into).collect())
    }

    fn append_fragment(&mut self, fragment: String) -> &mut Self {
        self.push(fragment, Vec::new())
    }

    fn push(&mut self, fragment: String, args: Vec<AttributeValue>) -> &mut Self {
        tracing::trace!(
            fragment = %fragment,
            arguments = args.len(),
            "appended expression fragment"
        );
        self.fragments.push(fragment);
        self.arguments.extend(args);
        self
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    /// Join all fragments with `AND`.
    ///
    /// A single fragment is returned as-is; otherwise every fragment is wrapped
    /// in parentheses. Returns an empty string when nothing was appended.
    #[must_use]
    pub fn join_and(&self) -> String {
        match self.fragments.as_slice() {
            [only] => only.clone(),
            _ => self.join_wrapped(Conjunction::And),
        }
    }

    /// Join all fragments with `OR`, wrapping every fragment in parentheses,
    /// including when there is only one.
    #[must_use]
    pub fn join_or(&self) -> String {
        self.join_wrapped(Conjunction::Or)
    }

    /// Dispatch to [`join_and`](Self::join_and) or [`join_or`](Self::join_or).
    #[must_use]
    pub fn join(&self, conjunction: Conjunction) -> String {
        match conjunction {
            Conjunction::And => self.join_and(),
            Conjunction::Or => self.join_or(),
        }
    }

    fn join_wrapped(&self, conjunction: Conjunction) -> String {
        let separator = format!(" {conjunction} ");
        self.fragments
            .iter()
            .map(|f| format!("({f})"))
            .collect::<Vec<_>>()
            .join(&separator)
    }

    /// Render with `conjunction` and rewrite into DynamoDB's native
    /// `#name` / `:value` placeholders.
    pub fn to_filter(
        &self,
        conjunction: Conjunction,
        config: &SubstitutionConfig,
    ) -> Result<FilterExpression, SubstitutionError> {
        substitute(&self.join(conjunction), &self.arguments, config)
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Returns `true` once any fragment has been appended.
    #[must_use]
    pub fn has_filter(&self) -> bool {
        !self.fragments.is_empty()
    }

    /// The fragments in append order, before parenthesization.
    #[must_use]
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// The bound arguments, in placeholder order.
    #[must_use]
    pub fn arguments(&self) -> &[AttributeValue] {
        &self.arguments
    }

    /// Consume the builder, returning its arguments.
    #[must_use]
    pub fn into_arguments(self) -> Vec<AttributeValue> {
        self.arguments
    }
}
