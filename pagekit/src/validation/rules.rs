//! Ordered rule lists for a single field.

use regex::Regex;

use super::result::FieldResult;

/// Type alias for rule predicates.
type Predicate<V> = Box<dyn Fn(&V) -> bool + Send + Sync>;

struct Rule<V: ?Sized> {
    predicate: Predicate<V>,
    message: String,
}

/// An ordered list of rules for one field.
///
/// Rules are evaluated in insertion order and checking stops at the first
/// failure, so a field only ever reports one message.
///
/// # Example
///
/// ```
/// use pagekit::validation::Rules;
///
/// let rules = Rules::<str>::new()
///     .required("Username is required")
///     .min_length(3, "Username must be at least 3 characters");
///
/// assert_eq!(rules.check("").message(), Some("Username is required"));
/// assert!(rules.check("ferris").is_valid());
/// ```
pub struct Rules<V: ?Sized> {
    rules: Vec<Rule<V>>,
}

impl<V: ?Sized> Rules<V> {
    /// Create an empty rule list (always valid).
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a custom rule.
    pub fn rule<F>(mut self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&V) -> bool + Send + Sync + 'static,
    {
        self.rules.push(Rule {
            predicate: Box::new(f),
            message: msg.into(),
        });
        self
    }

    /// Run the rules against `value`, returning the first failure.
    pub fn check(&self, value: &V) -> FieldResult {
        self.rules
            .iter()
            .find(|rule| !(rule.predicate)(value))
            .map(|rule| FieldResult::invalid(rule.message.clone()))
            .unwrap_or_else(FieldResult::valid)
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True if there are no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<V: ?Sized> Default for Rules<V> {
    fn default() -> Self {
        Self::new()
    }
}

// Built-in rules for string values
impl Rules<str> {
    /// Require the value to be non-empty. Callers trim first where
    /// surrounding whitespace should not count.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(|v: &str| !v.is_empty(), msg)
    }

    /// Require minimum length (in characters).
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v: &str| v.chars().count() >= min, msg)
    }

    /// Require maximum length (in characters).
    pub fn max_length(self, max: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v: &str| v.chars().count() <= max, msg)
    }

    /// Require the value to match a regex. The pattern is unanchored unless
    /// it carries its own `^`/`$`.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid regex.
    pub fn pattern(self, pattern: &str, msg: impl Into<String>) -> Self {
        let re = Regex::new(pattern).expect("Invalid regex pattern");
        self.rule(move |v: &str| re.is_match(v), msg)
    }

    /// Require the value to equal another value.
    pub fn equals(self, other: impl Into<String>, msg: impl Into<String>) -> Self {
        let other = other.into();
        self.rule(move |v: &str| v == other, msg)
    }
}

// Built-in rules for bool values
impl Rules<bool> {
    /// Require the checkbox to be checked.
    pub fn checked(self, msg: impl Into<String>) -> Self {
        self.rule(|&v: &bool| v, msg)
    }
}

// Built-in rules for parsed integers
impl Rules<Option<i64>> {
    /// Require that the value parsed.
    pub fn present(self, msg: impl Into<String>) -> Self {
        self.rule(|v: &Option<i64>| v.is_some(), msg)
    }

    /// Require a minimum. Missing values pass; use `present()` for those.
    pub fn at_least(self, min: i64, msg: impl Into<String>) -> Self {
        self.rule(move |v: &Option<i64>| v.is_none_or(|n| n >= min), msg)
    }

    /// Require a maximum. Missing values pass; use `present()` for those.
    pub fn at_most(self, max: i64, msg: impl Into<String>) -> Self {
        self.rule(move |v: &Option<i64>| v.is_none_or(|n| n <= max), msg)
    }
}
