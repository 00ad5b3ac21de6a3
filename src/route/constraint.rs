//! Inline route constraints and the resolver that turns constraint text
//! (`int`, `min(1)`, `regex(^[a-z]+$)`) into constraint objects.
//!
//! Discovery itself never interprets constraints. The resolver is handed,
//! untouched, to every factory through its build context, and the route
//! builder uses it for the constraints declared inline in templates.

use regex::{Regex, RegexBuilder};
use std::fmt;
use std::sync::Arc;

/// A check applied to a route parameter value.
pub trait RouteConstraint: fmt::Debug + Send + Sync {
    fn matches(&self, value: &str) -> bool;
}

/// Resolves inline constraint text to a constraint.
///
/// Returning `None` means the text is unknown; the route builder reports it as
/// a configuration error.
pub trait InlineConstraintResolver: Send + Sync {
    fn resolve(&self, inline_constraint: &str) -> Option<Arc<dyn RouteConstraint>>;
}

/// A resolved constraint together with the text it was declared with.
#[derive(Debug, Clone)]
pub struct InlineConstraint {
    text: String,
    constraint: Arc<dyn RouteConstraint>,
}

impl InlineConstraint {
    pub fn new(text: impl Into<String>, constraint: Arc<dyn RouteConstraint>) -> Self {
        InlineConstraint {
            text: text.into(),
            constraint,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        self.constraint.matches(value)
    }
}

/// Constraints known to [`DefaultInlineConstraintResolver`].
#[derive(Debug, Clone)]
pub enum BuiltinConstraint {
    Int,
    Long,
    Bool,
    Alpha,
    Guid,
    Min(i64),
    Max(i64),
    Range(i64, i64),
    MinLength(usize),
    MaxLength(usize),
    Length(usize),
    Regex(Regex),
}

impl RouteConstraint for BuiltinConstraint {
    fn matches(&self, value: &str) -> bool {
        match self {
            BuiltinConstraint::Int => value.parse::<i32>().is_ok(),
            BuiltinConstraint::Long => value.parse::<i64>().is_ok(),
            BuiltinConstraint::Bool => {
                value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false")
            }
            BuiltinConstraint::Alpha => {
                !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic())
            }
            BuiltinConstraint::Guid => is_guid(value),
            BuiltinConstraint::Min(min) => value.parse::<i64>().is_ok_and(|v| v >= *min),
            BuiltinConstraint::Max(max) => value.parse::<i64>().is_ok_and(|v| v <= *max),
            BuiltinConstraint::Range(min, max) => {
                value.parse::<i64>().is_ok_and(|v| v >= *min && v <= *max)
            }
            BuiltinConstraint::MinLength(min) => value.chars().count() >= *min,
            BuiltinConstraint::MaxLength(max) => value.chars().count() <= *max,
            BuiltinConstraint::Length(len) => value.chars().count() == *len,
            BuiltinConstraint::Regex(re) => re.is_match(value),
        }
    }
}

/// `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx`, hex digits, any case.
fn is_guid(value: &str) -> bool {
    const GROUPS: [usize; 5] = [8, 4, 4, 4, 12];
    let parts: Vec<&str> = value.split('-').collect();
    parts.len() == GROUPS.len()
        && parts
            .iter()
            .zip(GROUPS)
            .all(|(part, len)| part.len() == len && part.chars().all(|c| c.is_ascii_hexdigit()))
}

/// The stock resolver: `int`, `long`, `bool`, `alpha`, `guid`, `min(n)`,
/// `max(n)`, `range(a,b)`, `minlength(n)`, `maxlength(n)`, `length(n)` and
/// `regex(pattern)`. Names are case-insensitive.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultInlineConstraintResolver;

impl DefaultInlineConstraintResolver {
    /// Resolve to a concrete builtin, keeping the type.
    #[must_use]
    pub fn resolve_builtin(inline_constraint: &str) -> Option<BuiltinConstraint> {
        let (name, args) = split_constraint(inline_constraint)?;
        let constraint = match (name.to_ascii_lowercase().as_str(), args) {
            ("int", None) => BuiltinConstraint::Int,
            ("long", None) => BuiltinConstraint::Long,
            ("bool", None) => BuiltinConstraint::Bool,
            ("alpha", None) => BuiltinConstraint::Alpha,
            ("guid", None) => BuiltinConstraint::Guid,
            ("min", Some(arg)) => BuiltinConstraint::Min(arg.trim().parse().ok()?),
            ("max", Some(arg)) => BuiltinConstraint::Max(arg.trim().parse().ok()?),
            ("range", Some(args)) => {
                let (min, max) = args.split_once(',')?;
                BuiltinConstraint::Range(min.trim().parse().ok()?, max.trim().parse().ok()?)
            }
            ("minlength", Some(arg)) => BuiltinConstraint::MinLength(arg.trim().parse().ok()?),
            ("maxlength", Some(arg)) => BuiltinConstraint::MaxLength(arg.trim().parse().ok()?),
            ("length", Some(arg)) => BuiltinConstraint::Length(arg.trim().parse().ok()?),
            ("regex", Some(pattern)) => BuiltinConstraint::Regex(
                RegexBuilder::new(&format!("^(?:{pattern})$"))
                    .case_insensitive(true)
                    .build()
                    .ok()?,
            ),
            _ => return None,
        };
        Some(constraint)
    }
}

impl InlineConstraintResolver for DefaultInlineConstraintResolver {
    fn resolve(&self, inline_constraint: &str) -> Option<Arc<dyn RouteConstraint>> {
        Self::resolve_builtin(inline_constraint)
            .map(|c| Arc::new(c) as Arc<dyn RouteConstraint>)
    }
}

/// Split `name(args)` into its parts. Template braces doubled for escaping
/// (`{{`, `}}`) are collapsed in the arguments.
fn split_constraint(text: &str) -> Option<(&str, Option<String>)> {
    match text.find('(') {
        None => Some((text, None)),
        Some(open) => {
            let args = text[open + 1..].strip_suffix(')')?;
            let args = args.replace("{{", "{").replace("}}", "}");
            Some((&text[..open], Some(args)))
        }
    }
}
