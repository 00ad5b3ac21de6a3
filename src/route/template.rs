//! Route template handling: prefix combination and parameter extraction.
//!
//! Parameter syntax:
//!
//! | Segment               | Meaning                                   |
//! |-----------------------|-------------------------------------------|
//! | `{id}`                | required parameter                        |
//! | `{id?}`               | optional parameter                        |
//! | `{page=1}`            | parameter with a default value            |
//! | `{*path}`             | catch-all parameter                       |
//! | `{id:int:min(1)}`     | parameter with inline constraints         |
//!
//! `{{` and `}}` are literal braces. Inline constraint arguments may contain
//! `:`, `?`, `=` and `{`/`}` as long as they sit inside the parentheses.

use crate::error::DirectRouteError;

/// Marks a template that ignores the controller prefix.
const PREFIX_OVERRIDE: &str = "~/";

/// A parameter extracted from a route template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateParameter {
    pub name: String,
    pub optional: bool,
    pub catch_all: bool,
    pub default: Option<String>,
    /// Inline constraint texts in declaration order, e.g. `["int", "min(1)"]`.
    pub inline_constraints: Vec<String>,
}

/// Apply a controller prefix to a declared template.
///
/// - `~/x` ignores the prefix and yields `x`
/// - no prefix (or an empty one) yields the template
/// - an empty template yields the prefix
/// - otherwise `prefix/template`
///
/// The combined template must not start with `/` or `~`.
pub fn combine_template(prefix: Option<&str>, template: &str) -> Result<String, DirectRouteError> {
    let combined = if let Some(rest) = template.strip_prefix(PREFIX_OVERRIDE) {
        rest.to_owned()
    } else {
        match prefix {
            None | Some("") => template.to_owned(),
            Some(prefix) if template.is_empty() => prefix.to_owned(),
            Some(prefix) => format!("{prefix}/{template}"),
        }
    };

    if combined.starts_with('/') || combined.starts_with('~') {
        return Err(DirectRouteError::invalid_template(
            combined,
            "a route template cannot start with a '/' or '~' character",
        ));
    }
    Ok(combined)
}

/// Extract the parameters declared in `template`.
pub fn parse_parameters(template: &str) -> Result<Vec<TemplateParameter>, DirectRouteError> {
    let bytes = template.as_bytes();
    let mut parameters: Vec<TemplateParameter> = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'{' if bytes.get(i + 1) == Some(&b'{') => i += 2,
            b'}' if bytes.get(i + 1) == Some(&b'}') => i += 2,
            b'{' => {
                let end = closing_brace(bytes, i + 1).ok_or_else(|| {
                    DirectRouteError::invalid_template(template, "unterminated '{' in parameter")
                })?;
                let parameter = parse_parameter(&template[i + 1..end])
                    .map_err(|reason| DirectRouteError::invalid_template(template, reason))?;
                if parameters.iter().any(|p| p.name.eq_ignore_ascii_case(&parameter.name)) {
                    return Err(DirectRouteError::invalid_template(
                        template,
                        format!("parameter '{}' appears more than once", parameter.name),
                    ));
                }
                parameters.push(parameter);
                i = end + 1;
            }
            b'}' => {
                return Err(DirectRouteError::invalid_template(
                    template,
                    "unmatched '}' outside a parameter",
                ))
            }
            _ => i += 1,
        }
    }

    if let Some(pos) = parameters.iter().position(|p| p.catch_all) {
        if pos + 1 != parameters.len() {
            return Err(DirectRouteError::invalid_template(
                template,
                "a catch-all parameter must be the last parameter",
            ));
        }
    }

    Ok(parameters)
}

/// Index of the `}` closing a parameter body starting at `start`.
fn closing_brace(bytes: &[u8], start: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, b) in bytes[start..].iter().enumerate() {
        match b {
            b'(' => depth += 1,
            b')' => depth = depth.saturating_sub(1),
            b'}' if depth == 0 => return Some(start + offset),
            b'{' if depth == 0 => return None,
            _ => {}
        }
    }
    None
}

fn parse_parameter(body: &str) -> Result<TemplateParameter, String> {
    let (catch_all, body) = match body.strip_prefix('*') {
        Some(rest) => (true, rest),
        None => (false, body),
    };

    let name_end = body.find([':', '?', '=']).unwrap_or(body.len());
    let name = &body[..name_end];
    if name.is_empty() {
        return Err("parameter name cannot be empty".to_owned());
    }
    if !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Err(format!("parameter name '{name}' contains invalid characters"));
    }

    let mut rest = &body[name_end..];
    let mut inline_constraints = Vec::new();
    while let Some(stripped) = rest.strip_prefix(':') {
        let end = constraint_end(stripped);
        let text = &stripped[..end];
        if text.is_empty() {
            return Err(format!("parameter '{name}' has an empty inline constraint"));
        }
        inline_constraints.push(text.to_owned());
        rest = &stripped[end..];
    }

    let (optional, default) = if rest.is_empty() {
        (false, None)
    } else if rest == "?" {
        (true, None)
    } else if let Some(value) = rest.strip_prefix('=') {
        (false, Some(value.to_owned()))
    } else {
        return Err(format!("unexpected '{rest}' after parameter '{name}'"));
    };

    if catch_all && optional {
        return Err(format!("catch-all parameter '{name}' cannot be optional"));
    }

    Ok(TemplateParameter {
        name: name.to_owned(),
        optional,
        catch_all,
        default,
        inline_constraints,
    })
}

/// Length of the constraint text at the start of `s`: up to the next `:`, `?`
/// or `=` that is not inside parentheses.
fn constraint_end(s: &str) -> usize {
    let mut depth = 0usize;
    for (i, b) in s.bytes().enumerate() {
        match b {
            b'(' => depth += 1,
            b')' => depth = depth.saturating_sub(1),
            b':' | b'?' | b'=' if depth == 0 => return i,
            _ => {}
        }
    }
    s.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_with_and_without_prefix() {
        assert_eq!(combine_template(None, "{id}").unwrap(), "{id}");
        assert_eq!(combine_template(Some(""), "{id}").unwrap(), "{id}");
        assert_eq!(combine_template(Some("api"), "{id}").unwrap(), "api/{id}");
        assert_eq!(combine_template(Some("api"), "").unwrap(), "api");
        assert_eq!(combine_template(None, "").unwrap(), "");
    }

    #[test]
    fn test_combine_override_ignores_prefix() {
        assert_eq!(combine_template(Some("api"), "~/health").unwrap(), "health");
    }

    #[test]
    fn test_combine_rejects_leading_slash() {
        let err = combine_template(None, "/widgets").unwrap_err();
        assert!(matches!(err, DirectRouteError::InvalidTemplate { .. }));
        assert!(combine_template(Some("api"), "~//x").is_err());
    }

    #[test]
    fn test_parse_plain_parameters() {
        let params = parse_parameters("users/{user_id}/posts/{id}").unwrap();
        let names: Vec<_> = params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["user_id", "id"]);
        assert!(params.iter().all(|p| !p.optional && !p.catch_all));
    }

    #[test]
    fn test_parse_modifiers() {
        let params = parse_parameters("{lang?}/{page=1}/{*rest}").unwrap();
        assert!(params[0].optional);
        assert_eq!(params[1].default.as_deref(), Some("1"));
        assert!(params[2].catch_all);
    }

    #[test]
    fn test_parse_inline_constraints_with_arguments() {
        let params = parse_parameters(r"{id:int:min(1)}/{code:regex(^\d{{3}}:x$)}").unwrap();
        assert_eq!(params[0].inline_constraints, vec!["int", "min(1)"]);
        assert_eq!(params[1].inline_constraints, vec![r"regex(^\d{{3}}:x$)"]);
    }

    #[test]
    fn test_parse_constraint_then_optional() {
        let params = parse_parameters("{id:int?}").unwrap();
        assert!(params[0].optional);
        assert_eq!(params[0].inline_constraints, vec!["int"]);
    }

    #[test]
    fn test_parse_literal_braces() {
        assert!(parse_parameters("a{{b}}c").unwrap().is_empty());
    }

    #[test]
    fn test_parse_errors() {
        for bad in ["{id", "id}", "{}", "{a b}", "{id}/{ID}", "{*rest?}", "{*a}/{b}", "{id:}"] {
            assert!(parse_parameters(bad).is_err(), "expected '{bad}' to be rejected");
        }
    }
}
