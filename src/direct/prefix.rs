//! Controller route prefix resolution.

use std::fmt;

use crate::descriptor::ControllerDescriptor;
use crate::error::DirectRouteError;

/// Separator between a prefix and a route template.
pub const PATH_SEPARATOR: char = '/';

/// A controller-wide path prefix declaration.
pub trait RoutePrefix: fmt::Debug + Send + Sync {
    /// The declared value; `None` when the declaration supplies none.
    fn prefix(&self) -> Option<&str>;
}

/// The prefix declared on `controller`, if any.
///
/// At most one prefix may be declared. The value must be present and must not
/// end with [`PATH_SEPARATOR`], since it is joined to templates with one.
pub fn route_prefix(controller: &ControllerDescriptor) -> Result<Option<&str>, DirectRouteError> {
    let declared: Vec<&dyn RoutePrefix> = controller
        .annotations()
        .iter()
        .filter_map(|a| a.as_route_prefix())
        .collect();

    match declared.as_slice() {
        [] => Ok(None),
        [single] => match single.prefix() {
            None => Err(DirectRouteError::invalid_prefix(controller, None)),
            Some(value) if value.ends_with(PATH_SEPARATOR) => {
                Err(DirectRouteError::invalid_prefix(controller, Some(value)))
            }
            Some(value) => Ok(Some(value)),
        },
        many => Err(DirectRouteError::ambiguous_prefix(controller, many.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::{RouteAttribute, RoutePrefixAttribute};

    fn controller() -> ControllerDescriptor {
        ControllerDescriptor::new("Widgets", "shop::WidgetsController")
    }

    #[test]
    fn test_no_prefix() {
        let c = controller().with_annotation(RouteAttribute::new(""));
        assert_eq!(route_prefix(&c).unwrap(), None);
    }

    #[test]
    fn test_single_prefix() {
        let c = controller().with_annotation(RoutePrefixAttribute::new("api"));
        assert_eq!(route_prefix(&c).unwrap(), Some("api"));
    }

    #[test]
    fn test_empty_prefix_is_allowed() {
        let c = controller().with_annotation(RoutePrefixAttribute::new(""));
        assert_eq!(route_prefix(&c).unwrap(), Some(""));
    }

    #[test]
    fn test_two_prefixes_are_ambiguous() {
        let c = controller()
            .with_annotation(RoutePrefixAttribute::new("api"))
            .with_annotation(RoutePrefixAttribute::new("v2"));
        match route_prefix(&c) {
            Err(DirectRouteError::AmbiguousPrefix {
                controller_type,
                count,
            }) => {
                assert_eq!(controller_type, "shop::WidgetsController");
                assert_eq!(count, 2);
            }
            other => panic!("expected AmbiguousPrefix, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_value_is_invalid() {
        let c = controller().with_annotation(RoutePrefixAttribute::empty());
        assert!(matches!(
            route_prefix(&c),
            Err(DirectRouteError::InvalidPrefixValue { prefix: None, .. })
        ));
    }

    #[test]
    fn test_trailing_separator_is_invalid() {
        let c = controller().with_annotation(RoutePrefixAttribute::new("api/"));
        match route_prefix(&c) {
            Err(DirectRouteError::InvalidPrefixValue {
                prefix,
                controller_name,
                ..
            }) => {
                assert_eq!(prefix.as_deref(), Some("api/"));
                assert_eq!(controller_name, "Widgets");
            }
            other => panic!("expected InvalidPrefixValue, got {other:?}"),
        }
    }
}
