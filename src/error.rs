//! # Error Module
//!
//! Every failure raised while discovering direct routes is a configuration
//! error: a mistake in a route declaration that is found at startup and must
//! abort route-table construction. Nothing here is retried and there is no
//! partial-success mode.
//!
//! Each variant carries the structured context (controller type, controller
//! name, factory capability, template) needed to make the message actionable.
//! The constructors below are plain functions of that context.

use thiserror::Error;

use crate::descriptor::ControllerDescriptor;

/// Name of the modern route factory capability, as reported in errors.
pub const DIRECT_ROUTE_FACTORY: &str = "DirectRouteFactory";

/// Name of the factory operation that produces route entries.
pub const CREATE_ROUTE: &str = "create_route";

/// Errors raised while discovering and compiling direct routes.
#[derive(Debug, Error)]
pub enum DirectRouteError {
    /// More than one route prefix is declared on a single controller.
    #[error(
        "only one route prefix is supported per controller; remove the extra \
         prefix declarations from controller type '{controller_type}' ({count} found)"
    )]
    AmbiguousPrefix {
        controller_type: String,
        count: usize,
    },

    /// A route prefix is declared without a value, or ends with a `/`.
    #[error("{}", invalid_prefix_message(.prefix, .controller_type, .controller_name))]
    InvalidPrefixValue {
        controller_type: String,
        controller_name: String,
        prefix: Option<String>,
    },

    /// A route factory produced no entry.
    #[error("{factory}.{operation} must not return an empty result (controller type '{controller_type}')")]
    FactoryReturnedNull {
        factory: &'static str,
        operation: &'static str,
        controller_type: String,
    },

    /// A compiled route resolved to zero target actions.
    #[error(
        "route '{template}' on controller type '{controller_type}' has no target actions; \
         every direct route must map to a non-empty set of actions"
    )]
    MissingTargetActions {
        controller_type: String,
        template: String,
    },

    /// A compiled route carries its own request handler.
    #[error(
        "route '{template}' on controller type '{controller_type}' carries handler '{handler}'; \
         direct routes do not support per-route handlers"
    )]
    HandlerNotSupported {
        controller_type: String,
        template: String,
        handler: String,
    },

    /// A route template could not be combined or parsed.
    #[error("invalid route template '{template}': {reason}")]
    InvalidTemplate { template: String, reason: String },

    /// An inline constraint could not be resolved by the constraint resolver.
    #[error(
        "the inline constraint resolver could not resolve constraint '{constraint}' \
         on parameter '{parameter}' in route template '{template}'"
    )]
    UnresolvedConstraint {
        template: String,
        parameter: String,
        constraint: String,
    },

    /// Two routes in one table share a name.
    #[error(
        "a route named '{name}' is already in the route table (declared again on \
         controller type '{controller_type}'); route names must be unique"
    )]
    DuplicateRouteName {
        name: String,
        controller_type: String,
    },
}

impl DirectRouteError {
    pub fn ambiguous_prefix(controller: &ControllerDescriptor, count: usize) -> Self {
        DirectRouteError::AmbiguousPrefix {
            controller_type: controller.controller_type().to_owned(),
            count,
        }
    }

    pub fn invalid_prefix(controller: &ControllerDescriptor, prefix: Option<&str>) -> Self {
        DirectRouteError::InvalidPrefixValue {
            controller_type: controller.controller_type().to_owned(),
            controller_name: controller.name().to_owned(),
            prefix: prefix.map(str::to_owned),
        }
    }

    pub fn factory_returned_null(controller_type: impl Into<String>) -> Self {
        DirectRouteError::FactoryReturnedNull {
            factory: DIRECT_ROUTE_FACTORY,
            operation: CREATE_ROUTE,
            controller_type: controller_type.into(),
        }
    }

    pub fn missing_target_actions(
        controller_type: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        DirectRouteError::MissingTargetActions {
            controller_type: controller_type.into(),
            template: template.into(),
        }
    }

    pub fn handler_not_supported(
        controller_type: impl Into<String>,
        template: impl Into<String>,
        handler: impl Into<String>,
    ) -> Self {
        DirectRouteError::HandlerNotSupported {
            controller_type: controller_type.into(),
            template: template.into(),
            handler: handler.into(),
        }
    }

    pub fn invalid_template(template: impl Into<String>, reason: impl Into<String>) -> Self {
        DirectRouteError::InvalidTemplate {
            template: template.into(),
            reason: reason.into(),
        }
    }
}

/// Message for [`DirectRouteError::InvalidPrefixValue`].
///
/// A missing value names the controller type; a trailing separator names the
/// offending value and the controller's display name.
fn invalid_prefix_message(
    prefix: &Option<String>,
    controller_type: &str,
    controller_name: &str,
) -> String {
    match prefix {
        None => format!(
            "the route prefix declared on controller type '{controller_type}' must have a value"
        ),
        Some(value) => format!(
            "the route prefix '{value}' on the controller named '{controller_name}' \
             cannot end with a '/' character"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambiguous_prefix_names_controller_type() {
        let controller = ControllerDescriptor::new("Widgets", "shop::WidgetsController");
        let err = DirectRouteError::ambiguous_prefix(&controller, 2);
        let msg = err.to_string();
        assert!(msg.contains("shop::WidgetsController"), "{msg}");
        assert!(msg.contains("2 found"), "{msg}");
    }

    #[test]
    fn test_invalid_prefix_messages() {
        let controller = ControllerDescriptor::new("Widgets", "shop::WidgetsController");

        let missing = DirectRouteError::invalid_prefix(&controller, None).to_string();
        assert!(missing.contains("shop::WidgetsController"), "{missing}");
        assert!(missing.contains("must have a value"), "{missing}");

        let trailing = DirectRouteError::invalid_prefix(&controller, Some("api/")).to_string();
        assert!(trailing.contains("'api/'"), "{trailing}");
        assert!(trailing.contains("'Widgets'"), "{trailing}");
    }

    #[test]
    fn test_factory_returned_null_names_capability_and_operation() {
        let msg = DirectRouteError::factory_returned_null("shop::WidgetsController").to_string();
        assert!(msg.starts_with("DirectRouteFactory.create_route"), "{msg}");
    }
}
