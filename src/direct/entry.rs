//! Route entry creation and validation.

use std::sync::Arc;

use super::{DirectRouteFactoryContext, RouteFactory};
use crate::descriptor::ActionDescriptor;
use crate::error::DirectRouteError;
use crate::route::{InlineConstraintResolver, RouteEntry};

/// Build one entry per factory, in factory order. The first failure aborts.
pub fn create_route_entries(
    prefix: Option<&str>,
    factories: &[RouteFactory<'_>],
    actions: &[Arc<ActionDescriptor>],
    constraint_resolver: &dyn InlineConstraintResolver,
    target_is_action: bool,
) -> Result<Vec<RouteEntry>, DirectRouteError> {
    factories
        .iter()
        .map(|factory| {
            create_route_entry(prefix, factory, actions, constraint_resolver, target_is_action)
        })
        .collect()
}

/// Invoke `factory` and validate what it produced.
///
/// The entry must exist, its route must target at least one action, and the
/// route must not carry its own handler.
pub fn create_route_entry(
    prefix: Option<&str>,
    factory: &RouteFactory<'_>,
    actions: &[Arc<ActionDescriptor>],
    constraint_resolver: &dyn InlineConstraintResolver,
    target_is_action: bool,
) -> Result<RouteEntry, DirectRouteError> {
    let context =
        DirectRouteFactoryContext::new(prefix, actions, constraint_resolver, target_is_action);

    let mut entry = factory
        .create_route(&context)?
        .ok_or_else(|| DirectRouteError::factory_returned_null(controller_type(actions)))?;

    let route = entry.route();
    if route.target_actions().is_empty() {
        return Err(DirectRouteError::missing_target_actions(
            controller_type(actions),
            route.template(),
        ));
    }

    if let Some(handler) = route.handler() {
        return Err(DirectRouteError::handler_not_supported(
            controller_type(actions),
            route.template(),
            handler.name(),
        ));
    }

    entry.set_target_is_action(target_is_action);
    Ok(entry)
}

fn controller_type(actions: &[Arc<ActionDescriptor>]) -> String {
    actions
        .first()
        .map(|a| a.controller_descriptor().controller_type().to_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::RouteAttribute;
    use crate::descriptor::ControllerDescriptor;
    use crate::direct::DirectRouteFactory;
    use crate::route::{DefaultInlineConstraintResolver, RequestHandler, Route};

    #[derive(Debug)]
    struct NullFactory;

    impl DirectRouteFactory for NullFactory {
        fn create_route(
            &self,
            _context: &DirectRouteFactoryContext<'_>,
        ) -> Result<Option<RouteEntry>, DirectRouteError> {
            Ok(None)
        }
    }

    #[derive(Debug)]
    struct NoTargetsFactory;

    impl DirectRouteFactory for NoTargetsFactory {
        fn create_route(
            &self,
            _context: &DirectRouteFactoryContext<'_>,
        ) -> Result<Option<RouteEntry>, DirectRouteError> {
            Ok(Some(RouteEntry::new(None, "orphans", Route::new("orphans", Vec::new()))))
        }
    }

    #[derive(Debug)]
    struct Passthrough;

    impl RequestHandler for Passthrough {
        fn name(&self) -> &str {
            "passthrough"
        }
    }

    #[derive(Debug)]
    struct HandlerFactory;

    impl DirectRouteFactory for HandlerFactory {
        fn create_route(
            &self,
            context: &DirectRouteFactoryContext<'_>,
        ) -> Result<Option<RouteEntry>, DirectRouteError> {
            let route = Route::new("proxy", context.actions().to_vec())
                .with_handler(Arc::new(Passthrough));
            Ok(Some(RouteEntry::new(None, "proxy", route)))
        }
    }

    #[derive(Debug)]
    struct ManualFactory;

    impl DirectRouteFactory for ManualFactory {
        fn create_route(
            &self,
            context: &DirectRouteFactoryContext<'_>,
        ) -> Result<Option<RouteEntry>, DirectRouteError> {
            let route = Route::new("manual", context.actions().to_vec());
            Ok(Some(RouteEntry::new(None, "manual", route)))
        }
    }

    fn actions() -> Vec<Arc<ActionDescriptor>> {
        let controller = Arc::new(ControllerDescriptor::new("Widgets", "shop::WidgetsController"));
        vec![Arc::new(ActionDescriptor::new("Get", &controller))]
    }

    fn build(factory: RouteFactory<'_>) -> Result<RouteEntry, DirectRouteError> {
        create_route_entry(None, &factory, &actions(), &DefaultInlineConstraintResolver, true)
    }

    #[test]
    fn test_valid_entry_is_returned() {
        let attr = RouteAttribute::new("{id}");
        let entry = build(RouteFactory::Native(&attr)).unwrap();
        assert_eq!(entry.route().template(), "{id}");
    }

    #[test]
    fn test_null_entry_is_rejected() {
        let err = build(RouteFactory::Native(&NullFactory)).unwrap_err();
        match err {
            DirectRouteError::FactoryReturnedNull {
                factory,
                operation,
                controller_type,
            } => {
                assert_eq!(factory, "DirectRouteFactory");
                assert_eq!(operation, "create_route");
                assert_eq!(controller_type, "shop::WidgetsController");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_target_flag_comes_from_the_context() {
        let entry = build(RouteFactory::Native(&ManualFactory)).unwrap();
        assert!(entry.route().target_is_action());

        let actions = actions();
        let entry = create_route_entry(
            None,
            &RouteFactory::Native(&ManualFactory),
            &actions,
            &DefaultInlineConstraintResolver,
            false,
        )
        .unwrap();
        assert!(!entry.route().target_is_action());
    }

    #[test]
    fn test_entry_without_targets_is_rejected() {
        let err = build(RouteFactory::Native(&NoTargetsFactory)).unwrap_err();
        assert!(matches!(err, DirectRouteError::MissingTargetActions { .. }));
    }

    #[test]
    fn test_entry_with_handler_is_rejected() {
        let err = build(RouteFactory::Native(&HandlerFactory)).unwrap_err();
        match err {
            DirectRouteError::HandlerNotSupported { handler, .. } => {
                assert_eq!(handler, "passthrough");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_entries_follow_factory_order_and_stop_at_first_failure() {
        let first = RouteAttribute::new("a");
        let second = RouteAttribute::new("b");
        let actions = actions();

        let entries = create_route_entries(
            Some("api"),
            &[RouteFactory::Native(&first), RouteFactory::Native(&second)],
            &actions,
            &DefaultInlineConstraintResolver,
            false,
        )
        .unwrap();
        let templates: Vec<_> = entries.iter().map(|e| e.route().template()).collect();
        assert_eq!(templates, vec!["api/a", "api/b"]);

        let result = create_route_entries(
            None,
            &[RouteFactory::Native(&first), RouteFactory::Native(&NullFactory)],
            &actions,
            &DefaultInlineConstraintResolver,
            false,
        );
        assert!(result.is_err());
    }
}
