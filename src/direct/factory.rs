//! Route factory resolution.
//!
//! Two declaration styles exist side by side. Current declarations implement
//! [`DirectRouteFactory`] and build their own entry; legacy ones implement
//! only [`RouteInfoProvider`] and are adapted through
//! [`RouteInfoDirectRouteFactory`]. This module is the only place that builds
//! the adapter.

use std::fmt;
use std::sync::Arc;

use super::DirectRouteFactoryContext;
use crate::annotation::RouteAnnotation;
use crate::descriptor::{ActionDescriptor, ControllerDescriptor};
use crate::error::DirectRouteError;
use crate::route::RouteEntry;

/// Builds a route entry from a build context.
///
/// Returning `Ok(None)` breaks the contract and fails discovery with
/// [`DirectRouteError::FactoryReturnedNull`].
pub trait DirectRouteFactory: fmt::Debug + Send + Sync {
    fn create_route(
        &self,
        context: &DirectRouteFactoryContext<'_>,
    ) -> Result<Option<RouteEntry>, DirectRouteError>;
}

/// Legacy declaration style: describes a single route.
pub trait RouteInfoProvider: fmt::Debug + Send + Sync {
    fn template(&self) -> &str;

    fn name(&self) -> Option<&str>;

    fn order(&self) -> i32;
}

/// Adapts a [`RouteInfoProvider`] to the factory style.
#[derive(Debug, Clone, Copy)]
pub struct RouteInfoDirectRouteFactory<'a> {
    provider: &'a dyn RouteInfoProvider,
}

impl<'a> RouteInfoDirectRouteFactory<'a> {
    pub fn new(provider: &'a dyn RouteInfoProvider) -> Self {
        RouteInfoDirectRouteFactory { provider }
    }
}

impl DirectRouteFactory for RouteInfoDirectRouteFactory<'_> {
    fn create_route(
        &self,
        context: &DirectRouteFactoryContext<'_>,
    ) -> Result<Option<RouteEntry>, DirectRouteError> {
        context
            .create_builder(self.provider.template())
            .with_name(self.provider.name().map(str::to_owned))
            .with_order(self.provider.order())
            .build()
            .map(Some)
    }
}

/// A resolved route factory, borrowed from the descriptor that declares it.
#[derive(Debug, Clone, Copy)]
pub enum RouteFactory<'a> {
    Native(&'a dyn DirectRouteFactory),
    Legacy(RouteInfoDirectRouteFactory<'a>),
}

impl RouteFactory<'_> {
    pub fn create_route(
        &self,
        context: &DirectRouteFactoryContext<'_>,
    ) -> Result<Option<RouteEntry>, DirectRouteError> {
        match self {
            RouteFactory::Native(factory) => factory.create_route(context),
            RouteFactory::Legacy(adapter) => adapter.create_route(context),
        }
    }
}

/// Factories for a list of declarations.
///
/// Native factories come first, then adapted legacy providers, each group in
/// declaration order. A legacy provider that is also a native factory is
/// skipped so one declaration never yields two routes.
#[must_use]
pub fn route_factories(annotations: &[Arc<dyn RouteAnnotation>]) -> Vec<RouteFactory<'_>> {
    let native = annotations
        .iter()
        .filter_map(|a| a.as_direct_route_factory())
        .map(RouteFactory::Native);

    let legacy = annotations
        .iter()
        .filter(|a| a.as_direct_route_factory().is_none())
        .filter_map(|a| a.as_route_info_provider())
        .map(|p| RouteFactory::Legacy(RouteInfoDirectRouteFactory::new(p)));

    native.chain(legacy).collect()
}

/// Factories declared directly on an action.
#[must_use]
pub fn action_route_factories(action: &ActionDescriptor) -> Vec<RouteFactory<'_>> {
    route_factories(action.annotations())
}

/// Factories declared directly on a controller.
#[must_use]
pub fn controller_route_factories(controller: &ControllerDescriptor) -> Vec<RouteFactory<'_>> {
    route_factories(controller.annotations())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::{
        DirectRouteAttribute, RouteAttribute, RouteInfoAttribute, RoutePrefixAttribute,
    };

    fn templates(factories: &[RouteFactory<'_>]) -> Vec<String> {
        factories
            .iter()
            .map(|f| match f {
                RouteFactory::Native(n) => format!("native:{n:?}"),
                RouteFactory::Legacy(l) => format!("legacy:{}", l.provider.template()),
            })
            .collect()
    }

    #[test]
    fn test_empty_declarations_yield_no_factories() {
        assert!(route_factories(&[]).is_empty());
        let only_prefix: Vec<Arc<dyn RouteAnnotation>> =
            vec![Arc::new(RoutePrefixAttribute::new("api"))];
        assert!(route_factories(&only_prefix).is_empty());
    }

    #[test]
    fn test_dual_style_declaration_is_not_duplicated() {
        let annotations: Vec<Arc<dyn RouteAnnotation>> = vec![Arc::new(RouteAttribute::new("{id}"))];
        let factories = route_factories(&annotations);
        assert_eq!(factories.len(), 1);
        assert!(matches!(factories[0], RouteFactory::Native(_)));
    }

    #[test]
    fn test_native_factories_precede_legacy_in_declaration_order() {
        let annotations: Vec<Arc<dyn RouteAnnotation>> = vec![
            Arc::new(RouteInfoAttribute::new("legacy-a")),
            Arc::new(DirectRouteAttribute::new("native-a")),
            Arc::new(RouteInfoAttribute::new("legacy-b")),
            Arc::new(RouteAttribute::new("native-b")),
        ];
        let factories = route_factories(&annotations);
        let rendered = templates(&factories);

        assert_eq!(rendered.len(), 4);
        assert!(rendered[0].contains("native-a"), "{rendered:?}");
        assert!(rendered[1].contains("native-b"), "{rendered:?}");
        assert_eq!(rendered[2], "legacy:legacy-a");
        assert_eq!(rendered[3], "legacy:legacy-b");
    }
}
