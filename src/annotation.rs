//! # Annotation Module
//!
//! Route declarations attached to controllers and actions.
//!
//! A declaration is any [`RouteAnnotation`]; it exposes zero or more routing
//! capabilities:
//!
//! - [`DirectRouteFactory`] - the current declaration style, which builds a
//!   route entry itself
//! - [`RouteInfoProvider`] - the legacy style, which only supplies a
//!   template, name and order
//! - [`RoutePrefix`] - a controller-wide path prefix
//!
//! [`RouteAttribute`] exposes both route capabilities, the way a modern
//! declaration stays readable by code written against the legacy one. The
//! factory resolver makes sure such a declaration yields a single route.

use std::fmt;
use std::sync::Arc;

use crate::direct::{DirectRouteFactory, DirectRouteFactoryContext, RouteInfoProvider, RoutePrefix};
use crate::error::DirectRouteError;
use crate::route::RouteEntry;

/// A declaration attached to a controller or an action.
pub trait RouteAnnotation: fmt::Debug + Send + Sync {
    fn as_direct_route_factory(&self) -> Option<&dyn DirectRouteFactory> {
        None
    }

    fn as_route_info_provider(&self) -> Option<&dyn RouteInfoProvider> {
        None
    }

    fn as_route_prefix(&self) -> Option<&dyn RoutePrefix> {
        None
    }
}

/// True when any declaration in the list produces routes (a prefix alone does not).
pub(crate) fn has_route_declarations(annotations: &[Arc<dyn RouteAnnotation>]) -> bool {
    annotations.iter().any(|a| {
        a.as_direct_route_factory().is_some() || a.as_route_info_provider().is_some()
    })
}

/// `#[route("template")]`: a single route, exposed under both declaration styles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteAttribute {
    template: String,
    name: Option<String>,
    order: i32,
}

impl RouteAttribute {
    pub fn new(template: impl Into<String>) -> Self {
        RouteAttribute {
            template: template.into(),
            name: None,
            order: 0,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }
}

impl DirectRouteFactory for RouteAttribute {
    fn create_route(
        &self,
        context: &DirectRouteFactoryContext<'_>,
    ) -> Result<Option<RouteEntry>, DirectRouteError> {
        context
            .create_builder(&self.template)
            .with_name(self.name.clone())
            .with_order(self.order)
            .build()
            .map(Some)
    }
}

impl RouteInfoProvider for RouteAttribute {
    fn template(&self) -> &str {
        &self.template
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn order(&self) -> i32 {
        self.order
    }
}

impl RouteAnnotation for RouteAttribute {
    fn as_direct_route_factory(&self) -> Option<&dyn DirectRouteFactory> {
        Some(self)
    }

    fn as_route_info_provider(&self) -> Option<&dyn RouteInfoProvider> {
        Some(self)
    }
}

/// A declaration that only speaks the factory style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectRouteAttribute {
    template: String,
    name: Option<String>,
    order: i32,
}

impl DirectRouteAttribute {
    pub fn new(template: impl Into<String>) -> Self {
        DirectRouteAttribute {
            template: template.into(),
            name: None,
            order: 0,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }
}

impl DirectRouteFactory for DirectRouteAttribute {
    fn create_route(
        &self,
        context: &DirectRouteFactoryContext<'_>,
    ) -> Result<Option<RouteEntry>, DirectRouteError> {
        context
            .create_builder(&self.template)
            .with_name(self.name.clone())
            .with_order(self.order)
            .build()
            .map(Some)
    }
}

impl RouteAnnotation for DirectRouteAttribute {
    fn as_direct_route_factory(&self) -> Option<&dyn DirectRouteFactory> {
        Some(self)
    }
}

/// A legacy declaration: template, name and order only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteInfoAttribute {
    template: String,
    name: Option<String>,
    order: i32,
}

impl RouteInfoAttribute {
    pub fn new(template: impl Into<String>) -> Self {
        RouteInfoAttribute {
            template: template.into(),
            name: None,
            order: 0,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }
}

impl RouteInfoProvider for RouteInfoAttribute {
    fn template(&self) -> &str {
        &self.template
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn order(&self) -> i32 {
        self.order
    }
}

impl RouteAnnotation for RouteInfoAttribute {
    fn as_route_info_provider(&self) -> Option<&dyn RouteInfoProvider> {
        Some(self)
    }
}

/// `#[route_prefix("api")]` on a controller.
///
/// `None` models a declaration that supplies no value, which discovery rejects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePrefixAttribute {
    prefix: Option<String>,
}

impl RoutePrefixAttribute {
    pub fn new(prefix: impl Into<String>) -> Self {
        RoutePrefixAttribute {
            prefix: Some(prefix.into()),
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        RoutePrefixAttribute { prefix: None }
    }
}

impl From<Option<String>> for RoutePrefixAttribute {
    fn from(prefix: Option<String>) -> Self {
        RoutePrefixAttribute { prefix }
    }
}

impl RoutePrefix for RoutePrefixAttribute {
    fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }
}

impl RouteAnnotation for RoutePrefixAttribute {
    fn as_route_prefix(&self) -> Option<&dyn RoutePrefix> {
        Some(self)
    }
}
