//! # Route Module
//!
//! The compiled output of discovery.
//!
//! A [`RouteEntry`] pairs the template as it was declared with the [`Route`]
//! built from it. The route owns the full template (prefix applied), the
//! parsed parameters, the constraints resolved for them and the actions it
//! dispatches to.
//!
//! Matching inbound requests against a route is the dispatch engine's job; this
//! module only describes what was compiled.

mod builder;
mod constraint;
mod template;

pub use builder::DirectRouteBuilder;
pub use constraint::{
    BuiltinConstraint, DefaultInlineConstraintResolver, InlineConstraint,
    InlineConstraintResolver, RouteConstraint,
};
pub use template::{combine_template, parse_parameters, TemplateParameter};

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::descriptor::ActionDescriptor;

/// A request handler attached directly to a route.
///
/// Direct routes always dispatch through the action pipeline, so discovery
/// rejects any route carrying one. The trait exists so that a misbehaving
/// factory can be detected and named.
pub trait RequestHandler: fmt::Debug + Send + Sync {
    fn name(&self) -> &str;
}

/// A compiled route.
#[derive(Debug, Clone)]
pub struct Route {
    template: String,
    prefix: Option<String>,
    parameters: Vec<TemplateParameter>,
    constraints: BTreeMap<String, Vec<InlineConstraint>>,
    target_actions: Vec<Arc<ActionDescriptor>>,
    target_is_action: bool,
    order: i32,
    handler: Option<Arc<dyn RequestHandler>>,
}

impl Route {
    /// A route with no parameters, constraints or prefix.
    ///
    /// Factories normally go through [`DirectRouteBuilder`]; this constructor is
    /// for factories that assemble routes themselves.
    pub fn new(template: impl Into<String>, target_actions: Vec<Arc<ActionDescriptor>>) -> Self {
        Route {
            template: template.into(),
            prefix: None,
            parameters: Vec::new(),
            constraints: BTreeMap::new(),
            target_actions,
            target_is_action: false,
            order: 0,
            handler: None,
        }
    }

    #[must_use]
    pub fn with_handler(mut self, handler: Arc<dyn RequestHandler>) -> Self {
        self.handler = Some(handler);
        self
    }

    #[must_use]
    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    /// Full template, prefix included.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The controller prefix that was in effect when the route was built.
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    #[must_use]
    pub fn parameters(&self) -> &[TemplateParameter] {
        &self.parameters
    }

    /// Resolved inline constraints keyed by parameter name.
    #[must_use]
    pub fn constraints(&self) -> &BTreeMap<String, Vec<InlineConstraint>> {
        &self.constraints
    }

    #[must_use]
    pub fn target_actions(&self) -> &[Arc<ActionDescriptor>] {
        &self.target_actions
    }

    /// True when the route was declared on a single action rather than on the
    /// controller.
    #[must_use]
    pub fn target_is_action(&self) -> bool {
        self.target_is_action
    }

    #[must_use]
    pub fn order(&self) -> i32 {
        self.order
    }

    #[must_use]
    pub fn handler(&self) -> Option<&Arc<dyn RequestHandler>> {
        self.handler.as_ref()
    }
}

/// A route together with the template it was declared with.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    name: Option<String>,
    template: String,
    route: Route,
}

impl RouteEntry {
    pub fn new(name: Option<String>, template: impl Into<String>, route: Route) -> Self {
        RouteEntry {
            name,
            template: template.into(),
            route,
        }
    }

    /// Record whether the entry targets a single action. Set from the build
    /// context, whatever the factory put on the route.
    pub(crate) fn set_target_is_action(&mut self, target_is_action: bool) {
        self.route.target_is_action = target_is_action;
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The template as declared, before the prefix is applied.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    #[must_use]
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// A plain-data view of this entry, used for output and comparison.
    #[must_use]
    pub fn summary(&self) -> RouteSummary {
        let route = &self.route;
        RouteSummary {
            name: self.name.clone(),
            template: self.template.clone(),
            route_template: route.template.clone(),
            prefix: route.prefix.clone(),
            order: route.order,
            target_is_action: route.target_is_action,
            controller: route
                .target_actions
                .first()
                .map(|a| a.controller_descriptor().name().to_owned())
                .unwrap_or_default(),
            actions: route
                .target_actions
                .iter()
                .map(|a| a.name().to_owned())
                .collect(),
            constraints: route
                .constraints
                .iter()
                .map(|(param, list)| {
                    (
                        param.clone(),
                        list.iter().map(|c| c.text().to_owned()).collect(),
                    )
                })
                .collect(),
        }
    }
}

/// Serializable description of a [`RouteEntry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub template: String,
    pub route_template: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    pub order: i32,
    pub target_is_action: bool,
    pub controller: String,
    pub actions: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub constraints: BTreeMap<String, Vec<String>>,
}
