//! The direct route provider: per-action routes, then the controller fallback.

use std::sync::Arc;
use tracing::{debug, trace};

use super::{
    action_route_factories, controller_route_factories, create_route_entries, route_prefix,
    RouteFactory,
};
use crate::descriptor::{ActionDescriptor, ControllerDescriptor};
use crate::error::DirectRouteError;
use crate::route::{InlineConstraintResolver, RouteEntry};

/// Produces the direct routes of one controller.
pub trait DirectRouteProvider: Send + Sync {
    /// The compiled direct routes for `controller` and its `actions`.
    ///
    /// Entries declared on individual actions come first (action order, then
    /// factory order), followed by the controller-level fallback entries.
    fn direct_routes(
        &self,
        controller: &ControllerDescriptor,
        actions: &[Arc<ActionDescriptor>],
        constraint_resolver: &dyn InlineConstraintResolver,
    ) -> Result<Vec<RouteEntry>, DirectRouteError>;
}

/// The standard discovery rules.
///
/// 1. Actions not backed by a method are skipped.
/// 2. Route declarations on a method declared by another type (inherited and
///    not overridden) are ignored.
/// 3. An action with declarations gets one entry per declaration, targeting
///    only itself.
/// 4. Remaining actions share the controller-level declarations, one entry per
///    declaration targeting all of them.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultDirectRouteProvider;

impl DefaultDirectRouteProvider {
    /// Entries for one action, built from `factories` with its controller's prefix.
    pub fn action_direct_routes(
        &self,
        action: &Arc<ActionDescriptor>,
        factories: &[RouteFactory<'_>],
        constraint_resolver: &dyn InlineConstraintResolver,
    ) -> Result<Vec<RouteEntry>, DirectRouteError> {
        let prefix = route_prefix(action.controller_descriptor())?;
        create_route_entries(
            prefix,
            factories,
            std::slice::from_ref(action),
            constraint_resolver,
            true,
        )
    }

    /// Controller-level entries targeting every action in `actions`.
    pub fn controller_direct_routes(
        &self,
        controller: &ControllerDescriptor,
        actions: &[Arc<ActionDescriptor>],
        factories: &[RouteFactory<'_>],
        constraint_resolver: &dyn InlineConstraintResolver,
    ) -> Result<Vec<RouteEntry>, DirectRouteError> {
        let prefix = route_prefix(controller)?;
        create_route_entries(prefix, factories, actions, constraint_resolver, false)
    }
}

impl DirectRouteProvider for DefaultDirectRouteProvider {
    fn direct_routes(
        &self,
        controller: &ControllerDescriptor,
        actions: &[Arc<ActionDescriptor>],
        constraint_resolver: &dyn InlineConstraintResolver,
    ) -> Result<Vec<RouteEntry>, DirectRouteError> {
        let mut entries = Vec::new();
        let mut actions_without_routes: Vec<Arc<ActionDescriptor>> = Vec::new();

        for action in actions {
            let Some(method) = action.method() else {
                trace!(
                    controller = controller.name(),
                    action = action.name(),
                    "Skipping action without a backing method"
                );
                continue;
            };

            let mut factories = action_route_factories(action);

            if method.declaring_type != controller.controller_type() {
                if !factories.is_empty() {
                    debug!(
                        controller = controller.name(),
                        action = action.name(),
                        declaring_type = %method.declaring_type,
                        ignored = factories.len(),
                        "Ignoring route declarations on inherited action"
                    );
                }
                factories.clear();
            }

            if factories.is_empty() {
                actions_without_routes.push(Arc::clone(action));
            } else {
                entries.extend(self.action_direct_routes(action, &factories, constraint_resolver)?);
            }
        }

        if !actions_without_routes.is_empty() {
            let factories = controller_route_factories(controller);
            if !factories.is_empty() {
                entries.extend(self.controller_direct_routes(
                    controller,
                    &actions_without_routes,
                    &factories,
                    constraint_resolver,
                )?);
            }
        }

        debug!(
            controller = controller.name(),
            routes_count = entries.len(),
            fallback_actions = actions_without_routes.len(),
            "Direct routes discovered"
        );
        Ok(entries)
    }
}
