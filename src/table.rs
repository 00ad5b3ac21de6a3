//! # Route Table Module
//!
//! Aggregates the direct routes of every registered controller into one
//! table, the way a router is assembled at startup.
//!
//! While building, the table records the attribute-routed flag on every
//! action a route targets, and on every controller whose fallback routes were
//! used, so convention routing can skip them afterwards.
//!
//! ## Ordering
//!
//! Entries are stably sorted by [`Route::order`](crate::route::Route::order);
//! within one order value, discovery order is kept.

use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;

use crate::descriptor::{ActionDescriptor, ControllerDescriptor};
use crate::direct::DirectRouteProvider;
use crate::error::DirectRouteError;
use crate::route::{InlineConstraintResolver, RouteEntry, RouteSummary};

/// A controller and the actions it exposes.
#[derive(Debug, Clone)]
pub struct ControllerRegistration {
    pub controller: Arc<ControllerDescriptor>,
    pub actions: Vec<Arc<ActionDescriptor>>,
}

impl ControllerRegistration {
    pub fn new(controller: Arc<ControllerDescriptor>, actions: Vec<Arc<ActionDescriptor>>) -> Self {
        ControllerRegistration {
            controller,
            actions,
        }
    }
}

/// The direct routes of a whole application.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Run discovery for every registration and collect the results.
    ///
    /// Fails on the first configuration error, or when two entries share a
    /// route name.
    pub fn build(
        registrations: &[ControllerRegistration],
        provider: &dyn DirectRouteProvider,
        constraint_resolver: &dyn InlineConstraintResolver,
    ) -> Result<Self, DirectRouteError> {
        let mut entries = Vec::new();
        let mut names: HashSet<String> = HashSet::new();
        let mut fallback_controllers: Vec<&Arc<ControllerDescriptor>> = Vec::new();

        for registration in registrations {
            let controller = &registration.controller;
            let discovered =
                provider.direct_routes(controller, &registration.actions, constraint_resolver)?;

            for entry in &discovered {
                if let Some(name) = entry.name() {
                    if !names.insert(name.to_owned()) {
                        return Err(DirectRouteError::DuplicateRouteName {
                            name: name.to_owned(),
                            controller_type: controller.controller_type().to_owned(),
                        });
                    }
                }
            }
            if discovered.iter().any(|e| !e.route().target_is_action()) {
                fallback_controllers.push(controller);
            }

            entries.extend(discovered);
        }

        // Flags are only recorded once the whole table is known to be valid.
        for entry in &entries {
            for action in entry.route().target_actions() {
                action.set_attribute_routed(true);
            }
        }
        for controller in fallback_controllers {
            controller.set_attribute_routed(true);
        }

        entries.sort_by_key(|e| e.route().order());

        info!(
            controllers = registrations.len(),
            routes_count = entries.len(),
            "Direct route table built"
        );
        Ok(RouteTable { entries })
    }

    #[must_use]
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by route name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|e| e.name() == Some(name))
    }

    #[must_use]
    pub fn summaries(&self) -> Vec<RouteSummary> {
        self.entries.iter().map(RouteEntry::summary).collect()
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a RouteEntry;
    type IntoIter = std::slice::Iter<'a, RouteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
