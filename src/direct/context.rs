//! The build context handed to every route factory.

use std::fmt;
use std::sync::Arc;

use crate::descriptor::ActionDescriptor;
use crate::route::{DirectRouteBuilder, InlineConstraintResolver};

/// Everything a [`DirectRouteFactory`](super::DirectRouteFactory) needs to
/// build one route.
///
/// Built fresh for every factory invocation and never modified.
#[derive(Clone, Copy)]
pub struct DirectRouteFactoryContext<'a> {
    prefix: Option<&'a str>,
    actions: &'a [Arc<ActionDescriptor>],
    constraint_resolver: &'a dyn InlineConstraintResolver,
    target_is_action: bool,
}

impl<'a> DirectRouteFactoryContext<'a> {
    pub fn new(
        prefix: Option<&'a str>,
        actions: &'a [Arc<ActionDescriptor>],
        constraint_resolver: &'a dyn InlineConstraintResolver,
        target_is_action: bool,
    ) -> Self {
        DirectRouteFactoryContext {
            prefix,
            actions,
            constraint_resolver,
            target_is_action,
        }
    }

    /// The controller prefix, if one is declared.
    #[must_use]
    pub fn prefix(&self) -> Option<&'a str> {
        self.prefix
    }

    /// The actions the route will target.
    #[must_use]
    pub fn actions(&self) -> &'a [Arc<ActionDescriptor>] {
        self.actions
    }

    #[must_use]
    pub fn constraint_resolver(&self) -> &'a dyn InlineConstraintResolver {
        self.constraint_resolver
    }

    /// True when the route targets exactly one action; false when it targets
    /// the fallback set of a controller.
    #[must_use]
    pub fn target_is_action(&self) -> bool {
        self.target_is_action
    }

    /// A builder for `template` bound to this context.
    #[must_use]
    pub fn create_builder(&self, template: &str) -> DirectRouteBuilder<'a> {
        DirectRouteBuilder::new(
            template,
            self.prefix,
            self.actions,
            self.constraint_resolver,
            self.target_is_action,
        )
    }
}

impl fmt::Debug for DirectRouteFactoryContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectRouteFactoryContext")
            .field("prefix", &self.prefix)
            .field(
                "actions",
                &self.actions.iter().map(|a| a.name()).collect::<Vec<_>>(),
            )
            .field("target_is_action", &self.target_is_action)
            .finish_non_exhaustive()
    }
}
