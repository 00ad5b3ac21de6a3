use std::collections::BTreeMap;
use std::sync::Arc;

use super::constraint::{InlineConstraint, InlineConstraintResolver};
use super::template::{combine_template, parse_parameters};
use super::{Route, RouteEntry};
use crate::descriptor::ActionDescriptor;
use crate::error::DirectRouteError;

/// Builds one [`RouteEntry`] for a factory.
///
/// Obtained from [`DirectRouteFactoryContext::create_builder`]; carries the
/// prefix, target actions and constraint resolver of that context.
///
/// [`DirectRouteFactoryContext::create_builder`]: crate::direct::DirectRouteFactoryContext::create_builder
pub struct DirectRouteBuilder<'a> {
    template: String,
    name: Option<String>,
    order: i32,
    prefix: Option<&'a str>,
    actions: &'a [Arc<ActionDescriptor>],
    constraint_resolver: &'a dyn InlineConstraintResolver,
    target_is_action: bool,
}

impl<'a> DirectRouteBuilder<'a> {
    pub(crate) fn new(
        template: &str,
        prefix: Option<&'a str>,
        actions: &'a [Arc<ActionDescriptor>],
        constraint_resolver: &'a dyn InlineConstraintResolver,
        target_is_action: bool,
    ) -> Self {
        DirectRouteBuilder {
            template: template.to_owned(),
            name: None,
            order: 0,
            prefix,
            actions,
            constraint_resolver,
            target_is_action,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    #[must_use]
    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    /// The template as declared.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Combine the template with the prefix, parse its parameters and resolve
    /// their inline constraints.
    pub fn build(self) -> Result<RouteEntry, DirectRouteError> {
        let full = combine_template(self.prefix, &self.template)?;
        let parameters = parse_parameters(&full)?;

        let mut constraints = BTreeMap::new();
        for parameter in &parameters {
            if parameter.inline_constraints.is_empty() {
                continue;
            }
            let resolved = parameter
                .inline_constraints
                .iter()
                .map(|text| {
                    self.constraint_resolver
                        .resolve(text)
                        .map(|c| InlineConstraint::new(text.as_str(), c))
                        .ok_or_else(|| DirectRouteError::UnresolvedConstraint {
                            template: full.clone(),
                            parameter: parameter.name.clone(),
                            constraint: text.clone(),
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            constraints.insert(parameter.name.clone(), resolved);
        }

        let route = Route {
            template: full,
            prefix: self.prefix.map(str::to_owned),
            parameters,
            constraints,
            target_actions: self.actions.to_vec(),
            target_is_action: self.target_is_action,
            order: self.order,
            handler: None,
        };
        Ok(RouteEntry::new(self.name, self.template, route))
    }
}
