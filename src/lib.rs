//! # directroute
//!
//! **directroute** discovers the *direct routes* of a controller: routes declared
//! right on the controller or its actions, as opposed to routes matched by
//! convention from a global template.
//!
//! ## Overview
//!
//! Given a controller descriptor and its actions, discovery decides which route
//! declarations apply, combines each with the controller's route prefix and
//! compiles it into a [`RouteEntry`]. An action with its own declarations gets
//! one entry per declaration targeting only that action. Every remaining action
//! shares the controller-level declarations instead.
//!
//! ## Architecture
//!
//! - **[`descriptor`]** - Controller and action descriptors with their annotations
//! - **[`annotation`]** - Route, route-info and prefix declarations
//! - **[`direct`]** - Factory resolution, prefix resolution and the discovery algorithm
//! - **[`route`]** - Template parsing, inline constraints and the compiled route types
//! - **[`table`]** - Application-wide route table with attribute-routed flags
//! - **[`manifest`]** - YAML/JSON/TOML route manifests turned into descriptors
//! - **[`validator`]** - Semantic checks on manifests
//! - **[`logging`]** - `tracing-subscriber` setup driven by `DIRECTROUTE_LOG_*`
//! - **[`cli`]** - The `directroute` command-line tool
//!
//! ### Discovery Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Table as RouteTable::build
//!     participant Provider as DefaultDirectRouteProvider
//!     participant Factories as action/controller_route_factories
//!     participant Prefix as route_prefix
//!     participant Entry as create_route_entries
//!
//!     Table->>Provider: direct_routes(controller, actions, resolver)
//!     loop every action with a method
//!         Provider->>Factories: action_route_factories(action)
//!         Factories-->>Provider: native then legacy factories
//!         Provider->>Prefix: route_prefix(controller)
//!         Provider->>Entry: targets = [action]
//!     end
//!     Provider->>Factories: controller_route_factories(controller)
//!     Provider->>Entry: targets = actions without routes
//!     Entry-->>Table: Vec<RouteEntry>
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use directroute::{
//!     ActionDescriptor, ControllerDescriptor, DefaultDirectRouteProvider,
//!     DefaultInlineConstraintResolver, DirectRouteProvider, RouteAttribute,
//!     RoutePrefixAttribute,
//! };
//!
//! let widgets = Arc::new(
//!     ControllerDescriptor::new("Widgets", "shop::WidgetsController")
//!         .with_annotation(RoutePrefixAttribute::new("widgets"))
//!         .with_annotation(RouteAttribute::new("")),
//! );
//! let get = Arc::new(
//!     ActionDescriptor::new("Get", &widgets)
//!         .with_annotation(RouteAttribute::new("{id:int}").with_name("GetWidget")),
//! );
//! let list = Arc::new(ActionDescriptor::new("List", &widgets));
//!
//! let entries = DefaultDirectRouteProvider
//!     .direct_routes(&widgets, &[get, list], &DefaultInlineConstraintResolver)
//!     .unwrap();
//!
//! assert_eq!(entries[0].route().template(), "widgets/{id:int}");
//! assert_eq!(entries[1].route().template(), "widgets");
//! assert!(!entries[1].route().target_is_action());
//! ```
//!
//! ## Logging
//!
//! The library emits `tracing` events only. Binaries install a subscriber with
//! [`logging::init_logging`].

pub mod annotation;
pub mod cli;
pub mod descriptor;
pub mod direct;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod route;
pub mod table;
pub mod validator;

pub use annotation::{
    DirectRouteAttribute, RouteAnnotation, RouteAttribute, RouteInfoAttribute,
    RoutePrefixAttribute,
};
pub use descriptor::{ActionDescriptor, ControllerDescriptor, MethodInfo};
pub use direct::{
    DefaultDirectRouteProvider, DirectRouteFactory, DirectRouteFactoryContext,
    DirectRouteProvider, RouteInfoProvider, RoutePrefix,
};
pub use error::DirectRouteError;
pub use manifest::{load_manifest, RouteManifest};
pub use route::{
    DefaultInlineConstraintResolver, DirectRouteBuilder, InlineConstraintResolver, Route,
    RouteEntry, RouteSummary,
};
pub use table::{ControllerRegistration, RouteTable};
