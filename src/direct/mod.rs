//! # Direct Route Discovery
//!
//! Turns the route declarations on a controller and its actions into compiled
//! [`RouteEntry`](crate::route::RouteEntry)s.
//!
//! ## Data Flow
//!
//! ```text
//! ControllerDescriptor + [ActionDescriptor]
//!     → factory.rs   (declarations → ordered RouteFactory list, legacy adapted)
//!     → prefix.rs    (controller → at most one validated prefix)
//!     → entry.rs     (prefix + factory + targets → validated RouteEntry)
//!     → provider.rs  (per-action routes, then controller fallback)
//!     → Vec<RouteEntry>
//! ```
//!
//! ## Precedence
//!
//! - An action with its own route declarations is routed only by them and
//!   never joins the controller-level fallback route.
//! - Declarations on an inherited, non-overridden action are ignored; the
//!   action falls back to the controller routes like an undeclared one.
//! - Actions not backed by a concrete method are skipped entirely.
//!
//! Every step is a pure function of its inputs; the first configuration error
//! aborts discovery for the controller.

mod context;
mod entry;
mod factory;
mod prefix;
mod provider;

pub use context::DirectRouteFactoryContext;
pub use entry::{create_route_entries, create_route_entry};
pub use factory::{
    action_route_factories, controller_route_factories, route_factories, DirectRouteFactory,
    RouteFactory, RouteInfoDirectRouteFactory, RouteInfoProvider,
};
pub use prefix::{route_prefix, RoutePrefix, PATH_SEPARATOR};
pub use provider::{DefaultDirectRouteProvider, DirectRouteProvider};
