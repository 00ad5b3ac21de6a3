//! # Descriptor Module
//!
//! Metadata for controllers and their actions, as supplied by whatever
//! registers them (the manifest loader, or application code directly).
//!
//! Route declarations are registered explicitly: each descriptor carries an
//! ordered list of [`RouteAnnotation`]s attached when it is constructed.
//! Discovery only reads that list; it never inspects types.
//!
//! The single piece of mutable state is the attribute-routed flag, written once
//! by the route table after discovery and read by convention routing to decide
//! whether a member should also get a convention route.

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use crate::annotation::{has_route_declarations, RouteAnnotation};

const FLAG_UNSET: u8 = 0;
const FLAG_FALSE: u8 = 1;
const FLAG_TRUE: u8 = 2;

/// Tri-state "is attribute routed" flag.
///
/// Unset until route discovery (or the application) records a value.
#[derive(Default)]
pub struct AttributeRoutedFlag(AtomicU8);

impl AttributeRoutedFlag {
    /// The stored value, or `None` if it was never set.
    #[must_use]
    pub fn get(&self) -> Option<bool> {
        match self.0.load(Ordering::Acquire) {
            FLAG_FALSE => Some(false),
            FLAG_TRUE => Some(true),
            _ => None,
        }
    }

    pub fn set(&self, value: bool) {
        let raw = if value { FLAG_TRUE } else { FLAG_FALSE };
        self.0.store(raw, Ordering::Release);
    }
}

impl Clone for AttributeRoutedFlag {
    fn clone(&self) -> Self {
        AttributeRoutedFlag(AtomicU8::new(self.0.load(Ordering::Acquire)))
    }
}

impl fmt::Debug for AttributeRoutedFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => write!(f, "{value}"),
            None => f.write_str("unset"),
        }
    }
}

/// One controller type.
#[derive(Debug, Clone)]
pub struct ControllerDescriptor {
    name: String,
    controller_type: String,
    annotations: Vec<Arc<dyn RouteAnnotation>>,
    attribute_routed: AttributeRoutedFlag,
}

impl ControllerDescriptor {
    /// Create a descriptor from a display name (e.g. `Widgets`) and the full
    /// controller type name (e.g. `shop::WidgetsController`).
    pub fn new(name: impl Into<String>, controller_type: impl Into<String>) -> Self {
        ControllerDescriptor {
            name: name.into(),
            controller_type: controller_type.into(),
            annotations: Vec::new(),
            attribute_routed: AttributeRoutedFlag::default(),
        }
    }

    /// Attach a declaration. Declaration order is preserved.
    #[must_use]
    pub fn with_annotation(mut self, annotation: impl RouteAnnotation + 'static) -> Self {
        self.annotations.push(Arc::new(annotation));
        self
    }

    /// Attach an already shared declaration.
    #[must_use]
    pub fn with_shared_annotation(mut self, annotation: Arc<dyn RouteAnnotation>) -> Self {
        self.annotations.push(annotation);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn controller_type(&self) -> &str {
        &self.controller_type
    }

    /// Declarations made directly on this controller (never inherited ones).
    #[must_use]
    pub fn annotations(&self) -> &[Arc<dyn RouteAnnotation>] {
        &self.annotations
    }

    /// Whether this controller is reached through direct routes.
    ///
    /// Uses the stored flag when one was recorded; otherwise falls back to the
    /// presence of route declarations, so the answer stays right even when
    /// discovery never ran.
    #[must_use]
    pub fn is_attribute_routed(&self) -> bool {
        self.attribute_routed
            .get()
            .unwrap_or_else(|| has_route_declarations(&self.annotations))
    }

    /// The stored flag only, `None` until something records it.
    #[must_use]
    pub fn attribute_routed_flag(&self) -> Option<bool> {
        self.attribute_routed.get()
    }

    pub fn set_attribute_routed(&self, value: bool) {
        self.attribute_routed.set(value);
    }
}

/// The concrete method backing an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodInfo {
    pub name: String,
    /// Full name of the type that declares the method. Differs from the
    /// controller type when the action is inherited and not overridden.
    pub declaring_type: String,
}

/// One invocable action on a controller.
#[derive(Debug, Clone)]
pub struct ActionDescriptor {
    name: String,
    controller: Arc<ControllerDescriptor>,
    method: Option<MethodInfo>,
    annotations: Vec<Arc<dyn RouteAnnotation>>,
    attribute_routed: AttributeRoutedFlag,
}

impl ActionDescriptor {
    /// An action whose method is declared on the controller type itself.
    pub fn new(name: impl Into<String>, controller: &Arc<ControllerDescriptor>) -> Self {
        let name = name.into();
        let method = MethodInfo {
            name: name.clone(),
            declaring_type: controller.controller_type().to_owned(),
        };
        Self::build(name, controller, Some(method))
    }

    /// An action inherited from `declaring_type` and not overridden.
    pub fn inherited(
        name: impl Into<String>,
        controller: &Arc<ControllerDescriptor>,
        declaring_type: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let method = MethodInfo {
            name: name.clone(),
            declaring_type: declaring_type.into(),
        };
        Self::build(name, controller, Some(method))
    }

    /// An action not backed by a concrete method. Discovery skips these.
    pub fn without_method(name: impl Into<String>, controller: &Arc<ControllerDescriptor>) -> Self {
        Self::build(name.into(), controller, None)
    }

    fn build(
        name: String,
        controller: &Arc<ControllerDescriptor>,
        method: Option<MethodInfo>,
    ) -> Self {
        ActionDescriptor {
            name,
            controller: Arc::clone(controller),
            method,
            annotations: Vec::new(),
            attribute_routed: AttributeRoutedFlag::default(),
        }
    }

    /// Attach a declaration. Declaration order is preserved.
    #[must_use]
    pub fn with_annotation(mut self, annotation: impl RouteAnnotation + 'static) -> Self {
        self.annotations.push(Arc::new(annotation));
        self
    }

    /// Attach an already shared declaration.
    #[must_use]
    pub fn with_shared_annotation(mut self, annotation: Arc<dyn RouteAnnotation>) -> Self {
        self.annotations.push(annotation);
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn controller_descriptor(&self) -> &Arc<ControllerDescriptor> {
        &self.controller
    }

    #[must_use]
    pub fn method(&self) -> Option<&MethodInfo> {
        self.method.as_ref()
    }

    /// Declarations made directly on this action's method.
    #[must_use]
    pub fn annotations(&self) -> &[Arc<dyn RouteAnnotation>] {
        &self.annotations
    }

    /// Whether this action is reached through direct routes.
    ///
    /// Same fallback as [`ControllerDescriptor::is_attribute_routed`].
    #[must_use]
    pub fn is_attribute_routed(&self) -> bool {
        self.attribute_routed
            .get()
            .unwrap_or_else(|| has_route_declarations(&self.annotations))
    }

    /// The stored flag only, `None` until something records it.
    #[must_use]
    pub fn attribute_routed_flag(&self) -> Option<bool> {
        self.attribute_routed.get()
    }

    pub fn set_attribute_routed(&self, value: bool) {
        self.attribute_routed.set(value);
    }
}
