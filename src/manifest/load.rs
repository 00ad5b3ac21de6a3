use anyhow::{bail, Context};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

use super::types::{ControllerManifest, DeclarationStyle, RouteDeclaration, RouteManifest};
use crate::annotation::{
    DirectRouteAttribute, RouteAnnotation, RouteAttribute, RouteInfoAttribute,
    RoutePrefixAttribute,
};
use crate::descriptor::{ActionDescriptor, ControllerDescriptor};
use crate::table::ControllerRegistration;
use crate::validator::{fail_if_issues, validate_manifest};

/// Manifest serialization format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    Yaml,
    Json,
    Toml,
}

impl ManifestFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Ok(ManifestFormat::Yaml),
            Some("json") => Ok(ManifestFormat::Json),
            Some("toml") => Ok(ManifestFormat::Toml),
            other => bail!(
                "unsupported manifest extension {:?} for {} (expected yaml, yml, json or toml)",
                other.unwrap_or(""),
                path.display()
            ),
        }
    }
}

/// Parse a manifest without validating it.
pub fn parse_manifest(content: &str, format: ManifestFormat) -> anyhow::Result<RouteManifest> {
    let manifest = match format {
        ManifestFormat::Yaml => serde_yaml::from_str(content)?,
        ManifestFormat::Json => serde_json::from_str(content)?,
        ManifestFormat::Toml => toml::from_str(content)?,
    };
    Ok(manifest)
}

/// Read, parse and validate a manifest file.
pub fn load_manifest(path: &Path) -> anyhow::Result<RouteManifest> {
    let format = ManifestFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read route manifest {}", path.display()))?;
    let manifest = parse_manifest(&content, format)
        .with_context(|| format!("failed to parse route manifest {}", path.display()))?;

    fail_if_issues(validate_manifest(&manifest))?;
    debug!(
        path = %path.display(),
        controllers = manifest.controllers.len(),
        "Route manifest loaded"
    );
    Ok(manifest)
}

impl RouteManifest {
    /// Build descriptors for every controller in the manifest.
    #[must_use]
    pub fn registrations(&self) -> Vec<ControllerRegistration> {
        self.controllers.iter().map(controller_registration).collect()
    }
}

fn controller_registration(manifest: &ControllerManifest) -> ControllerRegistration {
    let mut controller = ControllerDescriptor::new(&manifest.name, manifest.resolved_type());
    for prefix in manifest.prefix_declarations() {
        controller = controller.with_annotation(RoutePrefixAttribute::from(prefix));
    }
    for route in &manifest.routes {
        controller = controller.with_shared_annotation(annotation_for(route));
    }
    let controller = Arc::new(controller);

    let actions = manifest
        .actions
        .iter()
        .map(|action| {
            let descriptor = if !action.reflected {
                ActionDescriptor::without_method(&action.name, &controller)
            } else if let Some(declaring_type) = &action.declared_on {
                ActionDescriptor::inherited(&action.name, &controller, declaring_type)
            } else {
                ActionDescriptor::new(&action.name, &controller)
            };
            let descriptor = action
                .routes
                .iter()
                .fold(descriptor, |d, route| d.with_shared_annotation(annotation_for(route)));
            Arc::new(descriptor)
        })
        .collect();

    ControllerRegistration::new(controller, actions)
}

fn annotation_for(route: &RouteDeclaration) -> Arc<dyn RouteAnnotation> {
    match route.style {
        DeclarationStyle::Attribute => {
            let mut attr = RouteAttribute::new(&route.template).with_order(route.order);
            if let Some(name) = &route.name {
                attr = attr.with_name(name);
            }
            Arc::new(attr)
        }
        DeclarationStyle::Factory => {
            let mut attr = DirectRouteAttribute::new(&route.template).with_order(route.order);
            if let Some(name) = &route.name {
                attr = attr.with_name(name);
            }
            Arc::new(attr)
        }
        DeclarationStyle::Legacy => {
            let mut attr = RouteInfoAttribute::new(&route.template).with_order(route.order);
            if let Some(name) = &route.name {
                attr = attr.with_name(name);
            }
            Arc::new(attr)
        }
    }
}
