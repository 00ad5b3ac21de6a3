use serde::{Deserialize, Serialize};

/// Root of a route manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RouteManifest {
    #[serde(default)]
    pub controllers: Vec<ControllerManifest>,
}

/// One controller and its declarations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ControllerManifest {
    /// Display name, e.g. `Widgets`.
    pub name: String,
    /// Full type name; defaults to `name`.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub controller_type: Option<String>,
    /// Shorthand for a single prefix declaration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Prefix declarations; a `null` entry declares a prefix without a value.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prefixes: Vec<Option<String>>,
    /// Controller-level route declarations, used as the fallback.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<RouteDeclaration>,
    #[serde(default)]
    pub actions: Vec<ActionManifest>,
}

impl ControllerManifest {
    #[must_use]
    pub fn resolved_type(&self) -> &str {
        self.controller_type.as_deref().unwrap_or(&self.name)
    }

    /// `prefix` followed by `prefixes`, as declared.
    #[must_use]
    pub fn prefix_declarations(&self) -> Vec<Option<String>> {
        self.prefix
            .iter()
            .cloned()
            .map(Some)
            .chain(self.prefixes.iter().cloned())
            .collect()
    }
}

/// One action on a controller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ActionManifest {
    pub name: String,
    /// Type declaring the action's method; defaults to the controller type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared_on: Option<String>,
    /// False for actions with no concrete backing method.
    #[serde(default = "default_reflected")]
    pub reflected: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<RouteDeclaration>,
}

fn default_reflected() -> bool {
    true
}

/// A single route declaration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RouteDeclaration {
    pub template: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub style: DeclarationStyle,
}

/// Which capabilities a declaration exposes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationStyle {
    /// Both the factory and the legacy capability (the common case).
    #[default]
    Attribute,
    /// Factory capability only.
    Factory,
    /// Legacy route-info capability only.
    Legacy,
}
