use std::collections::HashSet;
use tracing::error;

use crate::manifest::RouteManifest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub location: String,
    pub kind: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(
        location: impl Into<String>,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ValidationIssue {
            location: location.into(),
            kind: kind.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.kind, self.location, self.message)
    }
}

/// Semantic checks serde cannot express.
#[must_use]
pub fn validate_manifest(manifest: &RouteManifest) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut controller_types = HashSet::new();

    for (i, controller) in manifest.controllers.iter().enumerate() {
        let location = format!("controllers[{i}]");

        if controller.name.trim().is_empty() {
            issues.push(ValidationIssue::new(
                &location,
                "EmptyName",
                "controller name must not be empty",
            ));
        }
        if !controller_types.insert(controller.resolved_type()) {
            issues.push(ValidationIssue::new(
                &location,
                "DuplicateController",
                format!("controller type '{}' is declared more than once", controller.resolved_type()),
            ));
        }

        let mut action_names = HashSet::new();
        for (j, action) in controller.actions.iter().enumerate() {
            let location = format!("{location}.actions[{j}]");
            if action.name.trim().is_empty() {
                issues.push(ValidationIssue::new(
                    &location,
                    "EmptyName",
                    "action name must not be empty",
                ));
            } else if !action_names.insert(action.name.as_str()) {
                issues.push(ValidationIssue::new(
                    &location,
                    "DuplicateAction",
                    format!(
                        "action '{}' is declared more than once on '{}'",
                        action.name,
                        controller.resolved_type()
                    ),
                ));
            }
        }
    }

    issues
}

pub fn print_issues(issues: &[ValidationIssue]) {
    error!(count = issues.len(), "Route manifest validation failed");
    for issue in issues {
        error!(
            kind = %issue.kind,
            location = %issue.location,
            "{}",
            issue.message
        );
    }
}

/// Log every issue and fail with a combined error when there are any.
pub fn fail_if_issues(issues: Vec<ValidationIssue>) -> anyhow::Result<()> {
    if issues.is_empty() {
        return Ok(());
    }
    print_issues(&issues);
    let details: Vec<String> = issues.iter().map(ToString::to_string).collect();
    anyhow::bail!(
        "route manifest validation failed with {} issue(s):\n{}",
        issues.len(),
        details.join("\n")
    )
}
