//! # Route Manifest
//!
//! A declarative description of controllers, actions and their route
//! declarations, loaded from YAML, JSON or TOML and turned into descriptors.
//!
//! ```yaml
//! controllers:
//!   - name: Widgets
//!     type: shop::WidgetsController
//!     prefix: widgets
//!     routes:                    # controller-level fallback
//!       - template: ""
//!     actions:
//!       - name: Get
//!         routes:
//!           - template: "{id:int}"
//!             name: GetWidget
//!       - name: List             # served by the fallback
//!       - name: Ping
//!         declared_on: shop::BaseController   # inherited: declarations ignored
//!         routes:
//!           - template: ping
//!             style: legacy      # attribute (default) | factory | legacy
//! ```

mod load;
mod types;

pub use load::{load_manifest, parse_manifest, ManifestFormat};
pub use types::{
    ActionManifest, ControllerManifest, DeclarationStyle, RouteDeclaration, RouteManifest,
};
