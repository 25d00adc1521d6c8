//! Koperasi Navigation Kernel Library
//!
//! Resolves the effective role of a session and derives the navigation
//! menu and route access it grants. The `koperasi-nav` binary wraps this
//! library for scripting and inspection.

pub mod cli;
pub mod config;
pub mod error;
pub mod menu;
pub mod models;
pub mod navigation;
pub mod roles;

pub use config::{Config, OutputFormat};
pub use error::{CatalogError, CatalogResult};
pub use menu::{MenuCatalog, MenuEntry, MenuPolicy, filter_menu};
pub use models::{Role, SessionUser};
pub use navigation::NavigationView;
pub use roles::{RoleSet, first_match, resolve_role};
