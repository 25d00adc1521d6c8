//! Per-session navigation.
//!
//! Ties role resolution, menu filtering and route access together. A view
//! is derived fresh for every session change and never cached.

use serde::Serialize;
use tracing::debug;

use crate::menu::{self, MenuCatalog, MenuEntry};
use crate::models::{Role, SessionUser};
use crate::roles::resolve_role;

/// Effective role and visible menu of one session.
#[derive(Debug, Clone, Serialize)]
pub struct NavigationView {
    pub role: Role,
    pub menu: Vec<MenuEntry>,
    #[serde(skip)]
    catalog: MenuCatalog,
}

impl NavigationView {
    /// Derive the view of a possibly-absent session.
    pub fn derive(session: Option<&SessionUser>, catalog: &MenuCatalog) -> Self {
        let role = resolve_role(session);
        Self::for_role(role, catalog)
    }

    /// Derive the view of an already resolved role.
    pub fn for_role(role: Role, catalog: &MenuCatalog) -> Self {
        let menu = menu::filter_menu(role, catalog);

        debug!(
            role = %role,
            roots = menu.len(),
            "derived navigation"
        );

        Self {
            role,
            menu,
            catalog: catalog.clone(),
        }
    }

    /// Whether this session may open `path`.
    pub fn allows(&self, path: &str) -> bool {
        menu::is_path_allowed(self.role, &self.menu, &self.catalog, path)
    }

    /// Root ids of the visible menu, in display order.
    pub fn root_ids(&self) -> Vec<&str> {
        self.menu.iter().map(|e| e.id.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.menu.is_empty()
    }
}
