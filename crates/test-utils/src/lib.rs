//! Koperasi test utilities.
//!
//! Fixtures for navigation tests: session builders, a catalog builder and
//! helpers for comparing menus by id.

use koperasi_kernel::models::RoleName;
use koperasi_kernel::{MenuCatalog, MenuEntry, SessionUser};

/// Session user carrying the given role names.
pub fn test_session(roles: &[&str]) -> SessionUser {
    SessionUser::with_roles(roles.iter().copied())
}

/// A session user builder.
#[derive(Debug, Clone, Default)]
pub struct TestSession {
    user: SessionUser,
}

impl TestSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user id.
    pub fn with_id(mut self, id: &str) -> Self {
        self.user.id = Some(id.to_string());
        self
    }

    /// Set the display name.
    pub fn with_name(mut self, name: &str) -> Self {
        self.user.name = Some(name.to_string());
        self
    }

    /// Add a role name.
    pub fn role(mut self, name: &str) -> Self {
        self.user.roles.push(RoleName::new(name));
        self
    }

    pub fn build(self) -> SessionUser {
        self.user
    }
}

/// A catalog builder for creating test fixtures.
#[derive(Debug, Clone, Default)]
pub struct TestCatalog {
    entries: Vec<MenuEntry>,
}

impl TestCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a root link whose href is derived from the id.
    pub fn root(mut self, id: &str) -> Self {
        self.entries.push(link(id));
        self
    }

    /// Add a root link with the given child ids.
    pub fn parent(mut self, id: &str, children: &[&str]) -> Self {
        let entry = children
            .iter()
            .fold(link(id), |entry, child| entry.child(link(child)));
        self.entries.push(entry);
        self
    }

    /// Add a separator.
    pub fn separator(mut self, id: &str) -> Self {
        self.entries.push(MenuEntry::separator(id, id));
        self
    }

    /// Raw entries, unvalidated.
    pub fn entries(self) -> Vec<MenuEntry> {
        self.entries
    }

    /// Build and validate the catalog.
    ///
    /// # Panics
    ///
    /// Panics if the fixture is not a valid catalog.
    #[allow(clippy::expect_used)]
    pub fn build(self) -> MenuCatalog {
        MenuCatalog::new(self.entries).expect("test catalog should be valid")
    }
}

/// Link entry with label and href derived from `id`.
fn link(id: &str) -> MenuEntry {
    MenuEntry::link(id, id, format!("/{id}"))
}

/// Root ids of a menu, in order.
pub fn root_ids(menu: &[MenuEntry]) -> Vec<String> {
    menu.iter().map(|e| e.id.clone()).collect()
}

/// Child ids of every entry in a menu, flattened in order.
pub fn child_ids(menu: &[MenuEntry]) -> Vec<String> {
    menu.iter()
        .flat_map(|e| e.children.iter().map(|c| c.id.clone()))
        .collect()
}

/// Root ids of a catalog, in declaration order.
pub fn catalog_root_ids(catalog: &MenuCatalog) -> Vec<String> {
    root_ids(catalog.entries())
}
