//! Role-based menu filtering.
//!
//! Each role maps to a [`MenuPolicy`]. Exclude policies walk the catalog in
//! declaration order; include policies walk their allow-list in its own
//! order. Both drop denylisted children. The catalog is never modified.

use std::collections::HashSet;

use super::catalog::MenuCatalog;
use super::entry::MenuEntry;
use crate::models::Role;

/// Child entries hidden from everyone but superadmin.
///
/// Placeholder list; extend when more master-data screens move under
/// regular parents.
pub const MASTER_CHILD_DENYLIST: &[&str] = &["simpanan/kategori", "pinjaman/kategori"];

/// Roots hidden from board members and staff.
pub const BOARD_EXCLUDED_ROOTS: &[&str] = &["konfigurasi", "master", "master-marketplace"];

/// Roots hidden from staff.
pub const STAFF_EXCLUDED_ROOTS: &[&str] = &[
    "konfigurasi",
    "master",
    "master-marketplace",
    "akuntansi",
    "laporan",
];

/// Roots shown to plain members.
pub const MEMBER_ROOTS: &[&str] = &[
    "dashboard",
    "anggota",
    "simpanan",
    "pinjaman",
    "data-keuangan",
    "anggota-meninggal",
    "akuntansi",
    "laporan",
];

/// Roots shown to members who run a shop.
pub const SELLER_ROOTS: &[&str] = &[
    "dashboard",
    "anggota",
    "simpanan",
    "pinjaman",
    "data-keuangan",
    "anggota-meninggal",
    "akuntansi",
    "laporan",
    "pemisah-marketplace",
    "dashboard-marketplace",
    "product-marketplace",
    "transaction-marketplace",
    "profile-toko",
];

/// How a role's menu is derived from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuPolicy {
    /// The whole catalog, children included.
    Full,
    /// Catalog order, minus the listed roots and denylisted children.
    Exclude { roots: &'static [&'static str] },
    /// Allow-list order, minus denylisted children.
    Include { roots: &'static [&'static str] },
    /// Nothing.
    Empty,
}

impl Role {
    /// The menu policy applied to this role.
    pub fn menu_policy(self) -> MenuPolicy {
        match self {
            Role::Superadmin => MenuPolicy::Full,
            Role::Ketua | Role::Sekretaris | Role::Bendahara => MenuPolicy::Exclude {
                roots: BOARD_EXCLUDED_ROOTS,
            },
            Role::Staff => MenuPolicy::Exclude {
                roots: STAFF_EXCLUDED_ROOTS,
            },
            Role::AnggotaSeller => MenuPolicy::Include {
                roots: SELLER_ROOTS,
            },
            Role::Anggota | Role::User => MenuPolicy::Include {
                roots: MEMBER_ROOTS,
            },
            Role::None => MenuPolicy::Empty,
        }
    }
}

/// Derive the menu a role may see.
///
/// Returns fresh copies; the catalog is left untouched.
pub fn filter_menu(role: Role, catalog: &MenuCatalog) -> Vec<MenuEntry> {
    apply_policy(role.menu_policy(), catalog)
}

/// Apply a policy to a catalog.
pub fn apply_policy(policy: MenuPolicy, catalog: &MenuCatalog) -> Vec<MenuEntry> {
    match policy {
        MenuPolicy::Full => catalog.entries().to_vec(),
        MenuPolicy::Exclude { roots } => {
            let excluded: HashSet<&str> = roots.iter().copied().collect();
            catalog
                .iter()
                .filter(|entry| !excluded.contains(entry.id.as_str()))
                .map(without_denied_children)
                .collect()
        }
        MenuPolicy::Include { roots } => roots
            .iter()
            .filter_map(|id| catalog.get(id))
            .map(without_denied_children)
            .collect(),
        MenuPolicy::Empty => Vec::new(),
    }
}

fn without_denied_children(entry: &MenuEntry) -> MenuEntry {
    entry.retain_children(|child| !MASTER_CHILD_DENYLIST.contains(&child.id.as_str()))
}
