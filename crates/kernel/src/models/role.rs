//! Role model.
//!
//! The cooperative shell knows a closed set of roles. Raw role names coming
//! from the identity provider are free-form strings; [`Role::from_name`] is
//! the single place where they are mapped onto the enum.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Well-known role names as issued by the identity provider.
pub mod well_known {
    pub const SUPERADMIN: &str = "superadmin";
    pub const KETUA: &str = "ketua";
    pub const SEKRETARIS: &str = "sekretaris";
    pub const BENDAHARA: &str = "bendahara";
    pub const STAFF: &str = "staff";
    pub const ANGGOTA_SELLER: &str = "anggota_seller";
    pub const ANGGOTA: &str = "anggota";
    pub const USER: &str = "user";
    pub const NONE: &str = "none";
}

/// Effective role of a session.
///
/// Variants are declared from highest to lowest precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Superadmin,
    Ketua,
    Sekretaris,
    Bendahara,
    Staff,
    AnggotaSeller,
    Anggota,
    /// Authenticated session without any recognized role.
    User,
    /// No session at all.
    None,
}

impl Role {
    /// All roles, highest precedence first.
    pub const ALL: [Role; 9] = [
        Role::Superadmin,
        Role::Ketua,
        Role::Sekretaris,
        Role::Bendahara,
        Role::Staff,
        Role::AnggotaSeller,
        Role::Anggota,
        Role::User,
        Role::None,
    ];

    /// Canonical (snake_case) name.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Superadmin => well_known::SUPERADMIN,
            Role::Ketua => well_known::KETUA,
            Role::Sekretaris => well_known::SEKRETARIS,
            Role::Bendahara => well_known::BENDAHARA,
            Role::Staff => well_known::STAFF,
            Role::AnggotaSeller => well_known::ANGGOTA_SELLER,
            Role::Anggota => well_known::ANGGOTA,
            Role::User => well_known::USER,
            Role::None => well_known::NONE,
        }
    }

    /// Map a raw role name onto a role.
    ///
    /// Matching is case-insensitive, ignores surrounding whitespace and
    /// treats `-` and spaces as `_`. `none` is never accepted: it only
    /// results from a missing session.
    pub fn from_name(raw: &str) -> Option<Role> {
        let normalized = normalize_name(raw);

        Role::ALL
            .into_iter()
            .filter(|role| *role != Role::None)
            .find(|role| role.as_str() == normalized)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lower-case a raw role name and fold separators to `_`.
pub fn normalize_name(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            c => c,
        })
        .collect()
}
