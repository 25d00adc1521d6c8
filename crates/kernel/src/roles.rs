//! Effective role resolution.
//!
//! A session may carry any number of role names; navigation needs exactly
//! one role. Precedence is expressed as an ordered rule table walked by
//! [`first_match`], so changing the order is a data change.

use std::collections::BTreeSet;

use tracing::trace;

use crate::models::{Role, SessionUser};

/// A rule predicate over some subject.
pub type Predicate<T> = fn(&T) -> bool;

/// Recognized roles of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleSet {
    roles: BTreeSet<Role>,
}

impl RoleSet {
    /// Build a set from raw role names, dropping names that map to no role.
    pub fn from_names<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut roles = BTreeSet::new();

        for name in names {
            match Role::from_name(name) {
                Some(role) => {
                    roles.insert(role);
                }
                None => trace!(role_name = %name, "ignoring unrecognized role name"),
            }
        }

        Self { roles }
    }

    /// Recognized roles of a session user.
    pub fn from_user(user: &SessionUser) -> Self {
        Self::from_names(user.role_names())
    }

    pub fn contains(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }
}

/// Role precedence for a present session, highest first.
///
/// A session that matches none of these resolves to [`Role::User`].
pub static ROLE_PRECEDENCE: &[(Predicate<RoleSet>, Role)] = &[
    (|set| set.contains(Role::Superadmin), Role::Superadmin),
    (|set| set.contains(Role::Ketua), Role::Ketua),
    (|set| set.contains(Role::Sekretaris), Role::Sekretaris),
    (|set| set.contains(Role::Bendahara), Role::Bendahara),
    (|set| set.contains(Role::Staff), Role::Staff),
    (|set| set.contains(Role::AnggotaSeller), Role::AnggotaSeller),
    (|set| set.contains(Role::Anggota), Role::Anggota),
    (|set| set.contains(Role::User), Role::User),
];

/// Return the outcome of the first rule whose predicate holds.
pub fn first_match<'a, T, R>(
    rules: impl IntoIterator<Item = &'a (Predicate<T>, R)>,
    subject: &T,
) -> Option<R>
where
    T: 'a,
    R: Copy + 'a,
{
    rules
        .into_iter()
        .find(|(predicate, _)| predicate(subject))
        .map(|(_, outcome)| *outcome)
}

/// Resolve the effective role of a possibly-absent session.
pub fn resolve_role(session: Option<&SessionUser>) -> Role {
    let Some(user) = session else {
        return Role::None;
    };

    resolve_role_set(&RoleSet::from_user(user))
}

/// Resolve the effective role of a present session's recognized roles.
pub fn resolve_role_set(set: &RoleSet) -> Role {
    first_match(ROLE_PRECEDENCE, set).unwrap_or(Role::User)
}
