//! Session user as supplied by the identity provider.
//!
//! The provider hands over a JSON document shaped like
//! `{"id": "...", "name": "...", "roles": [{"name": "ketua"}]}`. Only the
//! role names matter to navigation. Anything malformed degrades instead of
//! failing: a broken `roles` field becomes an empty list, a broken document
//! becomes "no session".

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;
use tracing::warn;

/// A role assignment carried by the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleName {
    pub name: String,
}

impl RoleName {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Authenticated user attached to a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Assigned role names, in provider order.
    #[serde(default, deserialize_with = "lenient_roles")]
    pub roles: Vec<RoleName>,
}

impl SessionUser {
    /// Session user carrying the given role names.
    pub fn with_roles<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            roles: roles.into_iter().map(RoleName::new).collect(),
            ..Self::default()
        }
    }

    /// Raw role names as supplied.
    pub fn role_names(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(|r| r.name.as_str())
    }
}

/// Parse a session document.
///
/// Returns `None` for `null`, for non-object documents and for anything
/// that is not valid JSON.
pub fn parse_session(json: &str) -> Option<SessionUser> {
    let value: JsonValue = match serde_json::from_str(json) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "ignoring unparseable session document");
            return None;
        }
    };

    if !value.is_object() {
        return None;
    }

    match serde_json::from_value(value) {
        Ok(user) => Some(user),
        Err(e) => {
            warn!(error = %e, "ignoring malformed session document");
            None
        }
    }
}

/// Accept `[{"name": ".."}, ".."]`; skip unusable items, treat a non-array
/// as empty.
fn lenient_roles<'de, D>(deserializer: D) -> Result<Vec<RoleName>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = JsonValue::deserialize(deserializer)?;

    let JsonValue::Array(items) = value else {
        return Ok(Vec::new());
    };

    let roles = items
        .into_iter()
        .filter_map(|item| match item {
            JsonValue::String(name) => Some(RoleName { name }),
            JsonValue::Object(mut map) => match map.remove("name") {
                Some(JsonValue::String(name)) => Some(RoleName { name }),
                _ => None,
            },
            _ => None,
        })
        .collect();

    Ok(roles)
}
