//! Navigation entry type.

use serde::{Deserialize, Serialize};

/// A navigation entry.
///
/// Root entries may carry a flat list of children; children never nest
/// further (enforced by [`MenuCatalog`](super::MenuCatalog)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuEntry {
    /// Unique key (e.g., "simpanan", "simpanan/kategori").
    pub id: String,
    /// Display label.
    pub label: String,
    /// Icon name, passed through to the renderer untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Routable path.
    #[serde(default)]
    pub href: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuEntry>,
    /// Visual divider rather than a link.
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_separator: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl MenuEntry {
    /// Create a link entry.
    pub fn link(id: impl Into<String>, label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
            href: href.into(),
            children: Vec::new(),
            is_separator: false,
        }
    }

    /// Create a separator entry.
    pub fn separator(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            is_separator: true,
            ..Self::link(id, label, "#")
        }
    }

    /// Set the icon.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Append a child entry.
    pub fn child(mut self, child: MenuEntry) -> Self {
        self.children.push(child);
        self
    }

    /// Replace the children.
    pub fn with_children(mut self, children: Vec<MenuEntry>) -> Self {
        self.children = children;
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Copy of this entry whose children are restricted to those `keep` accepts.
    ///
    /// Surviving children keep their order.
    pub fn retain_children(&self, keep: impl Fn(&MenuEntry) -> bool) -> Self {
        Self {
            id: self.id.clone(),
            label: self.label.clone(),
            icon: self.icon.clone(),
            href: self.href.clone(),
            children: self.children.iter().filter(|c| keep(c)).cloned().collect(),
            is_separator: self.is_separator,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn builder() {
        let entry = MenuEntry::link("simpanan", "Simpanan", "/simpanan")
            .icon("wallet")
            .child(MenuEntry::link("simpanan/data", "Data Simpanan", "/simpanan"));

        assert_eq!(entry.icon.as_deref(), Some("wallet"));
        assert!(entry.has_children());
        assert!(!entry.is_separator);
    }

    #[test]
    fn separator_has_placeholder_href() {
        let sep = MenuEntry::separator("pemisah", "Marketplace");
        assert!(sep.is_separator);
        assert_eq!(sep.href, "#");
    }

    #[test]
    fn retain_children_keeps_order() {
        let entry = MenuEntry::link("laporan", "Laporan", "/laporan")
            .child(MenuEntry::link("a", "A", "/a"))
            .child(MenuEntry::link("b", "B", "/b"))
            .child(MenuEntry::link("c", "C", "/c"));

        let filtered = entry.retain_children(|c| c.id != "b");
        let ids: Vec<&str> = filtered.children.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(entry.children.len(), 3);
    }

    #[test]
    fn serde_shape() {
        let json = serde_json::to_value(MenuEntry::separator("pemisah", "Marketplace")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "pemisah", "label": "Marketplace", "href": "#", "isSeparator": true})
        );

        let entry: MenuEntry =
            serde_json::from_str(r#"{"id": "dashboard", "label": "Dashboard"}"#).unwrap();
        assert_eq!(entry.href, "");
        assert!(entry.children.is_empty());
    }
}
