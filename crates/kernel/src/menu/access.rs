//! Route access checks derived from a filtered menu.
//!
//! A path belongs to the catalog entry whose href matches it most
//! specifically. The path is reachable when that entry survived the role's
//! filter. Paths outside the catalog are only reachable by superadmin.

use std::collections::HashSet;

use super::catalog::MenuCatalog;
use super::entry::MenuEntry;
use crate::models::Role;

/// How specifically an href matched a path: (segments, -placeholders).
type Specificity = (usize, isize);

/// Decide whether `role`, seeing `menu`, may open `path`.
pub fn is_path_allowed(role: Role, menu: &[MenuEntry], catalog: &MenuCatalog, path: &str) -> bool {
    match role {
        Role::Superadmin => return true,
        Role::None => return false,
        _ => {}
    }

    let visible = visible_ids(menu);

    owning_entries(catalog, path)
        .iter()
        .any(|owner| visible.contains(owner.id.as_str()))
}

/// The first-declared catalog entry whose href matches `path` most
/// specifically.
pub fn owning_entry<'a>(catalog: &'a MenuCatalog, path: &str) -> Option<&'a MenuEntry> {
    owning_entries(catalog, path).into_iter().next()
}

/// Every catalog entry tied for the most specific match of `path`, in
/// declaration order.
///
/// Separators never own a path. Paths with `.` or `..` segments are owned
/// by nothing.
pub fn owning_entries<'a>(catalog: &'a MenuCatalog, path: &str) -> Vec<&'a MenuEntry> {
    let mut best: Option<Specificity> = None;
    let mut owners = Vec::new();

    for entry in catalog.iter().flat_map(|root| std::iter::once(root).chain(&root.children)) {
        if entry.is_separator {
            continue;
        }
        let Some(score) = match_href(&entry.href, path) else {
            continue;
        };
        match best {
            Some(current) if score < current => {}
            Some(current) if score == current => owners.push(entry),
            _ => {
                best = Some(score);
                owners.clear();
                owners.push(entry);
            }
        }
    }

    owners
}

/// Ids of all root and child entries in a menu.
fn visible_ids(menu: &[MenuEntry]) -> HashSet<&str> {
    menu.iter()
        .flat_map(|root| std::iter::once(root).chain(&root.children))
        .map(|e| e.id.as_str())
        .collect()
}

/// Match an href against a path on segment boundaries.
///
/// Href: "/pinjaman/:id"
/// Path: "/pinjaman/12/angsuran?page=2"
/// Result: Some((2, -1))
///
/// The href must be a segment-wise prefix of the path. `:name` segments
/// match any single segment. Query strings and trailing slashes are ignored.
fn match_href(href: &str, path: &str) -> Option<Specificity> {
    let href_parts = segments(href)?;
    let path_parts = segments(path)?;

    if href_parts.is_empty() || href_parts.len() > path_parts.len() {
        return None;
    }

    let mut placeholders = 0isize;

    for (pat, actual) in href_parts.iter().zip(path_parts.iter()) {
        if pat.starts_with(':') {
            placeholders += 1;
        } else if pat != actual {
            return None;
        }
    }

    Some((href_parts.len(), -placeholders))
}

/// Split an absolute path into non-empty segments, dropping any query or
/// fragment. Relative paths, placeholder hrefs ("#") and paths containing
/// `.` or `..` segments yield `None`.
fn segments(raw: &str) -> Option<Vec<&str>> {
    let path = raw.split(['?', '#']).next().unwrap_or_default();

    if !path.starts_with('/') {
        return None;
    }

    let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if parts.iter().any(|s| matches!(*s, "." | "..")) {
        return None;
    }

    Some(parts)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::menu::filter_menu;

    fn allowed(role: Role, path: &str) -> bool {
        let catalog = MenuCatalog::koperasi();
        let menu = filter_menu(role, &catalog);
        is_path_allowed(role, &menu, &catalog, path)
    }

    #[test]
    fn match_href_exact() {
        assert_eq!(match_href("/anggota", "/anggota"), Some((1, 0)));
        assert_eq!(match_href("/anggota/", "/anggota"), Some((1, 0)));
    }

    #[test]
    fn match_href_prefix_on_segment_boundary() {
        assert_eq!(match_href("/anggota", "/anggota/12/edit"), Some((1, 0)));
        assert!(match_href("/anggota", "/anggota-meninggal").is_none());
    }

    #[test]
    fn match_href_with_param() {
        assert_eq!(match_href("/pinjaman/:id", "/pinjaman/12/angsuran?page=2"), Some((2, -1)));
        assert!(match_href("/pinjaman/:id", "/pinjaman").is_none());
    }

    #[test]
    fn match_href_rejects_placeholders() {
        assert!(match_href("#", "/anything").is_none());
        assert!(match_href("", "/").is_none());
        assert!(match_href("/", "/dashboard").is_none());
    }

    #[test]
    fn most_specific_entry_owns_path() {
        let catalog = MenuCatalog::koperasi();
        let owner = owning_entry(&catalog, "/simpanan/kategori/3").unwrap();
        assert_eq!(owner.id, "simpanan/kategori");

        let owner = owning_entry(&catalog, "/simpanan/lainnya").unwrap();
        assert_eq!(owner.id, "simpanan");
    }

    #[test]
    fn literal_beats_placeholder() {
        let catalog = MenuCatalog::new(vec![
            MenuEntry::link("toko", "Toko", "/toko")
                .child(MenuEntry::link("toko/detail", "Detail", "/toko/:slug"))
                .child(MenuEntry::link("toko/baru", "Baru", "/toko/baru")),
        ])
        .unwrap();

        assert_eq!(owning_entry(&catalog, "/toko/baru").unwrap().id, "toko/baru");
        assert_eq!(owning_entry(&catalog, "/toko/warung-bu-siti").unwrap().id, "toko/detail");
    }

    #[test]
    fn superadmin_and_none() {
        assert!(allowed(Role::Superadmin, "/konfigurasi/role"));
        assert!(allowed(Role::Superadmin, "/not/in/catalog"));
        assert!(!allowed(Role::None, "/dashboard"));
    }

    #[test]
    fn denylisted_child_is_blocked_under_visible_parent() {
        assert!(allowed(Role::Anggota, "/simpanan/data"));
        assert!(allowed(Role::Anggota, "/simpanan"));
        assert!(!allowed(Role::Anggota, "/simpanan/kategori"));
        assert!(!allowed(Role::Ketua, "/pinjaman/kategori/1"));
    }

    #[test]
    fn excluded_roots_are_blocked() {
        assert!(!allowed(Role::Ketua, "/konfigurasi/pengguna"));
        assert!(allowed(Role::Ketua, "/akuntansi/coa"));
        assert!(!allowed(Role::Staff, "/akuntansi/coa"));
        assert!(!allowed(Role::User, "/marketplace/product"));
        assert!(allowed(Role::AnggotaSeller, "/marketplace/product/9"));
    }

    #[test]
    fn dot_segments_are_blocked() {
        assert!(match_href("/anggota", "/anggota/../master/bank").is_none());
        assert!(owning_entry(&MenuCatalog::koperasi(), "/simpanan/./kategori").is_none());

        assert!(!allowed(Role::Ketua, "/master/bank"));
        assert!(!allowed(Role::Ketua, "/anggota/../master/bank"));
        assert!(!allowed(Role::Anggota, "/simpanan/kategori"));
        assert!(!allowed(Role::Anggota, "/simpanan/./kategori"));
        assert!(!allowed(Role::Anggota, "/simpanan/data/.."));
        assert!(allowed(Role::Anggota, "/simpanan/data/..lama"));
    }

    #[test]
    fn visible_entry_wins_a_tie_with_hidden_entry() {
        let catalog = MenuCatalog::new(vec![
            MenuEntry::link("master", "Master", "/master")
                .child(MenuEntry::link("master/laporan", "Laporan Master", "/laporan")),
            MenuEntry::link("laporan", "Laporan", "/laporan"),
        ])
        .unwrap();

        let owners: Vec<&str> = owning_entries(&catalog, "/laporan/neraca")
            .iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(owners, vec!["master/laporan", "laporan"]);
        assert_eq!(owning_entry(&catalog, "/laporan").unwrap().id, "master/laporan");

        let menu = filter_menu(Role::Ketua, &catalog);
        assert_eq!(menu.len(), 1);
        assert!(is_path_allowed(Role::Ketua, &menu, &catalog, "/laporan"));

        let menu = filter_menu(Role::Staff, &catalog);
        assert!(!is_path_allowed(Role::Staff, &menu, &catalog, "/laporan"));
    }

    #[test]
    fn unknown_paths_are_blocked() {
        assert!(!allowed(Role::Ketua, "/admin"));
        assert!(!allowed(Role::Anggota, "relative/path"));
    }
}
