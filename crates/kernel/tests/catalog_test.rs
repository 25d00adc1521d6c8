#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Catalog loading tests.
//!
//! Write catalog files to a scratch directory and load them the way the
//! CLI does.

use std::path::PathBuf;

use koperasi_kernel::cli::{load_catalog, read_session_file};
use koperasi_kernel::{CatalogError, MenuCatalog, NavigationView, Role};
use koperasi_test_utils::root_ids;

fn scratch_file(name: &str, content: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("koperasi_catalog_test_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

const CATALOG_YAML: &str = r##"
entries:
  - id: dashboard
    label: Dashboard
    icon: home
    href: /dashboard
  - id: simpanan
    label: Simpanan
    href: /simpanan
    children:
      - id: simpanan/kategori
        label: Kategori
        href: /simpanan/kategori
      - id: simpanan/data
        label: Data
        href: /simpanan/data
  - id: konfigurasi
    label: Konfigurasi
    href: /konfigurasi
  - id: pemisah-marketplace
    label: Marketplace
    href: "#"
    isSeparator: true
  - id: profile-toko
    label: Profil Toko
    href: /toko/profil
"##;

#[test]
fn load_yaml_catalog_and_filter() {
    let path = scratch_file("menu.yml", CATALOG_YAML);
    let catalog = MenuCatalog::load(&path).unwrap();

    assert_eq!(catalog.len(), 5);
    assert_eq!(catalog.entry_count(), 7);
    assert_eq!(catalog.get("dashboard").unwrap().icon.as_deref(), Some("home"));

    let view = NavigationView::for_role(Role::AnggotaSeller, &catalog);
    assert_eq!(
        root_ids(&view.menu),
        vec!["dashboard", "simpanan", "pemisah-marketplace", "profile-toko"]
    );
    assert_eq!(view.menu[1].children.len(), 1);
    assert!(view.allows("/toko/profil"));
    assert!(!view.allows("/simpanan/kategori"));
}

#[test]
fn load_json_catalog() {
    let json = MenuCatalog::from_yaml_str(CATALOG_YAML)
        .unwrap()
        .to_json()
        .unwrap();
    let path = scratch_file("menu.json", &json);

    let from_json = MenuCatalog::load(&path).unwrap();
    let from_yaml = MenuCatalog::from_yaml_str(CATALOG_YAML).unwrap();
    assert_eq!(from_json, from_yaml);
}

#[test]
fn extension_is_case_insensitive() {
    let path = scratch_file("MENU.YAML", CATALOG_YAML);
    assert!(MenuCatalog::load(&path).is_ok());
}

#[test]
fn invalid_files_are_rejected() {
    let duplicate = scratch_file(
        "duplicate.yml",
        "- {id: laporan, label: A, href: /a}\n- {id: laporan, label: B, href: /b}\n",
    );
    assert!(matches!(
        MenuCatalog::load(&duplicate),
        Err(CatalogError::DuplicateId(id)) if id == "laporan"
    ));

    let broken = scratch_file("broken.json", "{\"entries\": [");
    assert!(matches!(MenuCatalog::load(&broken), Err(CatalogError::Json(_))));

    let not_a_catalog = scratch_file("scalar.yml", "just a string\n");
    assert!(matches!(MenuCatalog::load(&not_a_catalog), Err(CatalogError::Yaml(_))));
}

#[test]
fn cli_loader_wraps_errors_with_path() {
    let missing = std::env::temp_dir().join("koperasi_missing_catalog.yml");
    let err = load_catalog(Some(&missing)).unwrap_err();
    assert!(format!("{err:#}").contains("koperasi_missing_catalog.yml"));
}

#[test]
fn session_file_degrades_to_no_session() {
    let good = scratch_file("session.json", r#"{"roles": [{"name": "Bendahara"}]}"#);
    let session = read_session_file(&good).unwrap();
    assert_eq!(
        NavigationView::derive(session.as_ref(), &MenuCatalog::koperasi()).role,
        Role::Bendahara
    );

    let garbage = scratch_file("garbage.json", "<html>");
    assert!(read_session_file(&garbage).unwrap().is_none());
}
