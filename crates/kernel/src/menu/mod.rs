//! Navigation menu system.
//!
//! The catalog holds every entry the shell can show. Per session it is
//! narrowed down by role:
//! - `filter` derives the visible menu from a role's policy
//! - `access` answers whether a path is reachable for that menu

mod access;
mod builtin;
mod catalog;
mod entry;
mod filter;

pub use access::{is_path_allowed, owning_entries, owning_entry};
pub use catalog::MenuCatalog;
pub use entry::MenuEntry;
pub use filter::{
    BOARD_EXCLUDED_ROOTS, MASTER_CHILD_DENYLIST, MEMBER_ROOTS, MenuPolicy, SELLER_ROOTS,
    STAFF_EXCLUDED_ROOTS, apply_policy, filter_menu,
};
