//! Data models.

pub mod role;
pub mod session;

pub use role::Role;
pub use session::{RoleName, SessionUser, parse_session};
