//! Definitions of structs describing request and response data of the
//! solutions namespace.
//!
//! Every entity field is optional and skipped when unset, so a round trip
//! preserves the distinction between "absent" and "set to a default", which
//! is the contract PATCH requests rely on. Unmodeled fields survive in each
//! entity's `additional_data` map.

mod backup_restore;
mod collection;
mod common;
mod virtual_events;

pub use backup_restore::*;
pub use collection::*;
pub use common::*;
pub use virtual_events::*;
