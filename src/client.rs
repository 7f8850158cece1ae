mod backup_restore;
mod routes;
mod solutions;
mod virtual_events;

pub use backup_restore::*;
pub use solutions::*;
pub use virtual_events::*;
