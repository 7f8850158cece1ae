//! Assembling request descriptions: URL templates, OData query options,
//! per-call configuration.

mod config;
mod info;
mod query;
mod template;

pub use config::*;
pub use info::*;
pub use query::*;
