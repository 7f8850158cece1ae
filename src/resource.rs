//! Generic request builders over the route table.
//!
//! One builder family covers every resource: [CollectionRequest] for
//! collections, [ItemRequest] for one item, [SingletonRequest] for
//! single-valued navigation properties, [CountRequest] for `$count`
//! endpoints. Which verbs and children a concrete resource exposes is
//! decided by thin typed facades in the client module.
//!
//! Builders bind their URL template and path parameters at construction and
//! never mutate afterwards; each navigation step returns a fresh builder
//! sharing the same adapter.

mod collection;
mod count;
mod item;
mod route;
mod singleton;

pub use collection::*;
pub use count::*;
pub use item::*;
pub use route::*;
pub use singleton::*;
