pub mod adapter;
mod client;
pub mod errors;
pub mod models;
pub mod requests;
mod resource;
pub mod types;

pub use adapter::{HttpAdapter, HttpAdapterBuilder, RequestAdapter};
pub use client::*;
pub use errors::{GraphError, ODataError};
pub use requests::{ODataQuery, RequestConfiguration};
pub use resource::{CollectionRequest, CountRequest, ItemRequest, SingletonRequest};
