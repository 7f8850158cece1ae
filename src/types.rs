/// Primitive Graph API data types and NewType-patterns.
mod urls;

pub use urls::*;
