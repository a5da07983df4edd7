pub mod client;
pub mod endpoint;
pub mod error;

pub use client::{Client, Config, PostSource};
pub use endpoint::Endpoint;
pub use error::Error;
