pub mod board;
pub mod coordinator;
pub mod error;
pub mod filter;
pub mod pagination;

#[cfg(test)]
pub(crate) mod testing;

pub use board::{Board, Viewport};
pub use coordinator::{Coordinator, Settings};
pub use error::Error;
