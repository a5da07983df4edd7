pub mod post;
pub mod query;
pub mod state;
pub mod user;
