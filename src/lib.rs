pub mod error;
pub mod item;
pub mod server;
pub mod store;
