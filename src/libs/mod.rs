pub mod api;
pub mod category;
pub mod config;
pub mod defaults;
pub mod middleware;
pub mod redis;
pub mod store;
pub mod variable;
pub mod version;
