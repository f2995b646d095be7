pub mod database;
pub mod repositories;
pub mod resolver;
pub mod system;
