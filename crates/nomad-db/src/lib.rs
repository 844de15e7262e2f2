pub mod connection;
pub use connection::{Connection, TestHandle};

pub mod results;
pub mod schema;
pub mod sql;

pub mod tables;
