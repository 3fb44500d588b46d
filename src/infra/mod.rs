//! Infrastructure layer - external collaborators (MongoDB).

pub mod db;

pub use db::Database;
