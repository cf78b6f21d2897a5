pub mod error;
pub mod ids;
pub mod model;
pub mod repo;
pub mod service;
