//! Domain models, pure services, and repository traits for busq

pub mod model;
pub mod repository;
pub mod service;
