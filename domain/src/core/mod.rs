//! Core domain value objects and errors

pub mod error;
pub mod model;
