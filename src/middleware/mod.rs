//! Request middleware.

pub mod enforce;
