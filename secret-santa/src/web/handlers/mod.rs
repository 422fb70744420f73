//! Route handlers

pub mod pages;

pub use pages::{generate_pairings, home};
