// src/upstream/mod.rs
pub mod client;

pub use client::{fetch_document, DEFAULT_UPSTREAM_URL};
