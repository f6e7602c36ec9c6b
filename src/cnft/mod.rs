//! cnft.io verified policy registry
//!
//! The registry is a public GitHub repository with one JSON file per
//! verified project. Listings and files are read through the GitHub
//! contents API; file bodies arrive base64 encoded.

mod registry;

pub use registry::{CnftRegistry, DEFAULT_REGISTRY_URL};

#[cfg(test)]
mod tests;
