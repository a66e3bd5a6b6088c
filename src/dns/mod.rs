//! DNS resolution collaborator.
//!
//! Matchers only see the [`DnsLookup`] trait. The production implementation is
//! `hickory-resolver`'s `TokioAsyncResolver` using the platform's resolver
//! configuration; tests substitute an in-memory table.

mod lookup;
mod records;

// Re-export public API
pub use lookup::{DnsLookup, QueryType};

#[cfg(test)]
pub(crate) mod stub;

#[cfg(test)]
mod tests;
