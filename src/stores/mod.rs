//! Store implementations.

#[cfg(feature = "mock")]
pub mod mock;

pub mod pass;
