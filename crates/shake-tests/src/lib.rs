//! Integration tests for shake-rs crates.
//!
//! End-to-end checks that parameters, sampler, preview and bake agree with
//! each other across crate boundaries.

#[cfg(test)]
mod golden;
