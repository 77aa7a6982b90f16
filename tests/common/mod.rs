//! Common test utilities for lintdiff integration tests
//!
//! Provides a `TestRepo` builder for creating temporary git repositories
//! and running the built binary against them.

#![allow(dead_code)]

pub mod test_repo;

pub use test_repo::TestRepo;
