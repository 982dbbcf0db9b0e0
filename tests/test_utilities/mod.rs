//! Shared helpers for the integration test binaries
#![allow(dead_code)]

pub mod fixtures;
pub mod mocks;
