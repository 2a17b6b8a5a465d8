//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `placement.rs` - FEN placement import scenarios
//! - `snapshot.rs` - compact state string scenarios
//! - `proptest.rs` - Property-based tests
