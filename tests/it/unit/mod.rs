//! Unit tests for gridstore.

mod snapshot_tests;
