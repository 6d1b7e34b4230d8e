//! Multi-component workflow tests.

mod workflow_tests;
