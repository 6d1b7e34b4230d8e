//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's
//! best practices, reducing linking overhead from 3x to 1x.
//!
//! Structure:
//! - integration: multi-component workflow tests (edit -> persist -> reload)
//! - unit: single-component tests against the public API

mod integration;
mod unit;
