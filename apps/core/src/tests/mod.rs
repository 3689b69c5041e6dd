//! Test Module
//!
//! Catalog-wide test suite for the Amina response engine.
//!
//! ## Test Categories
//! - `engine_tests`: matching, scoring precedence, suggestion operations
//! - `catalog_tests`: integrity of the shipped catalog data
//! - `session_tests`: conversation flow over the engine
