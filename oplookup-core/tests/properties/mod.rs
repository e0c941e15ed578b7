//! Property test modules

mod error_tests;
mod tracing_tests;
