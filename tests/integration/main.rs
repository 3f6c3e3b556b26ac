//! Integration test suite entry point.

mod cli_tests;
