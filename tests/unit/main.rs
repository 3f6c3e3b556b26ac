//! Unit test suite entry point.

mod engine_scenario_tests;
