//! Integration tests exercising the public crate API.

mod matching_coverage_tests;
