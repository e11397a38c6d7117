//! End-to-end export tests for extforge-lib.

mod common;

mod archive_tests;
mod manifest_tests;
