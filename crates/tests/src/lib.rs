//! Integration test harness; the tests live in the top-level `tests/` directory.
