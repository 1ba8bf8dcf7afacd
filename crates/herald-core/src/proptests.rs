//! Property-based tests for lookup and date formatting.
