//! Property-based tests for the spam classifier.
