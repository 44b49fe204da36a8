//! Config module tests
