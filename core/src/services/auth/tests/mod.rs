//! Tests for the authentication service


mod service_tests;
