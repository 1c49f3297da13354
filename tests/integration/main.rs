//! Integration tests for Redirect-Audit
//!
//! These tests use wiremock to stand up mock sites and exercise the real
//! HTTP probe, the full check run and the HTTP API end-to-end.

mod audit_tests;
mod probe_tests;
mod server_tests;
