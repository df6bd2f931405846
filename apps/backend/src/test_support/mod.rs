//! Helpers for integration tests: build an initialized Actix test service
//! around the production routes.

pub mod app_builder;

pub use app_builder::create_test_app;
