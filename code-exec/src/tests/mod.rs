//! Scenario tests against a stubbed remote execution service

mod fixtures;
mod utils;
