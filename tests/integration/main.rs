//! Integration tests for maz-feed

mod compose_test;
mod support;
