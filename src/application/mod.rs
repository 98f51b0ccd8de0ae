//! Application layer: the launch coordinator and the intent resolver.
//!
//! `LaunchCoordinator` is the entry point for a single confirmation. Once the
//! SDK reports completion it hands off to `IntentResolver`, which turns the
//! fetched intent into the outcome returned to the caller.

pub mod coordinator;
pub mod resolver;
