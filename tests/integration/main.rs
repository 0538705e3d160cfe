//! Workspace-level integration tests
//!
//! End-to-end flows across both layers, plus the engine's algebraic laws as
//! property tests.
