//! Purpose: Library crate behind the `podspec-gen` CLI and integration tests.
//! Exports: `core` (path rules, request model, podspec renderer, version advice, errors)
//! and `api` (generation entry point, request loading, manifest writer).
//! Role: Keeps all podspec semantics in one place; the binary only parses flags.
//! Invariants: `core` performs no I/O; only `api` touches the filesystem.
pub mod api;
pub mod core;
