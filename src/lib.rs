//! Workspace-level integration tests for benchrun live in `tests/`.
