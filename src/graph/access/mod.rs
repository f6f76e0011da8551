//! Internal graph building blocks.
//!
//! This module is intentionally `pub(crate)` so the graph variants can share
//! visited sets and union-find scratch state without exposing them as part of
//! the public API surface.

pub(crate) mod disjoint_set;
pub(crate) mod visited;
