//! Compute compact RFC 6902 JSON Patches between two `serde_json::Value` trees.
//!
//! The diff runs a structural comparison first and then alternates two
//! optimization passes over the raw operations: one fuses equal add/remove
//! pairs into `move` operations, the other decomposes adjacent remove/add
//! pairs at the same location into a nested diff.

pub mod diff;
pub mod patch;
pub mod path;
pub mod resolve;

pub use diff::{AlignmentStrategy, DiffOptions, Patch, PatchOp, diff, diff_with_options};
pub use path::{Pointer, Segment};
