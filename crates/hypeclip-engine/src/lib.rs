//! The pure computational core of HypeClip.
//!
//! This crate provides:
//! - Keyword matching over transcript tokens (`matcher`)
//! - Merging of keyword hits into padded clip intervals (`merger`)
//!
//! Both are synchronous, single-pass computations with no I/O and no
//! shared mutable state.

pub mod matcher;
pub mod merger;

pub use matcher::{KeywordSet, MatchPolicy};
pub use merger::{merge_hits, MergePolicy};
