//! Shared code building utilities for the tagtree compiler.
//!
//! This crate provides the language-agnostic primitives used by target
//! backends (e.g., `tagtree-jsx`):
//!
//! - [`builder`] - Line-oriented code building ([`CodeBuilder`]) and
//!   indentation handling ([`Indent`])
//! - [`naming`] - Identifier checks and case conversion

pub mod builder;
pub mod naming;

pub use builder::{CodeBuilder, Indent};
