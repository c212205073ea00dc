//! Component node model for the tagtree compiler.
//!
//! This crate provides the types shared between input loading and the
//! target backends: the [`Node`] tree handed to the renderer, and the
//! [`ModuleSpec`] records describing imports.
//!
//! # Architecture
//!
//! ```text
//! JSON tree → tagtree-jsx (classify) → tagtree-ir (Node) → tagtree-jsx (render) → JSX
//! ```
//!
//! Nodes are immutable once built. Every variant of [`Node`] corresponds to
//! exactly one node kind, so renderers never have to guess a node's shape.

mod module;
mod node;

pub use module::ModuleSpec;
pub use node::{
    ConditionalNode, IterableKind, IterableNode, MatchCase, MatchKey, MatchNode, Node, NodeKind,
    Tag,
};
