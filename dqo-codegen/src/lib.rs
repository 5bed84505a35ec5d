//! Rendering engine for the DQO accessor generator.
//!
//! Generated source is modelled as a tree of [`Line`]s: leaf statements
//! ([`Line::Body`]) and brace-delimited blocks ([`Line::Block`]) holding
//! nested lines. Rendering threads the indentation depth as an argument,
//! so a tree can be rendered any number of times from any thread.
//!
//! # Module Organization
//!
//! - [`Indent`] - Indentation configuration
//! - [`Line`] - The composite line tree
//! - [`Renderable`] - Trait for anything that lowers to lines

mod render;

pub use render::{Indent, Line, Renderable};
