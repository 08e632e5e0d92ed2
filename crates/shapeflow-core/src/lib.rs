//! # Shapeflow Core
//!
//! Core types for Shapeflow process graphs. This crate defines the typed
//! element model produced by the translator, the arena that owns those
//! elements, and the element factory that maps diagram stencil identifiers
//! onto empty element instances.

pub mod identifier;
pub mod semantic;
pub mod stencil;
