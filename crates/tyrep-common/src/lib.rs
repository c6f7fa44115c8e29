//! Common types and utilities for the tyrep transform.
//!
//! This crate provides the foundational types used across all tyrep crates:
//! - String interning (`Atom`, `Interner`)
//! - Source spans (`Span`)
//! - Diagnostics (`Diagnostic`, `DiagnosticCategory`, message codes)

// String interning for identifier deduplication
pub mod interner;
pub use interner::{Atom, Interner};

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Diagnostics - the transform never fails; it reports through these
pub mod diagnostics;
pub use diagnostics::{
    Diagnostic, DiagnosticCategory, diagnostic_codes, format_message, get_message_template,
};
