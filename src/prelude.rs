//! # hotscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types
//! from the hotscope library. Import this module to get quick access to the
//! essential types for compilation-log analysis.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all hotscope operations
pub use crate::Error;

/// The result type used throughout hotscope
pub use crate::Result;

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// Repository of compiled members and the log ID resolver
pub use crate::JitModel;

/// Whole-model suggestion report builder
pub use crate::suggestion::SuggestionReport;

/// Per-member suggestion walker
pub use crate::suggestion::AttributeSuggestionWalker;

// ================================================================================================
// Model - Core Types
// ================================================================================================

/// Immutable log-tree node and construction
pub use crate::model::tag::{Tag, TagBuilder, TagKind, TagRc};

/// Per-compilation ID side table
pub use crate::model::dictionary::ParseDictionary;

/// Member identities and compilation records
pub use crate::model::member::{Compilation, CompilationRc, CompiledMember, MemberRc};

/// Diagnostics collection for lenient analysis
pub use crate::model::diagnostics::{
    Diagnostic, DiagnosticCategory, DiagnosticSeverity, Diagnostics,
};

// ================================================================================================
// Suggestions
// ================================================================================================

/// Suggestion records and the per-member sink
pub use crate::suggestion::{Suggestion, SuggestionKind, SuggestionSink};

/// Static reason score and explanation tables
pub use crate::suggestion::ReasonScores;
