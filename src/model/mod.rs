//! Data model for compilation-log analysis.
//!
//! This module contains the inputs the suggestion walker consumes: the
//! immutable tag trees a compilation task is made of, the per-task ID side
//! table, the member identities those IDs resolve to, and the process-wide
//! repository tying them together. Everything here is populated by external
//! readers (log tokenizer, class metadata loader) and treated read-only by
//! the analysis itself.
//!
//! # Key Components
//!
//! - [`JitModel`](jitmodel::JitModel) - Repository of members and the ID resolver
//! - [`tag`] - Immutable log-tree nodes and the tag kinds the walker dispatches on
//! - [`dictionary`] - Per-compilation ID-to-declaration side table
//! - [`member`] - Member identities and their recorded compilations
//! - [`diagnostics`] - Lenient-analysis diagnostics collection
//!
//! # Examples
//!
//! ```rust
//! use hotscope::JitModel;
//! use hotscope::model::member::CompiledMember;
//!
//! let model = JitModel::new();
//! model.register_member(CompiledMember::new(
//!     "java.lang.String",
//!     "length",
//!     "int",
//!     Vec::new(),
//! ));
//! assert_eq!(model.member_count(), 1);
//! ```

/// Implementation of the diagnostics collection for lenient log analysis
pub mod diagnostics;
/// Implementation of the per-compilation ID side table
pub mod dictionary;
/// Implementation of the member repository and ID resolver
pub mod jitmodel;
/// Implementation of member identities and compilation records
pub mod member;
/// Implementation of the immutable log tag tree
pub mod tag;
