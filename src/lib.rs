// Copyright 2026 Hotscope Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![allow(dead_code)]

//! # hotscope
//!
//! A framework for analyzing HotSpot JIT compilation logs. `hotscope` consumes the
//! structured diagnostic output the JVM emits while compiling hot methods (parse-tag
//! trees of per-compilation events: bytecode position markers, branch statistics,
//! call sites and inlining decisions) and turns it into a ranked list of
//! human-readable improvement suggestions for a performance engineer.
//!
//! ## Features
//!
//! - **Per-member analysis** - Walk one compilation task's tag tree and score its
//!   missed optimization opportunities
//! - **Inlining-failure scoring** - Weight the server compiler's inlining messages
//!   by how hot and how actionable they are
//! - **Branch-uncertainty detection** - Surface high-traffic branches taken with
//!   near-even probability
//! - **ID resolution** - Resolve the log's opaque method IDs through per-task
//!   dictionaries to member identities
//! - **Lenient by design** - Damaged attributes and dangling IDs are collected as
//!   diagnostics; a broken compilation costs only its own member's suggestions
//! - **Parallel reports** - Fan the walker out across every compiled member of a
//!   model with deterministic output order
//!
//! ## Quick Start
//!
//! Add `hotscope` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! hotscope = "0.1"
//! ```
//!
//! ### Using the Prelude
//!
//! For convenient access to the most commonly used types, import the prelude:
//!
//! ```rust,no_run
//! use hotscope::prelude::*;
//! # fn model_from_log() -> JitModel { JitModel::new() }
//!
//! // Model populated by your log reader
//! let model = model_from_log();
//!
//! let report = SuggestionReport::build(&model);
//! for suggestion in report.suggestions() {
//!     println!("{}", suggestion);
//! }
//! ```
//!
//! ### Analyzing a Single Member
//!
//! ```rust,no_run
//! use hotscope::suggestion::AttributeSuggestionWalker;
//! use hotscope::JitModel;
//! # fn model_from_log() -> JitModel { JitModel::new() }
//!
//! let model = model_from_log();
//!
//! for member in model.members() {
//!     let mut walker = AttributeSuggestionWalker::new(&model);
//!     walker.visit(&member)?;
//!
//!     for suggestion in walker.suggestions() {
//!         println!("score {}: {}", suggestion.score(), suggestion.text());
//!     }
//! }
//! # Ok::<(), hotscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! `hotscope` is organized into two key modules:
//!
//! - [`model`] - The inputs: immutable tag trees, per-task ID dictionaries, member
//!   identities, the member repository, and diagnostics collection
//! - [`suggestion`] - The analysis: the per-member walker, the scoring tables, the
//!   suggestion records, and the whole-model report builder
//!
//! The log tokenizer that produces tag trees and the class-metadata reader that
//! populates the model are external collaborators: `hotscope` starts where their
//! output ends. [`model::tag::TagBuilder`] and the registration methods on
//! [`JitModel`] are the seam those readers feed.
//!
//! ## Error Handling
//!
//! Operations return [`Result<T, Error>`](Result). Almost all log damage is
//! recovered locally and reported through
//! [`model::diagnostics::Diagnostics`]; an [`Error`] surfaces only when a
//! compilation's position markers are unusable, and then only that member's
//! analysis is lost.

#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// This module provides a curated selection of the most frequently used types
/// from across the hotscope library, allowing for convenient glob imports.
///
/// # Example
///
/// ```rust,no_run
/// use hotscope::prelude::*;
/// # fn model_from_log() -> JitModel { JitModel::new() }
///
/// let model = model_from_log();
/// let report = SuggestionReport::build(&model);
/// println!("{} suggestions", report.len());
/// ```
pub mod prelude;

/// Data model for compilation-log analysis
///
/// This module contains the inputs the suggestion walker consumes and the
/// repository tying them together:
///
/// - [`model::tag`] - Immutable log-tree nodes and the tag kinds the walker
///   dispatches on
/// - [`model::dictionary`] - Per-compilation ID-to-declaration side tables
/// - [`model::member`] - Member identities and their recorded compilations
/// - [`model::jitmodel`] - The member repository and ID resolver
/// - [`model::diagnostics`] - Lenient-analysis diagnostics collection
pub mod model;

/// Suggestion generation from compilation-log parse trees
///
/// This module turns compilation tag trees into scored suggestions:
///
/// - [`suggestion::walker`] - The recursive per-member analysis pass
/// - [`suggestion::engine`] - Parallel whole-model report building
/// - [`suggestion::report`] - Suggestion records and the per-member sink
/// - [`suggestion::scores`] - Static reason-weight and explanation tables
pub mod suggestion;

/// `hotscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
/// This is used throughout the library for all fallible operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error type for all compilation-log analysis operations.
///
/// See the [`Error`] enum for all possible error conditions.
///
/// # Example
///
/// ```rust,no_run
/// use hotscope::{Error, JitModel};
/// use hotscope::suggestion::AttributeSuggestionWalker;
/// # fn member() -> hotscope::model::member::MemberRc { unimplemented!() }
///
/// let model = JitModel::new();
/// let mut walker = AttributeSuggestionWalker::new(&model);
/// match walker.visit(&member()) {
///     Ok(()) => println!("{} suggestions", walker.suggestions().len()),
///     Err(Error::Malformed { message, .. }) => println!("Malformed: {}", message),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub use error::Error;

/// Main entry point for analyzing a population of compiled members.
///
/// See [`model::jitmodel::JitModel`] for registration, lookup and ID resolution.
///
/// # Example
///
/// ```rust
/// use hotscope::JitModel;
/// use hotscope::model::member::CompiledMember;
///
/// let model = JitModel::new();
/// model.register_member(CompiledMember::new(
///     "java.lang.String",
///     "length",
///     "int",
///     Vec::new(),
/// ));
/// assert_eq!(model.member_count(), 1);
/// ```
pub use model::jitmodel::JitModel;
