//! Suggestion generation from compilation-log parse trees.
//!
//! This module turns the diagnostic tag trees of JIT compilation tasks into
//! ranked, human-readable improvement suggestions for a performance engineer.
//! The [`AttributeSuggestionWalker`](walker::AttributeSuggestionWalker)
//! analyzes one compiled member; [`SuggestionReport`](engine::SuggestionReport)
//! fans the walker out across a whole model.
//!
//! # Key Components
//!
//! - [`walker`] - The recursive per-member analysis pass
//! - [`engine`] - Parallel whole-model report building
//! - [`report`] - Suggestion records and the per-member sink
//! - [`scores`] - Static reason-weight and explanation tables
//!
//! # Examples
//!
//! ```rust,no_run
//! use hotscope::suggestion::{AttributeSuggestionWalker, SuggestionKind};
//! use hotscope::JitModel;
//! # fn model_with_members() -> JitModel { JitModel::new() }
//!
//! let model = model_with_members();
//! for member in model.members() {
//!     let mut walker = AttributeSuggestionWalker::new(&model);
//!     walker.visit(&member)?;
//!     for suggestion in walker.suggestions() {
//!         if suggestion.kind() == SuggestionKind::Inlining {
//!             println!("{}", suggestion.text());
//!         }
//!     }
//! }
//! # Ok::<(), hotscope::Error>(())
//! ```

/// Implementation of the whole-model report builder
pub mod engine;
/// Implementation of suggestion records and the per-member sink
pub mod report;
/// Implementation of the static reason score and explanation tables
pub mod scores;
/// Implementation of the per-member suggestion walker
pub mod walker;

pub use engine::SuggestionReport;
pub use report::{Suggestion, SuggestionKind, SuggestionSink};
pub use scores::ReasonScores;
pub use walker::AttributeSuggestionWalker;
