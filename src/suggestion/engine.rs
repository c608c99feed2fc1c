//! Whole-model suggestion reports.
//!
//! The walker analyzes one member at a time; a [`SuggestionReport`] runs it
//! across every compiled member of a [`JitModel`]. Members are independent,
//! so the fan-out is parallel - one walker and one sink per member, a shared
//! diagnostics collector, no other cross-member state. A member whose walk
//! fails (malformed position marker in its log) costs only that member's
//! suggestions: the failure is recorded as an error diagnostic and the report
//! carries on.
//!
//! The report concatenates per-member results in the model's member order, so
//! building it twice over the same model yields the same sequence. It does
//! not sort by score - ranking and cross-category presentation belong to the
//! consumer.
//!
//! # Examples
//!
//! ```rust,no_run
//! use hotscope::suggestion::SuggestionReport;
//! use hotscope::JitModel;
//! # fn model_from_log() -> JitModel { JitModel::new() }
//!
//! let model = model_from_log();
//! let report = SuggestionReport::build(&model);
//!
//! println!("{} suggestions", report.len());
//! for suggestion in report.suggestions() {
//!     println!("{}", suggestion);
//! }
//! if report.diagnostics().has_errors() {
//!     eprintln!("some members could not be analyzed");
//! }
//! ```

use std::sync::Arc;

use rayon::prelude::*;

use crate::model::diagnostics::{DiagnosticCategory, Diagnostics};
use crate::model::jitmodel::JitModel;
use crate::suggestion::report::Suggestion;
use crate::suggestion::walker::AttributeSuggestionWalker;

/// Suggestions for every compiled member of a model, in member order.
#[derive(Debug)]
pub struct SuggestionReport {
    suggestions: Vec<Suggestion>,
    diagnostics: Arc<Diagnostics>,
}

impl SuggestionReport {
    /// Builds a report with its own diagnostics collector.
    #[must_use]
    pub fn build(model: &JitModel) -> Self {
        Self::build_with_diagnostics(model, Arc::new(Diagnostics::new()))
    }

    /// Builds a report, recording diagnostics into a shared collector.
    #[must_use]
    pub fn build_with_diagnostics(model: &JitModel, diagnostics: Arc<Diagnostics>) -> Self {
        let members = model.members();

        let per_member: Vec<Vec<Suggestion>> = members
            .par_iter()
            .map(|member| {
                if !member.is_compiled() {
                    return Vec::new();
                }

                let mut walker =
                    AttributeSuggestionWalker::with_diagnostics(model, Arc::clone(&diagnostics));
                match walker.visit(member) {
                    Ok(()) => walker.into_suggestions(),
                    Err(error) => {
                        diagnostics.error(
                            DiagnosticCategory::Compilation,
                            format!(
                                "Suggestion walk failed for {}: {}",
                                member.qualified_signature(),
                                error
                            ),
                        );
                        Vec::new()
                    }
                }
            })
            .collect();

        SuggestionReport {
            suggestions: per_member.into_iter().flatten().collect(),
            diagnostics,
        }
    }

    /// Returns all suggestions, grouped by member in model order.
    #[must_use]
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    /// Returns the number of suggestions in the report.
    #[must_use]
    pub fn len(&self) -> usize {
        self.suggestions.len()
    }

    /// Returns true if no member produced a suggestion.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }

    /// Returns the diagnostics collected while building the report.
    #[must_use]
    pub fn diagnostics(&self) -> &Arc<Diagnostics> {
        &self.diagnostics
    }

    /// Consumes the report, yielding the suggestions.
    #[must_use]
    pub fn into_suggestions(self) -> Vec<Suggestion> {
        self.suggestions
    }
}
