//! The attribute suggestion walker - the core analysis pass.
//!
//! One walker consumes the parse-tag tree of one member's last compilation
//! task and emits scored [`Suggestion`]s into its sink. The log encodes
//! nested compiler decisions as a flat sibling sequence of "set context"
//! events (`<method>`, `<bc>`, `<call>`) interleaved with the events they
//! contextualize (`<branch>`, `<inline_fail>`), plus `<parse>` subtrees for
//! callees that actually were inlined. The walk is therefore an in-order fold
//! over each child list, threading a small positional context from sibling to
//! sibling, and a depth-first recursion into nested compilation scopes with a
//! fresh context and a re-bound caller.
//!
//! Two heuristics emit suggestions:
//!
//! - **Branch uncertainty**: a branch taken with near-even probability at
//!   high execution count compiles to unpredictable control flow.
//! - **Inlining failure**: a hot callee the compiler declined to inline, for
//!   a reason the [`ReasonScores`] table considers actionable.
//!
//! Damaged attributes and unresolvable IDs are reported to the shared
//! [`Diagnostics`] collector and skipped; the only hard failure is an
//! unparseable `<bc>` position marker, which invalidates attribution for the
//! rest of the member and aborts this member's walk.
//!
//! # Examples
//!
//! ```rust,no_run
//! use hotscope::JitModel;
//! use hotscope::suggestion::AttributeSuggestionWalker;
//! # fn model_with_members() -> JitModel { JitModel::new() }
//!
//! let model = model_with_members();
//! for member in model.members() {
//!     let mut walker = AttributeSuggestionWalker::new(&model);
//!     walker.visit(&member)?;
//!     for suggestion in walker.suggestions() {
//!         println!("{}", suggestion);
//!     }
//! }
//! # Ok::<(), hotscope::Error>(())
//! ```

use std::sync::Arc;

use crate::model::diagnostics::{
    Diagnostic, DiagnosticCategory, DiagnosticSeverity, Diagnostics,
};
use crate::model::dictionary::ParseDictionary;
use crate::model::jitmodel::JitModel;
use crate::model::member::MemberRc;
use crate::model::tag::{
    Tag, TagKind, TagRc, ALWAYS, ATTR_BCI, ATTR_BRANCH_COUNT, ATTR_BRANCH_PROB, ATTR_BYTES,
    ATTR_ID, ATTR_IICOUNT, ATTR_METHOD, ATTR_REASON, NEVER,
};
use crate::suggestion::report::{Suggestion, SuggestionKind, SuggestionSink};
use crate::suggestion::scores::{
    ReasonScores, MIN_BRANCH_INVOCATIONS, MIN_INLINING_INVOCATIONS, REASON_UNCERTAIN_BRANCH,
};
use crate::Result;

/// Offset rendered for events observed before any `<bc>` position marker.
const NO_OFFSET: i32 = -1;

/// Positional context threaded through one sibling scan.
///
/// Each scan step receives the previous step's context and returns the next
/// one; the record itself is never shared or mutated in place. A nested
/// `<parse>` scope starts from a fresh context rather than inheriting this
/// one.
#[derive(Debug, Clone, Copy, Default)]
struct ScanContext<'t> {
    /// ID of the method the next inlining decision concerns
    method_id: Option<&'t str>,
    /// Most recent bytecode position marker
    bytecode_offset: Option<i32>,
}

/// Recursive walker producing suggestions for one compiled member.
///
/// Holds the member repository for ID resolution, the read-only score
/// tables, a shared diagnostics collector, and the sink the suggestions
/// accumulate in. One walker analyzes exactly one member's last compilation;
/// walking the same tree with a fresh walker yields an identical ordered
/// suggestion sequence.
pub struct AttributeSuggestionWalker<'a> {
    model: &'a JitModel,
    scores: &'static ReasonScores,
    diagnostics: Arc<Diagnostics>,
    sink: SuggestionSink,
}

impl<'a> AttributeSuggestionWalker<'a> {
    /// Creates a walker with its own diagnostics collector.
    #[must_use]
    pub fn new(model: &'a JitModel) -> Self {
        Self::with_diagnostics(model, Arc::new(Diagnostics::new()))
    }

    /// Creates a walker reporting into a shared diagnostics collector.
    #[must_use]
    pub fn with_diagnostics(model: &'a JitModel, diagnostics: Arc<Diagnostics>) -> Self {
        AttributeSuggestionWalker {
            model,
            scores: ReasonScores::global(),
            diagnostics,
            sink: SuggestionSink::new(),
        }
    }

    /// Analyzes the member's recorded compilation, if it has one.
    ///
    /// A member without a compilation produces no suggestions and no error;
    /// selecting compiled members is the driver's concern.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] when the compilation log carries an
    /// unparseable bytecode position marker.
    pub fn visit(&mut self, member: &MemberRc) -> Result<()> {
        let Some(compilation) = member.compilation() else {
            return Ok(());
        };

        for parse_tag in &compilation.parse_tags {
            self.walk(parse_tag, Some(member), &compilation.dictionary)?;
        }

        Ok(())
    }

    /// Walks one `<parse>` scope with the given caller context.
    ///
    /// This is the contract surface for drivers that hold a parse tree and
    /// dictionary directly; [`AttributeSuggestionWalker::visit`] is the
    /// member-level convenience on top of it.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] when a `<bc>` marker in the scope
    /// carries an unparseable offset.
    pub fn walk(
        &mut self,
        parse: &Tag,
        caller: Option<&MemberRc>,
        dictionary: &ParseDictionary,
    ) -> Result<()> {
        let mut context = ScanContext::default();
        for child in parse.children() {
            context = self.scan_child(child, context, caller, dictionary)?;
        }
        Ok(())
    }

    /// Returns the suggestions collected so far, in first-seen order.
    #[must_use]
    pub fn suggestions(&self) -> &[Suggestion] {
        self.sink.as_slice()
    }

    /// Consumes the walker, yielding its suggestions in first-seen order.
    #[must_use]
    pub fn into_suggestions(self) -> Vec<Suggestion> {
        self.sink.into_vec()
    }

    /// Returns the diagnostics collector this walker reports into.
    #[must_use]
    pub fn diagnostics(&self) -> &Arc<Diagnostics> {
        &self.diagnostics
    }

    /// Processes one child of a sibling scan and returns the context for the
    /// next sibling.
    fn scan_child<'t>(
        &mut self,
        child: &'t TagRc,
        context: ScanContext<'t>,
        caller: Option<&MemberRc>,
        dictionary: &ParseDictionary,
    ) -> Result<ScanContext<'t>> {
        match child.kind() {
            Some(TagKind::Method) => Ok(ScanContext {
                method_id: child.attribute(ATTR_ID),
                ..context
            }),

            Some(TagKind::Bytecode) => {
                let offset = match child.attribute(ATTR_BCI) {
                    Some(text) => text.parse::<i32>().map_err(|_| {
                        malformed_error!("Unparseable bytecode position marker '{}'", text)
                    })?,
                    None => return Err(malformed_error!("Bytecode position marker without bci")),
                };
                Ok(ScanContext {
                    bytecode_offset: Some(offset),
                    ..context
                })
            }

            Some(TagKind::Branch) => {
                self.handle_branch(child, context, caller);
                Ok(context)
            }

            Some(TagKind::Call) => Ok(ScanContext {
                method_id: child.attribute(ATTR_METHOD),
                ..context
            }),

            Some(TagKind::InlineFail) => {
                self.handle_inline_fail(child, context, caller, dictionary);
                Ok(context)
            }

            Some(TagKind::Parse) => {
                // An inlined callee's own compilation scope: fresh context,
                // caller re-bound to the scope's own method. The parent scan
                // continues with its context untouched.
                let nested_caller = match child.attribute(ATTR_METHOD) {
                    Some(id) => {
                        let resolved = self.model.lookup_member(id, dictionary);
                        if resolved.is_none() {
                            self.diagnostics.push(
                                Diagnostic::new(
                                    DiagnosticSeverity::Info,
                                    DiagnosticCategory::Resolution,
                                    "Nested compilation scope with unresolvable caller",
                                )
                                .with_method_id(id),
                            );
                        }
                        resolved
                    }
                    None => None,
                };
                self.walk(child, nested_caller.as_ref(), dictionary)?;
                Ok(context)
            }

            None => Ok(context),
        }
    }

    /// Branch-uncertainty heuristic.
    ///
    /// Emits a suggestion for a high-traffic branch whose taken-probability
    /// is close to even. Malformed attributes degrade to values that cannot
    /// pass the gate and are reported, never propagated.
    fn handle_branch(&mut self, tag: &Tag, context: ScanContext<'_>, caller: Option<&MemberRc>) {
        let mut count: u64 = 0;
        if let Some(text) = tag.attribute(ATTR_BRANCH_COUNT) {
            match text.parse::<f64>() {
                Ok(value) => count = value as u64,
                Err(_) => {
                    self.diagnostics.push(
                        Diagnostic::new(
                            DiagnosticSeverity::Warning,
                            DiagnosticCategory::Branch,
                            format!("Couldn't parse branch count attribute '{}'", text),
                        )
                        .with_offset(context.bytecode_offset.unwrap_or(NO_OFFSET)),
                    );
                }
            }
        }

        let mut probability: f64 = 0.0;
        if let Some(text) = tag.attribute(ATTR_BRANCH_PROB) {
            match text.parse::<f64>() {
                Ok(value) => probability = value,
                Err(_) => {
                    if text.eq_ignore_ascii_case(NEVER) {
                        probability = 0.0;
                    } else if text.eq_ignore_ascii_case(ALWAYS) {
                        probability = 1.0;
                    } else {
                        self.diagnostics.push(
                            Diagnostic::new(
                                DiagnosticSeverity::Warning,
                                DiagnosticCategory::Branch,
                                format!("Unrecognised branch probability '{}'", text),
                            )
                            .with_offset(context.bytecode_offset.unwrap_or(NO_OFFSET)),
                        );
                    }
                }
            }
        }

        if probability > 0.45 && probability < 0.55 && count >= MIN_BRANCH_INVOCATIONS {
            let weight = self.scores.weight(REASON_UNCERTAIN_BRANCH).unwrap_or(0.0);
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let score = (weight * count as f64).ceil() as u64;

            if score > 0 {
                let offset = context.bytecode_offset.unwrap_or(NO_OFFSET);
                let text = format!(
                    "Method contains an unpredictable branch at bytecode {} that was observed {} times and is taken with probability {}. It may be possible to modify the branch (for example by pre-sorting a collection before iterating over it) to make it more predictable.",
                    offset, count, probability
                );
                self.sink.push(Suggestion::new(
                    caller.cloned(),
                    offset,
                    text,
                    SuggestionKind::Branch,
                    score,
                ));
            }
        }
    }

    /// Inlining-failure heuristic.
    ///
    /// Scores the pending callee's missed inlining opportunity by how hot the
    /// callee is and how actionable the compiler's reason is. Resolution
    /// misses skip the event; a missing or unparseable invocation count skips
    /// it with a warning.
    fn handle_inline_fail(
        &mut self,
        tag: &Tag,
        context: ScanContext<'_>,
        caller: Option<&MemberRc>,
        dictionary: &ParseDictionary,
    ) {
        let Some(method_id) = context.method_id else {
            return;
        };
        let Some(callee) = self.model.lookup_member(method_id, dictionary) else {
            return;
        };
        let Some(method_tag) = dictionary.method(method_id) else {
            return;
        };

        let Some(invocations_attr) = method_tag.attribute(ATTR_IICOUNT) else {
            self.diagnostics.push(
                Diagnostic::new(
                    DiagnosticSeverity::Warning,
                    DiagnosticCategory::Inlining,
                    "Invocation count missing",
                )
                .with_method_id(method_id),
            );
            return;
        };
        let invocation_count: u64 = match invocations_attr.parse() {
            Ok(value) => value,
            Err(_) => {
                self.diagnostics.push(
                    Diagnostic::new(
                        DiagnosticSeverity::Warning,
                        DiagnosticCategory::Inlining,
                        format!("Couldn't parse invocation count '{}'", invocations_attr),
                    )
                    .with_method_id(method_id),
                );
                return;
            }
        };

        if invocation_count < MIN_INLINING_INVOCATIONS {
            return;
        }

        let reason = tag.attribute(ATTR_REASON);
        let reason_text = reason.unwrap_or("unknown");

        let weight = match reason.and_then(|r| self.scores.weight(r)) {
            Some(weight) => weight,
            None => {
                self.diagnostics.push(
                    Diagnostic::new(
                        DiagnosticSeverity::Info,
                        DiagnosticCategory::Inlining,
                        format!("No score is set for reason: {}", reason_text),
                    )
                    .with_method_id(method_id),
                );
                0.0
            }
        };

        let offset = context.bytecode_offset.unwrap_or(NO_OFFSET);
        let mut text = format!(
            "The call at bytecode {} to\nClass: {}\nMember: {}\nwas not inlined for reason: '{}'\n",
            offset,
            callee.fully_qualified_class_name(),
            callee.unqualified_signature(),
            reason_text
        );
        if let Some(explanation) = reason.and_then(|r| self.scores.explanation(r)) {
            text.push_str(explanation);
            text.push('\n');
        }
        text.push_str(&format!("Invocations: {}\n", invocation_count));
        text.push_str(&format!(
            "Size of callee bytecode: {}\n",
            method_tag.attribute(ATTR_BYTES).unwrap_or("unknown")
        ));

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let score = (weight * invocation_count as f64).ceil() as u64;

        if score > 0 {
            self.sink.push(Suggestion::new(
                caller.cloned(),
                offset,
                text,
                SuggestionKind::Inlining,
                score,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::member::{Compilation, CompiledMember};
    use crate::model::tag::TagBuilder;
    use crate::suggestion::scores::{
        REASON_EXEC_LESS_MIN_INLINING_THRESHOLD, REASON_HOT_METHOD_TOO_BIG,
    };
    use crate::test::factories::{
        bc_tag, branch_tag, call_tag, dictionary_with_method, dictionary_with_method_attrs,
        inline_fail_tag, string_index_of,
    };

    fn caller_member() -> MemberRc {
        CompiledMember::new("com.example.Hot", "run", "void", Vec::new())
    }

    #[test]
    fn branch_in_uncertainty_window_scores_half_count() {
        let model = JitModel::new();
        let caller = caller_member();
        let parse = TagBuilder::new("parse")
            .child(bc_tag(17))
            .child(branch_tag("2000", "0.5"))
            .build();

        let mut walker = AttributeSuggestionWalker::new(&model);
        walker
            .walk(&parse, Some(&caller), &ParseDictionary::new())
            .unwrap();

        let suggestions = walker.suggestions();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].kind(), SuggestionKind::Branch);
        assert_eq!(suggestions[0].score(), 1000);
        assert_eq!(suggestions[0].bytecode_offset(), 17);
        assert!(suggestions[0].text().contains("at bytecode 17"));
        assert!(suggestions[0].text().contains("2000 times"));
        assert!(suggestions[0].text().contains("probability 0.5"));
    }

    #[test]
    fn branch_outside_window_or_cold_is_ignored() {
        let model = JitModel::new();
        let caller = caller_member();
        let parse = TagBuilder::new("parse")
            .child(bc_tag(1))
            .child(branch_tag("2000", "0.8"))
            .child(branch_tag("999", "0.5"))
            .child(branch_tag("500000", "0.45"))
            .child(branch_tag("500000", "0.55"))
            .build();

        let mut walker = AttributeSuggestionWalker::new(&model);
        walker
            .walk(&parse, Some(&caller), &ParseDictionary::new())
            .unwrap();
        assert!(walker.suggestions().is_empty());
    }

    #[test]
    fn branch_probability_sentinels_suppress() {
        let model = JitModel::new();
        let caller = caller_member();
        let parse = TagBuilder::new("parse")
            .child(bc_tag(1))
            .child(branch_tag("1000000", "never"))
            .child(branch_tag("1000000", "ALWAYS"))
            .build();

        let mut walker = AttributeSuggestionWalker::new(&model);
        walker
            .walk(&parse, Some(&caller), &ParseDictionary::new())
            .unwrap();
        assert!(walker.suggestions().is_empty());
        assert!(!walker.diagnostics().has_warnings());
    }

    #[test]
    fn malformed_branch_attributes_degrade_with_warnings() {
        let model = JitModel::new();
        let caller = caller_member();
        let parse = TagBuilder::new("parse")
            .child(bc_tag(1))
            .child(branch_tag("many", "0.5"))
            .child(branch_tag("2000", "fifty-fifty"))
            .build();

        let mut walker = AttributeSuggestionWalker::new(&model);
        walker
            .walk(&parse, Some(&caller), &ParseDictionary::new())
            .unwrap();

        assert!(walker.suggestions().is_empty());
        assert_eq!(walker.diagnostics().warning_count(), 2);
    }

    #[test]
    fn fractional_branch_count_truncates() {
        let model = JitModel::new();
        let caller = caller_member();
        let parse = TagBuilder::new("parse")
            .child(bc_tag(1))
            .child(branch_tag("2000.75", "0.5"))
            .build();

        let mut walker = AttributeSuggestionWalker::new(&model);
        walker
            .walk(&parse, Some(&caller), &ParseDictionary::new())
            .unwrap();
        assert_eq!(walker.suggestions()[0].score(), 1000);
    }

    #[test]
    fn malformed_bytecode_marker_is_fatal() {
        let model = JitModel::new();
        let caller = caller_member();
        let parse = TagBuilder::new("parse")
            .child(TagBuilder::new("bc").attribute(ATTR_BCI, "seven").build())
            .build();

        let mut walker = AttributeSuggestionWalker::new(&model);
        let result = walker.walk(&parse, Some(&caller), &ParseDictionary::new());
        assert!(matches!(result, Err(crate::Error::Malformed { .. })));
    }

    #[test]
    fn inline_fail_scores_hot_callee() {
        let model = JitModel::new();
        let callee = string_index_of();
        model.register_member(callee.clone());
        let dictionary = dictionary_with_method("9", &callee, 70, 5000);

        let caller = caller_member();
        let parse = TagBuilder::new("parse")
            .child(bc_tag(42))
            .child(call_tag("9"))
            .child(inline_fail_tag(REASON_HOT_METHOD_TOO_BIG))
            .build();

        let mut walker = AttributeSuggestionWalker::new(&model);
        walker.walk(&parse, Some(&caller), &dictionary).unwrap();

        let suggestions = walker.suggestions();
        assert_eq!(suggestions.len(), 1);
        let suggestion = &suggestions[0];
        assert_eq!(suggestion.kind(), SuggestionKind::Inlining);
        assert_eq!(suggestion.score(), 5000);
        assert_eq!(suggestion.bytecode_offset(), 42);
        assert_eq!(suggestion.caller(), Some(&caller));
        assert!(suggestion.text().contains("The call at bytecode 42"));
        assert!(suggestion.text().contains("Class: java.lang.String"));
        assert!(suggestion
            .text()
            .contains("Member: int indexOf(java.lang.String)"));
        assert!(suggestion
            .text()
            .contains("was not inlined for reason: 'hot method too big'"));
        assert!(suggestion.text().contains("refactoring the callee"));
        assert!(suggestion.text().contains("Invocations: 5000"));
        assert!(suggestion.text().contains("Size of callee bytecode: 70"));
    }

    #[test]
    fn inline_fail_weight_rounds_up() {
        let model = JitModel::new();
        let callee = string_index_of();
        model.register_member(callee.clone());
        let dictionary = dictionary_with_method("9", &callee, 70, 1500);

        let caller = caller_member();
        let parse = TagBuilder::new("parse")
            .child(bc_tag(3))
            .child(call_tag("9"))
            .child(inline_fail_tag(REASON_EXEC_LESS_MIN_INLINING_THRESHOLD))
            .build();

        let mut walker = AttributeSuggestionWalker::new(&model);
        walker.walk(&parse, Some(&caller), &dictionary).unwrap();
        assert_eq!(walker.suggestions()[0].score(), 300);
    }

    #[test]
    fn unknown_reason_suppresses_with_info() {
        let model = JitModel::new();
        let callee = string_index_of();
        model.register_member(callee.clone());
        let dictionary = dictionary_with_method("9", &callee, 70, 100000);

        let caller = caller_member();
        let parse = TagBuilder::new("parse")
            .child(bc_tag(3))
            .child(call_tag("9"))
            .child(inline_fail_tag("inlining prohibited by policy"))
            .build();

        let mut walker = AttributeSuggestionWalker::new(&model);
        walker.walk(&parse, Some(&caller), &dictionary).unwrap();

        assert!(walker.suggestions().is_empty());
        assert_eq!(walker.diagnostics().info_count(), 1);
    }

    #[test]
    fn missing_invocation_count_skips_with_warning() {
        let model = JitModel::new();
        let callee = string_index_of();
        model.register_member(callee.clone());
        let dictionary = dictionary_with_method_attrs("9", &callee, Some(70), None);

        let caller = caller_member();
        let parse = TagBuilder::new("parse")
            .child(bc_tag(3))
            .child(call_tag("9"))
            .child(inline_fail_tag(REASON_HOT_METHOD_TOO_BIG))
            .build();

        let mut walker = AttributeSuggestionWalker::new(&model);
        walker.walk(&parse, Some(&caller), &dictionary).unwrap();

        assert!(walker.suggestions().is_empty());
        assert_eq!(walker.diagnostics().warning_count(), 1);
    }

    #[test]
    fn malformed_invocation_count_skips_with_warning() {
        let model = JitModel::new();
        let callee = string_index_of();
        model.register_member(callee.clone());
        let dictionary = dictionary_with_method_attrs("9", &callee, Some(70), Some("lots"));

        let caller = caller_member();
        let parse = TagBuilder::new("parse")
            .child(bc_tag(3))
            .child(call_tag("9"))
            .child(inline_fail_tag(REASON_HOT_METHOD_TOO_BIG))
            .build();

        let mut walker = AttributeSuggestionWalker::new(&model);
        walker.walk(&parse, Some(&caller), &dictionary).unwrap();

        assert!(walker.suggestions().is_empty());
        assert_eq!(walker.diagnostics().warning_count(), 1);
    }

    #[test]
    fn cold_callee_is_ignored() {
        let model = JitModel::new();
        let callee = string_index_of();
        model.register_member(callee.clone());
        let dictionary = dictionary_with_method("9", &callee, 70, 999);

        let caller = caller_member();
        let parse = TagBuilder::new("parse")
            .child(bc_tag(3))
            .child(call_tag("9"))
            .child(inline_fail_tag(REASON_HOT_METHOD_TOO_BIG))
            .build();

        let mut walker = AttributeSuggestionWalker::new(&model);
        walker.walk(&parse, Some(&caller), &dictionary).unwrap();
        assert!(walker.suggestions().is_empty());
    }

    #[test]
    fn unresolved_callee_skips_silently_and_walk_continues() {
        let model = JitModel::new();
        let caller = caller_member();
        // Callee ID 9 resolves to nothing; the branch after it must still score.
        let parse = TagBuilder::new("parse")
            .child(bc_tag(3))
            .child(call_tag("9"))
            .child(inline_fail_tag(REASON_HOT_METHOD_TOO_BIG))
            .child(bc_tag(8))
            .child(branch_tag("2000", "0.5"))
            .build();

        let mut walker = AttributeSuggestionWalker::new(&model);
        walker
            .walk(&parse, Some(&caller), &ParseDictionary::new())
            .unwrap();

        let suggestions = walker.suggestions();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].kind(), SuggestionKind::Branch);
        assert_eq!(suggestions[0].bytecode_offset(), 8);
    }

    #[test]
    fn method_marker_binds_context_like_call() {
        let model = JitModel::new();
        let callee = string_index_of();
        model.register_member(callee.clone());
        let dictionary = dictionary_with_method("9", &callee, 70, 5000);

        let caller = caller_member();
        let parse = TagBuilder::new("parse")
            .child(bc_tag(3))
            .child(TagBuilder::new("method").attribute(ATTR_ID, "9").build())
            .child(inline_fail_tag(REASON_HOT_METHOD_TOO_BIG))
            .build();

        let mut walker = AttributeSuggestionWalker::new(&model);
        walker.walk(&parse, Some(&caller), &dictionary).unwrap();
        assert_eq!(walker.suggestions().len(), 1);
    }

    #[test]
    fn inline_fail_without_pending_method_is_ignored() {
        let model = JitModel::new();
        let caller = caller_member();
        let parse = TagBuilder::new("parse")
            .child(bc_tag(3))
            .child(inline_fail_tag(REASON_HOT_METHOD_TOO_BIG))
            .build();

        let mut walker = AttributeSuggestionWalker::new(&model);
        walker
            .walk(&parse, Some(&caller), &ParseDictionary::new())
            .unwrap();
        assert!(walker.suggestions().is_empty());
    }

    #[test]
    fn identical_events_deduplicate() {
        let model = JitModel::new();
        let callee = string_index_of();
        model.register_member(callee.clone());
        let dictionary = dictionary_with_method("9", &callee, 70, 5000);

        let caller = caller_member();
        let parse = TagBuilder::new("parse")
            .child(bc_tag(3))
            .child(call_tag("9"))
            .child(inline_fail_tag(REASON_HOT_METHOD_TOO_BIG))
            .child(call_tag("9"))
            .child(inline_fail_tag(REASON_HOT_METHOD_TOO_BIG))
            .build();

        let mut walker = AttributeSuggestionWalker::new(&model);
        walker.walk(&parse, Some(&caller), &dictionary).unwrap();
        assert_eq!(walker.suggestions().len(), 1);
    }

    #[test]
    fn nested_parse_rebinds_caller_with_fresh_context() {
        let model = JitModel::new();
        let nested_caller = string_index_of();
        model.register_member(nested_caller.clone());
        let dictionary = dictionary_with_method("9", &nested_caller, 70, 5000);

        // The nested scope carries its own bc marker; the branch inside must
        // attribute to the nested caller and the nested offset, not the
        // parent's.
        let nested = TagBuilder::new("parse")
            .attribute(ATTR_METHOD, "9")
            .child(bc_tag(5))
            .child(branch_tag("4000", "0.5"))
            .build();
        let parse = TagBuilder::new("parse")
            .child(bc_tag(90))
            .child(nested)
            .child(branch_tag("6000", "0.5"))
            .build();

        let caller = caller_member();
        let mut walker = AttributeSuggestionWalker::new(&model);
        walker.walk(&parse, Some(&caller), &dictionary).unwrap();

        let suggestions = walker.suggestions();
        assert_eq!(suggestions.len(), 2);

        // Nested scope is evaluated in-pass, so it appears first.
        assert_eq!(suggestions[0].bytecode_offset(), 5);
        assert_eq!(suggestions[0].caller(), Some(&nested_caller));
        assert_eq!(suggestions[0].score(), 2000);

        assert_eq!(suggestions[1].bytecode_offset(), 90);
        assert_eq!(suggestions[1].caller(), Some(&caller));
        assert_eq!(suggestions[1].score(), 3000);
    }

    #[test]
    fn unresolvable_nested_caller_attributes_to_none() {
        let model = JitModel::new();
        let nested = TagBuilder::new("parse")
            .attribute(ATTR_METHOD, "404")
            .child(bc_tag(2))
            .child(branch_tag("2000", "0.5"))
            .build();
        let parse = TagBuilder::new("parse").child(nested).build();

        let caller = caller_member();
        let mut walker = AttributeSuggestionWalker::new(&model);
        walker
            .walk(&parse, Some(&caller), &ParseDictionary::new())
            .unwrap();

        let suggestions = walker.suggestions();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].caller(), None);
        assert_eq!(walker.diagnostics().info_count(), 1);
    }

    #[test]
    fn visit_without_compilation_is_a_no_op() {
        let model = JitModel::new();
        let member = caller_member();
        let mut walker = AttributeSuggestionWalker::new(&model);
        walker.visit(&member).unwrap();
        assert!(walker.suggestions().is_empty());
    }

    #[test]
    fn visit_walks_all_parse_tags_of_the_task() {
        let model = JitModel::new();
        let member = caller_member();
        let first = TagBuilder::new("parse")
            .child(bc_tag(1))
            .child(branch_tag("2000", "0.5"))
            .build();
        let second = TagBuilder::new("parse")
            .child(bc_tag(2))
            .child(branch_tag("3000", "0.5"))
            .build();
        member
            .set_compilation(Compilation::new(
                "77",
                vec![first, second],
                ParseDictionary::new(),
            ))
            .unwrap();

        let mut walker = AttributeSuggestionWalker::new(&model);
        walker.visit(&member).unwrap();
        assert_eq!(walker.suggestions().len(), 2);
    }

    #[test]
    fn rewalking_is_idempotent() {
        let model = JitModel::new();
        let callee = string_index_of();
        model.register_member(callee.clone());
        let dictionary = dictionary_with_method("9", &callee, 70, 5000);

        let caller = caller_member();
        let parse = TagBuilder::new("parse")
            .child(bc_tag(3))
            .child(call_tag("9"))
            .child(inline_fail_tag(REASON_HOT_METHOD_TOO_BIG))
            .child(bc_tag(8))
            .child(branch_tag("2000", "0.5"))
            .build();

        let mut first = AttributeSuggestionWalker::new(&model);
        first.walk(&parse, Some(&caller), &dictionary).unwrap();
        let mut second = AttributeSuggestionWalker::new(&model);
        second.walk(&parse, Some(&caller), &dictionary).unwrap();

        assert_eq!(first.suggestions(), second.suggestions());
    }
}
