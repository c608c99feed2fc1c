//! Static scoring configuration for suggestion generation.
//!
//! The compiler reports why it declined to inline a call as a literal reason
//! string. This module maps the known reason strings to a weight in `[0.0,
//! 1.0]` expressing how actionable that reason is for a performance engineer,
//! and to an optional explanation rendered into the suggestion text. Reasons
//! carrying weight `0.0` (and reasons missing from the table entirely) never
//! produce a suggestion.
//!
//! The reason strings are the server compiler's inlining messages; see the
//! HotSpot internals wiki page "Server Compiler Inlining Messages" for the
//! catalogue they are drawn from.
//!
//! The tables are built once per process and shared read-only through
//! [`ReasonScores::global`]; concurrent walkers read them without
//! synchronization.

use std::collections::HashMap;
use std::sync::OnceLock;

/// The callee is hot and exceeds the hot-method inline size limit.
pub const REASON_HOT_METHOD_TOO_BIG: &str = "hot method too big";
/// The callee exceeds the regular inline size limit.
pub const REASON_TOO_BIG: &str = "too big";
/// The callee was already compiled into a big method.
pub const REASON_ALREADY_COMPILED_INTO_A_BIG_METHOD: &str = "already compiled into a big method";
/// The callee was already compiled into a medium method.
pub const REASON_ALREADY_COMPILED_INTO_A_MEDIUM_METHOD: &str =
    "already compiled into a medium method";
/// The callee was never executed.
pub const REASON_NEVER_EXECUTED: &str = "never executed";
/// The callee ran fewer times than `MinInliningThreshold`.
pub const REASON_EXEC_LESS_MIN_INLINING_THRESHOLD: &str = "executed < MinInliningThreshold times";
/// The call site itself was never reached.
pub const REASON_CALL_SITE_NOT_REACHED: &str = "call site not reached";
/// The callee is a native method and cannot be inlined.
pub const REASON_NATIVE_METHOD: &str = "native method";
/// The callee exceeds the C1 max inline size.
pub const REASON_CALLEE_IS_TOO_LARGE: &str = "callee is too large";
/// No static binding exists for the call, so there is nothing to inline.
pub const REASON_NO_STATIC_BINDING: &str = "no static binding";
/// Synthetic reason for the branch-uncertainty heuristic.
pub const REASON_UNCERTAIN_BRANCH: &str = "Uncertain branch";

/// Minimum observed executions for a branch to be suggestion-worthy.
pub const MIN_BRANCH_INVOCATIONS: u64 = 1000;
/// Minimum callee invocation count for an inlining failure to be suggestion-worthy.
pub const MIN_INLINING_INVOCATIONS: u64 = 1000;

/// Weight and explanation tables for the known failure reasons.
///
/// Immutable after construction. Obtain the process-wide instance with
/// [`ReasonScores::global`]; constructing a private instance is possible for
/// tests that want to assert table content.
#[derive(Debug)]
pub struct ReasonScores {
    weights: HashMap<&'static str, f64>,
    explanations: HashMap<&'static str, &'static str>,
}

impl Default for ReasonScores {
    fn default() -> Self {
        Self::new()
    }
}

impl ReasonScores {
    /// Builds the tables with the built-in reason weights and explanations.
    #[must_use]
    pub fn new() -> Self {
        let mut weights = HashMap::new();
        weights.insert(REASON_HOT_METHOD_TOO_BIG, 1.0);
        weights.insert(REASON_CALLEE_IS_TOO_LARGE, 0.5);
        weights.insert(REASON_UNCERTAIN_BRANCH, 0.5);
        weights.insert(REASON_TOO_BIG, 0.5);
        weights.insert(REASON_ALREADY_COMPILED_INTO_A_BIG_METHOD, 0.4);
        weights.insert(REASON_ALREADY_COMPILED_INTO_A_MEDIUM_METHOD, 0.4);
        weights.insert(REASON_EXEC_LESS_MIN_INLINING_THRESHOLD, 0.2);
        weights.insert(REASON_NO_STATIC_BINDING, 0.2);

        // Understood, but with no remediation worth surfacing.
        weights.insert(REASON_NEVER_EXECUTED, 0.0);
        weights.insert(REASON_NATIVE_METHOD, 0.0);
        weights.insert(REASON_CALL_SITE_NOT_REACHED, 0.0);

        let mut explanations = HashMap::new();
        explanations.insert(
            REASON_HOT_METHOD_TOO_BIG,
            "The callee method is 'hot' but is too big to be inlined into the caller.\nYou may want to consider refactoring the callee into smaller methods.",
        );
        explanations.insert(
            REASON_TOO_BIG,
            "The callee method is not 'hot' but is too big to be inlined into the caller method.",
        );
        explanations.insert(
            REASON_ALREADY_COMPILED_INTO_A_BIG_METHOD,
            "The callee method is not 'hot' but is too big to be inlined into the caller method.",
        );
        explanations.insert(
            REASON_EXEC_LESS_MIN_INLINING_THRESHOLD,
            "The callee method was not called enough times to be inlined.",
        );
        explanations.insert(
            REASON_CALLEE_IS_TOO_LARGE,
            "The callee method is greater than the max inlining size at the C1 compiler level.",
        );
        explanations.insert(
            REASON_NO_STATIC_BINDING,
            "The callee is known but there is no static binding so could not be inlined.",
        );

        ReasonScores {
            weights,
            explanations,
        }
    }

    /// Returns the process-wide score tables, built on first use.
    #[must_use]
    pub fn global() -> &'static ReasonScores {
        static SCORES: OnceLock<ReasonScores> = OnceLock::new();
        SCORES.get_or_init(ReasonScores::new)
    }

    /// Returns the weight for a reason, or `None` if the reason is not in the
    /// table. Callers treat an absent weight as `0.0`.
    #[must_use]
    pub fn weight(&self, reason: &str) -> Option<f64> {
        self.weights.get(reason).copied()
    }

    /// Returns the explanation text for a reason, when one exists.
    #[must_use]
    pub fn explanation(&self, reason: &str) -> Option<&'static str> {
        self.explanations.get(reason).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_match_reason_catalogue() {
        let scores = ReasonScores::new();
        assert_eq!(scores.weight(REASON_HOT_METHOD_TOO_BIG), Some(1.0));
        assert_eq!(scores.weight(REASON_CALLEE_IS_TOO_LARGE), Some(0.5));
        assert_eq!(scores.weight(REASON_UNCERTAIN_BRANCH), Some(0.5));
        assert_eq!(scores.weight(REASON_TOO_BIG), Some(0.5));
        assert_eq!(
            scores.weight(REASON_ALREADY_COMPILED_INTO_A_BIG_METHOD),
            Some(0.4)
        );
        assert_eq!(
            scores.weight(REASON_ALREADY_COMPILED_INTO_A_MEDIUM_METHOD),
            Some(0.4)
        );
        assert_eq!(
            scores.weight(REASON_EXEC_LESS_MIN_INLINING_THRESHOLD),
            Some(0.2)
        );
        assert_eq!(scores.weight(REASON_NO_STATIC_BINDING), Some(0.2));
        assert_eq!(scores.weight(REASON_NEVER_EXECUTED), Some(0.0));
        assert_eq!(scores.weight(REASON_NATIVE_METHOD), Some(0.0));
        assert_eq!(scores.weight(REASON_CALL_SITE_NOT_REACHED), Some(0.0));
    }

    #[test]
    fn unknown_reason_has_no_weight() {
        let scores = ReasonScores::new();
        assert_eq!(scores.weight("inlining prohibited by policy"), None);
        assert_eq!(scores.explanation("inlining prohibited by policy"), None);
    }

    #[test]
    fn explanations_cover_actionable_reasons() {
        let scores = ReasonScores::new();
        for reason in [
            REASON_HOT_METHOD_TOO_BIG,
            REASON_TOO_BIG,
            REASON_ALREADY_COMPILED_INTO_A_BIG_METHOD,
            REASON_EXEC_LESS_MIN_INLINING_THRESHOLD,
            REASON_CALLEE_IS_TOO_LARGE,
            REASON_NO_STATIC_BINDING,
        ] {
            assert!(scores.explanation(reason).is_some(), "missing: {}", reason);
        }
        assert!(scores.explanation(REASON_NEVER_EXECUTED).is_none());
    }

    #[test]
    fn global_is_shared() {
        let a = ReasonScores::global() as *const ReasonScores;
        let b = ReasonScores::global() as *const ReasonScores;
        assert_eq!(a, b);
    }
}
