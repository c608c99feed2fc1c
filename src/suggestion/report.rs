//! Suggestion records and the per-member collection they accumulate in.
//!
//! A [`Suggestion`] is one ranked piece of advice tied to a call site or
//! branch inside a compiled method. Suggestions accumulate in a
//! [`SuggestionSink`]: an append-only, duplicate-suppressing, ordered
//! collection scoped to exactly one member's last compilation. Presentation
//! (sorting by score, merging across members) is the consumer's concern, not
//! this module's.

use std::fmt;

use strum::{Display, IntoStaticStr};

use crate::model::member::MemberRc;

/// The heuristic a suggestion came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
pub enum SuggestionKind {
    /// A call the compiler declined to inline
    Inlining,
    /// A branch too unpredictable to compile well
    Branch,
}

/// One scored, human-readable improvement suggestion.
///
/// Two suggestions are equal when every field compares equal - same caller,
/// offset, kind, fully rendered text and score. Distinct texts or scores at
/// the same site are therefore distinct suggestions; the sink's deduplication
/// only collapses exact repeats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Member whose compilation produced the event; `None` when a nested
    /// compilation scope's caller could not be resolved
    caller: Option<MemberRc>,
    /// Bytecode position the event was attributed to; -1 when the event
    /// preceded any position marker
    bytecode_offset: i32,
    /// Fully rendered advice text
    text: String,
    /// Heuristic that produced the suggestion
    kind: SuggestionKind,
    /// Ranking score; always strictly positive for emitted suggestions
    score: u64,
}

impl Suggestion {
    /// Creates a suggestion record.
    #[must_use]
    pub fn new(
        caller: Option<MemberRc>,
        bytecode_offset: i32,
        text: impl Into<String>,
        kind: SuggestionKind,
        score: u64,
    ) -> Self {
        Suggestion {
            caller,
            bytecode_offset,
            text: text.into(),
            kind,
            score,
        }
    }

    /// Returns the member the suggestion is attributed to, when resolved.
    #[must_use]
    pub fn caller(&self) -> Option<&MemberRc> {
        self.caller.as_ref()
    }

    /// Returns the bytecode offset the underlying event occurred at.
    #[must_use]
    pub fn bytecode_offset(&self) -> i32 {
        self.bytecode_offset
    }

    /// Returns the rendered advice text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns which heuristic produced this suggestion.
    #[must_use]
    pub fn kind(&self) -> SuggestionKind {
        self.kind
    }

    /// Returns the ranking score.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.caller {
            Some(caller) => write!(
                f,
                "[{}] score {} in {}: {}",
                self.kind,
                self.score,
                caller.qualified_signature(),
                self.text
            ),
            None => write!(
                f,
                "[{}] score {} in <unresolved>: {}",
                self.kind, self.score, self.text
            ),
        }
    }
}

/// Append-only ordered collection of suggestions for one member.
///
/// Pushing an entry equal to one already present is a no-op; otherwise
/// first-seen order is preserved and entries are never removed. A sink lives
/// for exactly one walk of one member's last compilation and is discarded or
/// drained afterwards.
#[derive(Debug, Default)]
pub struct SuggestionSink {
    entries: Vec<Suggestion>,
}

impl SuggestionSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        SuggestionSink::default()
    }

    /// Appends a suggestion unless an equal one is already present.
    ///
    /// Returns true when the suggestion was added.
    pub fn push(&mut self, suggestion: Suggestion) -> bool {
        if self.entries.contains(&suggestion) {
            return false;
        }
        self.entries.push(suggestion);
        true
    }

    /// Returns the collected suggestions in first-seen order.
    #[must_use]
    pub fn as_slice(&self) -> &[Suggestion] {
        &self.entries
    }

    /// Returns the number of collected suggestions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consumes the sink, yielding the suggestions in first-seen order.
    #[must_use]
    pub fn into_vec(self) -> Vec<Suggestion> {
        self.entries
    }
}
