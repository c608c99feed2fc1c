//! Per-compilation side table resolving opaque log IDs to their declaration tags.
//!
//! HotSpot's compilation log declares every type, class and method it mentions
//! once, under an opaque string ID, and later events reference those IDs
//! instead of repeating the declarations. A [`ParseDictionary`] is the side
//! table for one compilation task: it maps IDs back to the `<type>`, `<klass>`
//! and `<method>` declaration tags.
//!
//! Lookups return `Option` - an unknown ID (forward reference, truncated log)
//! is an expected condition, never an error. The dictionary is populated by
//! the upstream log reader while the task is tokenized and is read-only
//! afterwards.

use std::collections::HashMap;

use crate::model::tag::TagRc;

/// ID-to-declaration side table for one compilation task.
///
/// Three namespaces mirror the three declaration elements in the log:
/// `<type>` (primitives and arrays), `<klass>` (reference types) and
/// `<method>`. IDs are unique within a namespace but the same numeric ID can
/// appear in more than one namespace, so lookups are namespace-specific.
#[derive(Debug, Default)]
pub struct ParseDictionary {
    types: HashMap<String, TagRc>,
    klasses: HashMap<String, TagRc>,
    methods: HashMap<String, TagRc>,
}

impl ParseDictionary {
    /// Creates an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        ParseDictionary::default()
    }

    /// Records a `<type>` declaration under its ID.
    pub fn insert_type(&mut self, id: impl Into<String>, tag: TagRc) {
        self.types.insert(id.into(), tag);
    }

    /// Records a `<klass>` declaration under its ID.
    pub fn insert_klass(&mut self, id: impl Into<String>, tag: TagRc) {
        self.klasses.insert(id.into(), tag);
    }

    /// Records a `<method>` declaration under its ID.
    pub fn insert_method(&mut self, id: impl Into<String>, tag: TagRc) {
        self.methods.insert(id.into(), tag);
    }

    /// Resolves a `<type>` declaration, or `None` if the ID is unknown.
    #[must_use]
    pub fn type_tag(&self, id: &str) -> Option<&TagRc> {
        self.types.get(id)
    }

    /// Resolves a `<klass>` declaration, or `None` if the ID is unknown.
    #[must_use]
    pub fn klass(&self, id: &str) -> Option<&TagRc> {
        self.klasses.get(id)
    }

    /// Resolves a `<method>` declaration, or `None` if the ID is unknown.
    #[must_use]
    pub fn method(&self, id: &str) -> Option<&TagRc> {
        self.methods.get(id)
    }

    /// Resolves an ID against the `<type>` namespace first, then `<klass>`.
    ///
    /// Argument and return type references on `<method>` declarations may point
    /// into either namespace; this is the combined lookup resolution uses.
    #[must_use]
    pub fn type_or_klass(&self, id: &str) -> Option<&TagRc> {
        self.types.get(id).or_else(|| self.klasses.get(id))
    }
}
