//! Tag-tree representation of HotSpot compilation-log output.
//!
//! A compilation task in a `LogCompilation` log is an ordered tree of XML-like
//! elements. The upstream log reader turns each element into a [`Tag`]: a name,
//! a map from attribute name to string value, and an ordered list of children.
//! Tags are built once and never mutated afterward; every consumer in this
//! crate reads them through shared [`TagRc`] handles.
//!
//! # Key Types
//!
//! - [`Tag`] - Immutable log-tree node
//! - [`TagBuilder`] - Construction API for the upstream reader and for tests
//! - [`TagKind`] - The tag names the suggestion walker dispatches on
//!
//! # Examples
//!
//! ```rust
//! use hotscope::model::tag::{TagBuilder, TagKind, ATTR_BCI};
//!
//! let bc = TagBuilder::new("bc").attribute(ATTR_BCI, "42").build();
//! assert_eq!(bc.kind(), Some(TagKind::Bytecode));
//! assert_eq!(bc.attribute(ATTR_BCI), Some("42"));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use strum::{EnumIter, EnumString, IntoStaticStr};

/// Attribute carrying the ID a `<method>` or `<klass>` declaration binds.
pub const ATTR_ID: &str = "id";
/// Attribute carrying the bytecode index of a `<bc>` position marker.
pub const ATTR_BCI: &str = "bci";
/// Attribute carrying the observed execution count of a `<branch>` tag.
pub const ATTR_BRANCH_COUNT: &str = "cnt";
/// Attribute carrying the taken-probability of a `<branch>` tag.
pub const ATTR_BRANCH_PROB: &str = "prob";
/// Attribute naming the target method ID on `<call>` and `<parse>` tags.
pub const ATTR_METHOD: &str = "method";
/// Attribute carrying the compiler's reason text on an `<inline_fail>` tag.
pub const ATTR_REASON: &str = "reason";
/// Attribute carrying a method's bytecode size on its `<method>` declaration.
pub const ATTR_BYTES: &str = "bytes";
/// Attribute carrying a method's interpreter invocation count.
pub const ATTR_IICOUNT: &str = "iicount";
/// Attribute carrying the name of a `<method>`, `<klass>` or `<type>` declaration.
pub const ATTR_NAME: &str = "name";
/// Attribute referencing the declaring class of a `<method>` declaration.
pub const ATTR_HOLDER: &str = "holder";
/// Attribute referencing a method's return type ID.
pub const ATTR_RETURN: &str = "return";
/// Attribute carrying a method's space-separated argument type IDs.
pub const ATTR_ARGUMENTS: &str = "arguments";
/// Attribute carrying the compilation task identifier on a `<task>` tag.
pub const ATTR_COMPILE_ID: &str = "compile_id";

/// Branch probability sentinel emitted instead of a number when a branch was never taken.
pub const NEVER: &str = "never";
/// Branch probability sentinel emitted instead of a number when a branch was always taken.
pub const ALWAYS: &str = "always";

/// A reference to a `Tag`
pub type TagRc = Arc<Tag>;

/// The tag names the suggestion walker dispatches on.
///
/// A compilation log contains many more element kinds than these; anything
/// whose name does not map to a `TagKind` is skipped by the walker without
/// effect. The wire names are the literal element names HotSpot emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter)]
pub enum TagKind {
    /// `<method>` - binds the method ID context for subsequent events
    #[strum(serialize = "method")]
    Method,
    /// `<bc>` - bytecode position marker, binds the offset context
    #[strum(serialize = "bc")]
    Bytecode,
    /// `<branch>` - branch statistics at the current bytecode position
    #[strum(serialize = "branch")]
    Branch,
    /// `<call>` - call site, binds the callee method ID context
    #[strum(serialize = "call")]
    Call,
    /// `<inline_fail>` - the compiler declined to inline the pending callee
    #[strum(serialize = "inline_fail")]
    InlineFail,
    /// `<parse>` - a nested compilation scope for an inlined callee
    #[strum(serialize = "parse")]
    Parse,
}

/// One node of a compilation-log tag tree.
///
/// A `Tag` is immutable: the upstream reader (or a [`TagBuilder`]) assembles
/// name, attributes and children once, and the tree is read-only for the
/// duration of every walk over it. Attribute keys are unique per tag.
#[derive(Debug)]
pub struct Tag {
    /// Element name as it appears in the log
    name: String,
    /// Attribute name to string value
    attributes: HashMap<String, String>,
    /// Child tags in document order
    children: Vec<TagRc>,
}

impl Tag {
    /// Returns the element name of this tag.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the walker-relevant kind of this tag, if its name maps to one.
    #[must_use]
    pub fn kind(&self) -> Option<TagKind> {
        TagKind::from_str(&self.name).ok()
    }

    /// Returns the value of the named attribute, if present.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Returns all attributes of this tag.
    #[must_use]
    pub fn attributes(&self) -> &HashMap<String, String> {
        &self.attributes
    }

    /// Returns the child tags in document order.
    #[must_use]
    pub fn children(&self) -> &[TagRc] {
        &self.children
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        // Attribute order is unspecified; sort for stable output.
        let mut attrs: Vec<_> = self.attributes.iter().collect();
        attrs.sort_by_key(|(k, _)| k.as_str());
        for (key, value) in attrs {
            write!(f, " {}='{}'", key, value)?;
        }
        if self.children.is_empty() {
            write!(f, "/>")
        } else {
            write!(f, "> ({} children)", self.children.len())
        }
    }
}

/// Builder for [`Tag`] trees.
///
/// Used by the upstream log reader while tokenizing, and by tests to assemble
/// fixture trees. The builder is consumed by [`TagBuilder::build`], which
/// freezes the node into a shared [`TagRc`].
///
/// # Examples
///
/// ```rust
/// use hotscope::model::tag::{TagBuilder, ATTR_BCI};
///
/// let parse = TagBuilder::new("parse")
///     .attribute("method", "1")
///     .child(TagBuilder::new("bc").attribute(ATTR_BCI, "7").build())
///     .build();
/// assert_eq!(parse.children().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct TagBuilder {
    name: String,
    attributes: HashMap<String, String>,
    children: Vec<TagRc>,
}

impl TagBuilder {
    /// Creates a builder for a tag with the given element name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        TagBuilder {
            name: name.into(),
            attributes: HashMap::new(),
            children: Vec::new(),
        }
    }

    /// Adds an attribute. A later value for the same name replaces the earlier one.
    #[must_use]
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Appends a child tag in document order.
    #[must_use]
    pub fn child(mut self, child: TagRc) -> Self {
        self.children.push(child);
        self
    }

    /// Appends several child tags in document order.
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = TagRc>) -> Self {
        self.children.extend(children);
        self
    }

    /// Freezes the builder into an immutable shared tag.
    #[must_use]
    pub fn build(self) -> TagRc {
        Arc::new(Tag {
            name: self.name,
            attributes: self.attributes,
            children: self.children,
        })
    }
}
