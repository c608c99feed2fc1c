//! Compiled-member identities and their recorded JIT compilations.
//!
//! A [`CompiledMember`] identifies one Java method: its declaring class, name
//! and signature, as loaded into the model by the external metadata reader.
//! Members are consumed, never mutated, by the suggestion walker - their only
//! mutable aspect is the late binding of the last observed [`Compilation`],
//! which the upstream log reader attaches once when it has finished reading
//! the member's final compilation task.
//!
//! # Key Types
//!
//! - [`CompiledMember`] - Method identity plus rendering helpers
//! - [`Compilation`] - One compilation task: parse tags and their dictionary

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::model::dictionary::ParseDictionary;
use crate::model::tag::TagRc;

/// A reference to a `CompiledMember`
pub type MemberRc = Arc<CompiledMember>;

/// A reference to a `Compilation`
pub type CompilationRc = Arc<Compilation>;

/// One JIT compilation task recorded for a member.
///
/// Holds the `<parse>` trees of the task together with the task's
/// [`ParseDictionary`]. The parse tags and dictionary are immutable; the
/// suggestion walker reads them without copying.
#[derive(Debug)]
pub struct Compilation {
    /// Task identifier from the log's `compile_id` attribute
    pub compile_id: String,
    /// Root `<parse>` tags of the task, in document order
    pub parse_tags: Vec<TagRc>,
    /// ID side table scoped to this task
    pub dictionary: ParseDictionary,
}

impl Compilation {
    /// Creates a compilation record and freezes it behind a shared handle.
    #[must_use]
    pub fn new(
        compile_id: impl Into<String>,
        parse_tags: Vec<TagRc>,
        dictionary: ParseDictionary,
    ) -> CompilationRc {
        Arc::new(Compilation {
            compile_id: compile_id.into(),
            parse_tags,
            dictionary,
        })
    }
}

/// Identity of one Java method known to the model.
///
/// Equality covers the identity fields only (class, name, signature); whether
/// a compilation has been attached does not affect it. Type names are stored
/// in source form (`java.lang.String`, not `java/lang/String`).
pub struct CompiledMember {
    /// Fully qualified name of the declaring class
    pub class_name: String,
    /// Method name without any class prefix
    pub name: String,
    /// Fully qualified return type name
    pub return_type: String,
    /// Fully qualified parameter type names, in declaration order
    pub param_types: Vec<String>,

    /// Last observed compilation task, bound once by the log reader
    compilation: OnceLock<CompilationRc>,
}

impl CompiledMember {
    /// Creates a member identity with no compilation attached.
    #[must_use]
    pub fn new(
        class_name: impl Into<String>,
        name: impl Into<String>,
        return_type: impl Into<String>,
        param_types: Vec<String>,
    ) -> MemberRc {
        Arc::new(CompiledMember {
            class_name: class_name.into(),
            name: name.into(),
            return_type: return_type.into(),
            param_types,
            compilation: OnceLock::new(),
        })
    }

    /// Returns the fully qualified name of the declaring class.
    #[must_use]
    pub fn fully_qualified_class_name(&self) -> &str {
        &self.class_name
    }

    /// Renders the member without its class prefix, e.g. `int indexOf(java.lang.String)`.
    #[must_use]
    pub fn unqualified_signature(&self) -> String {
        format!(
            "{} {}({})",
            self.return_type,
            self.name,
            self.param_types.join(", ")
        )
    }

    /// Renders the member with its class prefix, e.g.
    /// `java.lang.String.indexOf(java.lang.String)`.
    ///
    /// This form is unique per member and serves as the model's registry key.
    #[must_use]
    pub fn qualified_signature(&self) -> String {
        format!(
            "{}.{}({})",
            self.class_name,
            self.name,
            self.param_types.join(", ")
        )
    }

    /// Returns true once a compilation task has been recorded for this member.
    #[must_use]
    pub fn is_compiled(&self) -> bool {
        self.compilation.get().is_some()
    }

    /// Returns the recorded compilation task, if any.
    #[must_use]
    pub fn compilation(&self) -> Option<&CompilationRc> {
        self.compilation.get()
    }

    /// Binds the member's compilation task. The first bind wins; a second
    /// attempt returns the rejected record to the caller unchanged.
    ///
    /// # Errors
    /// Returns `Err` with the rejected record if a compilation is already bound.
    pub fn set_compilation(&self, compilation: CompilationRc) -> Result<(), CompilationRc> {
        self.compilation.set(compilation)
    }
}

impl PartialEq for CompiledMember {
    fn eq(&self, other: &Self) -> bool {
        self.class_name == other.class_name
            && self.name == other.name
            && self.return_type == other.return_type
            && self.param_types == other.param_types
    }
}

impl Eq for CompiledMember {}

impl fmt::Debug for CompiledMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledMember")
            .field("class_name", &self.class_name)
            .field("name", &self.name)
            .field("return_type", &self.return_type)
            .field("param_types", &self.param_types)
            .field("compiled", &self.is_compiled())
            .finish()
    }
}

impl fmt::Display for CompiledMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualified_signature())
    }
}
