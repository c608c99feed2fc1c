//! Read-mostly repository of the members known to one analysis session.
//!
//! The [`JitModel`] is populated once by the external metadata reader (class
//! and method identities, plus each member's last compilation task) and is
//! then shared read-only across every suggestion walk. Registration uses
//! concurrent structures so a loader may populate it from several threads;
//! after loading, all access is lookup and iteration.
//!
//! The model is also the resolver half of ID resolution: a
//! [`ParseDictionary`] maps an opaque method ID to its declaration tags, and
//! [`JitModel::lookup_member`] carries that resolution the rest of the way to
//! a registered [`CompiledMember`](crate::model::member::CompiledMember).

use crossbeam_skiplist::SkipMap;
use dashmap::DashMap;

use crate::model::dictionary::ParseDictionary;
use crate::model::member::MemberRc;
use crate::model::tag::{ATTR_ARGUMENTS, ATTR_HOLDER, ATTR_NAME};

/// Converts a log-form class name (`java/lang/String`) to source form.
fn binary_to_source_name(name: &str) -> String {
    name.replace('/', ".")
}

/// Resolves an argument or return type ID to a source-form type name.
fn type_name(dictionary: &ParseDictionary, id: &str) -> Option<String> {
    let tag = dictionary.type_or_klass(id)?;
    tag.attribute(ATTR_NAME).map(binary_to_source_name)
}

/// Repository of all members known to one analysis session.
///
/// Primary storage is ordered by qualified signature, so iteration order is
/// deterministic regardless of registration order. A secondary index groups
/// members by declaring class for per-class queries.
pub struct JitModel {
    /// Qualified signature to member, ordered
    members: SkipMap<String, MemberRc>,

    /// Declaring class name to members of that class
    by_class: DashMap<String, Vec<MemberRc>>,
}

impl Default for JitModel {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for JitModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JitModel")
            .field("member_count", &self.member_count())
            .finish()
    }
}

impl JitModel {
    /// Creates an empty model.
    #[must_use]
    pub fn new() -> Self {
        JitModel {
            members: SkipMap::new(),
            by_class: DashMap::new(),
        }
    }

    /// Registers a member under its qualified signature.
    ///
    /// Re-registering the same signature replaces the primary entry and
    /// appends to the class index; loaders are expected to register each
    /// member once.
    pub fn register_member(&self, member: MemberRc) {
        self.members
            .insert(member.qualified_signature(), member.clone());
        self.by_class
            .entry(member.class_name.clone())
            .or_default()
            .push(member);
    }

    /// Returns the number of registered members.
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Returns true if no members are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns a snapshot of all members, ordered by qualified signature.
    #[must_use]
    pub fn members(&self) -> Vec<MemberRc> {
        self.members
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// Returns the members declared by the given class, if any.
    #[must_use]
    pub fn members_of_class(&self, class_name: &str) -> Vec<MemberRc> {
        self.by_class
            .get(class_name)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    /// Finds a member by declaring class, name and parameter type names.
    #[must_use]
    pub fn find_member(
        &self,
        class_name: &str,
        name: &str,
        param_types: &[String],
    ) -> Option<MemberRc> {
        let key = format!("{}.{}({})", class_name, name, param_types.join(", "));
        self.members.get(&key).map(|entry| entry.value().clone())
    }

    /// Resolves an opaque log method ID to a registered member.
    ///
    /// Resolution follows the declaration chain in the dictionary: the
    /// `<method>` tag supplies name, holder class ID and argument type IDs;
    /// the holder resolves through the `<klass>` namespace and each argument
    /// through `<type>`/`<klass>`. A miss at any step - unknown ID, missing
    /// attribute, or a signature the model does not carry - yields `None`,
    /// never an error: truncated logs make dangling IDs an expected input.
    #[must_use]
    pub fn lookup_member(&self, method_id: &str, dictionary: &ParseDictionary) -> Option<MemberRc> {
        let method_tag = dictionary.method(method_id)?;

        let name = method_tag.attribute(ATTR_NAME)?;
        let holder_id = method_tag.attribute(ATTR_HOLDER)?;

        let klass_tag = dictionary.klass(holder_id)?;
        let class_name = binary_to_source_name(klass_tag.attribute(ATTR_NAME)?);

        let param_types = match method_tag.attribute(ATTR_ARGUMENTS) {
            Some(ids) => ids
                .split_whitespace()
                .map(|id| type_name(dictionary, id))
                .collect::<Option<Vec<String>>>()?,
            None => Vec::new(),
        };

        self.find_member(&class_name, name, &param_types)
    }
}
