//! Short unique identifiers for parameter types
//!
//! Overloads are told apart by appending identifiers of their parameter
//! types. Those identifiers should be as short as possible (`String`, `int`)
//! yet two different types must never share one. Types with clashing simple
//! names are qualified with just enough enclosing segments to separate them
//! (`util_List` vs `awt_List`); whatever still clashes gets a numeric suffix.

use crate::config::NamingConfig;
use crate::escalator::Escalation;
use crate::reserved::ReservedNames;
use crate::strategy::NamingStrategy;
use crate::type_descriptor::TypeDescriptor;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Erased type → identifier
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeIds {
    ids: HashMap<TypeDescriptor, String>,
}

impl TypeIds {
    pub fn get(&self, ty: &TypeDescriptor) -> Option<&str> {
        self.ids.get(ty).map(String::as_str)
    }

    /// Identifier of `ty`, falling back to its simple identifier for types
    /// the generator never saw
    pub fn id_of(&self, ty: &TypeDescriptor) -> String {
        self.get(ty).map(str::to_string).unwrap_or_else(|| ty.simple_id())
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Identifier from the last `depth + 1` segments of a type
struct QualifiedSuffix {
    depth: usize,
}

impl NamingStrategy<TypeDescriptor> for QualifiedSuffix {
    fn label(&self) -> &'static str {
        "qualified-suffix"
    }

    fn candidate(&self, item: &TypeDescriptor) -> Option<String> {
        item.qualified_id(self.depth)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TypeIdGenerator {
    sequence_start: u32,
}

impl Default for TypeIdGenerator {
    fn default() -> Self {
        Self::new(NamingConfig::default().sequence_start)
    }
}

impl TypeIdGenerator {
    pub fn new(sequence_start: u32) -> Self {
        Self { sequence_start }
    }

    /// Assign identifiers to every distinct erased type in `types`.
    ///
    /// # Examples
    /// ```
    /// use testgen_naming::{TypeDescriptor, TypeIdGenerator};
    ///
    /// let types: Vec<TypeDescriptor> = ["java.util.List<String>", "java.awt.List", "int"]
    ///     .iter()
    ///     .map(|t| t.parse().unwrap())
    ///     .collect();
    ///
    /// let ids = TypeIdGenerator::default().generate(&types);
    /// assert_eq!(ids.get(&types[0]), Some("util_List"));
    /// assert_eq!(ids.get(&types[1]), Some("awt_List"));
    /// assert_eq!(ids.get(&types[2]), Some("int"));
    /// ```
    pub fn generate<'t, T>(&self, types: T) -> TypeIds
    where
        T: IntoIterator<Item = &'t TypeDescriptor>,
    {
        let distinct: Vec<TypeDescriptor> = types
            .into_iter()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        if distinct.is_empty() {
            return TypeIds::default();
        }

        let max_depth = distinct
            .iter()
            .map(|ty| ty.segments().len())
            .max()
            .unwrap_or(1);
        let table: Vec<QualifiedSuffix> = (0..max_depth)
            .map(|depth| QualifiedSuffix { depth })
            .collect();

        let mut reserved = ReservedNames::new();
        let mut escalation = Escalation::new(&distinct);
        for strategy in &table {
            if escalation.is_settled() {
                break;
            }
            escalation.round(strategy, &mut reserved);
        }
        let names = escalation.finish(TypeDescriptor::full_id, self.sequence_start, &mut reserved);

        debug!(types = distinct.len(), "Generated type identifiers");

        TypeIds {
            ids: distinct.into_iter().zip(names).collect(),
        }
    }
}
