//! Index of an existing test class
//!
//! When tests are regenerated for a class that already has a test class,
//! only the missing test methods are added. Names are generated as if the
//! test class were empty, so a method keeps the same test name across
//! regenerations; a generated name that already exists as a no-arg method
//! means the test is already there.

use crate::error::NamingResult;
use crate::method_names::{MethodItem, MethodNameGenerator};
use crate::reserved::ReservedNames;
use crate::skeleton::abstract_impl_name;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

/// A test method that should be added to the test class
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedTest {
    /// Position of the source method in the input batch
    pub ordinal: usize,
    /// Name of the test method to generate
    pub name: String,
}

/// Names already declared in an existing test class
#[derive(Debug, Clone, Default)]
pub struct TestClassIndex {
    no_arg_methods: BTreeSet<String>,
    nested_classes: BTreeSet<String>,
}

impl TestClassIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index a test class from the names of its no-arg methods
    pub fn from_methods<I, S>(methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            no_arg_methods: methods.into_iter().map(Into::into).collect(),
            nested_classes: BTreeSet::new(),
        }
    }

    pub fn with_nested_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nested_classes.extend(classes.into_iter().map(Into::into));
        self
    }

    pub fn contains_method(&self, name: &str) -> bool {
        self.no_arg_methods.contains(name)
    }

    pub fn add_method(&mut self, name: impl Into<String>) -> bool {
        self.no_arg_methods.insert(name.into())
    }

    pub fn contains_nested_class(&self, name: &str) -> bool {
        self.nested_classes.contains(name)
    }

    pub fn add_nested_class(&mut self, name: impl Into<String>) -> bool {
        self.nested_classes.insert(name.into())
    }

    /// Plan the test methods that are not yet in the class.
    ///
    /// Planned names are added to the index, so planning the same batch
    /// again yields nothing.
    pub fn plan_missing(
        &mut self,
        generator: &MethodNameGenerator,
        items: &[MethodItem],
    ) -> NamingResult<Vec<PlannedTest>> {
        let names = generator.generate(items, &ReservedNames::new())?;

        let mut planned = Vec::new();
        for (ordinal, name) in names.into_iter().enumerate() {
            if self.contains_method(&name) {
                debug!(ordinal, name = %name, "Test method already exists");
                continue;
            }
            self.add_method(name.clone());
            planned.push(PlannedTest { ordinal, name });
        }

        debug!(
            planned = planned.len(),
            existing = items.len() - planned.len(),
            "Planned missing test methods"
        );
        Ok(planned)
    }

    /// Name of the nested class implementing abstract `class_name`.
    ///
    /// Returns the name and whether the class still has to be generated.
    /// Only a nested class named exactly `<class_name>Impl` is reused; the
    /// index keeps no supertype information, so a differently named nested
    /// subclass of `class_name` is not recognized.
    pub fn resolve_impl_class(&mut self, class_name: &str) -> (String, bool) {
        let name = abstract_impl_name(class_name);
        if self.contains_nested_class(&name) {
            return (name, false);
        }
        self.add_nested_class(name.clone());
        (name, true)
    }
}
