//! Test method names for a batch of source methods
//!
//! Every source method gets a test method named `prefix + CapitalizedName`.
//! Overloads and clashes with reserved names are resolved in rounds:
//!
//! | Round | Applies to           | Shape                                  |
//! |-------|----------------------|----------------------------------------|
//! | 0     | all                  | `testAdd`                              |
//! | 1     | ≤ K parameters       | `testAdd_int_int`, `testAdd_0args`     |
//! | 2     | all                  | `testAdd_3args`, `testAdd_int_1args`   |
//! | 3     | all                  | round 2 name + `_1`, `_2`, ...          |
//!
//! K is [`NamingConfig::max_suffix_types`]. A name is only escalated while it
//! collides, so a method whose plain name is unique keeps it.

use crate::config::NamingConfig;
use crate::error::{NamingError, NamingResult};
use crate::escalator::Escalation;
use crate::reserved::ReservedNames;
use crate::strategy::{test_method_base, validate_seed, NamingStrategy};
use crate::type_descriptor::TypeDescriptor;
use crate::type_ids::{TypeIdGenerator, TypeIds};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A source method to generate a test name for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodItem {
    /// Simple name of the method
    pub name: String,
    /// Parameter types as written in source, in declaration order
    #[serde(default)]
    pub params: Vec<String>,
}

impl MethodItem {
    pub fn new<P, S>(name: impl Into<String>, params: P) -> Self
    where
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    /// A method without parameters
    pub fn no_args(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }
}

/// Validated method with its round-0 name
#[derive(Debug)]
struct PreparedMethod {
    base: String,
    params: Vec<TypeDescriptor>,
}

struct PlainName;

impl NamingStrategy<PreparedMethod> for PlainName {
    fn label(&self) -> &'static str {
        "plain"
    }

    fn candidate(&self, item: &PreparedMethod) -> Option<String> {
        Some(item.base.clone())
    }
}

struct TypeSuffix<'a> {
    ids: &'a TypeIds,
    max_types: usize,
}

impl TypeSuffix<'_> {
    fn render(&self, item: &PreparedMethod) -> Option<String> {
        if item.params.len() > self.max_types {
            return None;
        }
        if item.params.is_empty() {
            return Some(format!("{}_0args", item.base));
        }

        let mut name = item.base.clone();
        for param in &item.params {
            name.push('_');
            name.push_str(&self.ids.id_of(param));
        }
        Some(name)
    }
}

impl NamingStrategy<PreparedMethod> for TypeSuffix<'_> {
    fn label(&self) -> &'static str {
        "type-suffix"
    }

    fn candidate(&self, item: &PreparedMethod) -> Option<String> {
        self.render(item)
    }
}

struct ArgCount<'a> {
    types: &'a TypeSuffix<'a>,
}

impl ArgCount<'_> {
    fn render(&self, item: &PreparedMethod) -> String {
        let count = item.params.len();
        match self.types.render(item) {
            _ if count == 0 => format!("{}_0args", item.base),
            Some(typed) => format!("{}_{}args", typed, count),
            None => format!("{}_{}args", item.base, count),
        }
    }
}

impl NamingStrategy<PreparedMethod> for ArgCount<'_> {
    fn label(&self) -> &'static str {
        "arg-count"
    }

    fn candidate(&self, item: &PreparedMethod) -> Option<String> {
        Some(self.render(item))
    }
}

/// Generates test method names for batches of source methods
///
/// Holds validated [`NamingConfig`]; every call to [`Self::generate`] starts
/// from a fresh working state.
#[derive(Debug, Clone, Default)]
pub struct MethodNameGenerator {
    config: NamingConfig,
}

impl MethodNameGenerator {
    /// Create a generator with validated conventions
    pub fn new(config: NamingConfig) -> NamingResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &NamingConfig {
        &self.config
    }

    /// Round-0 name of a single method, without any disambiguation
    pub fn base_name(&self, seed: &str) -> String {
        test_method_base(&self.config.test_prefix, seed)
    }

    /// Generate one test method name per item, index-aligned with `items`.
    ///
    /// Produced names are pairwise distinct and never members of `reserved`.
    /// The first invalid item fails the whole batch.
    pub fn generate(
        &self,
        items: &[MethodItem],
        reserved: &ReservedNames,
    ) -> NamingResult<Vec<String>> {
        let prepared = self.prepare(items)?;
        let mut reserved = reserved.clone();

        let mut escalation = Escalation::new(&prepared);
        escalation.round(&PlainName, &mut reserved);

        let max_types = self.config.max_suffix_types;
        let ids = if escalation.is_settled() {
            TypeIds::default()
        } else {
            TypeIdGenerator::new(self.config.sequence_start).generate(
                escalation
                    .unresolved()
                    .filter(|(_, method)| method.params.len() <= max_types)
                    .flat_map(|(_, method)| method.params.iter()),
            )
        };

        let type_suffix = TypeSuffix {
            ids: &ids,
            max_types,
        };
        let arg_count = ArgCount {
            types: &type_suffix,
        };
        let table: [&dyn NamingStrategy<PreparedMethod>; 2] = [&type_suffix, &arg_count];

        for strategy in table {
            if escalation.is_settled() {
                break;
            }
            escalation.round(strategy, &mut reserved);
        }

        let rounds = escalation.rounds();
        let names = escalation.finish(
            |method| arg_count.render(method),
            self.config.sequence_start,
            &mut reserved,
        );

        info!(methods = names.len(), rounds, "Generated test method names");
        Ok(names)
    }

    fn prepare(&self, items: &[MethodItem]) -> NamingResult<Vec<PreparedMethod>> {
        items
            .iter()
            .enumerate()
            .map(|(ordinal, item)| {
                validate_seed(&item.name, ordinal)?;
                let params = item
                    .params
                    .iter()
                    .map(|param| TypeDescriptor::parse(param))
                    .collect::<NamingResult<Vec<_>>>()
                    .inspect_err(|e| debug!(ordinal, error = %e, "Rejected method parameters"))?;
                Ok(PreparedMethod {
                    base: self.base_name(&item.name),
                    params,
                })
            })
            .collect()
    }
}

impl TryFrom<NamingConfig> for MethodNameGenerator {
    type Error = NamingError;

    fn try_from(config: NamingConfig) -> Result<Self, Self::Error> {
        Self::new(config)
    }
}
