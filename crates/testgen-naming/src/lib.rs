//! Collision-free naming for generated test code
//!
//! This crate turns a batch of source methods into test method names that are
//! unique within the batch and disjoint from names the target test class
//! already reserves. Colliding names are escalated through progressively more
//! specific strategies until every method has a name of its own.
//!
//! # Modules
//!
//! ## Core
//! - [`reserved`] - The monotonically growing set of forbidden names
//! - [`registry`] - Per-round collision detection
//! - [`strategy`] - Naming strategies and the candidate name builder
//! - [`escalator`] - Round-by-round tie-breaking driver
//!
//! ## Generators
//! - [`method_names`] - Test method names for overloaded source methods
//! - [`type_ids`] - Short unique identifiers for parameter types
//! - [`type_descriptor`] - Parsing and erasure of textual type descriptors
//!
//! ## Test class helpers
//! - [`skeleton`] - Local variable names and default values for test bodies
//! - [`test_class`] - Index of an existing test class, missing-method planning
//!
//! # Examples
//!
//! ```rust
//! use testgen_naming::{MethodItem, MethodNameGenerator, ReservedNames};
//!
//! let generator = MethodNameGenerator::default();
//! let methods = vec![
//!     MethodItem::new("process", ["String"]),
//!     MethodItem::new("process", ["int"]),
//!     MethodItem::new("close", Vec::<String>::new()),
//! ];
//!
//! let names = generator.generate(&methods, &ReservedNames::new()).unwrap();
//! assert_eq!(names, ["testProcess_String", "testProcess_int", "testClose"]);
//! ```

pub mod config;
pub mod error;
pub mod escalator;
pub mod method_names;
pub mod registry;
pub mod reserved;
pub mod skeleton;
pub mod strategy;
pub mod test_class;
pub mod type_descriptor;
pub mod type_ids;

// Re-export commonly used types for convenience
pub use config::NamingConfig;
pub use error::{NamingError, NamingResult};
pub use escalator::{Escalation, RoundOutcome};
pub use method_names::{MethodItem, MethodNameGenerator};
pub use registry::CollisionRegistry;
pub use reserved::ReservedNames;
pub use skeleton::{abstract_impl_name, default_value_literal, skeleton_var_names, STUB_TEST_NAME};
pub use strategy::NamingStrategy;
pub use test_class::{PlannedTest, TestClassIndex};
pub use type_descriptor::TypeDescriptor;
pub use type_ids::{TypeIdGenerator, TypeIds};
