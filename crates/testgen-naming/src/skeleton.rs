//! Names and literals used inside a generated test method body
//!
//! A generated test declares one local per parameter of the tested method,
//! plus `instance`, `expResult` and `result`. The locals must not clash with
//! each other, and unnamed parameters (e.g. from compiled classes) still need
//! a name.

use crate::type_descriptor::TypeDescriptor;
use std::collections::HashSet;

/// Local holding the object the tested method is called on
pub const INSTANCE_VAR_NAME: &str = "instance";
/// Local holding the value returned by the tested method
pub const RESULT_VAR_NAME: &str = "result";
/// Local holding the expected return value
pub const EXP_RESULT_VAR_NAME: &str = "expResult";
/// Base for names of unnamed parameters
pub const ARTIFICIAL_VAR_NAME_BASE: &str = "arg";
/// Name of the placeholder test generated for a class with no testable methods
pub const STUB_TEST_NAME: &str = "testSomeMethod";

const IMPL_CLASS_SUFFIX: &str = "Impl";

/// Local variable names for the parameters of a tested method.
///
/// `None` stands for an unnamed parameter, which becomes `arg{index}`.
/// A name taken by a reserved local or an earlier parameter gets the first
/// free `_2`, `_3`, ... suffix.
///
/// # Examples
/// ```
/// use testgen_naming::skeleton_var_names;
///
/// let names = skeleton_var_names(&[Some("result"), None, Some("count"), Some("count")]);
/// assert_eq!(names, ["result_2", "arg1", "count", "count_2"]);
/// ```
pub fn skeleton_var_names(params: &[Option<&str>]) -> Vec<String> {
    if params.is_empty() {
        return Vec::new();
    }

    let mut taken: HashSet<String> = [INSTANCE_VAR_NAME, RESULT_VAR_NAME, EXP_RESULT_VAR_NAME]
        .into_iter()
        .map(str::to_string)
        .collect();

    // First pass: declared names that are free keep their name
    let mut names: Vec<Option<String>> = params
        .iter()
        .map(|param| match param {
            Some(name) if taken.insert((*name).to_string()) => Some((*name).to_string()),
            _ => None,
        })
        .collect();

    // Second pass: unnamed and clashing parameters, in declaration order
    for (index, param) in params.iter().enumerate() {
        if names[index].is_some() {
            continue;
        }

        let stem = match param {
            Some(name) => (*name).to_string(),
            None => {
                let artificial = format!("{}{}", ARTIFICIAL_VAR_NAME_BASE, index);
                if taken.insert(artificial.clone()) {
                    names[index] = Some(artificial);
                    continue;
                }
                artificial
            }
        };

        let mut suffix = 2;
        let name = loop {
            let candidate = format!("{}_{}", stem, suffix);
            suffix += 1;
            if taken.insert(candidate.clone()) {
                break candidate;
            }
        };
        names[index] = Some(name);
    }

    names.into_iter().flatten().collect()
}

/// Java literal used to initialize a local of type `ty` in a test skeleton
///
/// ```
/// use testgen_naming::{default_value_literal, TypeDescriptor};
///
/// let ty = TypeDescriptor::parse("long").unwrap();
/// assert_eq!(default_value_literal(&ty), "0L");
/// ```
pub fn default_value_literal(ty: &TypeDescriptor) -> &'static str {
    if ty.is_array() {
        return "null";
    }

    match ty.qualified_name().as_str() {
        "boolean" => "false",
        "char" => "' '",
        "byte" | "short" | "int" => "0",
        "long" => "0L",
        "float" => "0.0F",
        "double" => "0.0",
        "String" | "java.lang.String" => "\"\"",
        _ => "null",
    }
}

/// Name of the nested class that makes an abstract class instantiable in tests
pub fn abstract_impl_name(class_name: &str) -> String {
    format!("{}{}", class_name, IMPL_CLASS_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_params() {
        assert!(skeleton_var_names(&[]).is_empty());
    }

    #[test]
    fn test_plain_names_kept() {
        assert_eq!(
            skeleton_var_names(&[Some("a"), Some("b")]),
            ["a", "b"]
        );
    }

    #[test]
    fn test_reserved_locals_are_renamed() {
        assert_eq!(
            skeleton_var_names(&[Some("instance"), Some("expResult"), Some("result")]),
            ["instance_2", "expResult_2", "result_2"]
        );
    }

    #[test]
    fn test_unnamed_params_get_artificial_names() {
        assert_eq!(skeleton_var_names(&[None, None]), ["arg0", "arg1"]);
    }

    #[test]
    fn test_artificial_name_clashing_with_declared_one() {
        // the declared "arg1" wins, the unnamed parameter at index 1 is suffixed
        assert_eq!(
            skeleton_var_names(&[Some("arg1"), None]),
            ["arg1", "arg1_2"]
        );
    }

    #[test]
    fn test_suffix_skips_taken_names() {
        assert_eq!(
            skeleton_var_names(&[Some("x"), Some("x_2"), Some("x")]),
            ["x", "x_2", "x_3"]
        );
    }

    #[test]
    fn test_default_values() {
        let cases = [
            ("boolean", "false"),
            ("char", "' '"),
            ("byte", "0"),
            ("short", "0"),
            ("int", "0"),
            ("long", "0L"),
            ("float", "0.0F"),
            ("double", "0.0"),
            ("java.lang.String", "\"\""),
            ("String", "\"\""),
            ("int[]", "null"),
            ("java.util.List<String>", "null"),
        ];
        for (text, expected) in cases {
            let ty = TypeDescriptor::parse(text).unwrap();
            assert_eq!(default_value_literal(&ty), expected, "default for {}", text);
        }
    }

    #[test]
    fn test_abstract_impl_name() {
        assert_eq!(abstract_impl_name("Shape"), "ShapeImpl");
    }
}
