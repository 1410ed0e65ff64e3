//! JSON documents read and written by the CLI

use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use testgen_config::{TestgenError, TestgenResult};
use testgen_naming::{MethodItem, PlannedTest};

/// Input of `testgen names`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamesRequest {
    pub methods: Vec<MethodItem>,
    #[serde(default)]
    pub reserved: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct NamesResponse {
    pub names: Vec<String>,
}

/// Input of `testgen types`
#[derive(Debug, Deserialize)]
pub struct TypesRequest {
    pub types: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct TypeIdEntry {
    #[serde(rename = "type")]
    pub ty: String,
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct TypesResponse {
    pub ids: Vec<TypeIdEntry>,
}

/// Input of `testgen missing`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingRequest {
    pub methods: Vec<MethodItem>,
    /// No-arg methods already present in the test class
    #[serde(default)]
    pub existing: Vec<String>,
    /// Nested classes already present in the test class
    #[serde(default)]
    pub nested_classes: Vec<String>,
    /// Set when the tested class is abstract
    #[serde(default)]
    pub abstract_class: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ImplClass {
    pub name: String,
    pub generate: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingResponse {
    pub tests: Vec<PlannedTest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impl_class: Option<ImplClass>,
}

#[derive(Debug, Serialize)]
pub struct VarsResponse {
    pub vars: Vec<String>,
}

/// Read a JSON document from `path`, or stdin when `path` is `None` or `-`
pub fn read_document<T>(path: Option<&Path>) -> TestgenResult<T>
where
    T: for<'de> Deserialize<'de>,
{
    let content = match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)?,
        _ => {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            content
        }
    };

    if content.trim().is_empty() {
        return Err(TestgenError::invalid_input("input document is empty"));
    }

    Ok(serde_json::from_str(&content)?)
}

/// Serialize `value` in the requested output format
pub fn render<T: Serialize>(value: &T, compact: bool) -> TestgenResult<String> {
    let json = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(json)
}
