//! Textual type descriptors
//!
//! Parameter types arrive as source text such as `java.util.List<String>`,
//! `int[]` or `String...`. A [`TypeDescriptor`] keeps the erased qualified
//! name split into segments plus the number of array dimensions (varargs
//! count as one), which is everything needed to build identifiers from it.

use crate::error::{NamingError, NamingResult};
use crate::strategy::{is_identifier_part, is_identifier_start};
use std::fmt;
use std::str::FromStr;

const ARRAY_SUFFIX: &str = "Arr";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeDescriptor {
    segments: Vec<String>,
    dimensions: usize,
}

impl TypeDescriptor {
    /// Parse a descriptor, erasing generic arguments.
    ///
    /// # Examples
    /// ```
    /// use testgen_naming::TypeDescriptor;
    ///
    /// let ty = TypeDescriptor::parse("java.util.Map<String, List<Integer>>[]").unwrap();
    /// assert_eq!(ty.qualified_name(), "java.util.Map");
    /// assert_eq!(ty.dimensions(), 1);
    /// assert_eq!(ty.simple_id(), "MapArr");
    /// ```
    pub fn parse(text: &str) -> NamingResult<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(NamingError::invalid_type(text, "descriptor is empty"));
        }

        let erased =
            erase_generics(trimmed).map_err(|reason| NamingError::invalid_type(text, reason))?;

        let mut rest = erased.trim_end();
        let mut dimensions = 0;
        if let Some(stripped) = rest.strip_suffix("...") {
            dimensions += 1;
            rest = stripped.trim_end();
        }
        while let Some(stripped) = rest.strip_suffix(']') {
            let stripped = stripped.trim_end();
            match stripped.strip_suffix('[') {
                Some(inner) => {
                    dimensions += 1;
                    rest = inner.trim_end();
                }
                None => return Err(NamingError::invalid_type(text, "unbalanced ']'")),
            }
        }

        if rest.is_empty() {
            return Err(NamingError::invalid_type(text, "missing type name"));
        }

        let mut segments = Vec::new();
        for segment in rest.split(['.', '$']) {
            let segment = segment.trim();
            let mut chars = segment.chars();
            let valid = match chars.next() {
                Some(first) => is_identifier_start(first) && chars.all(is_identifier_part),
                None => false,
            };
            if !valid {
                return Err(NamingError::invalid_type(
                    text,
                    format!("'{}' is not a valid type name segment", segment),
                ));
            }
            segments.push(segment.to_string());
        }

        Ok(Self {
            segments,
            dimensions,
        })
    }

    /// Erased, dotted name without array dimensions
    pub fn qualified_name(&self) -> String {
        self.segments.join(".")
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn is_array(&self) -> bool {
        self.dimensions > 0
    }

    /// Identifier built from the simple name: `List`, `intArr`
    pub fn simple_id(&self) -> String {
        self.qualified_id(0).unwrap_or_default()
    }

    /// Identifier built from the last `depth + 1` segments joined by `_`,
    /// or `None` if the type does not have that many segments.
    ///
    /// ```
    /// use testgen_naming::TypeDescriptor;
    ///
    /// let ty = TypeDescriptor::parse("java.util.List").unwrap();
    /// assert_eq!(ty.qualified_id(1).as_deref(), Some("util_List"));
    /// assert_eq!(ty.qualified_id(3), None);
    /// ```
    pub fn qualified_id(&self, depth: usize) -> Option<String> {
        if depth >= self.segments.len() {
            return None;
        }
        let start = self.segments.len() - depth - 1;
        let mut id = self.segments[start..].join("_");
        for _ in 0..self.dimensions {
            id.push_str(ARRAY_SUFFIX);
        }
        Some(id)
    }

    /// Identifier using every segment
    pub fn full_id(&self) -> String {
        self.qualified_id(self.segments.len().saturating_sub(1))
            .unwrap_or_default()
    }
}

impl FromStr for TypeDescriptor {
    type Err = NamingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualified_name())?;
        for _ in 0..self.dimensions {
            write!(f, "[]")?;
        }
        Ok(())
    }
}

/// Drop everything between balanced angle brackets
fn erase_generics(text: &str) -> Result<String, &'static str> {
    let mut erased = String::with_capacity(text.len());
    let mut depth = 0usize;
    for ch in text.chars() {
        match ch {
            '<' => depth += 1,
            '>' => {
                depth = depth.checked_sub(1).ok_or("unbalanced '>'")?;
            }
            _ if depth == 0 => erased.push(ch),
            _ => {}
        }
    }
    if depth != 0 {
        return Err("unbalanced '<'");
    }
    Ok(erased)
}
