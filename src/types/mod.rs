//! Schema types: column data types, struct fields and struct (row) types
//!
//! A [`StructType`] is both the schema of a DataFrame and the type of a nested
//! struct column. Schemas round-trip through Spark's JSON interchange format
//! (see [`StructType::json`] and [`StructType::from_json`]).

mod json;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::error::{Error, Result};

/// Data type of a column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "json::TypeRepr", try_from = "json::TypeRepr")]
pub enum DataType {
    String,
    /// 32-bit signed integer
    Integer,
    /// 64-bit signed integer
    Long,
    Double,
    Boolean,
    Struct(StructType),
}

impl DataType {
    /// Name used in the JSON interchange format and in `printSchema`
    pub fn type_name(&self) -> &'static str {
        match self {
            DataType::String => "string",
            DataType::Integer => "integer",
            DataType::Long => "long",
            DataType::Double => "double",
            DataType::Boolean => "boolean",
            DataType::Struct(_) => "struct",
        }
    }

    /// Compact SQL-ish rendering, e.g. `struct<firstname:string,salary:int>`
    pub fn simple_string(&self) -> String {
        match self {
            DataType::String => "string".to_string(),
            DataType::Integer => "int".to_string(),
            DataType::Long => "bigint".to_string(),
            DataType::Double => "double".to_string(),
            DataType::Boolean => "boolean".to_string(),
            DataType::Struct(st) => st.simple_string(),
        }
    }

    /// Parse a cast target such as `"Integer"`, `"bigint"` or `"string"`
    pub fn parse(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "string" => Ok(DataType::String),
            "int" | "integer" => Ok(DataType::Integer),
            "long" | "bigint" => Ok(DataType::Long),
            "double" => Ok(DataType::Double),
            "boolean" | "bool" => Ok(DataType::Boolean),
            other => Err(Error::Schema(format!("unsupported data type: {}", other))),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, DataType::Integer | DataType::Long | DataType::Double)
    }

    /// Wider of two numeric types; `None` when either side is not numeric
    pub fn numeric_supertype(&self, other: &DataType) -> Option<DataType> {
        match (self, other) {
            (DataType::Double, b) if b.is_numeric() => Some(DataType::Double),
            (a, DataType::Double) if a.is_numeric() => Some(DataType::Double),
            (DataType::Long, b) if b.is_numeric() => Some(DataType::Long),
            (a, DataType::Long) if a.is_numeric() => Some(DataType::Long),
            (DataType::Integer, DataType::Integer) => Some(DataType::Integer),
            _ => None,
        }
    }

    /// Type both sides of a comparison are cast to when a string meets a number
    pub(crate) fn comparison_coercion(&self, other: &DataType) -> Option<DataType> {
        match (self, other) {
            (DataType::String, n) | (n, DataType::String) if n.is_numeric() => Some(n.clone()),
            _ => None,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_string())
    }
}

fn default_nullable() -> bool {
    true
}

/// A named, typed field of a [`StructType`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructField {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: DataType,
    #[serde(default = "default_nullable")]
    pub nullable: bool,
    #[serde(default)]
    pub metadata: Map<String, JsonValue>,
}

impl StructField {
    pub fn new(name: impl Into<String>, data_type: DataType, nullable: bool) -> Self {
        StructField {
            name: name.into(),
            data_type,
            nullable,
            metadata: Map::new(),
        }
    }

    /// Nullable field, the default Spark uses for `StructField(name, type)`
    pub fn nullable(name: impl Into<String>, data_type: DataType) -> Self {
        Self::new(name, data_type, true)
    }

    pub fn with_metadata(mut self, metadata: Map<String, JsonValue>) -> Self {
        self.metadata = metadata;
        self
    }
}

/// Ordered list of fields
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "json::StructRepr", try_from = "json::StructRepr")]
pub struct StructType {
    fields: Vec<StructField>,
}

impl StructType {
    pub fn new(fields: Vec<StructField>) -> Self {
        StructType { fields }
    }

    /// Builder-style append
    pub fn add(mut self, field: StructField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn fields(&self) -> &[StructField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field_names(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.name.clone()).collect()
    }

    /// Position of the single field named `name`
    ///
    /// Errors when no field or more than one field carries the name (the
    /// latter happens after joining frames that share column names).
    pub fn field_index(&self, name: &str) -> Result<usize> {
        let mut found = self
            .fields
            .iter()
            .enumerate()
            .filter(|(_, f)| f.name == name)
            .map(|(i, _)| i);
        match (found.next(), found.next()) {
            (Some(i), None) => Ok(i),
            (Some(_), Some(_)) => Err(Error::AmbiguousColumn(name.to_string())),
            (None, _) => Err(Error::ColumnNotFound(name.to_string())),
        }
    }

    pub fn field(&self, name: &str) -> Result<&StructField> {
        let idx = self.field_index(name)?;
        Ok(&self.fields[idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    pub(crate) fn fields_mut(&mut self) -> &mut Vec<StructField> {
        &mut self.fields
    }

    /// `struct<firstname:string,middlename:string,salary:int>`
    pub fn simple_string(&self) -> String {
        let inner: Vec<String> = self
            .fields
            .iter()
            .map(|f| format!("{}:{}", f.name, f.data_type.simple_string()))
            .collect();
        format!("struct<{}>", inner.join(","))
    }

    /// Compact JSON interchange representation
    pub fn json(&self) -> String {
        // Serializing plain strings, bools and maps cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Parse a schema previously produced by [`StructType::json`]
    pub fn from_json(text: &str) -> Result<Self> {
        let schema: StructType = serde_json::from_str(text)?;
        Ok(schema)
    }

    /// `printSchema` rendering
    pub fn tree_string(&self) -> String {
        let mut out = String::from("root\n");
        write_tree(&mut out, &self.fields, 1);
        out
    }
}

fn write_tree(out: &mut String, fields: &[StructField], depth: usize) {
    let prefix = " |   ".repeat(depth - 1);
    for field in fields {
        out.push_str(&format!(
            "{} |-- {}: {} (nullable = {})\n",
            prefix,
            field.name,
            field.data_type.type_name(),
            field.nullable
        ));
        if let DataType::Struct(nested) = &field.data_type {
            write_tree(out, nested.fields(), depth + 1);
        }
    }
}

impl From<Vec<StructField>> for StructType {
    fn from(fields: Vec<StructField>) -> Self {
        StructType::new(fields)
    }
}

impl fmt::Display for StructType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_string())
    }
}
