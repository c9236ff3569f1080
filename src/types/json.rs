//! Serde representations matching Spark's schema JSON
//!
//! Primitive types are bare strings (`"string"`, `"integer"`, ...); struct types
//! are objects of the form `{"type":"struct","fields":[...]}`.

use std::convert::TryFrom;

use serde::{Deserialize, Serialize};

use super::{DataType, StructField, StructType};
use crate::error::Error;

#[derive(Clone, Serialize, Deserialize)]
pub(super) struct StructRepr {
    #[serde(rename = "type")]
    kind: String,
    fields: Vec<StructField>,
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub(super) enum TypeRepr {
    Simple(String),
    Struct(StructRepr),
}

impl From<StructType> for StructRepr {
    fn from(st: StructType) -> Self {
        StructRepr {
            kind: "struct".to_string(),
            fields: st.fields,
        }
    }
}

impl TryFrom<StructRepr> for StructType {
    type Error = Error;

    fn try_from(repr: StructRepr) -> Result<Self, Self::Error> {
        if repr.kind != "struct" {
            return Err(Error::Schema(format!(
                "expected a struct type, found '{}'",
                repr.kind
            )));
        }
        Ok(StructType::new(repr.fields))
    }
}

impl From<DataType> for TypeRepr {
    fn from(dt: DataType) -> Self {
        match dt {
            DataType::Struct(st) => TypeRepr::Struct(st.into()),
            other => TypeRepr::Simple(other.type_name().to_string()),
        }
    }
}

impl TryFrom<TypeRepr> for DataType {
    type Error = Error;

    fn try_from(repr: TypeRepr) -> Result<Self, Self::Error> {
        match repr {
            TypeRepr::Simple(name) => match name.as_str() {
                "string" => Ok(DataType::String),
                "integer" => Ok(DataType::Integer),
                "long" => Ok(DataType::Long),
                "double" => Ok(DataType::Double),
                "boolean" => Ok(DataType::Boolean),
                other => Err(Error::Schema(format!("unsupported data type: {}", other))),
            },
            TypeRepr::Struct(st) => Ok(DataType::Struct(StructType::try_from(st)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_json_matches_interchange_format() {
        let schema = StructType::new(vec![
            StructField::nullable("id", DataType::String),
            StructField::new("salary", DataType::Integer, false),
        ]);
        assert_eq!(
            schema.json(),
            r#"{"type":"struct","fields":[{"name":"id","type":"string","nullable":true,"metadata":{}},{"name":"salary","type":"integer","nullable":false,"metadata":{}}]}"#
        );
    }

    #[test]
    fn test_missing_nullable_and_metadata_default() {
        let text = r#"{"type":"struct","fields":[{"name":"gender","type":"string"}]}"#;
        let schema = StructType::from_json(text).unwrap();
        let field = schema.field("gender").unwrap();
        assert!(field.nullable);
        assert!(field.metadata.is_empty());
    }

    #[test]
    fn test_rejects_unknown_types() {
        let text = r#"{"type":"struct","fields":[{"name":"tags","type":"array"}]}"#;
        assert!(StructType::from_json(text).is_err());
        assert!(StructType::from_json(r#"{"type":"map","fields":[]}"#).is_err());
        assert!(StructType::from_json("not json").is_err());
    }
}
