//! DataFrame: an immutable table of named, typed columns
//!
//! Every transformation returns a new DataFrame; the receiver is never
//! modified.

pub mod display;
pub mod join;
pub mod transform;

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::series::Series;
use crate::types::{DataType, StructField, StructType};
use crate::value::{Row, Value};

pub use join::JoinType;

/// How the columns of new rows are described
#[derive(Debug, Clone)]
pub enum SchemaSpec {
    /// Column names only; types are inferred from the data
    Names(Vec<String>),
    /// Full schema
    Struct(StructType),
}

impl From<StructType> for SchemaSpec {
    fn from(schema: StructType) -> Self {
        SchemaSpec::Struct(schema)
    }
}

impl From<Vec<String>> for SchemaSpec {
    fn from(names: Vec<String>) -> Self {
        SchemaSpec::Names(names)
    }
}

impl From<Vec<&str>> for SchemaSpec {
    fn from(names: Vec<&str>) -> Self {
        SchemaSpec::Names(names.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for SchemaSpec {
    fn from(names: &[&str]) -> Self {
        SchemaSpec::Names(names.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for SchemaSpec {
    fn from(names: [&str; N]) -> Self {
        SchemaSpec::Names(names.iter().map(|s| s.to_string()).collect())
    }
}

/// DataFrame structure
#[derive(Debug, Clone, Default)]
pub struct DataFrame {
    schema: StructType,
    columns: Vec<Series>,
    row_count: usize,
}

impl DataFrame {
    /// Empty DataFrame with no columns and no rows
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from in-memory rows
    ///
    /// With [`SchemaSpec::Names`] each column's type is the widest type among
    /// its non-null values (all-null columns become strings) and every field is
    /// nullable. With a full [`StructType`] each value must conform to its
    /// field; integers widen into long and double fields.
    pub fn from_rows<R: Into<Row>>(rows: Vec<R>, schema: impl Into<SchemaSpec>) -> Result<Self> {
        let rows: Vec<Row> = rows.into_iter().map(Into::into).collect();
        let schema = match schema.into() {
            SchemaSpec::Struct(schema) => schema,
            SchemaSpec::Names(names) => infer_schema(&rows, names)?,
        };

        let mut seen = HashSet::new();
        for field in schema.fields() {
            if !seen.insert(field.name.as_str()) {
                return Err(Error::DuplicateColumnName(field.name.clone()));
            }
        }

        let row_count = rows.len();
        let mut columns: Vec<Vec<Value>> = schema
            .fields()
            .iter()
            .map(|_| Vec::with_capacity(row_count))
            .collect();
        for row in rows {
            if row.len() != schema.len() {
                return Err(Error::LengthMismatch {
                    expected: schema.len(),
                    actual: row.len(),
                });
            }
            for ((value, field), column) in row
                .into_values()
                .into_iter()
                .zip(schema.fields())
                .zip(columns.iter_mut())
            {
                column.push(conform_value(value, field)?);
            }
        }

        let columns = columns
            .into_iter()
            .zip(schema.fields())
            .map(|(values, field)| Series::new(values, field.name.clone()))
            .collect();
        Ok(DataFrame {
            schema,
            columns,
            row_count,
        })
    }

    /// Assemble from already validated parts
    pub(crate) fn from_parts(schema: StructType, columns: Vec<Series>, row_count: usize) -> Self {
        debug_assert_eq!(schema.len(), columns.len());
        debug_assert!(columns.iter().all(|c| c.len() == row_count));
        DataFrame {
            schema,
            columns,
            row_count,
        }
    }

    pub fn schema(&self) -> &StructType {
        &self.schema
    }

    /// Column names in order
    pub fn columns(&self) -> Vec<String> {
        self.schema.field_names()
    }

    /// Number of rows
    pub fn count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// Column by name
    pub fn column(&self, name: &str) -> Result<&Series> {
        let idx = self.schema.field_index(name)?;
        Ok(&self.columns[idx])
    }

    pub(crate) fn series(&self) -> &[Series] {
        &self.columns
    }

    /// Row at `idx`
    pub fn row(&self, idx: usize) -> Option<Row> {
        if idx >= self.row_count {
            return None;
        }
        Some(Row::new(
            self.columns
                .iter()
                .map(|c| c.values()[idx].clone())
                .collect(),
        ))
    }

    /// All rows in order
    pub fn collect(&self) -> Vec<Row> {
        (0..self.row_count).filter_map(|i| self.row(i)).collect()
    }

    /// Gather rows; `None` positions become all-null rows
    pub(crate) fn take(&self, indices: &[Option<usize>]) -> Result<DataFrame> {
        let columns = self
            .columns
            .iter()
            .map(|c| c.take(indices))
            .collect::<Result<Vec<_>>>()?;
        Ok(DataFrame::from_parts(
            self.schema.clone(),
            columns,
            indices.len(),
        ))
    }

    /// Place the columns of `other` to the right of this frame's columns
    pub(crate) fn hstack(&self, other: &DataFrame) -> Result<DataFrame> {
        if self.row_count != other.row_count {
            return Err(Error::LengthMismatch {
                expected: self.row_count,
                actual: other.row_count,
            });
        }
        let mut fields = self.schema.fields().to_vec();
        fields.extend(other.schema.fields().iter().cloned());
        let mut columns = self.columns.clone();
        columns.extend(other.columns.iter().cloned());
        Ok(DataFrame::from_parts(
            StructType::new(fields),
            columns,
            self.row_count,
        ))
    }
}

fn conform_value(value: Value, field: &StructField) -> Result<Value> {
    if value.is_null() {
        if !field.nullable {
            return Err(Error::Schema(format!(
                "field '{}' is not nullable but received null",
                field.name
            )));
        }
        return Ok(Value::Null);
    }
    let found = value.data_type();
    value
        .conform(&field.data_type)
        .ok_or_else(|| Error::TypeMismatch {
            name: field.name.clone(),
            expected: field.data_type.clone(),
            found: found.unwrap_or(DataType::String),
        })
}

fn infer_schema(rows: &[Row], names: Vec<String>) -> Result<StructType> {
    let mut fields = Vec::with_capacity(names.len());
    for (i, name) in names.into_iter().enumerate() {
        let mut inferred: Option<DataType> = None;
        for row in rows {
            let Some(dt) = row.get(i).and_then(|v| v.data_type()) else {
                continue;
            };
            inferred = Some(match inferred {
                None => dt,
                Some(prev) if prev == dt => prev,
                Some(prev) => prev.numeric_supertype(&dt).ok_or_else(|| Error::TypeMismatch {
                    name: name.clone(),
                    expected: prev.clone(),
                    found: dt.clone(),
                })?,
            });
        }
        fields.push(StructField::nullable(
            name,
            inferred.unwrap_or(DataType::String),
        ));
    }
    Ok(StructType::new(fields))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inference_widens_numeric_columns() {
        let df = DataFrame::from_rows(
            vec![(Value::Integer(1), Value::Null), (Value::Long(2), Value::Null)],
            ["a", "b"],
        )
        .unwrap();
        assert_eq!(df.schema().field("a").unwrap().data_type, DataType::Long);
        assert_eq!(df.schema().field("b").unwrap().data_type, DataType::String);
        assert_eq!(df.column("a").unwrap().values()[0], Value::Long(1));
    }

    #[test]
    fn test_rejects_mixed_types_and_short_rows() {
        let mixed = DataFrame::from_rows(
            vec![(Value::Integer(1),), (Value::from("x"),)],
            ["a"],
        );
        assert!(matches!(mixed, Err(Error::TypeMismatch { .. })));

        let short = DataFrame::from_rows(vec![(1,)], ["a", "b"]);
        assert!(matches!(short, Err(Error::LengthMismatch { .. })));

        let dup = DataFrame::from_rows(vec![(1, 2)], ["a", "a"]);
        assert!(matches!(dup, Err(Error::DuplicateColumnName(_))));
    }

    #[test]
    fn test_non_nullable_field_rejects_null() {
        let schema = StructType::new(vec![StructField::new("id", DataType::Integer, false)]);
        let result = DataFrame::from_rows(vec![(Value::Null,)], schema);
        assert!(matches!(result, Err(Error::Schema(_))));
    }
}
