//! Column and row transformations

use super::DataFrame;
use crate::error::{Error, Result};
use crate::expr::{compare_rows, Expr, SortKey};
use crate::series::Series;
use crate::types::{StructField, StructType};

impl DataFrame {
    /// Add a column computed by `expr`, or replace the column named `name`
    ///
    /// A replaced column keeps its position; a new column is appended.
    pub fn with_column(&self, name: &str, expr: impl Into<Expr>) -> Result<DataFrame> {
        let expr = expr.into();
        let values = expr.evaluate(self)?;
        let field = StructField::new(
            name,
            expr.data_type(&self.schema)?,
            expr.nullable(&self.schema),
        );
        let series = Series::new(values, name);

        let mut schema = self.schema.clone();
        let mut columns = self.columns.clone();
        match self.schema.field_index(name) {
            Ok(idx) => {
                schema.fields_mut()[idx] = field;
                columns[idx] = series;
            }
            Err(Error::ColumnNotFound(_)) => {
                schema.fields_mut().push(field);
                columns.push(series);
            }
            Err(e) => return Err(e),
        }
        Ok(DataFrame::from_parts(schema, columns, self.row_count))
    }

    /// Rename every column called `existing`; a missing column is a no-op
    pub fn with_column_renamed(&self, existing: &str, new: &str) -> Result<DataFrame> {
        if !self.schema.contains(existing) {
            log::warn!(
                "with_column_renamed: column '{}' does not exist, returning the frame unchanged",
                existing
            );
            return Ok(self.clone());
        }
        let mut schema = self.schema.clone();
        let mut columns = self.columns.clone();
        for (field, column) in schema.fields_mut().iter_mut().zip(columns.iter_mut()) {
            if field.name == existing {
                field.name = new.to_string();
                *column = column.clone().with_name(new);
            }
        }
        Ok(DataFrame::from_parts(schema, columns, self.row_count))
    }

    /// Remove columns by name; names that do not exist are ignored
    pub fn drop<'a, I>(&self, names: I) -> Result<DataFrame>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let names: Vec<&str> = names.into_iter().collect();
        let (fields, columns): (Vec<StructField>, Vec<Series>) = self
            .schema
            .fields()
            .iter()
            .cloned()
            .zip(self.columns.iter().cloned())
            .filter(|(field, _)| !names.contains(&field.name.as_str()))
            .unzip();
        Ok(DataFrame::from_parts(
            StructType::new(fields),
            columns,
            self.row_count,
        ))
    }

    /// Project a list of expressions
    pub fn select<I, E>(&self, exprs: I) -> Result<DataFrame>
    where
        I: IntoIterator<Item = E>,
        E: Into<Expr>,
    {
        let mut fields = Vec::new();
        let mut columns = Vec::new();
        for expr in exprs {
            let expr = expr.into();
            let name = expr.output_name();
            fields.push(StructField::new(
                name.clone(),
                expr.data_type(&self.schema)?,
                expr.nullable(&self.schema),
            ));
            columns.push(Series::new(expr.evaluate(self)?, name));
        }
        Ok(DataFrame::from_parts(
            StructType::new(fields),
            columns,
            self.row_count,
        ))
    }

    /// Keep rows where `condition` is true (null counts as false)
    pub fn filter(&self, condition: impl Into<Expr>) -> Result<DataFrame> {
        let condition = condition.into();
        if condition.contains_window() {
            return Err(Error::InvalidInput(format!(
                "window functions are not allowed in filter: {}",
                condition
            )));
        }
        let mask = condition.evaluate(self)?;
        let indices: Vec<Option<usize>> = mask
            .iter()
            .enumerate()
            .filter(|(_, v)| v.as_bool() == Some(true))
            .map(|(i, _)| Some(i))
            .collect();
        self.take(&indices)
    }

    /// Stable sort by the given keys
    pub fn order_by<I, K>(&self, keys: I) -> Result<DataFrame>
    where
        I: IntoIterator<Item = K>,
        K: Into<SortKey>,
    {
        let keys: Vec<SortKey> = keys.into_iter().map(Into::into).collect();
        let sort_columns = keys
            .iter()
            .map(|k| k.expr.evaluate(self))
            .collect::<Result<Vec<_>>>()?;
        let mut order: Vec<usize> = (0..self.row_count).collect();
        order.sort_by(|&a, &b| compare_rows(&keys, &sort_columns, a, b));
        let indices: Vec<Option<usize>> = order.into_iter().map(Some).collect();
        self.take(&indices)
    }

    /// First `n` rows
    pub fn limit(&self, n: usize) -> Result<DataFrame> {
        let indices: Vec<Option<usize>> = (0..n.min(self.row_count)).map(Some).collect();
        self.take(&indices)
    }
}
