use crate::error::{Error, Result};
use crate::value::Value;

/// Series: a named one-dimensional column of values
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Column name
    name: String,

    /// Cell values
    values: Vec<Value>,
}

impl Series {
    /// Create a new Series from a vector
    pub fn new(values: Vec<Value>, name: impl Into<String>) -> Self {
        Series {
            name: name.into(),
            values,
        }
    }

    /// Create from anything convertible into values
    pub fn from_values<T: Into<Value>>(values: Vec<T>, name: impl Into<String>) -> Self {
        Self::new(values.into_iter().map(Into::into).collect(), name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the value at a position
    pub fn get(&self, pos: usize) -> Option<&Value> {
        self.values.get(pos)
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Gather values at `indices`; `None` positions become null
    pub fn take(&self, indices: &[Option<usize>]) -> Result<Series> {
        let mut values = Vec::with_capacity(indices.len());
        for idx in indices {
            match idx {
                Some(i) => {
                    let v = self.values.get(*i).ok_or_else(|| {
                        Error::InvalidInput(format!(
                            "row {} out of bounds for column '{}' of length {}",
                            i,
                            self.name,
                            self.values.len()
                        ))
                    })?;
                    values.push(v.clone());
                }
                None => values.push(Value::Null),
            }
        }
        Ok(Series::new(values, self.name.clone()))
    }

    /// Number of null values
    pub fn null_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_null()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_pads_missing_with_null() {
        let s = Series::from_values(vec![10, 20, 30], "dept_id");
        let taken = s.take(&[Some(2), None, Some(0)]).unwrap();
        assert_eq!(
            taken.values(),
            &[Value::Integer(30), Value::Null, Value::Integer(10)]
        );
        assert_eq!(taken.null_count(), 1);
        assert!(s.take(&[Some(3)]).is_err());
    }
}
