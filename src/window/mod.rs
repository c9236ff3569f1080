//! Window specifications and analytic window functions
//!
//! A [`WindowSpec`] splits the rows of a DataFrame into partitions by the
//! values of its partition expressions and orders each partition by its sort
//! keys. A [`WindowFunction`] then computes one value per row from the row's
//! position inside its ordered partition. Results are written back in the
//! DataFrame's original row order.

use std::collections::HashMap;
use std::fmt;

use crate::dataframe::DataFrame;
use crate::error::{Error, Result};
use crate::expr::{compare_rows, Expr, SortKey};
use crate::types::{DataType, StructType};
use crate::value::{Value, ValueKey};

/// Entry point mirroring Spark's `Window` object
pub struct Window;

impl Window {
    pub fn partition_by<I, E>(columns: I) -> WindowSpec
    where
        I: IntoIterator<Item = E>,
        E: Into<Expr>,
    {
        WindowSpec::default().partition_by(columns)
    }

    pub fn order_by<I, K>(keys: I) -> WindowSpec
    where
        I: IntoIterator<Item = K>,
        K: Into<SortKey>,
    {
        WindowSpec::default().order_by(keys)
    }
}

/// Partition keys plus ordering keys
#[derive(Debug, Clone, Default)]
pub struct WindowSpec {
    partition_by: Vec<Expr>,
    order_by: Vec<SortKey>,
}

impl WindowSpec {
    pub fn partition_by<I, E>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Expr>,
    {
        self.partition_by = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn order_by<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<SortKey>,
    {
        self.order_by = keys.into_iter().map(Into::into).collect();
        self
    }
}

impl fmt::Display for WindowSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if !self.partition_by.is_empty() {
            let cols: Vec<String> = self.partition_by.iter().map(|e| e.to_string()).collect();
            parts.push(format!("PARTITION BY {}", cols.join(", ")));
        }
        if !self.order_by.is_empty() {
            let keys: Vec<String> = self.order_by.iter().map(|k| k.to_string()).collect();
            parts.push(format!("ORDER BY {}", keys.join(", ")));
        }
        write!(f, "{}", parts.join(" "))
    }
}

/// Analytic functions evaluated over a window
#[derive(Debug, Clone)]
pub enum WindowFunction {
    RowNumber,
    Rank,
    DenseRank,
    PercentRank,
    CumeDist,
    Ntile(u32),
    Lag {
        input: Box<Expr>,
        offset: usize,
        default: Value,
    },
    Lead {
        input: Box<Expr>,
        offset: usize,
        default: Value,
    },
}

impl WindowFunction {
    /// Apply over `spec`, producing a column expression
    pub fn over(self, spec: &WindowSpec) -> Expr {
        Expr::Window {
            function: self,
            spec: spec.clone(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            WindowFunction::RowNumber => "row_number",
            WindowFunction::Rank => "rank",
            WindowFunction::DenseRank => "dense_rank",
            WindowFunction::PercentRank => "percent_rank",
            WindowFunction::CumeDist => "cume_dist",
            WindowFunction::Ntile(_) => "ntile",
            WindowFunction::Lag { .. } => "lag",
            WindowFunction::Lead { .. } => "lead",
        }
    }

    pub(crate) fn data_type(&self, schema: &StructType) -> Result<DataType> {
        match self {
            WindowFunction::RowNumber
            | WindowFunction::Rank
            | WindowFunction::DenseRank
            | WindowFunction::Ntile(_) => Ok(DataType::Integer),
            WindowFunction::PercentRank | WindowFunction::CumeDist => Ok(DataType::Double),
            WindowFunction::Lag { input, .. } | WindowFunction::Lead { input, .. } => {
                input.data_type(schema)
            }
        }
    }

    pub(crate) fn nullable(&self) -> bool {
        matches!(self, WindowFunction::Lag { .. } | WindowFunction::Lead { .. })
    }
}

impl fmt::Display for WindowFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowFunction::Ntile(n) => write!(f, "ntile({})", n),
            WindowFunction::Lag {
                input,
                offset,
                default,
            }
            | WindowFunction::Lead {
                input,
                offset,
                default,
            } => write!(f, "{}({}, {}, {})", self.name(), input, offset, default),
            other => write!(f, "{}()", other.name()),
        }
    }
}

/// Row indices grouped by partition key, in first-seen order
fn partition_rows(spec: &WindowSpec, df: &DataFrame) -> Result<Vec<Vec<usize>>> {
    let keys = spec
        .partition_by
        .iter()
        .map(|e| e.evaluate(df))
        .collect::<Result<Vec<_>>>()?;

    let mut groups: Vec<Vec<usize>> = Vec::new();
    let mut lookup: HashMap<Vec<Option<ValueKey>>, usize> = HashMap::new();
    for row in 0..df.count() {
        let key: Vec<Option<ValueKey>> = keys.iter().map(|col| col[row].key()).collect();
        let slot = *lookup.entry(key).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(row);
    }
    Ok(groups)
}

/// Evaluate `function` over `spec` for every row of `df`
pub(crate) fn evaluate(
    function: &WindowFunction,
    spec: &WindowSpec,
    df: &DataFrame,
) -> Result<Vec<Value>> {
    if spec.order_by.is_empty() {
        return Err(Error::InvalidWindow(format!(
            "window function {}() requires the window to be ordered, add order_by to the window spec",
            function.name()
        )));
    }
    if let WindowFunction::Ntile(0) = function {
        return Err(Error::InvalidWindow(
            "ntile requires a positive bucket count".to_string(),
        ));
    }

    let order_columns = spec
        .order_by
        .iter()
        .map(|k| k.expr.evaluate(df))
        .collect::<Result<Vec<_>>>()?;

    // lag/lead read their input column and cast the default to its type
    let input = match function {
        WindowFunction::Lag { input, default, .. } | WindowFunction::Lead { input, default, .. } => {
            let dt = input.data_type(df.schema())?;
            Some((input.evaluate(df)?, default.cast(&dt)?))
        }
        _ => None,
    };

    let mut partitions = partition_rows(spec, df)?;
    log::debug!(
        "evaluating {} over {} partition(s) of {} row(s)",
        function.name(),
        partitions.len(),
        df.count()
    );

    let mut out = vec![Value::Null; df.count()];
    for rows in partitions.iter_mut() {
        // sort_by is stable: ties keep their input order
        rows.sort_by(|&a, &b| compare_rows(&spec.order_by, &order_columns, a, b));
        let is_peer = |i: usize, j: usize| {
            compare_rows(&spec.order_by, &order_columns, rows[i], rows[j]).is_eq()
        };
        let n = rows.len();

        match function {
            WindowFunction::RowNumber => {
                for (i, &row) in rows.iter().enumerate() {
                    out[row] = Value::Integer(i as i32 + 1);
                }
            }
            WindowFunction::Rank | WindowFunction::PercentRank => {
                let mut rank = 1;
                for i in 0..n {
                    if i > 0 && !is_peer(i - 1, i) {
                        rank = i + 1;
                    }
                    out[rows[i]] = match function {
                        WindowFunction::Rank => Value::Integer(rank as i32),
                        _ if n == 1 => Value::Double(0.0),
                        _ => Value::Double((rank - 1) as f64 / (n - 1) as f64),
                    };
                }
            }
            WindowFunction::DenseRank => {
                let mut rank = 1;
                for i in 0..n {
                    if i > 0 && !is_peer(i - 1, i) {
                        rank += 1;
                    }
                    out[rows[i]] = Value::Integer(rank);
                }
            }
            WindowFunction::CumeDist => {
                let mut start = 0;
                while start < n {
                    let mut end = start + 1;
                    while end < n && is_peer(start, end) {
                        end += 1;
                    }
                    let dist = end as f64 / n as f64;
                    for &row in &rows[start..end] {
                        out[row] = Value::Double(dist);
                    }
                    start = end;
                }
            }
            WindowFunction::Ntile(buckets) => {
                let buckets = *buckets as usize;
                let base = n / buckets;
                let extra = n % buckets;
                // the first `extra` buckets hold one more row
                let big = extra * (base + 1);
                for (i, &row) in rows.iter().enumerate() {
                    let bucket = if i < big {
                        i / (base + 1)
                    } else {
                        extra + (i - big) / base
                    };
                    out[row] = Value::Integer(bucket as i32 + 1);
                }
            }
            WindowFunction::Lag { offset, .. } | WindowFunction::Lead { offset, .. } => {
                let Some((values, default)) = input.as_ref() else {
                    continue;
                };
                let lag = matches!(function, WindowFunction::Lag { .. });
                for (i, &row) in rows.iter().enumerate() {
                    let source = if lag {
                        i.checked_sub(*offset)
                    } else {
                        Some(i + offset).filter(|&j| j < n)
                    };
                    out[row] = match source {
                        Some(j) => values[rows[j]].clone(),
                        None => default.clone(),
                    };
                }
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::{dense_rank, ntile, rank};

    #[test]
    fn test_unordered_window_is_rejected() {
        let df = DataFrame::from_rows(vec![("a", 1)], ["k", "v"]).unwrap();
        let spec = Window::partition_by(["k"]);
        let err = rank().over(&spec).evaluate(&df).unwrap_err();
        assert!(matches!(err, Error::InvalidWindow(_)));
    }

    #[test]
    fn test_ntile_spreads_extra_rows_over_first_buckets() {
        let rows: Vec<(i32,)> = (1..=7).map(|i| (i,)).collect();
        let df = DataFrame::from_rows(rows, ["v"]).unwrap();
        let spec = Window::order_by(["v"]);
        let out = ntile(3).over(&spec).evaluate(&df).unwrap();
        let buckets: Vec<i64> = out.iter().filter_map(|v| v.as_i64()).collect();
        assert_eq!(buckets, vec![1, 1, 1, 2, 2, 3, 3]);
        assert!(ntile(0).over(&spec).evaluate(&df).is_err());
    }

    #[test]
    fn test_null_partition_keys_group_together() {
        let df = DataFrame::from_rows(
            vec![
                (Value::Null, Value::Integer(2)),
                (Value::from("x"), Value::Integer(1)),
                (Value::Null, Value::Integer(1)),
            ],
            crate::types::StructType::new(vec![
                crate::types::StructField::nullable("k", DataType::String),
                crate::types::StructField::nullable("v", DataType::Integer),
            ]),
        )
        .unwrap();
        let spec = Window::partition_by(["k"]).order_by(["v"]);
        let out = dense_rank().over(&spec).evaluate(&df).unwrap();
        assert_eq!(
            out,
            vec![Value::Integer(2), Value::Integer(1), Value::Integer(1)]
        );
    }
}
