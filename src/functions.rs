//! Free functions building column expressions, named after their Spark SQL
//! counterparts

use crate::expr::{CaseWhen, Expr};
use crate::value::Value;
use crate::window::WindowFunction;

/// Reference a column by name
pub fn col(name: &str) -> Expr {
    Expr::Column(name.to_string())
}

/// Constant column
pub fn lit(value: impl Into<Value>) -> Expr {
    Expr::Literal(value.into())
}

/// Start a `CASE WHEN condition THEN value` chain
pub fn when(condition: impl Into<Expr>, value: impl Into<Expr>) -> CaseWhen {
    CaseWhen::new(condition.into(), value.into())
}

/// Replace every match of the regular expression `pattern` with `replacement`
///
/// The replacement may reference capture groups as `$1` or `${name}`. An
/// invalid pattern is reported when the expression is evaluated.
pub fn regexp_replace(input: impl Into<Expr>, pattern: &str, replacement: &str) -> Expr {
    Expr::RegexpReplace {
        input: Box::new(input.into()),
        pattern: pattern.to_string(),
        replacement: replacement.to_string(),
    }
}

/// Sequential number starting at 1 within the window partition
pub fn row_number() -> WindowFunction {
    WindowFunction::RowNumber
}

/// Rank with gaps after ties
pub fn rank() -> WindowFunction {
    WindowFunction::Rank
}

/// Rank without gaps
pub fn dense_rank() -> WindowFunction {
    WindowFunction::DenseRank
}

/// `(rank - 1) / (rows in partition - 1)`
pub fn percent_rank() -> WindowFunction {
    WindowFunction::PercentRank
}

/// Fraction of partition rows ordered at or before the current row
pub fn cume_dist() -> WindowFunction {
    WindowFunction::CumeDist
}

/// Bucket number 1..=n splitting each partition into `n` nearly equal groups
pub fn ntile(n: u32) -> WindowFunction {
    WindowFunction::Ntile(n)
}

/// Value `offset` rows before the current row, null when there is none
pub fn lag(input: impl Into<Expr>, offset: usize) -> WindowFunction {
    lag_with_default(input, offset, Value::Null)
}

pub fn lag_with_default(
    input: impl Into<Expr>,
    offset: usize,
    default: impl Into<Value>,
) -> WindowFunction {
    WindowFunction::Lag {
        input: Box::new(input.into()),
        offset,
        default: default.into(),
    }
}

/// Value `offset` rows after the current row, null when there is none
pub fn lead(input: impl Into<Expr>, offset: usize) -> WindowFunction {
    lead_with_default(input, offset, Value::Null)
}

pub fn lead_with_default(
    input: impl Into<Expr>,
    offset: usize,
    default: impl Into<Value>,
) -> WindowFunction {
    WindowFunction::Lead {
        input: Box::new(input.into()),
        offset,
        default: default.into(),
    }
}
