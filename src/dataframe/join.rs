//! Joins between two DataFrames

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::DataFrame;
use crate::error::{Error, Result};
use crate::expr::Expr;
use crate::series::Series;
use crate::types::{StructField, StructType};
use crate::value::{Value, ValueKey};

/// Join kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    /// Only rows matched on both sides
    Inner,
    /// All rows of both sides
    FullOuter,
    /// All left rows plus their right matches
    LeftOuter,
    /// All right rows plus their left matches
    RightOuter,
    /// Left rows that have a match, left columns only
    LeftSemi,
    /// Left rows without a match, left columns only
    LeftAnti,
    /// Every pair of rows (filtered by the condition when one is given)
    Cross,
}

impl JoinType {
    fn keeps_unmatched_left(&self) -> bool {
        matches!(self, JoinType::LeftOuter | JoinType::FullOuter)
    }

    fn keeps_unmatched_right(&self) -> bool {
        matches!(self, JoinType::RightOuter | JoinType::FullOuter)
    }

    fn outputs_right_columns(&self) -> bool {
        !matches!(self, JoinType::LeftSemi | JoinType::LeftAnti)
    }
}

impl FromStr for JoinType {
    type Err = Error;

    /// Accepts Spark's spellings, case-insensitively
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "inner" => Ok(JoinType::Inner),
            "outer" | "full" | "fullouter" | "full_outer" => Ok(JoinType::FullOuter),
            "left" | "leftouter" | "left_outer" => Ok(JoinType::LeftOuter),
            "right" | "rightouter" | "right_outer" => Ok(JoinType::RightOuter),
            "semi" | "leftsemi" | "left_semi" => Ok(JoinType::LeftSemi),
            "anti" | "leftanti" | "left_anti" => Ok(JoinType::LeftAnti),
            "cross" => Ok(JoinType::Cross),
            _ => Err(Error::InvalidJoinType(s.to_string())),
        }
    }
}

impl fmt::Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JoinType::Inner => "inner",
            JoinType::FullOuter => "full_outer",
            JoinType::LeftOuter => "left_outer",
            JoinType::RightOuter => "right_outer",
            JoinType::LeftSemi => "left_semi",
            JoinType::LeftAnti => "left_anti",
            JoinType::Cross => "cross",
        };
        write!(f, "{}", name)
    }
}

/// For each left row, the matching right rows in right order
type Matches = Vec<Vec<usize>>;

fn hash_matches(left_keys: &[Vec<Value>], right_keys: &[Vec<Value>], n_left: usize, n_right: usize) -> Matches {
    let composite = |cols: &[Vec<Value>], row: usize| -> Option<Vec<ValueKey>> {
        // a null in any key column never matches
        cols.iter().map(|c| c[row].key()).collect()
    };

    let mut table: HashMap<Vec<ValueKey>, Vec<usize>> = HashMap::new();
    for j in 0..n_right {
        if let Some(key) = composite(right_keys, j) {
            table.entry(key).or_default().push(j);
        }
    }
    (0..n_left)
        .map(|i| {
            composite(left_keys, i)
                .and_then(|key| table.get(&key).cloned())
                .unwrap_or_default()
        })
        .collect()
}

fn nested_loop_matches(left: &DataFrame, right: &DataFrame, condition: &Expr) -> Result<Matches> {
    let (n_left, n_right) = (left.count(), right.count());
    let mut left_idx = Vec::with_capacity(n_left * n_right);
    let mut right_idx = Vec::with_capacity(n_left * n_right);
    for i in 0..n_left {
        for j in 0..n_right {
            left_idx.push(Some(i));
            right_idx.push(Some(j));
        }
    }
    let pairs = left.take(&left_idx)?.hstack(&right.take(&right_idx)?)?;
    let mask = condition.evaluate(&pairs)?;

    let mut matches = vec![Vec::new(); n_left];
    for (pos, v) in mask.iter().enumerate() {
        if v.as_bool() == Some(true) {
            matches[pos / n_right].push(pos % n_right);
        }
    }
    Ok(matches)
}

/// Output row plan: (left row, right row), `None` for the padded side
fn plan_rows(matches: &Matches, n_right: usize, how: JoinType) -> Vec<(Option<usize>, Option<usize>)> {
    let mut plan = Vec::new();
    let mut right_matched = vec![false; n_right];
    for (i, rights) in matches.iter().enumerate() {
        match how {
            JoinType::LeftSemi => {
                if !rights.is_empty() {
                    plan.push((Some(i), None));
                }
            }
            JoinType::LeftAnti => {
                if rights.is_empty() {
                    plan.push((Some(i), None));
                }
            }
            _ => {
                for &j in rights {
                    plan.push((Some(i), Some(j)));
                    right_matched[j] = true;
                }
                if rights.is_empty() && how.keeps_unmatched_left() {
                    plan.push((Some(i), None));
                }
            }
        }
    }
    if how.keeps_unmatched_right() {
        for (j, matched) in right_matched.into_iter().enumerate() {
            if !matched {
                plan.push((None, Some(j)));
            }
        }
    }
    plan
}

fn padded_fields(schema: &StructType, padded: bool) -> Vec<StructField> {
    schema
        .fields()
        .iter()
        .cloned()
        .map(|mut f| {
            f.nullable |= padded;
            f
        })
        .collect()
}

/// Key values of both sides, a string key cast to the numeric type of the other side
fn coerced_keys(left: &DataFrame, right: &DataFrame, l: &str, r: &str) -> Result<(Vec<Value>, Vec<Value>)> {
    let left_values = left.column(l)?.values();
    let right_values = right.column(r)?.values();
    let common = left
        .schema()
        .field(l)?
        .data_type
        .comparison_coercion(&right.schema().field(r)?.data_type);
    let Some(common) = common else {
        return Ok((left_values.to_vec(), right_values.to_vec()));
    };
    let cast = |values: &[Value]| values.iter().map(|v| v.cast(&common)).collect::<Result<Vec<_>>>();
    Ok((cast(left_values)?, cast(right_values)?))
}

/// Locate the sides of `a == b`: (left column, right column)
fn equi_columns<'a>(left: &DataFrame, right: &DataFrame, a: &'a str, b: &'a str) -> Option<(&'a str, &'a str)> {
    let unique = |df: &DataFrame, name: &str| df.schema().field_index(name).is_ok();
    if unique(left, a) && unique(right, b) {
        Some((a, b))
    } else if unique(left, b) && unique(right, a) {
        Some((b, a))
    } else {
        None
    }
}

impl DataFrame {
    /// Join with `other` on an arbitrary boolean condition
    ///
    /// The output holds the left columns followed by the right columns (only
    /// the left columns for semi and anti joins). A condition of the form
    /// `col(a).eq(col(b))` with `a` and `b` on opposite sides runs as a hash
    /// join; other conditions are evaluated for every pair of rows. Null keys
    /// never match.
    pub fn join(&self, other: &DataFrame, condition: impl Into<Expr>, how: JoinType) -> Result<DataFrame> {
        let condition = condition.into();
        let equi = condition
            .as_column_equality()
            .and_then(|(a, b)| equi_columns(self, other, a, b));

        let matches = match equi {
            Some((l, r)) => {
                log::debug!("{} join: hash join on {} = {}", how, l, r);
                let (left_keys, right_keys) = coerced_keys(self, other, l, r)?;
                hash_matches(&[left_keys], &[right_keys], self.count(), other.count())
            }
            None => {
                log::debug!("{} join: nested loop on {}", how, condition);
                nested_loop_matches(self, other, &condition)?
            }
        };
        self.assemble(other, &matches, how)
    }

    /// Join on columns present under the same names on both sides
    ///
    /// Key columns appear once, first, followed by the remaining left and then
    /// right columns. For full outer joins the key is taken from whichever side
    /// is present.
    pub fn join_on(&self, other: &DataFrame, on: &[&str], how: JoinType) -> Result<DataFrame> {
        if on.is_empty() {
            return Err(Error::InvalidInput(
                "join_on requires at least one key column".to_string(),
            ));
        }
        let (left_keys, right_keys): (Vec<_>, Vec<_>) = on
            .iter()
            .map(|c| coerced_keys(self, other, c, c))
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .unzip();
        log::debug!("{} join: hash join using {:?}", how, on);
        let matches = hash_matches(&left_keys, &right_keys, self.count(), other.count());
        let plan = plan_rows(&matches, other.count(), how);

        let left_idx: Vec<Option<usize>> = plan.iter().map(|(l, _)| *l).collect();
        let right_idx: Vec<Option<usize>> = plan.iter().map(|(_, r)| *r).collect();
        let left = self.take(&left_idx)?;
        let right = other.take(&right_idx)?;

        let mut fields = Vec::new();
        let mut columns = Vec::new();
        for name in on {
            let l = left.column(name)?;
            let r = right.column(name)?;
            let values: Vec<Value> = l
                .values()
                .iter()
                .zip(r.values())
                .map(|(lv, rv)| if lv.is_null() { rv.clone() } else { lv.clone() })
                .collect();
            let mut field = self.schema().field(name)?.clone();
            field.nullable |= other.schema().field(name)?.nullable && how.keeps_unmatched_right();
            fields.push(field);
            columns.push(Series::new(values, *name));
        }

        let mut push_rest = |df: &DataFrame, source: &DataFrame, padded: bool| {
            for (field, series) in padded_fields(source.schema(), padded)
                .into_iter()
                .zip(df.series())
            {
                if !on.contains(&field.name.as_str()) {
                    fields.push(field);
                    columns.push(series.clone());
                }
            }
        };
        push_rest(&left, self, how.keeps_unmatched_right());
        if how.outputs_right_columns() {
            push_rest(&right, other, how.keeps_unmatched_left());
        }
        Ok(DataFrame::from_parts(
            StructType::new(fields),
            columns,
            plan.len(),
        ))
    }

    /// Cartesian product
    pub fn cross_join(&self, other: &DataFrame) -> Result<DataFrame> {
        let matches: Matches = (0..self.count())
            .map(|_| (0..other.count()).collect())
            .collect();
        self.assemble(other, &matches, JoinType::Cross)
    }

    fn assemble(&self, other: &DataFrame, matches: &Matches, how: JoinType) -> Result<DataFrame> {
        let plan = plan_rows(matches, other.count(), how);
        let left_idx: Vec<Option<usize>> = plan.iter().map(|(l, _)| *l).collect();
        let left = self.take(&left_idx)?;
        let left = DataFrame::from_parts(
            StructType::new(padded_fields(self.schema(), how.keeps_unmatched_right())),
            left.series().to_vec(),
            plan.len(),
        );
        if !how.outputs_right_columns() {
            return Ok(left);
        }

        let right_idx: Vec<Option<usize>> = plan.iter().map(|(_, r)| *r).collect();
        let right = other.take(&right_idx)?;
        let right = DataFrame::from_parts(
            StructType::new(padded_fields(other.schema(), how.keeps_unmatched_left())),
            right.series().to_vec(),
            plan.len(),
        );
        left.hstack(&right)
    }
}
