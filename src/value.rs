//! Dynamically typed cell values and rows

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Error, Result};
use crate::types::{DataType, StructField, StructType};

/// A single cell value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i32),
    Long(i64),
    Double(f64),
    String(String),
    /// Nested struct value; field names come from the column's [`StructType`]
    Struct(Row),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Type of the value, `None` for null
    ///
    /// Struct values carry no field names, so positional names `_1`, `_2`, ...
    /// are used, as Spark does for tuples.
    pub fn data_type(&self) -> Option<DataType> {
        match self {
            Value::Null => None,
            Value::Boolean(_) => Some(DataType::Boolean),
            Value::Integer(_) => Some(DataType::Integer),
            Value::Long(_) => Some(DataType::Long),
            Value::Double(_) => Some(DataType::Double),
            Value::String(_) => Some(DataType::String),
            Value::Struct(row) => {
                let fields = row
                    .values()
                    .iter()
                    .enumerate()
                    .map(|(i, v)| {
                        StructField::nullable(
                            format!("_{}", i + 1),
                            v.data_type().unwrap_or(DataType::String),
                        )
                    })
                    .collect();
                Some(DataType::Struct(StructType::new(fields)))
            }
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Integral view of Integer and Long values
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(v) => Some(*v as i64),
            Value::Long(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric view of any numeric value
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(v) => Some(*v as f64),
            Value::Long(v) => Some(*v as f64),
            Value::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&Row> {
        match self {
            Value::Struct(row) => Some(row),
            _ => None,
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Boolean(_) => 1,
            Value::Integer(_) | Value::Long(_) | Value::Double(_) => 2,
            Value::String(_) => 3,
            Value::Struct(_) => 4,
        }
    }

    /// Total order used by sorting and window ordering
    ///
    /// Nulls sort first; numeric values compare by magnitude regardless of width.
    pub fn total_cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Boolean(a), Value::Boolean(b)) => a.cmp(b),
            (Value::String(a), Value::String(b)) => a.cmp(b),
            (Value::Struct(a), Value::Struct(b)) => {
                for (x, y) in a.values().iter().zip(b.values()) {
                    let ord = x.total_cmp(y);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                }
                a.len().cmp(&b.len())
            }
            (a, b) => match (a.as_i64(), b.as_i64()) {
                (Some(x), Some(y)) => x.cmp(&y),
                _ => match (a.as_f64(), b.as_f64()) {
                    (Some(x), Some(y)) => x.total_cmp(&y),
                    _ => a.kind_rank().cmp(&b.kind_rank()),
                },
            },
        }
    }

    /// SQL equality: `None` when either side is null
    pub fn sql_eq(&self, other: &Value) -> Option<bool> {
        if self.is_null() || other.is_null() {
            return None;
        }
        Some(self.total_cmp(other) == Ordering::Equal)
    }

    /// Hashable key for equi-joins and partitioning, `None` for null
    pub fn key(&self) -> Option<ValueKey> {
        match self {
            Value::Null => None,
            Value::Boolean(b) => Some(ValueKey::Bool(*b)),
            Value::Integer(v) => Some(ValueKey::Int(*v as i64)),
            Value::Long(v) => Some(ValueKey::Int(*v)),
            Value::Double(v) => {
                if v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
                    Some(ValueKey::Int(*v as i64))
                } else {
                    Some(ValueKey::Float(v.to_bits()))
                }
            }
            Value::String(s) => Some(ValueKey::Str(s.clone())),
            Value::Struct(row) => Some(ValueKey::Struct(
                row.values().iter().map(|v| v.key()).collect(),
            )),
        }
    }

    /// Cast to `to` with Spark's lenient (non-ANSI) rules
    ///
    /// Unparsable strings become null; struct values only cast to struct types
    /// of the same arity.
    pub fn cast(&self, to: &DataType) -> Result<Value> {
        if self.is_null() {
            return Ok(Value::Null);
        }
        let value = match to {
            DataType::String => Value::String(self.to_string()),
            DataType::Integer => match self {
                Value::Integer(v) => Value::Integer(*v),
                Value::Long(v) => Value::Integer(*v as i32),
                Value::Double(v) => Value::Integer(*v as i32),
                Value::Boolean(b) => Value::Integer(*b as i32),
                Value::String(s) => parse_integral(s)
                    .and_then(|v| i32::try_from(v).ok())
                    .map(Value::Integer)
                    .unwrap_or(Value::Null),
                _ => return Err(self.cast_error(to)),
            },
            DataType::Long => match self {
                Value::Integer(v) => Value::Long(*v as i64),
                Value::Long(v) => Value::Long(*v),
                Value::Double(v) => Value::Long(*v as i64),
                Value::Boolean(b) => Value::Long(*b as i64),
                Value::String(s) => parse_integral(s).map(Value::Long).unwrap_or(Value::Null),
                _ => return Err(self.cast_error(to)),
            },
            DataType::Double => match self {
                Value::Boolean(b) => Value::Double(if *b { 1.0 } else { 0.0 }),
                Value::String(s) => s
                    .trim()
                    .parse::<f64>()
                    .map(Value::Double)
                    .unwrap_or(Value::Null),
                v => match v.as_f64() {
                    Some(f) => Value::Double(f),
                    None => return Err(self.cast_error(to)),
                },
            },
            DataType::Boolean => match self {
                Value::Boolean(b) => Value::Boolean(*b),
                Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                    "true" | "t" | "yes" | "y" | "1" => Value::Boolean(true),
                    "false" | "f" | "no" | "n" | "0" => Value::Boolean(false),
                    _ => Value::Null,
                },
                v => match v.as_f64() {
                    Some(f) => Value::Boolean(f != 0.0),
                    None => return Err(self.cast_error(to)),
                },
            },
            DataType::Struct(st) => match self {
                Value::Struct(row) if row.len() == st.len() => {
                    let values = row
                        .values()
                        .iter()
                        .zip(st.fields())
                        .map(|(v, f)| v.cast(&f.data_type))
                        .collect::<Result<Vec<_>>>()?;
                    Value::Struct(Row::new(values))
                }
                _ => return Err(self.cast_error(to)),
            },
        };
        Ok(value)
    }

    fn cast_error(&self, to: &DataType) -> Error {
        Error::Cast(format!(
            "cannot cast {} to {}",
            self.data_type()
                .map(|t| t.simple_string())
                .unwrap_or_else(|| "null".to_string()),
            to.simple_string()
        ))
    }

    /// Conform a value to a column type during table construction
    ///
    /// Integers widen into long and double columns; anything else that does not
    /// already have the column's type is rejected with `None`.
    pub fn conform(self, to: &DataType) -> Option<Value> {
        match (self, to) {
            (Value::Null, _) => Some(Value::Null),
            (Value::Integer(v), DataType::Long) => Some(Value::Long(v as i64)),
            (Value::Integer(v), DataType::Double) => Some(Value::Double(v as f64)),
            (Value::Long(v), DataType::Double) => Some(Value::Double(v as f64)),
            (Value::Long(v), DataType::Integer) => i32::try_from(v).ok().map(Value::Integer),
            (Value::Struct(row), DataType::Struct(st)) if row.len() == st.len() => {
                let values = row
                    .into_values()
                    .into_iter()
                    .zip(st.fields())
                    .map(|(v, f)| v.conform(&f.data_type))
                    .collect::<Option<Vec<_>>>()?;
                Some(Value::Struct(Row::new(values)))
            }
            (v @ Value::Boolean(_), DataType::Boolean)
            | (v @ Value::Integer(_), DataType::Integer)
            | (v @ Value::Long(_), DataType::Long)
            | (v @ Value::Double(_), DataType::Double)
            | (v @ Value::String(_), DataType::String) => Some(v),
            _ => None,
        }
    }
}

fn parse_integral(s: &str) -> Option<i64> {
    let s = s.trim();
    if let Ok(v) = s.parse::<i64>() {
        return Some(v);
    }
    // "1.5" casts to 1; out of range is null
    s.parse::<f64>()
        .ok()
        .map(f64::trunc)
        .filter(|f| *f >= i64::MIN as f64 && *f < i64::MAX as f64)
        .map(|f| f as i64)
}

/// Render a double the way the JVM prints it
///
/// Plain decimal within `[1e-3, 1e7)`, otherwise `d.dddE<exp>`; always at
/// least one fractional digit.
fn format_double(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    let magnitude = v.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        // Debug keeps the trailing `.0` of integral doubles
        return format!("{:?}", v);
    }
    let scientific = format!("{:e}", v);
    match scientific.split_once('e') {
        Some((mantissa, exp)) if mantissa.contains('.') => format!("{}E{}", mantissa, exp),
        Some((mantissa, exp)) => format!("{}.0E{}", mantissa, exp),
        None => scientific,
    }
}

/// Hashable projection of a non-null [`Value`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueKey {
    Bool(bool),
    Int(i64),
    Float(u64),
    Str(String),
    Struct(Vec<Option<ValueKey>>),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Integer(v) => write!(f, "{}", v),
            Value::Long(v) => write!(f, "{}", v),
            Value::Double(v) => write!(f, "{}", format_double(*v)),
            Value::String(s) => write!(f, "{}", s),
            Value::Struct(row) => write!(f, "{}", row),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Row> for Value {
    fn from(row: Row) -> Self {
        Value::Struct(row)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

/// Ordered values of one record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    values: Vec<Value>,
}

impl Row {
    pub fn new(values: Vec<Value>) -> Self {
        Row { values }
    }

    pub fn get(&self, idx: usize) -> Option<&Value> {
        self.values.get(idx)
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.values.iter().map(|v| v.to_string()).collect();
        write!(f, "{{{}}}", parts.join(", "))
    }
}

impl From<Vec<Value>> for Row {
    fn from(values: Vec<Value>) -> Self {
        Row::new(values)
    }
}

// Tuples convert into rows, and nested tuples into struct values
macro_rules! impl_tuple_row {
    ($($name:ident),+) => {
        impl<$($name: Into<Value>),+> From<($($name,)+)> for Row {
            #[allow(non_snake_case)]
            fn from(($($name,)+): ($($name,)+)) -> Self {
                Row::new(vec![$($name.into()),+])
            }
        }

        impl<$($name: Into<Value>),+> From<($($name,)+)> for Value {
            fn from(tuple: ($($name,)+)) -> Self {
                Value::Struct(Row::from(tuple))
            }
        }
    };
}

impl_tuple_row!(A);
impl_tuple_row!(A, B);
impl_tuple_row!(A, B, C);
impl_tuple_row!(A, B, C, D);
impl_tuple_row!(A, B, C, D, E);
impl_tuple_row!(A, B, C, D, E, F);
impl_tuple_row!(A, B, C, D, E, F, G);
impl_tuple_row!(A, B, C, D, E, F, G, H);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_show_rendering() {
        assert_eq!(Value::Double(0.0).to_string(), "0.0");
        assert_eq!(Value::Double(66.66666666666667).to_string(), "66.66666666666667");
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::Double(1e20).to_string(), "1.0E20");
        assert_eq!(Value::Double(-1.5e-7).to_string(), "-1.5E-7");
        assert_eq!(Value::Double(12345678.0).to_string(), "1.2345678E7");
        assert_eq!(Value::Double(1234567.5).to_string(), "1234567.5");
        assert_eq!(Value::Double(0.001).to_string(), "0.001");
        assert_eq!(Value::Double(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::Double(f64::NEG_INFINITY).to_string(), "-Infinity");
        let name: Value = ("James", "", "Smith").into();
        assert_eq!(name.to_string(), "{James, , Smith}");
    }

    #[test]
    fn test_total_cmp_orders_nulls_first_and_mixes_numeric_widths() {
        assert_eq!(Value::Null.total_cmp(&Value::Integer(1)), Ordering::Less);
        assert_eq!(Value::Integer(3).total_cmp(&Value::Long(3)), Ordering::Equal);
        assert_eq!(Value::Double(2.5).total_cmp(&Value::Integer(3)), Ordering::Less);
    }

    #[test]
    fn test_keys_normalize_numeric_widths() {
        assert_eq!(Value::Integer(10).key(), Value::Long(10).key());
        assert_eq!(Value::Double(10.0).key(), Value::Long(10).key());
        assert_eq!(Value::Null.key(), None);
    }

    #[test]
    fn test_cast_is_lenient() {
        let s = Value::from("3000");
        assert_eq!(s.cast(&DataType::Integer).unwrap(), Value::Integer(3000));
        assert_eq!(Value::from("abc").cast(&DataType::Integer).unwrap(), Value::Null);
        assert_eq!(Value::from("1.5").cast(&DataType::Long).unwrap(), Value::Long(1));
        assert_eq!(Value::Integer(1).cast(&DataType::String).unwrap(), Value::from("1"));
        assert!(Value::from(("a", 1)).cast(&DataType::Integer).is_err());
    }

    #[test]
    fn test_cast_overflow_is_null() {
        let big = Value::from("3000000000");
        assert_eq!(big.cast(&DataType::Integer).unwrap(), Value::Null);
        assert_eq!(big.cast(&DataType::Long).unwrap(), Value::Long(3_000_000_000));
        assert_eq!(Value::from("-2147483648").cast(&DataType::Integer).unwrap(), Value::Integer(i32::MIN));
        assert_eq!(Value::from("1e30").cast(&DataType::Long).unwrap(), Value::Null);
        assert_eq!(Value::from("-1e30").cast(&DataType::Long).unwrap(), Value::Null);
        assert_eq!(Value::from("inf").cast(&DataType::Long).unwrap(), Value::Null);
    }

    #[test]
    fn test_conform_widens_integers() {
        assert_eq!(Value::Integer(1).conform(&DataType::Long), Some(Value::Long(1)));
        assert_eq!(Value::from("x").conform(&DataType::Integer), None);
    }
}
