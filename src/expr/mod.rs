//! Column expressions
//!
//! An [`Expr`] describes how to compute one column from the columns of a
//! DataFrame. Expressions are evaluated eagerly and column-at-a-time by
//! [`Expr::evaluate`], which returns one value per row in row order.

mod ops;

use std::cmp::Ordering;
use std::fmt;

use regex::Regex;

use crate::dataframe::DataFrame;
use crate::error::{Error, Result};
use crate::types::{DataType, StructType};
use crate::value::Value;
use crate::window::{WindowFunction, WindowSpec};

pub use ops::CaseWhen;

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Eq,
    NotEq,
    Gt,
    GtEq,
    Lt,
    LtEq,
    And,
    Or,
}

impl BinaryOp {
    fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Eq => "=",
            BinaryOp::NotEq => "!=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::And => "AND",
            BinaryOp::Or => "OR",
        }
    }

    fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            BinaryOp::Add | BinaryOp::Subtract | BinaryOp::Multiply | BinaryOp::Divide
        )
    }
}

/// String predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringPredicate {
    StartsWith,
    EndsWith,
    Contains,
}

/// A column expression
#[derive(Debug, Clone)]
pub enum Expr {
    /// Reference by name; `a.b` reaches into struct column `a`
    Column(String),
    Literal(Value),
    Alias(Box<Expr>, String),
    Cast(Box<Expr>, DataType),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Not(Box<Expr>),
    Negate(Box<Expr>),
    IsNull(Box<Expr>),
    IsNotNull(Box<Expr>),
    GetField(Box<Expr>, String),
    StringPredicate {
        predicate: StringPredicate,
        input: Box<Expr>,
        pattern: String,
    },
    RegexpReplace {
        input: Box<Expr>,
        pattern: String,
        replacement: String,
    },
    CaseWhen {
        branches: Vec<(Expr, Expr)>,
        otherwise: Option<Box<Expr>>,
    },
    Window {
        function: WindowFunction,
        spec: WindowSpec,
    },
}

impl Expr {
    pub fn alias(self, name: impl Into<String>) -> Expr {
        Expr::Alias(Box::new(self), name.into())
    }

    pub fn cast(self, to: DataType) -> Expr {
        Expr::Cast(Box::new(self), to)
    }

    /// Cast by type name, e.g. `"Integer"`
    pub fn cast_to(self, type_name: &str) -> Result<Expr> {
        Ok(self.cast(DataType::parse(type_name)?))
    }

    fn binary(self, op: BinaryOp, other: impl Into<Expr>) -> Expr {
        Expr::Binary {
            op,
            left: Box::new(self),
            right: Box::new(other.into()),
        }
    }

    pub fn eq(self, other: impl Into<Expr>) -> Expr {
        self.binary(BinaryOp::Eq, other)
    }

    pub fn neq(self, other: impl Into<Expr>) -> Expr {
        self.binary(BinaryOp::NotEq, other)
    }

    pub fn gt(self, other: impl Into<Expr>) -> Expr {
        self.binary(BinaryOp::Gt, other)
    }

    pub fn gt_eq(self, other: impl Into<Expr>) -> Expr {
        self.binary(BinaryOp::GtEq, other)
    }

    pub fn lt(self, other: impl Into<Expr>) -> Expr {
        self.binary(BinaryOp::Lt, other)
    }

    pub fn lt_eq(self, other: impl Into<Expr>) -> Expr {
        self.binary(BinaryOp::LtEq, other)
    }

    pub fn and(self, other: impl Into<Expr>) -> Expr {
        self.binary(BinaryOp::And, other)
    }

    pub fn or(self, other: impl Into<Expr>) -> Expr {
        self.binary(BinaryOp::Or, other)
    }

    pub fn is_null(self) -> Expr {
        Expr::IsNull(Box::new(self))
    }

    pub fn is_not_null(self) -> Expr {
        Expr::IsNotNull(Box::new(self))
    }

    pub fn get_field(self, name: impl Into<String>) -> Expr {
        Expr::GetField(Box::new(self), name.into())
    }

    fn string_predicate(self, predicate: StringPredicate, pattern: &str) -> Expr {
        Expr::StringPredicate {
            predicate,
            input: Box::new(self),
            pattern: pattern.to_string(),
        }
    }

    pub fn starts_with(self, prefix: &str) -> Expr {
        self.string_predicate(StringPredicate::StartsWith, prefix)
    }

    pub fn ends_with(self, suffix: &str) -> Expr {
        self.string_predicate(StringPredicate::EndsWith, suffix)
    }

    pub fn contains(self, needle: &str) -> Expr {
        self.string_predicate(StringPredicate::Contains, needle)
    }

    pub fn asc(self) -> SortKey {
        SortKey::asc(self)
    }

    pub fn desc(self) -> SortKey {
        SortKey::desc(self)
    }

    /// Output column name when used in `select`
    pub fn output_name(&self) -> String {
        match self {
            Expr::Column(name) => name.rsplit('.').next().unwrap_or(name).to_string(),
            Expr::Alias(_, name) => name.clone(),
            Expr::GetField(_, name) => name.clone(),
            other => other.to_string(),
        }
    }

    /// Whether any window function appears in the expression tree
    pub fn contains_window(&self) -> bool {
        match self {
            Expr::Window { .. } => true,
            Expr::Column(_) | Expr::Literal(_) => false,
            Expr::Alias(e, _)
            | Expr::Cast(e, _)
            | Expr::Not(e)
            | Expr::Negate(e)
            | Expr::IsNull(e)
            | Expr::IsNotNull(e)
            | Expr::GetField(e, _) => e.contains_window(),
            Expr::StringPredicate { input, .. } | Expr::RegexpReplace { input, .. } => {
                input.contains_window()
            }
            Expr::Binary { left, right, .. } => left.contains_window() || right.contains_window(),
            Expr::CaseWhen {
                branches,
                otherwise,
            } => {
                branches
                    .iter()
                    .any(|(c, v)| c.contains_window() || v.contains_window())
                    || otherwise.as_ref().map_or(false, |e| e.contains_window())
            }
        }
    }

    /// Infer the output type against `schema`
    pub fn data_type(&self, schema: &StructType) -> Result<DataType> {
        match self {
            Expr::Column(name) => resolve_column_type(schema, name),
            Expr::Literal(v) => Ok(v.data_type().unwrap_or(DataType::String)),
            Expr::Alias(e, _) | Expr::Negate(e) => e.data_type(schema),
            Expr::Cast(_, to) => Ok(to.clone()),
            Expr::Binary { op, left, right } => {
                if op.is_arithmetic() {
                    let l = numeric_operand_type(left.data_type(schema)?);
                    let r = numeric_operand_type(right.data_type(schema)?);
                    if *op == BinaryOp::Divide {
                        return Ok(DataType::Double);
                    }
                    l.numeric_supertype(&r).ok_or_else(|| {
                        Error::Cast(format!("cannot apply '{}' to {} and {}", op.symbol(), l, r))
                    })
                } else {
                    Ok(DataType::Boolean)
                }
            }
            Expr::Not(_)
            | Expr::IsNull(_)
            | Expr::IsNotNull(_)
            | Expr::StringPredicate { .. } => Ok(DataType::Boolean),
            Expr::GetField(e, field) => match e.data_type(schema)? {
                DataType::Struct(st) => Ok(st.field(field)?.data_type.clone()),
                other => Err(Error::Cast(format!(
                    "cannot extract field '{}' from {}",
                    field, other
                ))),
            },
            Expr::RegexpReplace { .. } => Ok(DataType::String),
            Expr::CaseWhen {
                branches,
                otherwise,
            } => {
                let mut result: Option<DataType> = None;
                let candidates = branches
                    .iter()
                    .map(|(_, v)| v)
                    .chain(otherwise.as_deref());
                for value in candidates {
                    if matches!(value, Expr::Literal(Value::Null)) {
                        continue;
                    }
                    let dt = value.data_type(schema)?;
                    result = Some(match result {
                        None => dt,
                        Some(prev) if prev == dt => prev,
                        Some(prev) => prev.numeric_supertype(&dt).ok_or_else(|| {
                            Error::Cast(format!(
                                "CASE WHEN branches have incompatible types {} and {}",
                                prev, dt
                            ))
                        })?,
                    });
                }
                Ok(result.unwrap_or(DataType::String))
            }
            Expr::Window { function, .. } => function.data_type(schema),
        }
    }

    /// Whether the output may contain nulls
    pub fn nullable(&self, schema: &StructType) -> bool {
        match self {
            Expr::Column(name) => schema
                .field_index(name)
                .map(|i| schema.fields()[i].nullable)
                .unwrap_or(true),
            Expr::Literal(v) => v.is_null(),
            Expr::Alias(e, _) => e.nullable(schema),
            Expr::IsNull(_) | Expr::IsNotNull(_) => false,
            Expr::Window { function, .. } => function.nullable(),
            _ => true,
        }
    }

    /// Evaluate against every row of `df`
    pub fn evaluate(&self, df: &DataFrame) -> Result<Vec<Value>> {
        let n = df.count();
        match self {
            Expr::Column(name) => resolve_column(df, name),
            Expr::Literal(v) => Ok(vec![v.clone(); n]),
            Expr::Alias(e, _) => e.evaluate(df),
            Expr::Cast(e, to) => e.evaluate(df)?.iter().map(|v| v.cast(to)).collect(),
            Expr::Binary { op, left, right } => {
                let l = left.evaluate(df)?;
                let r = right.evaluate(df)?;
                if op.is_arithmetic() {
                    let out_type = self.data_type(df.schema())?;
                    l.iter()
                        .zip(r.iter())
                        .map(|(a, b)| arithmetic(*op, a, b, &out_type))
                        .collect()
                } else if let Some(common) = left
                    .data_type(df.schema())?
                    .comparison_coercion(&right.data_type(df.schema())?)
                {
                    l.iter()
                        .zip(r.iter())
                        .map(|(a, b)| Ok(logical(*op, &a.cast(&common)?, &b.cast(&common)?)))
                        .collect()
                } else {
                    Ok(l.iter()
                        .zip(r.iter())
                        .map(|(a, b)| logical(*op, a, b))
                        .collect())
                }
            }
            Expr::Not(e) => Ok(e
                .evaluate(df)?
                .into_iter()
                .map(|v| match v.as_bool() {
                    Some(b) => Value::Boolean(!b),
                    None => Value::Null,
                })
                .collect()),
            Expr::Negate(e) => e
                .evaluate(df)?
                .iter()
                .map(|v| match v {
                    Value::Null => Ok(Value::Null),
                    Value::Integer(x) => Ok(Value::Integer(x.wrapping_neg())),
                    Value::Long(x) => Ok(Value::Long(x.wrapping_neg())),
                    Value::Double(x) => Ok(Value::Double(-x)),
                    other => Err(Error::Cast(format!("cannot negate {}", other))),
                })
                .collect(),
            Expr::IsNull(e) => Ok(e
                .evaluate(df)?
                .iter()
                .map(|v| Value::Boolean(v.is_null()))
                .collect()),
            Expr::IsNotNull(e) => Ok(e
                .evaluate(df)?
                .iter()
                .map(|v| Value::Boolean(!v.is_null()))
                .collect()),
            Expr::GetField(e, field) => {
                let idx = match e.data_type(df.schema())? {
                    DataType::Struct(st) => st.field_index(field)?,
                    other => {
                        return Err(Error::Cast(format!(
                            "cannot extract field '{}' from {}",
                            field, other
                        )))
                    }
                };
                Ok(e.evaluate(df)?
                    .iter()
                    .map(|v| {
                        v.as_struct()
                            .and_then(|row| row.get(idx).cloned())
                            .unwrap_or(Value::Null)
                    })
                    .collect())
            }
            Expr::StringPredicate {
                predicate,
                input,
                pattern,
            } => Ok(input
                .evaluate(df)?
                .iter()
                .map(|v| match v {
                    Value::Null => Value::Null,
                    v => {
                        let s = v.to_string();
                        Value::Boolean(match predicate {
                            StringPredicate::StartsWith => s.starts_with(pattern.as_str()),
                            StringPredicate::EndsWith => s.ends_with(pattern.as_str()),
                            StringPredicate::Contains => s.contains(pattern.as_str()),
                        })
                    }
                })
                .collect()),
            Expr::RegexpReplace {
                input,
                pattern,
                replacement,
            } => {
                let re = Regex::new(pattern)?;
                let replacement = substitution_template(replacement, re.captures_len() - 1)?;
                Ok(input
                    .evaluate(df)?
                    .iter()
                    .map(|v| match v {
                        Value::Null => Value::Null,
                        v => Value::String(
                            re.replace_all(&v.to_string(), replacement.as_str())
                                .into_owned(),
                        ),
                    })
                    .collect())
            }
            Expr::CaseWhen {
                branches,
                otherwise,
            } => {
                let out_type = self.data_type(df.schema())?;
                let evaluated = branches
                    .iter()
                    .map(|(c, v)| Ok((c.evaluate(df)?, v.evaluate(df)?)))
                    .collect::<Result<Vec<_>>>()?;
                let fallback = match otherwise {
                    Some(e) => e.evaluate(df)?,
                    None => vec![Value::Null; n],
                };
                (0..n)
                    .map(|row| {
                        let chosen = evaluated
                            .iter()
                            .find(|(cond, _)| cond[row].as_bool() == Some(true))
                            .map(|(_, values)| &values[row])
                            .unwrap_or(&fallback[row]);
                        chosen.cast(&out_type)
                    })
                    .collect()
            }
            Expr::Window { function, spec } => crate::window::evaluate(function, spec, df),
        }
    }

    /// If this is `left_col == right_col`, the two column names
    pub(crate) fn as_column_equality(&self) -> Option<(&str, &str)> {
        match self {
            Expr::Binary {
                op: BinaryOp::Eq,
                left,
                right,
            } => match (left.as_ref(), right.as_ref()) {
                (Expr::Column(a), Expr::Column(b)) => Some((a.as_str(), b.as_str())),
                _ => None,
            },
            _ => None,
        }
    }
}

fn numeric_operand_type(dt: DataType) -> DataType {
    // strings take part in arithmetic as doubles
    match dt {
        DataType::String => DataType::Double,
        other => other,
    }
}

fn arithmetic(op: BinaryOp, a: &Value, b: &Value, out: &DataType) -> Result<Value> {
    if a.is_null() || b.is_null() {
        return Ok(Value::Null);
    }
    let a = a.cast(out)?;
    let b = b.cast(out)?;
    let value = match (&a, &b) {
        (Value::Integer(x), Value::Integer(y)) => match op {
            BinaryOp::Add => Value::Integer(x.wrapping_add(*y)),
            BinaryOp::Subtract => Value::Integer(x.wrapping_sub(*y)),
            BinaryOp::Multiply => Value::Integer(x.wrapping_mul(*y)),
            _ => return Err(unsupported_operator(op)),
        },
        (Value::Long(x), Value::Long(y)) => match op {
            BinaryOp::Add => Value::Long(x.wrapping_add(*y)),
            BinaryOp::Subtract => Value::Long(x.wrapping_sub(*y)),
            BinaryOp::Multiply => Value::Long(x.wrapping_mul(*y)),
            _ => return Err(unsupported_operator(op)),
        },
        (Value::Double(x), Value::Double(y)) => match op {
            BinaryOp::Add => Value::Double(x + y),
            BinaryOp::Subtract => Value::Double(x - y),
            BinaryOp::Multiply => Value::Double(x * y),
            BinaryOp::Divide if *y == 0.0 => Value::Null,
            BinaryOp::Divide => Value::Double(x / y),
            _ => return Err(unsupported_operator(op)),
        },
        // unparsable string operands cast to null
        _ => Value::Null,
    };
    Ok(value)
}

/// Translate a `regexp_replace` replacement into a `regex` template
///
/// `$N` takes as many digits as still name an existing group, `${name}` is a
/// named group and a backslash makes the next character literal.
fn substitution_template(replacement: &str, groups: usize) -> Result<String> {
    let invalid = |msg: String| Error::InvalidRegex(format!("replacement '{}': {}", replacement, msg));
    let mut out = String::with_capacity(replacement.len());
    let mut chars = replacement.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('$') => out.push_str("$$"),
                Some(escaped) => out.push(escaped),
                None => return Err(invalid("trailing backslash".to_string())),
            },
            '$' => match chars.next() {
                Some('{') => {
                    let name: String = chars.by_ref().take_while(|&c| c != '}').collect();
                    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
                        return Err(invalid(format!("bad group name '{}'", name)));
                    }
                    out.push_str(&format!("${{{}}}", name));
                }
                Some(d) if d.is_ascii_digit() => {
                    let mut group = d as usize - '0' as usize;
                    if group > groups {
                        return Err(invalid(format!("no group {}", group)));
                    }
                    while let Some(next) = chars.peek().and_then(|c| c.to_digit(10)) {
                        let longer = group * 10 + next as usize;
                        if longer > groups {
                            break;
                        }
                        group = longer;
                        chars.next();
                    }
                    out.push_str(&format!("${{{}}}", group));
                }
                _ => return Err(invalid("illegal group reference".to_string())),
            },
            c => out.push(c),
        }
    }
    Ok(out)
}

fn unsupported_operator(op: BinaryOp) -> Error {
    Error::Cast(format!("operator '{}' is not arithmetic here", op.symbol()))
}

fn logical(op: BinaryOp, a: &Value, b: &Value) -> Value {
    match op {
        BinaryOp::And => match (a.as_bool(), b.as_bool()) {
            (Some(false), _) | (_, Some(false)) => Value::Boolean(false),
            (Some(true), Some(true)) => Value::Boolean(true),
            _ => Value::Null,
        },
        BinaryOp::Or => match (a.as_bool(), b.as_bool()) {
            (Some(true), _) | (_, Some(true)) => Value::Boolean(true),
            (Some(false), Some(false)) => Value::Boolean(false),
            _ => Value::Null,
        },
        _ => {
            if a.is_null() || b.is_null() {
                return Value::Null;
            }
            let ord = a.total_cmp(b);
            Value::Boolean(match op {
                BinaryOp::Eq => ord == Ordering::Equal,
                BinaryOp::NotEq => ord != Ordering::Equal,
                BinaryOp::Gt => ord == Ordering::Greater,
                BinaryOp::GtEq => ord != Ordering::Less,
                BinaryOp::Lt => ord == Ordering::Less,
                BinaryOp::LtEq => ord != Ordering::Greater,
                // arithmetic never reaches here
                _ => return Value::Null,
            })
        }
    }
}

/// Split `a.b.c` into the top-level column and the nested path, when the full
/// name is not itself a column
fn split_nested<'a>(schema: &StructType, name: &'a str) -> Option<(&'a str, Vec<&'a str>)> {
    if schema.contains(name) || !name.contains('.') {
        return None;
    }
    let mut parts = name.split('.');
    let head = parts.next()?;
    Some((head, parts.collect()))
}

fn resolve_column_type(schema: &StructType, name: &str) -> Result<DataType> {
    match split_nested(schema, name) {
        None => Ok(schema.field(name)?.data_type.clone()),
        Some((head, path)) => {
            let mut dt = schema.field(head)?.data_type.clone();
            for part in path {
                dt = match dt {
                    DataType::Struct(st) => st.field(part)?.data_type.clone(),
                    _ => return Err(Error::ColumnNotFound(name.to_string())),
                };
            }
            Ok(dt)
        }
    }
}

fn resolve_column(df: &DataFrame, name: &str) -> Result<Vec<Value>> {
    match split_nested(df.schema(), name) {
        None => Ok(df.column(name)?.values().to_vec()),
        Some((head, path)) => {
            let mut expr = Expr::Column(head.to_string());
            for part in path {
                expr = expr.get_field(part);
            }
            expr.evaluate(df)
                .map_err(|_| Error::ColumnNotFound(name.to_string()))
        }
    }
}

/// Ordering key for sorts and windows
#[derive(Debug, Clone)]
pub struct SortKey {
    pub expr: Expr,
    pub descending: bool,
    pub nulls_first: bool,
}

impl SortKey {
    /// Ascending, nulls first
    pub fn asc(expr: impl Into<Expr>) -> Self {
        SortKey {
            expr: expr.into(),
            descending: false,
            nulls_first: true,
        }
    }

    /// Descending, nulls last
    pub fn desc(expr: impl Into<Expr>) -> Self {
        SortKey {
            expr: expr.into(),
            descending: true,
            nulls_first: false,
        }
    }

    pub fn nulls_first(mut self, nulls_first: bool) -> Self {
        self.nulls_first = nulls_first;
        self
    }

    pub(crate) fn compare(&self, a: &Value, b: &Value) -> Ordering {
        match (a.is_null(), b.is_null()) {
            (true, true) => Ordering::Equal,
            (true, false) if self.nulls_first => Ordering::Less,
            (true, false) => Ordering::Greater,
            (false, true) if self.nulls_first => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                let ord = a.total_cmp(b);
                if self.descending {
                    ord.reverse()
                } else {
                    ord
                }
            }
        }
    }
}

impl From<Expr> for SortKey {
    fn from(expr: Expr) -> Self {
        SortKey::asc(expr)
    }
}

impl From<&str> for SortKey {
    fn from(name: &str) -> Self {
        SortKey::asc(name)
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} NULLS {}",
            self.expr,
            if self.descending { "DESC" } else { "ASC" },
            if self.nulls_first { "FIRST" } else { "LAST" }
        )
    }
}

/// Compare two rows on a list of evaluated sort columns
pub(crate) fn compare_rows(keys: &[SortKey], columns: &[Vec<Value>], a: usize, b: usize) -> Ordering {
    for (key, col) in keys.iter().zip(columns) {
        let ord = key.compare(&col[a], &col[b]);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Column(name) => write!(f, "{}", name),
            Expr::Literal(Value::String(s)) => write!(f, "{}", s),
            Expr::Literal(v) => write!(f, "{}", v),
            Expr::Alias(e, name) => write!(f, "{} AS {}", e, name),
            Expr::Cast(e, to) => write!(f, "CAST({} AS {})", e, to.simple_string().to_uppercase()),
            Expr::Binary { op, left, right } => write!(f, "({} {} {})", left, op.symbol(), right),
            Expr::Not(e) => write!(f, "(NOT {})", e),
            Expr::Negate(e) => write!(f, "(- {})", e),
            Expr::IsNull(e) => write!(f, "({} IS NULL)", e),
            Expr::IsNotNull(e) => write!(f, "({} IS NOT NULL)", e),
            Expr::GetField(e, name) => write!(f, "{}.{}", e, name),
            Expr::StringPredicate {
                predicate,
                input,
                pattern,
            } => {
                let name = match predicate {
                    StringPredicate::StartsWith => "startswith",
                    StringPredicate::EndsWith => "endswith",
                    StringPredicate::Contains => "contains",
                };
                write!(f, "{}({}, {})", name, input, pattern)
            }
            Expr::RegexpReplace {
                input,
                pattern,
                replacement,
            } => write!(f, "regexp_replace({}, {}, {}, 1)", input, pattern, replacement),
            Expr::CaseWhen {
                branches,
                otherwise,
            } => {
                write!(f, "CASE")?;
                for (cond, value) in branches {
                    write!(f, " WHEN {} THEN {}", cond, value)?;
                }
                if let Some(e) = otherwise {
                    write!(f, " ELSE {}", e)?;
                }
                write!(f, " END")
            }
            Expr::Window { function, spec } => write!(f, "{} OVER ({})", function, spec),
        }
    }
}
