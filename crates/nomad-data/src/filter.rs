use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{QueryError, Record};

/// A scalar value of a record field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Date(NaiveDate),
    Text(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    fn as_number(&self) -> Option<f64> {
        match self {
            Value::Bool(v) => Some(*v as i64 as f64),
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            Value::Text(v) => v.trim().parse().ok(),
            _ => None,
        }
    }

    fn as_text(&self) -> Option<String> {
        match self {
            Value::Bool(v) => Some((*v as i64).to_string()),
            Value::Int(v) => Some(v.to_string()),
            Value::Float(v) => Some(format!("{:?}", v)),
            Value::Date(v) => Some(v.to_string()),
            Value::Text(v) => Some(v.clone()),
            Value::Null => None,
        }
    }

    /// Compare a stored field value (`self`) with an operand.
    ///
    /// The operand is converted to the field's type first, the way
    /// SQLite applies column affinity: numeric text compares as a
    /// number against numeric fields, numbers compare as text against
    /// text fields, and any remaining number sorts before any text.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Null, _) | (_, Value::Null) => None,
            (Value::Int(a), Value::Int(b)) => a.partial_cmp(b),
            (Value::Date(a), Value::Date(b)) => a.partial_cmp(b),
            (Value::Int(a), Value::Text(b)) => match b.trim().parse::<i64>() {
                Ok(b) => a.partial_cmp(&b),
                Err(_) => Value::Float(*a as f64).compare(other),
            },
            (Value::Bool(_) | Value::Int(_) | Value::Float(_), _) => {
                match (self.as_number(), other.as_number()) {
                    (Some(a), Some(b)) => a.partial_cmp(&b),
                    _ => Some(Ordering::Less),
                }
            }
            // Dates are stored as ISO 8601 text
            (Value::Date(_), Value::Bool(_) | Value::Int(_) | Value::Float(_)) => {
                Some(Ordering::Greater)
            }
            (Value::Date(_) | Value::Text(_), _) => {
                let a = self.as_text()?;
                let b = other.as_text()?;
                a.partial_cmp(&b)
            }
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
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

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Op {
    #[default]
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Op {
    /// Check if the ordering of `field` relative to the
    /// condition value satisfies the operator.
    pub fn accepts(self, ord: Ordering) -> bool {
        match self {
            Op::Eq => ord == Ordering::Equal,
            Op::Ne => ord != Ordering::Equal,
            Op::Lt => ord == Ordering::Less,
            Op::Le => ord != Ordering::Greater,
            Op::Gt => ord == Ordering::Greater,
            Op::Ge => ord != Ordering::Less,
        }
    }
}

/// A single field constraint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub field: String,
    #[serde(default)]
    pub op: Op,
    pub value: Value,
}

impl Condition {
    /// Test a field value against the condition. Like in SQL,
    /// `NULL` only ever matches an (in)equality with `NULL`.
    pub fn accepts(&self, value: &Value) -> bool {
        if self.value.is_null() {
            return match self.op {
                Op::Eq => value.is_null(),
                Op::Ne => !value.is_null(),
                _ => false,
            };
        }
        if value.is_null() {
            return false;
        }
        match value.compare(&self.value) {
            Some(ord) => self.op.accepts(ord),
            None => self.op == Op::Ne,
        }
    }
}

/// Filter criteria for selecting records.
///
/// An empty `And` matches everything, an empty `Or` nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    #[default]
    All,
    Where(Condition),
    And(Vec<Filter>),
    Or(Vec<Filter>),
}

impl Filter {
    pub fn cond(field: impl Into<String>, op: Op, value: impl Into<Value>) -> Self {
        Filter::Where(Condition {
            field: field.into(),
            op,
            value: value.into(),
        })
    }

    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::cond(field, Op::Eq, value)
    }

    /// Conjunction with another filter
    pub fn and(self, other: Filter) -> Self {
        match self {
            Filter::And(mut filters) => {
                filters.push(other);
                Filter::And(filters)
            }
            filter => Filter::And(vec![filter, other]),
        }
    }

    /// Disjunction with another filter
    pub fn or(self, other: Filter) -> Self {
        match self {
            Filter::Or(mut filters) => {
                filters.push(other);
                Filter::Or(filters)
            }
            filter => Filter::Or(vec![filter, other]),
        }
    }

    /// All fields referenced by the filter
    pub fn fields(&self) -> Vec<&str> {
        match self {
            Filter::All => vec![],
            Filter::Where(cond) => vec![cond.field.as_str()],
            Filter::And(filters) | Filter::Or(filters) => {
                filters.iter().flat_map(|f| f.fields()).collect()
            }
        }
    }

    /// Make sure all referenced fields exist on the record
    pub fn check<R: Record>(&self) -> Result<(), QueryError> {
        match self.fields().into_iter().find(|f| !R::has_column(f)) {
            Some(field) => Err(QueryError::unknown_field(R::TABLE, field)),
            None => Ok(()),
        }
    }

    /// Evaluate the filter on a record
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        match self {
            Filter::All => true,
            Filter::Where(cond) => match record.field(&cond.field) {
                Some(value) => cond.accepts(&value),
                None => false,
            },
            Filter::And(filters) => filters.iter().all(|f| f.matches(record)),
            Filter::Or(filters) => filters.iter().any(|f| f.matches(record)),
        }
    }
}

/// Field assignments applied by an update
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Patch(BTreeMap<String, Value>);

impl Patch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Make sure the patch can be applied to the record
    pub fn check<R: Record>(&self) -> Result<(), QueryError> {
        if self.is_empty() {
            return Err(QueryError::EmptyPatch);
        }
        for field in self.0.keys() {
            if field == "id" {
                return Err(QueryError::ImmutableField(field.clone()));
            }
            if !R::has_column(field) {
                return Err(QueryError::unknown_field(R::TABLE, field));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Request, Room};

    fn room(id: i64, status: &str) -> Room {
        Room {
            id,
            accommodation_id: 1,
            name: format!("Room {}", id),
            kind: "double".to_string(),
            price: 42.0,
            status: status.to_string(),
        }
    }

    #[test]
    fn test_filter_and() {
        let filter = Filter::eq("id", 2).and(Filter::eq("status", "available"));
        assert!(filter.matches(&room(2, "available")));
        assert!(!filter.matches(&room(2, "booked")));
        assert!(!filter.matches(&room(3, "available")));
    }

    #[test]
    fn test_filter_or_and_empty() {
        let filter = Filter::eq("id", 1).or(Filter::eq("id", 3));
        assert!(filter.matches(&room(3, "booked")));
        assert!(!filter.matches(&room(2, "booked")));

        assert!(Filter::And(vec![]).matches(&room(1, "booked")));
        assert!(!Filter::Or(vec![]).matches(&room(1, "booked")));
        assert!(Filter::All.matches(&room(1, "booked")));
    }

    #[test]
    fn test_filter_ordering_ops() {
        let r = room(5, "available");
        assert!(Filter::cond("price", Op::Le, 42).matches(&r));
        assert!(Filter::cond("price", Op::Gt, 41.5).matches(&r));
        assert!(!Filter::cond("price", Op::Lt, 42.0).matches(&r));
        assert!(Filter::cond("status", Op::Ne, "booked").matches(&r));
    }

    #[test]
    fn test_filter_mixed_types() {
        let r = room(5, "available");
        // numeric text against a numeric field
        assert!(Filter::eq("id", "5").matches(&r));
        assert!(Filter::eq("id", " 5 ").matches(&r));
        assert!(!Filter::cond("id", Op::Ne, "5").matches(&r));
        assert!(Filter::cond("price", Op::Lt, "42.5").matches(&r));
        // any number sorts before any text
        assert!(!Filter::eq("id", "five").matches(&r));
        assert!(Filter::cond("id", Op::Lt, "five").matches(&r));
        // numbers against a text field compare as text
        let named = Room {
            name: "5".to_string(),
            ..r.clone()
        };
        assert!(Filter::eq("name", 5).matches(&named));
        assert!(!Filter::eq("status", 5).matches(&r));
        assert!(Filter::cond("status", Op::Gt, 5).matches(&r));
    }

    #[test]
    fn test_filter_null() {
        let trip = crate::Trip {
            return_date: None,
            ..Default::default()
        };
        assert!(Filter::eq("return_date", Value::Null).matches(&trip));
        assert!(!Filter::cond("return_date", Op::Ne, Value::Null).matches(&trip));
        assert!(!Filter::cond("return_date", Op::Lt, NaiveDate::MAX).matches(&trip));
    }

    #[test]
    fn test_filter_check_unknown_field() {
        let filter = Filter::eq("id", 1).and(Filter::eq("travel_date", "2023-01-01"));
        let err = filter.check::<Request>().unwrap_err();
        assert_eq!(err, QueryError::unknown_field("requests", "travel_date"));
        assert!(Filter::eq("trip_id", 1).check::<Request>().is_ok());
    }

    #[test]
    fn test_filter_json() {
        let json = r#"{"and": [
            {"where": {"field": "place_id", "value": 3}},
            {"where": {"field": "name", "op": "ne", "value": "Hostel"}}
        ]}"#;
        let filter: Filter = serde_json::from_str(json).unwrap();
        assert_eq!(
            filter,
            Filter::eq("place_id", 3).and(Filter::cond("name", Op::Ne, "Hostel"))
        );

        let filter: Filter = serde_json::from_str(r#""all""#).unwrap();
        assert_eq!(filter, Filter::All);

        let filter: Filter =
            serde_json::from_str(r#"{"where": {"field": "travel_date", "value": "2023-06-01"}}"#)
                .unwrap();
        assert_eq!(
            filter,
            Filter::eq("travel_date", NaiveDate::from_ymd_opt(2023, 6, 1).unwrap())
        );
    }

    #[test]
    fn test_patch_check() {
        assert_eq!(Patch::new().check::<Request>(), Err(QueryError::EmptyPatch));
        assert_eq!(
            Patch::new().set("id", 3).check::<Request>(),
            Err(QueryError::ImmutableField("id".to_string()))
        );
        assert_eq!(
            Patch::new().set("role", "manager").check::<Request>(),
            Err(QueryError::unknown_field("requests", "role"))
        );
        assert!(Patch::new().set("status", "approved").check::<Request>().is_ok());
    }
}
