//! Translation of filters and patches into SQL.
//!
//! Field names are pushed into the statement verbatim, so
//! callers must check them against the record's columns first.

use nomad_data::{Condition, Filter, Op, Patch, Record, Value};
use sqlx::{QueryBuilder, Sqlite};

fn op_sql(op: Op) -> &'static str {
    match op {
        Op::Eq => " = ",
        Op::Ne => " <> ",
        Op::Lt => " < ",
        Op::Le => " <= ",
        Op::Gt => " > ",
        Op::Ge => " >= ",
    }
}

/// Bind a value as query parameter
pub fn push_value(qry: &mut QueryBuilder<'_, Sqlite>, value: &Value) {
    match value.clone() {
        Value::Null => qry.push_bind(None::<String>),
        Value::Bool(v) => qry.push_bind(v),
        Value::Int(v) => qry.push_bind(v),
        Value::Float(v) => qry.push_bind(v),
        Value::Date(v) => qry.push_bind(v),
        Value::Text(v) => qry.push_bind(v),
    };
}

fn push_condition(qry: &mut QueryBuilder<'_, Sqlite>, cond: &Condition) {
    if cond.value.is_null() {
        match cond.op {
            Op::Eq => qry.push(&cond.field).push(" IS NULL"),
            Op::Ne => qry.push(&cond.field).push(" IS NOT NULL"),
            _ => qry.push("0"),
        };
        return;
    }
    qry.push(&cond.field).push(op_sql(cond.op));
    push_value(qry, &cond.value);
}

fn push_junction(
    qry: &mut QueryBuilder<'_, Sqlite>,
    filters: &[Filter],
    separator: &str,
    empty: &str,
) {
    if filters.is_empty() {
        qry.push(empty);
        return;
    }
    qry.push("(");
    for (i, filter) in filters.iter().enumerate() {
        if i > 0 {
            qry.push(separator);
        }
        push_filter(qry, filter);
    }
    qry.push(")");
}

/// Append the filter as boolean SQL expression
pub fn push_filter(qry: &mut QueryBuilder<'_, Sqlite>, filter: &Filter) {
    match filter {
        Filter::All => {
            qry.push("1");
        }
        Filter::Where(cond) => push_condition(qry, cond),
        Filter::And(filters) => push_junction(qry, filters, " AND ", "1"),
        Filter::Or(filters) => push_junction(qry, filters, " OR ", "0"),
    }
}

/// Build a select statement for a record
pub fn select<'q, T: Record>(filter: &Filter) -> QueryBuilder<'q, Sqlite> {
    let mut qry = QueryBuilder::new(format!(
        "SELECT {} FROM {} WHERE ",
        T::COLUMNS.join(", "),
        T::TABLE
    ));
    push_filter(&mut qry, filter);
    qry.push(" ORDER BY id");
    qry
}

/// Build an insert statement returning the new id
pub fn insert<'q, T: Record>(item: &T) -> QueryBuilder<'q, Sqlite> {
    let columns = &T::COLUMNS[1..];
    let mut qry = QueryBuilder::new(format!(
        "INSERT INTO {} ({}) VALUES (",
        T::TABLE,
        columns.join(", ")
    ));
    for (i, column) in columns.iter().enumerate() {
        if i > 0 {
            qry.push(", ");
        }
        let value = item.field(column).unwrap_or(Value::Null);
        push_value(&mut qry, &value);
    }
    qry.push(") RETURNING id");
    qry
}

/// Build an update statement returning the updated rows
pub fn update<'q, T: Record>(patch: &Patch, filter: &Filter) -> QueryBuilder<'q, Sqlite> {
    let mut qry = QueryBuilder::new(format!("UPDATE {} SET ", T::TABLE));
    for (i, (field, value)) in patch.iter().enumerate() {
        if i > 0 {
            qry.push(", ");
        }
        qry.push(field).push(" = ");
        push_value(&mut qry, value);
    }
    qry.push(" WHERE ");
    push_filter(&mut qry, filter);
    qry.push(" RETURNING ").push(T::COLUMNS.join(", "));
    qry
}
