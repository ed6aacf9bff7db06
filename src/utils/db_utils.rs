use chrono::NaiveDate;
use sqlx::MySql;
use sqlx::mysql::MySqlArguments;
use sqlx::query::QueryAs;
use uuid::Uuid;

/// ===============================
/// SQL bindable value enum
/// ===============================
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Uuid(Uuid),
    Date(NaiveDate),
}

/// One `column <op> ?` predicate and the value bound to its placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub clause: &'static str,
    pub value: SqlValue,
}

impl Condition {
    pub fn new(clause: &'static str, value: SqlValue) -> Self {
        Self { clause, value }
    }
}

/// ===============================
/// SQL select container
/// ===============================
#[derive(Debug)]
pub struct SqlSelect {
    pub sql: String,
    pub values: Vec<SqlValue>,
}

/// ===============================
/// Build filtered SELECT SQL
/// ===============================
pub fn build_select_sql(
    table: &str,
    columns: &[&str],
    conditions: Vec<Condition>,
    order_by: &str,
) -> SqlSelect {
    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        let clauses = conditions.iter().map(|c| c.clause).collect::<Vec<_>>();
        format!(" WHERE {}", clauses.join(" AND "))
    };

    let sql = format!(
        "SELECT {} FROM {}{} ORDER BY {}",
        columns.join(", "),
        table,
        where_clause,
        order_by
    );

    SqlSelect {
        sql,
        values: conditions.into_iter().map(|c| c.value).collect(),
    }
}

/// ===============================
/// Bind values onto a typed query
/// ===============================
pub fn bind_values<'q, T>(
    mut query: QueryAs<'q, MySql, T, MySqlArguments>,
    values: Vec<SqlValue>,
) -> QueryAs<'q, MySql, T, MySqlArguments> {
    for value in values {
        query = match value {
            SqlValue::Uuid(v) => query.bind(v),
            SqlValue::Date(v) => query.bind(v),
        };
    }
    query
}
