use sqlx::FromRow;

/// Primary key returned by an insert
#[derive(Debug, Clone, FromRow)]
pub struct Id {
    pub id: i64,
}
