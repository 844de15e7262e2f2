use serde::{de::DeserializeOwned, Serialize};

use crate::{Patch, QueryError, Value};

/// A row of a persistent collection
pub trait Record: Clone + Send + Sync + Unpin + Serialize + DeserializeOwned + 'static {
    /// Name of the collection
    const TABLE: &'static str;
    /// All columns, starting with the primary key `id`
    const COLUMNS: &'static [&'static str];

    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);

    /// Get the value of a field by column name
    fn field(&self, name: &str) -> Option<Value>;

    fn has_column(name: &str) -> bool {
        Self::COLUMNS.iter().any(|column| *column == name)
    }

    /// Create a copy of the record with the patch applied
    fn patched(&self, patch: &Patch) -> Result<Self, QueryError> {
        patch.check::<Self>()?;
        let mut doc = serde_json::to_value(self)?;
        let fields = doc
            .as_object_mut()
            .ok_or_else(|| QueryError::Serde(format!("{} row is not an object", Self::TABLE)))?;
        for (field, value) in patch.iter() {
            fields.insert(field.clone(), serde_json::to_value(value)?);
        }
        Ok(serde_json::from_value(doc)?)
    }
}

/// Implement `Record` for a struct with an `id: i64` field
/// from its table name and columns.
macro_rules! record {
    ($record:ty, $table:literal, [$($column:ident),* $(,)?]) => {
        impl $crate::Record for $record {
            const TABLE: &'static str = $table;
            const COLUMNS: &'static [&'static str] = &[$(stringify!($column)),*];

            fn id(&self) -> i64 {
                self.id
            }

            fn set_id(&mut self, id: i64) {
                self.id = id;
            }

            fn field(&self, name: &str) -> Option<$crate::Value> {
                match name {
                    $(stringify!($column) => Some($crate::Value::from(self.$column.clone())),)*
                    _ => None,
                }
            }
        }
    };
}
