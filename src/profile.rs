//! Lightweight structural profile of a table.

use crate::error::Result;
use crate::table::{Shape, Table, ensure_table};
use serde::{Deserialize, Serialize};

/// Shape, columns, missing values and types of a table at one point in time.
///
/// `null_counts` and `dtypes` hold one entry per column, in column order, and
/// serialize as JSON objects with keys in that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub shape: Shape,
    pub columns: Vec<String>,
    #[serde(with = "column_map")]
    pub null_counts: Vec<(String, usize)>,
    #[serde(with = "column_map")]
    pub dtypes: Vec<(String, String)>,
}

impl ProfileSummary {
    /// Missing values across all columns.
    pub fn total_nulls(&self) -> usize {
        self.null_counts.iter().map(|(_, n)| n).sum()
    }

    pub fn null_count(&self, column: &str) -> Option<usize> {
        self.null_counts
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, n)| *n)
    }

    pub fn dtype(&self, column: &str) -> Option<&str> {
        self.dtypes
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, dtype)| dtype.as_str())
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Compute a [`ProfileSummary`]. Always recomputed; nothing is cached.
///
/// # Errors
///
/// Returns [`DfflowError::InvalidInput`](crate::error::DfflowError::InvalidInput)
/// if `table` fails the capability check.
pub fn summarize<T: Table + ?Sized>(table: &T) -> Result<ProfileSummary> {
    ensure_table(table)?;

    Ok(ProfileSummary {
        shape: table.shape(),
        columns: table.column_names(),
        null_counts: table.null_counts(),
        dtypes: table.dtype_names(),
    })
}

/// `Vec<(String, V)>` as a JSON object, keeping entry order.
mod column_map {
    use serde::de::{MapAccess, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;
    use std::marker::PhantomData;

    pub(super) fn serialize<V, S>(entries: &[(String, V)], serializer: S) -> Result<S::Ok, S::Error>
    where
        V: Serialize,
        S: Serializer,
    {
        serializer.collect_map(entries.iter().map(|(name, value)| (name, value)))
    }

    pub(super) fn deserialize<'de, V, D>(deserializer: D) -> Result<Vec<(String, V)>, D::Error>
    where
        V: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }

    struct EntriesVisitor<V>(PhantomData<V>);

    impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
        type Value = Vec<(String, V)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map keyed by column name")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }
}
