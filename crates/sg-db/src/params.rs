//! Bulk-insert parameter encoding

use rusqlite::types::Value;
use std::collections::HashMap;

/// Encode rows for a multi-row parameterized `INSERT`.
///
/// For row `i` and column `c` the bind name is `c_i`; each row becomes one
/// placeholder group like `(:a_0, :b_0)` for splicing into a
/// `VALUES (...), (...)` clause, with every value carried in the returned
/// flat parameter list instead of the SQL text. Group order matches row
/// order.
///
/// Panics if a row is missing one of `columns` - that is a caller bug, not
/// a runtime condition.
pub fn encode_insert_params(
    rows: &[HashMap<String, Value>],
    columns: &[&str],
) -> (Vec<String>, Vec<(String, Value)>) {
    let mut placeholders = Vec::with_capacity(rows.len());
    let mut params = Vec::with_capacity(rows.len() * columns.len());

    for (i, row) in rows.iter().enumerate() {
        let mut group = Vec::with_capacity(columns.len());

        for col in columns {
            let var = format!("{col}_{i}");
            group.push(format!(":{var}"));
            params.push((var, row[*col].clone()));
        }

        placeholders.push(format!("({})", group.join(", ")));
    }

    (placeholders, params)
}

#[cfg(test)]
#[path = "params_test.rs"]
mod tests;
