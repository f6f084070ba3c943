use std::collections::BTreeSet;

use tabclean_model::Table;
use tracing::debug;

/// Normalize a column name: trim, lowercase, replace anything outside
/// `[a-z0-9_]` with an underscore, collapse runs, strip edge underscores.
pub fn normalize_column_name(raw: &str) -> String {
    let mut normalized = String::with_capacity(raw.len());
    let mut last_underscore = false;
    for ch in raw.trim().chars() {
        let lowered = ch.to_ascii_lowercase();
        if lowered.is_ascii_alphanumeric() {
            normalized.push(lowered);
            last_underscore = false;
        } else if !last_underscore {
            normalized.push('_');
            last_underscore = true;
        }
    }
    normalized.trim_matches('_').to_string()
}

/// Rewrite every column name into its canonical form.
///
/// Distinct headers can collapse to the same canonical name ("Amount" and
/// "amount%" both become "amount"). The columns coexist under the shared
/// name; the collision is logged so it stays visible.
pub fn normalize_columns(mut table: Table) -> Table {
    let mut seen = BTreeSet::new();
    for column in &mut table.columns {
        column.name = normalize_column_name(&column.name);
        if !seen.insert(column.name.clone()) {
            debug!(column = %column.name, "normalized name collides with an earlier column");
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_replaces_separators() {
        assert_eq!(normalize_column_name("Customer Name"), "customer_name");
        assert_eq!(normalize_column_name("Order Date"), "order_date");
        assert_eq!(normalize_column_name("Amount ($)"), "amount");
    }

    #[test]
    fn collapses_runs_and_strips_edges() {
        assert_eq!(normalize_column_name("  A -- B  "), "a_b");
        assert_eq!(normalize_column_name("__already__ok__"), "already_ok");
        assert_eq!(normalize_column_name("%%%"), "");
    }

    #[test]
    fn colliding_normalized_names_coexist() {
        use tabclean_model::{Column, ColumnKind};
        let table = Table::new(vec![
            Column::new("Amount", ColumnKind::Text),
            Column::new("amount%", ColumnKind::Text),
        ]);
        let normalized = normalize_columns(table);
        assert_eq!(normalized.column_names(), vec!["amount", "amount"]);
    }

    #[test]
    fn is_idempotent() {
        for raw in ["Customer Name", "order_date", "A (B) C", "x1"] {
            let once = normalize_column_name(raw);
            assert_eq!(normalize_column_name(&once), once);
        }
    }
}
