//! Inspect command implementation.

use crate::{SourceArgs, data};
use anyhow::Result;
use tenet_eval::millify;
use tenet_traits::{EquityData, StatementKind, StatementStore};

/// Print one statement of a company, most recent period first.
pub(crate) async fn inspect(id: &str, kind: StatementKind, source: &SourceArgs) -> Result<()> {
    let config = data::load_config(source)?;
    let tr = data::language(source);
    let equity = data::load_equity(id, source, &config, &tr).await?;

    println!("\n{} ({}): {}", equity.name(), equity.symbol(), kind.title());
    println!("{}", "━".repeat(62));
    print!("{}", render_statement(equity.statement(kind)));
    println!();

    Ok(())
}

/// One row per metric, one column per period.
fn render_statement(store: &StatementStore) -> String {
    if store.is_empty() {
        return "No data\n".to_string();
    }
    let labels = store.labels();
    let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let mut out = format!("{:width$}", "");
    for period in store.periods() {
        let period = period.to_string();
        out.push_str(&format!("  {period:>10}"));
    }
    out.push('\n');

    for label in &labels {
        out.push_str(&format!("{label:width$}"));
        if let Some(series) = store.series(label) {
            for value in series.values() {
                let cell = value.map_or_else(|| "-".to_string(), millify);
                out.push_str(&format!("  {cell:>10}"));
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenet_traits::Date;

    #[test]
    fn test_render_statement() {
        let store = StatementStore::builder(StatementKind::IncomeStatement)
            .periods([
                Date::from_ymd_opt(2023, 12, 31).unwrap(),
                Date::from_ymd_opt(2022, 12, 31).unwrap(),
            ])
            .metric("Net Income", [Some(2.5e9), None])
            .build()
            .unwrap();
        let text = render_statement(&store);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].contains("2023-12-31"));
        assert!(lines[1].starts_with("Net Income"));
        assert!(lines[1].contains("2.50B"));
        assert!(lines[1].trim_end().ends_with('-'));
    }

    #[test]
    fn test_empty_statement() {
        assert_eq!(
            render_statement(&StatementStore::empty(StatementKind::Ratios)),
            "No data\n"
        );
    }
}
