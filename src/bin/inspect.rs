//! Prints the companies the chart would show for a given filter.
//!
//! cargo run --bin inspect -- --data companies.json --outliers --category champion

use anyhow::{Context, Result, bail};
use clap::Parser;
use itertools::Itertools;
use std::path::PathBuf;
use tabled::{Table, Tabled, settings::Style};

use dividend_bubbles::domain::{Category, DataPoint};
use dividend_bubbles::models::filter::apply;
use dividend_bubbles::{Filter, load_dataset, preprocess};

#[derive(Parser, Debug)]
#[command(about = "List the companies that pass the filter")]
struct Args {
    /// Company records (JSON array). Defaults to companies.json, then the demo set
    #[arg(long)]
    data: Option<PathBuf>,

    /// Trim the top 5% of payout and yield growth
    #[arg(long, default_value_t = false)]
    outliers: bool,

    /// Restrict to these categories (repeatable). Defaults to all three
    #[arg(long)]
    category: Vec<String>,
}

#[derive(Tabled)]
struct Row {
    #[tabled(rename = "Ticker")]
    ticker: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Yield %")]
    div_yield: String,
    #[tabled(rename = "Payout %")]
    payout: String,
    #[tabled(rename = "Relative")]
    relative: String,
    #[tabled(rename = "3y growth %")]
    divg3y: String,
}

fn cell(value: Option<f64>) -> String {
    value.map(|v| format!("{:.2}", v)).unwrap_or_else(|| "-".to_string())
}

impl From<&DataPoint> for Row {
    fn from(point: &DataPoint) -> Self {
        Self {
            ticker: point.ticker.clone(),
            category: point
                .resolved_category()
                .map(|c| c.to_string())
                .unwrap_or_else(|| "-".to_string()),
            div_yield: cell(point.div_yield),
            payout: cell(point.payout),
            relative: cell(point.relative),
            divg3y: cell(point.divg3y),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut filter = Filter {
        outliers: args.outliers,
        ..Filter::default()
    };
    if !args.category.is_empty() {
        filter.categories = args
            .category
            .iter()
            .map(|text| {
                text.parse::<Category>()
                    .with_context(|| format!("Unknown category '{}'", text))
            })
            .collect::<Result<_>>()?;
    }

    let dataset = load_dataset(args.data.as_deref());
    if dataset.records.is_empty() {
        bail!("{} has no records", dataset.origin);
    }
    let records = preprocess(&dataset.records, false);
    let visible = apply(&records, &filter);

    let rows = visible
        .iter()
        .sorted_by(|a, b| a.ticker.cmp(&b.ticker))
        .map(|point| Row::from(*point))
        .collect_vec();

    println!("{}", Table::new(rows).with(Style::rounded()));
    println!(
        "{} of {} companies visible (source: {})",
        visible.len(),
        records.len(),
        dataset.origin
    );
    for (category, count) in visible
        .iter()
        .filter_map(|p| p.resolved_category())
        .counts()
        .into_iter()
        .sorted()
    {
        println!("  {:<12} {}", category.title(), count);
    }
    Ok(())
}
