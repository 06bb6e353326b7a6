use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use handodds::report::{AnalysisReport, CategoryOdds};
use serde::Serialize;
use std::io;

pub fn print_odds_table(report: &AnalysisReport, with_timing: bool) {
    println!("\n🎲 === HAND ODDS === 🎲");
    println!("Config: {}", report.config);
    if let Some(summary) = &report.filtered {
        if !summary.filter.excluded.is_empty() {
            println!("Excluded: {}", summary.filter.excluded);
        }
        if !summary.filter.included.is_empty() {
            println!("Included: {}", summary.filter.included);
        }
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Rank"),
        Cell::new("Category").add_attribute(Attribute::Bold),
        Cell::new("Rolled"),
        Cell::new("Reroll").fg(Color::Green),
        Cell::new("Total"),
        Cell::new("Odds").fg(Color::Cyan),
    ]);

    for i in [0, 2, 3, 4, 5] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for odds in &report.categories {
        table.add_row(vec![
            Cell::new(odds.category.rank()),
            Cell::new(odds.category.name()).add_attribute(Attribute::Bold),
            Cell::new(odds.count),
            Cell::new(format!("{:.4}", odds.reroll_odds)).fg(Color::Green),
            Cell::new(report.total),
            Cell::new(format!("{:.4}%", odds.percent())).fg(Color::Cyan),
        ]);
    }
    println!("{}", table);

    if let Some(summary) = &report.filtered {
        println!(
            "{:.4} of {} hands ({:.4}%) after exclusions / inclusions",
            summary.passing,
            summary.total,
            summary.probability * 100.0
        );
    }
    if with_timing {
        println!("⏱️  That took about {:.3?}.", report.elapsed);
    }
}

pub fn print_json(report: &AnalysisReport) -> Result<(), serde_json::Error> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{}", json);
    Ok(())
}

#[derive(Serialize)]
struct CsvRow<'a> {
    rank: u8,
    category: &'a str,
    count: u64,
    reroll_odds: f64,
    total: u64,
    probability: f64,
}

impl<'a> CsvRow<'a> {
    fn new(odds: &'a CategoryOdds, total: u64) -> Self {
        Self {
            rank: odds.category.rank(),
            category: odds.category.name(),
            count: odds.count,
            reroll_odds: odds.reroll_odds,
            total,
            probability: odds.probability,
        }
    }
}

pub fn print_csv(report: &AnalysisReport) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(io::stdout());
    for odds in &report.categories {
        writer.serialize(CsvRow::new(odds, report.total))?;
    }
    writer.flush()?;
    Ok(())
}
