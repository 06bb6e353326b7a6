use crate::reports;
use clap::{Args, ValueEnum};
use handodds::category::parse_category;
use handodds::{analyze_config, CategoryFilter, HandCategory, HandError, RollConfig};
use std::process;
use tracing::error;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Text,
    Json,
    Csv,
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub config: RollConfig,

    /// Ignore hands making any of these categories (names or ranks, comma separated)
    #[arg(short, long, value_delimiter = ',', value_parser = parse_category)]
    pub exclude: Vec<HandCategory>,

    /// Require hands to make at least one of these categories
    #[arg(short, long, value_delimiter = ',', value_parser = parse_category)]
    pub include: Vec<HandCategory>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Append the elapsed analysis time
    #[arg(long, default_value_t = false)]
    pub timing: bool,
}

impl AnalyzeArgs {
    pub fn filter(&self) -> CategoryFilter {
        CategoryFilter::new(
            self.exclude.iter().copied().collect(),
            self.include.iter().copied().collect(),
        )
    }
}

pub fn run(args: AnalyzeArgs) {
    let filter = args.filter();

    let report = match analyze_config(&args.config, &filter) {
        Ok(report) => report,
        Err(HandError::EmptyDomain) => {
            println!("{}", HandError::EmptyDomain);
            return;
        }
        Err(e) => {
            error!("❌ {}", e);
            process::exit(1);
        }
    };

    let rendered = match args.format {
        OutputFormat::Table => {
            reports::print_odds_table(&report, args.timing);
            Ok(())
        }
        OutputFormat::Text => {
            print!("{}", report.render_text(args.timing));
            Ok(())
        }
        OutputFormat::Json => reports::print_json(&report).map_err(|e| e.to_string()),
        OutputFormat::Csv => reports::print_csv(&report).map_err(|e| e.to_string()),
    };

    if let Err(e) = rendered {
        error!("❌ Failed to render report: {}", e);
        process::exit(1);
    }
}
