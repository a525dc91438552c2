use std::io::BufRead;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use workload_summary::summary::{self, SummaryOptions};
use workload_summary::{Result, ToolError};

fn main() {
    let cli = Cli::parse();
    let pause = !cli.no_pause;
    if let Err(error) = run(cli) {
        eprintln!("执行失败: {error}");
        if pause {
            wait_for_enter();
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging()?;
    let options = cli.into_options();
    let output = summary::summarize(&options)?;
    println!("文件已保存在{}中", output.display());
    Ok(())
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

/// Keeps a console window opened by double-click alive until the error is read.
fn wait_for_enter() {
    eprintln!("按回车退出");
    let mut line = String::new();
    let _ = std::io::stdin().lock().read_line(&mut line);
}

fn parse_month(value: &str) -> std::result::Result<NaiveDate, String> {
    NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d")
        .map_err(|error| format!("expected YYYY-MM: {error}"))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Sum monthly per-person workload figures into one roster-ordered workbook."
)]
struct Cli {
    /// Directory holding the source workbooks; the summary is written here.
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// Roster workbook (defaults to the roster file inside --dir).
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Output file name prefix.
    #[arg(long, default_value = summary::DEFAULT_OUTPUT_PREFIX)]
    prefix: String,

    /// Department name shown in the report title.
    #[arg(long, default_value = summary::DEFAULT_DEPARTMENT)]
    department: String,

    /// Report month as YYYY-MM (defaults to the current month).
    #[arg(long, value_parser = parse_month)]
    month: Option<NaiveDate>,

    /// Also write the report as JSON to this path.
    #[arg(long)]
    json: Option<PathBuf>,

    /// Exit immediately on failure instead of waiting for Enter.
    #[arg(long)]
    no_pause: bool,
}

impl Cli {
    fn into_options(self) -> SummaryOptions {
        let month = self.month.unwrap_or_else(|| Local::now().date_naive());
        let mut options = SummaryOptions::new(self.dir, month);
        if let Some(roster) = self.roster {
            options.roster_path = roster;
        }
        options.output_prefix = self.prefix;
        options.department = self.department;
        options.json_path = self.json;
        options
    }
}
