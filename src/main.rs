mod cells;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use sparkrs::{SessionConfig, SparkSession};

#[derive(Parser)]
#[command(name = "sparkrs-cells")]
#[command(about = "Run the sparkrs DataFrame walkthrough cells")]
struct Cli {
    /// Which group of cells to run
    #[arg(value_enum, default_value = "all")]
    cell: Cell,

    /// TOML session configuration ([session] master/app_name, [conf] table)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Cell {
    All,
    Replace,
    Partitions,
    Joins,
    Schema,
    Columns,
    Window,
}

fn run(cli: &Cli) -> sparkrs::Result<()> {
    let mut config = match &cli.config {
        Some(path) => SessionConfig::from_file(path)?,
        None => SessionConfig::default(),
    };
    config.session.master.get_or_insert_with(|| "local[1]".to_string());
    config.session.app_name.get_or_insert_with(|| "sparkrs-cells".to_string());
    let spark = SparkSession::builder().with_config(config).get_or_create()?;

    let wants = |cell: Cell| cli.cell == Cell::All || cli.cell == cell;
    if wants(Cell::Replace) {
        cells::regexp_replace_cells(&spark)?;
    }
    if wants(Cell::Partitions) {
        cells::partition_cells(&spark)?;
    }
    if wants(Cell::Joins) {
        cells::join_cells(&spark)?;
    }
    if wants(Cell::Schema) {
        cells::schema_cells(&spark)?;
    }
    if wants(Cell::Columns) {
        cells::column_cells(&spark)?;
    }
    if wants(Cell::Window) {
        cells::window_cells(&spark)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
