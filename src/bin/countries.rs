use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use countries_rs::config::{ENV_ENDPOINT, ENV_TIMEOUT_SECS};
use countries_rs::{
    Client, ClientConfig, Column, LoadOutcome, RegionFilter, SortOrder, SortSpec, TableView,
};
use countries_rs::{export, format};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "countries",
    version,
    about = "Fetch, filter, sort & export REST Countries data"
)]
struct Cli {
    /// Countries endpoint (defaults to the public REST Countries v3.1 `all` URL).
    #[arg(long, global = true, env = ENV_ENDPOINT)]
    endpoint: Option<String>,
    /// Total request timeout in seconds (default 30).
    #[arg(long, global = true, env = ENV_TIMEOUT_SECS)]
    timeout: Option<u64>,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the (filtered and sorted) country table.
    List(ListArgs),
    /// Print the region options, starting with "All".
    Regions,
    /// Write the (filtered and sorted) rows to a file.
    Export(ExportArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Order {
    Asc,
    Desc,
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct ViewArgs {
    /// Keep only this region (exact match), "(blank)" for records without one, or "all".
    #[arg(short, long, default_value = "all")]
    region: String,
    /// Column to sort by: name, region, population, area_km2 (or area), borders,
    /// languages, timezones.
    #[arg(short, long, default_value_t = Column::Name)]
    sort: Column,
    /// Sort direction.
    #[arg(short, long, value_enum, default_value_t = Order::Asc)]
    order: Order,
}

#[derive(Args, Debug)]
struct ListArgs {
    #[command(flatten)]
    view: ViewArgs,
    /// Locale for number formatting (en, de, fr, es, it, pt, nl).
    #[arg(long, default_value = "en")]
    locale: String,
    /// Print at most this many rows.
    #[arg(long)]
    limit: Option<usize>,
}

#[derive(Args, Debug)]
struct ExportArgs {
    #[command(flatten)]
    view: ViewArgs,
    /// Output file (format inferred by --format or extension).
    #[arg(long, conflicts_with = "dir")]
    out: Option<PathBuf>,
    /// Output directory; the file is named `filtered_countries.csv`.
    #[arg(long)]
    dir: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
}

impl ViewArgs {
    fn apply(&self, rows: Vec<countries_rs::CountryRecord>) -> TableView {
        let mut view = TableView::new(rows);
        view.set_region(RegionFilter::parse(&self.region));
        view.set_sort(SortSpec {
            column: self.sort,
            order: match self.order {
                Order::Asc => SortOrder::Ascending,
                Order::Desc => SortOrder::Descending,
            },
        });
        view
    }
}

const NO_DATA: &str = "No data found to display.";

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = ClientConfig::default().with_overrides(cli.endpoint, cli.timeout);
    let client = Client::new(config)?;
    let outcome = client.load();
    report_error(&outcome);
    match cli.cmd {
        Command::List(args) => cmd_list(outcome, args),
        Command::Regions => cmd_regions(outcome),
        Command::Export(args) => cmd_export(outcome, args),
    }
}

fn report_error(outcome: &LoadOutcome) {
    if let Some(err) = &outcome.error {
        eprintln!("Error: {err}");
    }
}

fn cmd_list(outcome: LoadOutcome, args: ListArgs) -> Result<()> {
    if outcome.rows.is_empty() {
        println!("{NO_DATA}");
        return Ok(());
    }
    let view = args.view.apply(outcome.rows);
    let shown = match args.limit {
        Some(n) => &view.displayed()[..n.min(view.displayed().len())],
        None => view.displayed(),
    };
    print!("{}", format::render_table(shown, &args.locale));
    eprintln!(
        "Showing {} of {} countries (region: {}, sorted by {} {})",
        shown.len(),
        view.source().len(),
        view.region().label(),
        view.sort().column,
        match view.sort().order {
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
        }
    );
    Ok(())
}

fn cmd_regions(outcome: LoadOutcome) -> Result<()> {
    if outcome.rows.is_empty() {
        println!("{NO_DATA}");
        return Ok(());
    }
    let view = TableView::new(outcome.rows);
    for option in view.region_options() {
        println!("{}", option.label());
    }
    Ok(())
}

fn cmd_export(outcome: LoadOutcome, args: ExportArgs) -> Result<()> {
    if outcome.rows.is_empty() {
        println!("{NO_DATA}");
        return Ok(());
    }
    let view = args.view.apply(outcome.rows);
    let rows = view.displayed();

    let path = match (&args.out, &args.dir) {
        (Some(p), _) => p.clone(),
        (None, Some(d)) => d.join(export::EXPORT_FILE_NAME),
        (None, None) => PathBuf::from(export::EXPORT_FILE_NAME),
    };
    let fmt = match args.format {
        Some(OutFormat::Csv) => "csv",
        Some(OutFormat::Json) => "json",
        None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
    }
    .to_ascii_lowercase();
    match fmt.as_str() {
        "csv" => export::save_csv(rows, &path)?,
        "json" => export::save_json(rows, &path)?,
        other => anyhow::bail!("unsupported format: {}", other),
    }
    eprintln!("Saved {} rows to {}", rows.len(), path.display());
    Ok(())
}
