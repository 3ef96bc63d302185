// Файл: src/main.rs
use std::io::{self, ErrorKind};

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use sqgen::errors::SqgError;
use sqgen::loader::read_csv_terms;
use sqgen::prompt::{prompt_group_settings, select_main_group};
use sqgen::query::{build_queries_by_main_group, build_query};
use sqgen::runmeta::{generate_sq_id, RunMetadata};
use sqgen::writer::{append_run_metadata, write_queries};
use sqgen::Query;

#[derive(Parser)]
#[command(
    version,
    about = "Search query generator: build boolean search queries from CSV term lists"
)]
struct Cli {
    /// Path to input CSV file
    #[arg(short, long)]
    input: String,

    /// File to save generated query/queries
    #[arg(short, long, default_value = "queries.txt")]
    output: String,

    /// Optional path to save summary metadata CSV
    #[arg(short, long)]
    metadata: Option<String>,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    // Известный пробел: процесс всегда завершается кодом 0, даже при ошибке
    if let Err(err) = run(&cli) {
        report_error(&err, &cli.input);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let group_terms = read_csv_terms(&cli.input)?;
    let headers: Vec<String> = group_terms.keys().cloned().collect();
    tracing::debug!(columns = headers.len(), "loaded term groups");

    let stdin = io::stdin();
    let mut inp = stdin.lock();
    let mut out = io::stdout();

    let group_logic = prompt_group_settings(&mut inp, &mut out, &headers)?;
    let main_group = select_main_group(&mut inp, &mut out, &headers)?;

    let sq_id = generate_sq_id();

    let queries = match main_group.as_deref() {
        Some(group) => build_queries_by_main_group(&group_terms, &group_logic, group)?,
        None => vec![Query {
            label: None,
            text: build_query(&group_terms, &group_logic)?,
        }],
    };
    tracing::debug!(count = queries.len(), main_group = ?main_group, "queries assembled");

    write_queries(&queries, &cli.output, main_group.as_deref())?;

    if let Some(meta_path) = &cli.metadata {
        let meta = RunMetadata::collect(
            &sq_id,
            &cli.input,
            main_group.as_deref(),
            &group_terms,
            &group_logic,
            queries.len(),
        );
        append_run_metadata(&meta, meta_path)?;
        println!("Metadata appended to {meta_path} [Run ID: {sq_id}]");
    }

    let plural = if queries.len() == 1 { "y" } else { "ies" };
    println!("{} quer{plural} saved to {}", queries.len(), cli.output);
    Ok(())
}

fn report_error(err: &anyhow::Error, input: &str) {
    let not_found = matches!(
        err.downcast_ref::<SqgError>(),
        Some(SqgError::Io(io_err)) if io_err.kind() == ErrorKind::NotFound
    );
    if not_found {
        eprintln!("Error: input file not found - {input}");
    } else {
        eprintln!("An error occurred: {err}");
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
