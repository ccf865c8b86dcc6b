use clap::{Arg, Command};
use menuseed::{DEFAULT_OUTPUT_PATH, ScriptWriter, SeedGenerator};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let matches = Command::new("menuseed")
        .version(menuseed::VERSION)
        .about("Generates menu_items INSERT statements from the embedded menu")
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("PATH")
                .help("SQL script path for generate mode")
                .default_value(DEFAULT_OUTPUT_PATH)
        )
        .arg(
            Arg::new("mode")
                .short('m')
                .long("mode")
                .value_name("MODE")
                .help("Execution mode: generate, preview, summary, export")
                .default_value("generate")
        )
        .get_matches();
    init_tracing();
    let output_path = matches
        .get_one::<String>("output")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH));
    let mode = matches
        .get_one::<String>("mode")
        .map(String::as_str)
        .unwrap_or("generate");
    info!("{}", menuseed::version_info());
    let generator = SeedGenerator::new()?;
    match mode {
        "generate" => {
            let writer = ScriptWriter::new(&output_path);
            let (report, summary) = generator.generate(&writer).await?;
            info!(
                path = ?report.path,
                statements = report.statements,
                total_items = summary.total_items,
                "generation completed"
            );
        }
        "preview" => {
            print!("{}", generator.render_sql()?);
        }
        "summary" => {
            let summary = generator.summary()?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        "export" => {
            let items = generator.parse_items()?;
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        _ => {
            eprintln!("Unknown mode: {}. Use 'generate', 'preview', 'summary' or 'export'", mode);
            std::process::exit(1);
        }
    }
    Ok(())
}
