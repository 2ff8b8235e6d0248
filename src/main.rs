use clap::Parser;
use droz::application::{ExportOptions, ExportService};
use droz::cli::{format_export_summary, Cli};
use droz::error::DrozError;
use droz::infrastructure::SiteConfig;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), DrozError> {
    let notes_dir = cli.notes_dir();
    let config = SiteConfig::load(&notes_dir, &cli.config)?;

    let service = ExportService::new(ExportOptions {
        notes_dir,
        site_root: cli.to,
        strict: cli.strict,
    });
    let report = service.execute(&config)?;

    println!("{}", format_export_summary(&report));
    Ok(())
}
