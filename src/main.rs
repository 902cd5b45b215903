//! AddiLess CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Interactive session (default command)
//! addiless
//! addiless browse
//!
//! # One-shot search
//! addiless search ほろよい
//! addiless search --additive-mode none
//! addiless -q search --genre チューハイ --format csv
//!
//! # Inspect labels and vocabularies
//! addiless labels --additive 香料 --manufacturer サントリー
//! addiless vocab additives
//! ```
//!
//! # Configuration
//!
//! Settings live in the user's config directory
//! (`~/.config/addiless/config.toml` on Linux) and are created with defaults
//! on first run.

use addiless::{
    AddilessError,
    catalog::source_for,
    cli::{Cli, Commands},
    commands,
    config::AddilessConfig,
    output::write_view,
    state::AppState,
    ui::{DialoguerInput, OutputWriter, StdoutWriter},
    view::View,
};
use tracing::Level;

type Result<T> = std::result::Result<T, AddilessError>;

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let mut cli = Cli::parse_args();
    init_tracing(cli.verbose);

    let config = AddilessConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "could not load config, using defaults");
        AddilessConfig::default()
    });

    let quiet = cli.quiet || config.quiet;
    let out = StdoutWriter::new(quiet);

    let catalog_path = cli.catalog.clone().or_else(|| config.catalog_path.clone());
    let source = source_for(catalog_path.as_deref());
    let mut state = AppState::new(config.apply_mode);

    match cli.take_command() {
        Commands::Browse => {
            let input = DialoguerInput::new();
            commands::browse::execute(&mut state, source.as_ref(), quiet, &input, &out)?;
        }
        Commands::Search {
            query,
            facets,
            remove,
            format,
        } => {
            if let Err(e) = state.load_catalog(source.as_ref()) {
                write_view(&View::compose(&state), &out);
                return Err(e.into());
            }
            out.success(&format!(
                "Loaded {} products from {}",
                state.catalog().len(),
                source.describe()
            ));
            commands::search::execute(
                &mut state,
                query.as_deref(),
                &facets,
                &remove,
                format.unwrap_or(config.output_format),
                quiet,
                &out,
            )?;
        }
        Commands::Labels { facets } => commands::labels::execute(&facets, quiet, &out),
        Commands::Vocab { vocabulary } => {
            commands::vocab::execute(vocabulary.map(Into::into), quiet, &out);
        }
    }

    Ok(())
}
