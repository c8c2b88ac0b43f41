use std::fmt::Write as _;
use std::path::Path;

use atria_core::models::record::{ResponseRecord, TestSubmission};
use atria_core::models::response::{Choice, Responses};
use atria_instruments::Instrument;
use atria_instruments::catalog::Catalog;
use atria_instruments::error::InstrumentError;
use atria_instruments::instruments::custom::CustomInstrument;
use atria_instruments::report::{TalentReport, primary_talent_domain};

use crate::cli::{CatalogCommand, Cli, Command, ConfigCommand, OutputFormat, ScoreArgs};
use crate::config::{self, AtriaConfig};

/// Execute a parsed command line and return what should go to stdout.
pub fn run(cli: Cli) -> eyre::Result<String> {
    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };

    match cli.command {
        Command::Score(args) => {
            let config = config::load_config(&config_path)?;
            score(&config, &args)
        }
        Command::Catalog { command } => match command {
            CatalogCommand::List => catalog_list(&config::load_config(&config_path)?),
            CatalogCommand::Validate { path } => catalog_validate(&path),
        },
        Command::Config { command } => match command {
            ConfigCommand::Init { force } => config_init(&config_path, force),
            ConfigCommand::Show => config_show(&config_path),
        },
    }
}

/// The instrument the config points at: a custom catalog file when one is
/// set, otherwise the built-in instrument with the configured id.
pub fn resolve_instrument(config: &AtriaConfig) -> eyre::Result<Box<dyn Instrument>> {
    if let Some(path) = &config.catalog_path {
        let json = std::fs::read_to_string(path)
            .map_err(|e| eyre::eyre!("failed to read catalog at {}: {e}", path.display()))?;
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| config.instrument_id.clone());
        let instrument = CustomInstrument::from_json(config.instrument_id.clone(), name, &json)?;
        return Ok(Box::new(instrument));
    }

    atria_instruments::get_instrument(&config.instrument_id)
        .ok_or_else(|| InstrumentError::UnknownInstrument(config.instrument_id.clone()).into())
}

pub fn score(config: &AtriaConfig, args: &ScoreArgs) -> eyre::Result<String> {
    let limit = args.top.unwrap_or(config.top_subdomain_limit);
    if limit == 0 {
        return Err(eyre::eyre!("--top must be at least 1"));
    }

    let instrument = resolve_instrument(config)?;
    let contents = std::fs::read_to_string(&args.responses).map_err(|e| {
        eyre::eyre!(
            "failed to read responses at {}: {e}",
            args.responses.display()
        )
    })?;
    let responses = Responses::from_json(&contents)?;

    let scores = instrument.score(&responses);
    let answered = responses.answered_count() as u32;
    let scored = scores.total();
    tracing::info!(
        instrument = instrument.id(),
        answered,
        scored,
        "scored responses"
    );
    if scored < answered {
        tracing::warn!(
            skipped = answered - scored,
            "some answers did not match a catalog statement"
        );
    }

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&TalentReport::build(&scores, limit))?,
        OutputFormat::Text => instrument.to_structured_input(&scores),
        OutputFormat::Record => {
            let assignment_id = args
                .assignment
                .ok_or_else(|| eyre::eyre!("--assignment is required for record output"))?;
            let submission = TestSubmission {
                assignment_id,
                responses,
                is_auto_submit: args.auto_submit,
                test_start_time: None,
                test_completion_time: Some(jiff::Timestamp::now()),
            };
            let primary = primary_talent_domain(&scores.core);
            let record = ResponseRecord::from_submission(submission, scores, primary);
            serde_json::to_string_pretty(&record)?
        }
    };
    Ok(output)
}

pub fn catalog_list(config: &AtriaConfig) -> eyre::Result<String> {
    let instrument = resolve_instrument(config)?;
    let mut output = String::new();
    writeln!(
        output,
        "{} ({} questions)",
        instrument.name(),
        instrument.catalog().question_count()
    )?;
    for item in instrument.catalog().items() {
        for choice in Choice::ALL {
            writeln!(
                output,
                "{:>3}{}  {} [{}]",
                item.id,
                choice,
                item.statement(choice),
                item.theme(choice).label()
            )?;
        }
    }
    Ok(output)
}

pub fn catalog_validate(path: &Path) -> eyre::Result<String> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read catalog at {}: {e}", path.display()))?;
    let catalog = Catalog::from_json(&json)?;

    let mut output = String::new();
    writeln!(
        output,
        "{}: {} questions, {} statements",
        path.display(),
        catalog.question_count(),
        catalog.statement_count()
    )?;
    for (domain, count) in catalog.statement_counts().iter() {
        writeln!(output, "  {}: {count}", domain.label())?;
    }
    Ok(output)
}

pub fn config_init(path: &Path, force: bool) -> eyre::Result<String> {
    if path.exists() && !force {
        return Err(eyre::eyre!(
            "{} already exists (use --force to overwrite)",
            path.display()
        ));
    }
    config::save_config(path, &AtriaConfig::default())?;
    Ok(format!("wrote {}", path.display()))
}

pub fn config_show(path: &Path) -> eyre::Result<String> {
    let config = config::load_config(path)?;
    Ok(serde_json::to_string_pretty(&config)?)
}
