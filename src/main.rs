use std::{fs::OpenOptions, path::Path, sync::Mutex};

use clap::Parser;
use symptomx::{
    DataDir,
    Engine,
    diagnosis::{self, RETRY_MESSAGE},
    error,
};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Cli, Command, DiagnoseArgs};

fn init_tracing(
    verbose: u8,
    quiet: bool,
    log_file: Option<&Path>,
) -> error::Result<()> {
    let filter = if let Ok(env) = std::env::var("SYMPTOMX_LOG") {
        EnvFilter::new(env)
    } else if quiet {
        EnvFilter::new("warn")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    if let Some(path) = log_file {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .without_time()
            .init();
    }

    Ok(())
}

fn main() -> error::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    let engine = || {
        DataDir::resolve(cli.data_dir.as_deref())
            .map(|dir| Engine::initialize(dir.root()))
    };

    match &cli.command {
        Command::Diagnose(args) => cmd_diagnose(&engine()?, args)?,
        Command::Status(args) => cmd_status(&engine()?, args.json)?,
        Command::Vocab(args) => cmd_vocab(&engine()?, args.json)?,
        Command::Completions(args) => args.generate(),
    }

    Ok(())
}

fn cmd_diagnose(engine: &Engine, args: &DiagnoseArgs) -> error::Result<()> {
    let query = args.query();

    // Callers always get a renderable answer, never a raw fault.
    let result = match std::panic::catch_unwind(|| {
        engine.diagnose(&query, args.count)
    }) {
        Ok(result) => result,
        Err(_) => {
            tracing::error!(
                "diagnose failed for query of {} chars",
                query.len()
            );
            println!("{RETRY_MESSAGE}");
            return Ok(());
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", diagnosis::format_human(&result));
    }
    Ok(())
}

fn cmd_status(engine: &Engine, json: bool) -> error::Result<()> {
    let health = engine.health();

    if json {
        println!("{}", serde_json::to_string(&health)?);
    } else {
        println!("Status: {}", health.status);
        if let Some(dir) = &health.data_dir {
            println!("Data directory: {}", dir.display());
        }
        println!("Source: {}", health.source);
        println!("Diseases: {}", health.diseases);
        println!("Vocabulary: {}", health.vocab);
    }
    Ok(())
}

fn cmd_vocab(engine: &Engine, json: bool) -> error::Result<()> {
    let vocabulary = engine.vocabulary();

    if json {
        println!("{}", serde_json::to_string(vocabulary.as_slice())?);
    } else if vocabulary.is_empty() {
        println!("No symptom phrases loaded.");
    } else {
        for phrase in vocabulary.iter() {
            println!("{phrase}");
        }
        println!("\n{} phrase(s)", vocabulary.len());
    }
    Ok(())
}
