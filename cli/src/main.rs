//! CLI entrypoint for blog-composer
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use composer_application::{
    CompositeDraftSink, DraftEditor, DraftSink, KeyValueStore, UploadImageUseCase,
};
use composer_infrastructure::{
    ConfigLoader, FileConfig, ImgbbImageHost, InMemoryKeyValueStore, JsonFileKeyValueStore,
    JsonlDraftSink, TracingDraftSink,
};
use composer_presentation::{
    Cli, Command, FormRepl, FormSession, PreviewFormatter, UploadSpinner, load_image,
};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        for line in ConfigLoader::describe_sources(cli.config.as_deref()) {
            println!("{}", line);
        }
        return Ok(());
    }

    // Load configuration before logging: the log file location is configurable
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let _log_guard = init_logging(cli.verbose, config.logging.file.as_deref());

    info!("Starting blog-composer");

    report_config_issues(&config)?;

    // === Dependency Injection ===
    let store = open_store(&cli, &config);
    let sink = build_sink(&config);
    let uploader = build_uploader(&config)?;

    let editor = DraftEditor::open(store, sink);
    let mut session = FormSession::new(editor, config.editor.to_editor_options())
        .with_uploader(uploader);

    match cli.command.unwrap_or(Command::Edit) {
        Command::Edit => {
            let mut repl = FormRepl::new(session)
                .with_preview(config.repl.show_preview)
                .with_history_file(config.repl.history_file.as_deref().map(expand_home));
            repl.run().await?;
        }
        Command::Content { markup } => {
            session.replace_content(&markup);
            println!("Content updated ({} bytes).", session.draft().content.len());
        }
        Command::Append { text } => {
            session.type_line(&text);
            println!("Content updated ({} bytes).", session.draft().content.len());
        }
        Command::Image { path } => {
            let file = load_image(&path).await?;
            let spinner = UploadSpinner::start(&file.name);
            match session.insert_image(file).await {
                Ok(outcome) => spinner.finish(&outcome),
                Err(e) => {
                    spinner.abandon();
                    return Err(e.into());
                }
            }
        }
        Command::Save {
            title,
            category,
            json,
        } => {
            if let Some(title) = title {
                session.set_title(&title);
            }
            if let Some(category) = category {
                session.select_category(&category)?;
            }
            let saved = session.save();
            if json {
                println!("{}", PreviewFormatter::format_json(&saved));
            } else {
                println!("{}", PreviewFormatter::format_saved(&saved));
            }
        }
        Command::Show { raw } => {
            if raw {
                println!("{}", PreviewFormatter::format_raw(session.draft()));
            } else {
                println!(
                    "{}",
                    PreviewFormatter::format(session.draft(), session.options())
                );
            }
        }
        Command::Options => {
            println!("{}", PreviewFormatter::format_options(session.options()));
        }
    }

    Ok(())
}

/// Initialize logging based on verbosity level.
///
/// `RUST_LOG` overrides the level chosen by `-v`. Saved drafts are always
/// reported (target `composer::save` stays at `info`). When a log file is
/// configured, the returned guard must be held until exit.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},composer::save=info", level)));

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let name = path
                .file_name()
                .unwrap_or(OsStr::new("blog-composer.log"));
            let _ = std::fs::create_dir_all(dir);
            let (writer, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
            (
                Some(fmt::layer().with_ansi(false).with_writer(writer)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

/// Abort on configuration errors and surface every warning.
fn report_config_issues(config: &FileConfig) -> Result<()> {
    for issue in config.validate().into_iter().chain(config.credential_issue()) {
        if issue.is_error() {
            bail!("Invalid configuration: {}", issue.message);
        }
        warn!("{}", issue);
    }
    Ok(())
}

/// Open the draft store, falling back to memory when it is unavailable.
fn open_store(cli: &Cli, config: &FileConfig) -> Arc<dyn KeyValueStore> {
    if cli.ephemeral {
        debug!("Using in-memory draft store");
        return Arc::new(InMemoryKeyValueStore::new());
    }

    let Some(path) = cli.store.clone().or_else(|| config.storage.resolve_path()) else {
        warn!("No data directory available; draft kept in memory only");
        return Arc::new(InMemoryKeyValueStore::new());
    };

    match JsonFileKeyValueStore::open(&path) {
        Ok(store) => {
            debug!("Using draft store {}", path.display());
            Arc::new(store)
        }
        Err(e) => {
            warn!(
                "Draft store {} unavailable ({}); draft kept in memory only",
                path.display(),
                e
            );
            Arc::new(InMemoryKeyValueStore::new())
        }
    }
}

/// Build the sink that receives saved drafts.
fn build_sink(config: &FileConfig) -> Arc<dyn DraftSink> {
    let mut sink = CompositeDraftSink::default();

    if config.save.log {
        sink.push(Arc::new(TracingDraftSink));
    }
    if let Some(path) = &config.save.jsonl_path
        && let Some(jsonl) = JsonlDraftSink::new(path)
    {
        debug!("Archiving saved drafts to {}", jsonl.path().display());
        sink.push(Arc::new(jsonl));
    }

    Arc::new(sink)
}

fn build_uploader(config: &FileConfig) -> Result<UploadImageUseCase> {
    let host = ImgbbImageHost::new(
        config.upload.endpoint.clone(),
        config.upload.resolve_api_key(),
        Duration::from_secs(config.upload.timeout_secs),
    )?;
    Ok(UploadImageUseCase::new(Arc::new(host)))
}

/// Expand a leading `~/` to the home directory.
fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
