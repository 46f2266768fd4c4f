//! # CLI Layer
//!
//! This module is **one possible UI client** for rolodex. It is the only place
//! that parses arguments, writes to the terminal and decides exit codes.
//!
//! Each invocation is one short session:
//!
//! 1. Resolve the config directory and load [`RolodexConfig`].
//! 2. Start the API: samples, then `--file` or the remembered file on top.
//! 3. Run the command.
//! 4. If the command changed the address book, save it back to its file.
//!
//! The library never saves on its own; step 4 is this client's policy.

use super::print::{print_full_records, print_messages, print_records};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use rolodex::api::{CmdMessage, CmdResult, ConfigAction, FieldValues, RolodexApi};
use rolodex::config::RolodexConfig;
use rolodex::error::{RolodexError, Result};
use rolodex::prefs::FilePreferences;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

/// Overrides the config/preferences directory.
const HOME_ENV: &str = "ROLODEX_HOME";

struct AppContext {
    api: RolodexApi<FilePreferences>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_dir = config_dir()?;

    // Config edits must work even when the current address book cannot load.
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(&config_dir, key.clone(), value.clone());
    }

    let mut ctx = init_context(&cli, &config_dir)?;

    match cli.command {
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Show { index }) => handle_show(&ctx, index),
        Some(Commands::Add {
            first_name,
            last_name,
            address,
        }) => handle_add(
            &mut ctx,
            address.into_values(Some(first_name), Some(last_name)),
        ),
        Some(Commands::Edit {
            index,
            first_name,
            last_name,
            address,
        }) => handle_edit(&mut ctx, index, address.into_values(first_name, last_name)),
        Some(Commands::Delete { index }) => handle_delete(&mut ctx, index),
        Some(Commands::Open { path }) => handle_open(&mut ctx, path),
        Some(Commands::Save { path }) => handle_save(&mut ctx, path),
        Some(Commands::Path { forget }) => handle_path(&mut ctx, forget),
        Some(Commands::Config { .. }) => Ok(()),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("rolodex=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    if let Err(e) = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        eprintln!("tracing init failed: {}", e);
    }
}

fn config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "rolodex", "rolodex")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| RolodexError::Api("Could not determine config dir".to_string()))
}

fn init_context(cli: &Cli, config_dir: &Path) -> Result<AppContext> {
    let (config, config_problem) = RolodexConfig::load_or_default(config_dir);
    let (prefs, prefs_problem) = FilePreferences::open_or_empty(config_dir);
    debug!(dir = %config_dir.display(), "using config dir");

    let mut warnings = Vec::new();
    if let Some(e) = config_problem {
        warnings.push(CmdMessage::warning(format!("{}; using defaults", e)));
    }
    if let Some(e) = prefs_problem {
        warnings.push(CmdMessage::warning(format!(
            "{}; no file remembered until the next save",
            e
        )));
    }
    print_messages(&warnings);

    let mut api = RolodexApi::new(prefs);
    let started = api.start(&config, cli.file.as_deref())?;
    print_messages(&started.messages);

    Ok(AppContext { api })
}

/// Write a mutated address book back to its file and report both results.
fn persist(ctx: &mut AppContext, result: CmdResult) -> Result<()> {
    let saved = ctx.api.save()?;
    print_messages(&result.messages);
    print_messages(&saved.messages);
    Ok(())
}

fn require_file(ctx: &AppContext) -> Result<()> {
    if ctx.api.current_path().is_none() {
        return Err(RolodexError::Api(
            "No address book file selected (use --file or `rolodex save <path>`)".to_string(),
        ));
    }
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list()?;
    print_records(&result.listed_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext, index: usize) -> Result<()> {
    let result = ctx.api.show(index)?;
    print_full_records(&result.listed_records);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, values: FieldValues) -> Result<()> {
    require_file(ctx)?;
    let result = ctx.api.create(&values)?;
    persist(ctx, result)
}

fn handle_edit(ctx: &mut AppContext, index: usize, values: FieldValues) -> Result<()> {
    require_file(ctx)?;
    let result = ctx.api.edit(index, &values)?;
    if result.affected_records.is_empty() {
        print_messages(&result.messages);
        return Ok(());
    }
    persist(ctx, result)
}

fn handle_delete(ctx: &mut AppContext, index: usize) -> Result<()> {
    require_file(ctx)?;
    let result = ctx.api.delete(index)?;
    persist(ctx, result)
}

fn handle_open(ctx: &mut AppContext, path: PathBuf) -> Result<()> {
    let result = ctx.api.open(&path)?;
    print_records(&result.listed_records);
    print_messages(&result.messages);
    Ok(())
}

fn handle_save(ctx: &mut AppContext, path: PathBuf) -> Result<()> {
    let result = ctx.api.save_as(&path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(ctx: &mut AppContext, forget: bool) -> Result<()> {
    let result = ctx.api.last_path(forget)?;
    if let Some(path) = &result.path {
        println!("{}", path.display());
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(config_dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (Some(key), Some(value)) => ConfigAction::Set { key, value },
        (Some(key), None) => {
            return Err(RolodexError::Api(format!("Missing value for {}", key)));
        }
        (None, _) => ConfigAction::ShowAll,
    };

    let result = rolodex::commands::config::run(config_dir, action)?;
    if let Some(config) = &result.config {
        for (key, value) in config.entries() {
            println!("{} = {}", key, value);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
