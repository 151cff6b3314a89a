//! # CLI Layer
//!
//! This module is **one possible UI client** for sumb. It is the only place that
//! reads stdin, launches an editor, prints to the terminal and decides colours.
//!
//! Every handler that touches notes opens the API for exactly one operation and
//! drops it before returning, so the record store's file lock is never held
//! across an editor session or between commands. `config` and `paths` never
//! open the stores.

use super::editor;
use super::render::{self, Palette, TreeLayout};
use super::setup::{Cli, Commands};
use clap::Parser;
use std::io::{IsTerminal, Read};
use sumbapp::api::{CmdResult, ConfigAction, SumbApi, SumbPaths};
use sumbapp::config::SumbConfig;
use sumbapp::error::{Result, SumbError};
use sumbapp::search::fs::FileIndex;
use sumbapp::store::fs::FileStore;
use tracing_subscriber::EnvFilter;

/// Longest note body the CLI accepts, in characters.
pub const MAX_BODY_CHARS: usize = 4096;

/// Settings resolved once per process and shared by the handlers.
struct AppContext {
    paths: SumbPaths,
    config: SumbConfig,
    palette: Palette,
}

impl AppContext {
    fn new(cli: &Cli) -> Result<Self> {
        let paths = SumbPaths::resolve()?;
        let config = SumbConfig::load(paths.config_dir())?;
        let palette = Palette::new(colors_enabled(cli.no_color));
        Ok(Self {
            paths,
            config,
            palette,
        })
    }

    fn api(&self) -> Result<SumbApi<FileStore, FileIndex>> {
        SumbApi::open(&self.paths, &self.config)
    }

    fn layout(&self) -> TreeLayout {
        TreeLayout::from(&self.config)
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = AppContext::new(&cli)?;
    tracing::debug!(root = %ctx.paths.root.display(), "data directory");

    match cli.command {
        Commands::Create { words, body } => handle_create(&ctx, words, body),
        Commands::Edit { id, body } => handle_edit(&ctx, &id, body),
        Commands::List { count } => handle_list(&ctx, count),
        Commands::Search { terms } => handle_search(&ctx, &terms),
        Commands::Show { id } => handle_show(&ctx, &id),
        Commands::Delete { id } => handle_delete(&ctx, &id),
        Commands::Reindex => handle_reindex(&ctx),
        Commands::Doctor { fix } => handle_doctor(&ctx, fix),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
        Commands::Paths => handle_paths(&ctx),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn colors_enabled(no_color: bool) -> bool {
    !no_color && std::env::var_os("NO_COLOR").is_none() && console::Term::stdout().is_term()
}

fn print_messages(result: &CmdResult, palette: &Palette) {
    if !result.messages.is_empty() {
        println!("{}", render::render_messages(&result.messages, palette));
    }
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(editor::normalize_buffer(&buffer))
}

fn check_length(text: &str) -> Result<()> {
    let chars = text.chars().count();
    if chars > MAX_BODY_CHARS {
        return Err(SumbError::Api(format!(
            "Note is too long ({} characters, limit {})",
            chars, MAX_BODY_CHARS
        )));
    }
    Ok(())
}

fn handle_create(ctx: &AppContext, words: Vec<String>, body: Option<String>) -> Result<()> {
    let text = match body {
        Some(body) => body,
        None if words.len() == 1 && words[0] == "-" => read_stdin()?,
        None if !words.is_empty() => words.join(" "),
        None if !std::io::stdin().is_terminal() => read_stdin()?,
        None => editor::edit_body("")?,
    };

    if text.trim().is_empty() {
        println!("Note creation canceled.");
        return Ok(());
    }
    check_length(&text)?;

    let result = ctx.api()?.create(text)?;
    print_messages(&result, &ctx.palette);
    Ok(())
}

fn handle_edit(ctx: &AppContext, id: &str, body: Option<String>) -> Result<()> {
    let current = ctx
        .api()?
        .get_by_id(id)?
        .listed_notes
        .pop()
        .ok_or_else(|| SumbError::NotFound(id.to_string()))?;

    let edited = match body {
        Some(body) => body,
        None => editor::edit_body(&current.body)?,
    };

    if edited == current.body {
        println!("No changes.");
        return Ok(());
    }
    if edited.trim().is_empty() {
        println!("Note editing canceled.");
        return Ok(());
    }
    check_length(&edited)?;

    let result = ctx.api()?.update(&current.id, edited)?;
    print_messages(&result, &ctx.palette);
    Ok(())
}

fn handle_list(ctx: &AppContext, count: Option<i64>) -> Result<()> {
    let n = count.unwrap_or(ctx.config.list_limit);
    let result = ctx.api()?.list_latest(n)?;

    if result.listed_notes.is_empty() {
        println!("No notes found.");
        return Ok(());
    }

    let title = format!("Latest {} notes", n);
    println!(
        "{}",
        render::render_note_tree(&title, &result.listed_notes, ctx.layout(), &ctx.palette)
    );
    Ok(())
}

fn handle_search(ctx: &AppContext, terms: &[String]) -> Result<()> {
    let query = terms.join(" ");
    if query.trim().is_empty() {
        return Err(SumbError::Api("Search keyword cannot be empty".to_string()));
    }

    let result = ctx.api()?.search(&query)?;

    if result.listed_notes.is_empty() {
        println!("No notes found.");
        return Ok(());
    }

    let title = format!("Search results for '{}'", query);
    println!(
        "{}",
        render::render_note_tree(&title, &result.listed_notes, ctx.layout(), &ctx.palette)
    );
    Ok(())
}

fn handle_show(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api()?.get_by_id(id)?;
    for note in &result.listed_notes {
        println!("{}", render::render_note(note, &ctx.palette));
    }
    Ok(())
}

fn handle_delete(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api()?.delete(id)?;
    print_messages(&result, &ctx.palette);
    Ok(())
}

fn handle_reindex(ctx: &AppContext) -> Result<()> {
    let result = ctx.api()?.reindex()?;
    print_messages(&result, &ctx.palette);
    Ok(())
}

fn handle_doctor(ctx: &AppContext, fix: bool) -> Result<()> {
    let result = ctx.api()?.doctor(fix)?;
    print_messages(&result, &ctx.palette);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = sumbapp::commands::config::run(&ctx.paths, action)?;

    if show_all && let Some(config) = &result.config {
        for key in SumbConfig::KEYS {
            println!("{} = {}", key, config.get(key)?);
        }
    }
    print_messages(&result, &ctx.palette);
    Ok(())
}

fn handle_paths(ctx: &AppContext) -> Result<()> {
    let result = sumbapp::commands::paths::run(&ctx.paths);
    for (label, path) in &result.paths {
        println!("{:<8}{}", format!("{}:", label), path.display());
    }
    Ok(())
}
