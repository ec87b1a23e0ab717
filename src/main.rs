use clap::{Parser, ValueEnum};
use log::info;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{io::stderr, path::PathBuf};

use pageslider::{
    utils::{self, DEBUG_PRINT_LIMIT},
    BootstrapPresenter, Labels, NextRule, PageState, Pagination, Preferences, Present,
    QueryPageUrl, TextPresenter,
};
use wrap_context::{arg_context, liab, raw_context, wohyna};

mod app;
mod event;
mod handler;
mod pager_line;
mod render;
mod textline_model;
mod textline_view;
mod tui;

use crate::{
    app::{paginate, App},
    event::EventHandler,
    tui::Tui,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Html,
    Json,
}

/// Pagination controls for a collection split across pages
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Total number of items
    #[arg(short, long)]
    total: usize,

    /// Items per page [default: 15, or the value from the config file]
    #[arg(short = 'n', long)]
    per_page: Option<usize>,

    /// Requested page, as it would arrive from a request
    #[arg(short, long, allow_hyphen_values = true)]
    page: Option<String>,

    /// Url that receives the page parameter
    #[arg(short, long, default_value = "/")]
    base_url: String,

    /// Query parameter appended to every url, repeatable
    #[arg(short, long = "query", value_name = "KEY=VALUE", value_parser = query_parser)]
    query: Vec<(String, String)>,

    /// Preferences file (JSON)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// When the "next" control is enabled
    #[arg(long, value_enum)]
    next_rule: Option<NextRule>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Step through the pages in a terminal UI
    #[arg(short, long)]
    interactive: bool,

    /// Debug print limit
    #[arg(short, long, default_value = "1")]
    debug_print_limit: usize,
}

fn query_parser(pair: &str) -> anyhow::Result<(String, String)> {
    let Some((key, value)) = pair.split_once('=') else {
        liab!("Expected KEY=VALUE, got: {:?}", pair);
    };

    if key.is_empty() {
        liab!("Query key is empty in: {:?}", pair);
    }

    anyhow::Ok((key.to_string(), value.to_string()))
}

fn preferences(args: &Cli) -> anyhow::Result<Preferences> {
    let mut preferences = match &args.config {
        Some(path) => arg_context!(Preferences::load(path))?,
        None => Preferences::default(),
    };

    if let Some(per_page) = args.per_page {
        preferences = preferences.per_page_set(per_page);
    }

    if let Some(next_rule) = args.next_rule {
        preferences = preferences.next_rule_set(next_rule);
    }

    if !args.query.is_empty() {
        let mut query = preferences.query().clone();
        query.extend(args.query.iter().cloned());
        preferences = preferences.query_set(query);
    }

    arg_context!(preferences.validate())?;

    anyhow::Ok(preferences)
}

/// Text and html stay empty with a single page, json always describes the state
fn output(
    format: Format,
    state: &PageState,
    preferences: &Preferences,
    pagination: &Pagination,
) -> anyhow::Result<String> {
    let output = match format {
        Format::Json => raw_context!(serde_json::to_string_pretty(&serde_json::json!({
            "state": state,
            "pagination": pagination,
        })))?,
        _ if !state.has_pages() => String::new(),
        Format::Text => TextPresenter::new(Labels::plain()).present(pagination),
        Format::Html => BootstrapPresenter::new(preferences.labels().clone()).present(pagination),
    };

    anyhow::Ok(output)
}

fn exit<B: Backend>(tui: &mut Tui<B>) {
    if let Err(err) = tui.exit() {
        eprintln!(
            "Failed to restore terminal. Run `reset` / `stty sane` or restart your terminal to recover: {}",
            err
        );
    }
}

async fn interactive(
    total_items: usize,
    preferences: Preferences,
    page_url: QueryPageUrl,
    state: PageState,
) -> anyhow::Result<()> {
    let backend = CrosstermBackend::new(stderr());
    let terminal = raw_context!(Terminal::new(backend))?;
    let terminal_size = arg_context!(terminal.size())?;
    let events = EventHandler::new(250);

    let mut tui = Tui::new(terminal, events);
    arg_context!(tui.init()).map_err(|err| {
        exit(&mut tui);
        err
    })?;

    let mut app = raw_context!(App::new(
        terminal_size,
        total_items,
        preferences,
        page_url,
        state
    ))
    .map_err(|err| {
        exit(&mut tui);
        err
    })?;

    raw_context!(app.run(&mut tui).await).map_err(|err| {
        exit(&mut tui);
        err
    })?;

    exit(&mut tui);

    arg_context!(app.print())?;

    anyhow::Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    raw_context!(DEBUG_PRINT_LIMIT
        .set(args.debug_print_limit)
        .map_err(|err| wohyna!("Second initialization with value: {:?}", err)))?;

    let preferences = arg_context!(preferences(&args))?;
    let page_url = QueryPageUrl::new(args.base_url.as_str(), preferences.page_key().as_str());
    let state = PageState::resolve(args.page.as_deref(), args.total, *preferences.per_page());

    info!(
        "Requested page {:?} resolved to {} of {}",
        args.page,
        state.current_page(),
        state.last_page()
    );

    if args.interactive {
        return raw_context!(interactive(args.total, preferences, page_url, state).await);
    }

    let pagination = arg_context!(paginate(&state, &preferences, &page_url))?;
    let output = arg_context!(output(args.format, &state, &preferences, &pagination))?;

    println!("{}", output);

    anyhow::Ok(())
}
