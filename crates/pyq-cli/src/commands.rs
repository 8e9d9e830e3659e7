use std::path::Path;

use anyhow::{Result, anyhow};
use tracing::{info, info_span};

use pyq_cli::render::{Palette, Theme, chapters_json, chapters_text, filters_table, subjects_table};
use pyq_cli::session::{load_catalogue, open_store, read_intents, replay};
use pyq_cli::settings::{Settings, resolve_path, save_settings};
use pyq_core::{ChapterStore, ViewSignal};

use crate::cli::{CatalogueArgs, ChaptersArgs, ConfigArgs, FiltersArgs, OutputArgs, ReplayArgs};

pub fn run_chapters(args: &ChaptersArgs, settings: &Settings, styled: bool) -> Result<String> {
    let span = info_span!("chapters");
    let _guard = span.enter();
    let mut store = open_store(settings, load_catalogue(args.source.catalogue.as_deref())?);
    replay(&mut store, args.selection().intents());
    render_chapters(&store, &args.output, settings, styled)
}

pub fn run_replay(args: &ReplayArgs, settings: &Settings, styled: bool) -> Result<String> {
    let span = info_span!("replay", intents = %args.intents.display());
    let _guard = span.enter();
    let intents = read_intents(&args.intents)?;
    let mut store = open_store(settings, load_catalogue(args.source.catalogue.as_deref())?);
    let signals = replay(&mut store, intents);
    let changed = signals
        .iter()
        .filter(|signal| **signal != ViewSignal::Unchanged)
        .count();
    info!(
        dispatched = signals.len(),
        changed,
        version = store.version(),
        "replayed intents"
    );
    render_chapters(&store, &args.output, settings, styled)
}

pub fn run_subjects(args: &CatalogueArgs, settings: &Settings, styled: bool) -> Result<String> {
    let store = open_store(settings, load_catalogue(args.catalogue.as_deref())?);
    let theme = theme(settings.general.dark_mode, styled);
    Ok(subjects_table(&store.subject_counts(), store.subject(), theme).to_string())
}

pub fn run_filters(args: &FiltersArgs, settings: &Settings, styled: bool) -> Result<String> {
    let mut store = open_store(settings, load_catalogue(args.source.catalogue.as_deref())?);
    if let Some(subject) = args.subject {
        store.set_subject(subject);
    }
    let theme = theme(settings.general.dark_mode, styled);
    Ok(format!("{}\n{}", store.subject(), filters_table(&store, theme)))
}

pub fn run_config(
    args: &ConfigArgs,
    settings: &Settings,
    explicit: Option<&Path>,
) -> Result<String> {
    if args.write_defaults {
        let path = save_settings(&Settings::default(), explicit)?;
        return Ok(format!("Wrote default settings to {}", path.display()));
    }
    let path =
        resolve_path(explicit).ok_or_else(|| anyhow!("could not determine settings path"))?;
    Ok(format!("# {}\n{}", path.display(), settings.to_toml()?))
}

fn render_chapters(
    store: &ChapterStore,
    output: &OutputArgs,
    settings: &Settings,
    styled: bool,
) -> Result<String> {
    if output.json {
        return chapters_json(store);
    }
    let theme = theme(output.dark_mode(settings.general.dark_mode), styled);
    Ok(chapters_text(store, theme))
}

fn theme(dark_mode: bool, styled: bool) -> Theme {
    Theme {
        palette: Palette::for_mode(dark_mode),
        styled,
    }
}
