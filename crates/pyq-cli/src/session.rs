//! One dashboard session: a store seeded from settings, a catalogue, and
//! the intents a user issued.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use pyq_core::{Catalogue, ChapterStore, Intent, SortKey, ViewSignal};
use pyq_model::{ChapterStatus, Subject};

use crate::settings::Settings;

/// Filter and sort choices, in the order a user would click them.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub subject: Option<Subject>,
    pub class_toggles: Vec<String>,
    pub unit_toggles: Vec<String>,
    pub status_toggles: Vec<ChapterStatus>,
    pub weak_only: bool,
    pub sort_clicks: Vec<SortKey>,
    pub clear_sort: bool,
}

impl Selection {
    /// The intent stream: subject, then filter toggles, then sort clicks.
    pub fn intents(&self) -> Vec<Intent> {
        let mut intents = Vec::new();
        if let Some(subject) = self.subject {
            intents.push(Intent::SetSubject(subject));
        }
        intents.extend(self.class_toggles.iter().cloned().map(Intent::ToggleClass));
        intents.extend(self.unit_toggles.iter().cloned().map(Intent::ToggleUnit));
        intents.extend(self.status_toggles.iter().copied().map(Intent::ToggleStatus));
        if self.weak_only {
            intents.push(Intent::ToggleWeakOnly);
        }
        intents.extend(self.sort_clicks.iter().copied().map(Intent::SetSort));
        if self.clear_sort {
            intents.push(Intent::ClearSort);
        }
        intents
    }
}

/// The catalogue file, or the embedded sample when no path is given.
pub fn load_catalogue(path: Option<&Path>) -> Result<Catalogue> {
    match path {
        Some(path) => {
            Catalogue::read(path).with_context(|| format!("load catalogue {}", path.display()))
        }
        None => Catalogue::sample().context("load embedded sample catalogue"),
    }
}

/// A JSON array of intents.
pub fn read_intents(path: &Path) -> Result<Vec<Intent>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read intents {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse intents {}", path.display()))
}

/// A store seeded from `settings` with `catalogue` installed.
pub fn open_store(settings: &Settings, catalogue: Catalogue) -> ChapterStore {
    let mut store = ChapterStore::with_settings(settings.store_settings());
    store.install_catalogue(catalogue);
    store
}

/// Dispatch every intent in order, returning the signal each produced.
pub fn replay<I>(store: &mut ChapterStore, intents: I) -> Vec<ViewSignal>
where
    I: IntoIterator<Item = Intent>,
{
    let span = info_span!("replay");
    let _guard = span.enter();
    intents
        .into_iter()
        .map(|intent| {
            debug!(?intent, "dispatch");
            store.dispatch(intent)
        })
        .collect()
}
