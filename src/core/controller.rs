//! View state controller
//!
//! Owns the combined page state (candidates, input, displayed creature and its
//! matchups) and applies user commands to it. Every search is tagged with a
//! sequence number. A fetched entity is applied only if its tag is still the
//! latest one issued, and its relations only while that entity is the one on
//! display, so slow responses for an older search never overwrite a newer one.
//!
//! The state sits behind a mutex that is never held across an `.await`.

use crate::config::Config;
use crate::core::aggregator::aggregate;
use crate::core::fetcher::fetch_entity;
use crate::core::filter::filter;
use crate::core::suggestions::SuggestionPanel;
use crate::core::utils::capitalize_first_letter;
use crate::data::candidates::{CandidateEntry, CandidateIndex};
use crate::data::entity::EntityRecord;
use crate::data::relations::DamageRelations;
use crate::tools::pokeapi::CreatureService;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub text: String,
    pub panel: SuggestionPanel,
}

impl InputState {
    pub fn suggestions_visible(&self) -> bool {
        self.panel.is_visible()
    }
}

/// Read-only snapshot handed to the render layer.
#[derive(Clone, Debug, Default)]
pub struct ViewState {
    pub candidates: Arc<CandidateIndex>,
    pub input: InputState,
    pub entity: Option<EntityRecord>,
    pub relations: DamageRelations,
}

impl ViewState {
    /// Recomputed from the live input on every call.
    pub fn suggestions(&self) -> Vec<&CandidateEntry> {
        filter(&self.candidates, &self.input.text)
    }

    pub fn suggestions_shown(&self) -> bool {
        let count = self.suggestions().len();
        self.input.panel.should_render(&self.input.text, count)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Entity applied. `relations_applied` is false if aggregation failed or went stale.
    Applied { relations_applied: bool },
    /// A newer search was issued before this one resolved.
    Stale,
    Failed,
    /// Nothing to search for.
    Ignored,
}

#[derive(Default)]
struct Shared {
    view: ViewState,
    latest_search: u64,
    /// Tag of the search whose entity is on display, 0 when none is.
    displayed_search: u64,
    candidates_loaded: bool,
    candidates_loading: bool,
    hide_task: Option<JoinHandle<()>>,
}

impl Shared {
    fn cancel_hide_task(&mut self) {
        if let Some(handle) = self.hide_task.take() {
            handle.abort();
        }
    }
}

fn lock_shared(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub struct ViewStateController<S: CreatureService + ?Sized> {
    service: Arc<S>,
    shared: Arc<Mutex<Shared>>,
    blur_hide_delay: Duration,
    candidate_limit: usize,
}

impl<S: CreatureService + ?Sized> ViewStateController<S> {
    pub fn new(service: Arc<S>, config: &Config) -> Self {
        Self {
            service,
            shared: Arc::new(Mutex::new(Shared::default())),
            blur_hide_delay: config.blur_hide_delay(),
            candidate_limit: config.candidate_limit,
        }
    }

    /// Starts with an already loaded index; `initialize` becomes a no-op.
    pub fn with_candidates(service: Arc<S>, config: &Config, candidates: CandidateIndex) -> Self {
        let controller = Self::new(service, config);
        {
            let mut shared = controller.lock();
            shared.view.candidates = Arc::new(candidates);
            shared.candidates_loaded = true;
        }
        controller
    }

    fn lock(&self) -> MutexGuard<'_, Shared> {
        lock_shared(&self.shared)
    }

    pub fn snapshot(&self) -> ViewState {
        self.lock().view.clone()
    }

    pub fn blur_hide_delay(&self) -> Duration {
        self.blur_hide_delay
    }

    /// Loads the candidate index once. On failure the index stays empty and
    /// only direct searches work.
    pub async fn initialize(&self) {
        {
            let mut shared = self.lock();
            if shared.candidates_loaded || shared.candidates_loading {
                tracing::warn!("candidate index already loaded or loading, skipping");
                return;
            }
            shared.candidates_loading = true;
        }
        let loaded = CandidateIndex::load(self.service.as_ref(), self.candidate_limit).await;
        let mut shared = self.lock();
        shared.candidates_loading = false;
        shared.candidates_loaded = true;
        match loaded {
            Ok(index) => shared.view.candidates = Arc::new(index),
            Err(err) => tracing::error!(error = %err, "error fetching candidate list"),
        }
    }

    pub fn on_input_change(&self, text: &str) {
        let mut shared = self.lock();
        shared.cancel_hide_task();
        shared.view.input.text = text.to_string();
        shared.view.input.panel.on_text_change();
    }

    pub fn on_focus(&self) {
        let mut shared = self.lock();
        shared.cancel_hide_task();
        shared.view.input.panel.on_focus();
    }

    /// Schedules the delayed hide. Outside a tokio runtime the panel hides at once.
    pub fn on_blur(&self) {
        let mut shared = self.lock();
        let tag = shared.view.input.panel.on_blur();
        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(_) => {
                tracing::warn!("no runtime for the blur timer, hiding suggestions now");
                shared.cancel_hide_task();
                shared.view.input.panel.fire_hide(tag);
                return;
            }
        };
        let weak = Arc::downgrade(&self.shared);
        let delay = self.blur_hide_delay;
        let handle = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(state) = weak.upgrade() {
                let mut shared = lock_shared(&state);
                if shared.view.input.panel.fire_hide(tag) {
                    tracing::debug!(tag, "suggestions hidden after blur");
                    shared.hide_task = None;
                }
            }
        });
        if let Some(previous) = shared.hide_task.replace(handle) {
            previous.abort();
        }
    }

    pub async fn on_suggestion_select(&self, name: &str) -> SearchOutcome {
        let capitalized = capitalize_first_letter(name);
        {
            let mut shared = self.lock();
            shared.cancel_hide_task();
            shared.view.input.text = capitalized.clone();
            shared.view.input.panel.on_select();
        }
        self.on_search(Some(&capitalized)).await
    }

    /// Searches `name`, or the current input text when `None`.
    pub async fn on_search(&self, name: Option<&str>) -> SearchOutcome {
        let (tag, requested) = {
            let mut shared = self.lock();
            let requested = match name {
                Some(n) => n.trim().to_string(),
                None => shared.view.input.text.trim().to_string(),
            };
            if requested.is_empty() {
                tracing::debug!("empty search ignored");
                return SearchOutcome::Ignored;
            }
            shared.latest_search += 1;
            (shared.latest_search, requested)
        };

        let entity = match fetch_entity(self.service.as_ref(), &requested).await {
            Ok(entity) => entity,
            Err(err) => {
                tracing::error!(name = %requested, error = %err, "error fetching creature");
                return SearchOutcome::Failed;
            }
        };

        let types = entity.types.clone();
        {
            let mut shared = self.lock();
            if shared.latest_search != tag {
                tracing::debug!(name = %requested, tag, "discarding stale creature");
                return SearchOutcome::Stale;
            }
            shared.displayed_search = tag;
            shared.view.entity = Some(entity);
            shared.view.relations = DamageRelations::new();
        }

        let relations = match aggregate(self.service.as_ref(), &types).await {
            Ok(relations) => relations,
            Err(err) => {
                tracing::error!(name = %requested, error = %err, "error fetching damage relations");
                return SearchOutcome::Applied {
                    relations_applied: false,
                };
            }
        };

        // Relations belong to whichever entity is displayed; a failed newer search
        // does not replace it.
        let mut shared = self.lock();
        if shared.displayed_search != tag {
            tracing::debug!(name = %requested, tag, "discarding stale damage relations");
            return SearchOutcome::Applied {
                relations_applied: false,
            };
        }
        shared.view.relations = relations;
        SearchOutcome::Applied {
            relations_applied: true,
        }
    }

    /// Clears input and displayed creature, keeping the candidate index.
    /// Searches still in flight are discarded when they resolve.
    pub fn reset(&self) {
        let mut shared = self.lock();
        shared.cancel_hide_task();
        shared.latest_search += 1;
        shared.displayed_search = 0;
        shared.view.input = InputState::default();
        shared.view.entity = None;
        shared.view.relations = DamageRelations::new();
    }
}

impl<S: CreatureService + ?Sized> Drop for ViewStateController<S> {
    fn drop(&mut self) {
        lock_shared(&self.shared).cancel_hide_task();
    }
}
