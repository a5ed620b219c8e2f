use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    Hidden,
    Visible,
}

/// Visibility of the suggestions dropdown.
///
/// Blur does not hide immediately: it arms a pending hide tagged with a
/// generation number, and whoever owns the timer calls [`fire_hide`] with that
/// tag once the grace delay is over. Focus, text changes and selections
/// disarm it, so a stale timer firing later is a no-op.
///
/// [`fire_hide`]: SuggestionPanel::fire_hide
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionPanel {
    visibility: Visibility,
    pending_hide: Option<u64>,
    generation: u64,
}

impl Default for SuggestionPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl SuggestionPanel {
    pub fn new() -> Self {
        Self {
            visibility: Visibility::Visible,
            pending_hide: None,
            generation: 0,
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    pub fn pending_hide(&self) -> Option<u64> {
        self.pending_hide
    }

    pub fn on_focus(&mut self) {
        self.pending_hide = None;
        self.visibility = Visibility::Visible;
    }

    pub fn on_text_change(&mut self) {
        self.pending_hide = None;
        self.visibility = Visibility::Visible;
    }

    /// Arms a delayed hide and returns its tag.
    pub fn on_blur(&mut self) -> u64 {
        self.generation += 1;
        self.pending_hide = Some(self.generation);
        self.generation
    }

    pub fn on_select(&mut self) {
        self.pending_hide = None;
        self.visibility = Visibility::Hidden;
    }

    /// Returns true if `tag` was still the armed hide and the panel got hidden.
    pub fn fire_hide(&mut self, tag: u64) -> bool {
        if self.pending_hide != Some(tag) {
            return false;
        }
        self.pending_hide = None;
        self.visibility = Visibility::Hidden;
        true
    }

    pub fn should_render(&self, query: &str, match_count: usize) -> bool {
        self.is_visible() && !query.is_empty() && match_count > 0
    }
}
