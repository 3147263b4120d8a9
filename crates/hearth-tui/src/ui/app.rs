use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use hearth_core::constants::ALL_TAGS;
use hearth_core::query::{available_tags, filter_by_tag, sort_hunts, SortColumn, SortState};
use hearth_core::Hunt;
use ratatui::widgets::TableState;

use crate::ui::notifications::{Notification, NotificationQueue};

/// Second Ctrl+C inside this window quits
const CTRL_C_WINDOW: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    None,
    Detail { hunt: Box<Hunt>, scroll: u16 },
    TagPicker { tags: Vec<String>, index: usize },
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadKind {
    All,
    Search(String),
}

/// A fetch the runtime should start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub generation: u64,
    pub kind: LoadKind,
}

/// Outcome of a spawned fetch, tagged with the request that started it
#[derive(Debug)]
pub struct LoadResult {
    pub generation: u64,
    pub outcome: Result<Vec<Hunt>, String>,
}

pub struct App {
    pub running: bool,
    pub load_state: LoadState,
    pub input_mode: InputMode,
    pub modal: Modal,
    pub query: String,
    /// Most recently chosen tag
    pub selected_tag: Option<String>,
    /// Every tag chosen since the last `all`, applied in order
    tag_filters: Vec<String>,
    pub sort: SortState,
    /// Last fetched list, before the tag filter
    pub loaded: Vec<Hunt>,
    /// What the table shows
    pub hunts: Vec<Hunt>,
    pub table_state: TableState,
    pub notifications: NotificationQueue,
    pub loaded_at: Option<DateTime<Local>>,
    generation: u64,
    pending_load: Option<LoadRequest>,
    last_ctrl_c: Option<Instant>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Starts in `Loading` with the initial fetch queued
    pub fn new() -> Self {
        let mut app = Self {
            running: true,
            load_state: LoadState::Loading,
            input_mode: InputMode::Normal,
            modal: Modal::None,
            query: String::new(),
            selected_tag: None,
            tag_filters: Vec::new(),
            sort: SortState::default(),
            loaded: Vec::new(),
            hunts: Vec::new(),
            table_state: TableState::default(),
            notifications: NotificationQueue::new(),
            loaded_at: None,
            generation: 0,
            pending_load: None,
            last_ctrl_c: None,
        };
        app.request_load();
        app
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// True when this press should quit
    pub fn on_ctrl_c(&mut self) -> bool {
        let now = Instant::now();
        if self
            .last_ctrl_c
            .is_some_and(|prev| now.duration_since(prev) < CTRL_C_WINDOW)
        {
            self.quit();
            return true;
        }
        self.last_ctrl_c = Some(now);
        self.notifications
            .push(Notification::info("Press Ctrl+C again to quit"));
        false
    }

    // ----- loading -----------------------------------------------------------

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    /// Queue a fetch for the current query; supersedes anything in flight
    pub fn request_load(&mut self) {
        let query = self.query.trim();
        let kind = if query.is_empty() {
            LoadKind::All
        } else {
            LoadKind::Search(query.to_string())
        };
        self.queue_load(kind);
    }

    fn queue_load(&mut self, kind: LoadKind) {
        self.generation += 1;
        tracing::debug!(generation = self.generation, ?kind, "Load requested");
        self.pending_load = Some(LoadRequest {
            generation: self.generation,
            kind,
        });
        self.load_state = LoadState::Loading;
    }

    pub fn take_pending_load(&mut self) -> Option<LoadRequest> {
        self.pending_load.take()
    }

    /// Returns false when the result belongs to a superseded request
    pub fn apply_load(&mut self, result: LoadResult) -> bool {
        if result.generation != self.generation {
            tracing::debug!(
                stale = result.generation,
                current = self.generation,
                "Dropping stale load result"
            );
            return false;
        }

        match result.outcome {
            Ok(hunts) => {
                tracing::info!(count = hunts.len(), "Hunts loaded");
                self.loaded = hunts;
                self.loaded_at = Some(Local::now());
                self.load_state = LoadState::Ready;
                self.refresh_view();
            }
            Err(message) => {
                tracing::error!(error = %message, "Failed to load hunts");
                self.notifications
                    .push(Notification::error(format!("Failed to load hunts: {message}")));
                self.load_state = LoadState::Error(message);
            }
        }
        true
    }

    /// Rebuild the table from `loaded` with the tag filters and sort applied
    fn refresh_view(&mut self) {
        let mut hunts = self.loaded.clone();
        for tag in &self.tag_filters {
            hunts = filter_by_tag(&hunts, tag);
        }
        sort_hunts(&mut hunts, self.sort);
        self.hunts = hunts;
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let selected = match (self.table_state.selected(), self.hunts.len()) {
            (_, 0) => None,
            (Some(i), len) => Some(i.min(len - 1)),
            (None, _) => Some(0),
        };
        self.table_state.select(selected);
    }

    // ----- search ------------------------------------------------------------

    pub fn start_search(&mut self) {
        self.input_mode = InputMode::Search;
    }

    pub fn stop_search(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
        self.request_load();
    }

    pub fn push_query_str(&mut self, text: &str) {
        let text: String = text.chars().filter(|c| !c.is_control()).collect();
        if text.is_empty() {
            return;
        }
        self.query.push_str(&text);
        self.request_load();
    }

    pub fn pop_query_char(&mut self) {
        if self.query.pop().is_some() {
            self.request_load();
        }
    }

    pub fn clear_query(&mut self) {
        if !self.query.is_empty() {
            self.query.clear();
            self.request_load();
        }
    }

    // ----- tags --------------------------------------------------------------

    pub fn available_tags(&self) -> Vec<String> {
        available_tags(&self.loaded)
    }

    pub fn tag_count(&self, tag: &str) -> usize {
        self.loaded.iter().filter(|h| h.has_tag(tag)).count()
    }

    pub fn open_tag_picker(&mut self) {
        let mut tags = vec![ALL_TAGS.to_string()];
        tags.extend(self.available_tags());
        let index = self
            .selected_tag
            .as_ref()
            .and_then(|current| tags.iter().position(|t| t == current))
            .unwrap_or(0);
        self.modal = Modal::TagPicker { tags, index };
    }

    /// A concrete tag narrows the shown list; `all` clears every tag and
    /// fetches the full collection whatever the query holds
    pub fn choose_tag(&mut self, tag: &str) {
        self.modal = Modal::None;
        if tag == ALL_TAGS {
            self.selected_tag = None;
            self.tag_filters.clear();
            self.queue_load(LoadKind::All);
        } else {
            self.selected_tag = Some(tag.to_string());
            self.tag_filters.push(tag.to_string());
            self.hunts = filter_by_tag(&self.hunts, tag);
            self.table_state.select(None);
            self.clamp_selection();
        }
    }

    /// Clears search and tag and refetches; sort order is kept
    pub fn reset(&mut self) {
        self.query.clear();
        self.selected_tag = None;
        self.tag_filters.clear();
        self.input_mode = InputMode::Normal;
        self.modal = Modal::None;
        self.request_load();
    }

    // ----- sorting -----------------------------------------------------------

    pub fn toggle_sort(&mut self, column: SortColumn) {
        self.sort.toggle(column);
        self.refresh_view();
    }

    pub fn cycle_sort(&mut self) {
        let column = self.sort.column.map_or(SortColumn::Id, |c| c.next());
        self.toggle_sort(column);
    }

    // ----- selection ---------------------------------------------------------

    pub fn selected_hunt(&self) -> Option<&Hunt> {
        self.table_state.selected().and_then(|i| self.hunts.get(i))
    }

    fn move_selection(&mut self, delta: isize) {
        if self.hunts.is_empty() {
            return;
        }
        let last = self.hunts.len() - 1;
        let next = match self.table_state.selected() {
            Some(i) => i.saturating_add_signed(delta).min(last),
            None => 0,
        };
        self.table_state.select(Some(next));
    }

    pub fn select_next(&mut self) {
        self.move_selection(1);
    }

    pub fn select_previous(&mut self) {
        self.move_selection(-1);
    }

    pub fn page_down(&mut self, rows: usize) {
        self.move_selection(rows as isize);
    }

    pub fn page_up(&mut self, rows: usize) {
        self.move_selection(-(rows as isize));
    }

    pub fn select_first(&mut self) {
        if !self.hunts.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.hunts.is_empty() {
            self.table_state.select(Some(self.hunts.len() - 1));
        }
    }

    // ----- modals ------------------------------------------------------------

    pub fn open_detail(&mut self) {
        if let Some(hunt) = self.selected_hunt().cloned() {
            self.modal = Modal::Detail {
                hunt: Box::new(hunt),
                scroll: 0,
            };
        }
    }

    pub fn open_help(&mut self) {
        self.modal = Modal::Help;
    }

    /// Closing the detail view also clears the row selection
    pub fn close_modal(&mut self) {
        if matches!(self.modal, Modal::Detail { .. }) {
            self.table_state.select(None);
        }
        self.modal = Modal::None;
    }

    pub fn scroll_detail(&mut self, delta: i16) {
        if let Modal::Detail { scroll, .. } = &mut self.modal {
            *scroll = scroll.saturating_add_signed(delta);
        }
    }

    pub fn move_tag_cursor(&mut self, delta: isize) {
        if let Modal::TagPicker { tags, index } = &mut self.modal {
            if !tags.is_empty() {
                *index = index.saturating_add_signed(delta).min(tags.len() - 1);
            }
        }
    }

    pub fn confirm_tag(&mut self) {
        let chosen = match &self.modal {
            Modal::TagPicker { tags, index } => tags.get(*index).cloned(),
            _ => None,
        };
        if let Some(tag) = chosen {
            self.choose_tag(&tag);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_core::{DocumentRef, Submitter};

    fn hunt(id: &str, tactic: &str, tags: &[&str]) -> Hunt {
        Hunt {
            id: id.to_string(),
            hypothesis: format!("hypothesis {id}"),
            tactic: tactic.to_string(),
            notes: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            submitter: Submitter::new("alice", "http://x"),
            content: format!("content {id}"),
            source: DocumentRef::new("Flames", id),
        }
    }

    fn sample() -> Vec<Hunt> {
        vec![
            hunt("H002", "Persistence", &["windows", "registry"]),
            hunt("H001", "Discovery", &["dns"]),
            hunt("H003", "Collection", &["windows"]),
        ]
    }

    fn ids(app: &App) -> Vec<&str> {
        app.hunts.iter().map(|h| h.id.as_str()).collect()
    }

    /// App with the initial load applied
    fn ready() -> App {
        let mut app = App::new();
        let request = app.take_pending_load().unwrap();
        app.apply_load(LoadResult {
            generation: request.generation,
            outcome: Ok(sample()),
        });
        app
    }

    #[test]
    fn test_starts_loading_with_request() {
        let mut app = App::new();
        assert!(app.is_loading());
        let request = app.take_pending_load().unwrap();
        assert_eq!(request.kind, LoadKind::All);
        assert_eq!(request.generation, 1);
        assert!(app.take_pending_load().is_none());
    }

    #[test]
    fn test_load_success_ready() {
        let app = ready();
        assert_eq!(app.load_state, LoadState::Ready);
        assert_eq!(ids(&app), vec!["H002", "H001", "H003"]);
        assert_eq!(app.table_state.selected(), Some(0));
        assert!(app.loaded_at.is_some());
    }

    #[test]
    fn test_load_error_keeps_list() {
        let mut app = ready();
        app.reset();
        let request = app.take_pending_load().unwrap();
        app.apply_load(LoadResult {
            generation: request.generation,
            outcome: Err("boom".into()),
        });
        assert_eq!(app.load_state, LoadState::Error("boom".into()));
        assert_eq!(app.hunts.len(), 3);
        assert!(app.notifications.current().is_some());
    }

    #[test]
    fn test_stale_result_dropped() {
        let mut app = App::new();
        let first = app.take_pending_load().unwrap();
        app.push_query_char('d');
        let second = app.take_pending_load().unwrap();
        assert_eq!(second.kind, LoadKind::Search("d".into()));

        let applied = app.apply_load(LoadResult {
            generation: first.generation,
            outcome: Ok(sample()),
        });
        assert!(!applied);
        assert!(app.is_loading());
        assert!(app.hunts.is_empty());

        assert!(app.apply_load(LoadResult {
            generation: second.generation,
            outcome: Ok(vec![hunt("H001", "Discovery", &["dns"])]),
        }));
        assert_eq!(ids(&app), vec!["H001"]);
    }

    #[test]
    fn test_blank_query_loads_all() {
        let mut app = ready();
        app.push_query_char(' ');
        assert_eq!(app.take_pending_load().unwrap().kind, LoadKind::All);
        app.pop_query_char();
        assert_eq!(app.take_pending_load().unwrap().kind, LoadKind::All);
        // Nothing to pop, nothing to load
        app.pop_query_char();
        assert!(app.take_pending_load().is_none());
    }

    #[test]
    fn test_paste_strips_control_chars() {
        let mut app = ready();
        app.push_query_str("dns\n");
        assert_eq!(app.query, "dns");
        assert_eq!(
            app.take_pending_load().unwrap().kind,
            LoadKind::Search("dns".into())
        );
    }

    #[test]
    fn test_tag_filters_in_place() {
        let mut app = ready();
        app.choose_tag("windows");
        assert_eq!(ids(&app), vec!["H002", "H003"]);
        assert!(app.take_pending_load().is_none());
        assert!(!app.is_loading());
        // Tags still come from the whole list
        assert_eq!(app.available_tags(), vec!["dns", "registry", "windows"]);
        assert_eq!(app.tag_count("windows"), 2);
    }

    #[test]
    fn test_tag_all_refetches() {
        let mut app = ready();
        app.choose_tag("windows");
        app.choose_tag(ALL_TAGS);
        assert_eq!(app.selected_tag, None);
        assert!(app.is_loading());
        assert_eq!(app.take_pending_load().unwrap().kind, LoadKind::All);
    }

    #[test]
    fn test_tag_all_fetches_everything_despite_query() {
        let mut app = ready();
        app.push_query_char('x');
        let search = app.take_pending_load().unwrap();
        app.choose_tag(ALL_TAGS);
        let request = app.take_pending_load().unwrap();
        assert_eq!(request.kind, LoadKind::All);
        assert!(request.generation > search.generation);
        assert_eq!(app.query, "x");
    }

    #[test]
    fn test_second_tag_narrows_first() {
        let mut app = ready();
        app.choose_tag("dns");
        assert_eq!(ids(&app), vec!["H001"]);
        app.choose_tag("windows");
        assert!(app.hunts.is_empty());
        assert_eq!(app.table_state.selected(), None);
        assert_eq!(app.selected_tag.as_deref(), Some("windows"));

        app.choose_tag(ALL_TAGS);
        let request = app.take_pending_load().unwrap();
        app.apply_load(LoadResult {
            generation: request.generation,
            outcome: Ok(sample()),
        });
        assert_eq!(ids(&app), vec!["H002", "H001", "H003"]);
    }

    #[test]
    fn test_stacked_tags_reapplied_after_fetch() {
        let mut app = ready();
        app.choose_tag("windows");
        app.choose_tag("registry");
        assert_eq!(ids(&app), vec!["H002"]);
        app.push_query_char('h');
        let request = app.take_pending_load().unwrap();
        app.apply_load(LoadResult {
            generation: request.generation,
            outcome: Ok(sample()),
        });
        assert_eq!(ids(&app), vec!["H002"]);
    }

    #[test]
    fn test_tag_reapplied_after_search() {
        let mut app = ready();
        app.choose_tag("windows");
        app.push_query_char('h');
        let request = app.take_pending_load().unwrap();
        app.apply_load(LoadResult {
            generation: request.generation,
            outcome: Ok(sample()),
        });
        assert_eq!(ids(&app), vec!["H002", "H003"]);
    }

    #[test]
    fn test_tag_picker() {
        let mut app = ready();
        app.open_tag_picker();
        match &app.modal {
            Modal::TagPicker { tags, index } => {
                assert_eq!(tags, &vec!["all", "dns", "registry", "windows"]);
                assert_eq!(*index, 0);
            }
            other => panic!("unexpected modal {other:?}"),
        }
        app.move_tag_cursor(3);
        app.move_tag_cursor(5);
        app.confirm_tag();
        assert_eq!(app.modal, Modal::None);
        assert_eq!(app.selected_tag.as_deref(), Some("windows"));

        app.open_tag_picker();
        assert!(matches!(app.modal, Modal::TagPicker { index: 3, .. }));
    }

    #[test]
    fn test_sort_toggles_and_persists() {
        let mut app = ready();
        app.toggle_sort(SortColumn::Id);
        assert_eq!(ids(&app), vec!["H001", "H002", "H003"]);
        app.toggle_sort(SortColumn::Id);
        assert_eq!(ids(&app), vec!["H003", "H002", "H001"]);

        app.reset();
        let request = app.take_pending_load().unwrap();
        app.apply_load(LoadResult {
            generation: request.generation,
            outcome: Ok(sample()),
        });
        assert_eq!(ids(&app), vec!["H003", "H002", "H001"]);
    }

    #[test]
    fn test_cycle_sort() {
        let mut app = ready();
        app.cycle_sort();
        assert!(app.sort.is_sorted_by(SortColumn::Id));
        app.cycle_sort();
        assert!(app.sort.is_sorted_by(SortColumn::Hypothesis));
    }

    #[test]
    fn test_reset_clears_filters() {
        let mut app = ready();
        app.push_query_char('d');
        app.choose_tag("dns");
        app.start_search();
        app.reset();
        assert!(app.query.is_empty());
        assert_eq!(app.selected_tag, None);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.take_pending_load().unwrap().kind, LoadKind::All);
    }

    #[test]
    fn test_selection_bounds() {
        let mut app = ready();
        app.select_previous();
        assert_eq!(app.table_state.selected(), Some(0));
        app.page_down(10);
        assert_eq!(app.table_state.selected(), Some(2));
        app.select_next();
        assert_eq!(app.table_state.selected(), Some(2));
        app.select_first();
        assert_eq!(app.selected_hunt().map(|h| h.id.as_str()), Some("H002"));
        app.select_last();
        assert_eq!(app.selected_hunt().map(|h| h.id.as_str()), Some("H003"));
    }

    #[test]
    fn test_detail_close_clears_selection() {
        let mut app = ready();
        app.select_next();
        app.open_detail();
        match &app.modal {
            Modal::Detail { hunt, scroll } => {
                assert_eq!(hunt.id, "H001");
                assert_eq!(*scroll, 0);
            }
            other => panic!("unexpected modal {other:?}"),
        }
        app.scroll_detail(3);
        app.scroll_detail(-5);
        assert!(matches!(app.modal, Modal::Detail { scroll: 0, .. }));

        app.close_modal();
        assert_eq!(app.modal, Modal::None);
        assert_eq!(app.table_state.selected(), None);
        assert_eq!(app.hunts.len(), 3);
        assert!(app.take_pending_load().is_none());
    }

    #[test]
    fn test_detail_needs_selection() {
        let mut app = App::new();
        app.open_detail();
        assert_eq!(app.modal, Modal::None);
    }

    #[test]
    fn test_double_ctrl_c_quits() {
        let mut app = App::new();
        assert!(!app.on_ctrl_c());
        assert!(app.running);
        assert!(app.on_ctrl_c());
        assert!(!app.running);
    }
}
