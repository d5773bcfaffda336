//! Headless state for a searchable, keyboard-navigable selection list.
//!
//! The widget never interprets the option values it carries. Options are
//! filtered by the live query, then ordered into Recent, Popular and Other
//! groups. The highlight cursor and every commit index refer to that same
//! grouped display order, so what is highlighted is what gets committed.

use std::collections::VecDeque;

use dioxus_logger::tracing::debug;
use serde::Deserialize;
use serde::Serialize;

/// Shown in place of the list when the query matches nothing.
pub const NO_MATCHES_MESSAGE: &str = "No matches found";

/// Most-recently-used entries kept per selector.
pub const RECENT_CAPACITY: usize = 3;

/// One selectable item.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionOption<T> {
    pub value: T,
    pub label: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub is_popular: bool,
    pub is_recent: bool,
}

impl<T> SelectionOption<T> {
    pub fn new(value: T, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            description: None,
            icon: None,
            color: None,
            is_popular: false,
            is_recent: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_icon(mut self, icon: Option<impl Into<String>>) -> Self {
        self.icon = icon.map(Into::into);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn popular(mut self, is_popular: bool) -> Self {
        self.is_popular = is_popular;
        self
    }

    pub fn recent(mut self, is_recent: bool) -> Self {
        self.is_recent = is_recent;
        self
    }

    /// Recent wins over popular, so an option is only ever in one group.
    pub fn category(&self) -> OptionCategory {
        if self.is_recent {
            OptionCategory::Recent
        } else if self.is_popular {
            OptionCategory::Popular
        } else {
            OptionCategory::Other
        }
    }

    /// Case-insensitive substring match on label and description.
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.label.to_lowercase().contains(&needle)
            || self
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
    }
}

/// Controls which marker is drawn next to an option. Selection logic is the
/// same for every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayVariant {
    #[default]
    Asset,
    Chain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionMarker {
    Icon(String),
    Color(String),
}

impl DisplayVariant {
    pub fn marker<T>(&self, option: &SelectionOption<T>) -> Option<OptionMarker> {
        match (self, &option.color, &option.icon) {
            (Self::Chain, Some(color), _) => Some(OptionMarker::Color(color.clone())),
            (_, _, Some(icon)) => Some(OptionMarker::Icon(icon.clone())),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OptionCategory {
    Recent,
    Popular,
    Other,
}

impl OptionCategory {
    pub const ALL: [Self; 3] = [Self::Recent, Self::Popular, Self::Other];

    pub fn header(&self) -> &'static str {
        match self {
            Self::Recent => "Recent",
            Self::Popular => "Popular",
            Self::Other => "All Options",
        }
    }
}

/// A non-empty run of visible options sharing a category.
#[derive(Debug, PartialEq)]
pub struct OptionGroup<'a, T> {
    pub category: OptionCategory,
    /// The catch-all group only gets a header when another group precedes it.
    pub show_header: bool,
    /// `(display index, option)` pairs.
    pub entries: Vec<(usize, &'a SelectionOption<T>)>,
}

/// Keys the panel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    Tab,
    Space,
    Other,
}

/// What a key press did to the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent<T> {
    Opened,
    Moved(usize),
    Committed(T),
    /// Closed by Escape.
    Dismissed,
    /// Closed because focus is leaving via Tab.
    TabbedOut,
    /// Enter with nothing to commit.
    Swallowed,
    /// Not a navigation key; let the input handle it.
    PassThrough,
}

impl<T> PanelEvent<T> {
    /// Whether the host should suppress the key's default action.
    pub fn prevents_default(&self) -> bool {
        !matches!(self, Self::TabbedOut | Self::PassThrough)
    }
}

/// Open/closed state, live query and highlight cursor of one selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionPanel {
    query: String,
    is_open: bool,
    highlighted: usize,
}

impl SelectionPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn open(&mut self) {
        if !self.is_open {
            self.is_open = true;
            self.highlighted = 0;
        }
    }

    /// Replaces the query and opens the panel. The cursor returns to the top
    /// since the visible set has changed.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.is_open = true;
        self.highlighted = 0;
    }

    /// Closes without committing, e.g. on a click outside the component.
    pub fn dismiss(&mut self) {
        self.is_open = false;
        self.query.clear();
    }

    /// Filtered options in display order.
    pub fn visible<'a, T>(&self, options: &'a [SelectionOption<T>]) -> Vec<&'a SelectionOption<T>> {
        OptionCategory::ALL
            .iter()
            .flat_map(|category| {
                options
                    .iter()
                    .filter(move |o| o.category() == *category && o.matches(&self.query))
            })
            .collect()
    }

    /// Visible options partitioned into their non-empty groups.
    pub fn groups<'a, T>(&self, options: &'a [SelectionOption<T>]) -> Vec<OptionGroup<'a, T>> {
        let mut groups: Vec<OptionGroup<'a, T>> = Vec::new();
        for (index, option) in self.visible(options).into_iter().enumerate() {
            let category = option.category();
            match groups.last_mut() {
                Some(group) if group.category == category => {
                    group.entries.push((index, option));
                    continue;
                }
                _ => {}
            }
            let show_header = category != OptionCategory::Other || !groups.is_empty();
            groups.push(OptionGroup {
                category,
                show_header,
                entries: vec![(index, option)],
            });
        }
        groups
    }

    /// Moves the cursor to `index` (pointer hover), clamped to the visible set.
    pub fn highlight<T>(&mut self, index: usize, options: &[SelectionOption<T>]) {
        let len = self.visible(options).len();
        self.highlighted = index.min(len.saturating_sub(1));
    }

    /// Commits the option at display `index`, closing the panel and clearing
    /// the query. Returns `None` if nothing is visible at that index.
    pub fn commit_at<T: Clone>(
        &mut self,
        index: usize,
        options: &[SelectionOption<T>],
    ) -> Option<T> {
        let value = self.visible(options).get(index).map(|o| o.value.clone())?;
        debug!("selection committed at display index {index}");
        self.is_open = false;
        self.query.clear();
        self.highlighted = index;
        Some(value)
    }

    pub fn handle_key<T: Clone>(
        &mut self,
        key: NavKey,
        options: &[SelectionOption<T>],
    ) -> PanelEvent<T> {
        if !self.is_open {
            return match key {
                NavKey::Enter | NavKey::Space | NavKey::ArrowDown => {
                    self.open();
                    PanelEvent::Opened
                }
                _ => PanelEvent::PassThrough,
            };
        }

        match key {
            NavKey::ArrowDown => {
                let last = self.visible(options).len().saturating_sub(1);
                self.highlighted = (self.highlighted + 1).min(last);
                PanelEvent::Moved(self.highlighted)
            }
            NavKey::ArrowUp => {
                self.highlighted = self.highlighted.saturating_sub(1);
                PanelEvent::Moved(self.highlighted)
            }
            NavKey::Enter => match self.commit_at(self.highlighted, options) {
                Some(value) => PanelEvent::Committed(value),
                None => PanelEvent::Swallowed,
            },
            NavKey::Escape => {
                self.dismiss();
                PanelEvent::Dismissed
            }
            NavKey::Tab => {
                self.dismiss();
                PanelEvent::TabbedOut
            }
            NavKey::Space | NavKey::Other => PanelEvent::PassThrough,
        }
    }
}

/// Most-recently-used values, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentSelections<T> {
    entries: VecDeque<T>,
}

impl<T> Default for RecentSelections<T> {
    fn default() -> Self {
        Self {
            entries: VecDeque::with_capacity(RECENT_CAPACITY),
        }
    }
}

impl<T: PartialEq> RecentSelections<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the list in the given order, oldest last.
    pub fn from_values(values: impl IntoIterator<Item = T>) -> Self {
        let mut recent = Self::new();
        let values: Vec<T> = values.into_iter().collect();
        for value in values.into_iter().rev() {
            recent.record(value);
        }
        recent
    }

    pub fn record(&mut self, value: T) {
        self.entries.retain(|v| *v != value);
        self.entries.push_front(value);
        self.entries.truncate(RECENT_CAPACITY);
    }

    pub fn contains(&self, value: &T) -> bool {
        self.entries.contains(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit() -> Vec<SelectionOption<&'static str>> {
        vec![
            SelectionOption::new("apple", "Apple").with_description("Red fruit"),
            SelectionOption::new("banana", "Banana").popular(true),
            SelectionOption::new("cherry", "Cherry").recent(true).popular(true),
            SelectionOption::new("date", "Date"),
        ]
    }

    fn labels(panel: &SelectionPanel, options: &[SelectionOption<&'static str>]) -> Vec<String> {
        panel.visible(options).iter().map(|o| o.label.clone()).collect()
    }

    #[test]
    fn display_order_is_recent_then_popular_then_rest() {
        let panel = SelectionPanel::new();
        assert_eq!(labels(&panel, &fruit()), ["Cherry", "Banana", "Apple", "Date"]);
    }

    #[test]
    fn recent_option_is_not_repeated_under_popular() {
        let options = fruit();
        let panel = SelectionPanel::new();
        let groups = panel.groups(&options);
        let categories: Vec<_> = groups.iter().map(|g| g.category).collect();
        assert_eq!(
            categories,
            [OptionCategory::Recent, OptionCategory::Popular, OptionCategory::Other]
        );
        assert_eq!(groups[1].entries.len(), 1);
        assert_eq!(groups[2].entries[0].0, 2);
        assert!(groups.iter().all(|g| g.show_header));
    }

    #[test]
    fn lone_other_group_has_no_header() {
        let options = vec![
            SelectionOption::new(1, "One"),
            SelectionOption::new(2, "Two"),
        ];
        let groups = SelectionPanel::new().groups(&options);
        assert_eq!(groups.len(), 1);
        assert!(!groups[0].show_header);
    }

    #[test]
    fn filters_on_label_and_description_ignoring_case() {
        let options = fruit();
        let mut panel = SelectionPanel::new();
        panel.set_query("RED");
        assert_eq!(labels(&panel, &options), ["Apple"]);
        panel.set_query("an");
        assert_eq!(labels(&panel, &options), ["Banana"]);
        assert!(panel.is_open());
    }

    #[test]
    fn closed_panel_opens_on_enter_space_or_arrow_down() {
        let options = fruit();
        for key in [NavKey::Enter, NavKey::Space, NavKey::ArrowDown] {
            let mut panel = SelectionPanel::new();
            assert_eq!(panel.handle_key(key, &options), PanelEvent::Opened);
            assert!(panel.is_open());
            assert_eq!(panel.highlighted(), 0);
        }
        let mut panel = SelectionPanel::new();
        assert_eq!(panel.handle_key(NavKey::ArrowUp, &options), PanelEvent::PassThrough);
        assert!(!panel.is_open());
    }

    #[test]
    fn highlight_never_leaves_visible_bounds() {
        let options = fruit();
        let mut panel = SelectionPanel::new();
        panel.open();
        let keys = [
            NavKey::ArrowUp,
            NavKey::ArrowDown,
            NavKey::ArrowDown,
            NavKey::ArrowDown,
            NavKey::ArrowDown,
            NavKey::ArrowDown,
            NavKey::ArrowUp,
        ];
        for key in keys {
            panel.handle_key(key, &options);
            assert!(panel.highlighted() < panel.visible(&options).len());
        }
        assert_eq!(panel.highlighted(), 2);

        panel.highlight(99, &options);
        assert_eq!(panel.highlighted(), 3);
    }

    #[test]
    fn enter_commits_the_highlighted_display_entry() {
        let options = fruit();
        let mut panel = SelectionPanel::new();
        panel.open();
        panel.handle_key(NavKey::ArrowDown, &options);
        panel.handle_key(NavKey::ArrowDown, &options);
        // Apple is first in input order but third on screen
        assert_eq!(
            panel.handle_key(NavKey::Enter, &options),
            PanelEvent::Committed("apple")
        );
        assert!(!panel.is_open());
        assert_eq!(panel.query(), "");
    }

    #[test]
    fn commit_resets_query_so_reopen_shows_everything() {
        let options = fruit();
        let mut panel = SelectionPanel::new();
        panel.set_query("date");
        assert_eq!(panel.commit_at(0, &options), Some("date"));
        panel.open();
        assert_eq!(panel.visible(&options).len(), options.len());
    }

    #[test]
    fn enter_on_empty_result_is_swallowed() {
        let options = fruit();
        let mut panel = SelectionPanel::new();
        panel.set_query("zzz");
        assert!(panel.visible(&options).is_empty());
        let event = panel.handle_key(NavKey::Enter, &options);
        assert_eq!(event, PanelEvent::Swallowed);
        assert!(event.prevents_default());
        assert!(panel.is_open());

        panel.set_query("ch");
        assert_eq!(
            panel.handle_key(NavKey::Enter, &options),
            PanelEvent::Committed("cherry")
        );
    }

    #[test]
    fn escape_and_tab_close_without_committing() {
        let options = fruit();
        let mut panel = SelectionPanel::new();
        panel.set_query("ban");
        let event = panel.handle_key(NavKey::Escape, &options);
        assert_eq!(event, PanelEvent::Dismissed);
        assert!(event.prevents_default());
        assert_eq!(panel.query(), "");

        panel.set_query("ban");
        let event = panel.handle_key(NavKey::Tab, &options);
        assert_eq!(event, PanelEvent::TabbedOut);
        assert!(!event.prevents_default());
        assert!(!panel.is_open());
    }

    #[test]
    fn outside_click_discards_query_and_highlight() {
        let options = fruit();
        let mut panel = SelectionPanel::new();
        panel.set_query("a");
        assert_eq!(panel.handle_key(NavKey::ArrowDown, &options), PanelEvent::Moved(1));

        panel.dismiss();
        assert!(!panel.is_open());
        assert_eq!(panel.query(), "");

        // Enter on the closed panel reopens it rather than committing the
        // entry that was highlighted before the click.
        assert_eq!(panel.handle_key(NavKey::Enter, &options), PanelEvent::Opened);
        assert_eq!(panel.highlighted(), 0);
        assert_eq!(labels(&panel, &options), ["Cherry", "Banana", "Apple", "Date"]);
    }

    #[test]
    fn chain_variant_prefers_color_swatch() {
        let option = SelectionOption::new((), "Polygon")
            .with_color("#8247E5")
            .with_icon(Some("poly.png"));
        assert_eq!(
            DisplayVariant::Chain.marker(&option),
            Some(OptionMarker::Color("#8247E5".into()))
        );
        assert_eq!(
            DisplayVariant::Asset.marker(&option),
            Some(OptionMarker::Icon("poly.png".into()))
        );
    }

    #[test]
    fn recent_list_keeps_three_newest_without_duplicates() {
        let mut recent = RecentSelections::new();
        for v in ["a", "b", "c", "a", "d"] {
            recent.record(v);
        }
        let order: Vec<_> = recent.iter().copied().collect();
        assert_eq!(order, ["d", "a", "c"]);
        assert!(!recent.contains(&"b"));

        let seeded = RecentSelections::from_values(["x", "y"]);
        assert_eq!(seeded.iter().copied().collect::<Vec<_>>(), ["x", "y"]);
    }
}
