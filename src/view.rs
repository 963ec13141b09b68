//! Ephemeral UI state
//!
//! Selection, hover, expansion, tab, edit mode and the active filters.
//! Nothing here touches the document or survives a reload; it exists as
//! its own service so derivation inputs and URL-parameter bootstrapping
//! have one place to land.

use crate::core::{ItemId, SwimlaneId};
use crate::query::FilterState;

/// Top-level tab.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Board,
    Guide,
}

/// View-state store. Independently constructible from the document store.
#[derive(Clone, Debug, Default)]
pub struct ViewState {
    edit_mode: bool,
    tab: Tab,
    filters: FilterState,
    selected_item: Option<ItemId>,
    expanded_item: Option<ItemId>,
    hovered_item: Option<ItemId>,
    focused_item: Option<ItemId>,
    focused_swimlane: Option<SwimlaneId>,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            edit_mode: true,
            ..Self::default()
        }
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Read-only mode is `set_edit_mode(false)`, applied once at startup
    /// from the URL parameters.
    pub fn set_edit_mode(&mut self, edit_mode: bool) {
        self.edit_mode = edit_mode;
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn set_filters(&mut self, filters: FilterState) {
        self.filters = filters;
    }

    pub fn selected_item(&self) -> Option<&ItemId> {
        self.selected_item.as_ref()
    }

    pub fn select_item(&mut self, item: Option<ItemId>) {
        self.selected_item = item;
    }

    pub fn expanded_item(&self) -> Option<&ItemId> {
        self.expanded_item.as_ref()
    }

    /// Expanding the already-expanded item collapses it.
    pub fn toggle_expanded(&mut self, item: ItemId) {
        if self.expanded_item.as_ref() == Some(&item) {
            self.expanded_item = None;
        } else {
            self.expanded_item = Some(item);
        }
    }

    pub fn hovered_item(&self) -> Option<&ItemId> {
        self.hovered_item.as_ref()
    }

    pub fn set_hovered_item(&mut self, item: Option<ItemId>) {
        self.hovered_item = item;
    }

    pub fn focused_item(&self) -> Option<&ItemId> {
        self.focused_item.as_ref()
    }

    pub fn set_focused_item(&mut self, item: Option<ItemId>) {
        self.focused_item = item;
    }

    pub fn focused_swimlane(&self) -> Option<&SwimlaneId> {
        self.focused_swimlane.as_ref()
    }

    pub fn set_focused_swimlane(&mut self, swimlane: Option<SwimlaneId>) {
        self.focused_swimlane = swimlane;
    }
}
