//! Sidebar navigation state for one dashboard session.
//!
//! All transitions are total and synchronous; they run inside UI event
//! handlers and never fail.

use crate::menu::{MenuItem, MenuLeaf};
use crate::Role;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Offset applied to the main content region, derived from the sidebar toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentInset {
    /// Sidebar hidden: content spans the full width.
    Hidden,
    /// Sidebar visible in icon-only mode.
    Collapsed,
    /// Sidebar visible with labels.
    Expanded,
}

impl ContentInset {
    pub fn class(&self) -> &'static str {
        match self {
            ContentInset::Hidden => "content-inset-none",
            ContentInset::Collapsed => "content-inset-collapsed",
            ContentInset::Expanded => "content-inset-expanded",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    pub active_view: String,
    pub expanded_submenus: BTreeSet<String>,
    pub sidebar_visible: bool,
    pub sidebar_collapsed: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::starting_at(crate::DEFAULT_VIEW)
    }
}

impl NavigationState {
    /// Fresh state for a role: its default view, nothing expanded, sidebar open.
    pub fn for_role(role: Role) -> Self {
        Self::starting_at(role.default_view())
    }

    fn starting_at(view: &str) -> Self {
        Self {
            active_view: view.to_string(),
            expanded_submenus: BTreeSet::new(),
            sidebar_visible: true,
            sidebar_collapsed: false,
        }
    }

    /// Make `leaf` the active view. Returns whether anything changed.
    pub fn select_leaf(&mut self, leaf: &MenuLeaf) -> bool {
        self.select_view(leaf.view)
    }

    /// Make `view` the active view. Selecting the current view is a no-op.
    pub fn select_view(&mut self, view: &str) -> bool {
        if self.active_view == view {
            return false;
        }
        self.active_view = view.to_string();
        true
    }

    /// Click dispatch for a sidebar entry. Leaves select their view; groups
    /// toggle their submenu, except in collapsed mode where group headers
    /// have no expansion affordance.
    pub fn activate(&mut self, item: &MenuItem) -> bool {
        match item {
            MenuItem::Leaf(leaf) => self.select_leaf(leaf),
            MenuItem::Group(_) if self.sidebar_collapsed => false,
            MenuItem::Group(group) => {
                self.toggle_submenu(group.label);
                true
            }
        }
    }

    /// Flip one submenu. Other submenus are unaffected.
    pub fn toggle_submenu(&mut self, label: &str) {
        if !self.expanded_submenus.remove(label) {
            self.expanded_submenus.insert(label.to_string());
        }
    }

    pub fn toggle_collapse(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    pub fn toggle_visibility(&mut self) {
        self.sidebar_visible = !self.sidebar_visible;
    }

    pub fn is_expanded(&self, label: &str) -> bool {
        self.expanded_submenus.contains(label)
    }

    /// Whether a group's children are rendered. The expanded set survives a
    /// collapse so that un-collapsing restores it.
    pub fn submenu_open(&self, label: &str) -> bool {
        !self.sidebar_collapsed && self.is_expanded(label)
    }

    /// Highlight rule: exact view id equality. Group headers are never
    /// highlighted, even when one of their children is active.
    pub fn is_active(&self, leaf: &MenuLeaf) -> bool {
        leaf.view == self.active_view
    }

    pub fn is_item_active(&self, item: &MenuItem) -> bool {
        match item {
            MenuItem::Leaf(leaf) => self.is_active(leaf),
            MenuItem::Group(_) => false,
        }
    }

    /// Whether labels are drawn next to icons.
    pub fn shows_labels(&self) -> bool {
        !self.sidebar_collapsed
    }

    pub fn content_inset(&self) -> ContentInset {
        match (self.sidebar_visible, self.sidebar_collapsed) {
            (false, _) => ContentInset::Hidden,
            (true, true) => ContentInset::Collapsed,
            (true, false) => ContentInset::Expanded,
        }
    }
}
