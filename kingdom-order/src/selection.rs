use kingdom_catalog::Catalogs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A visitor's current choices before checkout.
///
/// Ids are opaque strings and are never checked against the catalogs here;
/// ids that resolve to nothing simply contribute nothing to a total.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectionState {
    #[serde(default)]
    pub selected_item_ids: BTreeSet<String>,
    #[serde(default)]
    pub selected_add_on_ids: BTreeSet<String>,
    #[serde(default)]
    pub selected_bundle_id: Option<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the item if absent, remove it if present. Leaves the bundle alone.
    pub fn toggle_item(&mut self, item_id: &str) {
        toggle(&mut self.selected_item_ids, item_id);
        tracing::debug!("Toggled item {} ({} selected)", item_id, self.selected_item_ids.len());
    }

    pub fn toggle_add_on(&mut self, add_on_id: &str) {
        toggle(&mut self.selected_add_on_ids, add_on_id);
        tracing::debug!("Toggled add-on {} ({} selected)", add_on_id, self.selected_add_on_ids.len());
    }

    /// Activate a bundle. Individual item selections are replaced by the
    /// bundle's members; an unknown bundle leaves no items selected.
    pub fn select_bundle(&mut self, bundle_id: &str, catalogs: &Catalogs) {
        self.selected_item_ids = catalogs
            .bundle(bundle_id)
            .map(|b| b.member_item_ids.clone())
            .unwrap_or_default();
        self.selected_bundle_id = Some(bundle_id.to_string());
        tracing::debug!("Selected bundle {} ({} members)", bundle_id, self.selected_item_ids.len());
    }

    pub fn clear(&mut self) {
        self.selected_item_ids.clear();
        self.selected_add_on_ids.clear();
        self.selected_bundle_id = None;
        tracing::debug!("Cleared selection");
    }

    pub fn is_empty(&self) -> bool {
        self.selected_item_ids.is_empty()
            && self.selected_add_on_ids.is_empty()
            && self.selected_bundle_id.is_none()
    }
}

fn toggle(set: &mut BTreeSet<String>, id: &str) {
    if !set.remove(id) {
        set.insert(id.to_string());
    }
}
