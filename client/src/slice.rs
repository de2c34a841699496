//! Generic resource slice state machine
//!
//! One lifecycle for every REST-mirrored collection: a list of entities
//! unique by id, an optional selection, a loading flag, and a display
//! error. Each tracked operation moves through Pending → Fulfilled or
//! Rejected; the methods below are those transitions.

use bookstay_api::{Hotel, Reservation, Room};

/// An entity addressable by its server-assigned id
pub trait Entity: Clone {
    /// Server-assigned identifier
    fn id(&self) -> i64;
}

impl Entity for Hotel {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Entity for Room {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Entity for Reservation {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Cached state for one resource type
///
/// Invariants upheld by every transition:
///
/// - `items` never holds two entries with the same id, and untouched
///   entries keep their relative order
/// - `selected` is refreshed whenever the matching entry is updated, and
///   cleared when it is removed
/// - `loading` is true only between a `begin` and the transition that
///   resolves it
/// - a rejected operation changes `error` and `loading` only; `items` and
///   `selected` stay as they were
#[derive(Clone, Debug, PartialEq)]
pub struct ResourceSlice<T: Entity> {
    /// Cached entities, unique by id
    pub items: Vec<T>,
    /// Entity a detail view is focused on, if any
    pub selected: Option<T>,
    /// Whether a request for this resource is in flight
    pub loading: bool,
    /// Display message from the last rejected request
    pub error: Option<String>,
}

impl<T: Entity> Default for ResourceSlice<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            loading: false,
            error: None,
        }
    }
}

impl<T: Entity> ResourceSlice<T> {
    /// Pending: a request was dispatched
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Rejected: the request failed with a displayable message
    pub fn reject(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    /// Drop the display error (view unmount / navigation)
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Fulfilled fetch-all: the response replaces the whole list
    ///
    /// A payload carrying the same id twice keeps the first occurrence,
    /// so uniqueness-by-id holds no matter what the backend sends. The
    /// selection is left alone; a detail view holding a copy keeps it
    /// until a targeted update or removal says otherwise.
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.loading = false;
        self.items.clear();
        for entity in items {
            if !self.items.iter().any(|e| e.id() == entity.id()) {
                self.items.push(entity);
            }
        }
    }

    /// Fulfilled fetch-one: upsert the entity and focus the selection on it
    pub fn focus(&mut self, entity: T) {
        self.upsert_entry(&entity);
        self.selected = Some(entity);
        self.loading = false;
    }

    /// Fulfilled create: upsert the entity, leaving the selection alone
    pub fn upsert(&mut self, entity: T) {
        self.refresh_selected(&entity);
        self.upsert_entry(&entity);
        self.loading = false;
    }

    /// Fulfilled update or cancel: replace in place, never append
    ///
    /// An id not present in `items` is a no-op for the list, but the
    /// selection is still refreshed when it matches.
    pub fn apply_update(&mut self, entity: T) {
        self.refresh_selected(&entity);
        if let Some(slot) = self.items.iter_mut().find(|e| e.id() == entity.id()) {
            *slot = entity;
        }
        self.loading = false;
    }

    /// Fulfilled delete: filter the entity out and clear a matching selection
    pub fn remove(&mut self, id: i64) {
        self.items.retain(|e| e.id() != id);
        if self.selected.as_ref().is_some_and(|s| s.id() == id) {
            self.selected = None;
        }
        self.loading = false;
    }

    /// Replace in place by id, append when absent
    fn upsert_entry(&mut self, entity: &T) {
        if let Some(slot) = self.items.iter_mut().find(|e| e.id() == entity.id()) {
            *slot = entity.clone();
        } else {
            self.items.push(entity.clone());
        }
    }

    /// Keep the selection in step with an updated entity
    fn refresh_selected(&mut self, entity: &T) {
        if self.selected.as_ref().is_some_and(|s| s.id() == entity.id()) {
            self.selected = Some(entity.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::sample_hotel;

    #[test]
    fn test_begin_sets_loading_and_clears_error() {
        let mut slice = ResourceSlice::<Hotel>::default();
        slice.error = Some("previous failure".to_string());

        slice.begin();

        assert!(slice.loading);
        assert!(slice.error.is_none());
    }

    #[test]
    fn test_reject_leaves_items_and_selection_intact() {
        let mut slice = ResourceSlice::<Hotel>::default();
        slice.replace_all(vec![sample_hotel(1), sample_hotel(2)]);
        slice.focus(sample_hotel(1));
        slice.begin();

        slice.reject("server exploded");

        assert!(!slice.loading);
        assert_eq!(slice.error.as_deref(), Some("server exploded"));
        assert_eq!(slice.items.len(), 2);
        assert_eq!(slice.selected.as_ref().map(|h| h.id), Some(1));
    }

    #[test]
    fn test_upsert_replaces_in_place_keeping_order() {
        let mut slice = ResourceSlice::<Hotel>::default();
        slice.replace_all(vec![sample_hotel(1), sample_hotel(2), sample_hotel(3)]);

        let mut renamed = sample_hotel(2);
        renamed.name = "Renamed".to_string();
        slice.upsert(renamed);

        let ids: Vec<i64> = slice.items.iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(slice.items[1].name, "Renamed");
    }

    #[test]
    fn test_upsert_appends_new_entity() {
        let mut slice = ResourceSlice::<Hotel>::default();
        slice.replace_all(vec![sample_hotel(1)]);

        slice.upsert(sample_hotel(7));

        let ids: Vec<i64> = slice.items.iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![1, 7]);
    }

    #[test]
    fn test_replace_all_keeps_first_of_duplicate_ids() {
        let mut slice = ResourceSlice::<Hotel>::default();

        let mut renamed = sample_hotel(3);
        renamed.name = "Duplicate".to_string();
        slice.replace_all(vec![sample_hotel(3), sample_hotel(1), renamed]);

        let ids: Vec<i64> = slice.items.iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(slice.items[0].name, "Hotel 3");
    }

    #[test]
    fn test_apply_update_never_appends() {
        let mut slice = ResourceSlice::<Hotel>::default();
        slice.replace_all(vec![sample_hotel(1)]);

        slice.apply_update(sample_hotel(9));

        let ids: Vec<i64> = slice.items.iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_apply_update_refreshes_matching_selection() {
        let mut slice = ResourceSlice::<Hotel>::default();
        slice.focus(sample_hotel(4));

        let mut updated = sample_hotel(4);
        updated.city = "Lisbon".to_string();
        slice.apply_update(updated);

        assert_eq!(slice.selected.as_ref().map(|h| h.city.as_str()), Some("Lisbon"));
    }

    #[test]
    fn test_remove_clears_matching_selection() {
        let mut slice = ResourceSlice::<Hotel>::default();
        slice.replace_all(vec![sample_hotel(1), sample_hotel(2)]);
        slice.focus(sample_hotel(2));

        slice.remove(2);

        let ids: Vec<i64> = slice.items.iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![1]);
        assert!(slice.selected.is_none());
    }

    #[test]
    fn test_remove_keeps_unrelated_selection() {
        let mut slice = ResourceSlice::<Hotel>::default();
        slice.replace_all(vec![sample_hotel(1), sample_hotel(2)]);
        slice.focus(sample_hotel(1));

        slice.remove(2);

        assert_eq!(slice.selected.as_ref().map(|h| h.id), Some(1));
    }

    #[test]
    fn test_focus_upserts_and_selects() {
        let mut slice = ResourceSlice::<Hotel>::default();

        slice.focus(sample_hotel(3));

        assert_eq!(slice.items.len(), 1);
        assert_eq!(slice.selected.as_ref().map(|h| h.id), Some(3));
    }
}
