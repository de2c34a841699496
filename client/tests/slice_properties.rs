//! Property tests for the resource slice
//!
//! Random sequences of slice transitions are checked against a naive
//! id-list model: the list never holds a duplicate id, untouched entries
//! keep their relative order, and the selection always mirrors a live
//! entry or is gone.

#![allow(clippy::unwrap_used)] // Test code

use bookstay_client::mocks::sample_hotel;
use bookstay_client::{Hotel, ResourceSlice};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    ReplaceAll(Vec<i64>),
    Focus(i64),
    Upsert(i64),
    ApplyUpdate(i64),
    Remove(i64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let id = 1i64..20;
    prop_oneof![
        proptest::collection::vec(1i64..20, 0..8).prop_map(Op::ReplaceAll),
        id.clone().prop_map(Op::Focus),
        id.clone().prop_map(Op::Upsert),
        id.clone().prop_map(Op::ApplyUpdate),
        id.prop_map(Op::Remove),
    ]
}

/// The naive model: an ordered id list with the same transition rules
fn model_apply(ids: &mut Vec<i64>, op: &Op) {
    match op {
        Op::ReplaceAll(new_ids) => {
            // First occurrence wins, matching the slice
            ids.clear();
            for id in new_ids {
                if !ids.contains(id) {
                    ids.push(*id);
                }
            }
        }
        Op::Focus(id) | Op::Upsert(id) => {
            if !ids.contains(id) {
                ids.push(*id);
            }
        }
        Op::ApplyUpdate(_) => {}
        Op::Remove(id) => {
            ids.retain(|existing| existing != id);
        }
    }
}

fn slice_apply(slice: &mut ResourceSlice<Hotel>, op: &Op) {
    match op {
        Op::ReplaceAll(ids) => {
            slice.replace_all(ids.iter().map(|&id| sample_hotel(id)).collect());
        }
        Op::Focus(id) => slice.focus(sample_hotel(*id)),
        Op::Upsert(id) => slice.upsert(sample_hotel(*id)),
        Op::ApplyUpdate(id) => slice.apply_update(sample_hotel(*id)),
        Op::Remove(id) => slice.remove(*id),
    }
}

proptest! {
    #[test]
    fn slice_ids_match_the_model(ops in proptest::collection::vec(op_strategy(), 0..40)) {
        let mut slice = ResourceSlice::<Hotel>::default();
        let mut model = Vec::new();

        for op in &ops {
            slice_apply(&mut slice, op);
            model_apply(&mut model, op);

            let ids: Vec<i64> = slice.items.iter().map(|h| h.id).collect();
            prop_assert_eq!(&ids, &model);
        }
    }

    #[test]
    fn slice_never_holds_duplicate_ids(ops in proptest::collection::vec(op_strategy(), 0..40)) {
        let mut slice = ResourceSlice::<Hotel>::default();

        for op in &ops {
            slice_apply(&mut slice, op);

            let mut ids: Vec<i64> = slice.items.iter().map(|h| h.id).collect();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), slice.items.len());
        }
    }

    #[test]
    fn selection_mirrors_a_live_entry_or_is_gone(
        ops in proptest::collection::vec(op_strategy(), 1..40),
    ) {
        let mut slice = ResourceSlice::<Hotel>::default();
        let mut focused = false;

        for op in &ops {
            // ReplaceAll may strand the selection on purpose; skip it here
            if matches!(op, Op::ReplaceAll(_)) {
                continue;
            }
            slice_apply(&mut slice, op);
            focused = focused || matches!(op, Op::Focus(_));

            if let Some(selected) = &slice.selected {
                prop_assert!(focused);
                let entry = slice.items.iter().find(|h| h.id == selected.id);
                prop_assert_eq!(entry, Some(selected));
            }
        }
    }
}
