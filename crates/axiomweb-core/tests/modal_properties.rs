//! Property-based tests for the modal controller
//!
//! Uses proptest to verify the lifecycle invariants: unknown triggers never
//! change state, dismissal always clears, and arbitrary event sequences
//! cannot drive the controller into an inconsistent state.

use proptest::prelude::*;

use axiomweb_core::{Catalog, DismissReason, ModalController, ModalState, ProjectId};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Ids present in the builtin catalog
fn known_id_strategy() -> impl Strategy<Value = ProjectId> {
    (1u32..=6).prop_map(ProjectId)
}

/// Ids guaranteed absent from the builtin catalog
fn unknown_id_strategy() -> impl Strategy<Value = ProjectId> {
    prop_oneof![Just(0u32), 7u32..10_000].prop_map(ProjectId)
}

/// Events a page can deliver to the controller
#[derive(Debug, Clone, Copy)]
enum ModalEvent {
    Activate(ProjectId),
    Dismiss(DismissReason),
}

fn event_strategy() -> impl Strategy<Value = ModalEvent> {
    prop_oneof![
        2 => known_id_strategy().prop_map(ModalEvent::Activate),
        1 => unknown_id_strategy().prop_map(ModalEvent::Activate),
        2 => prop_oneof![
            Just(DismissReason::CloseControl),
            Just(DismissReason::Backdrop),
            Just(DismissReason::EscapeKey),
        ]
        .prop_map(ModalEvent::Dismiss),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// An unknown id never changes state, whatever the starting state
    #[test]
    fn unknown_id_never_changes_state(
        open_first in any::<bool>(),
        known in known_id_strategy(),
        unknown in unknown_id_strategy(),
    ) {
        let mut modal = ModalController::new(Catalog::builtin());
        if open_first {
            prop_assert!(modal.activate(known));
        }
        let before = modal.state().clone();

        prop_assert!(!modal.activate(unknown));
        prop_assert_eq!(modal.state(), &before);
    }

    /// Every dismissal path yields Closed with cleared content, and a second
    /// dismissal is a safe no-op
    #[test]
    fn dismiss_always_closes_and_clears(
        id in known_id_strategy(),
        first in prop_oneof![
            Just(DismissReason::CloseControl),
            Just(DismissReason::Backdrop),
            Just(DismissReason::EscapeKey),
        ],
        second in prop_oneof![
            Just(DismissReason::CloseControl),
            Just(DismissReason::Backdrop),
            Just(DismissReason::EscapeKey),
        ],
    ) {
        let mut modal = ModalController::new(Catalog::builtin());
        prop_assert!(modal.activate(id));

        modal.dismiss(first);
        prop_assert_eq!(modal.state(), &ModalState::Closed);
        prop_assert!(modal.content().is_none());

        modal.dismiss(second);
        prop_assert_eq!(modal.state(), &ModalState::Closed);
        prop_assert!(modal.content().is_none());
    }

    /// After any event sequence, content is Some exactly when open, and it
    /// always matches the catalog entry for the last successful activation
    #[test]
    fn content_tracks_last_successful_activation(
        events in prop::collection::vec(event_strategy(), 0..50),
    ) {
        let catalog = Catalog::builtin();
        let mut modal = ModalController::new(catalog.clone());
        let mut expected_open: Option<ProjectId> = None;

        for event in events {
            match event {
                ModalEvent::Activate(id) => {
                    if modal.activate(id) {
                        expected_open = Some(id);
                    }
                }
                ModalEvent::Dismiss(reason) => {
                    modal.dismiss(reason);
                    expected_open = None;
                }
            }

            match expected_open {
                Some(id) => {
                    let entry = catalog.get(id).expect("activation succeeded");
                    let content = modal.content().expect("open modal has content");
                    prop_assert_eq!(&content.title, &entry.title);
                    prop_assert_eq!(&content.image_src, &entry.image);
                    prop_assert_eq!(&content.image_alt, &entry.title);
                }
                None => {
                    prop_assert_eq!(modal.state(), &ModalState::Closed);
                    prop_assert!(modal.content().is_none());
                }
            }
        }
    }
}
