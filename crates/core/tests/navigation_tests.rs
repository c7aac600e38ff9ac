mod common;

use memlab_core::{Cursor, StepPlayer};
use proptest::prelude::*;
use std::num::NonZeroUsize;
use tracing::info;

#[test]
fn test_step_player_walks_scenario() {
    memlab_common::logging::ensure_test_logging(None);
    info!("Running test");
    let mut player = StepPlayer::new(common::scenario_steps());

    assert_eq!(player.index(), 0);
    assert!(player.next());
    assert_eq!(player.current().title, "Step 1");

    assert!(player.jump_to(99));
    assert_eq!(player.index(), 5);
    assert!(player.is_last());
    assert!(!player.next());
    assert_eq!(player.index(), 5);

    assert!(player.jump_to(-3));
    assert_eq!(player.index(), 0);
    assert!(!player.previous());
}

#[test]
fn test_current_step_is_catalog_entry() {
    memlab_common::logging::ensure_test_logging(None);
    let steps = common::scenario_steps();
    let mut player = StepPlayer::new(steps.clone());

    player.jump_to(4);
    assert!(std::ptr::eq(player.current(), &steps[4]));
}

proptest! {
    #[test]
    fn prop_jump_always_in_range(len in 1usize..64, target in any::<i64>()) {
        let mut cursor = Cursor::new(NonZeroUsize::new(len).unwrap());
        cursor.jump_to(target);

        let expected = if target < 0 { 0 } else { (target as u64).min(len as u64 - 1) as usize };
        prop_assert_eq!(cursor.index(), expected);
    }

    #[test]
    fn prop_next_then_previous_returns_unless_at_end(len in 1usize..32, start in 0i64..32) {
        let mut cursor = Cursor::new(NonZeroUsize::new(len).unwrap());
        cursor.jump_to(start);
        let before = cursor.index();

        if cursor.next() {
            prop_assert!(cursor.previous());
            prop_assert_eq!(cursor.index(), before);
        } else {
            prop_assert!(cursor.is_last());
        }
    }

    #[test]
    fn prop_first_last_flags(len in 1usize..32, target in -8i64..40) {
        let mut cursor = Cursor::new(NonZeroUsize::new(len).unwrap());
        cursor.jump_to(target);

        prop_assert_eq!(cursor.is_first(), cursor.index() == 0);
        prop_assert_eq!(cursor.is_last(), cursor.index() == len - 1);
    }
}
