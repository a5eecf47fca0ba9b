//! Randomized properties of the rewind engine.

use proptest::prelude::*;
use tictactoe_rewind::{Game, Mark, Spot};

fn spot(index: usize) -> Spot {
    Spot::from_index(index).expect("index must be 0-8")
}

fn shuffled_indices() -> impl Strategy<Value = Vec<usize>> {
    Just((0..9).collect::<Vec<usize>>()).prop_shuffle()
}

proptest! {
    #[test]
    fn any_move_order_leaves_a_legal_state(order in shuffled_indices()) {
        let mut game = Game::new();
        for &index in &order {
            game.apply_move(spot(index));
        }

        // The pointer always sits on the newest snapshot after plain play.
        prop_assert_eq!(game.step(), game.snapshot_count() - 1);
        prop_assert!(game.snapshot_count() <= 10);

        match game.win() {
            Some(win) => {
                prop_assert_eq!(game.status_text(), format!("Winner: {}", win.mark()));
                prop_assert!(win.spots().len() >= 3);
                for &winning in win.spots() {
                    prop_assert_eq!(game.board().cell(winning).mark(), Some(win.mark()));
                }
            }
            None => {
                // Without a winner nothing stops play, so all nine landed.
                prop_assert!(game.board().is_full());
                prop_assert_eq!(game.snapshot_count(), 10);
                prop_assert!(game.status_text().starts_with("Next player: "));
            }
        }
    }

    #[test]
    fn snapshot_index_counts_the_marks(order in shuffled_indices()) {
        let mut game = Game::new();
        for &index in &order {
            game.apply_move(spot(index));
        }

        for step in 0..game.snapshot_count() {
            game.jump_to(step);
            let marks = game
                .board()
                .cells()
                .iter()
                .filter(|cell| !cell.is_empty())
                .count();
            prop_assert_eq!(marks, step);
            let expected = if step % 2 == 0 { Mark::X } else { Mark::O };
            prop_assert_eq!(game.to_move(), expected);
        }
    }

    #[test]
    fn replaying_a_taken_cell_changes_nothing(
        order in shuffled_indices(),
        prefix in 1..=9usize,
    ) {
        let mut game = Game::new();
        for &index in order.iter().take(prefix) {
            game.apply_move(spot(index));
        }

        let before = game.clone();
        game.apply_move(spot(order[0]));
        prop_assert_eq!(game, before);
    }

    #[test]
    fn playing_from_a_rewound_step_truncates_to_it(
        order in shuffled_indices(),
        target in 0..10usize,
    ) {
        let mut game = Game::new();
        for &index in &order {
            game.apply_move(spot(index));
        }

        let target = target % game.snapshot_count();
        game.jump_to(target);
        prop_assume!(game.win().is_none());

        let open = game.board().vacant_spots();
        prop_assume!(!open.is_empty());

        game.apply_move(open[0]);
        prop_assert_eq!(game.snapshot_count(), target + 2);
        prop_assert_eq!(game.step(), target + 1);
    }
}
