//! Tests for the automated opponent's priority policy.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe_duel::{CORNERS, EDGES, Grid, Mark, MoveError, MoveSelector, Reason, Selection};

fn pick(grid: &str, me: Mark, seed: u64) -> Selection {
    let grid: Grid = grid.parse().unwrap();
    let mut rng = StdRng::seed_from_u64(seed);
    MoveSelector
        .select(&grid, me, me.opponent(), &mut rng)
        .unwrap()
}

#[test]
fn test_completes_own_line() {
    let selection = pick("XX.......", Mark::X, 0);
    assert_eq!(selection, Selection { index: 2, reason: Reason::Win });
}

#[test]
fn test_blocks_opponent_line() {
    let selection = pick("OO.......", Mark::X, 0);
    assert_eq!(selection, Selection { index: 2, reason: Reason::Block });
}

#[test]
fn test_takes_center_on_empty_grid() {
    for seed in 0..50 {
        assert_eq!(pick(".........", Mark::X, seed).index, 4);
    }
}

#[test]
fn test_corner_only_among_empty_corners() {
    // Center taken, no threats, corner 0 taken.
    let grid = "X...O....";
    for seed in 0..100 {
        let selection = pick(grid, Mark::O, seed);
        assert_eq!(selection.reason, Reason::Corner);
        assert!([2, 6, 8].contains(&selection.index), "picked {}", selection.index);
        assert!(CORNERS.contains(&selection.index));
    }
}

#[test]
fn test_corner_choice_reproducible_with_seed() {
    let grid: Grid = "....X....".parse().unwrap();
    let run = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..20)
            .map(|_| MoveSelector.select(&grid, Mark::O, Mark::X, &mut rng).unwrap().index)
            .collect::<Vec<_>>()
    };

    assert_eq!(run(42), run(42));
    assert!(run(42).iter().all(|index| CORNERS.contains(index)));
}

#[test]
fn test_edge_when_corners_and_center_taken() {
    // X O X / . X . / O X O: corners and center full, nothing to finish or block.
    let selection = pick("XOX.X.OXO", Mark::O, 3);
    assert!(EDGES.contains(&selection.index));
    assert!([3, 5].contains(&selection.index));
    assert_eq!(selection.reason, Reason::Edge);
}

#[test]
fn test_no_move_on_full_grid() {
    let grid: Grid = "XOXXOOOXX".parse().unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        MoveSelector.select(&grid, Mark::O, Mark::X, &mut rng),
        Err(MoveError::NoMoveAvailable)
    );
}
