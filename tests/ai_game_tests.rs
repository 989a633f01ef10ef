use minefield::{random_open_position, Board, CellStatus, GameError, Position};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_random_position_is_always_open() {
    let mut rng = SmallRng::seed_from_u64(123);
    let mut board = Board::new(4, 4);
    for (c, r) in [(0, 0), (1, 1), (2, 2), (3, 3), (0, 3)] {
        board.mutate_cell(c, r, |s| *s |= CellStatus::DISABLED);
    }
    for _ in 0..500 {
        let pos = random_open_position(&board, &mut rng).unwrap();
        assert!(board.is_open(pos));
    }
}

#[test]
fn test_random_position_covers_open_cells() {
    let mut rng = SmallRng::seed_from_u64(5);
    let board = Board::new(2, 2);
    let mut seen = [[0u32; 2]; 2];
    for _ in 0..400 {
        let Position { column, row } = random_open_position(&board, &mut rng).unwrap();
        seen[column][row] += 1;
    }
    for counts in seen {
        for n in counts {
            assert!(n > 50, "cell drawn only {} times", n);
        }
    }
}

#[test]
fn test_random_position_on_closed_board() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut board = Board::new(2, 2);
    for p in board.positions().collect::<Vec<_>>() {
        board.mutate_cell(p.column, p.row, |s| *s |= CellStatus::DISABLED);
    }
    assert!(matches!(
        random_open_position(&board, &mut rng),
        Err(GameError::NoAvailableCell)
    ));
}
