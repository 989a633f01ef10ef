#[cfg(feature = "std")]
#[cfg(test)]
mod cli_tests {
    use std::io::{self, Cursor, Write};

    use minefield::{
        Board, CellStatus, CliController, Controller, Game, GameError, GameMode, GameStatus,
        Player, Position, Selection,
    };

    /// Terminal whose output side has gone away.
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn cli(input: &str) -> CliController<Cursor<Vec<u8>>, Vec<u8>> {
        CliController::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn written(cli: &CliController<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8_lossy(cli.output()).into_owned()
    }

    #[test]
    fn test_position_reprompts_until_open_cell() {
        let mut board = Board::new(3, 3);
        board.mutate_cell(1, 1, |s| *s |= CellStatus::DISABLED);
        let mut cli = cli("hello\n1\n0 1\n4 1\n2 2\n3 1\n");

        let pos = cli.prompt_position("Mine location", &board).unwrap();

        assert_eq!(pos, Position::new(2, 0));
        let out = written(&cli);
        assert_eq!(out.matches("Invalid input.").count(), 2);
        assert_eq!(out.matches("Position invalid or already used.").count(), 3);
        assert!(out.contains("Mine location --> [column] [row]"));
    }

    #[test]
    fn test_dimension_and_mine_count_ranges() {
        let mut cli = cli("x\n9\n3\n0\n6\nfive\n5\n");
        assert_eq!(cli.request_dimension("Board Width", 2, 4).unwrap(), 3);
        let board = Board::new(3, 3);
        assert_eq!(cli.request_mine_count(&board).unwrap(), 5);

        let out = written(&cli);
        assert!(out.contains("Board Width (2-4)"));
        assert!(out.contains("Please enter a value between 2 and 4."));
        assert!(out.contains("Please enter a value between 1 and 5."));
        assert_eq!(out.matches("Please enter a number.").count(), 2);
    }

    #[test]
    fn test_menu_and_replay() {
        let mut cli = cli("7\n2\n3\nmaybe\nn\ny\n");
        assert_eq!(cli.choose_game_mode().unwrap(), Some(GameMode::TwoPlayer));
        assert_eq!(cli.choose_game_mode().unwrap(), None);
        assert!(!cli.ask_play_again().unwrap());
        assert!(cli.ask_play_again().unwrap());
        assert!(written(&cli).contains("Invalid option. Enter 1, 2, or 3."));
        assert!(written(&cli).contains("Invalid entry."));
    }

    #[test]
    fn test_end_of_input_is_reported() {
        let mut cli = cli("abc\n");
        let board = Board::new(2, 2);
        assert!(matches!(
            cli.prompt_position("Guess position", &board),
            Err(GameError::InputClosed)
        ));
        assert!(matches!(cli.choose_game_mode(), Err(GameError::InputClosed)));
    }

    #[test]
    fn test_hot_seat_round_over_cli() {
        let mut game = Game::new(
            Board::new(2, 2),
            Player::human("Player 1", 1),
            Player::human("Player 2", 1),
        );
        // Player 2 aims off the board once while guessing.
        let mut p1 = cli("1 1\n2 2\n");
        let mut p2 = cli("2 1\n3 3\n1 2\n");

        let report = game.play_round([&mut p1, &mut p2]).unwrap();

        assert!(report.hits[0].is_empty());
        assert!(report.hits[1].is_empty());
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(written(&p1).contains("=== PLACEMENT PHASE ==="));
        assert!(written(&p1).contains("=== TURN: Player 1 ==="));
        assert!(written(&p2).contains("=== GUESSING PHASE ==="));
        assert!(written(&p2).contains("Position invalid or already used."));
        assert_eq!(game.board().available_positions().count(), 2);
    }

    #[test]
    fn test_write_failure_in_hook_surfaces_at_next_prompt() {
        let mut cli = CliController::new(Cursor::new(b"1 1\n".to_vec()), BrokenPipe);
        let player = Player::human("Player 1", 1);
        let board = Board::new(2, 2);

        cli.begin_turn(&player, Selection::Mines);
        cli.handle_duplicate(&player, Position::new(0, 0));

        assert!(matches!(
            cli.request_position(&player, Selection::Mines, &board),
            Err(GameError::Io(_))
        ));
    }
}
