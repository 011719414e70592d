//! Tic-tac-toe tests - computer players against each other

use minogrid::tictactoe::{Ai, Arena, Board, Game, Mark, Outcome, Strategy};

fn perfect() -> impl Iterator<Item = Strategy> {
    Strategy::ALL.into_iter().filter(Strategy::is_perfect)
}

#[test]
fn test_perfect_players_always_draw() {
    for o in perfect() {
        for x in perfect() {
            let mut arena = Arena::new(Ai::new(o, 1), Ai::new(x, 2));
            let result = arena.run(1).unwrap();
            assert_eq!(result.draws, 1, "{o} vs {x}");
        }
    }
}

#[test]
fn test_perfect_players_never_lose_to_random() {
    for strategy in perfect() {
        let mut as_o = Arena::new(Ai::new(strategy, 3), Ai::new(Strategy::Random, 4));
        assert_eq!(as_o.run(5).unwrap().x_wins, 0, "{strategy} as O");

        let mut as_x = Arena::new(Ai::new(Strategy::Random, 5), Ai::new(strategy, 6));
        assert_eq!(as_x.run(5).unwrap().o_wins, 0, "{strategy} as X");
    }
}

#[test]
fn test_arena_tally_adds_up() {
    let mut arena = Arena::new(Ai::new(Strategy::Random, 7), Ai::new(Strategy::Winning, 8));
    let result = arena.run(25).unwrap();
    assert_eq!(result.games(), 25);
    let total = result.o_win_rate() + result.x_win_rate() + result.draw_rate();
    assert!((total - 100.0).abs() < 1e-9);
}

#[test]
fn test_perfect_player_avoids_fork() {
    // X holds opposite corners against O in the centre after O's reply;
    // O must take an edge, not a corner.
    let board = Board::from_rows(["X..", ".O.", "..X"]).unwrap();
    let game = Game::from_board(board);
    assert_eq!(game.turn(), Mark::O);
    let (x, y) = Ai::new(Strategy::AlphaBeta, 1).find_move(&game).unwrap();
    assert!(x == 1 || y == 1, "O played corner ({x}, {y})");
}

#[test]
fn test_human_style_game_against_ai() {
    let mut game = Game::new();
    let mut ai = Ai::new(Strategy::Ultimate, 1);
    game.play(1, 1).unwrap();
    while !game.is_over() {
        let (x, y) = ai.find_move(&game).unwrap();
        if game.play(x, y).unwrap() != Outcome::InProgress {
            break;
        }
        let (x, y) = game.board().legal_moves()[0];
        game.play(x, y).unwrap();
    }
    assert_ne!(game.outcome(), Outcome::Won(Mark::O));
}
