use criterion::{black_box, criterion_group, criterion_main, Criterion};
use minogrid::core::Playfield;
use minogrid::engine::Session;
use minogrid::tictactoe::{Ai, Game, Strategy};
use minogrid::types::{Direction, PieceKind, Rotation};

fn bench_session_hard_drop(c: &mut Criterion) {
    let mut session = Session::seeded(12345);
    session.start();

    c.bench_function("session_hard_drop", |b| {
        b.iter(|| {
            if session.game_over() {
                session.start();
            }
            black_box(session.hard_drop().ok().flatten());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let full = "IIIIIIIIII";
    let mut rows = vec![".........."; 20];
    rows.extend([full; 4]);

    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut field = Playfield::from_rows(&rows).unwrap();
            for y in 20..24 {
                field.clear_row(black_box(y)).unwrap();
            }
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    let mut field = Playfield::default();

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            if field.current().is_some_and(|p| !p.is_deleted()) {
                field.delete_current().unwrap();
            }
            field.spawn(black_box(PieceKind::T));
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut field = Playfield::default();
    field.spawn(PieceKind::J);
    let mut dir = Direction::Right;

    c.bench_function("move_current", |b| {
        b.iter(|| {
            if !field.move_current(black_box(dir)).unwrap() {
                dir = dir.opposite();
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut field = Playfield::default();
    field.spawn(PieceKind::T);
    for _ in 0..8 {
        field.move_current(Direction::Down).unwrap();
    }

    c.bench_function("rotate_current", |b| {
        b.iter(|| {
            field.rotate_current(black_box(Rotation::Right)).unwrap();
        })
    });
}

fn bench_alpha_beta_opening(c: &mut Criterion) {
    let game = Game::new();

    c.bench_function("alpha_beta_opening", |b| {
        b.iter(|| {
            let mut ai = Ai::new(Strategy::AlphaBeta, 1);
            black_box(ai.find_move(&game));
        })
    });
}

criterion_group!(
    benches,
    bench_session_hard_drop,
    bench_line_clear,
    bench_spawn,
    bench_move,
    bench_rotate,
    bench_alpha_beta_opening
);
criterion_main!(benches);
