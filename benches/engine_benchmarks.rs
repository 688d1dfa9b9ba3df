//! Benchmarks for move generation, evaluation and search.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_ai::board::{search, Board, Color, Position, SearchConfig};

const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";
const ENDGAME: &str = "8/5k2/3p4/1p1Pp2p/pP2Pp1P/P4P1K/8/8 b - - 99 50";

fn positions() -> Vec<(&'static str, Position)> {
    let mut out = vec![("startpos", Position::new())];
    for (name, fen) in [("middlegame", MIDDLEGAME), ("endgame", ENDGAME)] {
        if let Ok(pos) = Position::from_fen(fen) {
            out.push((name, pos));
        }
    }
    out
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");
    for (name, pos) in positions() {
        let mut board = pos.board.clone();
        group.bench_function(name, |b| {
            b.iter(|| black_box(board.generate_legal_moves(pos.side_to_move)))
        });
    }
    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    for (name, pos) in positions() {
        group.bench_function(name, |b| b.iter(|| black_box(pos.board.evaluate())));
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);
    let board = Board::new();
    for depth in 1..=3 {
        let config = SearchConfig::depth(depth);
        group.bench_with_input(BenchmarkId::new("startpos", depth), &config, |b, config| {
            b.iter(|| black_box(search(&board, Color::White, config)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_movegen, bench_evaluate, bench_search);
criterion_main!(benches);
