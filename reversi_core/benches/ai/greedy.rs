//! `reversi_core::ai::greedy` の性能計測（1手選択）。

use core::hint::black_box;
use criterion::BatchSize;
use criterion::BenchmarkId;
use criterion::Criterion;
use reversi_core::ai::types::Ai;
use reversi_core::{ai, engine};

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// 指定手数だけ貪欲AI同士で進めた盤面を返す（途中で終局した場合はその時点で止める）。
fn board_after_plies(plies: u16) -> engine::Board {
    let mut agent = ai::greedy::Agent::new();
    let mut game = engine::Game::initial();

    for _turn in u16::MIN..plies {
        let side = match game.side_to_move() {
            Some(value) => value,
            None => break,
        };

        let mv = agent.select_move(game.board(), side);
        let square = match mv {
            ai::Move::Place(value) => value,
            ai::Move::Pass => break,
            _ => break,
        };

        if game.play(square).is_err() {
            break;
        }
    }

    *game.board()
}

/// ベンチ用に代表盤面をいくつか用意する。
fn board_samples() -> [engine::Board; 3] {
    let b0 = engine::Board::initial();
    let b1 = board_after_plies(8);
    let b2 = board_after_plies(24);
    [b0, b1, b2]
}

/// `greedy::Agent::select_move` を計測する。
fn bench_select_move(criterion: &mut Criterion) {
    let samples = board_samples();
    let mut group = criterion.benchmark_group("ai/greedy/select_move");

    for (index, board) in samples.iter().enumerate() {
        let bench_id = BenchmarkId::new("board", index);
        group.bench_with_input(bench_id, board, |bench, input| {
            bench.iter_batched(
                ai::greedy::Agent::new,
                |mut agent| black_box(agent.select_move(input, engine::Side::Computer)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();
    bench_select_move(&mut criterion);
    criterion.final_summary();
}
