//! `reversi_core::engine` の性能計測（着手適用、合法手判定）。

use core::hint::black_box;
use criterion::BatchSize;
use criterion::Criterion;
use reversi_core::engine;

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// 初期盤面での代表的な合法手（人間側）を返す。
const fn initial_player_move_square() -> Option<engine::Square> {
    engine::Square::from_xy(5, 3)
}

/// `Board::apply_move` を計測する。
fn bench_apply_move(criterion: &mut Criterion) {
    let square_opt = initial_player_move_square();
    let square = match square_opt {
        Some(value) => value,
        None => return,
    };

    criterion.bench_function("engine/apply_move_initial", |bench| {
        bench.iter_batched(
            engine::Board::initial,
            |mut board| black_box(board.apply_move(square, engine::Side::Player)),
            BatchSize::SmallInput,
        );
    });
}

/// `Board::has_any_legal_move` を計測する。
fn bench_has_any_legal_move(criterion: &mut Criterion) {
    let board = engine::Board::initial();

    criterion.bench_function("engine/has_any_legal_move_initial", |bench| {
        bench.iter(|| black_box(board.has_any_legal_move(engine::Side::Player)));
    });
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();

    bench_apply_move(&mut criterion);
    bench_has_any_legal_move(&mut criterion);

    criterion.final_summary();
}
