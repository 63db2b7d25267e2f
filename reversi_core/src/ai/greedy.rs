use crate::ai::types::{Ai, Move};
use crate::engine::board::Board;
use crate::engine::types::{Side, Square};

/// その時点の反転数だけを最大化する貪欲AI。
///
/// 1手先のみを評価し、位置の価値（角・辺・モビリティ）は考慮しない。
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct Agent;

impl Agent {
    /// 貪欲AIを生成する。
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Ai for Agent {
    #[inline]
    fn select_move(&mut self, board: &Board, side: Side) -> Move {
        let mut best_score = usize::MIN;
        let mut best_square = None;

        for y in u8::MIN..Square::BOARD_LEN {
            for x in u8::MIN..Square::BOARD_LEN {
                let square = match Square::from_xy(x, y) {
                    Some(value) => value,
                    None => continue,
                };

                // 厳密な大小比較なので、同点では走査順で先のマスが残る。
                let score = board.capture_score(square, side);
                if score > best_score {
                    best_score = score;
                    best_square = Some(square);
                }
            }
        }

        match best_square {
            Some(square) => Move::Place(square),
            None => Move::Pass,
        }
    }
}
