use crate::engine::board::Board;
use crate::engine::types::{Side, Square};

/// AIが選択する手。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Move {
    /// パス（合法手なし）。
    Pass,
    /// 指定マスへ着手。
    Place(Square),
}

/// 手を選択するAI。
pub trait Ai {
    /// 現在の盤面から `side` の次の手を選択する。
    fn select_move(&mut self, board: &Board, side: Side) -> Move;
}
