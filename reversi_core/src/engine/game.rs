use crate::engine::board::{ApplyMoveError, Board};
use crate::engine::types::{Side, Square};

/// ゲームの状態。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Status {
    /// 終局（双方に合法手なし）。
    GameOver {
        /// コンピュータ側の石数。
        computer: u32,
        /// 人間側の石数。
        player: u32,
    },
    /// 進行中。
    InProgress,
}

/// 終局時の勝敗。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Outcome {
    /// コンピュータ側の勝ち。
    ComputerWins,
    /// 人間側の勝ち。
    PlayerWins,
    /// 引き分け。
    Tie,
}

/// 手の適用に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum PlayError {
    /// すでに終局している。
    GameOver,
    /// 指定マスが合法手ではない。
    IllegalMove,
}

/// 1ゲームの進行を管理する構造体。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Game {
    /// 盤面。
    board: Board,
    /// 手番（終局時は `None`）。
    turn: Option<Side>,
}

impl Game {
    /// 現在の盤面を返す。
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// 初期盤面からゲームを開始する（人間側が先手）。
    #[inline]
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            board: Board::initial(),
            turn: Some(Side::Player),
        }
    }

    /// 終局しているかどうかを返す。
    #[inline]
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        self.turn.is_none()
    }

    /// 終局時の勝敗を返す（進行中は `None`）。
    ///
    /// 勝敗は石数の厳密な大小比較で決める。
    #[inline]
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status() {
            Status::GameOver { computer, player } => {
                if computer > player {
                    Some(Outcome::ComputerWins)
                } else if player > computer {
                    Some(Outcome::PlayerWins)
                } else {
                    Some(Outcome::Tie)
                }
            }
            Status::InProgress => None,
        }
    }

    /// 現手番の1手を適用し、手番を進める。
    ///
    /// 適用後、相手に合法手があれば相手の手番になる。相手に無く自分に
    /// あれば手番は変わらない（相手の強制パス）。双方に無ければ終局する。
    ///
    /// # Errors
    ///
    /// 次の場合にエラーを返す：
    /// - `PlayError::GameOver`: すでにゲームが終局している場合
    /// - `PlayError::IllegalMove`: 指定されたマスが合法手でない場合
    ///
    #[inline]
    pub fn play(&mut self, square: Square) -> Result<Status, PlayError> {
        let side = match self.turn {
            Some(value) => value,
            None => return Err(PlayError::GameOver),
        };

        match self.board.apply_move(square, side) {
            Ok(()) => {}
            Err(ApplyMoveError::IllegalMove) => return Err(PlayError::IllegalMove),
        }

        tracing::debug!(side = ?side, x = square.x(), y = square.y(), "move applied");

        self.turn = next_turn(&self.board, side);
        if self.turn.is_none() {
            let computer = self.board.score_of(Side::Computer);
            let player = self.board.score_of(Side::Player);
            tracing::info!(computer, player, "game over");
        }

        Ok(self.status())
    }

    /// 現手番を返す（終局時は `None`）。
    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Option<Side> {
        self.turn
    }

    /// 現在のゲーム状態を返す。石数は保持せず、その都度数える。
    #[inline]
    #[must_use]
    pub fn status(&self) -> Status {
        if self.turn.is_some() {
            return Status::InProgress;
        }

        Status::GameOver {
            computer: self.board.score_of(Side::Computer),
            player: self.board.score_of(Side::Player),
        }
    }
}

/// 次の手番を決める。
///
/// 盤面は1手ごとに変わるため、過去にパスした側も毎手あらためて判定する。
fn next_turn(board: &Board, mover: Side) -> Option<Side> {
    let opponent = mover.opponent();
    if board.has_any_legal_move(opponent) {
        return Some(opponent);
    }
    if board.has_any_legal_move(mover) {
        return Some(mover);
    }

    None
}
