use crate::engine::types::{Cell, Side, Square};

/// 盤の一辺の長さ（マス）。
const BOARD_LEN: usize = 8;

/// 8方向の単位ベクトル（dx, dy）。
/// 採点と反転が常に同じ方向順で走査するよう、固定順で保持する。
const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// 番兵込みの物理的な一辺の長さ。
const GRID_LEN: usize = BOARD_LEN.wrapping_add(2);

/// 番兵込みの物理格子。`cells[y][x]` の順で添字を取る。
type Grid = [[Cell; GRID_LEN]; GRID_LEN];

/// 盤面（番兵付き配列）。
///
/// 論理 8x8 の外側を `Cell::Border` の番兵が1周囲んでおり、
/// 8方向の走査は境界チェックなしで必ず番兵上で停止する。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Board {
    /// 物理格子。
    cells: Grid,
}

/// 着手の適用に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ApplyMoveError {
    /// 指定マスが合法手ではない。
    IllegalMove,
}

impl Board {
    /// 着手を適用する（挟んだ石をすべて反転し、着手マスに石を置く）。
    ///
    /// # Errors
    ///
    /// 指定されたマスが合法手でない場合、`ApplyMoveError::IllegalMove` を返す。
    ///
    #[inline]
    pub fn apply_move(&mut self, square: Square, side: Side) -> Result<(), ApplyMoveError> {
        if self.capture_score(square, side) == usize::MIN {
            return Err(ApplyMoveError::IllegalMove);
        }

        let (x, y) = physical(square);
        for (dx, dy) in DIRECTIONS {
            if capture_len(&self.cells, x, y, dx, dy, side) == usize::MIN {
                continue;
            }

            // 挟まれた相手の石を、自分の石（アンカー）の手前まで反転する。
            let mut cx = step(x, dx);
            let mut cy = step(y, dy);
            while self.cells[cy][cx] == Cell::Stone(side.opponent()) {
                self.cells[cy][cx] = Cell::Stone(side);
                cx = step(cx, dx);
                cy = step(cy, dy);
            }
        }

        self.cells[y][x] = Cell::Stone(side);
        Ok(())
    }

    /// 指定マスに着手した場合に反転できる石の総数を返す。
    ///
    /// 空きマス以外（石のあるマス）は常に0。0より大きいことが合法手の定義。
    #[inline]
    #[must_use]
    pub fn capture_score(&self, square: Square, side: Side) -> usize {
        if self.cell_at(square) != Cell::Empty {
            return usize::MIN;
        }

        let (x, y) = physical(square);
        let mut total = usize::MIN;
        for (dx, dy) in DIRECTIONS {
            total = total.saturating_add(capture_len(&self.cells, x, y, dx, dy, side));
        }
        total
    }

    /// 指定マスの状態を返す。
    #[inline]
    #[must_use]
    pub fn cell_at(&self, square: Square) -> Cell {
        let (x, y) = physical(square);
        self.cells[y][x]
    }

    /// 番兵と空きマスだけの盤面を返す。
    const fn empty() -> Self {
        let mut cells = [[Cell::Empty; GRID_LEN]; GRID_LEN];

        let mut i = usize::MIN;
        while i < GRID_LEN {
            cells[i][usize::MIN] = Cell::Border;
            cells[usize::MIN][i] = Cell::Border;
            cells[i][GRID_LEN.wrapping_sub(1)] = Cell::Border;
            cells[GRID_LEN.wrapping_sub(1)][i] = Cell::Border;
            i = i.wrapping_add(1);
        }

        Self { cells }
    }

    /// 盤面を任意の石配置から生成する（テスト向け）。
    ///
    /// 座標は論理座標（0..=7）。盤外の座標は無視する。
    #[cfg(test)]
    pub(crate) fn from_stones(player: &[(u8, u8)], computer: &[(u8, u8)]) -> Self {
        let mut board = Self::empty();

        for &(x, y) in player {
            if let Some(square) = Square::from_xy(x, y) {
                let (px, py) = physical(square);
                board.cells[py][px] = Cell::Stone(Side::Player);
            }
        }
        for &(x, y) in computer {
            if let Some(square) = Square::from_xy(x, y) {
                let (px, py) = physical(square);
                board.cells[py][px] = Cell::Stone(Side::Computer);
            }
        }

        board
    }

    /// 指定した側に合法手が1つでもあるかを返す。
    #[inline]
    #[must_use]
    pub fn has_any_legal_move(&self, side: Side) -> bool {
        for y in u8::MIN..Square::BOARD_LEN {
            for x in u8::MIN..Square::BOARD_LEN {
                let square = match Square::from_xy(x, y) {
                    Some(value) => value,
                    None => continue,
                };
                if self.capture_score(square, side) != usize::MIN {
                    return true;
                }
            }
        }

        false
    }

    /// 初期盤面を返す（中央2x2に両者2石ずつの対角配置）。
    #[inline]
    #[must_use]
    pub const fn initial() -> Self {
        let mut board = Self::empty();

        // 物理インデックスでの中央左上（論理 (3, 3)）。
        let mid = BOARD_LEN.wrapping_div(2);
        board.cells[mid][mid] = Cell::Stone(Side::Player);
        board.cells[mid][mid.wrapping_add(1)] = Cell::Stone(Side::Computer);
        board.cells[mid.wrapping_add(1)][mid] = Cell::Stone(Side::Computer);
        board.cells[mid.wrapping_add(1)][mid.wrapping_add(1)] = Cell::Stone(Side::Player);

        board
    }

    /// 指定マスが合法手かどうかを返す。
    #[inline]
    #[must_use]
    pub fn is_legal_move(&self, square: Square, side: Side) -> bool {
        self.capture_score(square, side) != usize::MIN
    }

    /// 指定した側の石数を返す。
    #[inline]
    #[must_use]
    pub fn score_of(&self, side: Side) -> u32 {
        let mut score = u32::MIN;
        for y in u8::MIN..Square::BOARD_LEN {
            for x in u8::MIN..Square::BOARD_LEN {
                let square = match Square::from_xy(x, y) {
                    Some(value) => value,
                    None => continue,
                };
                if self.cell_at(square) == Cell::Stone(side) {
                    score = score.wrapping_add(1);
                }
            }
        }

        score
    }
}

/// 1方向の走査で反転できる石数を返す。
///
/// (x, y) の1歩先から (dx, dy) 方向へ進み、相手の石が連続したあとに
/// 自分の石（アンカー）へ到達した場合のみ、その連続数を返す。
/// 最初のマスが空き・番兵のとき、連続の途中で空き・番兵に出たとき、
/// および1石も挟まず自分の石に隣接しているときは0を返す。
fn capture_len(cells: &Grid, x: usize, y: usize, dx: i8, dy: i8, side: Side) -> usize {
    let mut count = usize::MIN;
    let mut cx = step(x, dx);
    let mut cy = step(y, dy);

    loop {
        match cells[cy][cx] {
            Cell::Border | Cell::Empty => return usize::MIN,
            Cell::Stone(owner) => {
                if owner == side {
                    return count;
                }
                count = count.saturating_add(1);
            }
        }

        cx = step(cx, dx);
        cy = step(cy, dy);
    }
}

/// 論理座標を番兵込みの物理インデックス（x, y）へ変換する。
fn physical(square: Square) -> (usize, usize) {
    let x = usize::from(square.x()).wrapping_add(1);
    let y = usize::from(square.y()).wrapping_add(1);
    (x, y)
}

/// 物理インデックスを方向成分ぶんだけ進める。
/// 走査は番兵上で必ず停止するため、格子の外へは出ない。
fn step(index: usize, delta: i8) -> usize {
    match index.checked_add_signed(isize::from(delta)) {
        Some(value) => value,
        None => usize::MIN,
    }
}
