/// 対局者（手番の側）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Side {
    /// コンピュータ側。
    Computer,
    /// 人間側。
    Player,
}

impl Side {
    /// 相手側を返す。
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Computer => Self::Player,
            Self::Player => Self::Computer,
        }
    }
}

/// 盤面のマスの状態。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Cell {
    /// 番兵（盤外）。初期化後は変化しない。
    Border,
    /// 空きマス。
    Empty,
    /// いずれかの側の石。
    Stone(
        /// 石の持ち主。
        Side,
    ),
}

/// 盤面上のマス（0始まりの論理座標）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Square {
    /// x 座標（0..=7）。
    x: u8,
    /// y 座標（0..=7）。
    y: u8,
}

impl Square {
    /// 盤の一辺の長さ。
    pub const BOARD_LEN: u8 = 8;

    /// 盤面座標（x, y）から `Square` を生成する。
    #[inline]
    #[must_use]
    pub const fn from_xy(x: u8, y: u8) -> Option<Self> {
        if x >= Self::BOARD_LEN || y >= Self::BOARD_LEN {
            return None;
        }

        Some(Self { x, y })
    }

    /// x 座標（0..=7）を返す。
    #[inline]
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// y 座標（0..=7）を返す。
    #[inline]
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }
}
