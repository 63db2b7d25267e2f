/// その時点で最も多く石を取れるマスを選ぶAI。
pub mod greedy;
pub mod types;

pub type Move = types::Move;
