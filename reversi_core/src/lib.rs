//! Reversi (Othello) core logic.
//!
//! このクレートは盤面とゲーム進行を管理する `engine` と、コンピュータ側の手を選択する `ai` を提供します。
//! UI（`sdl`）から利用されることを想定しています。

#![forbid(unsafe_code)]

/// ゲームルール・盤面・進行を提供するモジュール。
pub mod engine;

/// AI（手選択アルゴリズム）を提供するモジュール。
pub mod ai;
