//! 結合テスト: 貪欲AI同士の対戦が終局まで進むことを確認する。

/// 統合テスト本体。
#[cfg(test)]
mod tests {
    use reversi_core::ai::types::Ai;
    use reversi_core::{ai, engine};

    /// 貪欲AI同士で1ゲームを終局まで進め、終局時の石数と手数を返す。
    fn play_game_greedy_vs_greedy() -> (u32, u32, u16) {
        let mut agent = ai::greedy::Agent::new();
        let mut game = engine::Game::initial();
        let mut plies = u16::MIN;

        // 盤面は最大60手（最初の4石を除く）で埋まる。パスは自動処理なので余裕を見て回す。
        for _turn in u16::MIN..200 {
            let side = match game.side_to_move() {
                Some(value) => value,
                None => break,
            };

            let mv = agent.select_move(game.board(), side);
            assert!(
                matches!(mv, ai::Move::Place(_)),
                "side to move must have a legal move, got={mv:?}"
            );
            let square = match mv {
                ai::Move::Place(value) => value,
                ai::Move::Pass => break,
                _ => break,
            };

            let play_result = game.play(square);
            assert!(play_result.is_ok(), "play must succeed, got={play_result:?}");
            plies = plies.wrapping_add(1);
        }

        let status = game.status();
        assert!(
            matches!(status, engine::GameStatus::GameOver { .. }),
            "game did not finish within turn limit, status={status:?}"
        );

        match status {
            engine::GameStatus::GameOver { computer, player } => (computer, player, plies),
            engine::GameStatus::InProgress => (u32::MIN, u32::MIN, plies),
            _ => (u32::MIN, u32::MIN, plies),
        }
    }

    /// 貪欲AIが初期盤面で合法手のみ選ぶことを確認する。
    #[test]
    fn greedy_selects_legal_move() {
        let board = engine::Board::initial();
        let mut agent = ai::greedy::Agent::new();

        let mv = agent.select_move(&board, engine::Side::Computer);
        assert!(
            matches!(mv, ai::Move::Place(_)),
            "greedy must not pass in initial position, got={mv:?}"
        );
        let square = match mv {
            ai::Move::Place(value) => value,
            ai::Move::Pass => return,
            _ => return,
        };

        assert!(
            board.is_legal_move(square, engine::Side::Computer),
            "greedy must select a legal move, got={square:?}"
        );
    }

    /// 貪欲AI同士で終局まで進み、石数と手数が上限に収まることを確認する。
    #[test]
    fn greedy_vs_greedy_finishes() {
        let (computer, player, plies) = play_game_greedy_vs_greedy();

        let total_opt = computer.checked_add(player);
        assert!(total_opt.is_some(), "computer+player must not overflow");

        let total = match total_opt {
            Some(value) => value,
            None => return,
        };

        assert!(total <= 64, "total stones must be <= 64, got={total}");
        assert!(plies <= 60, "total placements must be <= 60, got={plies}");
    }

    /// 終局時の勝敗が石数の大小と一致することを確認する。
    #[test]
    fn outcome_matches_final_counts() {
        let mut agent = ai::greedy::Agent::new();
        let mut game = engine::Game::initial();

        for _turn in u16::MIN..200 {
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

        assert!(game.is_game_over(), "game must reach a terminal state");

        let computer = game.board().score_of(engine::Side::Computer);
        let player = game.board().score_of(engine::Side::Player);
        let expected = if computer > player {
            engine::Outcome::ComputerWins
        } else if player > computer {
            engine::Outcome::PlayerWins
        } else {
            engine::Outcome::Tie
        };

        assert_eq!(game.outcome(), Some(expected));
    }
}
