//! SDL で動作する最小 UI（人間 vs コンピュータ）。

use reversi_core::ai::types::Ai;
use reversi_core::{ai, engine};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::pixels::Color as SdlColor;
use sdl2::rect::Rect;
use std::time::Duration;

/// 盤面のオフセット（左上）。
const OFFSET: i32 = 16;

/// 1マスのピクセルサイズ。
const CELL_SIZE: i32 = 64;

/// 盤面の一辺の長さ（マス）。
const BOARD_LEN: i32 = 8;

/// 盤面の一辺の長さ（ピクセル）。
const BOARD_PX: i32 = BOARD_LEN * CELL_SIZE;

/// ウィンドウ幅（ピクセル）。
const WINDOW_W: u32 = (OFFSET + BOARD_PX + OFFSET) as u32;

/// ウィンドウ高さ（ピクセル）。
const WINDOW_H: u32 = (OFFSET + BOARD_PX + OFFSET) as u32;

/// コンピュータの着手前の待ち時間（演出目的の遅延）。
const COMPUTER_DELAY_MS: u64 = 800;

#[derive(Debug)]
struct App {
    agent: ai::greedy::Agent,
    game: engine::Game,
}

impl App {
    fn new() -> Self {
        Self {
            agent: ai::greedy::Agent::new(),
            game: engine::Game::initial(),
        }
    }

    fn is_computer_turn(&self) -> bool {
        matches!(self.game.side_to_move(), Some(engine::Side::Computer))
    }

    fn is_player_turn(&self) -> bool {
        matches!(self.game.side_to_move(), Some(engine::Side::Player))
    }

    fn status_text(&self) -> String {
        let board = self.game.board();
        let computer = board.score_of(engine::Side::Computer);
        let player = board.score_of(engine::Side::Player);

        match self.game.outcome() {
            Some(engine::Outcome::ComputerWins) => {
                format!("GAME OVER: COMPUTER WON | You={player} CPU={computer}")
            }
            Some(engine::Outcome::PlayerWins) => {
                format!("GAME OVER: YOU WON | You={player} CPU={computer}")
            }
            Some(engine::Outcome::Tie) => {
                format!("GAME OVER: IT'S A TIE | You={player} CPU={computer}")
            }
            Some(_) => format!("Game Over | You={player} CPU={computer}"),
            None => {
                let side_text = if self.is_player_turn() {
                    "Your move"
                } else {
                    "Computer move"
                };
                format!("{side_text} | You={player} CPU={computer}")
            }
        }
    }

    fn step_computer_once(&mut self) {
        if !self.is_computer_turn() {
            return;
        }

        let mv = self
            .agent
            .select_move(self.game.board(), engine::Side::Computer);
        let square = match mv {
            ai::Move::Place(value) => value,
            ai::Move::Pass => return,
            _ => return,
        };

        let play_result = self.game.play(square);
        let _: Result<engine::GameStatus, engine::PlayError> = play_result;
    }

    fn try_human_click(&mut self, x: i32, y: i32) -> bool {
        if !self.is_player_turn() {
            return false;
        }

        let file = x - OFFSET;
        let rank = y - OFFSET;
        if file < 0 || rank < 0 {
            return false;
        }

        // マス領域の整数除算でヒット判定する（盤外クリックはここで落ちる）。
        let xx = file / CELL_SIZE;
        let yy = rank / CELL_SIZE;
        if !(0..BOARD_LEN).contains(&xx) || !(0..BOARD_LEN).contains(&yy) {
            return false;
        }

        let x_u8 = match u8::try_from(xx) {
            Ok(value) => value,
            Err(_err) => return false,
        };
        let y_u8 = match u8::try_from(yy) {
            Ok(value) => value,
            Err(_err) => return false,
        };

        let square = match engine::Square::from_xy(x_u8, y_u8) {
            Some(value) => value,
            None => return false,
        };

        // 非合法手は拒否されるだけで、そのまま次の入力を待つ。
        let play_result = self.game.play(square);
        play_result.is_ok()
    }
}

fn draw_board(canvas: &mut sdl2::render::Canvas<sdl2::video::Window>, app: &App) {
    let board = app.game.board();
    let highlight = app.is_player_turn();

    canvas.set_draw_color(SdlColor::RGB(16, 16, 16));
    canvas.clear();

    // マス。
    for y in 0..BOARD_LEN {
        for x in 0..BOARD_LEN {
            let xx = OFFSET + x * CELL_SIZE;
            let yy = OFFSET + y * CELL_SIZE;
            let rect = Rect::new(xx, yy, CELL_SIZE as u32, CELL_SIZE as u32);

            canvas.set_draw_color(SdlColor::RGB(40, 40, 40));
            let _: Result<(), String> = canvas.fill_rect(rect);

            canvas.set_draw_color(SdlColor::RGB(0, 0, 0));
            let _: Result<(), String> = canvas.draw_rect(rect);

            let x_u8 = match u8::try_from(x) {
                Ok(value) => value,
                Err(_err) => continue,
            };
            let y_u8 = match u8::try_from(y) {
                Ok(value) => value,
                Err(_err) => continue,
            };
            let square = match engine::Square::from_xy(x_u8, y_u8) {
                Some(value) => value,
                None => continue,
            };

            if highlight && board.is_legal_move(square, engine::Side::Player) {
                let inset = CELL_SIZE / 3;
                let hint_rect = Rect::new(
                    xx + inset,
                    yy + inset,
                    (CELL_SIZE - inset * 2) as u32,
                    (CELL_SIZE - inset * 2) as u32,
                );
                canvas.set_draw_color(SdlColor::RGB(224, 224, 224));
                let _: Result<(), String> = canvas.fill_rect(hint_rect);
            }

            // 石（人間＝緑、コンピュータ＝赤）。
            let (color, present) = match board.cell_at(square) {
                engine::Cell::Stone(engine::Side::Player) => (SdlColor::RGB(0, 192, 0), true),
                engine::Cell::Stone(engine::Side::Computer) => (SdlColor::RGB(192, 0, 0), true),
                engine::Cell::Stone(_) => (SdlColor::RGB(0, 0, 0), false),
                engine::Cell::Empty | engine::Cell::Border => (SdlColor::RGB(0, 0, 0), false),
                _ => (SdlColor::RGB(0, 0, 0), false),
            };
            if present {
                let inset = CELL_SIZE / 8;
                let stone_rect = Rect::new(
                    xx + inset,
                    yy + inset,
                    (CELL_SIZE - inset * 2) as u32,
                    (CELL_SIZE - inset * 2) as u32,
                );
                canvas.set_draw_color(color);
                let _: Result<(), String> = canvas.fill_rect(stone_rect);
            }
        }
    }
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt().json().init();

    let sdl = sdl2::init()?;
    let video = sdl.video()?;

    let window = video
        .window("reversi", WINDOW_W, WINDOW_H)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window
        .into_canvas()
        .present_vsync()
        .accelerated()
        .build()
        .map_err(|e| e.to_string())?;

    let mut app = App::new();
    let mut event_pump = sdl.event_pump()?;

    let draw_and_present = |canvas: &mut sdl2::render::Canvas<sdl2::video::Window>, app: &App| {
        let title = app.status_text();
        let _ = canvas.window_mut().set_title(&title);
        draw_board(canvas, app);
        canvas.present();
    };

    'running: loop {
        let mut did_human_move = false;

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => break 'running,
                Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'running,
                Event::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    x,
                    y,
                    ..
                } => did_human_move |= app.try_human_click(x, y),
                _ => {}
            }
        }

        if did_human_move {
            // 人間の手を打った直後に一度描画更新する。
            draw_and_present(&mut canvas, &app);

            // コンピュータの着手は速すぎるので、少し待ってから打って再描画する。
            if app.is_computer_turn() {
                std::thread::sleep(Duration::from_millis(COMPUTER_DELAY_MS));
                app.step_computer_once();
            }
        } else {
            // 人間側が強制パスした直後などは、ここでコンピュータが打つ。
            app.step_computer_once();
        }

        draw_and_present(&mut canvas, &app);
    }

    Ok(())
}
