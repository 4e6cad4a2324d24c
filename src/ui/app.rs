use crate::error::{BoardConfigError, MoveError};
use crate::game::{BoardConfig, GameOutcome, GameState, TurnOutcome};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    config: BoardConfig,
    game_state: GameState,
    selected_pit: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: BoardConfig) -> Result<Self, BoardConfigError> {
        let game_state = GameState::new(config)?;
        let mut app = App {
            config,
            game_state,
            selected_pit: 0,
            should_quit: false,
            message: None,
        };
        app.select_next();
        Ok(app)
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => self.select_previous(),
            KeyCode::Right => self.select_next(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.sow();
            }
            KeyCode::Char('r') => {
                // Config was validated when the app was built
                if let Ok(state) = GameState::new(self.config) {
                    self.game_state = state;
                    self.selected_pit = 0;
                    self.select_next();
                    self.message = Some("New game started!".to_string());
                }
            }
            _ => {}
        }
    }

    /// Move the selection to the next regular pit, wrapping around.
    fn select_next(&mut self) {
        let board = self.game_state.board();
        let mut pit = board.next(self.selected_pit);
        while board.is_store(pit) {
            pit = board.next(pit);
        }
        self.selected_pit = pit;
    }

    fn select_previous(&mut self) {
        let board = self.game_state.board();
        let count = board.pits().len();
        let mut pit = (self.selected_pit + count - 1) % count;
        while board.is_store(pit) {
            pit = (pit + count - 1) % count;
        }
        self.selected_pit = pit;
    }

    /// Sow from the selected pit for the current player
    fn sow(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        let player = self.game_state.current_player();
        self.message = Some(match self.game_state.apply_move(self.selected_pit) {
            Ok(turn) => match self.game_state.outcome() {
                Some(GameOutcome::Winner(winner)) => format!("Player #{} wins!", winner.store()),
                Some(GameOutcome::Draw(_)) => "It's a draw!".to_string(),
                None if turn == TurnOutcome::Continues => {
                    format!("Last stone in the store, player #{} moves again.", player.store())
                }
                None => format!(
                    "Turn over, player #{} to move.",
                    self.game_state.current_player().store()
                ),
            },
            Err(MoveError::EmptyPit { pit }) => format!("Pit {pit} is empty!"),
            Err(err) => format!("Illegal move: {err}"),
        });
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game_state, self.selected_pit, &self.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn app(stones: u32, pits: usize, players: usize) -> App {
        App::new(BoardConfig::new(stones, pits, players)).unwrap()
    }

    #[test]
    fn test_initial_selection_skips_store() {
        let app = app(4, 6, 2);
        assert_eq!(app.selected_pit, 1);
    }

    #[test]
    fn test_rejects_invalid_config() {
        assert!(App::new(BoardConfig::new(4, 0, 2)).is_err());
    }

    #[test]
    fn test_selection_skips_stores_and_wraps() {
        // stores at 0 and 3
        let mut app = app(1, 2, 2);
        assert_eq!(app.selected_pit, 1);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.selected_pit, 2);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.selected_pit, 4);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.selected_pit, 1);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.selected_pit, 5);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.selected_pit, 2);
    }

    #[test]
    fn test_enter_sows_from_selected_pit() {
        let mut app = app(2, 2, 2);
        for _ in 0..3 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_pit, 5);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game_state.board().pit(0).unwrap().stones(), 1);
        assert_eq!(app.game_state.current_player(), Player::from_store(0));
        assert_eq!(
            app.message.as_deref(),
            Some("Last stone in the store, player #0 moves again.")
        );
    }

    #[test]
    fn test_empty_pit_reports_message() {
        let mut app = app(1, 1, 2);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.selected_pit, 3);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message.as_deref(), Some("Pit 3 is empty!"));
    }

    #[test]
    fn test_draw_and_restart() {
        let mut app = app(1, 1, 2);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message.as_deref(), Some("Turn over, player #2 to move."));
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.message.as_deref(), Some("It's a draw!"));

        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.message.as_deref(),
            Some("Game over! Press 'r' to restart.")
        );

        press(&mut app, KeyCode::Char('r'));
        assert!(!app.game_state.is_terminal());
        assert_eq!(app.game_state.board().total_stones(), 2);
        assert_eq!(app.selected_pit, 1);
    }

    #[test]
    fn test_quit_keys() {
        let mut quit_q = app(4, 6, 2);
        press(&mut quit_q, KeyCode::Char('q'));
        assert!(quit_q.should_quit);

        let mut quit_esc = app(4, 6, 2);
        press(&mut quit_esc, KeyCode::Esc);
        assert!(quit_esc.should_quit);
    }
}
