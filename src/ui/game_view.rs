use crate::game::{GameOutcome, GameState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::{player_color, render_board};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_pit: usize,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                         // Header
            Constraint::Length(5),                         // Board
            Constraint::Length(scores_height(game_state)), // Scores
            Constraint::Length(3),                         // Message
            Constraint::Min(3),                            // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, chunks[0]);
    render_pits(frame, game_state, selected_pit, chunks[1]);
    render_scores(frame, game_state, chunks[2]);
    render_message(frame, message, chunks[3]);
    render_controls(frame, chunks[4]);
}

/// One line per player plus the block borders.
fn scores_height(game_state: &GameState) -> u16 {
    u16::try_from(game_state.board().stores().len())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}

fn render_header(frame: &mut Frame, game_state: &GameState, area: Rect) {
    let board = game_state.board();
    let (status, color) = match game_state.outcome() {
        Some(GameOutcome::Winner(player)) => (
            format!("Game Over  |  Player #{} wins", player.store()),
            player_color(board, *player),
        ),
        Some(GameOutcome::Draw(_)) => ("Game Over  |  Draw".to_string(), Color::White),
        None => {
            let player = game_state.current_player();
            (
                format!("Current Player: #{}", player.store()),
                player_color(board, player),
            )
        }
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Kalaha"));

    frame.render_widget(header, area);
}

fn render_pits(frame: &mut Frame, game_state: &GameState, selected_pit: usize, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Pits");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let selected = (!game_state.is_terminal()).then_some(selected_pit);
    render_board(frame, game_state.board(), selected, inner);
}

fn render_scores(frame: &mut Frame, game_state: &GameState, area: Rect) {
    let board = game_state.board();
    let current = game_state.current_player();

    let lines: Vec<Line> = board
        .scores()
        .into_iter()
        .map(|(player, stones)| {
            let marker = if !game_state.is_terminal() && player == current {
                "▶ "
            } else {
                "  "
            };
            Line::from(vec![
                Span::raw(marker),
                Span::styled(
                    format!("Player #{}", player.store()),
                    Style::default().fg(player_color(board, player)),
                ),
                Span::raw(format!(": {stones}")),
            ])
        })
        .collect();

    let scores = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Stores"));
    frame.render_widget(scores, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(Line::from(
        "←/→: Select pit  |  Enter: Sow  |  R: Restart  |  Q: Quit",
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
