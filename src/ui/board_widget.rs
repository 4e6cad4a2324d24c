use crate::game::{Board, Player};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const PLAYER_COLORS: [Color; 6] = [
    Color::Green,
    Color::Yellow,
    Color::Magenta,
    Color::Blue,
    Color::Red,
    Color::Cyan,
];

/// Display color for a player, by their position in turn order.
pub fn player_color(board: &Board, player: Player) -> Color {
    board
        .player_index(player)
        .map(|index| PLAYER_COLORS[index % PLAYER_COLORS.len()])
        .unwrap_or(Color::White)
}

/// Render the circle unrolled into three rows: pit ids, stone counts, and a
/// marker under `selected` (if any).
pub fn render_board(frame: &mut Frame, board: &Board, selected: Option<usize>, area: Rect) {
    let mut ids = Vec::new();
    let mut counts = Vec::new();
    let mut marker = Vec::new();

    for pit in board.pits() {
        ids.push(Span::styled(
            format!("{:4}", pit.id()),
            Style::default().fg(Color::DarkGray),
        ));

        let count_style = match pit.owner() {
            Some(owner) => Style::default()
                .fg(player_color(board, owner))
                .add_modifier(Modifier::BOLD),
            None if pit.stones() == 0 => Style::default().fg(Color::DarkGray),
            None => Style::default(),
        };
        counts.push(Span::styled(format!("{:4}", pit.stones()), count_style));

        if selected == Some(pit.id()) {
            marker.push(Span::styled("   ▲", Style::default().fg(Color::Cyan)));
        } else {
            marker.push(Span::raw("    "));
        }
    }

    let widget = Paragraph::new(vec![Line::from(ids), Line::from(counts), Line::from(marker)]);
    frame.render_widget(widget, area);
}
