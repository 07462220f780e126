//! TUI rendering with ratatui

use super::app::App;
use crate::core::{LetterVerdict, MAX_ATTEMPTS};
use crate::game::{KEYBOARD_ROWS, Mode, Tile};
use crate::storage::Storage;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

/// Main UI rendering function
pub fn ui<S: Storage>(f: &mut Frame, app: &App<'_, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Board
            Constraint::Length(1), // Toast
            Constraint::Length(5), // Keyboard
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_board(f, app, chunks[1]);
    render_toast(f, app, chunks[2]);
    render_keyboard(f, app, chunks[3]);
    render_status(f, app, chunks[4]);

    if app.game.show_stats() {
        render_stats_popup(f, app, f.area());
    }
}

fn verdict_style(verdict: LetterVerdict) -> Style {
    match verdict {
        LetterVerdict::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        LetterVerdict::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        LetterVerdict::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterVerdict::Pending => Style::default().fg(Color::White),
        LetterVerdict::Empty => Style::default().fg(Color::DarkGray),
    }
    .add_modifier(Modifier::BOLD)
}

fn render_header<S: Storage>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let config = app.game.config();
    let title = match config.mode {
        Mode::Daily => format!("LETRECO #{}", app.game.day_number()),
        Mode::Practice => "LETRECO · treino".to_string(),
    };
    let header = Paragraph::new(format!("{title} ({} letras)", config.word_length))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile_span(tile: Tile, selected: bool) -> Span<'static> {
    let mut style = verdict_style(tile.verdict);
    if selected {
        style = style.add_modifier(Modifier::UNDERLINED | Modifier::REVERSED);
    }
    Span::styled(format!(" {} ", tile.letter.unwrap_or('·')), style)
}

fn render_board<S: Storage>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let board = app.game.board();
    let round = app.game.round();
    let input_row = (!round.is_over()).then(|| round.current_row_index());
    let revealing = app.game.revealing_row();

    let mut lines = Vec::with_capacity(MAX_ATTEMPTS * 2);
    for (i, row) in board.rows().iter().enumerate() {
        let mut spans = Vec::with_capacity(row.len() * 2);
        for (col, &tile) in row.iter().enumerate() {
            let selected = input_row == Some(i) && round.cursor() == col;
            spans.push(tile_span(tile, selected));
            spans.push(Span::raw(" "));
        }
        if revealing == Some(i) {
            spans.push(Span::styled("◀", Style::default().fg(Color::Cyan)));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    if let Some(target) = round.revealed_target() {
        lines.push(Line::from(vec![
            Span::raw("A palavra era "),
            Span::styled(
                target.text().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_toast<S: Storage>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    if let Some(message) = app.game.toast() {
        let toast = Paragraph::new(message)
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(toast, area);
    }
}

fn render_keyboard<S: Storage>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let colors = app.game.key_colors();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|keys| {
            let spans: Vec<Span> = keys
                .chars()
                .flat_map(|key| {
                    let style = colors
                        .get(key)
                        .map_or_else(|| Style::default().fg(Color::White), verdict_style);
                    [Span::styled(format!(" {key} "), style), Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(keyboard, area);
}

fn render_status<S: Storage>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let stats = app.game.stats();
    let help = format!(
        "Sequência: {} | Tab: modo | ↑↓: letras | ←→: cursor | Ctrl+S: estatísticas | Ctrl+N: treino | Esc: sair",
        stats.current_streak
    );
    let status = Paragraph::new(help)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_stats_popup<S: Storage>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let stats = app.game.stats();
    let round = app.game.round();
    let won_at = round.is_won().then(|| round.current_row_index());
    let max = stats.win_distribution.iter().copied().max().unwrap_or(0).max(1);

    let mut lines = vec![
        Line::from(format!(
            "Jogos {}   Vitórias {}%   Sequência {}   Melhor {}",
            stats.games_played,
            stats.win_percentage(),
            stats.current_streak,
            stats.max_streak
        )),
        Line::from(""),
    ];

    for (i, &count) in stats.win_distribution.iter().enumerate() {
        let width = (count * 24 / max) as usize;
        let color = if won_at == Some(i + 1) {
            Color::Green
        } else {
            Color::DarkGray
        };
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", i + 1)),
            Span::styled(
                format!("{:<w$}", "█".repeat(width.max(1)), w = 24),
                Style::default().fg(color),
            ),
            Span::raw(format!(" {count}")),
        ]));
    }

    if let Some(share) = app.game.share_text() {
        lines.push(Line::from(""));
        lines.extend(share.lines().map(|line| Line::from(line.to_string())));
    }

    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let popup = centered_rect(52, height, area);
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Estatísticas ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Cyan)),
    );

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}
