//! Statistics pane rendering
//!
//! Shows playback progress, the derived comparison/swap counters, the run
//! dimensions, and the color legend for the bar chart.

use crate::trace::Playback;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Render the statistics pane.
///
/// `target` is Some only for searching algorithms.
pub fn render_stats_pane(
    frame: &mut Frame,
    area: Rect,
    playback: &Playback,
    array_size: usize,
    target: Option<i32>,
) {
    let block = Block::default()
        .title(" Statistics ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    // Progress over the trace; the final step is position len - 1
    let total = playback.len();
    let ratio = if total > 1 {
        playback.position() as f64 / (total - 1) as f64
    } else {
        1.0
    };
    let gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .bg(DEFAULT_THEME.status_bg),
        )
        .label(format!("{}/{}", playback.position() + 1, total))
        .ratio(ratio);
    frame.render_widget(gauge, rows[0]);

    let mut lines = vec![
        Line::from(""),
        stat_line("Comparisons: ", playback.comparisons().to_string()),
        stat_line("Swaps/Moves: ", playback.swaps().to_string()),
        stat_line("Array Size:  ", array_size.to_string()),
        stat_line("Total Steps: ", total.to_string()),
    ];

    if let Some(target) = target {
        lines.push(stat_line("Target:      ", target.to_string()));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Legend:",
        Style::default()
            .fg(DEFAULT_THEME.fg)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(legend_line(DEFAULT_THEME.bar_compared, "comparing"));
    lines.push(legend_line(DEFAULT_THEME.bar_swapped, "swapping"));
    lines.push(legend_line(DEFAULT_THEME.bar_sorted, "sorted"));
    lines.push(legend_line(DEFAULT_THEME.bar_highlight, "current"));

    let paragraph = Paragraph::new(lines).style(Style::default().fg(DEFAULT_THEME.fg));
    frame.render_widget(paragraph, rows[1]);
}

fn stat_line(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            value,
            Style::default()
                .fg(DEFAULT_THEME.accent)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

fn legend_line(color: ratatui::style::Color, label: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled("  ■ ", Style::default().fg(color)),
        Span::styled(label, Style::default().fg(DEFAULT_THEME.comment)),
    ])
}
