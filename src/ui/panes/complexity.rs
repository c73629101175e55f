//! Complexity pane rendering
//!
//! Displays the selected algorithm's descriptor: name, category, and
//! best/average/worst asymptotic complexity.

use crate::algorithms::registry::{Category, Descriptor};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the complexity pane
pub fn render_complexity_pane(frame: &mut Frame, area: Rect, descriptor: &Descriptor) {
    let block = Block::default()
        .title(" Complexity ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    let category_label = match descriptor.category {
        Category::Sorting => "Sorting Algorithm",
        Category::Searching => "Searching Algorithm",
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(
                descriptor.name,
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({})", category_label),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
        ]),
        Line::from(""),
        complexity_line("Best:    ", descriptor.complexity.best),
        complexity_line("Average: ", descriptor.complexity.average),
        complexity_line("Worst:   ", descriptor.complexity.worst),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().fg(DEFAULT_THEME.fg));

    frame.render_widget(paragraph, area);
}

fn complexity_line(label: &'static str, bound: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            bound,
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}
