//! Bar chart pane rendering
//!
//! Draws the current step's array as a row of vertical bars, one color per
//! marker state.  Color precedence matches the legend: sorted beats swapped
//! beats compared beats highlight.

use crate::trace::Step;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};
use rustc_hash::FxHashSet;

/// Render the visualization pane
pub fn render_bars_pane(frame: &mut Frame, area: Rect, step: Option<&Step>) {
    let block = Block::default()
        .title(" Visualization ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    let step = match step {
        Some(step) if !step.array.is_empty() => step,
        _ => {
            let paragraph = Paragraph::new("(no data)")
                .block(block)
                .style(Style::default().fg(DEFAULT_THEME.comment));
            frame.render_widget(paragraph, area);
            return;
        }
    };

    let n = step.array.len();

    // Index sets for O(1) membership checks while coloring
    let compared: FxHashSet<usize> = step.compared.iter().copied().collect();
    let swapped: FxHashSet<usize> = step.swapped.iter().copied().collect();
    let sorted: FxHashSet<usize> = step.sorted.iter().copied().collect();
    let highlight: FxHashSet<usize> = step.highlight.iter().copied().collect();

    // Fit n bars into the pane: shrink the gap first, then the bar width
    let inner_width = area.width.saturating_sub(2) as usize;
    let gap: u16 = if inner_width >= n * 2 { 1 } else { 0 };
    let bar_width = ((inner_width / n.max(1)).saturating_sub(gap as usize)).max(1) as u16;

    let bars: Vec<Bar> = step
        .array
        .iter()
        .enumerate()
        .map(|(idx, value)| {
            let color = bar_color(idx, &sorted, &swapped, &compared, &highlight);

            // Value labels only fit on wide bars
            let label = if bar_width >= 3 {
                value.to_string()
            } else {
                String::new()
            };

            Bar::default()
                .value((*value).max(0) as u64)
                .text_value(label)
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .bar_width(bar_width)
        .bar_gap(gap)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

fn bar_color(
    idx: usize,
    sorted: &FxHashSet<usize>,
    swapped: &FxHashSet<usize>,
    compared: &FxHashSet<usize>,
    highlight: &FxHashSet<usize>,
) -> Color {
    if sorted.contains(&idx) {
        DEFAULT_THEME.bar_sorted
    } else if swapped.contains(&idx) {
        DEFAULT_THEME.bar_swapped
    } else if compared.contains(&idx) {
        DEFAULT_THEME.bar_compared
    } else if highlight.contains(&idx) {
        DEFAULT_THEME.bar_highlight
    } else {
        DEFAULT_THEME.bar_default
    }
}
