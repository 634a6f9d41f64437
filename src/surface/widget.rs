use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::theme::{PROGRESS_FILL, SURFACE_BORDER, SURFACE_MUTED, SURFACE_TEXT};

use super::view_model::{Progress, SlotState};
use super::ViewModel;

/// Terminal preview of a surface view-model.
pub struct SurfaceWidget<'a> {
    view: &'a ViewModel,
}

impl<'a> SurfaceWidget<'a> {
    pub fn new(view: &'a ViewModel) -> Self {
        Self { view }
    }

    /// Rows needed to draw every line plus borders.
    pub fn height(&self) -> u16 {
        let lines = self
            .view
            .slots
            .iter()
            .filter(|slot| slot_drawable(&slot.state))
            .count();
        (lines as u16).max(1) + 2
    }

    fn lines(&self, inner_width: u16) -> Vec<Line<'static>> {
        let lines: Vec<Line<'static>> = self
            .view
            .slots
            .iter()
            .filter(|slot| slot_drawable(&slot.state))
            .map(|slot| slot_line(&slot.state, inner_width))
            .collect();

        if lines.is_empty() {
            vec![Line::from(Span::styled(
                "—",
                Style::default().fg(SURFACE_MUTED),
            ))]
        } else {
            lines
        }
    }
}

fn slot_drawable(state: &SlotState) -> bool {
    state.visible && !state.is_layout_default()
}

fn slot_line(state: &SlotState, width: u16) -> Line<'static> {
    let color = state.color.unwrap_or(SURFACE_TEXT);
    let mut spans = Vec::new();

    if let Some(glyph) = state.glyph {
        spans.push(Span::styled(
            format!("{} ", glyph.symbol()),
            Style::default().fg(color),
        ));
    }
    if let Some(text) = &state.text {
        spans.push(Span::styled(text.clone(), Style::default().fg(color)));
    }
    if let Some(progress) = state.progress {
        spans.push(progress_bar(progress, width));
    }
    if let Some(tap) = &state.tap {
        spans.push(Span::styled(
            format!("↳ {}", tap.uri),
            Style::default().fg(SURFACE_MUTED).add_modifier(Modifier::DIM),
        ));
    }

    Line::from(spans)
}

fn progress_bar(progress: Progress, width: u16) -> Span<'static> {
    let width = usize::from(width);
    let filled = if progress.max == 0 {
        0
    } else {
        (width as u64 * progress.value.min(progress.max) / progress.max) as usize
    };
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(width - filled));
    Span::styled(bar, Style::default().fg(PROGRESS_FILL))
}

impl Widget for SurfaceWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(SURFACE_BORDER))
            .title(format!(" {} ", self.view.surface.title()));

        let lines = self.lines(area.width.saturating_sub(2));
        Paragraph::new(lines).block(block).render(area, buf);
    }
}
