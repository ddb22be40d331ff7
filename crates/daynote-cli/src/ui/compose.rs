//! Compose box — where today's entry is written.

use ratatui::{
  Frame,
  layout::Rect,
  style::{Modifier, Style},
  widgets::{Block, Borders, Paragraph, Wrap},
};

use super::Palette;
use crate::app::{App, Focus};

/// Render the compose box into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
  let focused = app.focus == Focus::Compose;

  let title = if app.is_saving() { " Saving… " } else { " Today's Journal " };
  let border = if focused { palette.accent } else { palette.dim };

  let block = Block::default()
    .title(title)
    .title_style(Style::default().add_modifier(Modifier::BOLD))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(border));

  let paragraph = if app.draft.is_empty() && !focused {
    Paragraph::new("Write about your day…").style(Style::default().fg(palette.dim))
  } else {
    let mut text = app.draft.clone();
    if focused && !app.is_saving() {
      text.push('▏');
    }
    Paragraph::new(text).style(Style::default().fg(palette.fg))
  };

  f.render_widget(paragraph.block(block).wrap(Wrap { trim: false }), area);
}
