//! Timeline pane — past entries, newest first.

use chrono::Local;
use daynote_core::JournalEntry;
use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::Palette;
use crate::app::{App, Focus};

/// Icon and colour for a mood label. Unrecognised moods share a default.
pub fn mood_icon(mood: &str) -> (&'static str, Color) {
  match mood {
    "Happy" => ("✨", Color::Yellow),
    "Sad" => ("☂", Color::Blue),
    "Anxious" => ("⚠", Color::Red),
    "Motivated" => ("✔", Color::Green),
    _ => ("✎", Color::Magenta),
  }
}

fn entry_item<'a>(entry: &'a JournalEntry, palette: &Palette) -> ListItem<'a> {
  let (icon, colour) = mood_icon(&entry.mood);
  let when = entry
    .created_at
    .with_timezone(&Local)
    .format("%b %-d, %Y %H:%M")
    .to_string();

  let mut lines = vec![Line::from(vec![
    Span::styled(format!("{icon} "), Style::default().fg(colour)),
    Span::styled(
      entry.mood.as_str(),
      Style::default().fg(colour).add_modifier(Modifier::BOLD),
    ),
    Span::styled(format!("  {when}"), Style::default().fg(palette.dim)),
  ])];

  lines.extend(
    entry
      .entry
      .lines()
      .map(|l| Line::from(Span::styled(format!("  {l}"), Style::default().fg(palette.fg)))),
  );

  lines.push(Line::from(Span::styled(
    format!("  Summary: {}", entry.summary),
    Style::default()
      .fg(palette.dim)
      .add_modifier(Modifier::ITALIC),
  )));
  lines.push(Line::raw(""));

  ListItem::new(lines)
}

/// Render the timeline into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
  let focused = app.focus == Focus::Timeline;
  let border = if focused { palette.accent } else { palette.dim };

  let block = Block::default()
    .title(format!(" Timeline ({}) ", app.entries.len()))
    .borders(Borders::ALL)
    .border_style(Style::default().fg(border));

  if app.entries.is_empty() {
    f.render_widget(
      Paragraph::new("No entries yet. Start journaling!")
        .style(Style::default().fg(palette.dim))
        .block(block),
      area,
    );
    return;
  }

  let items: Vec<ListItem> = app
    .entries
    .iter()
    .map(|e| entry_item(e, palette))
    .collect();

  let highlight = if focused {
    Style::default().add_modifier(Modifier::BOLD)
  } else {
    Style::default()
  };

  let list = List::new(items)
    .block(block)
    .highlight_style(highlight)
    .highlight_symbol(if focused { "▌" } else { " " });

  let mut state = ListState::default();
  state.select(Some(app.cursor));
  f.render_stateful_widget(list, area, &mut state);
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn known_moods_have_distinct_icons() {
    let icons: Vec<_> = ["Happy", "Sad", "Anxious", "Motivated"]
      .iter()
      .map(|m| mood_icon(m).0)
      .collect();
    let mut unique = icons.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), icons.len());
  }

  #[test]
  fn unknown_moods_fall_back_to_default() {
    assert_eq!(mood_icon("Nostalgic"), mood_icon("Error"));
    assert_eq!(mood_icon("happy"), ("✎", Color::Magenta));
  }
}
