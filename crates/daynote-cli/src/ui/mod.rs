//! TUI rendering — orchestrates all panes.

pub mod compose;
pub mod timeline;

use chrono::Local;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Paragraph},
};

use crate::app::{App, Focus, NoticeKind, Theme};

// ─── Palette ──────────────────────────────────────────────────────────────────

/// Colours for the active theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
  pub bg:     Color,
  pub fg:     Color,
  pub dim:    Color,
  pub accent: Color,
  pub bar:    Color,
}

impl Palette {
  pub fn for_theme(theme: Theme) -> Self {
    match theme {
      Theme::Dark => Self {
        bg:     Color::Black,
        fg:     Color::White,
        dim:    Color::DarkGray,
        accent: Color::Magenta,
        bar:    Color::DarkGray,
      },
      Theme::Light => Self {
        bg:     Color::White,
        fg:     Color::Black,
        dim:    Color::Gray,
        accent: Color::Blue,
        bar:    Color::Gray,
      },
    }
  }
}

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App) {
  let palette = Palette::for_theme(app.theme);
  let area = f.area();

  f.render_widget(Block::default().style(Style::default().bg(palette.bg)), area);

  // Vertical stack: header, compose, timeline, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Length(7), // compose
      Constraint::Min(0),    // timeline
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0], &palette);
  compose::draw(f, rows[1], app, &palette);
  timeline::draw(f, rows[2], app, &palette);
  draw_status(f, rows[3], app, &palette);
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect, palette: &Palette) {
  let date = Local::now().format("%A, %B %-d %Y").to_string();

  let left = Span::styled(
    " ✨ DayNote",
    Style::default()
      .fg(palette.accent)
      .add_modifier(Modifier::BOLD),
  );
  let right = Span::styled(format!("{date} "), Style::default().fg(palette.fg));

  let left_width = left.width() as u16;
  let right_width = right.width() as u16;
  let pad = area
    .width
    .saturating_sub(left_width)
    .saturating_sub(right_width);

  let line = Line::from(vec![left, Span::raw(" ".repeat(pad as usize)), right]);

  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(palette.bar)),
    area,
  );
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
  let (mode_label, hints) = match app.focus {
    Focus::Compose => ("WRITE", "Enter save  Alt+Enter newline  Tab/Esc timeline  Ctrl-C quit"),
    Focus::Timeline => ("READ", "↑↓/jk scroll  Tab/i write  r reload  t theme  q quit"),
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );

  let message = match &app.notice {
    Some(n) => {
      let (icon, colour) = match n.kind {
        NoticeKind::Success => ("✔", Color::Green),
        NoticeKind::Error => ("✖", Color::Red),
      };
      Span::styled(
        format!("  {icon} {}", n.text),
        Style::default().fg(colour).add_modifier(Modifier::BOLD),
      )
    }
    None if app.is_saving() => Span::styled(
      "  Analyzing your entry…",
      Style::default().fg(palette.accent),
    ),
    None => Span::styled(format!("  {hints}"), Style::default().fg(palette.dim)),
  };

  f.render_widget(
    Paragraph::new(Line::from(vec![mode_span, message])).style(Style::default().bg(palette.bg)),
    area,
  );
}
