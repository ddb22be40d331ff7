//! Application state and key dispatcher.

use std::{
  sync::Arc,
  time::{Duration, Instant},
};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use daynote_core::JournalEntry;

use crate::client::ApiClient;

/// How long a notification stays in the status bar.
pub const NOTICE_TTL: Duration = Duration::from_secs(4);

pub const SAVED_MSG: &str = "Journal entry saved and analyzed!";
pub const SAVE_FAILED_MSG: &str = "Failed to save entry";
pub const LOAD_FAILED_MSG: &str = "Failed to load entries";

// ─── Focus / theme / notices ──────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
  /// Typing into the compose box.
  Compose,
  /// Scrolling the timeline.
  Timeline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
  Dark,
  Light,
}

impl Theme {
  pub fn toggled(self) -> Self {
    match self {
      Theme::Dark => Theme::Light,
      Theme::Light => Theme::Dark,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
  Success,
  Error,
}

/// A transient status-bar message.
#[derive(Debug, Clone)]
pub struct Notice {
  pub kind:       NoticeKind,
  pub text:       String,
  pub expires_at: Instant,
}

/// Network work requested by a key press, run by the event loop after the
/// next frame so the "busy" state is visible while it waits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
  Submit,
  Reload,
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App {
  pub focus:   Focus,
  pub theme:   Theme,

  /// Timeline, newest first.
  pub entries: Vec<JournalEntry>,

  /// Text in the compose box.
  pub draft:   String,

  /// Index of the highlighted timeline entry.
  pub cursor:  usize,

  pub notice:  Option<Notice>,
  pub pending: Option<Pending>,

  /// Shared HTTP client.
  pub client:  Arc<ApiClient>,
}

impl App {
  pub fn new(client: ApiClient) -> Self {
    Self {
      focus:   Focus::Compose,
      theme:   Theme::Dark,
      entries: Vec::new(),
      draft:   String::new(),
      cursor:  0,
      notice:  None,
      pending: None,
      client:  Arc::new(client),
    }
  }

  // ── Notices ───────────────────────────────────────────────────────────────

  fn notify(&mut self, kind: NoticeKind, text: &str) {
    self.notice = Some(Notice {
      kind,
      text: text.to_string(),
      expires_at: Instant::now() + NOTICE_TTL,
    });
  }

  /// Drop the notice once it has expired.
  pub fn tick(&mut self, now: Instant) {
    if self.notice.as_ref().is_some_and(|n| now >= n.expires_at) {
      self.notice = None;
    }
  }

  // ── Network ───────────────────────────────────────────────────────────────

  /// Replace the timeline with the server's. On failure the current list is
  /// kept and an error notice is shown.
  pub async fn load_entries(&mut self) {
    match self.client.list_entries().await {
      Ok(entries) => {
        self.entries = entries;
        self.cursor = 0;
      }
      Err(e) => {
        tracing::warn!(error = %e, "loading entries failed");
        self.notify(NoticeKind::Error, LOAD_FAILED_MSG);
      }
    }
  }

  /// Send the draft. Only a confirmed success touches the timeline: the
  /// returned entry is prepended and the draft cleared.
  pub async fn submit(&mut self) {
    match self.client.create_entry(&self.draft).await {
      Ok(entry) => {
        self.entries.insert(0, entry);
        self.cursor = 0;
        self.draft.clear();
        self.notify(NoticeKind::Success, SAVED_MSG);
      }
      Err(e) => {
        tracing::warn!(error = %e, "saving entry failed");
        self.notify(NoticeKind::Error, SAVE_FAILED_MSG);
      }
    }
  }

  /// Run whatever a key press queued, if anything.
  pub async fn run_pending(&mut self) {
    match self.pending.take() {
      Some(Pending::Submit) => self.submit().await,
      Some(Pending::Reload) => self.load_entries().await,
      None => {}
    }
  }

  pub fn is_saving(&self) -> bool { self.pending == Some(Pending::Submit) }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub fn handle_key(&mut self, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return false;
    }
    // Ignore input while a request is queued.
    if self.pending.is_some() {
      return true;
    }

    match self.focus {
      Focus::Compose => self.handle_compose_key(key),
      Focus::Timeline => self.handle_timeline_key(key),
    }
  }

  fn handle_compose_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => {
        self.draft.push('\n');
      }
      KeyCode::Enter => {
        if !self.draft.trim().is_empty() {
          self.pending = Some(Pending::Submit);
        }
      }
      KeyCode::Backspace => {
        self.draft.pop();
      }
      KeyCode::Esc | KeyCode::Tab => self.focus = Focus::Timeline,
      KeyCode::Char(c) => self.draft.push(c),
      _ => {}
    }
    true
  }

  fn handle_timeline_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Char('q') => return false,

      KeyCode::Tab | KeyCode::Char('i') => self.focus = Focus::Compose,

      KeyCode::Down | KeyCode::Char('j') => {
        if self.cursor + 1 < self.entries.len() {
          self.cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.cursor = self.cursor.saturating_sub(1);
      }
      KeyCode::Home | KeyCode::Char('g') => self.cursor = 0,

      KeyCode::Char('t') => self.theme = self.theme.toggled(),
      KeyCode::Char('r') => self.pending = Some(Pending::Reload),

      _ => {}
    }
    true
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::client::ApiConfig;
  use wiremock::matchers::{body_json, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  fn app(base_url: &str) -> App {
    App::new(ApiClient::new(ApiConfig { base_url: base_url.to_string() }).unwrap())
  }

  fn key(code: KeyCode) -> KeyEvent { KeyEvent::new(code, KeyModifiers::NONE) }

  fn entry_json(id: &str, text: &str, mood: &str) -> serde_json::Value {
    serde_json::json!({
      "id": id,
      "entry": text,
      "summary": "s",
      "mood": mood,
      "createdAt": "2024-06-01T12:00:00.000000Z"
    })
  }

  const ID_A: &str = "6f1c2d8e-1b2a-4c3d-8e9f-0a1b2c3d4e5f";
  const ID_B: &str = "0e9d8c7b-6a5f-4e3d-9c2b-1a0f9e8d7c6b";

  #[tokio::test]
  async fn load_fills_timeline() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/api/journal"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
        entry_json(ID_A, "newer", "Happy"),
        entry_json(ID_B, "older", "Sad"),
      ])))
      .mount(&server)
      .await;

    let mut app = app(&server.uri());
    app.load_entries().await;
    assert_eq!(app.entries.len(), 2);
    assert_eq!(app.entries[0].entry, "newer");
    assert!(app.notice.is_none());
  }

  #[tokio::test]
  async fn load_failure_shows_notice() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .respond_with(ResponseTemplate::new(500).set_body_json(
        serde_json::json!({ "error": "Failed to fetch entries" }),
      ))
      .mount(&server)
      .await;

    let mut app = app(&server.uri());
    app.load_entries().await;
    assert!(app.entries.is_empty());
    let notice = app.notice.unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.text, LOAD_FAILED_MSG);
  }

  #[tokio::test]
  async fn successful_submit_prepends_and_clears_draft() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .and(path("/api/journal"))
      .and(body_json(serde_json::json!({ "entry": "new thought" })))
      .respond_with(
        ResponseTemplate::new(201).set_body_json(entry_json(ID_A, "new thought", "Motivated")),
      )
      .expect(1)
      .mount(&server)
      .await;

    let mut app = app(&server.uri());
    app.entries = vec![serde_json::from_value(entry_json(ID_B, "old", "Sad")).unwrap()];
    app.cursor = 0;

    for c in "new thought".chars() {
      app.handle_key(key(KeyCode::Char(c)));
    }
    app.handle_key(key(KeyCode::Enter));
    assert!(app.is_saving());
    app.run_pending().await;

    assert!(!app.is_saving());
    let texts: Vec<_> = app.entries.iter().map(|e| e.entry.as_str()).collect();
    assert_eq!(texts, ["new thought", "old"]);
    assert!(app.draft.is_empty());
    assert_eq!(app.notice.unwrap().kind, NoticeKind::Success);
  }

  #[tokio::test]
  async fn failed_submit_leaves_state_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
      .respond_with(ResponseTemplate::new(500).set_body_json(
        serde_json::json!({ "error": "Failed to save entry" }),
      ))
      .mount(&server)
      .await;

    let mut app = app(&server.uri());
    app.entries = vec![serde_json::from_value(entry_json(ID_B, "old", "Sad")).unwrap()];
    app.draft = "keep me".into();
    app.submit().await;

    assert_eq!(app.entries.len(), 1);
    assert_eq!(app.draft, "keep me");
    let notice = app.notice.unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.text, SAVE_FAILED_MSG);
  }

  #[test]
  fn blank_draft_is_not_submitted() {
    let mut app = app("http://127.0.0.1:9");
    app.handle_key(key(KeyCode::Enter));
    app.draft = "   ".into();
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.pending, None);
  }

  #[test]
  fn compose_editing() {
    let mut app = app("http://127.0.0.1:9");
    for c in "hey".chars() {
      app.handle_key(key(KeyCode::Char(c)));
    }
    app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT));
    app.handle_key(key(KeyCode::Char('x')));
    app.handle_key(key(KeyCode::Backspace));
    assert_eq!(app.draft, "hey\n");
    // `q` is text while composing.
    assert!(app.handle_key(key(KeyCode::Char('q'))));
    assert_eq!(app.draft, "hey\nq");
  }

  #[test]
  fn timeline_keys() {
    let mut app = app("http://127.0.0.1:9");
    app.entries = vec![
      serde_json::from_value(entry_json(ID_A, "a", "Happy")).unwrap(),
      serde_json::from_value(entry_json(ID_B, "b", "Sad")).unwrap(),
    ];
    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.focus, Focus::Timeline);

    app.handle_key(key(KeyCode::Char('j')));
    app.handle_key(key(KeyCode::Char('j')));
    assert_eq!(app.cursor, 1);
    app.handle_key(key(KeyCode::Char('k')));
    app.handle_key(key(KeyCode::Char('k')));
    assert_eq!(app.cursor, 0);

    app.handle_key(key(KeyCode::Char('t')));
    assert_eq!(app.theme, Theme::Light);

    app.handle_key(key(KeyCode::Char('r')));
    assert_eq!(app.pending, Some(Pending::Reload));

    app.pending = None;
    assert!(!app.handle_key(key(KeyCode::Char('q'))));
  }

  #[test]
  fn ctrl_c_quits_from_compose() {
    let mut app = app("http://127.0.0.1:9");
    assert!(!app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
  }

  #[test]
  fn notice_expires() {
    let mut app = app("http://127.0.0.1:9");
    app.notify(NoticeKind::Success, SAVED_MSG);
    let shown = app.notice.as_ref().unwrap().expires_at - NOTICE_TTL;

    app.tick(shown + Duration::from_secs(1));
    assert!(app.notice.is_some());
    app.tick(shown + NOTICE_TTL);
    assert!(app.notice.is_none());
  }
}
