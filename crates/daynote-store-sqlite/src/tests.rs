//! Integration tests for `SqliteStore` against an in-memory database.

use daynote_core::{Analysis, JournalStore, NewEntry};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn new_entry(text: &str) -> NewEntry {
  NewEntry::new(text, Analysis::new("A short summary.", "Happy"))
}

// ─── Insert ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_assigns_identity_and_keeps_text() {
  let s = store().await;

  let before = chrono::Utc::now() - chrono::Duration::seconds(1);
  let e = s.insert(new_entry("  Rainy morning,\nwarm tea.  ")).await.unwrap();

  assert_eq!(e.entry, "  Rainy morning,\nwarm tea.  ");
  assert_eq!(e.summary, "A short summary.");
  assert_eq!(e.mood, "Happy");
  assert!(e.created_at >= before);
}

#[tokio::test]
async fn inserted_ids_are_unique() {
  let s = store().await;
  let a = s.insert(new_entry("one")).await.unwrap();
  let b = s.insert(new_entry("one")).await.unwrap();
  assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn mood_is_stored_verbatim() {
  let s = store().await;
  let e = s
    .insert(NewEntry::new("x", Analysis::new("s", "Bittersweet but hopeful")))
    .await
    .unwrap();
  let listed = s.list().await.unwrap();
  assert_eq!(listed[0].mood, "Bittersweet but hopeful");
  assert_eq!(listed[0], e);
}

// ─── List ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_empty_store() {
  let s = store().await;
  assert!(s.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn list_is_reverse_insertion_order() {
  let s = store().await;
  let mut inserted = Vec::new();
  for text in ["first", "second", "third", "fourth"] {
    inserted.push(s.insert(new_entry(text)).await.unwrap());
  }

  let listed = s.list().await.unwrap();
  let texts: Vec<_> = listed.iter().map(|e| e.entry.as_str()).collect();
  assert_eq!(texts, ["fourth", "third", "second", "first"]);

  inserted.reverse();
  assert_eq!(listed, inserted);
}

#[tokio::test]
async fn list_created_at_is_non_increasing() {
  let s = store().await;
  for i in 0..10 {
    s.insert(new_entry(&format!("entry {i}"))).await.unwrap();
  }
  let listed = s.list().await.unwrap();
  assert!(listed.windows(2).all(|w| w[0].created_at >= w[1].created_at));
}

#[tokio::test]
async fn repeated_list_is_identical() {
  let s = store().await;
  s.insert(new_entry("a")).await.unwrap();
  s.insert(new_entry("b")).await.unwrap();

  let first = s.list().await.unwrap();
  let second = s.list().await.unwrap();
  assert_eq!(first, second);
}

#[tokio::test]
async fn reopening_a_file_keeps_entries() {
  let path = std::env::temp_dir().join(format!("daynote-{}.db", uuid::Uuid::new_v4()));

  let created = {
    let s = SqliteStore::open(&path).await.unwrap();
    s.insert(new_entry("persisted")).await.unwrap()
  };

  let s = SqliteStore::open(&path).await.unwrap();
  assert_eq!(s.list().await.unwrap(), vec![created]);

  drop(s);
  let _ = std::fs::remove_file(&path);
}
