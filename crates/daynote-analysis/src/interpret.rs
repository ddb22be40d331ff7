//! Prompt construction and interpretation of the model's free-text answer.

use std::sync::LazyLock;

use daynote_core::Analysis;
use regex::Regex;

use crate::Result;

/// First `{` through last `}`, across newlines.
static JSON_OBJECT: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("static regex"));

/// The single prompt sent for `entry`.
pub fn prompt(entry: &str) -> String {
  format!(
    "Summarize this journal entry in 1-2 sentences and detect the user's mood \
     (e.g., Happy, Sad, Anxious, Motivated). Respond in JSON: \
     {{ \"summary\": \"...\", \"mood\": \"...\" }}\n\nEntry: {entry}"
  )
}

/// Locate the JSON-object-shaped span in `text`, if any.
pub fn extract_json(text: &str) -> Option<&str> {
  JSON_OBJECT.find(text).map(|m| m.as_str())
}

/// Turn the model's answer into an [`Analysis`].
///
/// No object at all yields the "not found" sentinel. An object that does not
/// decode to `{"summary": string, "mood": string}` is an error, which the
/// caller maps to the "failed" sentinel.
pub fn interpret(text: &str) -> Result<Analysis> {
  match extract_json(text) {
    Some(fragment) => Ok(serde_json::from_str(fragment)?),
    None => Ok(Analysis::not_found()),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Error;

  #[test]
  fn prompt_ends_with_the_entry() {
    let p = prompt("Finished the marathon!");
    assert!(p.starts_with("Summarize this journal entry in 1-2 sentences"));
    assert!(p.contains(r#"Respond in JSON: { "summary": "...", "mood": "..." }"#));
    assert!(p.ends_with("\n\nEntry: Finished the marathon!"));
  }

  #[test]
  fn extracts_object_surrounded_by_prose() {
    let text = "Sure! Here you go:\n```json\n{\"summary\":\"S\",\"mood\":\"M\"}\n```\nHope that helps.";
    assert_eq!(extract_json(text), Some(r#"{"summary":"S","mood":"M"}"#));
  }

  #[test]
  fn extraction_spans_newlines_and_nested_braces() {
    let text = "{\n  \"summary\": \"a {b} c\",\n  \"mood\": \"Sad\"\n}";
    assert_eq!(extract_json(text), Some(text));
  }

  #[test]
  fn no_braces_means_no_fragment() {
    assert_eq!(extract_json("I could not decide on a mood."), None);
    assert_eq!(extract_json("only an opening {"), None);
  }

  #[test]
  fn embedded_fragment_is_used_verbatim() {
    let a = interpret(r#"Here: {"summary":"S","mood":"M"} done"#).unwrap();
    assert_eq!(a, Analysis::new("S", "M"));
  }

  #[test]
  fn mood_outside_the_example_set_is_accepted() {
    let a = interpret(r#"{"summary":"Quiet.","mood":"Nostalgic"}"#).unwrap();
    assert_eq!(a.mood, "Nostalgic");
  }

  #[test]
  fn extra_keys_are_ignored() {
    let a = interpret(r#"{"summary":"S","mood":"M","confidence":0.9}"#).unwrap();
    assert_eq!(a, Analysis::new("S", "M"));
  }

  #[test]
  fn missing_object_gives_not_found_sentinel() {
    let a = interpret("The user seems happy.").unwrap();
    assert_eq!(a, Analysis::not_found());
  }

  #[test]
  fn malformed_object_is_a_decode_error() {
    assert!(matches!(interpret("{summary: S, mood: M}"), Err(Error::Decode(_))));
  }

  #[test]
  fn object_missing_a_key_is_a_decode_error() {
    assert!(matches!(interpret(r#"{"summary":"S"}"#), Err(Error::Decode(_))));
  }

  #[test]
  fn two_objects_are_matched_greedily() {
    // First `{` to last `}` is not valid JSON on its own.
    let text = r#"{"summary":"a","mood":"b"} or {"summary":"c","mood":"d"}"#;
    assert!(matches!(interpret(text), Err(Error::Decode(_))));
  }
}
