use crate::models::PreferenceInput;

/// Fixed system directive sent with every upstream call
///
/// Kept as a named constant so prompt variants are a data change, not a code
/// fork (the model identifier lives in `Config` for the same reason).
pub const SYSTEM_PROMPT: &str = r#"You are FilmFuseAI, an AI movie recommendation engine.

You must ALWAYS respond with a single JSON object of this exact shape and nothing else:

{
  "movies": [
    {
      "title": "string",
      "year": 2010,
      "language": "english",
      "age_rating": "13+",
      "genres": ["action", "thriller"],
      "mood_tags": ["intense", "mind-bending"],
      "short_reason": "1-2 short sentences why this matches the user."
    }
  ]
}

Rules:
- 4-8 movies.
- Respect the user's languages, genres, mood & age rating as much as possible.
- "language" must be lowercase (english, hindi, korean, japanese, spanish, other).
- JSON must be strictly valid:
  - no comments
  - no trailing commas
  - all keys & strings in double quotes
- Do NOT include any text before or after the JSON.
- Do NOT include markdown fences like ```json."#;

/// Token rendered for absent or empty preference fields
const ANY: &str = "any";

/// Builds the user instruction string from the client's preferences
///
/// Pure function of its input. Empty or missing fields render as `any`;
/// supplied list values are trimmed and comma-joined. Languages are
/// lowercased to match the canonical tokens the model is instructed to emit.
pub fn build_user_prompt(input: &PreferenceInput) -> String {
    let languages = join_or_any(input.languages.iter().map(|l| l.trim().to_lowercase()));
    let genres = join_or_any(input.genres.iter().map(|g| g.trim().to_string()));
    let mood = opt_or_any(input.mood.as_deref());
    let age = opt_or_any(input.age.as_deref());

    format!(
        "User preferences:\nlanguages: {}\ngenres: {}\nmood: {}\nage rating: {}",
        languages, genres, mood, age
    )
}

fn join_or_any(values: impl Iterator<Item = String>) -> String {
    let joined: Vec<String> = values.filter(|v| !v.is_empty()).collect();
    if joined.is_empty() {
        ANY.to_string()
    } else {
        joined.join(", ")
    }
}

fn opt_or_any(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => ANY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_renders_any_everywhere() {
        let prompt = build_user_prompt(&PreferenceInput::default());
        assert_eq!(
            prompt,
            "User preferences:\nlanguages: any\ngenres: any\nmood: any\nage rating: any"
        );
        assert!(!prompt.contains("null"));
        assert!(!prompt.contains("None"));
    }

    #[test]
    fn test_supplied_values_appear_in_prompt() {
        let input = PreferenceInput {
            languages: vec!["english".to_string()],
            genres: vec!["comedy".to_string()],
            mood: Some("light".to_string()),
            age: Some("13+".to_string()),
        };
        let prompt = build_user_prompt(&input);
        assert!(prompt.contains("languages: english"));
        assert!(prompt.contains("genres: comedy"));
        assert!(prompt.contains("mood: light"));
        assert!(prompt.contains("age rating: 13+"));
    }

    #[test]
    fn test_lists_are_comma_joined() {
        let input = PreferenceInput {
            languages: vec!["english".to_string(), "korean".to_string()],
            genres: vec!["comedy".to_string(), "drama".to_string()],
            ..Default::default()
        };
        let prompt = build_user_prompt(&input);
        assert!(prompt.contains("languages: english, korean"));
        assert!(prompt.contains("genres: comedy, drama"));
    }

    #[test]
    fn test_languages_are_lowercased() {
        let input = PreferenceInput {
            languages: vec!["English".to_string(), "KOREAN".to_string()],
            ..Default::default()
        };
        let prompt = build_user_prompt(&input);
        assert!(prompt.contains("languages: english, korean"));
    }

    #[test]
    fn test_blank_entries_fall_back_to_any() {
        let input = PreferenceInput {
            languages: vec!["  ".to_string()],
            mood: Some("".to_string()),
            ..Default::default()
        };
        let prompt = build_user_prompt(&input);
        assert!(prompt.contains("languages: any"));
        assert!(prompt.contains("mood: any"));
    }

    #[test]
    fn test_system_prompt_names_the_schema() {
        assert!(SYSTEM_PROMPT.contains("\"movies\""));
        assert!(SYSTEM_PROMPT.contains("\"short_reason\""));
    }
}
