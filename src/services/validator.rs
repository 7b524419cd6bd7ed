use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    models::{MovieRecommendation, RecommendationResult},
};

/// Strips non-JSON wrapping from raw model output
///
/// Removes any ``` fences (tolerating a `json` language tag in any case),
/// then slices from the first `{` to the last `}` when both exist, discarding
/// surrounding prose. Idempotent on already-clean JSON. This is the only
/// repair performed; anything further must parse as-is.
pub fn strip_wrappers(raw: &str) -> String {
    let cleaned = remove_fences(raw);
    let cleaned = cleaned.trim();

    match (cleaned.find('{'), cleaned.rfind('}')) {
        (Some(first), Some(last)) if first < last => cleaned[first..=last].to_string(),
        _ => cleaned.to_string(),
    }
}

/// Deletes every ``` fence marker, eating an immediately-following `json` tag
fn remove_fences(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(pos) = rest.find("```") {
        out.push_str(&rest[..pos]);
        rest = &rest[pos + 3..];
        if rest
            .get(..4)
            .is_some_and(|tag| tag.eq_ignore_ascii_case("json"))
        {
            rest = &rest[4..];
        }
    }
    out.push_str(rest);
    out
}

/// Converts raw upstream text into a `RecommendationResult`, or fails
///
/// De-wraps, parses, and checks that the result is an object carrying a
/// `movies` array. Elements are forwarded as-is; conformance to the
/// documented movie shape is audited at WARN level, never enforced.
pub fn validate(raw: &str) -> AppResult<RecommendationResult> {
    let cleaned = strip_wrappers(raw);

    let parsed: Value = serde_json::from_str(&cleaned).map_err(|e| {
        tracing::error!(raw = %raw, error = %e, "Upstream output is not valid JSON");
        AppError::MalformedUpstreamOutput(e.to_string())
    })?;

    let movies = match parsed.get("movies").and_then(Value::as_array) {
        Some(movies) => movies.clone(),
        None => {
            tracing::error!(parsed = %parsed, "Upstream JSON missing 'movies' array");
            return Err(AppError::UnexpectedResponseShape(parsed.to_string()));
        }
    };

    audit_movies(&movies);

    Ok(RecommendationResult { movies })
}

/// Advisory per-element check; logs non-conforming entries and moves on
fn audit_movies(movies: &[Value]) {
    for (index, movie) in movies.iter().enumerate() {
        match serde_json::from_value::<MovieRecommendation>(movie.clone()) {
            Ok(parsed) if parsed.title.is_empty() => {
                tracing::warn!(index, movie = %movie, "Recommendation missing a title");
            }
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(index, movie = %movie, error = %e, "Non-conforming recommendation entry");
            }
        }
    }
}
