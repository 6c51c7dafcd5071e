// Profile avatar resolution for the hero section.
// The host performs the fetch; this module decides what to show. Failures never propagate.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

const PROFILE_API_BASE: &str = "https://api.github.com/users";

/// Result of the host's best-effort profile fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ProfileFetch {
    /// The request completed. Non-2xx statuses still land here.
    Response { status: u16, body: String },
    /// Network error, CORS rejection, timeout.
    Failed { reason: String },
}

/// What the avatar slot renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Avatar {
    Image(String),
    Initials(String),
}

/// Public profile endpoint for `login`.
pub fn profile_url(login: &str) -> String {
    format!("{}/{}", PROFILE_API_BASE, login)
}

/// `"Saksham Singla"` becomes `"SS"`. At most two letters; `"?"` for a blank name.
pub fn initials(display_name: &str) -> String {
    let letters: String = display_name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

pub fn resolve_avatar(fetch: &ProfileFetch, display_name: &str) -> Avatar {
    match avatar_url(fetch) {
        Some(url) => Avatar::Image(url),
        None => Avatar::Initials(initials(display_name)),
    }
}

fn avatar_url(fetch: &ProfileFetch) -> Option<String> {
    let (status, body) = match fetch {
        ProfileFetch::Response { status, body } => (*status, body),
        ProfileFetch::Failed { reason } => {
            warn!(reason = reason.as_str(), "profile fetch failed; using initials");
            return None;
        }
    };

    if !(200..300).contains(&status) {
        warn!(status, "profile fetch returned non-success status; using initials");
        return None;
    }

    let profile: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(err) => {
            warn!(error = %err, "profile body is not JSON; using initials");
            return None;
        }
    };

    match profile.get("avatar_url").and_then(Value::as_str) {
        Some(url) if !url.trim().is_empty() => Some(url.to_string()),
        _ => {
            warn!("profile has no avatar_url; using initials");
            None
        }
    }
}
