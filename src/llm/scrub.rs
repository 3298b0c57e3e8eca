use std::borrow::Cow;

const MAX_API_ERROR_CHARS: usize = 200;
const REDACTED: &str = "[REDACTED]";

/// Markers after which a credential-like token follows. Prefix markers
/// (`AIza`, `ya29.`, `eyJ`) are redacted together with the token.
const SECRET_MARKERS: [(&str, bool); 10] = [
    ("AIza", true),
    ("ya29.", true),
    ("eyJ", true),
    ("key=", false),
    ("x-goog-api-key: ", false),
    ("Authorization: Bearer ", false),
    ("authorization: bearer ", false),
    ("\"api_key\":\"", false),
    ("\"access_token\":\"", false),
    ("\"jwt_secret\":\"", false),
];

fn is_secret_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':' | '+' | '/' | '=')
}

fn token_end(input: &str, from: usize) -> usize {
    input[from..]
        .char_indices()
        .find(|&(_, c)| !is_secret_char(c))
        .map_or(input.len(), |(i, _)| from + i)
}

fn scrub_after_marker(scrubbed: &mut String, marker: &str, include_marker: bool) {
    let mut search_from = 0;
    while let Some(rel) = scrubbed[search_from..].find(marker) {
        let start = search_from + rel;
        let content_start = start + marker.len();
        let end = token_end(scrubbed, content_start);

        // Bare marker without a token value.
        if end == content_start {
            search_from = content_start;
            continue;
        }

        let replace_from = if include_marker { start } else { content_start };
        scrubbed.replace_range(replace_from..end, REDACTED);
        search_from = replace_from + REDACTED.len();
    }
}

/// Redact API keys, OAuth tokens and signed payloads from diagnostic text.
pub fn scrub_secret_patterns(input: &str) -> Cow<'_, str> {
    if !SECRET_MARKERS
        .iter()
        .any(|(marker, _)| input.contains(marker))
    {
        return Cow::Borrowed(input);
    }

    let mut scrubbed = input.to_string();
    for (marker, include_marker) in SECRET_MARKERS {
        scrub_after_marker(&mut scrubbed, marker, include_marker);
    }
    Cow::Owned(scrubbed)
}

/// Scrub secrets and cap the length of provider error text before logging.
pub fn sanitize_api_error(input: &str) -> String {
    let scrubbed = scrub_secret_patterns(input);
    match scrubbed.char_indices().nth(MAX_API_ERROR_CHARS) {
        Some((cut, _)) => format!("{}...", &scrubbed[..cut]),
        None => scrubbed.into_owned(),
    }
}
