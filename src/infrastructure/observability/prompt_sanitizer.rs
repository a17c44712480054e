const MAX_VISIBLE_CHARS: usize = 100;

/// Shortens a student question for log lines and masks credential-looking values.
pub fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total_chars = trimmed.chars().count();
    let sanitized = if total_chars > MAX_VISIBLE_CHARS {
        let visible: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", visible, total_chars)
    } else {
        trimmed.to_string()
    };

    redact_secrets(&sanitized)
}

fn redact_secrets(text: &str) -> String {
    const MARKERS: [&str; 6] = [
        "Bearer ",
        "api_key=",
        "key=",
        "password=",
        "secret=",
        "token=",
    ];

    let mut result = text.to_string();
    for marker in MARKERS {
        let mut search_from = 0;
        while let Some(found) = result[search_from..].find(marker) {
            let marker_start = search_from + found;
            let value_start = marker_start + marker.len();

            // `monkey=3` is not a key
            if result[..marker_start]
                .chars()
                .next_back()
                .is_some_and(char::is_alphanumeric)
            {
                search_from = value_start;
                continue;
            }

            let value_end = result[value_start..]
                .find(|c: char| c.is_whitespace() || matches!(c, '&' | '"' | '\''))
                .map(|i| value_start + i)
                .unwrap_or(result.len());

            if result[value_start..value_end] != *"[REDACTED]" {
                result.replace_range(value_start..value_end, "[REDACTED]");
            }
            search_from = value_start + "[REDACTED]".len();
        }
    }

    result
}
