const MAX_VISIBLE_LENGTH: usize = 100;

/// Sanitizes prompt text for safe logging. Prompts embed user-supplied
/// topics, so the preview is truncated and credential-shaped fragments
/// are redacted before they reach the log stream.
pub fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let sanitized = if trimmed.len() > MAX_VISIBLE_LENGTH {
        let mut end = MAX_VISIBLE_LENGTH;
        while !trimmed.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... ({} chars total)", &trimmed[..end], trimmed.len())
    } else {
        trimmed.to_string()
    };

    redact_sensitive_patterns(&sanitized)
}

fn redact_sensitive_patterns(text: &str) -> String {
    let patterns = [
        ("Bearer ", "Bearer [REDACTED]"),
        ("api_key=", "api_key=[REDACTED]"),
        ("password=", "password=[REDACTED]"),
        ("secret=", "secret=[REDACTED]"),
        ("token=", "token=[REDACTED]"),
    ];

    let mut result = text.to_string();
    for (pattern, replacement) in patterns {
        if let Some(idx) = result.find(pattern) {
            let end = result[idx + pattern.len()..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| idx + pattern.len() + i)
                .unwrap_or(result.len());
            result = format!("{}{}{}", &result[..idx], replacement, &result[end..]);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_short_prompt_when_sanitized_then_returned_unchanged() {
        assert_eq!(sanitize_prompt("Explain vectors in R"), "Explain vectors in R");
    }

    #[test]
    fn given_long_prompt_when_sanitized_then_truncated_with_length() {
        let prompt = "x".repeat(250);
        let out = sanitize_prompt(&prompt);
        assert!(out.contains("... (250 chars total)"));
    }

    #[test]
    fn given_multibyte_text_at_cut_point_when_sanitized_then_no_panic() {
        let prompt = "é".repeat(120);
        let out = sanitize_prompt(&prompt);
        assert!(out.contains("chars total"));
    }

    #[test]
    fn given_embedded_credential_when_sanitized_then_redacted() {
        let out = sanitize_prompt("topic api_key=sk-12345 rest");
        assert!(out.contains("api_key=[REDACTED]"));
        assert!(!out.contains("sk-12345"));
    }

    #[test]
    fn given_empty_prompt_when_sanitized_then_placeholder() {
        assert_eq!(sanitize_prompt("   "), "[EMPTY]");
    }
}
