use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```[a-zA-Z0-9_-]*\r?\n?(?P<body>.*?)```").unwrap());

/// Spoken replacements for R terms that screen readers and TTS engines
/// mangle. Replacement strings must never contain their own trigger, so the
/// whole transform stays idempotent.
const PRONUNCIATIONS: &[(&str, &str)] = &[
    ("ggplot2", "G G plot two"),
    ("ggplot", "G G plot"),
    ("dplyr", "D plier"),
    ("tidyr", "tidy R"),
    ("stringr", "string R"),
    ("%>%", "the pipe operator"),
    ("data.frame", "data frame"),
];

const EMPTY_PLACEHOLDER: &str = "There is no content to read aloud.";

/// Transforms generated markdown into a speech-friendly plain-text form.
///
/// The transform sequence is order-sensitive and fully deterministic: code
/// fences become a spoken paraphrase, inline code markers and emphasis are
/// stripped, bullets become spoken prefixes, headings lose their markers,
/// known R terms are expanded to pronounceable phrases, whitespace collapses,
/// and terminal punctuation is guaranteed. Re-normalizing already-normalized
/// text changes nothing, and the result is never empty.
pub fn normalize_for_speech(markdown: &str) -> String {
    let normalized: String = markdown.nfkc().collect();

    if normalized.trim().is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }

    let without_fences = CODE_FENCE.replace_all(&normalized, |caps: &regex::Captures| {
        paraphrase_code_block(&caps["body"])
    });

    let mut lines = String::with_capacity(without_fences.len());
    for line in without_fences.lines() {
        let spoken = speak_line(line);
        if !spoken.is_empty() {
            lines.push_str(&spoken);
            lines.push(' ');
        }
    }

    let mut text = lines.replace('`', "").replace('*', "");

    for (term, spoken) in PRONUNCIATIONS {
        text = text.replace(term, spoken);
    }

    let mut result = String::with_capacity(text.len());
    let mut prev_was_space = false;
    for ch in text.trim().chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                result.push(' ');
                prev_was_space = true;
            }
        } else {
            result.push(ch);
            prev_was_space = false;
        }
    }

    if result.is_empty() {
        return EMPTY_PLACEHOLDER.to_string();
    }

    if !result.ends_with(['.', '!', '?']) {
        result.push('.');
    }

    result
}

/// Describes what a code block is for without reading the code aloud. The
/// first R comment inside the block, when present, carries the purpose.
fn paraphrase_code_block(body: &str) -> String {
    let comment = body
        .lines()
        .map(str::trim)
        .find(|line| line.starts_with('#'))
        .map(|line| line.trim_start_matches('#').trim());

    match comment {
        Some(purpose) if !purpose.is_empty() => {
            let mut sentence = format!("Here is a code example that shows {}", purpose);
            if !sentence.ends_with(['.', '!', '?']) {
                sentence.push('.');
            }
            sentence
        }
        _ => "Here is a code example; the code itself is in the written tutorial.".to_string(),
    }
}

fn speak_line(line: &str) -> String {
    let trimmed = line.trim();

    if let Some(rest) = trimmed.strip_prefix("- ").or_else(|| trimmed.strip_prefix("* ")) {
        return format!("Next, {}", rest.trim());
    }

    if trimmed.starts_with('#') {
        let heading = trimmed.trim_start_matches('#').trim();
        if heading.is_empty() {
            return String::new();
        }
        let mut sentence = heading.to_string();
        if !sentence.ends_with(['.', '!', '?', ':']) {
            sentence.push('.');
        }
        return sentence;
    }

    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_markdown_with_heading_and_fence_when_normalizing_then_markers_removed() {
        let output = normalize_for_speech("## Title\n\n```r\ncode\n```\n");
        assert!(!output.contains("```"));
        assert!(!output.contains("##"));
        assert!(output.ends_with(['.', '!', '?']));
    }

    #[test]
    fn given_code_fence_with_comment_when_normalizing_then_comment_becomes_paraphrase() {
        let output = normalize_for_speech("```r\n# Load the data\nread.csv(\"x.csv\")\n```");
        assert!(output.contains("Load the data"));
        assert!(!output.contains("read.csv"));
    }

    #[test]
    fn given_normalized_text_when_normalizing_again_then_unchanged() {
        let once = normalize_for_speech("# Intro\n\n- use `dplyr`\n\nSome **bold** text");
        let twice = normalize_for_speech(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn given_empty_input_when_normalizing_then_placeholder_returned() {
        assert_eq!(normalize_for_speech(""), EMPTY_PLACEHOLDER);
        assert_eq!(normalize_for_speech("   \n\n  "), EMPTY_PLACEHOLDER);
    }

    #[test]
    fn given_r_terms_when_normalizing_then_expanded_for_speech() {
        let output = normalize_for_speech("Use ggplot2 and the %>% with data.frame objects");
        assert!(output.contains("G G plot two"));
        assert!(output.contains("the pipe operator"));
        assert!(output.contains("data frame"));
        assert!(!output.contains("%>%"));
    }

    #[test]
    fn given_bullets_when_normalizing_then_spoken_prefix_added() {
        let output = normalize_for_speech("- first point\n- second point");
        assert!(output.contains("Next, first point"));
        assert!(output.contains("Next, second point"));
    }

    #[test]
    fn given_non_empty_input_when_normalizing_then_output_never_empty() {
        for input in ["x", "`", "**", "# "] {
            assert!(!normalize_for_speech(input).is_empty());
        }
    }
}
