use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{ContentMetrics, Expertise};

static LIBRARY_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)(?:library|require)\(["']?([A-Za-z0-9.]+)["']?\)"#).unwrap());

const MAX_CONCEPTS: usize = 8;
const MAX_PACKAGES: usize = 6;
const READING_WORDS_PER_MINUTE: usize = 200;

/// R concepts worth surfacing when they appear in generated content.
const KNOWN_CONCEPTS: &[&str] = &[
    "data frames",
    "vectors",
    "lists",
    "matrices",
    "factors",
    "functions",
    "packages",
    "visualization",
    "statistical analysis",
    "machine learning",
    "data manipulation",
    "data cleaning",
    "regression",
    "classification",
    "clustering",
    "hypothesis testing",
    "loops",
    "conditionals",
    "apply functions",
    "pipes",
    "tidyverse",
    "data types",
    "indexing",
];

const KNOWN_PACKAGES: &[&str] = &[
    "ggplot2",
    "dplyr",
    "tidyr",
    "readr",
    "tibble",
    "stringr",
    "lubridate",
    "tidyverse",
    "data.table",
    "shiny",
    "plotly",
    "caret",
    "randomForest",
    "glmnet",
    "xgboost",
];

const TOPIC_STOPWORDS: &[&str] = &["with", "using", "and", "the", "for", "into"];

/// Picks out the key concepts a tutorial covers: known R concepts present in
/// the content followed by the significant words of the topic itself.
pub fn extract_concepts(content: &str, topic: &str) -> Vec<String> {
    let content_lower = content.to_lowercase();
    let mut concepts: Vec<String> = Vec::new();

    for concept in KNOWN_CONCEPTS {
        if content_lower.contains(concept) {
            concepts.push(title_case(concept));
        }
    }

    for word in topic.to_lowercase().split_whitespace() {
        let word = word.trim_matches(|c: char| !c.is_alphanumeric());
        if word.len() > 3 && !TOPIC_STOPWORDS.contains(&word) {
            let cased = title_case(word);
            if !concepts.contains(&cased) {
                concepts.push(cased);
            }
        }
    }

    concepts.truncate(MAX_CONCEPTS);
    concepts
}

/// Collects R packages the content loads via `library()`/`require()` plus
/// well-known packages it mentions by name.
pub fn extract_packages(content: &str) -> BTreeSet<String> {
    let mut packages = BTreeSet::new();

    for caps in LIBRARY_CALL.captures_iter(content) {
        packages.insert(caps[1].to_string());
    }

    let content_lower = content.to_lowercase();
    for package in KNOWN_PACKAGES {
        if content_lower.contains(&package.to_lowercase()) {
            packages.insert(package.to_string());
        }
    }

    while packages.len() > MAX_PACKAGES {
        let last = packages.iter().next_back().cloned();
        if let Some(last) = last {
            packages.remove(&last);
        }
    }

    packages
}

/// Learning objectives for a tutorial. Always yields at least one entry.
pub fn extract_objectives(topic: &str, expertise: Expertise) -> Vec<String> {
    let mut objectives = vec![
        format!("Understand the fundamentals of {}", topic),
        format!("Apply {} concepts in practical R programming", topic),
        format!("Implement {} solutions for real-world problems", topic),
    ];

    objectives.push(match expertise {
        Expertise::Beginner => format!("Get started with {} basics in R", topic),
        Expertise::Intermediate => format!("Master intermediate {} techniques", topic),
        Expertise::Expert => format!("Explore advanced {} implementations", topic),
    });

    objectives
}

/// Difficulty on a 1-10 scale: expertise baseline nudged by content wording.
pub fn difficulty_score(content: &str, expertise: Expertise) -> u8 {
    let mut score = expertise.base_difficulty() as i8;
    let content_lower = content.to_lowercase();

    if ["advanced", "optimization", "algorithm", "bayesian"]
        .iter()
        .any(|term| content_lower.contains(term))
    {
        score += 1;
    }
    if ["simple", "basic", "introduction", "getting started"]
        .iter()
        .any(|term| content_lower.contains(term))
    {
        score -= 1;
    }

    score.clamp(1, 10) as u8
}

pub fn categorize_topic(topic: &str) -> String {
    let topic_lower = topic.to_lowercase();

    let categories: &[(&str, &[&str])] = &[
        (
            "data_structures",
            &["data frame", "vector", "list", "matrix", "structure"],
        ),
        (
            "visualization",
            &["plot", "graph", "visual", "chart", "ggplot"],
        ),
        (
            "modeling",
            &["model", "regression", "machine learning", "statistic", "analysis"],
        ),
        (
            "data_wrangling",
            &["dplyr", "tidyr", "wrangle", "clean", "transform", "manipul"],
        ),
        (
            "web_development",
            &["shiny", "web", "app", "dashboard", "interactive"],
        ),
        (
            "programming",
            &["function", "package", "library", "programming", "code"],
        ),
    ];

    for (category, keywords) in categories {
        if keywords.iter().any(|k| topic_lower.contains(k)) {
            return (*category).to_string();
        }
    }

    "general".to_string()
}

pub fn build_metrics(content: &str, expertise: Expertise) -> ContentMetrics {
    let word_count = content.split_whitespace().count();
    ContentMetrics {
        word_count,
        char_count: content.chars().count(),
        estimated_difficulty: difficulty_score(content, expertise),
        estimated_reading_minutes: ((word_count / READING_WORDS_PER_MINUTE).max(1)) as u32,
    }
}

fn title_case(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_library_calls_when_extracting_packages_then_all_found() {
        let content = r#"library(ggplot2)
require("dplyr")
library('tidyr')"#;
        let packages = extract_packages(content);
        assert!(packages.contains("ggplot2"));
        assert!(packages.contains("dplyr"));
        assert!(packages.contains("tidyr"));
    }

    #[test]
    fn given_any_topic_when_extracting_objectives_then_never_empty() {
        for expertise in [Expertise::Beginner, Expertise::Intermediate, Expertise::Expert] {
            let objectives = extract_objectives("Vectors", expertise);
            assert!(!objectives.is_empty());
            assert!(objectives.iter().all(|o| o.contains("Vectors")));
        }
    }

    #[test]
    fn given_topic_words_when_extracting_concepts_then_included_title_cased() {
        let concepts = extract_concepts("nothing relevant here", "linear regression");
        assert!(concepts.contains(&"Linear".to_string()));
        assert!(concepts.contains(&"Regression".to_string()));
    }

    #[test]
    fn given_basic_wording_when_scoring_difficulty_then_stays_in_range() {
        let score = difficulty_score("a simple basic introduction", Expertise::Beginner);
        assert!((1..=10).contains(&score));
        assert!(score < Expertise::Beginner.base_difficulty() + 1);
    }

    #[test]
    fn given_known_topics_when_categorizing_then_expected_buckets() {
        assert_eq!(categorize_topic("Data Frames in R"), "data_structures");
        assert_eq!(categorize_topic("ggplot2 charts"), "visualization");
        assert_eq!(categorize_topic("Shiny dashboards"), "web_development");
        assert_eq!(categorize_topic("something else"), "general");
    }

    #[test]
    fn given_short_content_when_building_metrics_then_reading_time_at_least_one() {
        let metrics = build_metrics("just a few words", Expertise::Beginner);
        assert_eq!(metrics.estimated_reading_minutes, 1);
        assert_eq!(metrics.word_count, 4);
    }
}
