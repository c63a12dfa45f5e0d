use std::fmt::Write;

use crate::domain::{Expertise, TutorialRequest};

/// Average speaking rate for educational narration.
const WORDS_PER_SPOKEN_MINUTE: u32 = 140;

/// Section time shares of the total runtime. The introduction is additionally
/// capped at sixty seconds regardless of total duration.
const INTRO_SHARE: f64 = 0.15;
const CORE_SHARE: f64 = 0.50;
const EXAMPLES_SHARE: f64 = 0.25;
const SUMMARY_SHARE: f64 = 0.10;

const INTRO_CAP_SECONDS: u32 = 60;

/// Builds the chat-completion prompt for a tutorial request.
///
/// Pure: same request, same prompt. Validation already happened when the
/// `TutorialRequest` was constructed, so nothing here can fail.
pub fn build_prompt(request: &TutorialRequest) -> String {
    let duration = request.duration_minutes();
    let total_seconds = duration * 60;

    let intro_seconds = section_seconds(total_seconds, INTRO_SHARE).min(INTRO_CAP_SECONDS);
    let core_seconds = section_seconds(total_seconds, CORE_SHARE);
    let examples_seconds = section_seconds(total_seconds, EXAMPLES_SHARE);
    let summary_seconds = section_seconds(total_seconds, SUMMARY_SHARE);

    let target_words = duration * WORDS_PER_SPOKEN_MINUTE;

    let mut prompt = format!(
        "Create a comprehensive {duration}-minute R programming tutorial on \"{topic}\" \
for {expertise} level users.\n\
Duration: {duration} minutes (approximately {target_words} words).\n\n\
**Tutorial Structure:**\n\
1. Introduction and Overview ({intro_seconds} seconds)\n\
   - Hook the audience with real-world relevance\n\
   - Clear learning objectives\n\
   - Prerequisites and setup\n\
2. Core Concepts Deep Dive ({core_seconds} seconds)\n\
   - Detailed explanations with visual metaphors\n\
   - Theory to practice connections\n\
   - Common misconceptions and clarifications\n\
3. Hands-On Code Examples ({examples_seconds} seconds)\n\
   - Multiple practical examples with detailed comments\n\
   - Progressive difficulty building\n\
   - Real-world applications and use cases\n\
4. Summary and Advanced Tips ({summary_seconds} seconds)\n\
   - Key takeaways and recap\n\
   - Next steps for continued learning\n\n\
**Content Requirements:**\n\
- Write in a conversational, audio-friendly style\n\
- Include working R code examples with clear verbal explanations\n\
- Stay focused on \"{topic}\" as the main subject\n\n\
**Expertise Level Guidelines:**{guidance}",
        topic = request.topic(),
        expertise = request.expertise(),
        guidance = expertise_guidance(request.expertise()),
    );

    append_preferences(&mut prompt, request);

    prompt
}

fn section_seconds(total_seconds: u32, share: f64) -> u32 {
    (total_seconds as f64 * share).round() as u32
}

fn expertise_guidance(expertise: Expertise) -> &'static str {
    match expertise {
        Expertise::Beginner => {
            "\n- Assume NO prior knowledge of this topic\
             \n- Define ALL technical terms clearly\
             \n- Use simple, step-by-step explanations\
             \n- Focus on fundamental concepts before advanced applications"
        }
        Expertise::Intermediate => {
            "\n- Assume basic R knowledge but not necessarily this specific topic\
             \n- Include intermediate techniques and best practices\
             \n- Show multiple ways to solve problems\
             \n- Discuss when to use different approaches"
        }
        Expertise::Expert => {
            "\n- Assume solid R foundation and some topic knowledge\
             \n- Focus on advanced techniques and optimization\
             \n- Discuss edge cases and complex scenarios\
             \n- Include performance considerations"
        }
    }
}

fn append_preferences(prompt: &mut String, request: &TutorialRequest) {
    let preference_lines: Vec<(&str, &str)> = [
        ("focus_areas", "Focus areas"),
        ("learning_style", "Learning style"),
        ("industry_context", "Industry context"),
    ]
    .iter()
    .filter_map(|(key, label)| request.preference(key).map(|value| (*label, value)))
    .collect();

    if preference_lines.is_empty() {
        return;
    }

    prompt.push_str("\n\n**User Preferences:**");
    for (label, value) in preference_lines {
        // Writing into a String cannot fail.
        let _ = write!(prompt, "\n- {}: {}", label, value);
    }
}
