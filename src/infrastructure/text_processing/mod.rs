mod content_analysis;
mod speech_normalizer;

pub use content_analysis::{
    build_metrics, categorize_topic, difficulty_score, extract_concepts, extract_objectives,
    extract_packages,
};
pub use speech_normalizer::normalize_for_speech;
