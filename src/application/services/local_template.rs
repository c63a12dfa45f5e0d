use std::fmt::Write;

use crate::domain::TutorialRequest;
use crate::infrastructure::text_processing::extract_objectives;

/// Renders a complete tutorial without any external service. Used when every
/// configured text provider has failed, or none is configured at all.
///
/// Deterministic: same request, same markdown.
pub fn render_local_tutorial(request: &TutorialRequest) -> String {
    let topic = request.topic();
    let expertise = request.expertise();
    let duration = request.duration_minutes();
    let objectives = extract_objectives(topic, expertise);

    let mut content = format!(
        "# R Tutorial: {topic} ({expertise} Level)\n\n\
Welcome to this {duration}-minute tutorial on {topic}!\n\n\
## Learning Objectives\n\n\
By the end of this tutorial, you'll be able to:\n"
    );

    for objective in &objectives {
        // Writing into a String cannot fail.
        let _ = writeln!(content, "- {}", objective);
    }

    let _ = write!(
        content,
        "\n## Core Concepts\n\n\
Understanding {topic} starts with how R represents your data and what the \
core functions expect. We will work through the essential ideas step by \
step, connecting each one to code you can run yourself.\n\n\
## Hands-On Example\n\n\
```r\n\
# A first look at {topic} in R\n\
# Explore the built-in iris data set\n\
str(iris)\n\
summary(iris)\n\
```\n\n\
Run the example in your own session and inspect the output. Reading R's \
responses closely is the fastest way to build intuition for {topic}.\n\n\
## Real-World Applications\n\n\
{topic} shows up across data analysis, statistical modeling, reporting, \
and research workflows. The patterns you practice here transfer directly \
to those settings.\n\n\
## Summary and Next Steps\n\n\
You've covered the essentials of {topic} in R. Keep momentum by practicing \
with real data sets, exploring the documentation, and building a small \
project that uses {topic} end to end.\n"
    );

    content
}
