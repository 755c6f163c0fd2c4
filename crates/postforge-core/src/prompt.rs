//! Prompt composition.
//!
//! Pure string assembly: identical inputs always produce byte-identical
//! prompts.  Sections appear in a fixed order so the output contract to the
//! model is stable and testable.

use crate::catalog::{PlatformConfig, ToneDirective};
use crate::request::GenerationRequest;

/// Build the user-turn prompt from platform template, tone directive and the
/// request fields.  Optional sections (keywords, style) are included only
/// when present and non-empty.
pub fn compose(
    platform: &PlatformConfig,
    tone: &ToneDirective,
    request: &GenerationRequest,
) -> String {
    let mut sections: Vec<String> = Vec::new();

    sections.push(platform.prompt_template.clone());

    sections.push(format!("TONE: {} - {}", tone.name, tone.guidance));

    sections.push(format!("TOPIC: {}", request.topic.trim()));

    if let Some(keywords) = request.keywords.as_deref() {
        if !keywords.trim().is_empty() {
            sections.push(format!(
                "INCLUDE THESE KEYWORDS/HASHTAGS: {}",
                keywords.trim()
            ));
        }
    }

    if let Some(style) = request.style.as_deref() {
        if !style.trim().is_empty() {
            sections.push(format!("WRITING STYLE: {}", style.trim()));
        }
    }

    sections.push(format!(
        "LENGTH: {} (approximately {} words)",
        request.length.as_str(),
        request.length.target_words()
    ));

    sections.push(format!(
        "IMPORTANT RULES:\n\
         1. Do NOT use markdown beyond **bold** for emphasis\n\
         2. Do NOT add headers like \"Post:\" or \"Article:\"\n\
         3. BE specific and avoid generalities\n\
         4. ADAPT fully to the {} tone\n\
         5. Use short paragraphs for readability",
        tone.name
    ));

    sections.push(
        "CONTENT STRUCTURE:\n\
         - An attention-grabbing introduction\n\
         - A body that delivers value\n\
         - A conclusion with a clear CTA\n\
         - Relevant hashtags at the end"
            .into(),
    );

    sections.join("\n\n")
}

// ── Tests ──────────────────────────────────────────────────────────────────────
