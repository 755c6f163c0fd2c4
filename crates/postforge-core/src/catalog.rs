//! Static platform / tone configuration catalog.
//!
//! Pure data, built once at startup and read-only afterwards.  Lookups never
//! fail: an unrecognized name falls back to the first-defined entry
//! (LinkedIn / Professional), so the pipeline always has a usable
//! configuration.

/// Per-platform prompt template and sampling defaults.
#[derive(Debug, Clone)]
pub struct PlatformConfig {
    pub name: String,
    /// Platform-specific structural instructions, the first prompt section.
    pub prompt_template: String,
    /// Output token cap for this platform, before headroom scaling.
    pub max_output_tokens: u32,
    /// Default sampling temperature in [0, 1].
    pub temperature: f32,
}

/// A tone name plus the style guidance interpolated into the prompt.
#[derive(Debug, Clone)]
pub struct ToneDirective {
    pub name: String,
    pub guidance: String,
    /// When set, overrides the platform temperature for this tone.
    pub temperature_override: Option<f32>,
}

/// Immutable platform / tone tables.
#[derive(Debug, Clone)]
pub struct Catalog {
    platforms: Vec<PlatformConfig>,
    tones: Vec<ToneDirective>,
}

impl Catalog {
    /// Look up a platform by name, falling back to the default (first) entry.
    pub fn lookup_platform(&self, name: &str) -> &PlatformConfig {
        self.platforms
            .iter()
            .find(|p| p.name == name)
            .unwrap_or(&self.platforms[0])
    }

    /// Look up a tone by name, falling back to the default (first) entry.
    pub fn lookup_tone(&self, name: &str) -> &ToneDirective {
        self.tones
            .iter()
            .find(|t| t.name == name)
            .unwrap_or(&self.tones[0])
    }

    pub fn platform_names(&self) -> Vec<&str> {
        self.platforms.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn tone_names(&self) -> Vec<&str> {
        self.tones.iter().map(|t| t.name.as_str()).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            platforms: vec![
                PlatformConfig {
                    name: "LinkedIn".into(),
                    prompt_template: "Write a professional LinkedIn post with:\n\
                        1. A strong opening hook\n\
                        2. Practical insights\n\
                        3. Relevant data points\n\
                        4. A clear call-to-action\n\
                        5. 3-5 strategic hashtags"
                        .into(),
                    max_output_tokens: 400,
                    temperature: 0.7,
                },
                PlatformConfig {
                    name: "Instagram".into(),
                    prompt_template: "Write an Instagram post with:\n\
                        1. Strategic emoji use\n\
                        2. Concise text (max 2200 characters)\n\
                        3. An engaging question\n\
                        4. Popular hashtags (5-10)\n\
                        5. A relaxed, visual-first voice"
                        .into(),
                    max_output_tokens: 300,
                    temperature: 0.8,
                },
                PlatformConfig {
                    name: "Facebook".into(),
                    prompt_template: "Write a Facebook post with:\n\
                        1. An intriguing title\n\
                        2. A conversational body\n\
                        3. Questions that invite comments\n\
                        4. A prompt to share\n\
                        5. A moderate number of hashtags"
                        .into(),
                    max_output_tokens: 500,
                    temperature: 0.7,
                },
                PlatformConfig {
                    name: "Twitter/X".into(),
                    prompt_template: "Write a thread (2-3 tweets) for Twitter with:\n\
                        1. Tweet 1: hook + main point\n\
                        2. Tweet 2: a statistic or example\n\
                        3. Tweet 3: conclusion + CTA\n\
                        4. Popular hashtags (2-3)\n\
                        5. Mentions of relevant accounts where it fits"
                        .into(),
                    max_output_tokens: 350,
                    temperature: 0.75,
                },
            ],
            tones: vec![
                ToneDirective {
                    name: "Professional".into(),
                    guidance: "corporate language, moderate formality, grounded in data".into(),
                    temperature_override: None,
                },
                ToneDirective {
                    name: "Humorous".into(),
                    guidance: "light humour, relaxed voice, creative analogies".into(),
                    temperature_override: Some(0.8),
                },
                ToneDirective {
                    name: "Technical".into(),
                    guidance: "precise terminology, detailed explanations, accuracy first".into(),
                    temperature_override: None,
                },
                ToneDirective {
                    name: "Persuasive".into(),
                    guidance: "solid argumentation, clear benefits, strong call-to-action".into(),
                    temperature_override: None,
                },
                ToneDirective {
                    name: "Inspirational".into(),
                    guidance: "emotional storytelling, motivational message, elevated voice".into(),
                    temperature_override: None,
                },
                ToneDirective {
                    name: "Casual".into(),
                    guidance: "colloquial language, first person, personal voice".into(),
                    temperature_override: None,
                },
            ],
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
