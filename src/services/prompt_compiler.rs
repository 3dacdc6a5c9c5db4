//! Prompt compilation service.
//!
//! Turns a [`GenerationRequest`] into the two-message chat payload sent to the
//! completion service. The user instruction is rendered from a fixed template
//! with conditional clauses; the clause order never changes.

use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::{AppError, CompiledPrompt, GenerationRequest, SYSTEM_INSTRUCTION};

const TEMPLATE_NAME: &str = "generate";

/// User-instruction template. Clause order: topic, platform, tone, audience,
/// length, CTA directive, hashtags directive, optional keywords directive.
const USER_TEMPLATE: &str = "\
Write an SEO-optimized text on the topic '{{ topic }}'.
Return only the final text in your response and don't put it inside quotes.
- Platform where it will be published: {{ platform }}.
- Tone: {{ tone }}.
- Target audience: {{ audience }}.
- Length: {{ length }}.
- {% if include_cta %}Include a clear Call to Action.{% else %}Do not include a Call to Action.{% endif %}
- {% if include_hashtags %}Include relevant hashtags at the end of the text.{% else %}Do not include hashtags.{% endif %}\
{% if keywords %}
- Keywords to include (for SEO): {{ keywords }}{% endif %}";

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn template_env() -> &'static Environment<'static> {
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.add_template(TEMPLATE_NAME, USER_TEMPLATE).expect("embedded template is valid");
        env
    })
}

/// Compile a generation request into the chat payload.
///
/// Validates the request first; an empty topic is rejected before any
/// rendering happens. Compilation is deterministic: the same request always
/// produces the same prompt text.
pub fn compile_prompt(request: &GenerationRequest) -> Result<CompiledPrompt, AppError> {
    request.validate()?;

    let template = template_env()
        .get_template(TEMPLATE_NAME)
        .map_err(|err| AppError::Template(err.to_string()))?;

    let user = template
        .render(context! {
            topic => &request.topic,
            platform => request.platform.display_name(),
            tone => request.tone.display_name(),
            audience => request.audience.display_name(),
            length => request.length.display_name(),
            include_cta => request.include_cta,
            include_hashtags => request.include_hashtags,
            keywords => request.keywords.trim(),
        })
        .map_err(|err| AppError::Template(err.to_string()))?;

    Ok(CompiledPrompt { system: SYSTEM_INSTRUCTION.to_string(), user })
}
