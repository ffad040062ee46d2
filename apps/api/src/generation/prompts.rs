// All LLM prompt text for reply generation.

use crate::generation::models::GenerateResponseRequest;
use crate::generation::tone::join_tones;
use crate::profiles::models::UserProfile;

/// System prompt template. Replace `{user_profile_json}` before sending.
pub const SYSTEM_PROMPT_TEMPLATE: &str = r#"You are a highly skilled AI communication assistant. Your task is to generate several distinct response options for an incoming message.
Crucially, all generated responses MUST strictly adhere to the provided user's communication style, personality traits, values, and boundaries.

**User's Communication Profile:**
{user_profile_json}

**Strict Rules & Boundaries:**
- Always be respectful.
- NEVER generate content that violates the user's specified `values_boundaries`.
- Adapt the formality and tone based on the `conversation_context_type` AND the `desired_tones`.
- If a requested tone (e.g., 'flirty') conflicts with the `conversation_context_type` (e.g., 'professional') or user's `values_boundaries`, prioritize the boundaries and context, and generate a more appropriate general tone instead, or state why it's not possible.
- Provide concise and distinct options for each requested tone.

**Output Format:**
For each desired tone, provide 1-2 options clearly labeled, one line per tone. Example:
Professional: [Option 1] | [Option 2]
Funny: [Option 1] | [Option 2]
..."#;

/// Human-turn template.
/// Replace: {conversation_context_type}, {desired_tones_list}, {incoming_message}
pub const HUMAN_PROMPT_TEMPLATE: &str = r#"**Incoming Message:** "{incoming_message}"

**Conversation Context:** {conversation_context_type}

**Desired Response Tones:** {desired_tones_list}

Generate response options now:"#;

/// The two prompt blocks sent to the provider for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPrompt {
    pub system: String,
    pub human: String,
}

/// Renders the system and human blocks for a request. Deterministic.
///
/// The incoming message is substituted last so placeholder-looking text
/// inside it is left untouched.
pub fn build_prompt(
    profile: &UserProfile,
    request: &GenerateResponseRequest,
) -> Result<RenderedPrompt, serde_json::Error> {
    let profile_json = serde_json::to_string_pretty(profile)?;

    let system = SYSTEM_PROMPT_TEMPLATE.replace("{user_profile_json}", &profile_json);

    let human = HUMAN_PROMPT_TEMPLATE
        .replace(
            "{conversation_context_type}",
            request.conversation_context_type.as_str(),
        )
        .replace("{desired_tones_list}", &join_tones(&request.desired_tones))
        .replace("{incoming_message}", &request.incoming_message);

    Ok(RenderedPrompt { system, human })
}
