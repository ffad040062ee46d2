//! Tone vocabulary — the reply tones a caller may request and the conversation
//! contexts that constrain them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A reply tone the caller asks the model to draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DesiredTone {
    Professional,
    Formal,
    SemiFormal,
    Chatty,
    Flirty,
    Funny,
    Empathetic,
    Direct,
    Diplomatic,
    Concise,
}

impl DesiredTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            DesiredTone::Professional => "professional",
            DesiredTone::Formal => "formal",
            DesiredTone::SemiFormal => "semi_formal",
            DesiredTone::Chatty => "chatty",
            DesiredTone::Flirty => "flirty",
            DesiredTone::Funny => "funny",
            DesiredTone::Empathetic => "empathetic",
            DesiredTone::Direct => "direct",
            DesiredTone::Diplomatic => "diplomatic",
            DesiredTone::Concise => "concise",
        }
    }
}

impl fmt::Display for DesiredTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The setting the incoming message arrived in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationContext {
    Professional,
    #[default]
    Casual,
    Personal,
    Dating,
    GroupChat,
    Other,
}

impl ConversationContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversationContext::Professional => "professional",
            ConversationContext::Casual => "casual",
            ConversationContext::Personal => "personal",
            ConversationContext::Dating => "dating",
            ConversationContext::GroupChat => "group_chat",
            ConversationContext::Other => "other",
        }
    }
}

impl fmt::Display for ConversationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renders tones the way the prompt lists them: `"funny, direct"`.
pub fn join_tones(tones: &[DesiredTone]) -> String {
    tones
        .iter()
        .map(DesiredTone::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_serde_name() {
        let all = [
            DesiredTone::Professional,
            DesiredTone::Formal,
            DesiredTone::SemiFormal,
            DesiredTone::Chatty,
            DesiredTone::Flirty,
            DesiredTone::Funny,
            DesiredTone::Empathetic,
            DesiredTone::Direct,
            DesiredTone::Diplomatic,
            DesiredTone::Concise,
        ];
        for tone in all {
            let json = serde_json::to_string(&tone).unwrap();
            assert_eq!(json, format!("\"{tone}\""));
        }
    }

    #[test]
    fn test_context_group_chat_serde() {
        let ctx: ConversationContext = serde_json::from_str(r#""group_chat""#).unwrap();
        assert_eq!(ctx, ConversationContext::GroupChat);
        assert_eq!(ctx.to_string(), "group_chat");
    }

    #[test]
    fn test_unknown_tone_rejected() {
        assert!(serde_json::from_str::<DesiredTone>(r#""sarcastic""#).is_err());
    }

    #[test]
    fn test_join_tones_comma_separated() {
        let joined = join_tones(&[DesiredTone::Funny, DesiredTone::SemiFormal]);
        assert_eq!(joined, "funny, semi_formal");
    }
}
