//! Generation pipeline: profile lookup → prompt render → one provider call → parse.

use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::generation::models::{GenerateResponseRequest, GeneratedOptions};
use crate::generation::parser::parse_options;
use crate::generation::prompts::build_prompt;
use crate::llm_client::CompletionProvider;
use crate::profiles::store::ProfileStore;
use crate::profiles::PROFILE_NOT_FOUND;

/// Drafts reply options for `request` against the caller's stored profile.
///
/// Unknown users fail with `NotFound` before any provider call is made.
/// Provider failures are returned as-is; nothing is retried.
pub async fn generate_options(
    profiles: &ProfileStore,
    llm: &dyn CompletionProvider,
    request: &GenerateResponseRequest,
) -> Result<GeneratedOptions, AppError> {
    if request.desired_tones.is_empty() {
        return Err(AppError::Validation(
            "desired_tones must contain at least one tone".to_string(),
        ));
    }

    let profile = profiles
        .get(&request.user_id)
        .await
        .ok_or_else(|| AppError::NotFound(PROFILE_NOT_FOUND.to_string()))?;

    let prompt = build_prompt(&profile, request).map_err(|e| AppError::Internal(e.into()))?;

    // Failures are logged once, where AppError becomes a response.
    let completion = llm.complete(&prompt.system, &prompt.human).await?;

    let options = parse_options(&completion);

    debug!(
        "Parsed tone labels: {:?}",
        options.labels().collect::<Vec<_>>()
    );

    if options.is_empty() {
        warn!(
            "Completion for user {} produced no parseable options",
            request.user_id
        );
    }

    info!(
        "Generated {} options across {} tones for user {} ({} requested)",
        options.option_count(),
        options.len(),
        request.user_id,
        request.desired_tones.len()
    );

    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::generation::tone::{ConversationContext, DesiredTone};
    use crate::llm_client::LlmError;
    use crate::profiles::models::{CommunicationStyle, Personality, UserProfile};

    /// Returns a fixed completion and records what it was sent.
    struct CannedProvider {
        completion: String,
        calls: AtomicUsize,
        last_human: Mutex<Option<String>>,
    }

    impl CannedProvider {
        fn new(completion: &str) -> Self {
            Self {
                completion: completion.to_string(),
                calls: AtomicUsize::new(0),
                last_human: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl CompletionProvider for CannedProvider {
        async fn complete(&self, _system: &str, human: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_human.lock().unwrap() = Some(human.to_string());
            Ok(self.completion.clone())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl CompletionProvider for FailingProvider {
        async fn complete(&self, _system: &str, _human: &str) -> Result<String, LlmError> {
            Err(LlmError::Timeout("deadline exceeded".to_string()))
        }
    }

    async fn store_with(id: &str) -> ProfileStore {
        let store = ProfileStore::new();
        store
            .set(UserProfile {
                id: id.to_string(),
                personality: Personality::default(),
                communication_style: CommunicationStyle::default(),
                values_boundaries: vec![],
            })
            .await;
        store
    }

    fn request(user_id: &str, tones: Vec<DesiredTone>) -> GenerateResponseRequest {
        GenerateResponseRequest {
            user_id: user_id.to_string(),
            incoming_message: "Want to grab lunch?".to_string(),
            conversation_context_type: ConversationContext::Casual,
            desired_tones: tones,
        }
    }

    #[tokio::test]
    async fn test_parses_provider_completion() {
        let store = store_with("alice").await;
        let llm = CannedProvider::new("Professional: Hello there. | Good day.\nFunny: lol no");

        let options = generate_options(&store, &llm, &request("alice", vec![DesiredTone::Funny]))
            .await
            .unwrap();

        assert_eq!(options.len(), 2);
        assert_eq!(llm.calls.load(Ordering::SeqCst), 1);
        let human = llm.last_human.lock().unwrap().clone().unwrap();
        assert!(human.contains("Want to grab lunch?"));
    }

    #[tokio::test]
    async fn test_unknown_user_never_calls_provider() {
        let store = store_with("alice").await;
        let llm = CannedProvider::new("Funny: hi");

        let err = generate_options(&store, &llm, &request("bob", vec![DesiredTone::Funny]))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(ref m) if m == PROFILE_NOT_FOUND));
        assert_eq!(llm.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_empty_tones_rejected_before_provider_call() {
        let store = store_with("alice").await;
        let llm = CannedProvider::new("Funny: hi");

        let err = generate_options(&store, &llm, &request("alice", vec![]))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(llm.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_provider_failure_propagates_as_llm_error() {
        let store = store_with("alice").await;

        let err = generate_options(&store, &FailingProvider, &request("alice", vec![DesiredTone::Direct]))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Llm(LlmError::Timeout(_))));
        assert!(store.get("alice").await.is_some());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_unparseable_completion_yields_empty_options() {
        let store = store_with("alice").await;
        let llm = CannedProvider::new("I'd rather not answer that.");

        let options = generate_options(&store, &llm, &request("alice", vec![DesiredTone::Flirty]))
            .await
            .unwrap();

        assert!(options.is_empty());
    }
}
