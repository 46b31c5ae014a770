//! Prompt/response mediation for one chat turn

use std::sync::Arc;

use astra_core::config::ChatConfig;
use astra_core::session::{Role, SessionManager};
use astra_core::{Error, Result};
use astra_providers::GeminiClient;
use tracing::{debug, info};

/// Mediates a single chat turn: records the user message, assembles the
/// prompt from the persona preamble plus the session history, performs one
/// provider call, records the reply, and returns it.
pub struct ChatService {
    sessions: Arc<SessionManager>,
    client: GeminiClient,
    persona: String,
    closing_instruction: String,
}

impl ChatService {
    /// Create a new chat service over an injected session store
    pub fn new(sessions: Arc<SessionManager>, client: GeminiClient, chat: &ChatConfig) -> Self {
        Self {
            sessions,
            client,
            persona: chat.persona.clone(),
            closing_instruction: chat.closing_instruction.clone(),
        }
    }

    /// Process one user turn and return the assistant reply.
    ///
    /// If the provider call fails, the user message stays recorded and no
    /// assistant message is appended. Callers see the orphaned turn in the
    /// next prompt; that mirrors the original service's behavior.
    pub async fn handle_turn(&self, session: &str, message: &str) -> Result<String> {
        let message = message.trim();
        if message.is_empty() {
            return Err(Error::InvalidInput("message must not be empty".to_string()));
        }

        self.sessions.append(session, Role::User, message);

        let prompt = self.build_prompt(session);
        debug!(session, prompt_len = prompt.len(), "assembled prompt");

        let reply = self.client.generate(&prompt).await?;

        self.sessions.append(session, Role::Assistant, reply.clone());
        info!(session, reply_len = reply.len(), "chat turn completed");

        Ok(reply)
    }

    /// Build the prompt string from the persona preamble and the current
    /// history snapshot. Deterministic for identical inputs.
    fn build_prompt(&self, session: &str) -> String {
        let mut prompt = format!("{}\n\nConversation history:\n", self.persona);

        for message in self.sessions.snapshot(session) {
            prompt.push_str(&format!("{}: {}\n", message.role, message.content));
        }

        prompt.push('\n');
        prompt.push_str(&self.closing_instruction);
        prompt
    }

    /// Clear a session's history
    pub fn clear(&self, session: &str) {
        self.sessions.clear(session);
        info!(session, "session history cleared");
    }

    /// The session store backing this service
    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astra_core::config::ProviderConfig;
    use astra_core::session::ChatMessage;

    const CANDIDATES_BODY: &str =
        r#"{"candidates":[{"content":{"parts":[{"text":"Hello"}]}}]}"#;

    fn service_for(server: &mockito::Server) -> (Arc<SessionManager>, ChatService) {
        let chat_config = ChatConfig {
            persona: "You are a test assistant.".to_string(),
            closing_instruction: "Reply to the latest message.".to_string(),
            max_history: 10,
        };
        let provider_config = ProviderConfig {
            api_key: "test-key".to_string(),
            api_base: server.url(),
            model: "gemini-1.5-flash".to_string(),
        };
        let sessions = Arc::new(SessionManager::new(chat_config.max_history));
        let service = ChatService::new(
            sessions.clone(),
            GeminiClient::new(&provider_config),
            &chat_config,
        );
        (sessions, service)
    }

    fn roles(history: &[ChatMessage]) -> Vec<Role> {
        history.iter().map(|m| m.role).collect()
    }

    #[tokio::test]
    async fn test_handle_turn_records_both_messages() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/gemini-1.5-flash:generateContent")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(CANDIDATES_BODY)
            .create_async()
            .await;

        let (sessions, service) = service_for(&server);
        let reply = service.handle_turn("default", "Hi").await.unwrap();

        assert_eq!(reply, "Hello");
        let history = sessions.snapshot("default");
        assert_eq!(roles(&history), vec![Role::User, Role::Assistant]);
        assert_eq!(history[0].content, "Hi");
        assert_eq!(history[1].content, "Hello");
    }

    #[tokio::test]
    async fn test_empty_message_rejected_without_history_mutation() {
        let server = mockito::Server::new_async().await;
        let (sessions, service) = service_for(&server);

        let err = service.handle_turn("default", "   \n\t ").await.unwrap_err();

        assert!(matches!(err, Error::InvalidInput(_)));
        assert!(sessions.snapshot("default").is_empty());
    }

    #[tokio::test]
    async fn test_upstream_failure_keeps_user_message_only() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/gemini-1.5-flash:generateContent")
            .match_query(mockito::Matcher::Any)
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let (sessions, service) = service_for(&server);
        let err = service.handle_turn("default", "Hi").await.unwrap_err();

        assert!(matches!(err, Error::Upstream(_)));
        let history = sessions.snapshot("default");
        assert_eq!(roles(&history), vec![Role::User]);
        assert_eq!(history[0].content, "Hi");
    }

    #[tokio::test]
    async fn test_empty_candidates_is_malformed_response() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/gemini-1.5-flash:generateContent")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"candidates":[]}"#)
            .create_async()
            .await;

        let (_, service) = service_for(&server);
        let err = service.handle_turn("default", "Hi").await.unwrap_err();

        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_prompt_includes_history_in_order() {
        let mut server = mockito::Server::new_async().await;
        // The prompt sent upstream must carry the persona, both recorded
        // turns, and the closing instruction, in that order.
        let expected_prompt = "You are a test assistant.\n\nConversation history:\nuser: Hi\nassistant: Hello\nuser: How are you?\n\nReply to the latest message.";
        server
            .mock("POST", "/gemini-1.5-flash:generateContent")
            .match_query(mockito::Matcher::Any)
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "contents": [{ "parts": [{ "text": expected_prompt }] }]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(CANDIDATES_BODY)
            .create_async()
            .await;

        let (sessions, service) = service_for(&server);
        sessions.append("default", Role::User, "Hi");
        sessions.append("default", Role::Assistant, "Hello");

        let reply = service.handle_turn("default", "How are you?").await.unwrap();
        assert_eq!(reply, "Hello");
    }

    #[tokio::test]
    async fn test_prompt_assembly_is_deterministic() {
        let server = mockito::Server::new_async().await;
        let (sessions, service) = service_for(&server);
        sessions.append("default", Role::User, "Hi");
        sessions.append("default", Role::Assistant, "Hello");

        let first = service.build_prompt("default");
        let second = service.build_prompt("default");
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_clear_empties_session() {
        let server = mockito::Server::new_async().await;
        let (sessions, service) = service_for(&server);
        sessions.append("default", Role::User, "Hi");

        service.clear("default");
        assert!(sessions.snapshot("default").is_empty());
    }
}
