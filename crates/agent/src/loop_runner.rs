//! The agent reasoning loop implementation.

use std::sync::Arc;
use unitwise_core::message::{Conversation, Message, Role};
use unitwise_core::provider::{Provider, ProviderRequest};
use unitwise_core::tool::{ToolCall, ToolRegistry};
use tracing::{debug, info, warn};

/// Returned when the model keeps calling tools past the iteration limit.
pub const MAX_ITERATIONS_REPLY: &str =
    "I've reached the maximum number of tool call iterations. Please rephrase the request.";

/// The core agent loop that orchestrates LLM calls and tool execution.
pub struct AgentLoop {
    /// The LLM provider to use
    provider: Arc<dyn Provider>,

    /// The model to use
    model: String,

    temperature: f32,

    /// Default max tokens per response
    max_tokens: Option<u32>,

    /// Tool registry
    tools: Arc<ToolRegistry>,

    /// System prompt placed at the head of every conversation
    instructions: String,

    /// Maximum tool call iterations per turn
    max_iterations: u32,
}

impl AgentLoop {
    /// Create a new agent loop.
    pub fn new(
        provider: Arc<dyn Provider>,
        model: impl Into<String>,
        temperature: f32,
        tools: Arc<ToolRegistry>,
        instructions: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            model: model.into(),
            temperature,
            max_tokens: None,
            tools,
            instructions: instructions.into(),
            max_iterations: 5,
        }
    }

    /// Set the maximum number of tool call iterations.
    pub fn with_max_iterations(mut self, max: u32) -> Self {
        self.max_iterations = max;
        self
    }

    /// Set the default max tokens per LLM response.
    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = Some(max);
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Process a conversation and generate a response.
    ///
    /// 1. Puts the instructions first as the system message
    /// 2. Calls the LLM with the tool definitions
    /// 3. If tool calls are returned, executes them and loops
    /// 4. Returns the final text response
    pub async fn process(
        &self,
        conversation: &mut Conversation,
    ) -> Result<String, unitwise_core::Error> {
        info!(
            conversation_id = %conversation.id,
            messages = conversation.messages.len(),
            "Processing conversation"
        );

        if conversation.messages.first().is_some_and(|m| m.role == Role::System) {
            conversation.messages[0] = Message::system(&self.instructions);
        } else {
            conversation.messages.insert(0, Message::system(&self.instructions));
        }

        let tool_definitions = self.tools.definitions();

        for iteration in 1..=self.max_iterations {
            debug!(
                conversation_id = %conversation.id,
                iteration,
                "Agent loop iteration"
            );

            let request = ProviderRequest {
                model: self.model.clone(),
                messages: conversation.messages.clone(),
                temperature: self.temperature,
                max_tokens: self.max_tokens,
                tools: tool_definitions.clone(),
            };

            let response = self.provider.complete(request).await?;

            if let Some(usage) = &response.usage {
                debug!(
                    model = %response.model,
                    tokens = usage.total_tokens,
                    "Provider usage"
                );
            }

            if response.message.tool_calls.is_empty() {
                let response_text = response.message.content.clone();
                conversation.push(response.message);
                return Ok(response_text);
            }

            debug!(
                tool_count = response.message.tool_calls.len(),
                "Executing tool calls"
            );

            let tool_calls = response.message.tool_calls.clone();
            conversation.push(response.message);

            for tc in &tool_calls {
                let arguments = match serde_json::from_str(&tc.arguments) {
                    Ok(args) => args,
                    Err(e) => {
                        warn!(tool = %tc.name, error = %e, "Tool arguments are not valid JSON");
                        conversation.push(Message::tool_result(
                            &tc.id,
                            format!("Error: arguments are not valid JSON: {e}"),
                        ));
                        continue;
                    }
                };

                let call = ToolCall {
                    id: tc.id.clone(),
                    name: tc.name.clone(),
                    arguments,
                };

                match self.tools.execute(&call).await {
                    Ok(tool_result) => {
                        debug!(tool = %tc.name, success = tool_result.success, "Tool executed");
                        conversation.push(Message::tool_result(&tc.id, &tool_result.output));
                    }
                    Err(e) => {
                        warn!(tool = %tc.name, error = %e, "Tool execution failed");
                        // Report error to the LLM so it can recover
                        conversation.push(Message::tool_result(&tc.id, format!("Error: {e}")));
                    }
                }
            }
        }

        warn!(
            conversation_id = %conversation.id,
            max_iterations = self.max_iterations,
            "Max tool iterations reached"
        );
        Ok(MAX_ITERATIONS_REPLY.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use unitwise_core::error::ProviderError;
    use unitwise_core::message::MessageToolCall;
    use unitwise_core::provider::{ProviderResponse, Usage};
    use unitwise_core::units::UnitRegistry;

    /// A mock provider that replays scripted responses and records requests.
    struct ScriptedProvider {
        responses: Mutex<Vec<ProviderResponse>>,
        requests: Mutex<Vec<ProviderRequest>>,
    }

    impl ScriptedProvider {
        fn new(mut responses: Vec<ProviderResponse>) -> Self {
            responses.reverse();
            Self {
                responses: Mutex::new(responses),
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait::async_trait]
    impl Provider for ScriptedProvider {
        fn name(&self) -> &str { "mock" }

        async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, ProviderError> {
            self.requests.lock().unwrap().push(request);
            self.responses
                .lock()
                .unwrap()
                .pop()
                .ok_or_else(|| ProviderError::NotConfigured("script exhausted".into()))
        }
    }

    fn text(content: &str) -> ProviderResponse {
        ProviderResponse {
            message: Message::assistant(content),
            usage: Some(Usage {
                prompt_tokens: 10,
                completion_tokens: 5,
                total_tokens: 15,
            }),
            model: "mock-model".into(),
        }
    }

    fn call(id: &str, name: &str, arguments: &str) -> ProviderResponse {
        let mut message = Message::assistant("");
        message.tool_calls = vec![MessageToolCall {
            id: id.into(),
            name: name.into(),
            arguments: arguments.into(),
        }];
        ProviderResponse { message, usage: None, model: "mock-model".into() }
    }

    fn agent(provider: Arc<ScriptedProvider>) -> AgentLoop {
        let tools = Arc::new(unitwise_tools::default_registry(Arc::new(UnitRegistry::standard())));
        AgentLoop::new(provider, "mock-model", 0.0, tools, "convert things")
    }

    #[tokio::test]
    async fn simple_text_response() {
        let provider = Arc::new(ScriptedProvider::new(vec![text("Hello!")]));
        let agent = agent(provider);

        let mut conv = Conversation::new();
        conv.push(Message::user("Hi"));

        let response = agent.process(&mut conv).await.unwrap();
        assert_eq!(response, "Hello!");
        // System + User + Assistant = 3 messages
        assert_eq!(conv.messages.len(), 3);
        assert_eq!(conv.messages[0].content, "convert things");
    }

    #[tokio::test]
    async fn tool_result_is_fed_back() {
        let provider = Arc::new(ScriptedProvider::new(vec![
            call("call_1", "convert_units", r#"{"value": 2, "src_unit": "km", "tgt_unit": "m"}"#),
            text("2000"),
        ]));
        let agent = agent(provider.clone());

        let mut conv = Conversation::new();
        conv.push(Message::user("2 km in meters?"));

        let response = agent.process(&mut conv).await.unwrap();
        assert_eq!(response, "2000");

        let tool_msg = conv.messages.iter().find(|m| m.role == Role::Tool).unwrap();
        assert_eq!(tool_msg.content, "2000.0");
        assert_eq!(tool_msg.tool_call_id.as_deref(), Some("call_1"));

        let requests = provider.requests.lock().unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].tools.len(), 2);
    }

    #[tokio::test]
    async fn unknown_tool_reported_to_model() {
        let provider = Arc::new(ScriptedProvider::new(vec![
            call("call_1", "weather", "{}"),
            text("sorry"),
        ]));
        let agent = agent(provider);

        let mut conv = Conversation::new();
        conv.push(Message::user("weather?"));
        agent.process(&mut conv).await.unwrap();

        let tool_msg = conv.messages.iter().find(|m| m.role == Role::Tool).unwrap();
        assert!(tool_msg.content.contains("Tool not found: weather"));
    }

    #[tokio::test]
    async fn malformed_arguments_reported_to_model() {
        let provider = Arc::new(ScriptedProvider::new(vec![
            call("call_1", "convert_units", "{not json"),
            text("retrying"),
        ]));
        let agent = agent(provider);

        let mut conv = Conversation::new();
        conv.push(Message::user("1 km?"));
        agent.process(&mut conv).await.unwrap();

        let tool_msg = conv.messages.iter().find(|m| m.role == Role::Tool).unwrap();
        assert!(tool_msg.content.starts_with("Error: arguments are not valid JSON"));
    }

    #[tokio::test]
    async fn stops_after_max_iterations() {
        let looping = (0..3)
            .map(|i| call(&format!("call_{i}"), "list_units", "{}"))
            .collect();
        let provider = Arc::new(ScriptedProvider::new(looping));
        let agent = agent(provider.clone()).with_max_iterations(2);

        let mut conv = Conversation::new();
        conv.push(Message::user("loop forever"));

        let response = agent.process(&mut conv).await.unwrap();
        assert_eq!(response, MAX_ITERATIONS_REPLY);
        assert_eq!(provider.requests.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn provider_error_propagates() {
        let provider = Arc::new(ScriptedProvider::new(vec![]));
        let agent = agent(provider);

        let mut conv = Conversation::new();
        conv.push(Message::user("hi"));
        let err = agent.process(&mut conv).await.unwrap_err();
        assert!(matches!(err, unitwise_core::Error::Provider(_)));
    }
}
