//! Core run loop: drive one prompt through tool-call rounds to a final answer.

use std::sync::Arc;

use serde_json::Value;

use crate::llm::{ChatMessage, LlmClient, Role, ToolCall};
use crate::tools::{Tool, ToolRegistry};

/// A model identifier paired with the endpoint client it is served by.
#[derive(Clone)]
pub struct ChatModel {
    pub model: String,
    pub client: Arc<dyn LlmClient>,
}

impl ChatModel {
    pub fn new(model: impl Into<String>, client: Arc<dyn LlmClient>) -> Self {
        Self {
            model: model.into(),
            client,
        }
    }
}

/// A named pairing of system instructions, a model, and callable tools.
///
/// Immutable once built; each demo constructs exactly one.
pub struct Agent {
    pub name: String,
    pub instructions: String,
    pub model: ChatModel,
    pub tools: ToolRegistry,
}

impl Agent {
    pub fn new(
        name: impl Into<String>,
        instructions: impl Into<String>,
        model: ChatModel,
    ) -> Self {
        Self {
            name: name.into(),
            instructions: instructions.into(),
            model,
            tools: ToolRegistry::new(),
        }
    }

    /// Attach a tool. Registration order is preserved in the schemas the
    /// model sees.
    pub fn with_tool(mut self, tool: Arc<dyn Tool>) -> Self {
        self.tools.register(tool);
        self
    }
}

/// The final answer of one run.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub final_output: String,
}

/// Drives an agent: send the prompt, resolve tool-call round trips, return
/// the model's final text.
pub struct Runner {
    max_rounds: usize,
}

impl Runner {
    /// `max_rounds` is a hard bound on model round trips per run.
    pub fn new(max_rounds: usize) -> Self {
        Self { max_rounds }
    }

    pub async fn run(&self, agent: &Agent, prompt: &str) -> anyhow::Result<RunResult> {
        let mut messages = vec![
            ChatMessage::system(agent.instructions.clone()),
            ChatMessage::user(prompt),
        ];

        let schemas = agent.tools.schemas();
        let tools = if schemas.is_empty() {
            None
        } else {
            Some(schemas.as_slice())
        };

        for round in 0..self.max_rounds {
            tracing::debug!(agent = %agent.name, round = round + 1, "model round");

            let turn = agent
                .model
                .client
                .chat_completion(&agent.model.model, &messages, tools)
                .await?;

            if !turn.tool_calls.is_empty() {
                messages.push(ChatMessage {
                    role: Role::Assistant,
                    content: turn.content.clone(),
                    tool_calls: Some(turn.tool_calls.clone()),
                    tool_call_id: None,
                });

                for call in &turn.tool_calls {
                    tracing::debug!(
                        tool = %call.function.name,
                        args = %call.function.arguments,
                        "model requested tool"
                    );

                    // Tool-side failures (unknown tool, bad arguments, handler
                    // errors) go back to the model as the call's result; the
                    // round bound still guarantees termination.
                    let content = match self.dispatch(agent, call).await {
                        Ok(value) => value.to_string(),
                        Err(e) => format!("Error: {}", e),
                    };

                    messages.push(ChatMessage::tool_result(call.id.clone(), content));
                }

                continue;
            }

            if let Some(content) = turn.content {
                return Ok(RunResult {
                    final_output: content,
                });
            }

            anyhow::bail!("model returned neither content nor tool calls");
        }

        anyhow::bail!(
            "max tool rounds ({}) reached without a final answer",
            self.max_rounds
        )
    }

    async fn dispatch(&self, agent: &Agent, call: &ToolCall) -> anyhow::Result<Value> {
        let args: Value = serde_json::from_str(&call.function.arguments)
            .map_err(|e| anyhow::anyhow!("invalid tool arguments: {}", e))?;

        agent.tools.execute(&call.function.name, args).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::llm::{AssistantTurn, FunctionCall, LlmError, ToolSchema};
    use crate::tools::DatasetStats;

    /// Scripted client: pops one turn per call and records what it was sent.
    struct ScriptedClient {
        turns: Mutex<Vec<AssistantTurn>>,
        seen: Mutex<Vec<Vec<ChatMessage>>>,
    }

    impl ScriptedClient {
        fn new(mut turns: Vec<AssistantTurn>) -> Self {
            turns.reverse();
            Self {
                turns: Mutex::new(turns),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl LlmClient for ScriptedClient {
        async fn chat_completion(
            &self,
            _model: &str,
            messages: &[ChatMessage],
            _tools: Option<&[ToolSchema]>,
        ) -> Result<AssistantTurn, LlmError> {
            self.seen.lock().unwrap().push(messages.to_vec());
            self.turns
                .lock()
                .unwrap()
                .pop()
                .ok_or_else(|| LlmError::UnexpectedResponse("script exhausted".to_string()))
        }
    }

    fn text_turn(content: &str) -> AssistantTurn {
        AssistantTurn {
            content: Some(content.to_string()),
            tool_calls: Vec::new(),
        }
    }

    fn tool_turn(id: &str, name: &str, arguments: &str) -> AssistantTurn {
        AssistantTurn {
            content: None,
            tool_calls: vec![ToolCall {
                id: id.to_string(),
                call_type: "function".to_string(),
                function: FunctionCall {
                    name: name.to_string(),
                    arguments: arguments.to_string(),
                },
            }],
        }
    }

    fn agent_with(client: Arc<ScriptedClient>) -> Agent {
        Agent::new(
            "Test Agent",
            "You are a test agent.",
            ChatModel::new("test-model", client),
        )
        .with_tool(Arc::new(DatasetStats))
    }

    #[tokio::test]
    async fn plain_answer_needs_one_round() {
        let client = Arc::new(ScriptedClient::new(vec![text_turn("42 is even.")]));
        let agent = agent_with(client.clone());

        let result = Runner::new(8).run(&agent, "Is 42 even?").await.unwrap();
        assert_eq!(result.final_output, "42 is even.");
        assert_eq!(client.seen.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn tool_round_trip_feeds_result_back() {
        let client = Arc::new(ScriptedClient::new(vec![
            tool_turn("call_1", "stats_tool", r#"{"dataset": [12, 15, 20, 22, 18, 25, 30, 28]}"#),
            text_turn("The average is 21.25."),
        ]));
        let agent = agent_with(client.clone());

        let result = Runner::new(8).run(&agent, "Analyze this dataset.").await.unwrap();
        assert_eq!(result.final_output, "The average is 21.25.");

        // Second request must carry the assistant turn plus the tool result.
        let seen = client.seen.lock().unwrap();
        let second = &seen[1];
        assert_eq!(second.len(), 4);
        assert_eq!(second[2].role, Role::Assistant);
        assert_eq!(second[3].role, Role::Tool);
        assert_eq!(second[3].tool_call_id.as_deref(), Some("call_1"));
        let tool_content = second[3].content.as_deref().unwrap();
        assert!(tool_content.contains("21.25"), "got: {}", tool_content);
    }

    #[tokio::test]
    async fn unknown_tool_becomes_error_result() {
        let client = Arc::new(ScriptedClient::new(vec![
            tool_turn("call_1", "time_travel", "{}"),
            text_turn("I cannot do that."),
        ]));
        let agent = agent_with(client.clone());

        let result = Runner::new(8).run(&agent, "Go back in time.").await.unwrap();
        assert_eq!(result.final_output, "I cannot do that.");

        let seen = client.seen.lock().unwrap();
        let tool_content = seen[1][3].content.as_deref().unwrap();
        assert!(tool_content.starts_with("Error: Unknown tool"), "got: {}", tool_content);
    }

    #[tokio::test]
    async fn malformed_arguments_become_error_result() {
        let client = Arc::new(ScriptedClient::new(vec![
            tool_turn("call_1", "stats_tool", "not json"),
            text_turn("done"),
        ]));
        let agent = agent_with(client.clone());

        Runner::new(8).run(&agent, "go").await.unwrap();

        let seen = client.seen.lock().unwrap();
        let tool_content = seen[1][3].content.as_deref().unwrap();
        assert!(tool_content.starts_with("Error: invalid tool arguments"));
    }

    #[tokio::test]
    async fn round_bound_aborts_endless_tool_calls() {
        let calls: Vec<AssistantTurn> = (0..3)
            .map(|i| tool_turn(&format!("call_{}", i), "stats_tool", r#"{"dataset": [1]}"#))
            .collect();
        let client = Arc::new(ScriptedClient::new(calls));
        let agent = agent_with(client);

        let err = Runner::new(3).run(&agent, "loop forever").await.unwrap_err();
        assert!(err.to_string().contains("max tool rounds (3)"));
    }

    #[tokio::test]
    async fn empty_turn_is_an_error() {
        let client = Arc::new(ScriptedClient::new(vec![AssistantTurn {
            content: None,
            tool_calls: Vec::new(),
        }]));
        let agent = agent_with(client);

        let err = Runner::new(8).run(&agent, "hello").await.unwrap_err();
        assert!(err.to_string().contains("neither content nor tool calls"));
    }

    #[tokio::test]
    async fn schemas_are_omitted_for_toolless_agents() {
        struct AssertNoTools;

        #[async_trait]
        impl LlmClient for AssertNoTools {
            async fn chat_completion(
                &self,
                _model: &str,
                _messages: &[ChatMessage],
                tools: Option<&[ToolSchema]>,
            ) -> Result<AssistantTurn, LlmError> {
                assert!(tools.is_none());
                Ok(AssistantTurn {
                    content: Some("ok".to_string()),
                    tool_calls: Vec::new(),
                })
            }
        }

        let agent = Agent::new(
            "Plain Agent",
            "Answer briefly.",
            ChatModel::new("test-model", Arc::new(AssertNoTools)),
        );
        let result = Runner::new(8).run(&agent, "hi").await.unwrap();
        assert_eq!(result.final_output, "ok");
    }

    #[tokio::test]
    async fn json_null_arguments_reach_registry() {
        // "null" parses, so the registry (not the parser) decides the error.
        let client = Arc::new(ScriptedClient::new(vec![
            tool_turn("call_1", "stats_tool", "null"),
            text_turn("done"),
        ]));
        let agent = agent_with(client.clone());

        Runner::new(8).run(&agent, "go").await.unwrap();
        let seen = client.seen.lock().unwrap();
        let tool_content = seen[1][3].content.as_deref().unwrap();
        assert!(tool_content.starts_with("Error:"));
    }
}
