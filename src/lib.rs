//! # Agent Lab
//!
//! A minimal tool-calling agent runtime for OpenAI-compatible LLM endpoints,
//! plus the demo programs in `src/bin/` that exercise it.
//!
//! This library provides:
//! - A typed client for hosted chat completions endpoints
//! - An agent wrapper pairing instructions, a model, and callable tools
//! - A bounded run loop that resolves tool-call round trips
//!
//! ## Architecture
//!
//! The runner follows the "tools in a loop" pattern:
//! 1. Build context with system instructions and the user prompt
//! 2. Call the model with the agent's tool schemas
//! 3. Execute any requested tool calls and feed the results back
//! 4. Repeat until the model emits a final answer or the round bound hits
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use agent_lab::{Agent, ChatModel, Config, Runner};
//! use agent_lab::llm::OpenAiCompatClient;
//!
//! let config = Config::from_env()?;
//! let client = Arc::new(OpenAiCompatClient::new(&config.base_url, &config.gemini_api_key));
//! let agent = Agent::new(
//!     "Reasoning Assistant",
//!     "Think step by step.",
//!     ChatModel::new("gemini-2.0-flash", client),
//! );
//! let result = Runner::new(config.max_tool_rounds).run(&agent, "Is 42 even?").await?;
//! println!("{}", result.final_output);
//! ```

pub mod agent;
pub mod config;
pub mod llm;
pub mod tools;

pub use agent::{Agent, ChatModel, RunResult, Runner};
pub use config::Config;
