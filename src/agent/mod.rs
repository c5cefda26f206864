//! Agent module - the agent wrapper and run loop.
//!
//! The runner follows a "tools in a loop" pattern:
//! 1. Build context with system instructions and the user prompt
//! 2. Call the model with the agent's tool schemas
//! 3. If the model requests tool calls, execute them and feed results back
//! 4. Repeat until the model produces a final answer or the round bound hits

mod agent_loop;

pub use agent_loop::{Agent, ChatModel, RunResult, Runner};
