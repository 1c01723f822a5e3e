//! Provider-agnostic request/response representation
//!
//! Wire formats convert to and from these types; the feature crates only
//! ever see these.

pub mod message;
pub mod request;
pub mod response;
pub mod tool;

pub use message::{Content, ContentPart, FunctionCall, Message, Role, ToolCall};
pub use request::{CompletionRequest, ResponseFormat};
pub use response::{ChoiceMessage, CompletionResponse};
pub use tool::{FunctionDefinition, ToolDefinition};
