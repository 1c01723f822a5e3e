use serde::Deserialize;

/// Conversational order agent configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Number of most recent history turns forwarded to the model
    #[serde(default = "default_history_window")]
    pub history_window: usize,
    /// Which tool calls receive a result message before the confirmation call
    #[serde(default)]
    pub acknowledge: AcknowledgeMode,
    /// Content of each synthetic tool result
    #[serde(default = "default_acknowledgement")]
    pub acknowledgement: String,
    /// Upper bound on reply length stated in the persona prompt
    #[serde(default = "default_max_sentences")]
    pub max_sentences: u32,
    /// Character the model plays
    #[serde(default)]
    pub persona: PersonaConfig,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            history_window: default_history_window(),
            acknowledge: AcknowledgeMode::default(),
            acknowledgement: default_acknowledgement(),
            max_sentences: default_max_sentences(),
            persona: PersonaConfig::default(),
        }
    }
}

/// Tool-result acknowledgement policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcknowledgeMode {
    /// One tool result per tool call
    #[default]
    Each,
    /// A single tool result for the first tool call only
    First,
}

/// Persona the model is instructed to play
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PersonaConfig {
    /// Full name used in the system prompt
    #[serde(default = "default_persona_name")]
    pub name: String,
    /// Short name reported by the liveness endpoint
    #[serde(default = "default_persona_short_name")]
    pub short_name: String,
    /// Voice and behaviour description
    #[serde(default = "default_persona_traits")]
    pub traits: String,
}

impl Default for PersonaConfig {
    fn default() -> Self {
        Self {
            name: default_persona_name(),
            short_name: default_persona_short_name(),
            traits: default_persona_traits(),
        }
    }
}

#[allow(clippy::missing_const_for_fn)]
fn default_history_window() -> usize {
    6
}

fn default_acknowledgement() -> String {
    "Order Updated.".to_string()
}

#[allow(clippy::missing_const_for_fn)]
fn default_max_sentences() -> u32 {
    2
}

fn default_persona_name() -> String {
    "Bill Clinton".to_string()
}

fn default_persona_short_name() -> String {
    "Clinton".to_string()
}

fn default_persona_traits() -> String {
    "Raspy voice, southern charm, loves unhealthy food but pretends to diet.".to_string()
}
