use std::path::Path;

use crate::Config;

/// Largest radius the places nearby search accepts
const MAX_RADIUS_METERS: u32 = 50_000;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::from_toml_str(&raw)
    }

    /// Parse configuration from raw TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if placeholder expansion, parsing, or validation fails
    pub fn from_toml_str(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// Missing credentials are deliberately not an error here: outbound
    /// calls fail at request time instead.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric setting is out of range
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.agent.history_window == 0 {
            anyhow::bail!("agent.history_window must be at least 1");
        }

        if self.agent.max_sentences == 0 {
            anyhow::bail!("agent.max_sentences must be at least 1");
        }

        if self.places.radius_meters == 0 || self.places.radius_meters > MAX_RADIUS_METERS {
            anyhow::bail!("places.radius_meters must be between 1 and {MAX_RADIUS_METERS}");
        }

        if self.menu.max_upload_bytes == 0 {
            anyhow::bail!("menu.max_upload_bytes must be greater than 0");
        }

        if !self.menu.default_image_type.starts_with("image/") {
            anyhow::bail!("menu.default_image_type must be an image media type");
        }

        if let Some(ref telemetry) = self.telemetry
            && let Some(ref tracing) = telemetry.tracing
            && !(0.0..=1.0).contains(&tracing.sampling_rate)
        {
            anyhow::bail!("telemetry.tracing.sampling_rate must be between 0.0 and 1.0");
        }

        Ok(())
    }
}
