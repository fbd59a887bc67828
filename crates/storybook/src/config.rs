//! Layered configuration for the storybook generator.
//!
//! Sources, lowest precedence first:
//! - Bundled defaults (include_str! from storybook.toml)
//! - `~/.config/storybook/storybook.toml`
//! - `./storybook.toml`
//! - An explicit file, e.g. from `--config`
//! - `STORYBOOK__SECTION__KEY` environment variables
//!
//! The hub token never comes from a file; it is read from
//! `HUGGINGFACE_TOKEN` when the generator is built.

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use storybook_core::StoryParameters;
use storybook_error::{ConfigError, StorybookError, StorybookResult};
use storybook_pdf::StagingMode;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../storybook.toml");

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "STORYBOOK";

/// Story capability settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StoryConfig {
    /// Hub model id
    pub model: String,
    /// Token budget for the generated story
    pub max_output_length: u32,
    /// Sample instead of greedy decoding
    pub sampling: bool,
    /// Let the hub truncate over-long prompts
    pub truncate_input: bool,
    /// Input window the hub truncates prompts to
    pub max_input_tokens: u32,
}

impl StoryConfig {
    /// Generation parameters sent with every prompt.
    pub fn parameters(&self) -> StoryParameters {
        StoryParameters::new(self.max_output_length, self.sampling, self.truncate_input)
    }
}

/// Image capability settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ImageConfig {
    /// Hub model id
    pub model: String,
    /// Words of each paragraph sent as the image prompt
    pub max_prompt_words: usize,
    /// Image requests in flight at once
    pub concurrency: usize,
}

/// Model hub connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HubConfig {
    /// Endpoint model ids are appended to
    pub base_url: String,
    /// Per-request timeout
    pub timeout_secs: u64,
}

/// Document assembly settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LayoutConfig {
    /// Where images live while the document is assembled
    #[serde(default)]
    pub staging: StagingMode,
    /// Scratch directory for `staging = "scratch"`
    #[serde(default)]
    pub scratch_dir: Option<PathBuf>,
}

/// Web form settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Socket address the form is served on
    pub bind: String,
}

/// Complete storybook configuration.
///
/// # Example
///
/// ```no_run
/// use storybook::StorybookConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = StorybookConfig::load()?;
/// println!("Story model: {}", config.story.model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StorybookConfig {
    /// `[story]`
    pub story: StoryConfig,
    /// `[image]`
    pub image: ImageConfig,
    /// `[hub]`
    pub hub: HubConfig,
    /// `[layout]`
    pub layout: LayoutConfig,
    /// `[server]`
    pub server: ServerConfig,
}

impl StorybookConfig {
    /// Load configuration from every default source.
    ///
    /// # Errors
    ///
    /// Returns error if a source cannot be read or a value has the wrong type.
    pub fn load() -> StorybookResult<Self> {
        Self::load_with(None)
    }

    /// Load configuration, adding `path` above the default files.
    ///
    /// # Errors
    ///
    /// Returns error if `path` is missing, a source cannot be read, or a
    /// value has the wrong type.
    #[instrument]
    pub fn load_with(path: Option<&Path>) -> StorybookResult<Self> {
        debug!("Loading configuration with precedence: env > explicit > current dir > home dir > bundled defaults");

        let mut builder = Self::bundled_builder();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/storybook/storybook.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("storybook").required(false));

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        Self::finish(builder)
    }

    /// Bundled defaults only.
    ///
    /// # Errors
    ///
    /// Returns error if the bundled file is invalid.
    pub fn bundled() -> StorybookResult<Self> {
        Self::finish(Self::bundled_builder())
    }

    /// Bundled defaults overlaid with a TOML string.
    ///
    /// # Errors
    ///
    /// Returns error if `toml` does not parse or has wrong types.
    pub fn with_overrides(toml: &str) -> StorybookResult<Self> {
        Self::finish(Self::bundled_builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    fn bundled_builder() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> StorybookResult<Self> {
        builder
            .build()
            .map_err(|e| {
                StorybookError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                StorybookError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}
