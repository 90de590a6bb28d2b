use std::env;

use crate::error::ConfigError;

pub const THREAD_PREFIX_VAR: &str = "CHANSEQ_THREAD_PREFIX";
pub const STACK_SIZE_VAR: &str = "CHANSEQ_STACK_SIZE";

/// Settings applied to every stage thread of a pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Stage threads are named `"{thread_prefix}-{stage}"`.
    pub thread_prefix: String,
    /// Stack size for stage threads; the platform default when `None`.
    pub stack_size: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            thread_prefix: "chanseq".into(),
            stack_size: None,
        }
    }
}

impl Config {
    /// Reads `CHANSEQ_THREAD_PREFIX` and `CHANSEQ_STACK_SIZE`, falling back to the defaults
    /// for whatever is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(prefix) = lookup(THREAD_PREFIX_VAR) {
            if !prefix.is_empty() {
                config.thread_prefix = prefix;
            }
        }
        if let Some(raw) = lookup(STACK_SIZE_VAR) {
            let size = raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| ConfigError::InvalidValue {
                    var: STACK_SIZE_VAR,
                    value: raw.clone(),
                })?;
            config.stack_size = Some(size);
        }
        Ok(config)
    }

    pub fn with_thread_prefix<S: Into<String>>(self, prefix: S) -> Self {
        Config {
            thread_prefix: prefix.into(),
            ..self
        }
    }

    pub fn with_stack_size(self, stack_size: usize) -> Self {
        Config {
            stack_size: Some(stack_size),
            ..self
        }
    }

    pub(crate) fn thread_name(&self, stage: &str) -> String {
        format!("{}-{}", self.thread_prefix, stage)
    }
}
