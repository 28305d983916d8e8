use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Keyword-response resource, resolved against the working directory.
    #[serde(default = "default_responses_file")]
    pub responses_file: PathBuf,

    /// Default-response resource, resolved against the working directory.
    #[serde(default = "default_default_responses_file")]
    pub default_responses_file: PathBuf,

    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Word that ends the support session.
    #[serde(default = "default_exit_word")]
    pub exit_word: String,
}

fn default_responses_file() -> PathBuf {
    "responses.txt".into()
}

fn default_default_responses_file() -> PathBuf {
    "default.txt".into()
}

fn default_prompt() -> String {
    "> ".into()
}

fn default_exit_word() -> String {
    "bye".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            responses_file: default_responses_file(),
            default_responses_file: default_default_responses_file(),
            prompt: default_prompt(),
            exit_word: default_exit_word(),
        }
    }
}
