use std::collections::HashSet;
use std::path::Path;

use log::{error, warn};

mod default_responses;
mod keyword;
mod response_map;

pub use default_responses::DefaultResponses;
pub use keyword::Keyword;
pub use response_map::ResponseMap;

/// Reply of last resort, used when no keyword matched and no default
/// responses were loaded.
pub const OUT_OF_ANSWERS: &str = "I have nothing to say about that.";

/// Generates an automatic response from a set of input words. Words found in
/// the response map answer with the mapped text; any other input draws one of
/// the default responses at random. Both tables are fixed at construction.
pub struct Responder {
    response_map: ResponseMap,
    default_responses: DefaultResponses,
}

impl Responder {
    pub fn new(response_map: ResponseMap, default_responses: DefaultResponses) -> Self {
        Responder {
            response_map,
            default_responses,
        }
    }

    /// Loads both resources. A missing or unreadable file leaves the
    /// corresponding table empty, so construction always succeeds.
    pub fn from_files(responses: &Path, default_responses: &Path) -> Self {
        let response_map = ResponseMap::from_file(responses).unwrap_or_else(|e| {
            warn!("{e:#}");
            ResponseMap::default()
        });
        let default_responses = DefaultResponses::from_file(default_responses).unwrap_or_else(|e| {
            warn!("{e:#}");
            DefaultResponses::default()
        });
        Responder::new(response_map, default_responses)
    }

    /// Returns the response mapped to any word of `words`, or a random
    /// default response when none of them is known. Words are lowercased
    /// before lookup, so matching is case-insensitive no matter how the
    /// caller tokenized. When several words are known, which one answers is
    /// arbitrary (set iteration order).
    pub fn generate_response(&self, words: &HashSet<String>) -> &str {
        words
            .iter()
            .find_map(|word| self.response_map.get(&word.to_lowercase()))
            .unwrap_or_else(|| self.pick_default_response())
    }

    fn pick_default_response(&self) -> &str {
        self.default_responses
            .choose(&mut rand::thread_rng())
            .unwrap_or_else(|| {
                error!("No default responses loaded");
                OUT_OF_ANSWERS
            })
    }

    pub fn response_map(&self) -> &ResponseMap {
        &self.response_map
    }

    pub fn default_responses(&self) -> &DefaultResponses {
        &self.default_responses
    }
}
