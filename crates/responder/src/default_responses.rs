use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use rand::Rng;

/// Fallback responses used when no keyword matches, kept in resource order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DefaultResponses(Vec<String>);

impl DefaultResponses {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Cannot read {}", path.display()))?;
        Ok(Self::parse(&text))
    }

    /// Parses paragraphs separated by one or more blank lines. Lines inside
    /// a paragraph stay joined by a newline; a trailing paragraph without a
    /// final blank line still counts.
    pub fn parse(text: &str) -> Self {
        let mut responses = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        for line in text.lines() {
            if line.trim().is_empty() {
                if !current.is_empty() {
                    responses.push(current.join("\n").trim().to_string());
                    current.clear();
                }
            } else {
                current.push(line);
            }
        }
        if !current.is_empty() {
            responses.push(current.join("\n").trim().to_string());
        }
        DefaultResponses(responses)
    }

    pub fn choose(&self, rng: &mut impl Rng) -> Option<&str> {
        self.0.choose(rng).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_paragraphs_in_resource_order() {
        let responses = DefaultResponses::parse("First.\n\nSecond.\n\nThird.\n");
        let responses: Vec<_> = responses.iter().collect();
        assert_eq!(responses, vec!["First.", "Second.", "Third."]);
    }

    #[test]
    fn paragraph_lines_are_joined_with_a_newline() {
        let responses = DefaultResponses::parse("Could you repeat that?\nSlowly this time.\n\nI see.\n");
        let responses: Vec<_> = responses.iter().collect();
        assert_eq!(
            responses,
            vec!["Could you repeat that?\nSlowly this time.", "I see."]
        );
    }

    #[test]
    fn consecutive_blank_lines_make_no_empty_entries() {
        let responses = DefaultResponses::parse("\n\nFirst.\n\n\n\nSecond.\n\n\n");
        assert_eq!(responses.len(), 2);
        assert!(responses.iter().all(|r| !r.is_empty()));
    }

    #[test]
    fn trailing_paragraph_without_final_blank_line_is_kept() {
        let responses = DefaultResponses::parse("First.\n\nSecond.");
        assert_eq!(responses.len(), 2);
    }

    #[test]
    fn empty_resource_makes_an_empty_list() {
        assert!(DefaultResponses::parse("").is_empty());
        assert!(DefaultResponses::parse("\n \n").is_empty());
    }

    #[test]
    fn choose_draws_from_the_list() {
        let responses = DefaultResponses::parse("Only one.\n");
        assert_eq!(responses.choose(&mut rand::thread_rng()), Some("Only one."));
        assert_eq!(DefaultResponses::default().choose(&mut rand::thread_rng()), None);
    }

    #[test]
    fn missing_file_reports_an_error() {
        assert!(DefaultResponses::from_file(Path::new("no/such/file.txt")).is_err());
    }
}
