use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::keyword::Keyword;

/// Maps keywords to canned response texts. Built once from the
/// keyword-response resource, read-only afterwards. Several keywords may
/// share one response; a keyword repeated in a later block overwrites the
/// earlier entry.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ResponseMap(HashMap<Keyword, String>);

impl ResponseMap {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Cannot read {}", path.display()))?;
        Ok(Self::parse(&text))
    }

    /// Parses the blank-line-delimited block format: a line of
    /// comma-separated keywords, a blank line, the response text (possibly
    /// spanning several lines), a blank line. A keyword line directly
    /// followed by another keyword line is superseded by it, and a block
    /// missing either keywords or a response text is dropped.
    pub fn parse(text: &str) -> Self {
        let mut map = HashMap::new();
        let mut keys: Vec<Keyword> = Vec::new();
        let mut body: Vec<&str> = Vec::new();
        let mut in_body = false;
        for line in text.lines() {
            if line.trim().is_empty() {
                if in_body && !body.is_empty() {
                    commit_block(&mut map, &mut keys, &mut body);
                    in_body = false;
                } else if !in_body && !keys.is_empty() {
                    in_body = true;
                }
            } else if in_body {
                body.push(line);
            } else {
                keys = line
                    .split(',')
                    .map(Keyword::from)
                    .filter(|k| !k.is_empty())
                    .collect();
            }
        }
        commit_block(&mut map, &mut keys, &mut body);
        ResponseMap(map)
    }

    /// Looks up an already-lowercased word.
    pub fn get(&self, word: &str) -> Option<&str> {
        self.0.get(word).map(String::as_str)
    }

    pub fn keywords(&self) -> impl Iterator<Item = &Keyword> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn commit_block(map: &mut HashMap<Keyword, String>, keys: &mut Vec<Keyword>, body: &mut Vec<&str>) {
    let response = body.join("\n").trim().to_string();
    if !keys.is_empty() && !response.is_empty() {
        for key in keys.drain(..) {
            map.insert(key, response.clone());
        }
    }
    keys.clear();
    body.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_blocks_separated_by_blank_lines() {
        let map = ResponseMap::parse("yes, yeah\n\nI agree.\n\nno\n\nDisagree.\n");
        assert_eq!(map.len(), 3);
        assert_eq!(map.get("yes"), Some("I agree."));
        assert_eq!(map.get("yeah"), Some("I agree."));
        assert_eq!(map.get("no"), Some("Disagree."));
    }

    #[test]
    fn all_keywords_of_a_block_share_the_response() {
        let map = ResponseMap::parse("crash, crashes, crashed\n\nTry restarting it.\n");
        for word in ["crash", "crashes", "crashed"] {
            assert_eq!(map.get(word), Some("Try restarting it."));
        }
    }

    #[test]
    fn keywords_are_trimmed_and_lowercased() {
        let map = ResponseMap::parse("  Crash ,  CRASHES\n\nTry restarting it.\n");
        assert_eq!(map.get("crash"), Some("Try restarting it."));
        assert_eq!(map.get("crashes"), Some("Try restarting it."));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn response_text_keeps_internal_newlines() {
        let map = ResponseMap::parse("help\n\nFirst line.\nSecond line.\n\n");
        assert_eq!(map.get("help"), Some("First line.\nSecond line."));
    }

    #[test]
    fn later_block_overwrites_repeated_keyword() {
        let map = ResponseMap::parse("yes\n\nOld answer.\n\nyes\n\nNew answer.\n");
        assert_eq!(map.get("yes"), Some("New answer."));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn trailing_block_without_final_blank_line_is_committed() {
        let map = ResponseMap::parse("yes\n\nI agree.");
        assert_eq!(map.get("yes"), Some("I agree."));
    }

    #[test]
    fn extra_blank_lines_do_not_corrupt_parsing() {
        let text = "\n\nyes, yeah\n\n\nI agree.\n\n\n\nno\n\nDisagree.\n\n\n";
        let map = ResponseMap::parse(text);
        assert_eq!(map.get("yeah"), Some("I agree."));
        assert_eq!(map.get("no"), Some("Disagree."));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn keyword_line_without_response_is_dropped() {
        let map = ResponseMap::parse("ignored\nyes\n\nI agree.\n");
        assert_eq!(map.get("ignored"), None);
        assert_eq!(map.get("yes"), Some("I agree."));
    }

    #[test]
    fn block_without_any_response_text_is_dropped() {
        let map = ResponseMap::parse("orphan\n\n\n");
        assert!(map.is_empty());
        let map = ResponseMap::parse("orphan\n");
        assert!(map.is_empty());
    }

    #[test]
    fn empty_resource_makes_an_empty_map() {
        assert!(ResponseMap::parse("").is_empty());
        assert!(ResponseMap::parse("\n\n\n").is_empty());
    }

    #[test]
    fn missing_file_reports_an_error() {
        assert!(ResponseMap::from_file(Path::new("no/such/file.txt")).is_err());
    }
}
