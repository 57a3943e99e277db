//! Minimal reader for the game's line-oriented data files.
//!
//! A full data file forms a tree: indentation attaches a line to the node
//! above it. Color records only ever appear as top-level one-liners, so
//! this reader keeps just the top level and skips indented lines instead
//! of building children. Tokens are separated by spaces or tabs and may
//! be quoted with `"` or a backtick; a line whose first character is `#`
//! is a comment.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors surfaced by file-based conversion passes. Everything below the
/// file read is lenient, so an unreadable file is the only failure.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {}: {}", path.display(), source)]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// One line of a data file, broken into tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct DataNode {
    tokens: Vec<String>,
}

impl DataNode {
    /// Tokenize one line. Returns None when the line has no tokens.
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut tokens = Vec::new();
        let mut rest = line;
        loop {
            rest = rest.trim_start_matches([' ', '\t']);
            if rest.is_empty() {
                break;
            }
            let (token, tail) = if let Some(body) = rest.strip_prefix('"') {
                split_quoted(body, '"')
            } else if let Some(body) = rest.strip_prefix('`') {
                split_quoted(body, '`')
            } else {
                match rest.find([' ', '\t']) {
                    Some(end) => (&rest[..end], &rest[end..]),
                    None => (rest, ""),
                }
            };
            tokens.push(token.to_string());
            rest = tail;
        }

        if tokens.is_empty() {
            None
        } else {
            Some(Self { tokens })
        }
    }

    pub fn size(&self) -> usize {
        self.tokens.len()
    }

    /// The token at `index`, or "" when out of range.
    pub fn token(&self, index: usize) -> &str {
        self.tokens.get(index).map_or("", String::as_str)
    }

    /// The token at `index` as a number. Non-numeric or missing tokens
    /// read as 0 rather than failing.
    pub fn value(&self, index: usize) -> f64 {
        let token = self.token(index);
        token.parse().unwrap_or_else(|_| {
            log::debug!("non-numeric token {:?} treated as 0", token);
            0.0
        })
    }
}

/// An unterminated quote runs to the end of the line.
fn split_quoted(body: &str, quote: char) -> (&str, &str) {
    match body.find(quote) {
        Some(end) => (&body[..end], &body[end + quote.len_utf8()..]),
        None => (body, ""),
    }
}

/// The top-level nodes of one data file, in input order.
#[derive(Debug, Clone)]
pub struct DataFile {
    nodes: Vec<DataNode>,
}

impl DataFile {
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let contents = fs::read_to_string(path).map_err(|source| DataError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&contents))
    }

    pub fn parse(contents: &str) -> Self {
        let mut nodes = Vec::new();
        for line in contents.lines() {
            // Indented lines are child nodes of some earlier record, never
            // a color record themselves.
            if line.starts_with([' ', '\t']) || line.starts_with('#') {
                continue;
            }
            if let Some(node) = DataNode::parse_line(line) {
                nodes.push(node);
            }
        }
        Self { nodes }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DataNode> {
        self.nodes.iter()
    }
}

impl<'a> IntoIterator for &'a DataFile {
    type Item = &'a DataNode;
    type IntoIter = std::slice::Iter<'a, DataNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_parse_line_plain_tokens() {
        let node = DataNode::parse_line("color red 1 0 0").unwrap();
        assert_eq!(node.size(), 5);
        assert_eq!(node.token(0), "color");
        assert_eq!(node.token(1), "red");
        assert_eq!(node.value(2), 1.0);
    }

    #[test]
    fn test_parse_line_quoted_name() {
        let node = DataNode::parse_line("color \"bright red\" 1 0 0").unwrap();
        assert_eq!(node.token(1), "bright red");
        assert_eq!(node.size(), 5);

        let node = DataNode::parse_line("color `faint blue` 0 0 .5").unwrap();
        assert_eq!(node.token(1), "faint blue");
        assert_eq!(node.value(4), 0.5);
    }

    #[test]
    fn test_parse_line_unterminated_quote_runs_to_end() {
        let node = DataNode::parse_line("color \"no closing quote 1 0 0").unwrap();
        assert_eq!(node.size(), 2);
        assert_eq!(node.token(1), "no closing quote 1 0 0");
    }

    #[test]
    fn test_parse_line_blank_is_none() {
        assert!(DataNode::parse_line("").is_none());
        assert!(DataNode::parse_line("   \t ").is_none());
    }

    #[test]
    fn test_token_and_value_out_of_range() {
        let node = DataNode::parse_line("color red").unwrap();
        assert_eq!(node.token(5), "");
        assert_eq!(node.value(5), 0.0);
        assert_eq!(node.value(1), 0.0);
    }

    #[test]
    fn test_parse_skips_comments_and_indented_lines() {
        let file = DataFile::parse(
            "# palette\n\
             color red 1 0 0\n\
             \tphase 0.5\n\
             \n\
             color blue 0 0 1\n",
        );
        let names: Vec<&str> = file.iter().map(|n| n.token(1)).collect();
        assert_eq!(names, vec!["red", "blue"]);
    }

    #[test]
    fn test_load_reads_file() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp, "color red 1 0 0").unwrap();
        writeln!(tmp, "color green 0 1 0").unwrap();

        let file = DataFile::load(tmp.path()).unwrap();
        assert_eq!(file.iter().count(), 2);
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let err = DataFile::load(Path::new("does/not/exist.txt")).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.txt"));
    }
}
