//! Abstract item paths for base folders.
//!
//! Base folder paths are display data here, never opened: the view only needs
//! to walk them upward and name their components. Both `/` and `\` separate
//! components so that paths from either platform family are handled alike.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A parsed base folder path: root prefix, name segments and the separator used
/// when rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ItemPath {
    root: String,
    segments: Vec<String>,
    separator: char,
}

fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

impl ItemPath {
    /// The unset path.
    pub fn null() -> Self {
        Self {
            root: String::new(),
            segments: Vec::new(),
            separator: '/',
        }
    }

    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Self::null();
        }
        let separator = raw.chars().find(|c| is_separator(*c)).unwrap_or('/');
        let bytes = raw.as_bytes();

        let (root, rest): (String, &str) = if raw.len() >= 2
            && is_separator(bytes[0] as char)
            && is_separator(bytes[1] as char)
        {
            // network share: the server and share names belong to the root
            let mut parts = raw[2..].split(is_separator).filter(|s| !s.is_empty());
            let mut root = format!("{separator}{separator}");
            for part in parts.by_ref().take(2) {
                root.push_str(part);
                root.push(separator);
            }
            let segments: Vec<String> = parts.map(str::to_string).collect();
            return Self {
                root,
                segments,
                separator,
            };
        } else if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
            (format!("{}:{}", &raw[..1], separator), &raw[2..])
        } else if is_separator(bytes[0] as char) {
            (separator.to_string(), raw)
        } else {
            (String::new(), raw)
        };

        Self {
            root,
            segments: rest
                .split(is_separator)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            separator,
        }
    }

    pub fn is_null(&self) -> bool {
        self.root.is_empty() && self.segments.is_empty()
    }

    /// Containing folder; `None` for roots and the null path.
    pub fn parent(&self) -> Option<ItemPath> {
        if self.segments.is_empty() {
            return None;
        }
        let mut parent = self.clone();
        parent.segments.pop();
        Some(parent)
    }

    /// Last name segment; empty for roots.
    pub fn item_name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or("")
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    pub fn display(&self) -> String {
        let sep = self.separator.to_string();
        format!("{}{}", self.root, self.segments.join(&sep))
    }
}

impl fmt::Display for ItemPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl From<&str> for ItemPath {
    fn from(raw: &str) -> Self {
        ItemPath::parse(raw)
    }
}

impl From<String> for ItemPath {
    fn from(raw: String) -> Self {
        ItemPath::parse(&raw)
    }
}

impl From<ItemPath> for String {
    fn from(path: ItemPath) -> Self {
        path.display()
    }
}
