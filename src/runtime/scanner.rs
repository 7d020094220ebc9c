//! Cursor over the input text.
//!
//! The scanner knows nothing about the model. It consumes literals and
//! anchored patterns, skips ignorable text before each token and remembers
//! the farthest offset at which something failed to match.

use regex::Regex;
use text_size::TextSize;

/// Compile `pattern` so that it only matches at the start of the haystack.
pub fn anchored(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"\A(?:{pattern})"))
}

#[derive(Debug, Clone)]
pub struct Scanner<'t> {
    text: &'t str,
    pos: TextSize,
    ignore: Option<Regex>,
    farthest: TextSize,
    expected: Vec<String>,
}

impl<'t> Scanner<'t> {
    /// `ignore` must be anchored (see [`anchored`]).
    pub fn new(text: &'t str, ignore: Option<Regex>) -> Self {
        Self {
            text,
            pos: TextSize::new(0),
            ignore,
            farthest: TextSize::new(0),
            expected: Vec::new(),
        }
    }

    pub fn offset(&self) -> TextSize {
        self.pos
    }

    pub fn checkpoint(&self) -> TextSize {
        self.pos
    }

    pub fn rewind(&mut self, checkpoint: TextSize) {
        self.pos = checkpoint;
    }

    /// Unconsumed input.
    pub fn rest(&self) -> &'t str {
        &self.text[usize::from(self.pos)..]
    }

    /// Skip ignorable text, then report whether the input is exhausted.
    pub fn at_end(&mut self) -> bool {
        self.skip_ignored();
        self.rest().is_empty()
    }

    pub fn skip_ignored(&mut self) {
        let Some(ignore) = &self.ignore else {
            return;
        };
        if let Some(m) = ignore.find(self.rest()) {
            self.pos += TextSize::of(m.as_str());
        }
    }

    /// Consume `text` exactly.
    pub fn literal(&mut self, text: &str) -> Option<&'t str> {
        self.skip_ignored();
        let rest = self.rest();
        if rest.starts_with(text) {
            let matched = &rest[..text.len()];
            self.pos += TextSize::of(matched);
            Some(matched)
        } else {
            self.fail(format!("{text:?}"));
            None
        }
    }

    /// Consume the match of an anchored `regex` at the cursor.
    ///
    /// `display` is what to report as expected when nothing matches.
    pub fn pattern(&mut self, regex: &Regex, display: &str) -> Option<&'t str> {
        self.skip_ignored();
        let rest = self.rest();
        match regex.find(rest) {
            Some(m) if m.start() == 0 => {
                self.pos += TextSize::of(m.as_str());
                Some(m.as_str())
            }
            _ => {
                self.fail(format!("/{display}/"));
                None
            }
        }
    }

    fn fail(&mut self, expected: String) {
        if self.pos > self.farthest {
            self.farthest = self.pos;
            self.expected.clear();
        }
        if self.pos == self.farthest && !self.expected.contains(&expected) {
            self.expected.push(expected);
        }
    }

    /// The farthest failure so far and what was expected there.
    pub fn farthest_failure(&self) -> (TextSize, &[String]) {
        (self.farthest, &self.expected)
    }
}
