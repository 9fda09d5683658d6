// parser.rs

/// One submitted line split into a command word and its arguments.
///
/// There is no quoting or escaping: tokens are whitespace runs. The command
/// word keeps the case it was typed in; callers compare it case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    pub trimmed: &'a str,
    pub word: Option<&'a str>,
    pub args: Vec<&'a str>,
}

impl<'a> ParsedLine<'a> {
    pub fn parse(raw: &'a str) -> Self {
        let trimmed = raw.trim();
        let mut tokens = trimmed.split_whitespace();
        let word = tokens.next();
        Self {
            trimmed,
            word,
            args: tokens.collect(),
        }
    }

    /// The whole trimmed line lowercased, used for multi-word keys.
    pub fn lowered(&self) -> String {
        self.trimmed.to_lowercase()
    }
}
