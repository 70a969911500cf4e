//! Message parser - Splits prefixed chat text into a verb and its arguments

/// A prefixed chat message, split for dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand<'a> {
    /// Everything after the prefix, untouched; the custom-command lookup key
    pub raw: &'a str,
    /// First word, lower-cased
    pub verb: String,
    /// Text after the first run of whitespace, trimmed
    pub args: &'a str,
}

impl ParsedCommand<'_> {
    /// Arguments as whitespace-separated tokens
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.args.split_whitespace()
    }
}

/// Recognizes bot directives by their leading prefix character
#[derive(Debug, Clone, Copy)]
pub struct MessageParser {
    prefix: char,
}

impl MessageParser {
    pub fn new(prefix: char) -> Self {
        Self { prefix }
    }

    pub fn prefix(&self) -> char {
        self.prefix
    }

    /// Parse a directive; `None` when the text does not start with the prefix
    pub fn parse<'a>(&self, text: &'a str) -> Option<ParsedCommand<'a>> {
        let raw = text.strip_prefix(self.prefix)?;
        let (verb, args) = match raw.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (raw, ""),
        };

        Some(ParsedCommand {
            raw,
            verb: verb.to_lowercase(),
            args,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_text_without_prefix() {
        let parser = MessageParser::new('.');
        assert!(parser.parse("ping").is_none());
        assert!(parser.parse("hello .ping").is_none());
    }

    #[test]
    fn splits_verb_and_arguments() {
        let parser = MessageParser::new('.');
        let cmd = parser.parse(".AddList hi ||  hello world ").unwrap();

        assert_eq!(cmd.verb, "addlist");
        assert_eq!(cmd.args, "hi ||  hello world");
        assert_eq!(cmd.raw, "AddList hi ||  hello world ");
    }

    #[test]
    fn collapses_the_first_whitespace_run() {
        let parser = MessageParser::new('.');
        let cmd = parser.parse(".stalk    123   456").unwrap();

        assert_eq!(cmd.verb, "stalk");
        assert_eq!(cmd.tokens().collect::<Vec<_>>(), vec!["123", "456"]);
    }

    #[test]
    fn bare_prefix_yields_empty_verb() {
        let parser = MessageParser::new('!');
        let cmd = parser.parse("!").unwrap();

        assert_eq!(cmd.verb, "");
        assert_eq!(cmd.args, "");
    }
}
