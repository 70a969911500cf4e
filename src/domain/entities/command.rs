use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered collection of custom commands: `.name` replies with the response.
///
/// Serializes as a flat JSON object keyed by command name. Key order is the
/// insertion order, and overwriting an existing name keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandBook {
    entries: IndexMap<String, String>,
}

impl CommandBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Insert or overwrite. Returns the previous response, if any.
    pub fn insert(&mut self, name: impl Into<String>, response: impl Into<String>) -> Option<String> {
        self.entries.insert(name.into(), response.into())
    }

    /// Remove a command; the remaining names keep their order
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.entries.shift_remove(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrite_keeps_position() {
        let mut book = CommandBook::new();
        book.insert("hi", "hello");
        book.insert("bye", "see you");
        let previous = book.insert("hi", "hey");

        assert_eq!(previous.as_deref(), Some("hello"));
        assert_eq!(book.names().collect::<Vec<_>>(), vec!["hi", "bye"]);
        assert_eq!(book.get("hi"), Some("hey"));
    }

    #[test]
    fn json_keeps_insertion_order() {
        let mut book = CommandBook::new();
        book.insert("zeta", "z");
        book.insert("alpha", "a");

        let json = serde_json::to_string(&book).unwrap();
        assert_eq!(json, r#"{"zeta":"z","alpha":"a"}"#);

        let parsed: CommandBook = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, book);
    }

    #[test]
    fn non_string_values_are_rejected() {
        let parsed = serde_json::from_str::<CommandBook>(r#"{"hi": 42}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn remove_keeps_order_of_the_rest() {
        let mut book = CommandBook::new();
        book.insert("a", "1");
        book.insert("b", "2");
        book.insert("c", "3");

        assert!(book.remove("nope").is_none());
        assert_eq!(book.remove("b").as_deref(), Some("2"));
        assert_eq!(book.names().collect::<Vec<_>>(), vec!["a", "c"]);
    }
}
