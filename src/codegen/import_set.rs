//! Insertion-ordered, deduplicated collection of import statements

use indexmap::IndexSet;

/// Statements emitted at the top of a generated file
///
/// Iteration follows first insertion, but two sets compare equal whenever
/// they hold the same statements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
    statements: IndexSet<String>,
}

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a statement, returning false if it was already present
    pub fn insert(&mut self, statement: impl Into<String>) -> bool {
        self.statements.insert(statement.into())
    }

    pub fn contains(&self, statement: &str) -> bool {
        self.statements.contains(statement)
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.statements.iter().map(String::as_str)
    }

    /// Render as a file header, one statement per line
    pub fn render(&self) -> String {
        let mut header = String::new();
        for statement in &self.statements {
            header.push_str(statement);
            header.push('\n');
        }
        header
    }
}

impl<S: Into<String>> Extend<S> for ImportSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for statement in iter {
            self.insert(statement);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for ImportSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = ImportSet::new();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a ImportSet {
    type Item = &'a str;
    type IntoIter = std::iter::Map<indexmap::set::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements
            .iter()
            .map(String::as_str as fn(&'a String) -> &'a str)
    }
}
