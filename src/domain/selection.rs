use serde::{Deserialize, Serialize};

/// Ordered list of medicine names picked from search results.
///
/// Duplicates are allowed: a prescription may legitimately carry the same
/// medicine twice. Grows by appending and shrinks only from the end.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectionList(Vec<String>);

impl SelectionList {
    /// Appends a medicine name, keeping insertion order.
    pub fn add(&mut self, name: impl Into<String>) {
        self.0.push(name.into());
    }

    /// Removes the most recently added medicine; no-op when empty.
    pub fn remove_last(&mut self) -> Option<String> {
        self.0.pop()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copies the names into a plain vector for a submission payload.
    pub fn to_vec(&self) -> Vec<String> {
        self.0.clone()
    }
}
