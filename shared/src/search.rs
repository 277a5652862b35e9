use regex::{Regex, RegexBuilder};
use thiserror::Error;

use crate::Child;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("Invalid search pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Compile search text as a case-insensitive pattern. Metacharacters typed
/// by the user keep their regex meaning.
pub fn compile_pattern(text: &str) -> Result<Regex, SearchError> {
    Ok(RegexBuilder::new(text).case_insensitive(true).build()?)
}

/// Children whose full name matches `text`, in list order
pub fn search_children<'a>(children: &'a [Child], text: &str) -> Result<Vec<&'a Child>, SearchError> {
    let pattern = compile_pattern(text)?;
    Ok(children
        .iter()
        .filter(|child| pattern.is_match(&child.full_name()))
        .collect())
}

/// What the search box shows underneath the input
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SearchView {
    /// Nothing typed, or a child is already selected
    #[default]
    Hidden,
    Suggestions(Vec<Child>),
    /// Text typed but nobody matches
    AddNew,
}

impl SearchView {
    /// Compiles `text` at most once. An error means the text is not a valid
    /// pattern; callers show [`SearchView::AddNew`] for it.
    pub fn resolve(text: &str, has_selection: bool, children: &[Child]) -> Result<Self, SearchError> {
        if text.is_empty() || has_selection {
            return Ok(SearchView::Hidden);
        }

        let matches = search_children(children, text)?;
        if matches.is_empty() {
            Ok(SearchView::AddNew)
        } else {
            Ok(SearchView::Suggestions(matches.into_iter().cloned().collect()))
        }
    }

    pub fn shows_add_new(&self) -> bool {
        matches!(self, SearchView::AddNew)
    }

    pub fn suggestions(&self) -> &[Child] {
        match self {
            SearchView::Suggestions(children) => children,
            _ => &[],
        }
    }
}
