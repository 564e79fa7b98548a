//! Declarative CSS-selector lookups over an HTML document.
//!
//! A [`Query`] is a chain of selectors, each applied inside the matches of the
//! previous one, ending in either an attribute or normalized text. Absence is
//! reported as `None`; callers decide whether that is fatal.
use std::collections::HashSet;

use notation_core::normalize_whitespace;
use scraper::{ElementRef, Html, Selector};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid selector `{selector}`: {message}")]
pub struct SelectorError {
    pub selector: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Target {
    Text,
    Attribute(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    chain: Vec<String>,
    target: Target,
}

impl Query {
    /// Text of elements matching `selector`.
    pub fn select(selector: impl Into<String>) -> Self {
        Self {
            chain: vec![selector.into()],
            target: Target::Text,
        }
    }

    /// Narrow to descendants matching `selector`.
    pub fn then(mut self, selector: impl Into<String>) -> Self {
        self.chain.push(selector.into());
        self
    }

    /// Read attribute `name` instead of text.
    pub fn attr(mut self, name: impl Into<String>) -> Self {
        self.target = Target::Attribute(name.into());
        self
    }

    fn compile(&self) -> Result<Vec<Selector>, SelectorError> {
        self.chain.iter().map(|css| compile(css)).collect()
    }

    fn value_of(&self, element: ElementRef<'_>) -> Option<String> {
        match &self.target {
            Target::Text => Some(normalize_whitespace(&element.text().collect::<String>())),
            Target::Attribute(name) => element.value().attr(name).map(str::to_string),
        }
    }
}

pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Value of the first element matched by `query`.
    pub fn first(&self, query: &Query) -> Result<Option<String>, SelectorError> {
        let matches = self.matches(query)?;
        Ok(matches.into_iter().next().and_then(|el| query.value_of(el)))
    }

    /// Values of every element matched by `query`, in document order.
    pub fn all(&self, query: &Query) -> Result<Vec<String>, SelectorError> {
        let matches = self.matches(query)?;
        Ok(matches.into_iter().filter_map(|el| query.value_of(el)).collect())
    }

    /// Every element matching `selector`, each usable as a lookup scope.
    pub fn blocks(&self, selector: &str) -> Result<Vec<Block<'_>>, SelectorError> {
        let selector = compile(selector)?;
        Ok(self
            .html
            .select(&selector)
            .map(|element| Block { element })
            .collect())
    }

    fn matches(&self, query: &Query) -> Result<Vec<ElementRef<'_>>, SelectorError> {
        let chain = query.compile()?;
        let Some((head, rest)) = chain.split_first() else {
            return Ok(Vec::new());
        };
        let roots: Vec<ElementRef<'_>> = self.html.select(head).collect();
        Ok(descend(roots, rest))
    }
}

/// One element of a document, queried relative to itself.
#[derive(Debug, Clone, Copy)]
pub struct Block<'a> {
    element: ElementRef<'a>,
}

impl<'a> Block<'a> {
    pub fn attr(&self, name: &str) -> Option<String> {
        self.element.value().attr(name).map(str::to_string)
    }

    pub fn text(&self) -> String {
        normalize_whitespace(&self.element.text().collect::<String>())
    }

    pub fn first(&self, query: &Query) -> Result<Option<String>, SelectorError> {
        let matches = descend(vec![self.element], &query.compile()?);
        Ok(matches.into_iter().next().and_then(|el| query.value_of(el)))
    }

    pub fn all(&self, query: &Query) -> Result<Vec<String>, SelectorError> {
        let matches = descend(vec![self.element], &query.compile()?);
        Ok(matches.into_iter().filter_map(|el| query.value_of(el)).collect())
    }
}

fn compile(css: &str) -> Result<Selector, SelectorError> {
    Selector::parse(css).map_err(|err| SelectorError {
        selector: css.to_string(),
        message: err.to_string(),
    })
}

/// Apply each selector inside the previous level's matches, dropping duplicates
/// produced by nested matches.
fn descend<'a>(roots: Vec<ElementRef<'a>>, chain: &[Selector]) -> Vec<ElementRef<'a>> {
    chain.iter().fold(roots, |current, selector| {
        let mut seen = HashSet::new();
        current
            .iter()
            .flat_map(|element| element.select(selector))
            .filter(|element| seen.insert(element.id()))
            .collect()
    })
}
