// SPDX-License-Identifier: PMPL-1.0-or-later

//! Word segmentation of identifiers
//!
//! Splits `camelCase` and `snake_case` identifiers into lowercase words so
//! that `totalBalance` and `total_balance` can be recognised as the same
//! name. Segmentation either succeeds completely or reports `None`; it
//! never errors.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Case convention an identifier is expected to follow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStyle {
    /// `camelCase` or `PascalCase`
    CamelCase,
    /// `snake_case` or `SCREAMING_SNAKE_CASE`
    SnakeCase,
}

fn camel_case_shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE.get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9]*$").expect("valid camelCase regex"))
}

fn snake_case_shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE.get_or_init(|| {
        Regex::new(r"^(?:[a-z][a-z0-9]*(?:_[a-z0-9]+)*|[A-Z][A-Z0-9]*(?:_[A-Z0-9]+)*)$")
            .expect("valid snake_case regex")
    })
}

/// Whether `input` can be segmented in `style`
pub fn can_tokenize(style: CaseStyle, input: &str) -> bool {
    match style {
        CaseStyle::CamelCase => camel_case_shape().is_match(input),
        CaseStyle::SnakeCase => snake_case_shape().is_match(input),
    }
}

/// Segment `input` into lowercase words following `style`
pub fn tokenize(style: CaseStyle, input: &str) -> Option<Vec<String>> {
    if !can_tokenize(style, input) {
        return None;
    }
    let words = match style {
        CaseStyle::CamelCase => split_camel_case(input),
        CaseStyle::SnakeCase => input.split('_').map(str::to_lowercase).collect(),
    };
    Some(words)
}

/// Segment an identifier in whichever supported style it follows,
/// trying camelCase first.
///
/// A single lowercase word is valid in both styles and yields the same
/// result either way.
pub fn words(input: &str) -> Option<Vec<String>> {
    tokenize(CaseStyle::CamelCase, input).or_else(|| tokenize(CaseStyle::SnakeCase, input))
}

/// Split at lower-to-upper transitions. A run of capitals is one word,
/// except that its last capital starts the next word when a lowercase
/// letter follows (`HTTPServer` is `http`, `server`).
fn split_camel_case(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            let starts_word = !prev.is_ascii_uppercase() || next_is_lower;
            if starts_word && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c.to_ascii_lowercase());
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}
