pub mod tokenizer;
pub mod value;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use self::tokenizer::tokenize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    Camel,
    Kebab,
    Dot,
}

impl CaseStyle {
    pub fn apply(&self, input: &str) -> String {
        match self {
            CaseStyle::Camel => to_camel_case(input),
            CaseStyle::Kebab => to_kebab_case(input),
            CaseStyle::Dot => to_dot_case(input),
        }
    }
}

impl Default for CaseStyle {
    fn default() -> Self {
        CaseStyle::Camel
    }
}

impl FromStr for CaseStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "camel" | "camelcase" => Ok(CaseStyle::Camel),
            "kebab" | "kebab-case" => Ok(CaseStyle::Kebab),
            "dot" | "dot.case" | "dotcase" => Ok(CaseStyle::Dot),
            _ => Err(format!("Unknown case style: {}", s)),
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseStyle::Camel => write!(f, "camelCase"),
            CaseStyle::Kebab => write!(f, "kebab-case"),
            CaseStyle::Dot => write!(f, "dot.case"),
        }
    }
}

/// Convert a string to camelCase.
///
/// The first word keeps its original casing; every later word has its first
/// character upper-cased and the rest left untouched. A single word is
/// returned unchanged.
pub fn to_camel_case(input: &str) -> String {
    let words = tokenize(input);
    let Some((first, rest)) = words.split_first() else {
        return String::new();
    };

    let mut result = String::with_capacity(input.len());
    result.push_str(first);
    for word in rest {
        result.push_str(&capitalize(word));
    }
    result
}

/// Convert a string to kebab-case.
///
/// Lower-casing runs over the whole joined string in one pass, not per word.
pub fn to_kebab_case(input: &str) -> String {
    tokenize(input).join("-").to_lowercase()
}

/// Convert a string to dot.case: every word lower-cased, joined with dots.
pub fn to_dot_case(input: &str) -> String {
    tokenize(input)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join(".")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
