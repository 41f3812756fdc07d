//! Prefix tokenizer for command arguments.
//!
//! Splits an argument string like `n/Alice Tan p/91234567 t/vip t/fragile`
//! into a preamble and per-prefix values:
//!
//! - A prefix counts as an occurrence only when it starts the string or
//!   follows whitespace. `not/available` contains no `t/` occurrence.
//! - A value runs from the end of its prefix to the start of the next
//!   occurrence (or end of string) and is kept raw; trimming is the
//!   parsers' business.
//! - The preamble is whatever precedes the first occurrence.
//!
//! Repeated prefixes are tolerated here: every occurrence is recorded in
//! order and [`TokenizedArgs::value`] answers with the last one. Commands
//! that treat repetition as an error reject it themselves, on top of this.

use std::collections::HashMap;

use super::syntax::Prefix;

#[derive(Debug, Default)]
pub struct TokenizedArgs {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl TokenizedArgs {
    /// The trimmed text before the first prefix occurrence.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// The raw value of the last occurrence of `prefix`, if any.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|v| v.last())
            .map(String::as_str)
    }

    /// Every raw value of `prefix`, in order of appearance.
    pub fn all(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map_or(&[], Vec::as_slice)
    }

    pub fn count(&self, prefix: Prefix) -> usize {
        self.values.get(&prefix).map_or(0, Vec::len)
    }

    /// Which of `prefixes` occur more than once.
    pub fn duplicated(&self, prefixes: &[Prefix]) -> Vec<Prefix> {
        prefixes
            .iter()
            .copied()
            .filter(|p| self.count(*p) > 1)
            .collect()
    }
}

pub fn tokenize(args: &str, prefixes: &[Prefix]) -> TokenizedArgs {
    let mut occurrences: Vec<(usize, Prefix)> = Vec::new();
    for &prefix in prefixes {
        let token = prefix.token();
        let mut from = 0;
        while let Some(found) = args[from..].find(token) {
            let at = from + found;
            if at == 0 || args[..at].ends_with(char::is_whitespace) {
                occurrences.push((at, prefix));
            }
            from = at + token.len();
        }
    }
    occurrences.sort_by_key(|&(at, _)| at);

    let mut tokenized = TokenizedArgs::default();
    let first_at = match occurrences.first() {
        Some(&(at, _)) => at,
        None => {
            tokenized.preamble = args.trim().to_string();
            return tokenized;
        }
    };
    tokenized.preamble = args[..first_at].trim().to_string();

    for (i, &(at, prefix)) in occurrences.iter().enumerate() {
        let value_start = at + prefix.token().len();
        let value_end = occurrences
            .get(i + 1)
            .map_or(args.len(), |&(next_at, _)| next_at);
        tokenized
            .values
            .entry(prefix)
            .or_default()
            .push(args[value_start..value_end].to_string());
    }
    tokenized
}
