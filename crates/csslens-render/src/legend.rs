use std::collections::BTreeMap;

use csslens_lexer::{Token, TokenKind};
use serde::Serialize;

/// How often one token kind occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub kind: TokenKind,
    pub count: usize,
}

/// Count tokens per kind, whitespace excluded.
///
/// Entries are ordered most frequent first; kinds with equal counts keep their
/// declaration order. Kinds that do not occur are left out.
pub fn legend(tokens: &[Token]) -> Vec<LegendEntry> {
    let mut counts: BTreeMap<TokenKind, usize> = BTreeMap::new();
    for token in tokens.iter().filter(|t| !t.is_whitespace()) {
        *counts.entry(token.kind).or_default() += 1;
    }

    let mut entries: Vec<LegendEntry> = counts
        .into_iter()
        .map(|(kind, count)| LegendEntry { kind, count })
        .collect();
    // Stable sort keeps the BTreeMap's kind order for ties
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}
