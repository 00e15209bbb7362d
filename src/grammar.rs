//! Grammar rewriter: parallel symbol substitution of an axiom.
//!
//! Control symbols (`-`, `+`, `[`, `]`) are copied through unchanged,
//! whitespace is dropped, and every other symbol is replaced by its rule
//! body. Replacements are inserted literally and are only expanded on the
//! next pass.

use crate::error::{FractalError, Result};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Production rules, keyed by the symbol they rewrite.
pub type Rules = BTreeMap<char, String>;

/// Symbols that pass through every rewrite unchanged.
pub const CONTROL_SYMBOLS: [char; 4] = ['-', '+', '[', ']'];

/// True for symbols the rewriter never looks up in the rule table.
pub fn is_passthrough(c: char) -> bool {
    CONTROL_SYMBOLS.contains(&c) || c.is_whitespace()
}

/// Limits applied while rewriting.
#[derive(Clone, Debug, Default)]
pub struct RewriteConfig {
    /// Maximum length of any intermediate or final string, in symbols.
    /// `None` leaves growth unbounded.
    pub max_length: Option<usize>,
}

/// Rewrites an axiom under a rule table.
#[derive(Clone, Debug, Default)]
pub struct Rewriter {
    config: RewriteConfig,
}

impl Rewriter {
    pub fn new(config: RewriteConfig) -> Self {
        Self { config }
    }

    /// Expands `axiom` for `iterations` passes.
    ///
    /// Fails with [`FractalError::UndefinedSymbol`] before any expansion
    /// work if a symbol that would need rewriting has no rule.
    pub fn rewrite(&self, axiom: &str, rules: &Rules, iterations: usize) -> Result<String> {
        check_rules(axiom, rules, iterations)?;

        let mut current = axiom.to_string();
        for pass in 0..iterations {
            let mut next = String::with_capacity(current.len() * 2);
            for c in current.chars() {
                if CONTROL_SYMBOLS.contains(&c) {
                    next.push(c);
                } else if c.is_whitespace() {
                    continue;
                } else {
                    let body = rules
                        .get(&c)
                        .ok_or(FractalError::UndefinedSymbol { symbol: c, pass })?;
                    next.push_str(body);
                }

                if let Some(limit) = self.config.max_length
                    && next.len() > limit
                {
                    return Err(FractalError::ExpansionLimit { limit, pass });
                }
            }
            debug!(pass, len = next.len(), "rewrite pass complete");
            current = next;
        }

        Ok(current)
    }
}

/// Expands `axiom` for `iterations` passes with no length limit.
pub fn rewrite(axiom: &str, rules: &Rules, iterations: usize) -> Result<String> {
    Rewriter::default().rewrite(axiom, rules, iterations)
}

/// Walks the alphabet reachable at each pass and reports the first
/// symbol that would be looked up without a rule.
///
/// Runs in time proportional to the alphabet, never to the expanded string.
fn check_rules(axiom: &str, rules: &Rules, iterations: usize) -> Result<()> {
    let symbols_of =
        |s: &str| -> BTreeSet<char> { s.chars().filter(|&c| !is_passthrough(c)).collect() };

    let mut seen = BTreeSet::new();
    let mut frontier = symbols_of(axiom);
    for pass in 0..iterations {
        let mut next = BTreeSet::new();
        for &symbol in &frontier {
            let body = rules
                .get(&symbol)
                .ok_or(FractalError::UndefinedSymbol { symbol, pass })?;
            next.extend(symbols_of(body));
        }
        seen.extend(frontier);
        // Symbols already checked at an earlier pass cannot fail later.
        frontier = next.difference(&seen).copied().collect();
        if frontier.is_empty() {
            break;
        }
    }
    Ok(())
}
