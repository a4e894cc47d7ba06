use std::collections::HashMap;

use semi_lcs_grammar::{GrammarRule, GrammarRuleSet};
use semi_lcs_symbol::Symbol;

/// Builds a grammar for `s` by the LZ78 dictionary construction: each new
/// phrase is the longest trie-matched prefix plus one fresh symbol, and
/// the output is the concatenation of phrases in the order they were cut
/// (§4.7 grammar sources).
///
/// Every new phrase costs at most 3 rules: a terminal for the fresh
/// symbol, a concatenation extending the matched prefix by it, and a
/// concatenation appending the phrase onto the growing output.
pub fn lz78_grammar(s: &[Symbol]) -> GrammarRuleSet {
    let mut rules = GrammarRuleSet::new();
    let mut transitions: HashMap<(Option<u32>, Symbol), u32> = HashMap::new();
    let mut current_entry: Option<u32> = None;
    let mut last_string_entry: Option<u32> = None;

    for (i, &c) in s.iter().enumerate() {
        let is_last = i + 1 == s.len();
        if let Some(&next) = transitions.get(&(current_entry, c)) {
            if !is_last {
                current_entry = Some(next);
                continue;
            }
        }

        let dict_char = rules.add_rule(GrammarRule::Terminal(c));
        let dict_entry = match current_entry {
            None => dict_char,
            Some(prefix) => rules.add_rule(GrammarRule::NonTerminal { left: prefix, right: dict_char }),
        };
        transitions.insert((current_entry, c), dict_entry);
        current_entry = None;

        last_string_entry = Some(match last_string_entry {
            None => dict_entry,
            Some(prev) => rules.add_rule(GrammarRule::NonTerminal { left: prev, right: dict_entry }),
        });
    }

    let final_rule = last_string_entry.expect("lz78_grammar requires a non-empty input");
    rules.set_final_rule(final_rule);
    rules
}

/// Builds a grammar for `s` by the LZW dictionary construction over
/// `alphabet`: like [`lz78_grammar`], but the single-symbol dictionary is
/// pre-seeded so every new phrase's fresh symbol reuses an existing
/// terminal rule rather than minting one, costing at most 2 rules per
/// phrase after the `alphabet.len()` seed terminals (§4.7 grammar
/// sources).
pub fn lzw_grammar(s: &[Symbol], alphabet: &[Symbol]) -> GrammarRuleSet {
    let mut rules = GrammarRuleSet::new();
    let mut alphabet_rule: HashMap<Symbol, u32> = HashMap::with_capacity(alphabet.len());
    for &sym in alphabet {
        alphabet_rule.entry(sym).or_insert_with(|| rules.add_rule(GrammarRule::Terminal(sym)));
    }

    // The trie root already has a transition to every seeded letter, so
    // the very first character of input always extends a matched prefix
    // instead of minting a spurious one-off entry.
    let mut transitions: HashMap<(Option<u32>, Symbol), u32> = HashMap::new();
    for (&sym, &rule) in &alphabet_rule {
        transitions.insert((None, sym), rule);
    }
    let mut current_entry: Option<u32> = None;
    let mut last_string_entry: Option<u32> = None;

    for (i, &c) in s.iter().enumerate() {
        let is_last = i + 1 == s.len();
        if let Some(&next) = transitions.get(&(current_entry, c)) {
            if !is_last {
                current_entry = Some(next);
                continue;
            }
        }

        let dict_char = *alphabet_rule.get(&c).expect("symbol outside the seeded alphabet");
        let dict_entry = match current_entry {
            None => dict_char,
            Some(prefix) => rules.add_rule(GrammarRule::NonTerminal { left: prefix, right: dict_char }),
        };
        transitions.insert((current_entry, c), dict_entry);
        current_entry = None;

        last_string_entry = Some(match last_string_entry {
            None => dict_entry,
            Some(prev) => rules.add_rule(GrammarRule::NonTerminal { left: prev, right: dict_entry }),
        });
    }

    let final_rule = last_string_entry.expect("lzw_grammar requires a non-empty input");
    rules.set_final_rule(final_rule);
    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(rules: &GrammarRuleSet, index: u32, out: &mut Vec<Symbol>) {
        match rules.rule(index) {
            GrammarRule::Terminal(c) => out.push(c),
            GrammarRule::NonTerminal { left, right } => {
                expand(rules, left, out);
                expand(rules, right, out);
            }
        }
    }

    fn expand_all(rules: &GrammarRuleSet) -> String {
        let mut out = Vec::new();
        expand(rules, rules.final_rule(), &mut out);
        out.into_iter().map(|s| u8::from(s) as char).collect()
    }

    fn symbols(s: &str) -> Vec<Symbol> {
        s.bytes().map(Symbol::from).collect()
    }

    fn alphabet() -> Vec<Symbol> {
        (b'A'..=b'Z').map(Symbol::from).collect()
    }

    fn t_n(n: u32, e0: &str) -> String {
        let mut e = e0.to_string();
        let mut out = e.clone();
        for i in 1..=n {
            let letter = (b'A' + (i % 26) as u8) as char;
            e.push(letter);
            out.push_str(&e);
        }
        out
    }

    #[test]
    fn test_lz78_round_trips() {
        let s = symbols(&t_n(6, "A"));
        let grammar = lz78_grammar(&s);
        assert_eq!(expand_all(&grammar).as_bytes(), s.iter().map(|&c| u8::from(c)).collect::<Vec<_>>().as_slice());
    }

    #[test]
    fn test_lz78_rule_count_matches_three_per_phase() {
        // The first phrase is a single fresh symbol (1 rule); every
        // later phrase costs 3 (fresh symbol, prefix extension, output
        // concatenation).
        let n = 6;
        let s = symbols(&t_n(n, "A"));
        let grammar = lz78_grammar(&s);
        assert_eq!(grammar.len() as u32, 3 * n + 1);
    }

    #[test]
    fn test_lzw_round_trips() {
        let s = symbols(&t_n(6, "AA"));
        let grammar = lzw_grammar(&s, &alphabet());
        assert_eq!(expand_all(&grammar).as_bytes(), s.iter().map(|&c| u8::from(c)).collect::<Vec<_>>().as_slice());
    }

    #[test]
    fn test_lzw_rule_count_matches_two_per_phase_plus_alphabet() {
        let n = 6;
        let s = symbols(&t_n(n, "AA"));
        let grammar = lzw_grammar(&s, &alphabet());
        assert_eq!(grammar.len() as u32, 2 * n + 26 + 1);
    }
}
