use semi_lcs_grammar::{GrammarRule, GrammarRuleSet};
use semi_lcs_symbol::Symbol;

/// Builds the Fibonacci-like grammar `F_n`: `F_0 = "A"`, `F_1 = "AB"`,
/// `F_n = F_{n-1} . F_{n-2}` for `n >= 2`, sharing every earlier `F_k`
/// rather than re-deriving it (§4.7 grammar sources).
pub fn fibonacci_grammar(n: u32) -> GrammarRuleSet {
    let mut rules = GrammarRuleSet::new();
    let f0 = rules.add_rule(GrammarRule::Terminal(Symbol::from(b'A')));
    if n == 0 {
        rules.set_final_rule(f0);
        return rules;
    }

    let b = rules.add_rule(GrammarRule::Terminal(Symbol::from(b'B')));
    let f1 = rules.add_rule(GrammarRule::NonTerminal { left: f0, right: b });
    if n == 1 {
        rules.set_final_rule(f1);
        return rules;
    }

    let mut prev2 = f0;
    let mut prev1 = f1;
    for _ in 2..=n {
        let cur = rules.add_rule(GrammarRule::NonTerminal { left: prev1, right: prev2 });
        prev2 = prev1;
        prev1 = cur;
    }
    rules.set_final_rule(prev1);
    rules
}
