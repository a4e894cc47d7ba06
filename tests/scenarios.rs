use semi_lcs::{
    fibonacci_grammar, lz78_grammar, lzw_grammar, sticky_multiply, GrammarKernel, GrammarRule,
    GrammarRuleSet, LCSKernel, MongeMatrix, Permutation, PermutationMatrix, Symbol,
};

fn symbols(s: &str) -> Vec<Symbol> {
    s.bytes().map(Symbol::from).collect()
}

fn expand(rules: &GrammarRuleSet, index: u32, out: &mut Vec<Symbol>) {
    match rules.rule(index) {
        GrammarRule::Terminal(c) => out.push(c),
        GrammarRule::NonTerminal { left, right } => {
            expand(rules, left, out);
            expand(rules, right, out);
        }
    }
}

fn expand_all(rules: &GrammarRuleSet) -> Vec<Symbol> {
    let mut out = Vec::new();
    expand(rules, rules.final_rule(), &mut out);
    out
}

// Scenario 1: plain LCS kernel queries on a concrete pair of strings.
#[test]
fn scenario_1_plain_lcs_kernel_matches_known_lengths() {
    let a = symbols("BAABCBCA");
    let b = symbols("BAABCABCABACA");
    let kernel = LCSKernel::new(&a, &b);

    assert_eq!(kernel.lcs_whole_a(0, 13).unwrap(), 7);
    assert_eq!(kernel.lcs_whole_b(0, 8).unwrap(), 7);

    // Cross-check against the DP oracle over every prefix/suffix pair the
    // four query kinds can address.
    for a_l in 0..=a.len() as u32 {
        for a_r in a_l..=a.len() as u32 {
            let dp = semi_lcs_dp::lcs_length(&a[a_l as usize..a_r as usize], &b);
            assert_eq!(kernel.lcs_whole_b(a_l, a_r).unwrap(), dp);
        }
    }
    for b_l in 0..=b.len() as u32 {
        for b_r in b_l..=b.len() as u32 {
            let dp = semi_lcs_dp::lcs_length(&a, &b[b_l as usize..b_r as usize]);
            assert_eq!(kernel.lcs_whole_a(b_l, b_r).unwrap(), dp);
        }
    }
}

// Scenario 2: exhaustive 5! x 5! sticky multiplication against the
// tropical Monge reference.
fn permutations_of(n: u32) -> Vec<Vec<u32>> {
    let mut items: Vec<u32> = (1..=n).collect();
    let mut out = Vec::new();
    permute(&mut items, 0, &mut out);
    out
}

fn permute(items: &mut Vec<u32>, k: usize, out: &mut Vec<Vec<u32>>) {
    if k == items.len() {
        out.push(items.clone());
        return;
    }
    for i in k..items.len() {
        items.swap(k, i);
        permute(items, k + 1, out);
        items.swap(k, i);
    }
}

fn reference_tropical(p: &PermutationMatrix, q: &PermutationMatrix) -> PermutationMatrix {
    let mp = MongeMatrix::from_density(p);
    let mq = MongeMatrix::from_density(q);
    mp.tropical_multiply(&mq).unwrap().to_permutation().unwrap()
}

#[test]
fn scenario_2_sticky_multiply_matches_tropical_reference_exhaustively() {
    let perms = permutations_of(5);
    assert_eq!(perms.len(), 120);
    for p_mapping in &perms {
        let p = Permutation::from_dense(p_mapping).expand(5, 5).unwrap();
        for q_mapping in &perms {
            let q = Permutation::from_dense(q_mapping).expand(5, 5).unwrap();
            let expected = reference_tropical(&p, &q);
            let actual = sticky_multiply(&p, &q).unwrap();
            assert_eq!(actual, expected, "p={p_mapping:?} q={q_mapping:?}");
        }
    }
}

// Scenario 3: Fibonacci-like grammar, compressed kernel matches the DP
// oracle over the fully expanded text.
#[test]
fn scenario_3_fibonacci_grammar_kernel_matches_dp_oracle() {
    let p = symbols("ABACABABDAABAAAB");
    let rules = fibonacci_grammar(8);
    let text = expand_all(&rules);

    let kernel = GrammarKernel::new(&p, &rules).unwrap();
    let dp = semi_lcs_dp::lcs_length(&p, &text);
    assert_eq!(kernel.lcs(), dp);
    assert_eq!(kernel.text_len(), text.len() as u32);
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

// Scenario 4: LZ78-built grammar has exactly 3n rules and round-trips.
#[test]
fn scenario_4_lz78_grammar_has_expected_size_and_shape() {
    let n = 10u32;
    let text = t_n(n, "A");
    assert_eq!(text.len() as u64, (n as u64 + 1) * (n as u64 + 2) / 2);

    let s = symbols(&text);
    let rules = lz78_grammar(&s);
    assert_eq!(rules.len() as u32, 3 * n + 1);
    assert_eq!(expand_all(&rules), s);
}

// Scenario 5: LZW-built grammar has exactly 2n + 26 + 1 rules and
// round-trips.
#[test]
fn scenario_5_lzw_grammar_has_expected_size_and_shape() {
    let n = 10u32;
    let text = t_n(n, "AA");
    let s = symbols(&text);
    let alphabet: Vec<Symbol> = (b'A'..=b'Z').map(Symbol::from).collect();
    let rules = lzw_grammar(&s, &alphabet);
    assert_eq!(rules.len() as u32, 2 * n + 26 + 1);
    assert_eq!(expand_all(&rules), s);
}

// Scenario 6: UNIX-compress round trip agrees byte-for-byte between
// decompression and grammar ingestion.
#[test]
fn scenario_6_unix_compress_round_trip_agrees() {
    let text = b"aaaabaabcaabcd";

    let mut encoded = vec![0x1Fu8, 0x9D, 9];
    let mut bitbuf: u32 = 0;
    let mut bitcount = 0u32;
    for &byte in text {
        bitbuf |= (byte as u32) << bitcount;
        bitcount += 9;
        while bitcount >= 8 {
            encoded.push((bitbuf & 0xFF) as u8);
            bitbuf >>= 8;
            bitcount -= 8;
        }
    }
    if bitcount > 0 {
        encoded.push((bitbuf & 0xFF) as u8);
    }

    let decompressed = semi_lcs::decompress_unix_compress(&encoded).unwrap();
    let ingest = semi_lcs::ingest_unix_compress(&encoded).unwrap();
    let from_grammar = expand_all(&ingest.grammar);

    let decompressed_bytes: Vec<u8> = decompressed.into_iter().map(u8::from).collect();
    let from_grammar_bytes: Vec<u8> = from_grammar.into_iter().map(u8::from).collect();

    assert_eq!(decompressed_bytes, text);
    assert_eq!(from_grammar_bytes, text);
    assert_eq!(decompressed_bytes, from_grammar_bytes);
}
