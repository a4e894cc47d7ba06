use log::debug;
use semi_lcs_grammar::{GrammarRule, GrammarRuleSet};
use semi_lcs_symbol::Symbol;

use crate::error::SourceError;

const MAGIC: [u8; 2] = [0x1F, 0x9D];
const CLEAR_CODE: u32 = 256;
const MIN_WIDTH: u32 = 9;

/// Reads fixed-width codes LSB-first out of `bytes`, re-aligning to a
/// fresh byte-aligned chunk of `width` bytes (= 8 codes, for any width in
/// `9..=16`) whenever the width changes, matching `.Z`'s per-width-bump
/// padding (§6 external interfaces).
struct CodeReader<'a> {
    bytes: &'a [u8],
    byte_pos: usize,
    width: u32,
    chunk: Vec<u8>,
    chunk_bit_pos: usize,
    chunk_valid_bits: usize,
}

impl<'a> CodeReader<'a> {
    fn new(bytes: &'a [u8], byte_pos: usize, width: u32) -> Self {
        CodeReader { bytes, byte_pos, width, chunk: Vec::new(), chunk_bit_pos: 0, chunk_valid_bits: 0 }
    }

    fn set_width(&mut self, width: u32) {
        self.width = width;
        self.chunk_bit_pos = 0;
        self.chunk_valid_bits = 0;
    }

    fn refill(&mut self) -> bool {
        if self.byte_pos >= self.bytes.len() {
            return false;
        }
        let chunk_bytes = self.width as usize;
        let end = (self.byte_pos + chunk_bytes).min(self.bytes.len());
        self.chunk.clear();
        self.chunk.extend_from_slice(&self.bytes[self.byte_pos..end]);
        self.chunk_valid_bits = self.chunk.len() * 8;
        self.byte_pos = end;
        self.chunk_bit_pos = 0;
        true
    }

    fn next_code(&mut self) -> Option<u32> {
        if self.chunk_bit_pos + self.width as usize > self.chunk_valid_bits && !self.refill() {
            return None;
        }
        if self.chunk_bit_pos + self.width as usize > self.chunk_valid_bits {
            return None;
        }
        let mut code = 0u32;
        for b in 0..self.width {
            let bit_index = self.chunk_bit_pos + b as usize;
            let byte = self.chunk[bit_index / 8];
            let bit = (byte >> (bit_index % 8)) & 1;
            code |= (bit as u32) << b;
        }
        self.chunk_bit_pos += self.width as usize;
        Some(code)
    }
}

/// The result of ingesting a `.Z` stream: the decompressed text and a
/// grammar whose rules mirror the LZW dictionary and the code-sequence
/// concatenation that produced it (§6 external interfaces).
#[derive(Clone, Debug)]
pub struct UnixCompressIngest {
    /// The fully decompressed byte stream.
    pub text: Vec<Symbol>,
    /// A grammar expanding to the same stream.
    pub grammar: GrammarRuleSet,
}

/// Decompresses and grammar-ingests a `.Z` (UNIX `compress`) byte stream
/// in one pass: codes `0..256` are seeded as terminal rules, each new
/// dictionary entry becomes a `prefix . last_char` rule, and the output
/// is the concatenation of decoded phrases in stream order (§6 external
/// interfaces).
pub fn ingest_unix_compress(bytes: &[u8]) -> Result<UnixCompressIngest, SourceError> {
    if bytes.len() < 3 {
        return Err(SourceError::TruncatedHeader);
    }
    if bytes[0] != MAGIC[0] || bytes[1] != MAGIC[1] {
        return Err(SourceError::BadMagic);
    }
    let flags = bytes[2];
    let max_bits = (flags & 0x1F) as u32;
    let block_mode = flags & 0x80 != 0;
    if !(MIN_WIDTH..=16).contains(&max_bits) {
        return Err(SourceError::BadMaxWidth { max_bits });
    }
    let first_free_code = if block_mode { CLEAR_CODE + 1 } else { CLEAR_CODE };

    let mut rules = GrammarRuleSet::new();
    let mut alphabet_rules = [0u32; 256];
    for byte in 0..=255u16 {
        alphabet_rules[byte as usize] = rules.add_rule(GrammarRule::Terminal(Symbol::from(byte as u8)));
    }

    // Parallel to the grammar: `dict_rule[code - first_free_code]` is the
    // rule expanding to that code's string, `dict_first[..]` its first
    // symbol, `dict_string[..]` its decoded bytes (kept separately so
    // decoding a phrase is O(len) instead of re-walking the rule tree).
    let mut dict_rule: Vec<u32> = Vec::new();
    let mut dict_first: Vec<Symbol> = Vec::new();
    let mut dict_string: Vec<Vec<Symbol>> = Vec::new();

    let code_rule = |code: u32, dict_rule: &[u32]| -> u32 {
        if code < 256 {
            alphabet_rules[code as usize]
        } else {
            dict_rule[(code - first_free_code) as usize]
        }
    };
    let code_first = |code: u32, dict_first: &[Symbol]| -> Symbol {
        if code < 256 {
            Symbol::from(code as u8)
        } else {
            dict_first[(code - first_free_code) as usize]
        }
    };
    let code_string = |code: u32, dict_string: &[Vec<Symbol>], scratch: &mut Vec<Symbol>| {
        if code < 256 {
            scratch.push(Symbol::from(code as u8));
        } else {
            scratch.extend_from_slice(&dict_string[(code - first_free_code) as usize]);
        }
    };

    let mut width = MIN_WIDTH;
    let mut reader = CodeReader::new(bytes, 3, width);
    let mut next_code = first_free_code;

    let mut text: Vec<Symbol> = Vec::new();
    let mut output_rule: Option<u32> = None;
    let mut old_code: Option<u32> = None;

    while let Some(code) = reader.next_code() {
        if block_mode && code == CLEAR_CODE {
            dict_rule.clear();
            dict_first.clear();
            dict_string.clear();
            next_code = first_free_code;
            width = MIN_WIDTH;
            reader.set_width(width);
            old_code = None;
            debug!("dictionary reset at clear code");
            continue;
        }

        let (entry_rule, entry_first, entry_string): (u32, Symbol, Vec<Symbol>);
        if code < next_code {
            entry_rule = code_rule(code, &dict_rule);
            entry_first = code_first(code, &dict_first);
            let mut s = Vec::new();
            code_string(code, &dict_string, &mut s);
            entry_string = s;
        } else if code == next_code && old_code.is_some() {
            let old = old_code.unwrap();
            let prefix_first = code_first(old, &dict_first);
            entry_rule = rules.add_rule(GrammarRule::NonTerminal {
                left: code_rule(old, &dict_rule),
                right: alphabet_rules[u8::from(prefix_first) as usize],
            });
            entry_first = code_first(old, &dict_first);
            let mut s = Vec::new();
            code_string(old, &dict_string, &mut s);
            s.push(prefix_first);
            entry_string = s;
        } else {
            return Err(SourceError::BadCode { code });
        }

        text.extend_from_slice(&entry_string);
        output_rule = Some(match output_rule {
            None => entry_rule,
            Some(prev) => rules.add_rule(GrammarRule::NonTerminal { left: prev, right: entry_rule }),
        });

        if let Some(old) = old_code {
            if next_code < (1u32 << max_bits) {
                let new_rule = if code == next_code {
                    entry_rule
                } else {
                    rules.add_rule(GrammarRule::NonTerminal {
                        left: code_rule(old, &dict_rule),
                        right: alphabet_rules[u8::from(entry_first) as usize],
                    })
                };
                dict_rule.push(new_rule);
                dict_first.push(code_first(old, &dict_first));
                let mut s = Vec::new();
                code_string(old, &dict_string, &mut s);
                s.push(entry_first);
                dict_string.push(s);
                next_code += 1;
                if next_code == (1 << width) && width < max_bits {
                    width += 1;
                    reader.set_width(width);
                }
            }
        }
        old_code = Some(code);
    }

    let final_rule = output_rule.ok_or(SourceError::EmptyStream)?;
    rules.set_final_rule(final_rule);
    Ok(UnixCompressIngest { text, grammar: rules })
}

/// Decompresses a `.Z` byte stream to plain bytes, discarding the
/// grammar side of [`ingest_unix_compress`].
pub fn decompress_unix_compress(bytes: &[u8]) -> Result<Vec<Symbol>, SourceError> {
    Ok(ingest_unix_compress(bytes)?.text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use semi_lcs_grammar::GrammarRule;

    fn expand(rules: &GrammarRuleSet, index: u32, out: &mut Vec<Symbol>) {
        match rules.rule(index) {
            GrammarRule::Terminal(c) => out.push(c),
            GrammarRule::NonTerminal { left, right } => {
                expand(rules, left, out);
                expand(rules, right, out);
            }
        }
    }

    /// A minimal non-adaptive-width encoder (fixed 9-bit codes, no
    /// dictionary growth past what the decoder itself would build from
    /// literal bytes) good enough to drive the round-trip test: it just
    /// emits every input byte as its own literal code.
    fn encode_literal(s: &[u8]) -> Vec<u8> {
        let mut out = vec![MAGIC[0], MAGIC[1], MIN_WIDTH as u8];
        let mut bitbuf: u32 = 0;
        let mut bitcount = 0u32;
        for &byte in s {
            bitbuf |= (byte as u32) << bitcount;
            bitcount += MIN_WIDTH;
            while bitcount >= 8 {
                out.push((bitbuf & 0xFF) as u8);
                bitbuf >>= 8;
                bitcount -= 8;
            }
        }
        if bitcount > 0 {
            out.push((bitbuf & 0xFF) as u8);
        }
        out
    }

    #[test]
    fn test_rejects_bad_magic() {
        let bytes = [0x00, 0x00, 9];
        assert_eq!(ingest_unix_compress(&bytes).unwrap_err(), SourceError::BadMagic);
    }

    #[test]
    fn test_rejects_truncated_header() {
        let bytes = [0x1F, 0x9D];
        assert_eq!(ingest_unix_compress(&bytes).unwrap_err(), SourceError::TruncatedHeader);
    }

    #[test]
    fn test_literal_round_trip_matches_grammar_expansion() {
        let text = b"aaaabaabcaabcd";
        let encoded = encode_literal(text);
        let ingest = ingest_unix_compress(&encoded).unwrap();
        let decoded: Vec<u8> = ingest.text.iter().map(|&s| u8::from(s)).collect();
        assert_eq!(decoded, text);

        let mut expanded = Vec::new();
        expand(&ingest.grammar, ingest.grammar.final_rule(), &mut expanded);
        let expanded: Vec<u8> = expanded.into_iter().map(u8::from).collect();
        assert_eq!(expanded, text);
    }

    #[test]
    fn test_decompress_matches_ingest_text() {
        let text = b"abababab";
        let encoded = encode_literal(text);
        let decoded: Vec<u8> = decompress_unix_compress(&encoded).unwrap().into_iter().map(u8::from).collect();
        assert_eq!(decoded, text);
    }
}
