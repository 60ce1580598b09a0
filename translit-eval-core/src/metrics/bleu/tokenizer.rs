//! Segment tokenizers for BLEU

use crate::config::BleuTokenizer;
use regex::Regex;
use std::sync::OnceLock;

/// mteval-v13a substitution rules, applied in order
fn rules() -> &'static [(Regex, &'static str); 4] {
    static RULES: OnceLock<[(Regex, &'static str); 4]> = OnceLock::new();
    RULES.get_or_init(|| {
        [
            // ASCII punctuation and symbols become separate tokens
            (
                Regex::new(r"([{-~\[-` -&(-+:-@/])").expect("valid 13a punctuation pattern"),
                " ${1} ",
            ),
            // period and comma unless preceded by a digit
            (
                Regex::new(r"([^0-9])([.,])").expect("valid 13a period pattern"),
                "${1} ${2} ",
            ),
            // period and comma unless followed by a digit
            (
                Regex::new(r"([.,])([^0-9])").expect("valid 13a comma pattern"),
                " ${1} ${2}",
            ),
            // dash preceded by a digit
            (
                Regex::new(r"([0-9])(-)").expect("valid 13a dash pattern"),
                "${1} ${2} ",
            ),
        ]
    })
}

/// Tokenize one segment the mteval-v13a way
pub fn tokenize_13a(line: &str) -> String {
    let mut line = line.replace("<skipped>", "").replace("-\n", "").replace('\n', " ");
    if line.contains('&') {
        line = line
            .replace("&quot;", "\"")
            .replace("&amp;", "&")
            .replace("&lt;", "<")
            .replace("&gt;", ">");
    }

    let mut line = format!(" {line} ");
    for (pattern, replacement) in rules() {
        line = pattern.replace_all(&line, *replacement).into_owned();
    }

    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split a segment into BLEU tokens
pub fn tokenize(line: &str, tokenizer: BleuTokenizer, lowercase: bool) -> Vec<String> {
    let line = if lowercase {
        line.to_lowercase()
    } else {
        line.to_string()
    };

    match tokenizer {
        BleuTokenizer::Mteval13a => tokenize_13a(&line)
            .split(' ')
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect(),
        BleuTokenizer::None => line.split_whitespace().map(str::to_string).collect(),
    }
}
