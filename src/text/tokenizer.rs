// file: src/text/tokenizer.rs
// description: word tokenization for already-cleaned text

/// Contractions split by treebank-style tokenizers that survive cleaning
/// (no apostrophes left).
const CONTRACTIONS: &[(&str, &str, &str)] = &[
    ("cannot", "can", "not"),
    ("gimme", "gim", "me"),
    ("gonna", "gon", "na"),
    ("gotta", "got", "ta"),
    ("lemme", "lem", "me"),
];

/// Tokenize cleaned text: whitespace split plus contraction splitting.
/// "wanna" only splits when another token follows it.
pub fn tokenize(text: &str) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut tokens = Vec::with_capacity(words.len());

    for (idx, word) in words.iter().enumerate() {
        if let Some((_, head, tail)) = CONTRACTIONS.iter().find(|(w, _, _)| w == word) {
            tokens.push((*head).to_string());
            tokens.push((*tail).to_string());
        } else if *word == "wanna" && idx + 1 < words.len() {
            tokens.push("wan".to_string());
            tokens.push("na".to_string());
        } else {
            tokens.push((*word).to_string());
        }
    }

    tokens
}
