use phf::{Set, phf_set};

// English stopwords dropped from multi-word queries, matching the Sphinx HTML builder.
static STOPWORDS: Set<&'static str> = phf_set! {
    "a", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is",
    "it", "near", "no", "not", "of", "on", "or", "such", "that", "the", "their",
    "then", "there", "these", "they", "this", "to", "was", "will", "with",
};

/// Case-folds a term for lookup. Terms are compared after folding only; no stemming.
pub fn fold(term: &str) -> String {
    term.trim().to_lowercase()
}

pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}

/// Splits a free-form query into folded words.
///
/// Words are separated by whitespace and by any punctuation other than `_`, `.` and `-`.
/// Those three are kept inside a word so dotted object names survive intact, but a
/// trailing `.` or `-` is dropped.
pub fn split_query(query: &str) -> Vec<String> {
    query
        .split(is_word_separator)
        .map(|word| word.trim_matches(|c: char| c == '.' || c == '-'))
        .filter(|word| !word.is_empty())
        .map(fold)
        .collect()
}

fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || !(c.is_alphanumeric() || matches!(c, '_' | '.' | '-'))
}

/// Like [`split_query`], with stopwords removed.
pub fn query_words(query: &str) -> Vec<String> {
    split_query(query)
        .into_iter()
        .filter(|word| !is_stopword(word))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_lowercases_and_trims() {
        assert_eq!(fold("  get_RMSD "), "get_rmsd");
        assert_eq!(fold("GDT"), "gdt");
        assert_eq!(fold(""), "");
    }

    #[test]
    fn is_stopword_recognizes_folded_stopwords_only() {
        assert!(is_stopword("the"));
        assert!(is_stopword("with"));
        assert!(!is_stopword("The"));
        assert!(!is_stopword("grompp"));
    }

    #[test]
    fn split_query_strips_outer_punctuation_but_keeps_dotted_names() {
        assert_eq!(
            split_query("(pyrexMD.gmx.grompp), get_RMSD!"),
            vec!["pyrexmd.gmx.grompp", "get_rmsd"]
        );
        assert_eq!(split_query("  replica-exchange  "), vec!["replica-exchange"]);
        assert_eq!(split_query("_private"), vec!["_private"]);
        assert!(split_query(" ?? ").is_empty());
    }

    #[test]
    fn split_query_breaks_words_on_inner_punctuation() {
        assert_eq!(split_query("gdt,rmsd"), vec!["gdt", "rmsd"]);
        assert_eq!(split_query("get_RMSD/plot"), vec!["get_rmsd", "plot"]);
        assert_eq!(
            split_query("pyrexMD.gmx.grompp(mdp=x)."),
            vec!["pyrexmd.gmx.grompp", "mdp", "x"]
        );
    }

    #[test]
    fn query_words_drops_stopwords() {
        assert_eq!(
            query_words("setup of the Replica exchange"),
            vec!["setup", "replica", "exchange"]
        );
        assert!(query_words("the of and").is_empty());
    }
}
