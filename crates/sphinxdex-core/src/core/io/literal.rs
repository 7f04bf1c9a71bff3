use super::error::MalformedIndexError;

const SET_INDEX_CALL: &str = "Search.setIndex(";

/// Extracts the object literal from a `Search.setIndex(...)` call.
///
/// A bare object literal (already starting with `{`) is returned unchanged, so plain JSON
/// exports load through the same path. A trailing `;` after the call is accepted.
pub fn unwrap_set_index(source: &str) -> Result<&str, MalformedIndexError> {
    let trimmed = source.trim_start_matches('\u{feff}').trim();
    if trimmed.starts_with('{') {
        return Ok(trimmed);
    }

    let body = trimmed
        .strip_prefix(SET_INDEX_CALL)
        .ok_or(MalformedIndexError::InvalidWrapper)?;
    let body = body.strip_suffix(';').unwrap_or(body).trim_end();
    body.strip_suffix(')')
        .map(str::trim)
        .ok_or(MalformedIndexError::InvalidWrapper)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Rewrites a JavaScript object literal into JSON.
///
/// Bare keys (`docnames:`) are quoted and single-quoted strings are re-quoted with double
/// quotes. Anything else is copied through; validation is left to the JSON parser.
pub fn quote_bare_keys(literal: &str) -> String {
    let chars: Vec<char> = literal.chars().collect();
    let mut out = String::with_capacity(literal.len() + literal.len() / 8);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '"' => i = copy_double_quoted(&chars, i, &mut out),
            '\'' => i = requote_single_quoted(&chars, i, &mut out),
            c if is_word_char(c) => {
                let start = i;
                while i < chars.len() && is_word_char(chars[i]) {
                    i += 1;
                }
                let mut lookahead = i;
                while lookahead < chars.len() && chars[lookahead].is_whitespace() {
                    lookahead += 1;
                }
                let is_key = lookahead < chars.len() && chars[lookahead] == ':';

                if is_key {
                    out.push('"');
                }
                out.extend(&chars[start..i]);
                if is_key {
                    out.push('"');
                }
            }
            _ => {
                out.push(c);
                i += 1;
            }
        }
    }

    out
}

// Both helpers return the index just past the closing quote (or the end of input).
fn copy_double_quoted(chars: &[char], start: usize, out: &mut String) -> usize {
    out.push('"');
    let mut i = start + 1;
    while i < chars.len() {
        let c = chars[i];
        out.push(c);
        i += 1;
        match c {
            '\\' if i < chars.len() => {
                out.push(chars[i]);
                i += 1;
            }
            '"' => return i,
            _ => {}
        }
    }
    i
}

fn requote_single_quoted(chars: &[char], start: usize, out: &mut String) -> usize {
    out.push('"');
    let mut i = start + 1;
    while i < chars.len() {
        let c = chars[i];
        i += 1;
        match c {
            '\\' if i < chars.len() => {
                if chars[i] == '\'' {
                    out.push('\'');
                } else {
                    out.push('\\');
                    out.push(chars[i]);
                }
                i += 1;
            }
            '"' => out.push_str("\\\""),
            '\'' => {
                out.push('"');
                return i;
            }
            _ => out.push(c),
        }
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwrap_set_index_extracts_the_call_argument() {
        let src = "Search.setIndex({docnames:[\"index\"]})";
        assert_eq!(unwrap_set_index(src).unwrap(), "{docnames:[\"index\"]}");
    }

    #[test]
    fn unwrap_set_index_tolerates_whitespace_semicolon_and_bom() {
        let src = "\u{feff}  Search.setIndex( {a:1} ) ;\n";
        assert_eq!(unwrap_set_index(src).unwrap(), "{a:1}");
    }

    #[test]
    fn unwrap_set_index_passes_bare_objects_through() {
        assert_eq!(unwrap_set_index("  {\"a\":1}\n").unwrap(), "{\"a\":1}");
    }

    #[test]
    fn unwrap_set_index_rejects_other_calls_and_unclosed_calls() {
        assert_eq!(
            unwrap_set_index("Search.loadIndex({})"),
            Err(MalformedIndexError::InvalidWrapper)
        );
        assert_eq!(
            unwrap_set_index("Search.setIndex({}"),
            Err(MalformedIndexError::InvalidWrapper)
        );
        assert_eq!(unwrap_set_index(""), Err(MalformedIndexError::InvalidWrapper));
    }

    #[test]
    fn quote_bare_keys_quotes_only_keys() {
        let literal = "{docnames:[\"a\",\"b\"],envversion:{sphinx:56,\"sphinx.domains.c\":2},flag:true}";
        assert_eq!(
            quote_bare_keys(literal),
            "{\"docnames\":[\"a\",\"b\"],\"envversion\":{\"sphinx\":56,\"sphinx.domains.c\":2},\"flag\":true}"
        );
    }

    #[test]
    fn quote_bare_keys_leaves_colons_inside_strings_alone() {
        let literal = "{objtypes:{\"0\":\"py:module\"},titles:[\"a: b\"]}";
        assert_eq!(
            quote_bare_keys(literal),
            "{\"objtypes\":{\"0\":\"py:module\"},\"titles\":[\"a: b\"]}"
        );
    }

    #[test]
    fn quote_bare_keys_handles_escaped_quotes_and_numbers() {
        let literal = "{t:[\"say \\\"hi\\\"\"],n:-1.5e3,k :2}";
        assert_eq!(
            quote_bare_keys(literal),
            "{\"t\":[\"say \\\"hi\\\"\"],\"n\":-1.5e3,\"k\" :2}"
        );
    }

    #[test]
    fn quote_bare_keys_requotes_single_quoted_strings() {
        let literal = "{a:'it\\'s \"x\"'}";
        assert_eq!(quote_bare_keys(literal), "{\"a\":\"it's \\\"x\\\"\"}");
    }

    #[test]
    fn normalized_literal_parses_as_json() {
        let literal = "{terms:{\"class\":6,abinitio:5,contact:[4,7]},titleterms:{}}";
        let value: serde_json::Value = serde_json::from_str(&quote_bare_keys(literal)).unwrap();
        assert_eq!(value["terms"]["contact"][1], 7);
        assert_eq!(value["terms"]["class"], 6);
    }
}
