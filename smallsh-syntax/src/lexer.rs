//! Lexical analyzer: splits one input line into words.
//!
//! See the [crate-level documentation](crate) for how the lexer fits in.

/// Maximum number of words a single command line may be split into.
///
/// Words beyond this bound are silently dropped, matching the bounded-array
/// behavior of the shell this crate reimplements.
pub const MAX_WORDS: usize = 512;

/// The locale-independent ASCII whitespace class used for word boundaries:
/// space, tab, newline, carriage return, vertical tab, form feed.
fn is_shell_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Splits `line` into words, honoring `#` comments and `\` escapes.
///
/// A `#` is only recognized as a comment when it is the first byte of what
/// would otherwise be a new word; `foo#bar` is one word, not `foo` followed
/// by a comment. A `\` makes the following byte (if any) part of the current
/// word verbatim, bypassing whitespace and comment recognition for that one
/// byte; a trailing `\` with nothing after it contributes nothing.
///
/// An empty or wholly-comment line yields zero words. This is a valid
/// outcome, not an error.
pub fn split_words(line: &[u8]) -> Vec<Vec<u8>> {
    let mut words = Vec::new();
    let mut i = skip_whitespace(line, 0);

    while i < line.len() && words.len() < MAX_WORDS {
        if line[i] == b'#' {
            break;
        }

        let mut word = Vec::new();
        while i < line.len() && !is_shell_whitespace(line[i]) {
            if line[i] == b'\\' {
                i += 1;
                if i < line.len() {
                    word.push(line[i]);
                    i += 1;
                }
            } else {
                word.push(line[i]);
                i += 1;
            }
        }
        words.push(word);
        i = skip_whitespace(line, i);
    }

    words
}

fn skip_whitespace(line: &[u8], mut i: usize) -> usize {
    while i < line.len() && is_shell_whitespace(line[i]) {
        i += 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(strs: &[&str]) -> Vec<Vec<u8>> {
        strs.iter().map(|s| s.as_bytes().to_vec()).collect()
    }

    #[test]
    fn empty_line_yields_no_words() {
        assert_eq!(split_words(b""), Vec::<Vec<u8>>::new());
        assert_eq!(split_words(b"   \t  "), Vec::<Vec<u8>>::new());
    }

    #[test]
    fn wholly_comment_line_yields_no_words() {
        assert_eq!(split_words(b"# nothing to see here"), Vec::<Vec<u8>>::new());
        assert_eq!(split_words(b"   # indented comment"), Vec::<Vec<u8>>::new());
    }

    #[test]
    fn simple_splitting() {
        assert_eq!(split_words(b"echo hello world"), words(&["echo", "hello", "world"]));
    }

    #[test]
    fn hash_mid_word_is_not_a_comment() {
        assert_eq!(split_words(b"echo foo#bar"), words(&["echo", "foo#bar"]));
    }

    #[test]
    fn escaped_space_stays_in_one_word() {
        assert_eq!(
            split_words(b"echo hi\\ there # ignored"),
            words(&["echo", "hi there"])
        );
    }

    #[test]
    fn escaped_hash_is_literal() {
        assert_eq!(split_words(b"echo \\#notacomment"), words(&["echo", "#notacomment"]));
    }

    #[test]
    fn trailing_backslash_contributes_nothing() {
        assert_eq!(split_words(b"echo foo\\"), words(&["echo", "foo"]));
    }

    #[test]
    fn capacity_is_respected() {
        let line = "w ".repeat(MAX_WORDS + 10);
        let result = split_words(line.as_bytes());
        assert_eq!(result.len(), MAX_WORDS);
    }

    #[test]
    fn trailing_comment_is_dropped_entirely() {
        let result = split_words(b"echo a#b c#d # trailing");
        assert_eq!(result, words(&["echo", "a#b", "c#d"]));
    }
}
