//! Separates redirection operators and the background marker from argv.

/// The kind of redirection requested by `<`, `>`, or `>>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectionKind {
    /// `<`: open read-only.
    In,
    /// `>`: open write, create, truncate.
    OutTruncate,
    /// `>>`: open write, create, append.
    OutAppend,
}

/// One redirection directive: a kind and the (unexpanded-further) filename
/// word that followed the operator.
#[derive(Debug, Clone)]
pub struct Redirection {
    pub kind: RedirectionKind,
    pub path: Vec<u8>,
}

/// The result of parsing a word list: what to run, how, and where its
/// streams should point.
#[derive(Debug, Clone, Default)]
pub struct Command {
    /// Arguments to execute, in order, with all operator and filename words
    /// removed.
    pub argv: Vec<Vec<u8>>,
    /// Whether any word in the input was exactly `&`.
    pub background: bool,
    /// Redirections to apply, in the order they appeared. Empty when
    /// `background` is true, since background commands ignore explicit
    /// redirection operators (the filename word is still consumed).
    pub redirections: Vec<Redirection>,
}

/// An error encountered while parsing a word list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("missing redirection target")]
    MissingRedirectionTarget,
}

fn operator_kind(word: &[u8]) -> Option<RedirectionKind> {
    match word {
        b"<" => Some(RedirectionKind::In),
        b">" => Some(RedirectionKind::OutTruncate),
        b">>" => Some(RedirectionKind::OutAppend),
        _ => None,
    }
}

/// Parses an expanded word list into a [`Command`].
///
/// `&` is detected by exact textual equality anywhere in the list. Each `<`,
/// `>`, or `>>` word consumes the following word as its filename; if none
/// follows, parsing fails with [`ParseError::MissingRedirectionTarget`]. All
/// remaining words form `argv`, in order.
pub fn parse(words: Vec<Vec<u8>>) -> Result<Command, ParseError> {
    let background = words.iter().any(|w| w.as_slice() == b"&");

    let mut argv = Vec::new();
    let mut redirections = Vec::new();
    let mut iter = words.into_iter();

    while let Some(word) = iter.next() {
        if word == b"&" {
            continue;
        }
        if let Some(kind) = operator_kind(&word) {
            let path = iter.next().ok_or(ParseError::MissingRedirectionTarget)?;
            if !background {
                redirections.push(Redirection { kind, path });
            }
            continue;
        }
        argv.push(word);
    }

    Ok(Command { argv, background, redirections })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn words(strs: &[&str]) -> Vec<Vec<u8>> {
        strs.iter().map(|s| s.as_bytes().to_vec()).collect()
    }

    fn argv_strings(cmd: &Command) -> Vec<String> {
        cmd.argv
            .iter()
            .map(|w| String::from_utf8(w.clone()).unwrap())
            .collect()
    }

    #[test]
    fn plain_command_has_no_redirections_or_background() {
        let cmd = parse(words(&["echo", "hi"])).unwrap();
        assert_eq!(argv_strings(&cmd), vec!["echo", "hi"]);
        assert!(!cmd.background);
        assert!(cmd.redirections.is_empty());
    }

    #[test]
    fn redirections_are_parsed_and_removed_from_argv() {
        let cmd = parse(words(&["wc", "<", "in.txt", ">", "out.txt"])).unwrap();
        assert_eq!(argv_strings(&cmd), vec!["wc"]);
        assert!(!cmd.background);
        assert_eq!(cmd.redirections.len(), 2);
        assert_eq!(cmd.redirections[0].kind, RedirectionKind::In);
        assert_eq!(cmd.redirections[0].path, b"in.txt");
        assert_eq!(cmd.redirections[1].kind, RedirectionKind::OutTruncate);
        assert_eq!(cmd.redirections[1].path, b"out.txt");
    }

    #[test]
    fn append_operator_is_recognized() {
        let cmd = parse(words(&["cmd", ">>", "log"])).unwrap();
        assert_eq!(cmd.redirections[0].kind, RedirectionKind::OutAppend);
    }

    #[test]
    fn background_marker_sets_flag_and_is_excluded_from_argv() {
        let cmd = parse(words(&["sleep", "1", "&"])).unwrap();
        assert_eq!(argv_strings(&cmd), vec!["sleep", "1"]);
        assert!(cmd.background);
    }

    #[test]
    fn background_suppresses_redirections_but_still_consumes_filename() {
        let cmd = parse(words(&["cmd", ">", "out.txt", "&"])).unwrap();
        assert_eq!(argv_strings(&cmd), vec!["cmd"]);
        assert!(cmd.background);
        assert!(cmd.redirections.is_empty());
    }

    #[test]
    fn missing_redirection_target_is_an_error() {
        let result = parse(words(&["wc", "<"]));
        assert_matches!(result, Err(ParseError::MissingRedirectionTarget));
    }

    #[test]
    fn operators_never_end_up_in_argv() {
        let cmd = parse(words(&["a", "<", "b", ">", "c", ">>", "d", "&"])).unwrap();
        for w in &cmd.argv {
            assert_ne!(w.as_slice(), b"&");
            assert_ne!(w.as_slice(), b"<");
            assert_ne!(w.as_slice(), b">");
            assert_ne!(w.as_slice(), b">>");
        }
    }

    #[test]
    fn later_redirection_of_same_kind_is_recorded_after_earlier_one() {
        // The parser records both in order; overriding-by-reopen happens
        // when the launcher applies them, not here.
        let cmd = parse(words(&["cmd", ">", "a", ">", "b"])).unwrap();
        assert_eq!(cmd.redirections.len(), 2);
        assert_eq!(cmd.redirections[1].path, b"b");
    }
}
