//! Command Tokenizer
//!
//! Splits raw command text into a fixed number of positional tokens plus one
//! free-text remainder. There is no error path here: missing positions come
//! back as empty strings and downstream validation rejects them. The
//! remainder keeps its internal spacing (collapsed to single spaces) so
//! commands whose last argument is free text survive intact.

/// Split `text` into exactly `arity` arguments, dropping the leading command
/// name. The first `arity - 1` entries are single whitespace-delimited
/// tokens; the last is the rest of the text re-joined with single spaces.
pub fn split_arguments(text: &str, arity: usize) -> Vec<String> {
    if arity == 0 {
        return Vec::new();
    }

    // split_whitespace collapses runs; skip(1) drops the command itself.
    let mut words = text.split_whitespace().skip(1);

    let mut args: Vec<String> = Vec::with_capacity(arity);
    for _ in 0..arity - 1 {
        args.push(words.next().unwrap_or_default().to_string());
    }
    args.push(words.collect::<Vec<_>>().join(" "));
    args
}

/// The non-empty leading arguments, for arity-based dispatch. Trailing empty
/// slots (unfilled positions) are dropped; an interior empty never occurs by
/// construction.
pub fn present_arguments(args: &[String]) -> &[String] {
    let end = args.iter().rposition(|a| !a.is_empty()).map_or(0, |i| i + 1);
    &args[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_exactly_arity_entries() {
        for arity in 1..=4 {
            let args = split_arguments("/ranked na Some Name", arity);
            assert_eq!(args.len(), arity);
        }
    }

    #[test]
    fn test_missing_positions_are_empty_strings() {
        assert_eq!(split_arguments("/ranked", 2), vec!["", ""]);
        assert_eq!(split_arguments("/ranked Wakafa", 2), vec!["Wakafa", ""]);
    }

    #[test]
    fn test_tail_preserves_free_text() {
        let args = split_arguments("/game  come   play  now", 1);
        assert_eq!(args, vec!["come play now"]);

        let args = split_arguments("/build mid master yi", 2);
        assert_eq!(args, vec!["mid", "master yi"]);
    }

    #[test]
    fn test_rejoining_reproduces_argument_portion() {
        let raw = "/build   mid   master   yi";
        let args = split_arguments(raw, 2);
        let rejoined = args.join(" ");
        let collapsed: Vec<&str> = raw.split_whitespace().skip(1).collect();
        assert_eq!(rejoined, collapsed.join(" "));
    }

    #[test]
    fn test_present_arguments_drops_trailing_empties() {
        let args = split_arguments("/ranked", 2);
        assert!(present_arguments(&args).is_empty());

        let args = split_arguments("/ranked Wakafa", 2);
        assert_eq!(present_arguments(&args), ["Wakafa".to_string()]);

        let args = split_arguments("/ranked na Wakafa", 2);
        assert_eq!(present_arguments(&args).len(), 2);
    }
}
