use nice_utils_core::text;

use crate::cli::text::TextAction;

pub fn execute(action: &TextAction) -> String {
    match action {
        TextAction::Truncate { input, length } => text::truncate(input, *length),
        TextAction::ReplaceAll {
            input,
            find,
            replace,
        } => text::replace_all(input, find, replace),
        TextAction::ReplaceBulk { input, pairs } => {
            let pairs: Vec<(&str, &str)> = pairs
                .iter()
                .map(|(find, replace)| (find.as_str(), replace.as_str()))
                .collect();
            text::replace_bulk(input, &pairs)
        }
        TextAction::Rtrim { input, search } => text::rtrim(input, search),
        TextAction::StripTags { input, allowed } => text::strip_tags(input, allowed),
        TextAction::Escape { input } => text::html_escape(input),
        TextAction::Unescape { input } => text::html_unescape(input),
        TextAction::OnlyNumbers { input, decimal } => text::only_numbers(input, *decimal),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn run(args: &[&str]) -> String {
        let cli = Cli::try_parse_from(
            ["nice-utils", "text"].into_iter().chain(args.iter().copied()),
        )
        .unwrap();
        match cli.command {
            Commands::Text(command) => execute(&command.action),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn truncate_with_length() {
        assert_eq!(run(&["truncate", "abcdef", "--length", "3"]), "abc...");
    }

    #[test]
    fn replace_bulk_pairs() {
        assert_eq!(
            run(&["replace-bulk", "cat and dog", "-p", "cat=dog", "-p", "dog=cat"]),
            "dog and cat"
        );
    }

    #[test]
    fn replace_bulk_rejects_malformed_pair() {
        let parsed = Cli::try_parse_from(["nice-utils", "text", "replace-bulk", "x", "-p", "nope"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn strip_tags_with_allowed() {
        assert_eq!(
            run(&["strip-tags", "<p><b>hi</b></p>", "--allowed", "<b>"]),
            "<b>hi</b>"
        );
    }

    #[test]
    fn only_numbers_with_decimal() {
        assert_eq!(run(&["only-numbers", "$1,050.25", "--decimal"]), "1050.25");
        assert_eq!(run(&["only-numbers", "a1b0"]), "10");
    }
}
