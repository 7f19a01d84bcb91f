use crate::error::ComposeError;
use crate::generator::{Composer, DepthBounds, DEFAULT_MAX_LEVEL, DEFAULT_MIN_LEVEL};
use crate::wordlist::MIN_WORDS;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinSet(pub Vec<String>);

fn parse_join_chars(value: &str) -> Result<JoinSet, String> {
    Ok(JoinSet(value.split(',').map(str::to_string).collect()))
}

#[derive(Parser, Debug)]
#[command(
    name = "pwcompose",
    version,
    author,
    about = "Candidate password generator combining words from word lists"
)]
pub struct Cli {
    /// Minimum number of concatenated words
    #[arg(short = 'm', long = "minLevel", value_name = "INT", default_value_t = DEFAULT_MIN_LEVEL)]
    pub min_level: usize,

    /// Maximum number of concatenated words
    #[arg(short = 'M', long = "maxLevel", value_name = "INT", default_value_t = DEFAULT_MAX_LEVEL)]
    pub max_level: usize,

    /// Comma separated strings to use for concatenations
    #[arg(
        short = 'j',
        long = "joinChars",
        value_name = "STRINGS",
        value_parser = parse_join_chars,
        allow_hyphen_values = true,
        default_value = ",_,-, "
    )]
    pub join_chars: JoinSet,

    /// Allow a word to be concatenated more than once
    #[arg(short = 'D', long = "allowDoubles")]
    pub allow_doubles: bool,

    /// Show a spinner with the number of candidates written on stderr
    #[arg(short = 'P', long)]
    pub progress: bool,

    /// Do not report unreadable word lists
    #[arg(short, long)]
    pub quiet: bool,

    /// Word list files, one word per line
    #[arg(value_name = "WORDLIST", required = true)]
    pub wordlists: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bounds: DepthBounds,
    pub joins: Vec<String>,
    pub allow_doubles: bool,
}

impl Cli {
    /// Levels are taken as given: `min_level` is carried along but never
    /// checked, and a `max_level` of 0 simply yields no candidates.
    pub fn settings(&self) -> Settings {
        Settings {
            bounds: DepthBounds {
                min_level: self.min_level,
                max_level: self.max_level,
            },
            joins: self.join_chars.0.clone(),
            allow_doubles: self.allow_doubles,
        }
    }
}

impl Settings {
    /// Caps `max_level` at the number of available words.
    pub fn clamp_to(&mut self, word_count: usize) {
        if word_count < self.bounds.max_level {
            self.bounds.max_level = word_count;
        }
    }

    pub fn into_composer(mut self, words: Vec<String>) -> Result<Composer, ComposeError> {
        if words.len() < MIN_WORDS {
            return Err(ComposeError::NotEnoughWords { found: words.len() });
        }

        self.clamp_to(words.len());
        Ok(Composer::new(
            words,
            self.joins,
            self.bounds,
            self.allow_doubles,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pwcompose").chain(args.iter().copied())).unwrap()
    }

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["words.txt"]);
        let settings = cli.settings();

        assert_eq!(settings.bounds, DepthBounds { min_level: 1, max_level: 3 });
        assert_eq!(settings.joins, vec!["", "_", "-", " "]);
        assert!(!settings.allow_doubles);
        assert!(!cli.progress);
        assert!(!cli.quiet);
        assert_eq!(cli.wordlists, vec![PathBuf::from("words.txt")]);
    }

    #[test]
    fn test_short_and_long_flags() {
        let short = parse(&["-m", "2", "-M", "4", "-j", ".,+", "-D", "a.txt", "b.txt"]);
        let long = parse(&[
            "--minLevel",
            "2",
            "--maxLevel",
            "4",
            "--joinChars",
            ".,+",
            "--allowDoubles",
            "a.txt",
            "b.txt",
        ]);

        for cli in [short, long] {
            let settings = cli.settings();
            assert_eq!(settings.bounds, DepthBounds { min_level: 2, max_level: 4 });
            assert_eq!(settings.joins, vec![".", "+"]);
            assert!(settings.allow_doubles);
            assert_eq!(
                cli.wordlists,
                vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]
            );
        }
    }

    #[test]
    fn test_join_chars_split_keeps_empty_entries() {
        let cli = parse(&["-j", ",-", "w.txt"]);
        assert_eq!(cli.join_chars.0, vec!["", "-"]);

        let cli = parse(&["-j", "-", "w.txt"]);
        assert_eq!(cli.join_chars.0, vec!["-"]);

        let cli = parse(&["-j", "", "w.txt"]);
        assert_eq!(cli.join_chars.0, vec![""]);
    }

    #[test]
    fn test_missing_wordlist_is_an_error() {
        let err = Cli::try_parse_from(["pwcompose", "-M", "2"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_non_numeric_level_is_an_error() {
        let err = Cli::try_parse_from(["pwcompose", "-M", "lots", "w.txt"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_unknown_option_is_an_error() {
        let err = Cli::try_parse_from(["pwcompose", "--debug", "w.txt"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_help_exits_zero() {
        let err = Cli::try_parse_from(["pwcompose", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn test_min_level_above_max_level_still_generates() {
        let cli = parse(&["-m", "5", "-j", "-", "w.txt"]);
        let settings = cli.settings();
        assert_eq!(settings.bounds, DepthBounds { min_level: 5, max_level: 3 });

        let composer = settings.into_composer(words(&["a", "b"])).unwrap();
        let output: Vec<String> = composer.candidates().collect();
        assert_eq!(output, vec!["a", "a-b", "b", "b-a"]);
    }

    #[test]
    fn test_zero_levels_generate_nothing() {
        let cli = parse(&["-m", "0", "-M", "0", "w.txt"]);
        let composer = cli.settings().into_composer(words(&["a", "b"])).unwrap();
        assert_eq!(composer.candidates().count(), 0);
    }

    #[test]
    fn test_max_level_clamped_to_word_count() {
        let mut settings = parse(&["-M", "5", "w.txt"]).settings();
        settings.clamp_to(2);
        assert_eq!(settings.bounds, DepthBounds { min_level: 1, max_level: 2 });
    }

    #[test]
    fn test_max_level_below_word_count_untouched() {
        let mut settings = parse(&["-M", "2", "w.txt"]).settings();
        settings.clamp_to(4);
        assert_eq!(settings.bounds.max_level, 2);
    }

    #[test]
    fn test_not_enough_words() {
        let cli = parse(&["w.txt"]);
        let err = cli.settings().into_composer(words(&["only"])).unwrap_err();
        assert!(
            matches!(err, ComposeError::NotEnoughWords { found: 1 }),
            "Unexpected error: {:?}",
            err
        );

        let err = cli.settings().into_composer(Vec::new()).unwrap_err();
        assert!(matches!(err, ComposeError::NotEnoughWords { found: 0 }));
    }

    #[test]
    fn test_clamped_output() {
        let cli = parse(&["-M", "5", "-j", "-", "w.txt"]);
        let composer = cli.settings().into_composer(words(&["a", "b"])).unwrap();

        let output: Vec<String> = composer.candidates().collect();
        assert_eq!(output, vec!["a", "a-b", "b", "b-a"]);
    }
}
