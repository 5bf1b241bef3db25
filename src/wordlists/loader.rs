//! Word list loading utilities
//!
//! Word list files hold one word per line. Case is normalized and blank lines
//! are ignored; any other malformed line aborts the load.

use super::lexicon::{Lexicon, LexiconError};
use crate::core::Word;
use std::fs;
use std::path::Path;

/// Load the answer list and the extra guess list into a lexicon
///
/// # Errors
///
/// Returns `LexiconError::Io` if either file cannot be read and
/// `LexiconError::Load` for the first malformed line.
///
/// # Examples
/// ```no_run
/// use wordle_tree::wordlists::load;
///
/// let lexicon = load("data/answers.txt", "data/allowed.txt").unwrap();
/// println!("Loaded {} answers", lexicon.answers().len());
/// ```
pub fn load<P, Q>(answers_path: P, extra_guesses_path: Q) -> Result<Lexicon, LexiconError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let answers = load_from_file(answers_path)?;
    let extra = load_from_file(extra_guesses_path)?;
    Ok(Lexicon::new(answers, extra))
}

/// Load and validate every word in a file
///
/// # Errors
///
/// Returns `LexiconError::Io` if the file cannot be read and
/// `LexiconError::Load` identifying the first malformed line.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LexiconError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LexiconError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_words(&content, &path.display().to_string())
}

/// Parse one-word-per-line text; `origin` names the source in errors
///
/// # Errors
///
/// Returns `LexiconError::Load` with the 1-based line number of the first
/// malformed word.
///
/// # Examples
/// ```
/// use wordle_tree::wordlists::loader::parse_words;
///
/// let words = parse_words("Crane\n\nslate\n", "inline").unwrap();
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].as_str(), "crane");
/// ```
pub fn parse_words(content: &str, origin: &str) -> Result<Vec<Word>, LexiconError> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            Word::new(line.trim()).map_err(|error| LexiconError::Load {
                origin: origin.to_string(),
                line: i + 1,
                error,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordError;
    use std::io::Write;

    fn temp_file(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "wordle_tree_{}_{name}.txt",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn parse_words_normalizes_and_skips_blank_lines() {
        let words = parse_words("ABACK\n  abase  \n\n\nabate\n", "test").unwrap();
        let texts: Vec<&str> = words.iter().map(Word::as_str).collect();
        assert_eq!(texts, ["aback", "abase", "abate"]);
    }

    #[test]
    fn parse_words_reports_offending_line() {
        let err = parse_words("aback\n\nabasement\n", "test").unwrap_err();
        assert!(matches!(
            err,
            LexiconError::Load { line: 3, error: WordError::InvalidLength(9), .. }
        ));
        assert_eq!(
            err.to_string(),
            "test:3: word must be exactly 5 letters, got 9"
        );
    }

    #[test]
    fn parse_words_empty() {
        assert!(parse_words("", "test").unwrap().is_empty());
    }

    #[test]
    fn load_builds_lexicon_from_files() {
        let answers = temp_file("answers", "abbey\naback\nabate\nabase\n");
        let extra = temp_file("extra", "zesty\nAbbey\n");

        let lexicon = load(&answers, &extra).unwrap();
        assert_eq!(lexicon.answers().len(), 4);
        assert_eq!(lexicon.guesses().len(), 5);
        assert_eq!(lexicon.guesses().index_of("zesty").unwrap(), 4);

        fs::remove_file(answers).unwrap();
        fs::remove_file(extra).unwrap();
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = load_from_file("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, LexiconError::Io { .. }));
    }
}
