//! Response scoring command

use crate::core::{Response, Word, WordError};

/// A guess, an answer and the response between them
pub struct ScoreResult {
    pub guess: Word,
    pub answer: Word,
    pub response: Response,
}

/// Compute the response `answer` gives to `guess`
///
/// # Errors
///
/// Returns `WordError` if either word is malformed.
pub fn score_words(guess: &str, answer: &str) -> Result<ScoreResult, WordError> {
    let guess = Word::new(guess)?;
    let answer = Word::new(answer)?;

    Ok(ScoreResult {
        guess,
        answer,
        response: Response::compute(guess, answer),
    })
}
