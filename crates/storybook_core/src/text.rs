//! Text shaping between the story model and the image model.

use crate::Paragraph;

/// Word budget for image prompts.
///
/// Whitespace-separated words approximate the image model's token limit;
/// the bound is not tokenizer-exact.
pub const DEFAULT_MAX_WORDS: usize = 75;

/// Most pages a storybook can hold.
pub const MAX_PAGES: usize = 5;

/// Boundary between paragraphs in generated text.
pub const PARAGRAPH_DELIMITER: &str = ". ";

/// Keep the first `max_words` whitespace-separated words, joined by single spaces.
///
/// # Examples
///
/// ```
/// use storybook_core::truncate_words;
///
/// assert_eq!(truncate_words("one  two\tthree\nfour", 3), "one two three");
/// assert_eq!(truncate_words("", 75), "");
/// ```
pub fn truncate_words(text: &str, max_words: usize) -> String {
    text.split_whitespace()
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a story into at most [`MAX_PAGES`] paragraphs on `". "`.
///
/// Segments are returned untrimmed, and empty segments produced by leading,
/// trailing, or consecutive delimiters are kept in place. A story without
/// the delimiter is one paragraph.
///
/// # Examples
///
/// ```
/// use storybook_core::split_paragraphs;
///
/// let paragraphs = split_paragraphs("Once upon a time. The end.");
/// assert_eq!(paragraphs.len(), 2);
/// assert_eq!(paragraphs[0].text(), "Once upon a time");
/// assert_eq!(paragraphs[1].text(), "The end.");
/// ```
pub fn split_paragraphs(story: &str) -> Vec<Paragraph> {
    story
        .split(PARAGRAPH_DELIMITER)
        .take(MAX_PAGES)
        .enumerate()
        .map(|(index, text)| Paragraph::new(index, text))
        .collect()
}
