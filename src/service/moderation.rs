/// Case-insensitive substring filter for message content.
pub struct WordFilter<'a> {
    /// Lowercase banned words.
    banned_words: &'a [String],
}

impl<'a> WordFilter<'a> {
    /// Creates a filter over words that are already lowercase, as loaded by `Config`.
    pub fn new(banned_words: &'a [String]) -> Self {
        Self { banned_words }
    }

    /// Gets the first banned word contained anywhere in the content, if any.
    ///
    /// Matching is by substring, so a banned word inside a longer word also matches.
    pub fn find_banned_word(&self, content: &str) -> Option<&'a str> {
        let content = content.to_lowercase();

        self.banned_words
            .iter()
            .find(|word| content.contains(word.as_str()))
            .map(String::as_str)
    }
}
