use once_cell::sync::Lazy;
use regex::Regex;

static MARKUP_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));
static NAMED_ENTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&[a-z]+;").expect("valid entity regex"));
static WORD_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[가-힣a-z0-9]+").expect("valid word regex"));

/// A character filter receives the original text and can transform it by adding,
/// removing, or changing characters. Search results arrive with `<b>` highlight tags
/// and `&quot;` style entities, both of which are stripped by filters before tokenizing.
pub trait CharacterFilter: Send + Sync {
    fn filter(&self, text: String) -> String;
}

/// Removes everything matching `<...>`.
#[derive(Debug, Default)]
pub struct MarkupTagFilter;

impl CharacterFilter for MarkupTagFilter {
    fn filter(&self, text: String) -> String {
        MARKUP_TAG.replace_all(&text, "").into_owned()
    }
}

/// Removes named entities like `&amp;`. Only lower-case names match, so it runs before
/// case folding.
#[derive(Debug, Default)]
pub struct EntityFilter;

impl CharacterFilter for EntityFilter {
    fn filter(&self, text: String) -> String {
        NAMED_ENTITY.replace_all(&text, "").into_owned()
    }
}

#[derive(Debug, Default)]
pub struct LowerCaseFilter;

impl CharacterFilter for LowerCaseFilter {
    fn filter(&self, text: String) -> String {
        text.to_lowercase()
    }
}

/// A tokenizer receives a stream of characters, breaks it up into individual tokens
/// and outputs a stream of tokens.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: String) -> Vec<String>;
}

/// Emits every maximal run of Hangul syllables, lower-case Latin letters and digits.
/// Anything else (upper case included) acts as a separator.
#[derive(Debug, Default)]
pub struct CharClassTokenizer;

impl Tokenizer for CharClassTokenizer {
    fn tokenize(&self, text: String) -> Vec<String> {
        WORD_CHARS
            .find_iter(&text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// A token filter receives the token stream and may add, remove, or change tokens.
pub trait TokenFilter: Send + Sync {
    fn filter(&self, tokens: Vec<TextToken>) -> Vec<TextToken>;
}

/// Keeps tokens whose character count lies strictly between `min_exclusive` and
/// `max_exclusive`.
pub struct LengthTokenFilter {
    min_exclusive: usize,
    max_exclusive: usize,
}

impl LengthTokenFilter {
    pub fn new(min_exclusive: usize, max_exclusive: usize) -> Self {
        Self {
            min_exclusive,
            max_exclusive,
        }
    }
}

impl Default for LengthTokenFilter {
    fn default() -> Self {
        Self::new(1, 20)
    }
}

impl TokenFilter for LengthTokenFilter {
    fn filter(&self, mut tokens: Vec<TextToken>) -> Vec<TextToken> {
        tokens.retain(|t| {
            let len = t.term.chars().count();
            len > self.min_exclusive && len < self.max_exclusive
        });
        tokens
    }
}

/// Drops leftovers of links such as `https` or `blogshttp`.
pub struct UrlFragmentTokenFilter;

impl TokenFilter for UrlFragmentTokenFilter {
    fn filter(&self, mut tokens: Vec<TextToken>) -> Vec<TextToken> {
        tokens.retain(|t| !t.term.contains("http"));
        tokens
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextToken {
    pub term: String,
    pub pos: usize,
}

impl std::ops::Deref for TextToken {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.term
    }
}

/// Pure text analysis pipeline - no async, no IO, just text transformations
pub struct TextAnalyzer {
    char_filters: Vec<Box<dyn CharacterFilter>>,
    tokenizer: Box<dyn Tokenizer>,
    token_filters: Vec<Box<dyn TokenFilter>>,
}

impl Default for TextAnalyzer {
    /// Markup stripping, case folding, character-class tokens, length and URL guards.
    fn default() -> Self {
        Self::new(
            vec![
                Box::new(MarkupTagFilter),
                Box::new(EntityFilter),
                Box::new(LowerCaseFilter),
            ],
            Box::new(CharClassTokenizer),
            vec![
                Box::new(LengthTokenFilter::default()),
                Box::new(UrlFragmentTokenFilter),
            ],
        )
    }
}

impl TextAnalyzer {
    pub fn new(
        char_filters: Vec<Box<dyn CharacterFilter>>,
        tokenizer: Box<dyn Tokenizer>,
        token_filters: Vec<Box<dyn TokenFilter>>,
    ) -> Self {
        Self {
            char_filters,
            tokenizer,
            token_filters,
        }
    }

    pub fn char_filter(&self, mut content: String) -> String {
        for filter in self.char_filters.iter() {
            content = filter.filter(content);
        }
        content
    }

    pub fn tokenize(&self, content: String) -> Vec<TextToken> {
        self.tokenizer
            .tokenize(content)
            .into_iter()
            .enumerate()
            .map(|(pos, term)| TextToken { term, pos })
            .collect()
    }

    pub fn token_filter(&self, mut tokens: Vec<TextToken>) -> Vec<TextToken> {
        for filter in self.token_filters.iter() {
            tokens = filter.filter(tokens);
        }
        tokens
    }

    /// Analyzes raw content and returns the surviving tokens, duplicates included.
    pub fn analyze(&self, raw_content: String) -> Vec<TextToken> {
        let content = self.char_filter(raw_content);
        let tokens = self.tokenize(content);
        self.token_filter(tokens)
    }

    pub fn terms(&self, raw_content: String) -> Vec<String> {
        self.analyze(raw_content)
            .into_iter()
            .map(|t| t.term)
            .collect()
    }
}
