//! Word segmentation
//!
//! The matcher treats segmentation as a pluggable collaborator: anything that
//! turns a normalized string into reading-order substrings implements
//! [`Segmenter`]. [`ScriptSegmenter`] is the default and handles mixed
//! English/Japanese text by splitting on script boundaries.

use crate::normalize::is_space;

/// Splits normalized text into tokens in reading order.
///
/// Implementations may return whitespace-only tokens; [`tokenize`] drops them.
pub trait Segmenter: Send + Sync {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str>;
}

impl<F> Segmenter for F
where
    F: for<'a> Fn(&'a str) -> Vec<&'a str> + Send + Sync,
{
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self(text)
    }
}

/// Segment `text` and keep only tokens holding a non-whitespace character
pub fn tokenize<S: Segmenter + ?Sized>(segmenter: &S, text: &str) -> Vec<String> {
    segmenter
        .segment(text)
        .into_iter()
        .filter(|token| token.chars().any(|c| !is_space(c)))
        .map(str::to_string)
        .collect()
}

/// Splits on Unicode whitespace only
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceSegmenter;

impl Segmenter for WhitespaceSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_whitespace().collect()
    }
}

/// Character-class segmenter for English and Japanese
///
/// Runs of the same class form one token: Latin words, hiragana, katakana
/// (with the prolonged sound mark), kanji (with the iteration mark) and
/// whitespace. Other symbols become single-character tokens. Case particles
/// are split off hiragana runs where they attach to a noun.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptSegmenter;

impl Segmenter for ScriptSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        ScriptLexer::new(text).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Space,
    Word,
    Hiragana,
    Katakana,
    Kanji,
    Symbol,
}

fn classify(c: char) -> CharClass {
    match c {
        _ if c.is_whitespace() => CharClass::Space,
        '\u{3041}'..='\u{309f}' => CharClass::Hiragana,
        // Katakana middle dot separates words rather than joining them
        '\u{30fb}' => CharClass::Symbol,
        '\u{30a0}'..='\u{30ff}' | '\u{31f0}'..='\u{31ff}' | '\u{ff66}'..='\u{ff9f}' => {
            CharClass::Katakana
        }
        '\u{3005}'
        | '\u{3006}'
        | '\u{3400}'..='\u{4dbf}'
        | '\u{4e00}'..='\u{9fff}'
        | '\u{f900}'..='\u{faff}' => CharClass::Kanji,
        _ if c.is_alphanumeric() || c == '_' => CharClass::Word,
        _ => CharClass::Symbol,
    }
}

#[inline]
fn is_particle(c: char) -> bool {
    // で is left out so です / でした stay whole
    matches!(c, 'は' | 'が' | 'を' | 'に' | 'へ' | 'と' | 'も' | 'の')
}

/// Zero-copy run lexer behind [`ScriptSegmenter`]
struct ScriptLexer<'a> {
    input: &'a str,
    position: usize,
    prev_class: Option<CharClass>,
    pending: Option<&'a str>,
}

impl<'a> ScriptLexer<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            position: 0,
            prev_class: None,
            pending: None,
        }
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn advance(&mut self, n: usize) {
        self.position += n;
    }

    fn read_run(&mut self, class: CharClass) -> &'a str {
        let start = self.position;
        while let Some(c) = self.peek_char() {
            if classify(c) != class {
                break;
            }
            self.advance(c.len_utf8());
        }
        &self.input[start..self.position]
    }

    /// Split particles off a hiragana run that was just read from `start`
    fn split_hiragana(&mut self, start: usize, run: &'a str) -> &'a str {
        let mut chars = run.chars();
        let first = chars.next();
        let has_more = chars.next().is_some();

        // Noun + particle: emit the particle and re-lex the tail on the next call
        if let Some(first) = first {
            if has_more
                && is_particle(first)
                && matches!(
                    self.prev_class,
                    Some(CharClass::Kanji) | Some(CharClass::Katakana)
                )
            {
                self.position = start + first.len_utf8();
                return &self.input[start..self.position];
            }
        }

        match run.chars().next_back() {
            Some(last) if has_more && is_particle(last) => {
                let split = run.len() - last.len_utf8();
                self.pending = Some(&run[split..]);
                &run[..split]
            }
            _ => run,
        }
    }
}

impl<'a> Iterator for ScriptLexer<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(pending) = self.pending.take() {
            return Some(pending);
        }

        let c = self.peek_char()?;
        let class = classify(c);
        let start = self.position;

        let token = match class {
            CharClass::Symbol => {
                self.advance(c.len_utf8());
                &self.input[start..self.position]
            }
            CharClass::Hiragana => {
                let run = self.read_run(class);
                self.split_hiragana(start, run)
            }
            _ => self.read_run(class),
        };

        self.prev_class = Some(class);
        Some(token)
    }
}
