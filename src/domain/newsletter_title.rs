use std::convert::TryFrom;

use unicode_segmentation::UnicodeSegmentation;

use crate::domain::errors::MalformedInput;

const FORBIDDEN_CHARS: [char; 9] = ['/', '(', ')', '"', '<', '>', '\\', '{', '}'];
const MAX_LENGTH: usize = 256;

#[derive(Clone, Debug)]
pub struct NewsletterTitle(String);

impl TryFrom<String> for NewsletterTitle {
    type Error = MalformedInput;

    fn try_from(title: String) -> Result<Self, Self::Error> {
        let is_empty_or_whitespace = title.trim().is_empty();
        let is_too_long = title.graphemes(true).count() > MAX_LENGTH;
        let contains_forbidden_characters = title.chars().any(|c| FORBIDDEN_CHARS.contains(&c));

        if is_empty_or_whitespace || is_too_long || contains_forbidden_characters {
            Err(MalformedInput::InvalidTitle {
                message: format!("invalid newsletter title: {}", title),
            })
        } else {
            Ok(Self(title))
        }
    }
}

impl AsRef<str> for NewsletterTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
