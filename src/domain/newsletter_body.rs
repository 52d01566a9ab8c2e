use std::convert::TryFrom;

use crate::domain::errors::MalformedInput;

#[derive(Clone, Debug)]
pub struct NewsletterBody(String);

impl TryFrom<String> for NewsletterBody {
    type Error = MalformedInput;

    fn try_from(body: String) -> Result<Self, Self::Error> {
        if body.trim().is_empty() {
            Err(MalformedInput::InvalidBody {
                message: "the newsletter body cannot be empty".to_string(),
            })
        } else {
            Ok(Self(body))
        }
    }
}

impl AsRef<str> for NewsletterBody {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
