use serde::{Deserialize, Serialize};

/// Keyword list offered on the main menu
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordList {
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl KeywordList {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

/// Generated quiz paragraph.
///
/// `right_text` and `wrong_text` are parallel sentence lists: `wrong_text[i]`
/// is a falsified rewrite of `right_text[i]`. Every field defaults to empty so
/// a partial LLM answer still deserializes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub story_idea: String,
    #[serde(default)]
    pub right_text: Vec<String>,
    #[serde(default)]
    pub wrong_text: Vec<String>,
}

impl Problem {
    pub fn is_empty(&self) -> bool {
        self.right_text.is_empty() && self.wrong_text.is_empty()
    }
}
