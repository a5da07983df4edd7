use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u32,
    pub user_id: u32,
    pub title: String,
    pub body: String,
}

impl Post {
    const ELLIPSIS: char = '…';

    pub fn is_by(&self, user_id: u32) -> bool {
        self.user_id == user_id
    }

    /// Body cut to at most `max_chars` characters, with a trailing ellipsis
    /// when anything was dropped.
    pub fn excerpt(&self, max_chars: usize) -> String {
        match self.body.char_indices().nth(max_chars) {
            Some((idx, _)) => {
                let mut out = self.body[..idx].trim_end().to_string();
                out.push(Self::ELLIPSIS);
                out
            }
            None => self.body.clone(),
        }
    }
}
