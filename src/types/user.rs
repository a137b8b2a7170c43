use crate::{prelude::*, types::Extra};

/// This object represents a Telegram user or bot.
///
/// See also: <https://core.telegram.org/bots/api#user>.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[must_use]
pub struct User {
    pub id: i64,

    #[serde(default)]
    pub is_bot: bool,

    pub first_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,

    #[serde(flatten)]
    pub extra: Extra,
}

impl User {
    #[must_use]
    pub fn full_name(&self) -> String {
        match &self.last_name {
            Some(last_name) => format!("{} {last_name}", self.first_name),
            None => self.first_name.clone(),
        }
    }
}

/// This object represent a user's profile pictures.
///
/// See also: <https://core.telegram.org/bots/api#userprofilephotos>.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[must_use]
pub struct UserProfilePhotos {
    pub total_count: u32,

    /// Requested profile pictures, in up to 4 sizes each.
    #[serde(default)]
    pub photos: Vec<Vec<crate::types::PhotoSize>>,

    #[serde(flatten)]
    pub extra: Extra,
}

#[cfg(test)]
mod tests {
    use crate::testing::Result;

    use super::*;

    #[test]
    fn full_name_ok() -> Result {
        // language=json
        let user: User =
            serde_json::from_str(r#"{"id": 1, "first_name": "Ada", "last_name": "Lovelace"}"#)?;
        assert_eq!(user.full_name(), "Ada Lovelace");
        assert!(!user.is_bot);
        Ok(())
    }
}
