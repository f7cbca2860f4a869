use serde::{Deserialize, Serialize};

/// Body of `POST /api/Auth/login`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub token: String,
}

/// Error body the API sends alongside 4xx/5xx responses
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ErrorBody {
    #[serde(default, alias = "Message")]
    pub message: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        self.message
            .or(self.title)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_wins_over_title() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"message":"Wrong password","title":"Unauthorized"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("Wrong password"));
    }

    #[test]
    fn problem_details_title_is_used_when_no_message() {
        let body: ErrorBody = serde_json::from_str(r#"{"title":"Unauthorized","status":401}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("Unauthorized"));
    }

    #[test]
    fn blank_message_is_ignored() {
        let body: ErrorBody = serde_json::from_str(r#"{"message":"  "}"#).unwrap();
        assert_eq!(body.into_message(), None);
    }
}
