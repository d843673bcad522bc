//! Daily mood tracking endpoints

use crate::auth::AuthGateway;
use crate::error::{Error, Result};
use crate::http::RequestConfig;
use reqwest::Method;

/// Daily mood on a five-step scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    VerySad,
    Sad,
    Neutral,
    Happy,
    VeryHappy,
}

impl Mood {
    /// Numeric wire value (1 to 5)
    pub fn value(self) -> u8 {
        match self {
            Self::VerySad => 1,
            Self::Sad => 2,
            Self::Neutral => 3,
            Self::Happy => 4,
            Self::VeryHappy => 5,
        }
    }

    /// Parse the wire value
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::VerySad),
            2 => Some(Self::Sad),
            3 => Some(Self::Neutral),
            4 => Some(Self::Happy),
            5 => Some(Self::VeryHappy),
            _ => None,
        }
    }

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Self::VerySad => "Very Sad",
            Self::Sad => "Sad",
            Self::Neutral => "Neutral",
            Self::Happy => "Happy",
            Self::VeryHappy => "Very Happy",
        }
    }
}

/// Mood tracking endpoints
pub struct WellbeingApi<'a> {
    gateway: &'a AuthGateway,
}

impl<'a> WellbeingApi<'a> {
    pub fn new(gateway: &'a AuthGateway) -> Self {
        Self { gateway }
    }

    /// The mood the user recorded today, if any
    pub async fn today_mood(&self, user_id: &str) -> Result<Option<Mood>> {
        let value: Option<u8> = self
            .gateway
            .send_json(
                Method::GET,
                "/wellbeing/mood",
                RequestConfig::new().query("userId", user_id),
            )
            .await?;
        match value {
            Some(v) => Mood::from_value(v)
                .map(Some)
                .ok_or_else(|| Error::Other(format!("server returned unknown mood value {v}"))),
            None => Ok(None),
        }
    }

    /// Record today's mood
    pub async fn submit_mood(&self, user_id: &str, mood: Mood) -> Result<()> {
        let body = serde_json::json!({ "userId": user_id, "mood": mood.value() });
        self.gateway
            .send(
                Method::POST,
                "/wellbeing/mood-submit",
                RequestConfig::new().json(body),
            )
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod mood_tests {
    use super::*;
    use test_case::test_case;

    #[test_case(1, Some(Mood::VerySad))]
    #[test_case(3, Some(Mood::Neutral))]
    #[test_case(5, Some(Mood::VeryHappy))]
    #[test_case(0, None)]
    #[test_case(6, None)]
    fn test_mood_from_value(value: u8, expected: Option<Mood>) {
        assert_eq!(Mood::from_value(value), expected);
    }

    #[test]
    fn test_mood_roundtrip() {
        for mood in [
            Mood::VerySad,
            Mood::Sad,
            Mood::Neutral,
            Mood::Happy,
            Mood::VeryHappy,
        ] {
            assert_eq!(Mood::from_value(mood.value()), Some(mood));
        }
    }
}
