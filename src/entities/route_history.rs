use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An append-only log entry of one computed route query. `created_at` is
/// set at insertion and never changes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteHistory {
    pub id: i32,
    pub start: String,
    pub end: String,
    pub mode: TravelMode,
    #[serde(with = "history_timestamp")]
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Driving,
    Walking,
    Bicycling,
    Transit,
}

impl TravelMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Walking => "walking",
            Self::Bicycling => "bicycling",
            Self::Transit => "transit",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "driving" => Some(Self::Driving),
            "walking" => Some(Self::Walking),
            "bicycling" => Some(Self::Bicycling),
            "transit" => Some(Self::Transit),
            _ => None,
        }
    }
}

impl Default for TravelMode {
    fn default() -> Self {
        Self::Driving
    }
}

mod history_timestamp {
    use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M";

    pub fn serialize<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&timestamp.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        let naive =
            NaiveDateTime::parse_from_str(&value, FORMAT).map_err(serde::de::Error::custom)?;

        Ok(Utc.from_utc_datetime(&naive))
    }
}
