use crate::constants::STATUS_OK;
use serde::{Deserialize, Deserializer, Serialize};

/// Decoded body of one team endpoint response.
///
/// Every field falls back to its empty value when missing or `null`, and
/// PascalCase keys are accepted next to the API's camelCase ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FetchEnvelope {
    #[serde(default, alias = "Status", deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, alias = "Data", deserialize_with = "null_as_default")]
    pub data: EnvelopeData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeData {
    #[serde(default, alias = "Team", deserialize_with = "null_as_default")]
    pub team: TeamRecord,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    #[serde(
        rename = "isNational",
        alias = "IsNational",
        default,
        deserialize_with = "null_as_default"
    )]
    pub is_national: bool,
    #[serde(default, alias = "Name", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, alias = "Players", deserialize_with = "null_as_default")]
    pub players: Vec<PlayerRecord>,
}

/// Player as delivered by the API. Name and age are opaque strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    #[serde(default, alias = "Name", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, alias = "Age", deserialize_with = "null_as_default")]
    pub age: String,
}

impl FetchEnvelope {
    /// True when the API flagged the response as usable.
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    pub fn team(&self) -> &TeamRecord {
        &self.data.team
    }
}

impl PlayerRecord {
    pub fn new(name: impl Into<String>, age: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_api_shape() {
        let body = r#"{
            "status": "ok",
            "code": 0,
            "data": {
                "team": {
                    "id": 4,
                    "optaId": 8,
                    "name": "Chelsea",
                    "isNational": false,
                    "players": [
                        {"id": "1", "name": "Petr Cech", "age": "34", "position": "Goalkeeper"},
                        {"id": "2", "name": "John Terry", "age": "35"}
                    ]
                }
            }
        }"#;

        let envelope: FetchEnvelope = serde_json::from_str(body).unwrap();
        assert!(envelope.is_ok());
        assert_eq!(envelope.team().name, "Chelsea");
        assert!(!envelope.team().is_national);
        assert_eq!(
            envelope.team().players,
            vec![
                PlayerRecord::new("Petr Cech", "34"),
                PlayerRecord::new("John Terry", "35"),
            ]
        );
    }

    #[test]
    fn test_decode_pascal_case_keys() {
        let body = r#"{"Status":"ok","Data":{"Team":{"IsNational":true,"Name":"Germany","Players":[{"Name":"A","Age":"20"}]}}}"#;

        let envelope: FetchEnvelope = serde_json::from_str(body).unwrap();
        assert!(envelope.team().is_national);
        assert_eq!(envelope.team().name, "Germany");
        assert_eq!(envelope.team().players, vec![PlayerRecord::new("A", "20")]);
    }

    #[test]
    fn test_missing_and_null_fields_default() {
        let envelope: FetchEnvelope = serde_json::from_str("{}").unwrap();
        assert_eq!(envelope, FetchEnvelope::default());
        assert!(!envelope.is_ok());

        let body = r#"{"status":"error","data":null}"#;
        let envelope: FetchEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.status, "error");
        assert!(envelope.team().players.is_empty());

        let body = r#"{"status":"ok","data":{"team":{"name":"Spain","players":[{"name":"X","age":null}]}}}"#;
        let envelope: FetchEnvelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.team().players[0].age, "");
    }

    #[test]
    fn test_non_string_age_is_a_decode_error() {
        let body = r#"{"status":"ok","data":{"team":{"name":"Spain","players":[{"name":"X","age":30}]}}}"#;
        assert!(serde_json::from_str::<FetchEnvelope>(body).is_err());
    }
}
