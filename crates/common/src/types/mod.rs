use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Payload of `GET /health`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Health {
    pub status: String,
    pub service: String,
    #[serde(flatten)]
    pub count: HealthCount,
}

/// Each service reports its record count under its own key.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthCount {
    #[serde(rename = "recordCount")]
    Records(usize),
    #[serde(rename = "studentCount")]
    Students(usize),
}

impl Health {
    pub fn up(service: &str, count: HealthCount) -> Self {
        Self { status: "UP".into(), service: service.into(), count }
    }
}

/// Payload of `GET /`: service name, version and an endpoint map.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ServiceDescriptor {
    pub service: String,
    pub version: String,
    pub endpoints: EndpointMap,
}

impl ServiceDescriptor {
    pub fn new(service: &str, version: &str, endpoints: &[(&str, &str)]) -> Self {
        Self {
            service: service.into(),
            version: version.into(),
            endpoints: EndpointMap(
                endpoints
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ),
        }
    }
}

/// Name -> path pairs, serialized as a JSON object in the order they were declared.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointMap(pub Vec<(String, String)>);

impl Serialize for EndpointMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, path) in &self.0 {
            map.serialize_entry(name, path)?;
        }
        map.end()
    }
}

/// Success envelope shared by every data endpoint.
///
/// Fields that a given endpoint does not use are left out of the JSON.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { success: true, count: None, message: None, data, note: None }
    }

    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self { message: Some(message.into()), ..Self::ok(data) }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

impl<T> ApiResponse<Vec<T>> {
    pub fn list(data: Vec<T>) -> Self {
        Self { count: Some(data.len()), ..Self::ok(data) }
    }
}

/// Failure envelope: `{"success": false, "error": "..."}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { success: false, error: error.into() }
    }
}
