use crate::Result as CoreErrorResult;

use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::io::Read;

use serde::{Deserialize, Deserializer, Serialize};

/// Request body for adding an employee to a project.
///
/// Carries the four values submitted by the web layer. Nothing here is
/// validated: unset identifiers, empty roles and out-of-range percentages
/// are all accepted and left to the consumer.
///
/// The legacy field names `matricule`, `codeProjet` and `pourcentage` are
/// still accepted when decoding.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParticipationRequest {
    /// Employee being assigned
    #[serde(alias = "matricule")]
    pub employee_id: Option<i32>,

    /// Project the employee joins
    #[serde(alias = "codeProjet")]
    pub project_id: Option<i32>,

    /// Free-form role label, e.g. "developer"
    pub role: Option<String>,

    /// Share of the employee's time on the project
    #[serde(alias = "pourcentage", deserialize_with = "null_as_zero")]
    pub percentage: f32,
}

impl ParticipationRequest {
    pub fn new(
        employee_id: Option<i32>,
        project_id: Option<i32>,
        role: Option<String>,
        percentage: f32,
    ) -> Self {
        Self {
            employee_id,
            project_id,
            role,
            percentage,
        }
    }

    /// Decode a request body
    #[track_caller]
    pub fn from_json(json: &str) -> CoreErrorResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a request body from any byte source (file, stdin, socket)
    #[track_caller]
    pub fn from_reader<R: Read>(reader: R) -> CoreErrorResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    #[track_caller]
    pub fn to_json(&self) -> CoreErrorResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    #[track_caller]
    pub fn to_json_pretty(&self) -> CoreErrorResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Hash of the field values; equal requests give equal hashes
    /// within one build of the program.
    pub fn content_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }

    // All NaNs collapse to one pattern so that Eq and Hash stay lawful.
    fn percentage_bits(&self) -> u32 {
        if self.percentage.is_nan() {
            f32::NAN.to_bits()
        } else {
            self.percentage.to_bits()
        }
    }
}

impl PartialEq for ParticipationRequest {
    fn eq(&self, other: &Self) -> bool {
        self.employee_id == other.employee_id
            && self.project_id == other.project_id
            && self.role == other.role
            && self.percentage_bits() == other.percentage_bits()
    }
}

impl Eq for ParticipationRequest {}

impl Hash for ParticipationRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.employee_id.hash(state);
        self.project_id.hash(state);
        self.role.hash(state);
        self.percentage_bits().hash(state);
    }
}

impl fmt::Display for ParticipationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ParticipationRequest(employee_id={}, project_id={}, role={}, percentage={})",
            DisplayOption(&self.employee_id),
            DisplayOption(&self.project_id),
            DisplayOption(&self.role),
            self.percentage
        )
    }
}

/// Renders `None` as `null`, matching the JSON encoding.
struct DisplayOption<'a, T>(&'a Option<T>);

impl<T: fmt::Display> fmt::Display for DisplayOption<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{}", value),
            None => f.write_str("null"),
        }
    }
}

/// `percentage` is not nullable; an explicit `null` reads as zero.
fn null_as_zero<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f32>::deserialize(deserializer)?.unwrap_or_default())
}
