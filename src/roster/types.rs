//! Doctor roster entries.

use std::fmt;

/// Opaque unique identifier for a roster entry.
///
/// Backend document ids are opaque strings; the id is authoritative,
/// denormalized names on events are only a display cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct DoctorId(String);

impl DoctorId {
    pub fn new(id: impl Into<String>) -> Self {
        DoctorId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DoctorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DoctorId {
    fn from(s: &str) -> Self {
        DoctorId(s.to_owned())
    }
}

impl From<String> for DoctorId {
    fn from(s: String) -> Self {
        DoctorId(s)
    }
}

/// One roster entry, as read from the roster snapshot.
///
/// Created, edited, and deactivated only by the external roster-management
/// collaborator. The core treats every `Doctor` as immutable input.
///
/// # Examples
///
/// ```
/// use oncall_rotation::roster::Doctor;
///
/// let d = Doctor::new("d1", "Dr. Ana")
///     .with_areas(["Ortopedia", "Trauma"])
///     .with_restricted_plan(false);
///
/// assert!(d.active);
/// assert!(d.serves_area("Trauma"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Doctor {
    pub id: DoctorId,

    /// Display name.
    pub name: String,

    /// Area labels this doctor can serve.
    pub areas: Vec<String>,

    /// Inactive doctors are never eligible.
    pub active: bool,

    /// Whether this doctor may be assigned a restricted-plan patient.
    #[cfg_attr(feature = "serde", serde(rename = "canBeSelected"))]
    pub accepts_restricted_plan: bool,
}

impl Doctor {
    /// Creates an active doctor with no areas that accepts the
    /// restricted plan.
    pub fn new(id: impl Into<DoctorId>, name: impl Into<String>) -> Self {
        Doctor {
            id: id.into(),
            name: name.into(),
            areas: Vec::new(),
            active: true,
            accepts_restricted_plan: true,
        }
    }

    pub fn with_areas<I, S>(mut self, areas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.areas = areas.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn with_restricted_plan(mut self, accepts: bool) -> Self {
        self.accepts_restricted_plan = accepts;
        self
    }

    /// Returns true if `area` is one of this doctor's areas.
    pub fn serves_area(&self, area: &str) -> bool {
        self.areas.iter().any(|a| a == area)
    }
}
