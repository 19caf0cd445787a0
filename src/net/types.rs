//! Wire DTOs for the property-management REST API.
//!
//! DESIGN
//! ======
//! The API is loosely typed: ids arrive as JSON strings or integers, numeric
//! address parts may arrive as numbers, and a tenant's `staff` field is a bare
//! id on the dashboard listing but a list of users on the tenant record. The
//! types here absorb that looseness at the boundary so view state can stay
//! strongly typed.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Acknowledgment message the API returns after deleting a user.
pub const USER_DELETED_ACK: &str = "User deleted";

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Opaque entity identifier.
///
/// Accepts a JSON string or integer on input; always serializes as a string.
/// Two ids are equal when their string forms are equal, so `7` and `"7"`
/// identify the same entity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty id is what an unset selection control reports.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Id {
    fn from(raw: &str) -> Self {
        Self(raw.to_owned())
    }
}

impl From<String> for Id {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<i64> for Id {
    fn from(raw: i64) -> Self {
        Self(raw.to_string())
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        lenient_string(deserializer).map(Self)
    }
}

/// Deserialize a string that the API sometimes sends as a bare number.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        _ => Err(D::Error::custom("expected string or number")),
    }
}

/// Like [`lenient_string`], but `null` and absent become an empty string.
fn lenient_string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(String::new()),
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        _ => Err(D::Error::custom("expected string, number, or null")),
    }
}

// =============================================================================
// ROLES
// =============================================================================

/// Role code used by the role-filtered user query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserRole {
    /// Awaiting access approval.
    Pending,
    /// Staff member eligible for tenant assignment.
    Staff,
    Admin,
}

impl UserRole {
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Pending => 0,
            Self::Staff => 2,
            Self::Admin => 4,
        }
    }
}

impl Serialize for UserRole {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.code())
    }
}

// =============================================================================
// RECORDS
// =============================================================================

/// A user as returned by the role-filtered query: staff candidate or pending requester.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Id,
    #[serde(default, deserialize_with = "lenient_string_or_empty")]
    pub first_name: String,
    #[serde(default, deserialize_with = "lenient_string_or_empty")]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Raw role code; left untyped so unknown roles never fail a listing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub userrole: Option<i64>,
}

impl User {
    /// `"First Last"`, the label used by selection controls.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A tenant's staff reference in whichever shape the API returns.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StaffAssignment {
    /// Full staff records, as returned by `GET /api/tenants/{id}`.
    Members(Vec<User>),
    /// A bare staff id, as listed on the dashboard and set by a selection control.
    Single(Id),
    /// Any other JSON value (`0`, `false`, `true`, odd arrays). Kept verbatim
    /// so one malformed record never fails a whole listing.
    Other(serde_json::Value),
}

impl StaffAssignment {
    /// JSON truthiness of the raw reference: `""`, `0`, and `false` are unset;
    /// any list or object is set, even an empty one.
    #[must_use]
    pub fn is_set(&self) -> bool {
        match self {
            Self::Members(_) => true,
            Self::Single(id) => !id.is_empty(),
            Self::Other(value) => is_truthy(value),
        }
    }
}

impl<'de> Deserialize<'de> for StaffAssignment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::String(s) => Self::Single(Id::from(s)),
            serde_json::Value::Number(n) if is_truthy_number(&n) => Self::Single(Id::from(n.to_string())),
            serde_json::Value::Array(_) => match serde_json::from_value::<Vec<User>>(value.clone()) {
                Ok(members) => Self::Members(members),
                Err(_) => Self::Other(value),
            },
            serde_json::Value::Object(_) => match serde_json::from_value::<User>(value.clone()) {
                Ok(member) => Self::Members(vec![member]),
                Err(_) => Self::Other(value),
            },
            other => Self::Other(other),
        })
    }
}

fn is_truthy_number(n: &serde_json::Number) -> bool {
    n.as_f64().is_some_and(|f| f.abs() > 0.0)
}

fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => is_truthy_number(n),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: Id,
    #[serde(default, deserialize_with = "lenient_string_or_empty")]
    pub first_name: String,
    #[serde(default, deserialize_with = "lenient_string_or_empty")]
    pub last_name: String,
    #[serde(default, deserialize_with = "lenient_string_or_empty")]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Name of the property this tenant rents; keys `GET /api/properties/{name}`.
    #[serde(default, deserialize_with = "lenient_string_or_empty")]
    pub property_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff: Option<StaffAssignment>,
}

impl Tenant {
    #[must_use]
    pub fn is_staffed(&self) -> bool {
        self.staff.as_ref().is_some_and(StaffAssignment::is_set)
    }

    /// The single staff id picked for this tenant, if one is set.
    #[must_use]
    pub fn assigned_staff_id(&self) -> Option<&Id> {
        match &self.staff {
            Some(StaffAssignment::Single(id)) if !id.is_empty() => Some(id),
            _ => None,
        }
    }

    /// Staff records attached to the tenant, empty for the bare-id shape.
    #[must_use]
    pub fn staff_members(&self) -> &[User] {
        match &self.staff {
            Some(StaffAssignment::Members(members)) => members,
            _ => &[],
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Property {
    #[serde(deserialize_with = "lenient_string_or_empty")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string_or_empty")]
    pub address: String,
    #[serde(deserialize_with = "lenient_string_or_empty")]
    pub city: String,
    #[serde(deserialize_with = "lenient_string_or_empty")]
    pub state: String,
    #[serde(deserialize_with = "lenient_string_or_empty")]
    pub zipcode: String,
    #[serde(deserialize_with = "lenient_string_or_empty")]
    pub unit: String,
}

impl Property {
    /// `"address, city, state, zipcode"` as shown in the contact table.
    #[must_use]
    pub fn full_address(&self) -> String {
        format!("{}, {}, {}, {}", self.address, self.city, self.state, self.zipcode)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: Id,
    #[serde(default)]
    pub issue: Option<String>,
    #[serde(default)]
    pub tenant: Option<serde_json::Value>,
    #[serde(default)]
    pub sender: Option<serde_json::Value>,
    #[serde(default)]
    pub date_created: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub urgency: Option<String>,
    #[serde(default)]
    pub notes: Option<serde_json::Value>,
}

/// Dashboard summary modules. Each module's payload is rendered opaquely.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Widgets {
    pub opentickets: Option<serde_json::Value>,
    pub reports: Option<serde_json::Value>,
    pub managers: Option<serde_json::Value>,
}

/// Uniform `{ key, description }` shape fed to selection controls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffChoice {
    pub key: Id,
    pub description: String,
}

impl From<&User> for StaffChoice {
    fn from(user: &User) -> Self {
        Self { key: user.id.clone(), description: user.display_name() }
    }
}

/// Map users into selection-control choices, preserving order.
#[must_use]
pub fn staff_choices(users: &[User]) -> Vec<StaffChoice> {
    users.iter().map(StaffChoice::from).collect()
}

// =============================================================================
// ENVELOPES
// =============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct TenantList {
    #[serde(default)]
    pub tenants: Vec<Tenant>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserList {
    #[serde(default)]
    pub users: Vec<User>,
}

/// Body of `POST /api/users/role`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoleQuery {
    pub userrole: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RoleQuery {
    #[must_use]
    pub fn role(userrole: UserRole) -> Self {
        Self { userrole, name: None }
    }

    #[must_use]
    pub fn search(userrole: UserRole, name: impl Into<String>) -> Self {
        Self { userrole, name: Some(name.into()) }
    }
}

/// Body of `PUT /api/tenants/{id}`.
#[derive(Debug, Serialize)]
pub(crate) struct AssignStaffRequest<'a> {
    #[serde(rename = "staffIDs")]
    pub staff_ids: [&'a Id; 1],
}

/// Response of `PUT /api/tenants/{id}`; the updated tenant, of which only the id matters.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AssignStaffAck {
    #[serde(default)]
    pub id: Option<Id>,
}

/// Response of `DELETE /api/user/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteAck {
    #[serde(rename = "Message", default)]
    pub message: Option<String>,
}

impl DeleteAck {
    #[must_use]
    pub fn is_deleted(&self) -> bool {
        self.message.as_deref() == Some(USER_DELETED_ACK)
    }
}
