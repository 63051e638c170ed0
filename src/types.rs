//! Canonical types for Motion API entities
//!
//! Every entity is defined once here; request bodies, responses, and tool
//! input schemas all derive from these shapes. The entities are owned by
//! the remote service — nothing in this crate creates or mutates them
//! locally, the types exist for validation and serialization only.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use schemars::{json_schema, JsonSchema, Schema, SchemaGenerator};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

// ============================================================================
// Shared field types
// ============================================================================

/// Task and project priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    Asap,
    High,
    Medium,
    Low,
}

/// Deadline strictness for auto-scheduled tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum DeadlineType {
    Hard,
    Soft,
    None,
}

impl Default for DeadlineType {
    fn default() -> Self {
        DeadlineType::Soft
    }
}

/// Task duration: the token `"NONE"`, the token `"REMINDER"`, or a strictly
/// positive number of minutes. Numeric strings are coerced; zero, negative,
/// and fractional values are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskDuration {
    None,
    Reminder,
    Minutes(u64),
}

impl Serialize for TaskDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TaskDuration::None => serializer.serialize_str("NONE"),
            TaskDuration::Reminder => serializer.serialize_str("REMINDER"),
            TaskDuration::Minutes(minutes) => serializer.serialize_u64(*minutes),
        }
    }
}

struct TaskDurationVisitor;

impl TaskDurationVisitor {
    const EXPECTED: &'static str =
        "'NONE', 'REMINDER', or a positive integer number of minutes";
}

impl<'de> Visitor<'de> for TaskDurationVisitor {
    type Value = TaskDuration;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Self::EXPECTED)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<TaskDuration, E> {
        match value {
            "NONE" => Ok(TaskDuration::None),
            "REMINDER" => Ok(TaskDuration::Reminder),
            other => match other.parse::<u64>() {
                Ok(minutes) if minutes > 0 => Ok(TaskDuration::Minutes(minutes)),
                _ => Err(E::custom(format!(
                    "invalid duration {:?}: expected {}",
                    other,
                    Self::EXPECTED
                ))),
            },
        }
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<TaskDuration, E> {
        if value > 0 {
            Ok(TaskDuration::Minutes(value))
        } else {
            Err(E::custom(format!(
                "invalid duration 0: expected {}",
                Self::EXPECTED
            )))
        }
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<TaskDuration, E> {
        if value > 0 {
            Ok(TaskDuration::Minutes(value as u64))
        } else {
            Err(E::custom(format!(
                "invalid duration {}: expected {}",
                value,
                Self::EXPECTED
            )))
        }
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<TaskDuration, E> {
        if value > 0.0 && value.fract() == 0.0 {
            Ok(TaskDuration::Minutes(value as u64))
        } else {
            Err(E::custom(format!(
                "invalid duration {}: expected {}",
                value,
                Self::EXPECTED
            )))
        }
    }
}

impl<'de> Deserialize<'de> for TaskDuration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TaskDurationVisitor)
    }
}

impl JsonSchema for TaskDuration {
    fn schema_name() -> Cow<'static, str> {
        "TaskDuration".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "description": "Duration can be 'NONE', 'REMINDER', or an integer greater than 0 (representing minutes)",
            "anyOf": [
                { "type": "string", "enum": ["NONE", "REMINDER"] },
                { "type": "integer", "minimum": 1 }
            ]
        })
    }
}

fn default_schedule() -> String {
    "Work Hours".to_string()
}

/// Auto-scheduling settings carried by a task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AutoScheduledSpec {
    /// ISO 8601 date which is trimmed to the start of the day passed
    pub start_date: String,
    /// HARD, SOFT (default), or NONE
    #[serde(default)]
    pub deadline_type: DeadlineType,
    /// Schedule the task must adhere to; defaults to "Work Hours"
    #[serde(default = "default_schedule")]
    pub schedule: String,
}

/// Tri-state auto-scheduling field on create/update requests.
///
/// Omitting the field leaves the current state unchanged (off on create),
/// an explicit `null` turns auto-scheduling off, and an object turns it on.
/// Modeled as an explicit enum so the "leave unchanged" meaning survives
/// update operations.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AutoScheduledPatch {
    #[default]
    Unspecified,
    Disabled,
    Enabled(AutoScheduledSpec),
}

impl AutoScheduledPatch {
    pub fn is_unspecified(&self) -> bool {
        matches!(self, AutoScheduledPatch::Unspecified)
    }

    /// Field-level deserializer: `null` means disable, an object means
    /// enable. A missing field never reaches this function — serde's
    /// `default` yields `Unspecified` instead.
    pub fn deserialize_field<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<AutoScheduledSpec>::deserialize(deserializer)? {
            Some(spec) => AutoScheduledPatch::Enabled(spec),
            None => AutoScheduledPatch::Disabled,
        })
    }
}

impl Serialize for AutoScheduledPatch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AutoScheduledPatch::Enabled(spec) => spec.serialize(serializer),
            // Disabled serializes as an explicit null; Unspecified is
            // skipped at the field level and never serialized.
            _ => serializer.serialize_none(),
        }
    }
}

impl JsonSchema for AutoScheduledPatch {
    fn schema_name() -> Cow<'static, str> {
        "AutoScheduled".into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        let spec = generator.subschema_for::<AutoScheduledSpec>();
        json_schema!({
            "description": "Set values to turn auto scheduling on, set value to null to turn off",
            "anyOf": [spec, { "type": "null" }]
        })
    }
}

// ============================================================================
// Entities
// ============================================================================

/// A Motion user; reused wherever a person reference appears
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// A workspace-scoped task/project status.
///
/// `id` is present in some API responses and absent in others; the
/// inconsistency is upstream and preserved here as an optional field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub is_default_status: bool,
    pub is_resolved_status: bool,
}

/// Reference to a project by id and name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRef {
    pub id: String,
    pub name: String,
}

/// Reference to a workspace by id and name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceRef {
    pub id: String,
    pub name: String,
}

/// A workspace-defined, type-tagged custom field value.
///
/// Wire shape is `{ "type": "<tag>", "value": <nullable typed value> }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum CustomFieldValue {
    Text(Option<String>),
    Number(Option<f64>),
    Url(Option<String>),
    Date(Option<String>),
    Select(Option<String>),
    MultiSelect(Option<Vec<String>>),
    Person(Option<MotionUser>),
    MultiPerson(Option<Vec<MotionUser>>),
    Email(Option<String>),
    Phone(Option<String>),
    Checkbox(Option<bool>),
    RelatedTo(Option<String>),
}

/// A Motion task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionTask {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default)]
    pub completed: bool,
    pub creator: MotionUser,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectRef>,
    pub workspace: WorkspaceRef,
    pub status: MotionStatus,
    pub priority: Priority,
    #[serde(default)]
    pub assignees: Vec<MotionUser>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<TaskDuration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_scheduled: Option<AutoScheduledSpec>,
    pub created_at: String,
    pub updated_at: String,
    // Scheduling outcome; present on single-task responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_end: Option<String>,
    #[serde(default)]
    pub scheduling_issue: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_field_values: Option<HashMap<String, CustomFieldValue>>,
}

/// A Motion project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionProject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub workspace_id: String,
    pub status: MotionStatus,
    pub created_time: String,
    pub updated_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_field_values: Option<HashMap<String, CustomFieldValue>>,
}

/// Name-only label reference carried by workspaces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelRef {
    pub name: String,
}

/// A Motion workspace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionWorkspace {
    pub id: String,
    pub name: String,
    pub team_id: String,
    #[serde(rename = "type")]
    pub workspace_type: String,
    #[serde(default)]
    pub labels: Vec<LabelRef>,
    #[serde(default)]
    pub statuses: Vec<MotionStatus>,
}

/// A block of time within a schedule day, "HH:MM" start and end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeBlock {
    pub start: String,
    pub end: String,
}

/// Day-of-week keyed time blocks for a schedule
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monday: Option<Vec<TimeBlock>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tuesday: Option<Vec<TimeBlock>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wednesday: Option<Vec<TimeBlock>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thursday: Option<Vec<TimeBlock>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friday: Option<Vec<TimeBlock>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturday: Option<Vec<TimeBlock>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunday: Option<Vec<TimeBlock>>,
}

/// A named work schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionSchedule {
    pub name: String,
    pub is_default_timezone: bool,
    pub timezone: String,
    pub schedule: ScheduleDetails,
}

// ============================================================================
// Response envelopes
// ============================================================================

/// Pagination metadata on list responses. A missing `nextCursor` means
/// there are no further pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    pub page_size: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListTasksResponse {
    pub tasks: Vec<MotionTask>,
    pub meta: PageMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListUsersResponse {
    pub users: Vec<MotionUser>,
    pub meta: PageMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListWorkspacesResponse {
    pub workspaces: Vec<MotionWorkspace>,
    pub meta: PageMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListProjectsResponse {
    pub projects: Vec<MotionProject>,
    pub meta: PageMeta,
}
