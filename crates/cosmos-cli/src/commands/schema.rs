use cosmos_core::entities::{
    Assignment, AssignmentSubmission, AuthCodeRequest, AuthCodeResponse, Cohort, Curriculum,
    Event, Grade, HealthStatus, Lesson, User, VerifyCodeRequest, VerifyCodeResponse,
};
use schemars::{Schema, schema_for};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Record types `cosmos schema` knows, by their kebab-case name.
pub const TYPE_NAMES: [&str; 13] = [
    "curriculum",
    "lesson",
    "assignment",
    "grade",
    "assignment-submission",
    "event",
    "user",
    "cohort",
    "auth-code-request",
    "auth-code-response",
    "verify-code-request",
    "verify-code-response",
    "health-status",
];

fn schema(type_name: &str) -> Option<Schema> {
    let schema = match type_name.replace('_', "-").to_ascii_lowercase().as_str() {
        "curriculum" => schema_for!(Curriculum),
        "lesson" => schema_for!(Lesson),
        "assignment" => schema_for!(Assignment),
        "grade" => schema_for!(Grade),
        "assignment-submission" | "submission" => schema_for!(AssignmentSubmission),
        "event" => schema_for!(Event),
        "user" => schema_for!(User),
        "cohort" => schema_for!(Cohort),
        "auth-code-request" => schema_for!(AuthCodeRequest),
        "auth-code-response" => schema_for!(AuthCodeResponse),
        "verify-code-request" => schema_for!(VerifyCodeRequest),
        "verify-code-response" => schema_for!(VerifyCodeResponse),
        "health-status" => schema_for!(HealthStatus),
        _ => return None,
    };
    Some(schema)
}

/// Handle `cosmos schema <type>`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(schema) = schema(&args.type_name) else {
        anyhow::bail!(
            "unknown type '{}'; expected one of: {}",
            args.type_name,
            TYPE_NAMES.join(", ")
        );
    };
    // A schema has no tabular form; tables get pretty JSON too.
    output(&schema, flags.format, |_| {
        serde_json::to_string_pretty(&schema).unwrap_or_default()
    })
}

#[cfg(test)]
mod tests {
    use super::{TYPE_NAMES, schema};

    #[test]
    fn every_listed_type_has_a_schema() {
        for name in TYPE_NAMES {
            assert!(schema(name).is_some(), "{name}");
        }
    }

    #[test]
    fn submission_schema_names_its_fields() {
        let schema = schema("assignment_submission").expect("schema");
        let json = serde_json::to_value(&schema).expect("serializable");
        let properties = json["properties"].as_object().expect("properties");
        for field in ["status", "assignment", "grade", "submitted_at"] {
            assert!(properties.contains_key(field), "{field}");
        }
    }

    #[test]
    fn unknown_type_has_no_schema() {
        assert!(schema("widget").is_none());
    }
}
