//! The backend operations the client knows, and how each one fails.
//!
//! Every operation declares its [`ResourceShape`] up front. Collection
//! operations turn any failure into an empty list so list pages can fall back
//! to placeholders; single-resource operations surface the error.

use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;

/// Whether an operation returns one resource or a list of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceShape {
    /// Failures propagate to the caller.
    Single,
    /// Failures are absorbed into an empty collection.
    Collection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Self::GET,
            HttpMethod::Post => Self::POST,
        }
    }
}

/// One row of the backend contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Operation {
    pub name: &'static str,
    pub method: HttpMethod,
    /// Path template; `{id}` is replaced by [`Operation::path`].
    pub path: &'static str,
    pub shape: ResourceShape,
}

impl Operation {
    /// Concrete request path, substituting `id` for the `{id}` placeholder.
    #[must_use]
    pub fn path(&self, id: Option<i64>) -> String {
        match id {
            Some(id) => self.path.replace("{id}", &id.to_string()),
            None => self.path.to_string(),
        }
    }
}

pub const REQUEST_AUTH_CODE: Operation = Operation {
    name: "request_auth_code",
    method: HttpMethod::Post,
    path: "/auth/request_code",
    shape: ResourceShape::Single,
};

pub const VERIFY_AUTH_CODE: Operation = Operation {
    name: "verify_auth_code",
    method: HttpMethod::Post,
    path: "/auth/verify_code",
    shape: ResourceShape::Single,
};

pub const HEALTH: Operation = Operation {
    name: "health",
    method: HttpMethod::Get,
    path: "/health",
    shape: ResourceShape::Single,
};

pub const LIST_CURRICULA: Operation = Operation {
    name: "list_curricula",
    method: HttpMethod::Get,
    path: "/curriculum",
    shape: ResourceShape::Collection,
};

pub const LIST_LESSONS: Operation = Operation {
    name: "list_lessons",
    method: HttpMethod::Get,
    path: "/lessons",
    shape: ResourceShape::Collection,
};

pub const STUDENT_ASSIGNMENTS: Operation = Operation {
    name: "student_assignments",
    method: HttpMethod::Get,
    path: "/student/assignments/{id}",
    shape: ResourceShape::Collection,
};

pub const COHORT_EVENTS: Operation = Operation {
    name: "cohort_events",
    method: HttpMethod::Get,
    path: "/events/{id}",
    shape: ResourceShape::Collection,
};

/// Every operation, in contract order.
pub const OPERATIONS: [Operation; 7] = [
    REQUEST_AUTH_CODE,
    VERIFY_AUTH_CODE,
    HEALTH,
    LIST_CURRICULA,
    LIST_LESSONS,
    STUDENT_ASSIGNMENTS,
    COHORT_EVENTS,
];

/// Per-request options layered over the client defaults.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<serde_json::Value>,
    /// Merged over the default headers; a caller header replaces a default
    /// of the same name.
    pub headers: HeaderMap,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            body: None,
            headers: HeaderMap::new(),
        }
    }
}

impl RequestOptions {
    #[must_use]
    pub fn new(method: impl Into<Method>) -> Self {
        Self {
            method: method.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Add a caller header; repeating a name adds another value.
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_operations_are_collections() {
        for op in [LIST_CURRICULA, LIST_LESSONS, STUDENT_ASSIGNMENTS, COHORT_EVENTS] {
            assert_eq!(op.shape, ResourceShape::Collection, "{}", op.name);
            assert_eq!(op.method, HttpMethod::Get, "{}", op.name);
        }
    }

    #[test]
    fn single_operations_propagate() {
        for op in [REQUEST_AUTH_CODE, VERIFY_AUTH_CODE, HEALTH] {
            assert_eq!(op.shape, ResourceShape::Single, "{}", op.name);
        }
    }

    #[test]
    fn path_substitutes_id() {
        assert_eq!(STUDENT_ASSIGNMENTS.path(Some(1)), "/student/assignments/1");
        assert_eq!(COHORT_EVENTS.path(Some(42)), "/events/42");
        assert_eq!(LIST_LESSONS.path(None), "/lessons");
    }

    #[test]
    fn operation_names_are_unique() {
        let mut names: Vec<&str> = OPERATIONS.iter().map(|op| op.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), OPERATIONS.len());
    }

    #[test]
    fn request_options_default_to_get_without_body() {
        let options = RequestOptions::default();
        assert_eq!(options.method, Method::GET);
        assert!(options.body.is_none());
        assert!(options.headers.is_empty());

        let post = RequestOptions::new(HttpMethod::Post).with_body(serde_json::json!({"a": 1}));
        assert_eq!(post.method, Method::POST);
        assert!(post.body.is_some());
    }

    #[test]
    fn repeated_caller_header_keeps_each_value() {
        let options = RequestOptions::new(HttpMethod::Post)
            .with_header(reqwest::header::ACCEPT, HeaderValue::from_static("application/json"))
            .with_header(reqwest::header::ACCEPT, HeaderValue::from_static("text/plain"));
        assert_eq!(options.method, Method::POST);
        assert_eq!(options.headers.get_all(reqwest::header::ACCEPT).iter().count(), 2);
    }
}
