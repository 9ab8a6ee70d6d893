use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A published track of lessons owned by a cohort.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Curriculum {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub cohort_id: i64,
    #[serde(default)]
    pub published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lessons: Option<Vec<Lesson>>,
}

impl Curriculum {
    /// Check that every embedded lesson points back at this curriculum.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming the first lesson whose
    /// `curriculum_id` differs from `self.id`.
    pub fn check_lessons(&self) -> Result<(), CoreError> {
        let Some(lessons) = &self.lessons else {
            return Ok(());
        };
        match lessons.iter().find(|lesson| lesson.curriculum_id != self.id) {
            Some(lesson) => Err(CoreError::Validation(format!(
                "lesson {} belongs to curriculum {}, not {}",
                lesson.id, lesson.curriculum_id, self.id
            ))),
            None => Ok(()),
        }
    }
}

/// A single lesson. `order_index` orders lessons within one curriculum only.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Lesson {
    pub id: i64,
    pub curriculum_id: i64,
    pub title: String,
    #[serde(default)]
    pub content_markdown: String,
    pub order_index: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_video: Option<bool>,
}

impl Lesson {
    #[must_use]
    pub fn is_video(&self) -> bool {
        self.is_video.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson(id: i64, curriculum_id: i64) -> Lesson {
        Lesson {
            id,
            curriculum_id,
            title: format!("Lesson {id}"),
            content_markdown: String::new(),
            order_index: 1,
            is_video: None,
        }
    }

    #[test]
    fn embedded_lessons_must_share_curriculum_id() {
        let mut curriculum = Curriculum {
            id: 1,
            title: "Web Development Track".into(),
            description: String::new(),
            cohort_id: 1,
            published: true,
            lessons: Some(vec![lesson(1, 1), lesson(2, 1)]),
        };
        assert!(curriculum.check_lessons().is_ok());

        curriculum.lessons = Some(vec![lesson(1, 1), lesson(9, 2)]);
        let err = curriculum.check_lessons().unwrap_err();
        assert!(err.to_string().contains("lesson 9"));
    }

    #[test]
    fn optional_fields_default_when_missing() {
        let lesson: Lesson = serde_json::from_str(
            r#"{"id": 3, "curriculum_id": 1, "title": "1.3 State and Props", "order_index": 3}"#,
        )
        .unwrap();
        assert!(!lesson.is_video());
        assert!(lesson.content_markdown.is_empty());

        let curriculum: Curriculum = serde_json::from_str(
            r#"{"id": 1, "title": "Track", "cohort_id": 1, "published": true}"#,
        )
        .unwrap();
        assert!(curriculum.lessons.is_none());
        assert!(curriculum.check_lessons().is_ok());
    }
}
