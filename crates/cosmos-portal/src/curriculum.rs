//! Curriculum browser: tracks with their lessons, plus the active article.

use cosmos_client::PortalApi;
use cosmos_core::entities::{Curriculum, Lesson};
use serde::Serialize;

use crate::loaded::{DataSource, settle};
use crate::placeholder::{self, INTRO_ARTICLE_MARKDOWN, INTRO_ARTICLE_TITLE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonEntry {
    pub id: i64,
    pub title: String,
    pub is_video: bool,
    pub active: bool,
}

/// A curriculum with the lessons that belong to it, in lesson order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Track {
    pub id: i64,
    pub title: String,
    pub lessons: Vec<LessonEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    pub title: String,
    pub markdown: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurriculumPage {
    pub tracks: Vec<Track>,
    pub active_lesson_id: Option<i64>,
    pub article: Article,
    pub curricula_source: DataSource,
    pub lessons_source: DataSource,
}

/// Load curricula and lessons concurrently and pick the lesson to show.
///
/// `requested_lesson` wins when it names a loaded lesson; otherwise the first
/// lesson in the loaded list is active.
pub async fn load_curriculum<A: PortalApi>(api: &A, requested_lesson: Option<i64>) -> CurriculumPage {
    let (curricula, lessons) = tokio::join!(api.list_curricula(), api.list_lessons());

    let curricula = settle("curricula", curricula, placeholder::curricula);
    let lessons = settle("lessons", lessons, placeholder::lessons);
    for curriculum in &curricula.records {
        if let Err(error) = curriculum.check_lessons() {
            tracing::warn!(%error, "curriculum embeds a foreign lesson");
        }
    }

    let active = active_lesson(&lessons.records, requested_lesson);
    let active_id = active.map(|lesson| lesson.id);

    CurriculumPage {
        tracks: curricula
            .records
            .iter()
            .map(|curriculum| track(curriculum, &lessons.records, active_id))
            .collect(),
        active_lesson_id: active_id,
        article: article(active),
        curricula_source: curricula.source,
        lessons_source: lessons.source,
    }
}

fn active_lesson(lessons: &[Lesson], requested: Option<i64>) -> Option<&Lesson> {
    requested
        .and_then(|id| lessons.iter().find(|lesson| lesson.id == id))
        .or_else(|| lessons.first())
}

fn track(curriculum: &Curriculum, lessons: &[Lesson], active_id: Option<i64>) -> Track {
    let mut own: Vec<&Lesson> = lessons
        .iter()
        .filter(|lesson| lesson.curriculum_id == curriculum.id)
        .collect();
    own.sort_by_key(|lesson| lesson.order_index);

    Track {
        id: curriculum.id,
        title: curriculum.title.clone(),
        lessons: own
            .into_iter()
            .map(|lesson| LessonEntry {
                id: lesson.id,
                title: lesson.title.clone(),
                is_video: lesson.is_video(),
                active: Some(lesson.id) == active_id,
            })
            .collect(),
    }
}

fn article(active: Option<&Lesson>) -> Article {
    match active {
        Some(lesson) => Article {
            title: lesson.title.clone(),
            markdown: if lesson.content_markdown.trim().is_empty() {
                INTRO_ARTICLE_MARKDOWN.to_string()
            } else {
                lesson.content_markdown.clone()
            },
        },
        None => Article {
            title: INTRO_ARTICLE_TITLE.to_string(),
            markdown: INTRO_ARTICLE_MARKDOWN.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson(id: i64, curriculum_id: i64, order_index: i32) -> Lesson {
        Lesson {
            id,
            curriculum_id,
            title: format!("Lesson {id}"),
            content_markdown: String::new(),
            order_index,
            is_video: None,
        }
    }

    #[test]
    fn requested_lesson_must_exist() {
        let lessons = placeholder::lessons();
        assert_eq!(active_lesson(&lessons, Some(3)).map(|l| l.id), Some(3));
        assert_eq!(active_lesson(&lessons, Some(99)).map(|l| l.id), Some(1));
        assert_eq!(active_lesson(&lessons, None).map(|l| l.id), Some(1));
        assert!(active_lesson(&[], Some(1)).is_none());
    }

    #[test]
    fn track_orders_by_order_index_and_filters_foreign_lessons() {
        let curriculum = &placeholder::curricula()[0];
        let lessons = vec![lesson(10, 1, 2), lesson(11, 2, 1), lesson(12, 1, 1), lesson(13, 1, 2)];

        let track = track(curriculum, &lessons, Some(13));
        let ids: Vec<i64> = track.lessons.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![12, 10, 13]);
        assert!(track.lessons[2].active);
        assert!(!track.lessons[0].active);
    }

    #[test]
    fn article_falls_back_to_intro_for_blank_content() {
        let mut chosen = lesson(1, 1, 1);
        assert_eq!(article(Some(&chosen)).markdown, INTRO_ARTICLE_MARKDOWN);
        assert_eq!(article(Some(&chosen)).title, "Lesson 1");

        chosen.content_markdown = "# Own content".into();
        assert_eq!(article(Some(&chosen)).markdown, "# Own content");

        assert_eq!(article(None).title, INTRO_ARTICLE_TITLE);
    }
}
