//! Fixed datasets shown when the backend has nothing to offer.
//!
//! Every timestamp is a fixed value so that placeholder pages render the same
//! way on every run.

use chrono::{DateTime, NaiveDate, Utc};
use cosmos_core::entities::{Assignment, AssignmentSubmission, Curriculum, Event, Grade, Lesson};
use cosmos_core::enums::{EventType, SubmissionStatus};

/// Title of the article shown when a lesson has no content of its own.
pub const INTRO_ARTICLE_TITLE: &str = "1.1 Introduction to React";

/// Body of the fallback lesson article.
pub const INTRO_ARTICLE_MARKDOWN: &str = r"Welcome to the first lesson in your web development journey. React is a powerful JavaScript library for building user interfaces. Let's dive in.

## What is React?

React, sometimes referred to as a frontend JavaScript framework, is a JavaScript library created by Facebook. React is a tool for building UI components.

## Key Concepts

Before we start writing code, let's understand a few core concepts:

- **Components:** The building blocks of any React app. They are like JavaScript functions that return HTML.
- **JSX (JavaScript XML):** A syntax extension for JavaScript. It allows you to write HTML-like code in your JavaScript files.
- **Props (Properties):** How components talk to each other. They are passed to components like function arguments.
- **State:** Data that a component maintains. When a component's state changes, React re-renders the component.

## Your First Component

Here's what a simple React component looks like using JSX:

```jsx
function Welcome(props) {
  return <h1>Hello, {props.name}</h1>;
}
```

> **Note:** This is a simplified example. In a real project, you'd use tools like Next.js or Create React App to set up your development environment.

In the next lesson, we'll explore JSX and components in more detail and set up our first project.
";

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

/// Reference "now" for placeholder submissions.
fn reference_time() -> DateTime<Utc> {
    at(2025, 7, 1, 0, 0)
}

fn event(id: i64, title: &str, event_type: EventType, start: DateTime<Utc>, end: DateTime<Utc>) -> Event {
    Event {
        id,
        cohort_id: 1,
        title: title.to_string(),
        description: String::new(),
        event_type,
        start_time: start,
        end_time: end,
        location: String::new(),
    }
}

/// Upcoming events on the dashboard.
#[must_use]
pub fn dashboard_events() -> Vec<Event> {
    vec![
        event(
            1,
            "Live Class: Advanced React Patterns",
            EventType::Class,
            at(2025, 7, 7, 14, 0),
            at(2025, 7, 7, 15, 0),
        ),
        event(
            2,
            "Project 1: Portfolio Site Deadline",
            EventType::Deadline,
            at(2025, 7, 8, 23, 59),
            at(2025, 7, 8, 23, 59),
        ),
        event(
            3,
            "Guest Lecture: AI in Modern Web Dev",
            EventType::Class,
            at(2025, 7, 10, 16, 0),
            at(2025, 7, 10, 17, 0),
        ),
    ]
}

/// The dashboard events plus one later deadline.
#[must_use]
pub fn calendar_events() -> Vec<Event> {
    let mut events = dashboard_events();
    events.push(event(
        4,
        "Neural Network Basics Assignment Due",
        EventType::Deadline,
        at(2025, 7, 15, 23, 59),
        at(2025, 7, 15, 23, 59),
    ));
    events
}

struct SubmissionSeed {
    id: i64,
    title: &'static str,
    course: &'static str,
    status: SubmissionStatus,
    due: DateTime<Utc>,
    grade: Option<(i64, f64, &'static str)>,
}

fn submission(seed: SubmissionSeed) -> AssignmentSubmission {
    AssignmentSubmission {
        id: seed.id,
        assignment_id: seed.id,
        user_id: 1,
        file_url: String::new(),
        submitted_at: reference_time(),
        status: seed.status,
        assignment: Assignment {
            id: seed.id,
            lesson_id: seed.id,
            title: seed.title.to_string(),
            description: seed.course.to_string(),
            due_date: seed.due,
            max_score: 100.0,
        },
        grade: seed.grade.map(|(id, score, feedback)| Grade {
            id,
            submission_id: seed.id,
            grader_id: 1,
            score,
            feedback: feedback.to_string(),
        }),
    }
}

/// Recent assignments on the dashboard. None of them carries a grade.
#[must_use]
pub fn dashboard_assignments() -> Vec<AssignmentSubmission> {
    [
        (1, "Intro to FastAPI", "Web Development Track", SubmissionStatus::Pending),
        (2, "Robotics Ethics Essay", "AI & Robotics Track", SubmissionStatus::Graded),
        (3, "Data Structures Quiz", "Core Concepts", SubmissionStatus::Submitted),
    ]
    .into_iter()
    .map(|(id, title, course, status)| {
        submission(SubmissionSeed {
            id,
            title,
            course,
            status,
            due: reference_time(),
            grade: None,
        })
    })
    .collect()
}

/// Submissions on the assignment tracker; the two graded ones carry grades.
#[must_use]
pub fn assignment_submissions() -> Vec<AssignmentSubmission> {
    vec![
        submission(SubmissionSeed {
            id: 1,
            title: "Intro to FastAPI",
            course: "Web Development",
            status: SubmissionStatus::Pending,
            due: at(2025, 7, 9, 0, 0),
            grade: None,
        }),
        submission(SubmissionSeed {
            id: 2,
            title: "Robotics Ethics Essay",
            course: "AI & Robotics",
            status: SubmissionStatus::Graded,
            due: at(2025, 7, 5, 0, 0),
            grade: Some((1, 92.0, "Good work")),
        }),
        submission(SubmissionSeed {
            id: 3,
            title: "Data Structures Quiz",
            course: "Core Concepts",
            status: SubmissionStatus::Submitted,
            due: at(2025, 7, 2, 0, 0),
            grade: None,
        }),
        submission(SubmissionSeed {
            id: 4,
            title: "React State Management",
            course: "Web Development",
            status: SubmissionStatus::Graded,
            due: at(2025, 6, 28, 0, 0),
            grade: Some((2, 88.0, "Solid effort")),
        }),
        submission(SubmissionSeed {
            id: 5,
            title: "Neural Network Basics",
            course: "AI & Robotics",
            status: SubmissionStatus::Pending,
            due: at(2025, 7, 15, 0, 0),
            grade: None,
        }),
    ]
}

fn lesson(id: i64, curriculum_id: i64, title: &str, order_index: i32) -> Lesson {
    Lesson {
        id,
        curriculum_id,
        title: title.to_string(),
        content_markdown: String::new(),
        order_index,
        is_video: None,
    }
}

#[must_use]
pub fn curricula() -> Vec<Curriculum> {
    vec![Curriculum {
        id: 1,
        title: "Web Development Track".to_string(),
        description: String::new(),
        cohort_id: 1,
        published: true,
        lessons: Some(vec![lesson(1, 1, "Module 1: Frontend Foundations", 1)]),
    }]
}

/// Lessons for curricula 1 and 2. Their content is blank, so the intro
/// article stands in for each of them.
#[must_use]
pub fn lessons() -> Vec<Lesson> {
    let mut video = lesson(3, 1, "1.3 State and Props (Video)", 3);
    video.is_video = Some(true);

    vec![
        lesson(1, 1, "1.1 Intro to React", 1),
        lesson(2, 1, "1.2 JSX and Components", 2),
        video,
        lesson(4, 1, "1.4 Component Lifecycle", 4),
        lesson(5, 2, "2.1 CSS-in-JS", 1),
        lesson(6, 2, "2.2 Tailwind CSS Deep Dive", 2),
        lesson(7, 2, "2.3 Building with shadcn/ui", 3),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graded_placeholders_are_consistent() {
        for submission in assignment_submissions() {
            assert!(submission.check_grade_consistency().is_ok(), "{}", submission.id);
        }
    }

    #[test]
    fn calendar_extends_dashboard_events() {
        let dashboard = dashboard_events();
        let calendar = calendar_events();
        assert_eq!(calendar.len(), 4);
        assert_eq!(&calendar[..3], dashboard.as_slice());
        assert_eq!(calendar[3].event_type, EventType::Deadline);
    }

    #[test]
    fn placeholder_curricula_embed_their_own_lessons() {
        for curriculum in curricula() {
            assert!(curriculum.check_lessons().is_ok());
        }
        assert_eq!(lessons().iter().filter(|l| l.is_video()).count(), 1);
    }

    #[test]
    fn placeholder_times_are_fixed() {
        assert_eq!(
            cosmos_core::timestamp::format(&dashboard_events()[0].start_time),
            "2025-07-07T14:00:00Z"
        );
        assert_eq!(
            cosmos_core::timestamp::format(&dashboard_assignments()[0].submitted_at),
            "2025-07-01T00:00:00Z"
        );
    }
}
