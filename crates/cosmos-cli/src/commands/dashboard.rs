use cosmos_portal::{Dashboard, DataSource, load_dashboard};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{TableOptions, output, table::render_rows};

/// Handle `cosmos dashboard`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let page = load_dashboard(&ctx.api, &ctx.config.session, &ctx.config.profile).await;
    output(&page, flags.format, |options| render_table(&page, options))
}

fn render_table(page: &Dashboard, options: TableOptions) -> String {
    let events = page
        .upcoming_events
        .iter()
        .map(|event| {
            vec![
                event.start_time.format("%Y-%m-%d %H:%M UTC").to_string(),
                event.title.clone(),
                event.event_type.label().to_string(),
            ]
        })
        .collect::<Vec<_>>();

    let assignments = page
        .recent_assignments
        .iter()
        .map(|card| vec![card.title.clone(), card.course.clone(), card.badge.to_string()])
        .collect::<Vec<_>>();

    format!(
        "Welcome back, {}!\n\
         Assignments due: {}    Overall progress: {}%{}\n\n\
         Upcoming events\n{}\n\n\
         Recent assignments\n{}",
        page.greeting_name,
        page.assignments_due,
        page.completion_percent,
        sample_note(page),
        render_rows(&["when", "title", "type"], &events, options),
        render_rows(&["title", "course", "status"], &assignments, options),
    )
}

fn sample_note(page: &Dashboard) -> &'static str {
    match (page.events_source, page.assignments_source) {
        (DataSource::Remote, DataSource::Remote) => "",
        (DataSource::Placeholder, DataSource::Placeholder) => "    (sample data)",
        _ => "    (partly sample data)",
    }
}
