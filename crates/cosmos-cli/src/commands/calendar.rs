use cosmos_portal::{CalendarPage, load_calendar};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CalendarArgs;
use crate::commands::shared::parse::parse_date;
use crate::context::AppContext;
use crate::output::{TableOptions, output, table::render_rows};

/// Handle `cosmos calendar`.
pub async fn handle(args: &CalendarArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let selected = args
        .date
        .as_deref()
        .map(|raw| parse_date(raw, "date"))
        .transpose()?;
    let page = load_calendar(&ctx.api, &ctx.config.session, selected).await;
    output(&page, flags.format, |options| render_table(&page, options))
}

fn render_table(page: &CalendarPage, options: TableOptions) -> String {
    let dates = page
        .event_dates
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    let rows = page
        .selected_events
        .iter()
        .map(|event| {
            vec![
                format!(
                    "{}-{}",
                    event.start_time.format("%H:%M"),
                    event.end_time.format("%H:%M")
                ),
                event.title.clone(),
                event.event_type.label().to_string(),
            ]
        })
        .collect::<Vec<_>>();

    let events = if rows.is_empty() {
        String::from("No events scheduled for this day.")
    } else {
        render_rows(&["time (UTC)", "title", "type"], &rows, options)
    };

    format!(
        "Days with events: {dates}\n\nEvents for {}\n{events}",
        page.selected_date.format("%B %-d, %Y")
    )
}
