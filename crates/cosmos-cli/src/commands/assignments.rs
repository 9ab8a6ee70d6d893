use cosmos_core::enums::AssignmentTab;
use cosmos_portal::{AssignmentsPage, load_assignments};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AssignmentsArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::{TableOptions, output, table::render_rows};

/// Handle `cosmos assignments`.
pub async fn handle(args: &AssignmentsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let tab: AssignmentTab = parse_enum(&args.tab, "tab")?;
    let page = load_assignments(&ctx.api, &ctx.config.session, tab).await;
    output(&page, flags.format, |options| render_table(&page, options))
}

fn render_table(page: &AssignmentsPage, options: TableOptions) -> String {
    let counts = page.counts;
    let rows = page
        .rows
        .iter()
        .map(|row| {
            vec![
                row.title.clone(),
                row.course.clone(),
                row.due_date.format("%b %-d, %Y").to_string(),
                row.status_label.to_string(),
                row.grade.clone(),
            ]
        })
        .collect::<Vec<_>>();

    format!(
        "All ({})  To Do ({})  Submitted ({})  Graded ({})    showing: {}\n\n{}",
        counts.all,
        counts.todo,
        counts.submitted,
        counts.graded,
        page.tab,
        render_rows(&["assignment", "course", "due", "status", "grade"], &rows, options),
    )
}
