use cosmos_portal::{CurriculumPage, load_curriculum};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CurriculumArgs;
use crate::context::AppContext;
use crate::output::{TableOptions, output, table::render_rows};

/// Handle `cosmos curriculum`.
pub async fn handle(args: &CurriculumArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let page = load_curriculum(&ctx.api, args.lesson).await;
    output(&page, flags.format, |options| render_table(&page, options))
}

fn render_table(page: &CurriculumPage, options: TableOptions) -> String {
    let mut sections = Vec::with_capacity(page.tracks.len() + 1);
    for track in &page.tracks {
        let rows = track
            .lessons
            .iter()
            .map(|lesson| {
                vec![
                    if lesson.active { "▶" } else { "" }.to_string(),
                    lesson.id.to_string(),
                    lesson.title.clone(),
                    if lesson.is_video { "video" } else { "article" }.to_string(),
                ]
            })
            .collect::<Vec<_>>();
        sections.push(format!(
            "{}\n{}",
            track.title,
            render_rows(&["", "id", "lesson", "kind"], &rows, options)
        ));
    }

    sections.push(format!("# {}\n\n{}", page.article.title, page.article.markdown.trim_end()));
    sections.join("\n\n")
}
