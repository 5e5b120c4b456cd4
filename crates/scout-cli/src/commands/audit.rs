use anyhow::Context;
use scout_classify::Analysis;
use scout_core::address::validate_input;
use scout_core::entities::{HistoryEntry, HistoryRecord};
use scout_core::enums::Side;
use scout_core::responses::{AuditReport, HistoryStatus};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AuditArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `scout audit`.
pub async fn handle(args: &AuditArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    validate_input(Side::Target.as_str(), &args.target)?;
    validate_input(Side::Mine.as_str(), &args.mine)?;

    let analyzer = ctx.analyzer(!args.no_careers, !args.no_news)?;

    let progress = Progress::spinner("Scanning target and your site...");
    let analysis = match analyzer.analyze(&args.target, &args.mine).await {
        Ok(analysis) => analysis,
        Err(error) => {
            progress.finish_err("audit failed");
            return Err(error.into());
        }
    };
    progress.set_message("Recording audit history...");
    let history = record(ctx, &analysis).await;
    progress.finish_clear();

    let report = AuditReport {
        playbook: analysis.playbook(),
        target: analysis.target,
        me: analysis.me,
        history,
    };
    output(&report, flags.format)
}

/// Append the audit to history. Never fails the command: a write error is
/// logged and reported in the returned status.
async fn record(ctx: &AppContext, analysis: &Analysis) -> HistoryStatus {
    let entry = HistoryEntry::new(&analysis.target.url, &analysis.me.url)
        .with_names(&analysis.target.name, &analysis.me.name);

    match append(ctx, &entry).await {
        Ok(record) => HistoryStatus::recorded(record.id),
        Err(error) => {
            let message = format!("{error:#}");
            tracing::warn!(error = %message, "audit history was not recorded");
            HistoryStatus::failed(message)
        }
    }
}

async fn append(ctx: &AppContext, entry: &HistoryEntry) -> anyhow::Result<HistoryRecord> {
    let db = ctx.open_history().await?;
    db.append(entry)
        .await
        .context("failed to append audit history")
}
