use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use lunisol_export::{csv_content, suggested_filename, write_csv};
use lunisol_resolve::{LunarAnniversary, generate};

use crate::cli::ExportArgs;
use crate::{config, convert};

/// Run the `export` subcommand: resolve the anniversary and emit the
/// calendar-importable CSV to a file or stdout.
pub fn run(args: ExportArgs) -> Result<()> {
    let cfg = config::load(&args.config)?;
    let resolve_cfg = convert::build_resolve_config(&cfg.resolve)?;
    let today = convert::resolve_today(args.today.as_deref())?;
    let table = convert::load_table(args.table.as_ref().or(cfg.table.path.as_ref()))?;

    let anniversary = LunarAnniversary::new(args.title, args.month, args.day)?;
    let result = generate(&table, &anniversary, today, &resolve_cfg)?;
    if result.is_empty() {
        println!("해당 음력 날짜에 대한 양력 변환 데이터를 찾을 수 없습니다.");
        return Ok(());
    }

    if args.stdout {
        // Identical bytes to the file path; callers pipe this into a
        // clipboard tool.
        let mut out = std::io::stdout().lock();
        out.write_all(csv_content(&result).as_bytes())
            .context("failed to write CSV to stdout")?;
        return Ok(());
    }

    let path = args
        .output
        .unwrap_or_else(|| PathBuf::from(suggested_filename(&result)));
    write_csv(&path, &result)?;
    info!(path = %path.display(), rows = result.len(), "CSV exported");
    println!("CSV 파일이 저장되었습니다: {}", path.display());
    Ok(())
}
