use anyhow::Result;
use tracing::info;

use lunisol_calendar::CalendarDate;
use lunisol_resolve::{ConversionResult, LunarAnniversary, generate};

use crate::cli::ConvertArgs;
use crate::{config, convert};

/// Run the `convert` subcommand: resolve the anniversary over the year
/// window and print the occurrence table.
pub fn run(args: ConvertArgs) -> Result<()> {
    let cfg = config::load(&args.config)?;
    let resolve_cfg = convert::build_resolve_config(&cfg.resolve)?;
    let today = convert::resolve_today(args.today.as_deref())?;
    let table = convert::load_table(args.table.as_ref().or(cfg.table.path.as_ref()))?;

    let anniversary = LunarAnniversary::new(args.title, args.month, args.day)?;
    info!(
        month = anniversary.month(),
        day = anniversary.day(),
        %today,
        "converting lunar anniversary"
    );

    let result = generate(&table, &anniversary, today, &resolve_cfg)?;
    if result.is_empty() {
        println!("해당 음력 날짜에 대한 양력 변환 데이터를 찾을 수 없습니다.");
        return Ok(());
    }

    print_result(&result);
    Ok(())
}

/// Formats a solar date in the reference-locale display form.
fn korean_date(date: CalendarDate) -> String {
    format!("{}년 {}월 {}일", date.year(), date.month(), date.day())
}

fn print_result(result: &ConversionResult) {
    let anniversary = result.anniversary();
    println!(
        "{} (음력 {}월 {}일)",
        anniversary.title(),
        anniversary.month(),
        anniversary.day()
    );
    println!();
    println!("연도\t양력 날짜\t요일\tD-Day");
    for occ in result.occurrences() {
        println!(
            "{}\t{}\t{}\t{}",
            occ.year(),
            korean_date(occ.solar_date()),
            occ.weekday(),
            occ.countdown()
        );
    }
    println!();
    println!(
        "총 {}개의 향후 양력 날짜를 표시했습니다. (오늘 이후 날짜만 포함)",
        result.len()
    );
}
