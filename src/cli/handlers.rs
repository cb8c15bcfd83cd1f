use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;

use bible_year::calendar::{self, parse_date};
use bible_year::config::AppConfig;
use bible_year::plan::{self, PlanCache};
use bible_year::reading::{self, ReadingReport, report_from_plan};
use bible_year::utils::format::{format_percent, progress_bar};
use bible_year::models::Testament;
use bible_year::{Catalog, DailyTargets, PlanError};

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;196;160;68m";

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn targets(config: &AppConfig) -> Result<DailyTargets> {
    config.plan.targets().context("Invalid [plan] targets in config")
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_report(report: &ReadingReport, title: &str) {
    println!();
    println_colored!(
        GOLD,
        "  {} — {} ({})",
        title,
        report.date.format("%A, %B %-d, %Y"),
        report.version
    );
    println!();
    println_colored!(BOLD, "  {}", report.label);
    println_colored!(DIM, "  {} chapters", report.chapters_count);
    println!();

    let meta = &report.meta;
    println!(
        "  Progress:  {}  {}  (chapters {}–{} of {})",
        progress_bar(meta.chapter_index_end, meta.total_chapters, 24),
        format_percent(report.progress_ratio()),
        meta.chapter_index_start,
        meta.chapter_index_end,
        meta.total_chapters
    );
    if meta.remaining_chapters_after_today == 0 {
        println_colored!(GREEN, "  ✓ Last reading of the year");
    } else {
        println_colored!(
            DIM,
            "  {} chapters left over {} days",
            meta.remaining_chapters_after_today,
            meta.days_left_after_today
        );
    }
    println!();
}

// ─── Today / Reading ─────────────────────────────────────────────────────────

pub fn handle_today(config: &AppConfig, json: bool) -> Result<()> {
    let date = today();
    show_reading(config, date.year(), date, "Today's Reading", json)
}

pub fn handle_reading(
    config: &AppConfig,
    date_str: &str,
    year: Option<i32>,
    json: bool,
) -> Result<()> {
    let date = parse_date(date_str)?;
    let year = year.unwrap_or(date.year());
    show_reading(config, year, date, "Reading", json)
}

fn show_reading(
    config: &AppConfig,
    year: i32,
    date: NaiveDate,
    title: &str,
    json: bool,
) -> Result<()> {
    let report = reading::reading_for_date(
        year,
        date,
        Catalog::canonical(),
        &targets(config)?,
        &config.plan.version,
    )?;
    if json {
        return print_json(&report);
    }
    print_report(&report, title);
    Ok(())
}

// ─── Week ────────────────────────────────────────────────────────────────────

pub fn handle_week(
    config: &AppConfig,
    date_str: Option<&str>,
    days: Option<u32>,
    json: bool,
) -> Result<()> {
    let start = match date_str {
        Some(s) => parse_date(s)?,
        None => today(),
    };
    let days = days.unwrap_or(config.display.week_days);
    let dates = calendar::date_span(start, days)?;
    let targets = targets(config)?;
    let catalog = Catalog::canonical();
    let cache = PlanCache::new(catalog.len());

    let mut reports = Vec::with_capacity(dates.len());
    for date in dates {
        let plan = cache.get_or_generate(date.year(), &targets)?;
        reports.push(report_from_plan(&plan, catalog, date, &config.plan.version)?);
    }

    if json {
        return print_json(&reports);
    }

    println!();
    println_colored!(GOLD, "  Next {} days", days);
    println!();
    for report in &reports {
        let line = format!(
            "  {}  {:<32} {:>2}",
            report.date.format("%a %Y-%m-%d"),
            report.label,
            report.chapters_count
        );
        if report.date == today() {
            println_colored!(BOLD, "{}", line);
        } else {
            println!("{}", line);
        }
    }
    println!();
    Ok(())
}

// ─── Plan ────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct PlanSummary {
    year: i32,
    days: usize,
    chapters: usize,
    min_per_day: usize,
    max_per_day: usize,
    readings: Vec<ReadingReport>,
}

pub fn handle_plan(
    config: &AppConfig,
    year: Option<i32>,
    month: Option<u32>,
    json: bool,
) -> Result<()> {
    let year = year.unwrap_or(today().year());
    let catalog = Catalog::canonical();
    let plan = plan::generate_year(year, catalog.len(), &targets(config)?)?;

    let (from, to) = match month {
        Some(m) => calendar::month_bounds(year, m)?,
        None => calendar::year_bounds(year)?,
    };
    let readings = plan
        .range(from, to)
        .map(|a| report_from_plan(&plan, catalog, a.date, &config.plan.version))
        .collect::<Result<Vec<_>, _>>()?;

    let counts = || plan.allocations.iter().map(|a| a.len());
    let summary = PlanSummary {
        year,
        days: plan.allocations.len(),
        chapters: plan.total_units,
        min_per_day: counts().min().unwrap_or(0),
        max_per_day: counts().max().unwrap_or(0),
        readings,
    };

    if json {
        return print_json(&summary);
    }

    println!();
    println_colored!(
        GOLD,
        "  {} Reading Plan — {} chapters over {} days",
        year,
        summary.chapters,
        summary.days
    );
    println_colored!(
        DIM,
        "  {} to {} chapters per day{}",
        summary.min_per_day,
        summary.max_per_day,
        if calendar::is_leap_year(year) { "  ·  leap year" } else { "" }
    );
    if let Some(start) = catalog.testament_start(Testament::New) {
        if let Some(day) = plan.allocations.iter().find(|a| a.range().contains(&start)) {
            println_colored!(DIM, "  {} begins {}", Testament::New, day.date.format("%B %-d"));
        }
    }
    println!();
    for report in &summary.readings {
        println!(
            "  {:>3}  {}  {:<32} {:>2}",
            report.date.ordinal(),
            report.date.format("%a %b %d"),
            report.label,
            report.chapters_count
        );
    }
    println!();
    Ok(())
}

// ─── Catch-up ────────────────────────────────────────────────────────────────

pub fn handle_catch_up(
    config: &AppConfig,
    read: usize,
    date_str: Option<&str>,
    json: bool,
) -> Result<()> {
    let date = match date_str {
        Some(s) => parse_date(s)?,
        None => today(),
    };
    let catalog = Catalog::canonical();
    let targets = targets(config)?;
    let report =
        match reading::catch_up_reading(date, read, catalog, &targets, &config.plan.version) {
            Err(PlanError::PlanComplete { total }) if !json => {
                println!();
                println_colored!(GREEN, "  ✓ All {} chapters read — nothing left this year", total);
                println!();
                return Ok(());
            }
            other => other?,
        };

    if json {
        return print_json(&report);
    }

    let scheduled = plan::generate_year(date.year(), catalog.len(), &targets)?;
    let expected = scheduled
        .allocation_for(date)
        .map(|a| a.start_flat_index)
        .unwrap_or(0);

    print_report(&report, "Catch-up Reading");
    if read < expected {
        println_colored!(AMBER, "  {} chapters behind the yearly plan", expected - read);
    } else if read > expected {
        println_colored!(GREEN, "  {} chapters ahead of the yearly plan", read - expected);
    } else {
        println_colored!(GREEN, "  ✓ Right on schedule");
    }
    println!();
    Ok(())
}

// ─── Config ──────────────────────────────────────────────────────────────────

pub fn handle_config(config: &AppConfig, init: bool, json: bool) -> Result<()> {
    if init {
        let path = config.save()?;
        println_colored!(GREEN, "  ✓ Wrote {}", path.display());
    }
    if json {
        return print_json(config);
    }

    let path = AppConfig::config_path()?;
    println!();
    println_colored!(GOLD, "  Configuration");
    println_colored!(DIM, "  {}", path.display());
    println!();
    println!("  Weekday target:  {}", config.plan.weekday_target);
    println!("  Weekend target:  {}", config.plan.weekend_target);
    println!("  Version:         {}", config.plan.version);
    println!("  Week view days:  {}", config.display.week_days);
    println!();
    Ok(())
}
