//! Append-only JSONL analytics log.
//!
//! One file per session per local day: `analytics/2025-07-01_main.jsonl`.
//! A sink left open past midnight moves on to the next day's file with the
//! first event of that day.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use parking_lot::Mutex;

use super::event::{AnalyticsEvent, AnalyticsRecord};
use super::AnalyticsSink;
use crate::error::{LandingError, LandingResult};

/// The file currently appended to and the day it belongs to.
struct DayFile {
    date: NaiveDate,
    writer: BufWriter<File>,
}

/// Analytics sink writing one JSON line per event.
pub struct JsonlAnalytics {
    session: String,
    dir: PathBuf,
    current: Mutex<DayFile>,
}

impl JsonlAnalytics {
    /// Open (or create) today's log for `session` under `dir`.
    pub fn new(dir: impl AsRef<Path>, session: impl Into<String>) -> std::io::Result<Self> {
        let session = session.into();
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;

        let date = today();
        let writer = open_day(&dir, &session, date)?;

        Ok(Self {
            session,
            dir,
            current: Mutex::new(DayFile { date, writer }),
        })
    }

    pub fn session(&self) -> &str {
        &self.session
    }

    /// Path of the file the next event of today goes to.
    pub fn path(&self) -> PathBuf {
        day_path(&self.dir, &self.session, self.current.lock().date)
    }

    /// Append a record to today's file and flush it.
    pub fn write(&self, record: &AnalyticsRecord) -> LandingResult<()> {
        self.write_on(today(), record)
    }

    fn write_on(&self, date: NaiveDate, record: &AnalyticsRecord) -> LandingResult<()> {
        let json = record
            .to_json_line()
            .map_err(|e| LandingError::Analytics(e.to_string()))?;

        let mut current = self.current.lock();
        if current.date != date {
            current.writer.flush()?;
            current.writer = open_day(&self.dir, &self.session, date)?;
            current.date = date;
            tracing::debug!(%date, "Rolled analytics log over to a new day");
        }

        writeln!(current.writer, "{}", json)?;
        current.writer.flush()?;
        Ok(())
    }
}

impl AnalyticsSink for JsonlAnalytics {
    fn log_event(&self, event: AnalyticsEvent) -> LandingResult<()> {
        self.write(&AnalyticsRecord::new(&self.session, event))
    }
}

impl Drop for JsonlAnalytics {
    fn drop(&mut self) {
        let _ = self.current.lock().writer.flush();
    }
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn day_path(dir: &Path, session: &str, date: NaiveDate) -> PathBuf {
    dir.join(format!("{}_{}.jsonl", date.format("%Y-%m-%d"), session))
}

fn open_day(dir: &Path, session: &str, date: NaiveDate) -> std::io::Result<BufWriter<File>> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(day_path(dir, session, date))?;
    Ok(BufWriter::new(file))
}

/// Read every record from the `.jsonl` files in `dir`, oldest first.
///
/// Lines that fail to parse are skipped.
pub fn read_records(dir: impl AsRef<Path>) -> std::io::Result<Vec<AnalyticsRecord>> {
    let dir = dir.as_ref();
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut records = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "jsonl") {
            let reader = BufReader::new(File::open(&path)?);
            for line in reader.lines() {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                match AnalyticsRecord::from_json_line(&line) {
                    Ok(record) => records.push(record),
                    Err(e) => tracing::debug!(path = %path.display(), "Skipping bad analytics line: {}", e),
                }
            }
        }
    }

    records.sort_by(|a, b| a.ts.cmp(&b.ts));
    Ok(records)
}
