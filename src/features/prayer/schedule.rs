//! Daily schedule records, feed normalization and the generated fallback

use anyhow::{anyhow, Result};
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Utc, Weekday};
use serde_json::{Map, Value};

/// Western Indonesia Time, UTC+7
pub const WIB_OFFSET_SECS: i32 = 7 * 3600;

const DATE_KEYS: &[&str] = &["date", "tanggal"];
const HIJRI_KEYS: &[&str] = &["hijri", "tanggal_hijriah", "hijriah"];
const IMSAK_KEYS: &[&str] = &["imsak", "imsa", "imask", "imsyak"];
const SUBUH_KEYS: &[&str] = &["subuh", "fajr", "shubuh", "fajar"];
const TERBIT_KEYS: &[&str] = &["terbit", "sunrise", "syuruq", "syuruk"];
const DHUHA_KEYS: &[&str] = &["dhuha", "duha"];
const DZUHUR_KEYS: &[&str] = &["dzuhur", "dhuhr", "zuhur", "dhuhur"];
const ASHAR_KEYS: &[&str] = &["ashar", "asr", "ashr"];
const MAGHRIB_KEYS: &[&str] = &["maghrib", "magrib"];
const ISYA_KEYS: &[&str] = &["isya", "isha"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySchedule {
    /// `YYYY-MM-DD`
    pub date: String,
    pub hijri: Option<String>,
    pub imsak: String,
    pub subuh: String,
    pub terbit: String,
    pub dhuha: String,
    pub dzuhur: String,
    pub ashar: String,
    pub maghrib: String,
    pub isya: String,
}

impl DaySchedule {
    /// Labelled times in chronological order
    pub fn times(&self) -> [(&'static str, &str); 8] {
        [
            ("🌙 Imsak", &self.imsak),
            ("🌅 Subuh", &self.subuh),
            ("🌞 Terbit", &self.terbit),
            ("🌤️ Dhuha", &self.dhuha),
            ("☀️ Dzuhur", &self.dzuhur),
            ("🌇 Ashar", &self.ashar),
            ("🌆 Maghrib", &self.maghrib),
            ("🌃 Isya", &self.isya),
        ]
    }
}

/// A month of days plus whether it was generated locally
#[derive(Debug, Clone)]
pub struct MonthSchedule {
    pub days: Vec<DaySchedule>,
    pub is_fallback: bool,
}

impl MonthSchedule {
    pub fn day(&self, date: NaiveDate) -> Option<&DaySchedule> {
        let key = date.format("%Y-%m-%d").to_string();
        self.days.iter().find(|d| d.date == key)
    }
}

fn first_of(entry: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match entry.get(*key) {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Map one feed entry onto the canonical field names. Entries without a date are dropped.
pub fn normalize_entry(entry: &Map<String, Value>) -> Option<DaySchedule> {
    let time = |keys: &[&str]| first_of(entry, keys).unwrap_or_else(|| "-".to_string());
    Some(DaySchedule {
        date: first_of(entry, DATE_KEYS)?,
        hijri: first_of(entry, HIJRI_KEYS),
        imsak: time(IMSAK_KEYS),
        subuh: time(SUBUH_KEYS),
        terbit: time(TERBIT_KEYS),
        dhuha: time(DHUHA_KEYS),
        dzuhur: time(DZUHUR_KEYS),
        ashar: time(ASHAR_KEYS),
        maghrib: time(MAGHRIB_KEYS),
        isya: time(ISYA_KEYS),
    })
}

/// Decode a monthly feed: an array of days, or an object wrapping one under `data`
pub fn parse_schedule(body: Value) -> Result<Vec<DaySchedule>> {
    let entries = match body {
        Value::Array(entries) => entries,
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(entries)) => entries,
            _ => return Err(anyhow!("Schedule object has no data array")),
        },
        _ => return Err(anyhow!("Schedule is not an array")),
    };

    Ok(entries
        .iter()
        .filter_map(Value::as_object)
        .filter_map(normalize_entry)
        .collect())
}

const BASE_TIMES: [(u32, u32); 8] = [
    (4, 23),
    (4, 33),
    (5, 48),
    (6, 15),
    (12, 0),
    (15, 16),
    (18, 5),
    (19, 15),
];

fn shifted(base: (u32, u32), offset: i32) -> String {
    let minute = (base.1 as i32 + offset).rem_euclid(60);
    format!("{:02}:{:02}", base.0, minute)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next.and_then(|d| d.pred_opt()).map(|d| d.day()).unwrap_or(30)
}

/// Approximate schedule for when the feed is unavailable, at most 30 days
pub fn fallback_schedule(year: i32, month: u32) -> Vec<DaySchedule> {
    let days = days_in_month(year, month).min(30);
    (0..days)
        .map(|i| {
            let offset = (i % 5) as i32 - 2;
            let t: Vec<String> = BASE_TIMES.iter().map(|base| shifted(*base, offset)).collect();
            DaySchedule {
                date: format!("{year:04}-{month:02}-{:02}", i + 1),
                hijri: Some("Ramadan 1445".to_string()),
                imsak: t[0].clone(),
                subuh: t[1].clone(),
                terbit: t[2].clone(),
                dhuha: t[3].clone(),
                dzuhur: t[4].clone(),
                ashar: t[5].clone(),
                maghrib: t[6].clone(),
                isya: t[7].clone(),
            }
        })
        .collect()
}

/// Today's date in WIB
pub fn wib_today(now: DateTime<Utc>) -> NaiveDate {
    FixedOffset::east_opt(WIB_OFFSET_SECS)
        .map(|wib| now.with_timezone(&wib).date_naive())
        .unwrap_or_else(|| now.date_naive())
}

pub fn day_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Senin",
        Weekday::Tue => "Selasa",
        Weekday::Wed => "Rabu",
        Weekday::Thu => "Kamis",
        Weekday::Fri => "Jumat",
        Weekday::Sat => "Sabtu",
        Weekday::Sun => "Minggu",
    }
}

const MONTHS: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni", "Juli", "Agustus", "September",
    "Oktober", "November", "Desember",
];

/// `11 Maret 2024`
pub fn format_date(date: NaiveDate) -> String {
    format!("{} {} {}", date.day(), MONTHS[date.month0() as usize], date.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_normalize_feed_aliases() {
        let body = json!([{
            "tanggal": "2024-03-11",
            "imsyak": "04:25",
            "shubuh": "04:35",
            "terbit": "05:50",
            "dhuha": "06:18",
            "dzuhur": "12:03",
            "ashr": "15:10",
            "magrib": "18:08",
            "isya": "19:17"
        }]);
        let days = parse_schedule(body).unwrap();
        assert_eq!(days.len(), 1);
        let day = &days[0];
        assert_eq!(day.date, "2024-03-11");
        assert_eq!(day.imsak, "04:25");
        assert_eq!(day.subuh, "04:35");
        assert_eq!(day.ashar, "15:10");
        assert_eq!(day.maghrib, "18:08");
        assert!(day.hijri.is_none());
    }

    #[test]
    fn test_missing_times_become_dash() {
        let entry = json!({"date": "2024-03-01", "fajr": "04:30"});
        let day = normalize_entry(entry.as_object().unwrap()).unwrap();
        assert_eq!(day.subuh, "04:30");
        assert_eq!(day.isya, "-");
    }

    #[test]
    fn test_entry_without_date_is_dropped() {
        let days = parse_schedule(json!([{"imsak": "04:20"}, "junk"])).unwrap();
        assert!(days.is_empty());
    }

    #[test]
    fn test_wrapped_and_invalid_payloads() {
        let wrapped = json!({"data": [{"date": "2024-03-01"}]});
        assert_eq!(parse_schedule(wrapped).unwrap().len(), 1);
        assert!(parse_schedule(json!({"status": "error"})).is_err());
        assert!(parse_schedule(json!(42)).is_err());
    }

    #[test]
    fn test_fallback_schedule_shape() {
        let days = fallback_schedule(2024, 3);
        assert_eq!(days.len(), 30);
        assert_eq!(days[0].date, "2024-03-01");
        // offset -2 on the first day, +2 on the fifth
        assert_eq!(days[0].imsak, "04:21");
        assert_eq!(days[4].imsak, "04:25");
        assert_eq!(days[2].dzuhur, "12:00");
        // minutes wrap within the hour
        assert_eq!(days[0].dzuhur, "12:58");
        assert_eq!(days[0].hijri.as_deref(), Some("Ramadan 1445"));
    }

    #[test]
    fn test_fallback_short_month() {
        assert_eq!(fallback_schedule(2023, 2).len(), 28);
        assert_eq!(fallback_schedule(2024, 2).len(), 29);
        assert_eq!(fallback_schedule(2024, 12).len(), 30);
    }

    #[test]
    fn test_wib_today_crosses_midnight() {
        let late_utc = Utc.with_ymd_and_hms(2024, 3, 10, 18, 30, 0).unwrap();
        assert_eq!(wib_today(late_utc), NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
        let early_utc = Utc.with_ymd_and_hms(2024, 3, 10, 10, 0, 0).unwrap();
        assert_eq!(wib_today(early_utc), NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
    }

    #[test]
    fn test_indonesian_dates() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        assert_eq!(day_name(date), "Senin");
        assert_eq!(format_date(date), "11 Maret 2024");
    }

    #[test]
    fn test_month_lookup() {
        let month = MonthSchedule {
            days: fallback_schedule(2024, 3),
            is_fallback: true,
        };
        let date = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        assert_eq!(month.day(date).unwrap().date, "2024-03-11");
        assert!(month.day(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()).is_none());
    }
}
