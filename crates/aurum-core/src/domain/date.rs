use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::ValidationError;

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// ISO (`YYYY-MM-DD`) calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(Date);

impl CalendarDate {
    pub fn today_utc() -> Self {
        Self(OffsetDateTime::now_utc().date())
    }

    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        Date::parse(input.trim(), ISO_DATE)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate {
                value: input.to_owned(),
            })
    }

    pub fn into_inner(self) -> Date {
        self.0
    }

    pub fn format_iso(self) -> String {
        self.0
            .format(ISO_DATE)
            .expect("CalendarDate must be ISO formattable")
    }
}

impl From<Date> for CalendarDate {
    fn from(value: Date) -> Self {
        Self(value)
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_iso())
    }
}

impl Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_iso())
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_date() {
        let parsed = CalendarDate::parse("2024-01-02").expect("must parse");
        assert_eq!(parsed.format_iso(), "2024-01-02");
    }

    #[test]
    fn rejects_non_iso_date() {
        let err = CalendarDate::parse("02-01-2024").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidDate { .. }));
    }

    #[test]
    fn rejects_out_of_range_date() {
        let err = CalendarDate::parse("2024-13-40").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidDate { .. }));
    }

    #[test]
    fn serde_round_trips_as_iso_string() {
        let date = CalendarDate::parse("2024-03-15").expect("must parse");
        let json = serde_json::to_string(&date).expect("must serialize");
        assert_eq!(json, "\"2024-03-15\"");
        let back: CalendarDate = serde_json::from_str(&json).expect("must deserialize");
        assert_eq!(back, date);
    }
}
