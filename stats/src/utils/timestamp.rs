use chrono::NaiveDateTime;
use core::fmt;
use serde::{Serialize, Serializer};

/// Directory-name pattern for a single run: `YYYY-MM-DD-HH-mm-ss`.
pub const RUN_FOLDER_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

pub const ISO_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A struct that represents the timestamp of a single topic run.
///
/// The value is naive on purpose: run folders are encoded and decoded with
/// the same clock representation, without any timezone conversion.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct RunTimestamp(NaiveDateTime);

impl RunTimestamp {
    /// Renders the timestamp as a fixed-width run folder name.
    pub fn as_folder_name(&self) -> String {
        self.0.format(RUN_FOLDER_FORMAT).to_string()
    }

    /// Decodes a run folder name into a timestamp.
    ///
    /// Returns `None` for any name that does not have the strict
    /// `YYYY-MM-DD-HH-mm-ss` shape or does not denote a valid calendar
    /// date, so history resolution can skip it silently.
    pub fn from_folder_name(name: &str) -> Option<RunTimestamp> {
        if !Self::is_folder_name_candidate(name) {
            return None;
        }

        NaiveDateTime::parse_from_str(name, RUN_FOLDER_FORMAT)
            .ok()
            .map(RunTimestamp)
    }

    /// The shape check alone: four digits followed by five `-`-separated
    /// two-digit groups, equivalent to `^\d{4}(-\d{2}){5}$`.
    pub fn is_folder_name_candidate(name: &str) -> bool {
        if name.len() != 19 {
            return false;
        }

        name.bytes().enumerate().all(|(index, byte)| match index {
            4 | 7 | 10 | 13 | 16 => byte == b'-',
            _ => byte.is_ascii_digit(),
        })
    }
}

impl From<NaiveDateTime> for RunTimestamp {
    fn from(timestamp: NaiveDateTime) -> Self {
        RunTimestamp(timestamp)
    }
}

impl fmt::Display for RunTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_TIME_FORMAT))
    }
}

impl Serialize for RunTimestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn timestamp(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> RunTimestamp {
        RunTimestamp::from(
            NaiveDate::from_ymd_opt(y, mo, d)
                .unwrap()
                .and_hms_opt(h, mi, s)
                .unwrap(),
        )
    }

    #[test]
    fn should_accept_strictly_shaped_folder_names() {
        assert!(RunTimestamp::is_folder_name_candidate("2014-05-01-05-43-00"));
        assert!(RunTimestamp::is_folder_name_candidate("9999-99-99-99-99-99"));
    }

    #[test]
    fn should_reject_folder_names_with_wrong_shape() {
        assert!(!RunTimestamp::is_folder_name_candidate("2014-5-1-05-43-00"));
        assert!(!RunTimestamp::is_folder_name_candidate("2014-05-01-05-43-00-extra"));
        assert!(!RunTimestamp::is_folder_name_candidate("2014-05-01-05-43"));
        assert!(!RunTimestamp::is_folder_name_candidate("2014_05_01_05_43_00"));
        assert!(!RunTimestamp::is_folder_name_candidate("yyyy-MM-dd-HH-mm-ss"));
        assert!(!RunTimestamp::is_folder_name_candidate(""));
    }

    #[test]
    fn should_decode_valid_folder_name() {
        let decoded = RunTimestamp::from_folder_name("2014-05-01-05-43-00");
        assert_eq!(decoded, Some(timestamp(2014, 5, 1, 5, 43, 0)));
    }

    #[test]
    fn should_not_decode_shape_valid_but_calendar_invalid_name() {
        assert_eq!(RunTimestamp::from_folder_name("9999-99-99-99-99-99"), None);
        assert_eq!(RunTimestamp::from_folder_name("2014-13-01-05-43-00"), None);
        assert_eq!(RunTimestamp::from_folder_name("2014-02-30-05-43-00"), None);
    }

    #[test]
    fn should_not_decode_wrongly_shaped_name() {
        assert_eq!(RunTimestamp::from_folder_name("2014-5-1-05-43-00"), None);
        assert_eq!(RunTimestamp::from_folder_name("offsets.csv"), None);
    }

    #[test]
    fn should_round_trip_through_folder_name() {
        let ts = timestamp(2023, 9, 17, 16, 34, 6);
        assert_eq!(ts.as_folder_name(), "2023-09-17-16-34-06");
        assert_eq!(RunTimestamp::from_folder_name(&ts.as_folder_name()), Some(ts));
    }

    #[test]
    fn should_order_chronologically() {
        let earlier = timestamp(2014, 4, 30, 23, 59, 59);
        let later = timestamp(2014, 5, 1, 0, 0, 0);
        assert!(earlier < later);
    }

    #[test]
    fn should_serialize_as_iso_string() {
        let ts = timestamp(2014, 5, 1, 5, 43, 0);
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "\"2014-05-01T05:43:00\"");
    }
}
