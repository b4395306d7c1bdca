use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{DateRange, MarkingStyle, prelude::*};

/// How one calendar cell is decorated.
///
/// Serializes with the calendar widget's key names (`startingDay`, `textColor`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayMarking {
    pub selected:     bool,
    pub starting_day: bool,
    pub ending_day:   bool,
    pub color:        String,
    pub text_color:   String,
}

/// ISO date string to marking, ordered by date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkedDates(BTreeMap<String, DayMarking>);

impl MarkedDates {
    pub fn into_inner(self) -> BTreeMap<String, DayMarking> {
        self.0
    }
}

/// Calendar decorations for `range`.
///
/// Empty when nothing is selected. A start-only range marks just the start as
/// both first and last day. Otherwise every day from start to end gets one
/// entry; the first is `starting_day`, the last `ending_day`.
pub fn derive_marked_dates(range: &DateRange, style: &MarkingStyle) -> MarkedDates {
    let (Some(first), Some(last)) = (range.start(), range.end().or(range.start())) else {
        return MarkedDates::default();
    };

    let marks = range
        .days()
        .map(|day| {
            let marking = DayMarking {
                selected:     true,
                starting_day: day == first,
                ending_day:   day == last,
                color:        style.color.clone(),
                text_color:   style.text_color.clone(),
            };
            (day.to_string(), marking)
        })
        .collect();

    MarkedDates(marks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{complete, day, started};

    fn style() -> MarkingStyle {
        MarkingStyle::default()
    }

    #[test]
    fn test_empty_range_has_no_marks() {
        assert!(derive_marked_dates(&DateRange::empty(), &style()).is_empty());
    }

    #[test]
    fn test_start_only_marks_single_edge_day() {
        let marks = derive_marked_dates(&started(day(2024, 3, 12)), &style());
        assert_eq!(marks.len(), 1);

        let mark = &marks["2024-03-12"];
        assert!(mark.selected);
        assert!(mark.starting_day);
        assert!(mark.ending_day);
    }

    #[test]
    fn test_complete_range_marks_every_day() {
        let marks = derive_marked_dates(&complete(day(2024, 3, 12), day(2024, 3, 15)), &style());

        let keys: Vec<&str> = marks.keys().map(String::as_str).collect();
        assert_eq!(keys, ["2024-03-12", "2024-03-13", "2024-03-14", "2024-03-15"]);

        assert!(marks["2024-03-12"].starting_day);
        assert!(!marks["2024-03-12"].ending_day);
        for interior in ["2024-03-13", "2024-03-14"] {
            let mark = &marks[interior];
            assert!(mark.selected, "{interior} selected");
            assert!(!mark.starting_day, "{interior} not start");
            assert!(!mark.ending_day, "{interior} not end");
        }
        assert!(!marks["2024-03-15"].starting_day);
        assert!(marks["2024-03-15"].ending_day);
    }

    #[test]
    fn test_single_day_range() {
        let marks = derive_marked_dates(&complete(day(2024, 3, 12), day(2024, 3, 12)), &style());
        assert_eq!(marks.len(), 1);
        assert!(marks["2024-03-12"].starting_day && marks["2024-03-12"].ending_day);
    }

    #[test]
    fn test_entry_count_matches_span() {
        struct TestCase {
            start:    (u16, u8, u8),
            end:      (u16, u8, u8),
            expected: usize,
        }

        let cases = [
            TestCase {
                start:    (2024, 1, 30),
                end:      (2024, 2, 2),
                expected: 4,
            },
            TestCase {
                start:    (2024, 2, 28),
                end:      (2024, 3, 1),
                expected: 3,
            },
            TestCase {
                start:    (2023, 12, 25),
                end:      (2024, 1, 5),
                expected: 12,
            },
            TestCase {
                start:    (2024, 1, 1),
                end:      (2024, 12, 31),
                expected: 366,
            },
        ];

        for case in &cases {
            let range = complete(
                day(case.start.0, case.start.1, case.start.2),
                day(case.end.0, case.end.1, case.end.2),
            );
            let marks = derive_marked_dates(&range, &style());
            assert_eq!(marks.len(), case.expected, "{range}");
            assert_eq!(marks.values().filter(|m| m.starting_day).count(), 1);
            assert_eq!(marks.values().filter(|m| m.ending_day).count(), 1);
        }
    }

    #[test]
    fn test_style_is_applied() {
        let custom = MarkingStyle {
            color:      "#000000".to_owned(),
            text_color: "#ffffff".to_owned(),
        };
        let marks = derive_marked_dates(&complete(day(2024, 3, 12), day(2024, 3, 13)), &custom);
        assert!(marks.values().all(|m| m.color == "#000000" && m.text_color == "#ffffff"));
    }

    #[test]
    fn test_serializes_as_widget_map() {
        let marks = derive_marked_dates(&started(day(2024, 3, 12)), &style());
        let json = serde_json::to_value(&marks).expect("serialize marks");
        assert_eq!(
            json,
            serde_json::json!({
                "2024-03-12": {
                    "selected": true,
                    "startingDay": true,
                    "endingDay": true,
                    "color": "#bef264",
                    "textColor": "#18181b"
                }
            })
        );
    }
}
