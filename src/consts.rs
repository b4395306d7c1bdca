/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// English month names, 1-indexed like `DAYS_IN_MONTH`
pub const MONTH_NAMES: [&str; 13] = [
    "",
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Length of an abbreviated month name ("Mar")
pub const SHORT_MONTH_LEN: usize = 3;

/// English weekday names, Sunday first
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Range separator (ISO 8601 extended format)
pub const RANGE_SEPARATOR: char = '/';
/// Marker for an open range bound (ISO 8601-2)
pub const OPEN_BOUND: &str = "..";

/// Shortest destination accepted on the trip form
pub const DEFAULT_DESTINATION_MIN_LEN: usize = 4;
/// Destination characters kept in the trip summary
pub const DEFAULT_DESTINATION_DISPLAY_LEN: usize = 14;

/// Selected-day background (lime-300)
pub const DEFAULT_MARK_COLOR: &str = "#bef264";
/// Selected-day text (zinc-900)
pub const DEFAULT_MARK_TEXT_COLOR: &str = "#18181b";

/// Last valid hour of the day for activities
pub const MAX_HOUR: u8 = 23;
/// Last valid minute of the hour
pub const MAX_MINUTE: u8 = 59;
