//! Time-of-day parsing for bets and final answers.
//!
//! Every guess and every final answer is a wall-clock time written as `HH:MM`
//! in 24-hour format. Parsing is all-or-nothing: a single malformed token
//! rejects the whole batch so a round never records a partial bet.

use chrono::NaiveTime;
use log::debug;

/// Format used to read and render times.
const TIME_FORMAT: &str = "%H:%M";

/// Error returned when a token is not a valid `HH:MM` time.
#[derive(Debug, PartialEq, Eq)]
pub struct TimeParseError {
    /// The first token that could not be read
    pub token: String,
}

/// Parses a single `HH:MM` token.
///
/// Hours and minutes must both be written with two digits, so `9:05` and
/// `09:5` are rejected while `09:05` is accepted.
///
/// # Examples
///
/// ```ignore
/// let time = parse_time("10:15").unwrap();
/// assert_eq!(format_time(&time), "10:15");
/// ```
pub fn parse_time(token: &str) -> Result<NaiveTime, TimeParseError> {
    let error = || TimeParseError {
        token: token.to_owned(),
    };

    if token.len() != 5 || token.as_bytes()[2] != b':' {
        return Err(error());
    }

    NaiveTime::parse_from_str(token, TIME_FORMAT).map_err(|_| error())
}

/// Parses every token into a time, failing on the first invalid one.
///
/// # Arguments
///
/// * `tokens` - The raw time tokens, in submission order
///
/// # Returns
///
/// * `Ok(Vec<NaiveTime>)` - One time per token, order preserved
/// * `Err(TimeParseError)` - The first token that is not a valid time;
///   no partial result is returned
pub fn parse_times<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<NaiveTime>, TimeParseError> {
    let times = tokens
        .iter()
        .map(|token| parse_time(token.as_ref()))
        .collect::<Result<Vec<NaiveTime>, TimeParseError>>();

    if let Err(e) = &times {
        debug!("unable to parse time token {:?}", e.token);
    }

    times
}

/// Renders a time as `HH:MM`.
pub fn format_time(time: &NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Renders a sequence of times as a space separated list.
pub fn format_times(times: &[NaiveTime]) -> String {
    times
        .iter()
        .map(format_time)
        .collect::<Vec<String>>()
        .join(" ")
}
