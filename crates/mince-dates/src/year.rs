use regex::Regex;
use std::sync::OnceLock;

const TWO_DIGIT_PIVOT: i32 = 69;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum YearParseError {
    #[error("`{0}` is not a two or four digit year")]
    Invalid(String),
    #[error("year {year} is below the minimum {minimum}")]
    BelowMinimum { year: i32, minimum: i32 },
    #[error("year {year} is above the maximum {maximum}")]
    AboveMaximum { year: i32, maximum: i32 },
}

fn year_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(?:(?P<full>[0-9]{4})|(?P<short>[0-9]{2}))$").expect("year pattern must compile"))
}

/// Converts `"1954"` or `"54"` into a year.
///
/// Two digit years map 00-68 to the 2000s and 69-99 to the 1900s unless `shift`
/// is given, in which case they land in `[shift, shift + 100)`. `gte` and `lte`
/// are inclusive bounds checked after the conversion.
pub fn string2year(
    value: &str,
    gte: Option<i32>,
    lte: Option<i32>,
    shift: Option<i32>,
) -> Result<i32, YearParseError> {
    let invalid = || YearParseError::Invalid(value.to_string());
    let captures = year_pattern().captures(value).ok_or_else(invalid)?;

    let year = if let Some(full) = captures.name("full") {
        let year = full.as_str().parse::<i32>().map_err(|_| invalid())?;
        if year == 0 {
            return Err(invalid());
        }
        year
    } else {
        let short = captures
            .name("short")
            .ok_or_else(invalid)?
            .as_str()
            .parse::<i32>()
            .map_err(|_| invalid())?;
        let year = if short < TWO_DIGIT_PIVOT { 2000 + short } else { 1900 + short };
        let year = match shift {
            Some(shift) => (year - shift).rem_euclid(100) + shift,
            None => year,
        };
        // A shift can land on year zero, which does not exist.
        if year == 0 {
            return Err(invalid());
        }
        year
    };

    if let Some(minimum) = gte {
        if year < minimum {
            return Err(YearParseError::BelowMinimum { year, minimum });
        }
    }
    if let Some(maximum) = lte {
        if year > maximum {
            return Err(YearParseError::AboveMaximum { year, maximum });
        }
    }
    Ok(year)
}

#[cfg(test)]
#[path = "year_test.rs"]
mod tests;
