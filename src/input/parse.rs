//! Field parsers. Each returns the `FieldError` whose message is shown when
//! the answer is rejected.

use crate::domain::Rating;
use crate::error::FieldError;

fn positive_int(answer: &str, err: FieldError) -> Result<u32, FieldError> {
    match answer.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(err),
    }
}

pub fn parse_days(answer: &str) -> Result<u32, FieldError> {
    positive_int(answer, FieldError::Days)
}

pub fn parse_topic_count(answer: &str) -> Result<u32, FieldError> {
    positive_int(answer, FieldError::TopicCount)
}

pub fn parse_hours(answer: &str) -> Result<f64, FieldError> {
    match answer.trim().parse::<f64>() {
        Ok(h) if h.is_finite() && h > 0.0 => Ok(h),
        _ => Err(FieldError::Hours),
    }
}

pub fn parse_rating(answer: &str) -> Result<Rating, FieldError> {
    let value = answer.trim().parse::<u8>().map_err(|_| FieldError::Rating)?;
    Rating::new(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_days() {
        assert_eq!(parse_days("7"), Ok(7));
        assert_eq!(parse_days("  12 \t"), Ok(12));
        assert_eq!(parse_days("0"), Err(FieldError::Days));
        assert_eq!(parse_days("-3"), Err(FieldError::Days));
        assert_eq!(parse_days("2.5"), Err(FieldError::Days));
        assert_eq!(parse_days(""), Err(FieldError::Days));
        assert_eq!(parse_days("five"), Err(FieldError::Days));
    }

    #[test]
    fn test_parse_topic_count() {
        assert_eq!(parse_topic_count("3"), Ok(3));
        assert_eq!(parse_topic_count("0"), Err(FieldError::TopicCount));
    }

    #[test]
    fn test_parse_hours() {
        assert_eq!(parse_hours("2.5"), Ok(2.5));
        assert_eq!(parse_hours("4"), Ok(4.0));
        assert_eq!(parse_hours(" .5 "), Ok(0.5));
        assert_eq!(parse_hours("0"), Err(FieldError::Hours));
        assert_eq!(parse_hours("-1.5"), Err(FieldError::Hours));
        assert_eq!(parse_hours("inf"), Err(FieldError::Hours));
        assert_eq!(parse_hours("NaN"), Err(FieldError::Hours));
        assert_eq!(parse_hours("lots"), Err(FieldError::Hours));
    }

    #[test]
    fn test_parse_rating() {
        assert_eq!(parse_rating("1").map(Rating::value), Ok(1));
        assert_eq!(parse_rating(" 5 ").map(Rating::value), Ok(5));
        assert_eq!(parse_rating("0"), Err(FieldError::Rating));
        assert_eq!(parse_rating("6"), Err(FieldError::Rating));
        assert_eq!(parse_rating("300"), Err(FieldError::Rating));
        assert_eq!(parse_rating("3.0"), Err(FieldError::Rating));
        assert_eq!(parse_rating("high"), Err(FieldError::Rating));
    }
}
