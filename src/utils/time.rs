/// Current UNIX time in whole seconds (browser clock)
pub fn unix_timestamp_now() -> u64 {
    millis_to_unix_seconds(js_sys::Date::now())
}

pub fn millis_to_unix_seconds(millis: f64) -> u64 {
    if millis.is_finite() && millis > 0.0 {
        (millis / 1000.0).floor() as u64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millis_are_floored() {
        assert_eq!(millis_to_unix_seconds(1_729_900_800_999.0), 1_729_900_800);
        assert_eq!(millis_to_unix_seconds(999.0), 0);
    }

    #[test]
    fn test_bad_clock_values_give_zero() {
        assert_eq!(millis_to_unix_seconds(f64::NAN), 0);
        assert_eq!(millis_to_unix_seconds(-5.0), 0);
    }
}
