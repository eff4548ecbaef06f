//! WMO weather condition code vocabulary.
//!
//! Translates the integer condition codes carried in forecast payloads
//! into descriptive text. The table is total: codes outside the
//! vocabulary resolve to `"Unknown"` so a forecast day is always
//! displayable.

/// Describes a WMO weather condition code.
#[must_use]
pub const fn describe(code: i32) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        56 => "Light freezing drizzle",
        57 => "Dense freezing drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 => "Light freezing rain",
        67 => "Heavy freezing rain",
        71 => "Slight snow fall",
        73 => "Moderate snow fall",
        75 => "Heavy snow fall",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        _ => "Unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN_CODES: [i32; 28] = [
        0, 1, 2, 3, 45, 48, 51, 53, 55, 56, 57, 61, 63, 65, 66, 67, 71, 73, 75, 77, 80, 81,
        82, 85, 86, 95, 96, 99,
    ];

    #[test]
    fn known_codes_have_descriptions() {
        for code in KNOWN_CODES {
            let text = describe(code);
            assert!(!text.is_empty());
            assert_ne!(text, "Unknown", "code {code} should be in the vocabulary");
        }
    }

    #[test]
    fn unknown_codes_resolve_to_unknown() {
        for code in [-1, 4, 42, 50, 60, 78, 83, 94, 100, i32::MIN, i32::MAX] {
            assert_eq!(describe(code), "Unknown");
        }
    }

    #[test]
    fn spot_checks() {
        assert_eq!(describe(0), "Clear sky");
        assert_eq!(describe(61), "Slight rain");
        assert_eq!(describe(95), "Thunderstorm");
    }
}
