use serde::{Deserialize, Serialize};

/// Product line (coarse tier) governing default specs and pricing.
///
/// Parsing is an exact, case-sensitive match. Anything else is kept verbatim
/// as [`Line::Other`] and takes the fallback defaults of each product type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Line {
    Economic,
    #[default]
    Standard,
    Premium,
    Other(String),
}

impl Line {
    /// The three known lines, cheapest first.
    pub const KNOWN: [Line; 3] = [Line::Economic, Line::Standard, Line::Premium];

    pub fn parse(raw: &str) -> Self {
        match raw {
            "Economic" => Line::Economic,
            "Standard" => Line::Standard,
            "Premium" => Line::Premium,
            other => Line::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Line::Economic => "Economic",
            Line::Standard => "Standard",
            Line::Premium => "Premium",
            Line::Other(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Line::Other(_))
    }

    /// The two known lines other than this one, or `None` for unknown lines.
    pub fn alternatives(&self) -> Option<[Line; 2]> {
        match self {
            Line::Economic => Some([Line::Standard, Line::Premium]),
            Line::Standard => Some([Line::Economic, Line::Premium]),
            Line::Premium => Some([Line::Economic, Line::Standard]),
            Line::Other(_) => None,
        }
    }

    /// Look up a per-line value, falling back for unknown lines.
    pub(crate) fn pick<T>(&self, premium: T, standard: T, economic: T, fallback: T) -> T {
        match self {
            Line::Premium => premium,
            Line::Standard => standard,
            Line::Economic => economic,
            Line::Other(_) => fallback,
        }
    }
}

impl From<String> for Line {
    fn from(value: String) -> Self {
        Line::parse(&value)
    }
}

impl From<&str> for Line {
    fn from(value: &str) -> Self {
        Line::parse(value)
    }
}

impl From<Line> for String {
    fn from(value: Line) -> Self {
        match value {
            Line::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl core::fmt::Display for Line {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_exact_and_case_sensitive() {
        assert_eq!(Line::parse("Premium"), Line::Premium);
        assert_eq!(Line::parse("Economic"), Line::Economic);
        assert_eq!(Line::parse("premium"), Line::Other("premium".to_string()));
        assert_eq!(Line::parse(" Standard"), Line::Other(" Standard".to_string()));
    }

    #[test]
    fn alternatives_exclude_current_line() {
        for line in Line::KNOWN {
            let alts = line.alternatives().unwrap();
            assert!(!alts.contains(&line));
            assert!(alts.iter().all(Line::is_known));
        }
        assert!(Line::parse("Deluxe").alternatives().is_none());
    }

    #[test]
    fn unknown_lines_round_trip_verbatim() {
        let line = Line::parse("Deluxe");
        assert_eq!(line.to_string(), "Deluxe");
        assert_eq!(String::from(line), "Deluxe");
    }
}
