use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OffsetError {
    #[error("boundary needs a region edge and a viewport edge, got {0:?}")]
    TokenCount(String),

    #[error("unknown edge keyword: {0:?}")]
    UnknownEdge(String),

    #[error("edge fraction out of range [0, 1]: {0}")]
    OutOfRange(f64),
}

/// Where a region edge lines up with a viewport edge.
///
/// Both fields are fractions measured from the top: `0.0` is the start edge,
/// `0.5` the center and `1.0` the end edge. `"start end"` therefore means
/// "the region's top meets the viewport's bottom".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundary {
    pub region: f64,
    pub viewport: f64,
}

impl Boundary {
    pub const fn new(region: f64, viewport: f64) -> Self {
        Self { region, viewport }
    }

    /// Region top (in viewport coordinates) at which this boundary is met.
    pub fn aligned_top(&self, height: f64, viewport_height: f64) -> f64 {
        self.viewport * viewport_height - self.region * height
    }
}

fn parse_edge(token: &str) -> Result<f64, OffsetError> {
    let fraction = match token {
        "start" => 0.0,
        "center" => 0.5,
        "end" => 1.0,
        _ => {
            let parsed = match token.strip_suffix('%') {
                Some(percent) => percent.parse::<f64>().map(|p| p / 100.0),
                None => token.parse::<f64>(),
            };
            parsed.map_err(|_| OffsetError::UnknownEdge(token.to_string()))?
        }
    };

    if !(0.0..=1.0).contains(&fraction) {
        return Err(OffsetError::OutOfRange(fraction));
    }
    Ok(fraction)
}

impl FromStr for Boundary {
    type Err = OffsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        match tokens.as_slice() {
            [region, viewport] => Ok(Boundary::new(parse_edge(region)?, parse_edge(viewport)?)),
            _ => Err(OffsetError::TokenCount(s.to_string())),
        }
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.region, self.viewport)
    }
}

/// The band of scrolling a progress value is measured across.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollOffset {
    pub entry: Boundary,
    pub exit: Boundary,
}

impl ScrollOffset {
    pub fn parse(entry: &str, exit: &str) -> Result<Self, OffsetError> {
        Ok(Self {
            entry: entry.parse()?,
            exit: exit.parse()?,
        })
    }
}

impl Default for ScrollOffset {
    // "start end" -> "end start": the whole trip through the viewport
    fn default() -> Self {
        Self {
            entry: Boundary::new(0.0, 1.0),
            exit: Boundary::new(1.0, 0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_keywords() {
        assert_eq!("start end".parse::<Boundary>(), Ok(Boundary::new(0.0, 1.0)));
        assert_eq!("center  start".parse::<Boundary>(), Ok(Boundary::new(0.5, 0.0)));
    }

    #[test]
    fn parses_numbers_and_percentages() {
        assert_eq!("0.25 75%".parse::<Boundary>(), Ok(Boundary::new(0.25, 0.75)));
        assert_eq!("100% 0".parse::<Boundary>(), Ok(Boundary::new(1.0, 0.0)));
    }

    #[test]
    fn default_matches_keyword_form() {
        assert_eq!(
            ScrollOffset::parse("start end", "end start"),
            Ok(ScrollOffset::default())
        );
    }

    #[test]
    fn rejects_malformed_boundaries() {
        assert_eq!(
            "start".parse::<Boundary>(),
            Err(OffsetError::TokenCount("start".to_string()))
        );
        assert_eq!(
            "start end center".parse::<Boundary>(),
            Err(OffsetError::TokenCount("start end center".to_string()))
        );
        assert_eq!(
            "top end".parse::<Boundary>(),
            Err(OffsetError::UnknownEdge("top".to_string()))
        );
        assert_eq!("start 1.5".parse::<Boundary>(), Err(OffsetError::OutOfRange(1.5)));
        assert_eq!("-10% end".parse::<Boundary>(), Err(OffsetError::OutOfRange(-0.1)));
    }

    #[test]
    fn aligned_top_for_default_band() {
        let offset = ScrollOffset::default();
        assert_eq!(offset.entry.aligned_top(300.0, 800.0), 800.0);
        assert_eq!(offset.exit.aligned_top(300.0, 800.0), -300.0);
    }
}
