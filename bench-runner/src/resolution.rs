use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::error::{Result, RunnerError};

/// Viewer window size, written `WIDTHxHEIGHT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Resolution {
    type Err = RunnerError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || RunnerError::InvalidResolution(s.to_string());

        let (width, height) = s.trim().split_once('x').ok_or_else(invalid)?;
        let width: u32 = width.trim().parse().map_err(|_| invalid())?;
        let height: u32 = height.trim().parse().map_err(|_| invalid())?;
        if width == 0 || height == 0 {
            return Err(invalid());
        }

        Ok(Self { width, height })
    }
}

/// Parses a comma separated list such as `800x600, 1920x1080`.
///
/// Blank entries are skipped. The whole list is validated up front so a typo
/// fails before any viewer is launched.
pub fn parse_resolutions(list: &str) -> Result<Vec<Resolution>> {
    list.split(',')
        .filter(|entry| !entry.trim().is_empty())
        .map(str::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{Resolution, parse_resolutions};
    use crate::RunnerError;

    #[test]
    fn test_parse_single() {
        let res: Resolution = "1920x1080".parse().expect("valid resolution");
        assert_eq!(res, Resolution::new(1920, 1080));
        assert_eq!(res.to_string(), "1920x1080");
    }

    #[test]
    fn test_parse_list_with_spaces() {
        let list = parse_resolutions("800x600, 1920x1080 ,").expect("valid list");
        assert_eq!(list, vec![Resolution::new(800, 600), Resolution::new(1920, 1080)]);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["800", "800X600", "x600", "800x", "axb", "800x600x2", "0x600", "-1x600"] {
            let err = bad.parse::<Resolution>().unwrap_err();
            assert!(matches!(err, RunnerError::InvalidResolution(ref s) if s == bad), "{bad}");
        }
    }

    #[test]
    fn test_parse_list_stops_at_first_bad_entry() {
        assert!(parse_resolutions("800x600,1920-1080").is_err());
        assert!(parse_resolutions("").expect("empty list is fine").is_empty());
    }
}
