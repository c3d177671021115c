use serde::{Deserialize, Serialize};

/// Layout direction of the surrounding locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    /// Physical CSS side for the logical "start" edge.
    pub fn start_side(&self) -> &'static str {
        match self {
            Direction::Ltr => "left",
            Direction::Rtl => "right",
        }
    }

    /// Physical CSS side for the logical "end" edge.
    pub fn end_side(&self) -> &'static str {
        match self {
            Direction::Ltr => "right",
            Direction::Rtl => "left",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sides_follow_direction() {
        assert_eq!(Direction::Ltr.start_side(), "left");
        assert_eq!(Direction::Ltr.end_side(), "right");
        assert_eq!(Direction::Rtl.start_side(), "right");
        assert_eq!(Direction::Rtl.end_side(), "left");
    }

    #[test]
    fn test_serde_codes() {
        assert_eq!(serde_json::to_string(&Direction::Rtl).unwrap(), "\"rtl\"");
        assert_eq!(serde_json::from_str::<Direction>("\"ltr\"").unwrap(), Direction::Ltr);
        assert!(serde_json::from_str::<Direction>("\"up\"").is_err());
    }
}
