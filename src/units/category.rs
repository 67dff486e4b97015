use crate::convert::error::ConvertError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A conversion domain with its own unit set and base unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Distance,
    Mass,
    Temperature,
    Time,
}

const ALL_CATEGORIES: [Category; 4] = [
    Category::Distance,
    Category::Mass,
    Category::Temperature,
    Category::Time,
];

impl Category {
    /// All categories in display order
    pub fn all() -> &'static [Category] {
        &ALL_CATEGORIES
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Distance => "Distance",
            Category::Mass => "Mass",
            Category::Temperature => "Temperature",
            Category::Time => "Time",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .or_else(|| match wanted.to_ascii_lowercase().as_str() {
                "length" => Some(Category::Distance),
                "weight" => Some(Category::Mass),
                "temp" => Some(Category::Temperature),
                "duration" => Some(Category::Time),
                _ => None,
            })
            .ok_or_else(|| ConvertError::UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category_names() {
        assert_eq!("distance".parse::<Category>().unwrap(), Category::Distance);
        assert_eq!("Mass".parse::<Category>().unwrap(), Category::Mass);
        assert_eq!(" TEMPERATURE ".parse::<Category>().unwrap(), Category::Temperature);
        assert_eq!("duration".parse::<Category>().unwrap(), Category::Time);
        assert!(matches!(
            "volume".parse::<Category>(),
            Err(ConvertError::UnknownCategory(name)) if name == "volume"
        ));
    }

    #[test]
    fn test_display_order() {
        let names: Vec<String> = Category::all().iter().map(|c| c.to_string()).collect();
        assert_eq!(names, vec!["Distance", "Mass", "Temperature", "Time"]);
    }
}
