//! Menu categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The fixed set of menu categories, in tab order.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    Beverages,
    MainCourse,
    Desserts,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Beverages, Category::MainCourse, Category::Desserts];

    /// Wire name, e.g. `main_course`.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Beverages => "beverages",
            Category::MainCourse => "main_course",
            Category::Desserts => "desserts",
        }
    }

    /// Human label: the wire name with `_` shown as a space.
    pub fn label(self) -> String {
        self.as_str().replace('_', " ")
    }

    /// Next category in tab order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Category::Beverages => Category::MainCourse,
            Category::MainCourse => Category::Desserts,
            Category::Desserts => Category::Beverages,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Category::Beverages => Category::Desserts,
            Category::MainCourse => Category::Beverages,
            Category::Desserts => Category::MainCourse,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "beverages" => Ok(Category::Beverages),
            "main_course" => Ok(Category::MainCourse),
            "desserts" => Ok(Category::Desserts),
            other => Err(format!("unknown category: {other}")),
        }
    }
}
