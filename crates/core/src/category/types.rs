//! Category enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Normalized classification of a journal entry's account code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// 人件費
    Personnel,
    /// 家屋費
    Building,
    /// 通信費
    Communication,
    /// 交通費
    Transportation,
    /// 印刷費
    Printing,
    /// 広告費
    Advertising,
    /// 文具費
    Stationery,
    /// 食糧費
    Food,
    /// 休泊費
    Lodging,
    /// 雑費
    Miscellaneous,
    /// その他の収入
    OtherIncome,
    /// 寄附
    Donation,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 12] = [
        Self::Personnel,
        Self::Building,
        Self::Communication,
        Self::Transportation,
        Self::Printing,
        Self::Advertising,
        Self::Stationery,
        Self::Food,
        Self::Lodging,
        Self::Miscellaneous,
        Self::OtherIncome,
        Self::Donation,
    ];

    /// Wire code, e.g. `other_income`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Personnel => "personnel",
            Self::Building => "building",
            Self::Communication => "communication",
            Self::Transportation => "transportation",
            Self::Printing => "printing",
            Self::Advertising => "advertising",
            Self::Stationery => "stationery",
            Self::Food => "food",
            Self::Lodging => "lodging",
            Self::Miscellaneous => "miscellaneous",
            Self::OtherIncome => "other_income",
            Self::Donation => "donation",
        }
    }

    /// Static Japanese display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Personnel => "人件費",
            Self::Building => "家屋費",
            Self::Communication => "通信費",
            Self::Transportation => "交通費",
            Self::Printing => "印刷費",
            Self::Advertising => "広告費",
            Self::Stationery => "文具費",
            Self::Food => "食糧費",
            Self::Lodging => "休泊費",
            Self::Miscellaneous => "雑費",
            Self::OtherIncome => "その他の収入",
            Self::Donation => "寄附",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.code() == s)
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}
