use serde::{Deserialize, Serialize};

/// Sort order understood by `GET /deals`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealSort {
    #[default]
    ValueScore,
    Price,
    PricePerCalorie,
    PricePerProtein,
    ProteinGrams,
    Calories,
}

impl DealSort {
    pub const ALL: [DealSort; 6] = [
        DealSort::ValueScore,
        DealSort::Price,
        DealSort::PricePerCalorie,
        DealSort::PricePerProtein,
        DealSort::ProteinGrams,
        DealSort::Calories,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DealSort::ValueScore => "value_score",
            DealSort::Price => "price",
            DealSort::PricePerCalorie => "price_per_calorie",
            DealSort::PricePerProtein => "price_per_protein",
            DealSort::ProteinGrams => "protein_grams",
            DealSort::Calories => "calories",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DealSort::ValueScore => "Highest value score",
            DealSort::Price => "Lowest price",
            DealSort::PricePerCalorie => "Best price per calorie",
            DealSort::PricePerProtein => "Best price per gram protein",
            DealSort::ProteinGrams => "Highest protein",
            DealSort::Calories => "Lowest calories",
        }
    }

    pub fn from_str_opt(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// Query parameters for `GET /deals`. Absent fields are left out of the
/// query string entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DealsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<DealSort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_only: Option<bool>,
}

impl DealsQuery {
    /// Query used by the home page: top ten, optionally filtered.
    pub fn home(restaurant: Option<String>, sort_by: DealSort, limit: u32) -> Self {
        Self {
            restaurant: restaurant.filter(|r| !r.is_empty()),
            sort_by: Some(sort_by),
            limit: Some(limit),
            active_only: None,
        }
    }

    /// Query used by the admin panel: everything, including inactive deals.
    pub fn admin(limit: u32) -> Self {
        Self {
            restaurant: None,
            sort_by: None,
            limit: Some(limit),
            active_only: Some(false),
        }
    }
}
