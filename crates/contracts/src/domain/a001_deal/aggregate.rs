use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate Root
// ============================================================================

/// A ranked deal as returned by `GET /deals`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: i64,
    pub restaurant_name: String,
    pub item_name: String,
    pub price: f64,

    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub portion_size: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub deal_type: Option<String>,

    // Nutrition
    #[serde(default)]
    pub calories: Option<u32>,
    #[serde(default)]
    pub calories_range_min: Option<u32>,
    #[serde(default)]
    pub calories_range_max: Option<u32>,
    #[serde(default)]
    pub protein_grams: Option<f64>,

    // Ranking
    #[serde(default)]
    pub price_per_calorie: Option<f64>,
    #[serde(default)]
    pub value_score: Option<f64>,
    #[serde(default)]
    pub satiety_score: Option<f64>,

    #[serde(default = "default_active")]
    pub is_active: bool,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_active() -> bool {
    true
}

impl Deal {
    /// Calorie text for a deal card: a range when both bounds are known,
    /// otherwise the single value.
    pub fn calories_display(&self) -> Option<String> {
        match (self.calories_range_min, self.calories_range_max) {
            (Some(min), Some(max)) if min > 0 && max > 0 => Some(format!("{} - {} Cal", min, max)),
            _ => self
                .calories
                .filter(|c| *c > 0)
                .map(|c| format!("{} Cal", c)),
        }
    }

    pub fn protein_display(&self) -> Option<String> {
        self.protein_grams
            .filter(|g| *g > 0.0)
            .map(|g| format!("{:.1} g protein", g))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal_json() -> &'static str {
        r#"{
            "id": 7,
            "restaurant_name": "KFC",
            "item_name": "Famous Bowl",
            "price": 5.99,
            "calories": 720,
            "protein_grams": 26.0,
            "value_score": 84.5,
            "some_future_field": "ignored"
        }"#
    }

    #[test]
    fn test_deal_parses_with_missing_optionals() {
        let deal: Deal = serde_json::from_str(deal_json()).unwrap();
        assert_eq!(deal.id, 7);
        assert_eq!(deal.restaurant_name, "KFC");
        assert!(deal.is_active);
        assert_eq!(deal.description, None);
        assert_eq!(deal.value_score, Some(84.5));
    }

    #[test]
    fn test_calories_display_prefers_range() {
        let mut deal: Deal = serde_json::from_str(deal_json()).unwrap();
        assert_eq!(deal.calories_display().as_deref(), Some("720 Cal"));

        deal.calories_range_min = Some(540);
        deal.calories_range_max = Some(910);
        assert_eq!(deal.calories_display().as_deref(), Some("540 - 910 Cal"));

        deal.calories_range_max = None;
        deal.calories = None;
        assert_eq!(deal.calories_display(), None);
    }

    #[test]
    fn test_protein_display() {
        let mut deal: Deal = serde_json::from_str(deal_json()).unwrap();
        assert_eq!(deal.protein_display().as_deref(), Some("26.0 g protein"));
        deal.protein_grams = Some(0.0);
        assert_eq!(deal.protein_display(), None);
    }
}
