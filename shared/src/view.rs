//! Turns an [`AnalysisResult`] into the structure the results page shows.
//!
//! Building the view never fails: missing or malformed response fields
//! degrade to fallback text and colors.

use crate::markup::{TipSegment, parse_tip};
use crate::model::{
    AnalysisResult, AnalyzedItem, Category, ColorInfo, Recommendation, UserField, scalar_text,
};
use serde_json::Value;
use strum::IntoEnumIterator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const GRAY: Rgb = Rgb(128, 128, 128);

    /// Reads a `[r, g, b]` array, falling back to gray for anything else.
    pub fn from_value(value: Option<&Value>) -> Rgb {
        let Some(Value::Array(channels)) = value else {
            return Rgb::GRAY;
        };
        let parsed: Option<Vec<u8>> = channels
            .iter()
            .map(|channel| {
                channel
                    .as_f64()
                    .filter(|c| (0.0..=255.0).contains(c))
                    .map(|c| c.round() as u8)
            })
            .collect();
        match parsed.as_deref() {
            Some([r, g, b]) => Rgb(*r, *g, *b),
            _ => Rgb::GRAY,
        }
    }

    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.0, self.1, self.2)
    }

    pub fn css_alpha(&self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.0, self.1, self.2, alpha)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColorBadge {
    pub name: String,
    pub percentage: String,
    pub rgb: Rgb,
}

impl ColorBadge {
    fn from_info(info: &ColorInfo) -> Self {
        Self {
            name: match &info.name {
                Some(Value::String(name)) if !name.trim().is_empty() => name.clone(),
                _ => "알 수 없음".to_string(),
            },
            percentage: scalar_text(info.percentage.as_ref()).unwrap_or_else(|| "0".to_string()),
            rgb: Rgb::from_value(info.rgb.as_ref()),
        }
    }

    pub fn text(&self) -> String {
        format!("{} ({}%)", self.name, self.percentage)
    }

    pub fn style(&self) -> String {
        format!(
            "background-color: {}; color: {};",
            self.rgb.css_alpha(0.2),
            self.rgb.css()
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemCard {
    pub category: Category,
    pub title: &'static str,
    pub type_label: String,
    pub type_confidence: String,
    /// Empty when the backend sent no colors.
    pub colors: Vec<ColorBadge>,
    pub pattern_label: String,
    pub pattern_confidence: String,
}

impl ItemCard {
    fn new(category: Category, item: &AnalyzedItem) -> Self {
        Self {
            category,
            title: category.display_name(),
            type_label: item.kind.label.clone(),
            type_confidence: item.kind.confidence_text(),
            colors: item.color_entries().iter().map(ColorBadge::from_info).collect(),
            pattern_label: item.pattern.label.clone(),
            pattern_confidence: item.pattern.confidence_text(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationCard {
    pub category: Category,
    pub title: &'static str,
    pub item: String,
    pub color: String,
    /// Always `None` for shoes.
    pub pattern: Option<String>,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationView {
    pub style_direction: Option<String>,
    pub notice: Option<String>,
    pub cards: Vec<RecommendationCard>,
    pub tips: Vec<Vec<TipSegment>>,
}

impl RecommendationView {
    fn new(recommendation: &Recommendation) -> Self {
        let cards = Category::iter()
            .filter_map(|category| {
                let rec = recommendation.recommendations.get(&category)?;
                if rec.uploaded {
                    return None;
                }
                let pattern = (category != Category::Shoes)
                    .then(|| rec.pattern.clone().unwrap_or_else(|| "-".to_string()));
                Some(RecommendationCard {
                    category,
                    title: category.display_name(),
                    item: rec.item.clone(),
                    color: rec.color.clone(),
                    pattern,
                    reason: rec.reason.clone(),
                })
            })
            .collect();

        Self {
            style_direction: Some(recommendation.style_direction.clone())
                .filter(|direction| !direction.trim().is_empty()),
            notice: recommendation
                .message
                .clone()
                .filter(|message| !message.trim().is_empty()),
            cards,
            tips: recommendation
                .styling_tips
                .iter()
                .map(|tip| parse_tip(tip))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReadyView {
    pub user_info: Vec<(&'static str, String)>,
    pub items: Vec<ItemCard>,
    pub recommendation: Option<RecommendationView>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    /// The backend reported `success: false`.
    Failed,
    Ready(ReadyView),
}

impl ResultView {
    pub fn build(result: &AnalysisResult) -> Self {
        if !result.success {
            return ResultView::Failed;
        }

        let user_info = UserField::iter()
            .map(|field| (field.label(), result.user_info.get(field).to_string()))
            .collect();

        let items = Category::iter()
            .filter(|category| category.is_uploadable())
            .filter_map(|category| {
                result
                    .uploaded_items
                    .get(&category)
                    .map(|item| ItemCard::new(category, item))
            })
            .collect();

        ResultView::Ready(ReadyView {
            user_info,
            items,
            recommendation: result.recommendation.as_ref().map(RecommendationView::new),
        })
    }
}
