//! Fixed option lists for the edit dropdowns and the user info form.
//!
//! Values are the labels the analysis backend emits, so a saved edit is
//! indistinguishable from a classifier verdict.

use crate::model::{Category, UserField};

const OUTER_TYPES: &[&str] = &[
    "패딩", "코트", "자켓", "점퍼", "가디건", "후드집업", "플리스", "무스탕", "기타",
];
const INNER1_TYPES: &[&str] = &["맨투맨", "후드티", "니트", "셔츠", "기타"];
const INNER2_TYPES: &[&str] = &["반팔티", "긴팔티", "니트", "셔츠", "기타"];
const BOTTOM_TYPES: &[&str] = &[
    "청바지",
    "면바지",
    "슬랙스",
    "조거팬츠",
    "트레이닝팬츠",
    "반바지",
    "치마",
    "레깅스",
    "미디스커트",
];

pub const PATTERN_OPTIONS: &[&str] = &["무지", "스트라이프", "체크", "도트", "그래픽", "기타"];

/// Valid clothing types for an uploadable category; empty for shoes.
pub fn type_options(category: Category) -> &'static [&'static str] {
    match category {
        Category::Outer => OUTER_TYPES,
        Category::Inner1 => INNER1_TYPES,
        Category::Inner2 => INNER2_TYPES,
        Category::Bottom => BOTTOM_TYPES,
        Category::Shoes => &[],
    }
}

/// A dropdown entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub selected: bool,
}

/// Builds dropdown entries with `current` pre-selected. A current value the
/// catalog does not know, the empty label included, is kept as the first
/// entry so that saving an untouched pane never rewrites it.
pub fn select_options(options: &[&str], current: &str) -> Vec<SelectOption> {
    let mut entries = Vec::with_capacity(options.len() + 1);
    if !options.contains(&current) {
        entries.push(SelectOption {
            value: current.to_string(),
            selected: true,
        });
    }
    entries.extend(options.iter().map(|option| SelectOption {
        value: option.to_string(),
        selected: *option == current,
    }));
    entries
}

pub fn type_select_options(category: Category, current: &str) -> Vec<SelectOption> {
    select_options(type_options(category), current)
}

pub fn pattern_select_options(current: &str) -> Vec<SelectOption> {
    select_options(PATTERN_OPTIONS, current)
}

/// Choices offered by the user info form.
pub fn user_field_options(field: UserField) -> &'static [&'static str] {
    match field {
        UserField::Gender => &["남성", "여성"],
        UserField::AgeGroup => &["10대", "20대 초반", "20대 중반", "20대 후반", "30대 이상"],
        UserField::BodyType => &["슬림", "보통", "건장/근육질", "통통"],
        UserField::Tpo => &["등교", "데이트", "모임", "면접", "여행", "운동"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_uploadable_category_has_types() {
        for category in Category::UPLOADABLE {
            assert!(!type_options(category).is_empty(), "{category}");
        }
        assert!(type_options(Category::Shoes).is_empty());
    }

    #[test]
    fn test_current_value_is_preselected() {
        let options = type_select_options(Category::Inner1, "니트");
        assert_eq!(options.len(), INNER1_TYPES.len());
        let selected: Vec<_> = options.iter().filter(|o| o.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].value, "니트");
    }

    #[test]
    fn test_unknown_current_value_is_kept_first() {
        let options = pattern_select_options("분류 실패");
        assert_eq!(options.len(), PATTERN_OPTIONS.len() + 1);
        assert_eq!(options[0].value, "분류 실패");
        assert!(options[0].selected);
        assert!(options[1..].iter().all(|o| !o.selected));
    }

    #[test]
    fn test_user_field_choices_are_submitted_values() {
        assert_eq!(user_field_options(UserField::Gender), ["남성", "여성"]);
        for field in UserField::iter() {
            let choices = user_field_options(field);
            assert!(!choices.is_empty(), "{field}");
            assert!(choices.iter().all(|c| !c.trim().is_empty()));
        }
    }

    #[test]
    fn test_empty_current_gets_selected_placeholder() {
        let options = type_select_options(Category::Outer, "");
        assert_eq!(options.len(), OUTER_TYPES.len() + 1);
        assert_eq!(options[0], SelectOption { value: String::new(), selected: true });
        assert!(options[1..].iter().all(|o| !o.selected));
    }
}
