//! The result session: the single analysis result of the page plus the
//! edit state of every item card.
//!
//! Cards move `Display -> Editing -> Display`. A save marks the session
//! dirty, which offers a re-recommendation; applying a new recommendation
//! makes it clean again. Several cards may be editing at the same time.

use crate::error::SessionError;
use crate::model::{AnalysisResult, Category, ReRecommendRequest, Recommendation};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub type_label: String,
    pub pattern_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CardMode {
    #[default]
    Display,
    Editing(EditDraft),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Type,
    Pattern,
}

#[derive(Debug, Default)]
pub struct Session {
    result: Option<AnalysisResult>,
    cards: BTreeMap<Category, CardMode>,
    dirty: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    /// Installs a fresh analysis result. Open edit panes and unsaved
    /// drafts belong to the old result and are dropped with it.
    pub fn replace(&mut self, result: AnalysisResult) {
        log::debug!(
            "session replaced: success={}, items={:?}",
            result.success,
            result.uploaded_items.keys().collect::<Vec<_>>()
        );
        self.result = Some(result);
        self.cards.clear();
        self.dirty = false;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn card_mode(&self, category: Category) -> &CardMode {
        static DISPLAY: CardMode = CardMode::Display;
        self.cards.get(&category).unwrap_or(&DISPLAY)
    }

    pub fn begin_edit(&mut self, category: Category) -> Result<(), SessionError> {
        let result = self.result.as_ref().ok_or(SessionError::NoResult)?;
        let item = result
            .uploaded_items
            .get(&category)
            .ok_or(SessionError::NotUploaded(category))?;
        let draft = EditDraft {
            type_label: item.kind.label.clone(),
            pattern_label: item.pattern.label.clone(),
        };
        log::debug!("{category}: editing");
        self.cards.insert(category, CardMode::Editing(draft));
        Ok(())
    }

    pub fn update_draft(
        &mut self,
        category: Category,
        field: DraftField,
        value: String,
    ) -> Result<(), SessionError> {
        match self.cards.get_mut(&category) {
            Some(CardMode::Editing(draft)) => {
                match field {
                    DraftField::Type => draft.type_label = value,
                    DraftField::Pattern => draft.pattern_label = value,
                }
                Ok(())
            }
            _ => Err(SessionError::NotEditing(category)),
        }
    }

    pub fn cancel_edit(&mut self, category: Category) -> Result<(), SessionError> {
        match self.cards.remove(&category) {
            Some(CardMode::Editing(_)) => {
                log::debug!("{category}: edit cancelled");
                Ok(())
            }
            other => {
                if let Some(mode) = other {
                    self.cards.insert(category, mode);
                }
                Err(SessionError::NotEditing(category))
            }
        }
    }

    /// Commits the draft into the result and marks the session dirty.
    /// Returns `true` when this save is the one that made it dirty.
    pub fn save_edit(&mut self, category: Category) -> Result<bool, SessionError> {
        let draft = match self.cards.get(&category) {
            Some(CardMode::Editing(draft)) => draft.clone(),
            _ => return Err(SessionError::NotEditing(category)),
        };
        let item = self
            .result
            .as_mut()
            .ok_or(SessionError::NoResult)?
            .uploaded_items
            .get_mut(&category)
            .ok_or(SessionError::NotUploaded(category))?;

        log::info!(
            "{category}: saved {} / {}",
            draft.type_label,
            draft.pattern_label
        );
        item.kind.label = draft.type_label;
        item.pattern.label = draft.pattern_label;
        self.cards.remove(&category);

        let newly_dirty = !self.dirty;
        self.dirty = true;
        Ok(newly_dirty)
    }

    /// Body for the re-recommendation call. Only offered while dirty.
    pub fn re_recommend_request(&self) -> Result<ReRecommendRequest<'_>, SessionError> {
        let result = self.result.as_ref().ok_or(SessionError::NoResult)?;
        if !self.dirty {
            return Err(SessionError::NotDirty);
        }
        Ok(ReRecommendRequest {
            user_info: &result.user_info,
            uploaded_items: &result.uploaded_items,
        })
    }

    /// Swaps in a new recommendation, leaving user info and items alone.
    pub fn apply_recommendation(
        &mut self,
        recommendation: Recommendation,
    ) -> Result<(), SessionError> {
        let result = self.result.as_mut().ok_or(SessionError::NoResult)?;
        result.recommendation = Some(recommendation);
        self.cards.clear();
        self.dirty = false;
        log::debug!("session recommendation replaced");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnalyzedItem, Label};

    fn session_with(categories: &[Category]) -> Session {
        let mut result = AnalysisResult {
            success: true,
            ..Default::default()
        };
        for category in categories {
            result.uploaded_items.insert(
                *category,
                AnalyzedItem {
                    kind: Label {
                        label: "맨투맨".into(),
                        confidence: None,
                    },
                    pattern: Label {
                        label: "무지".into(),
                        confidence: None,
                    },
                    ..Default::default()
                },
            );
        }
        let mut session = Session::new();
        session.replace(result);
        session
    }

    #[test]
    fn test_begin_edit_prefills_draft() {
        let mut session = session_with(&[Category::Inner1]);
        session.begin_edit(Category::Inner1).unwrap();
        assert_eq!(
            session.card_mode(Category::Inner1),
            &CardMode::Editing(EditDraft {
                type_label: "맨투맨".into(),
                pattern_label: "무지".into(),
            })
        );
    }

    #[test]
    fn test_edit_requires_uploaded_item() {
        let mut session = Session::new();
        assert_eq!(session.begin_edit(Category::Outer), Err(SessionError::NoResult));

        let mut session = session_with(&[Category::Inner1]);
        assert_eq!(
            session.begin_edit(Category::Outer),
            Err(SessionError::NotUploaded(Category::Outer))
        );
        assert_eq!(session.card_mode(Category::Outer), &CardMode::Display);
    }

    #[test]
    fn test_save_commits_labels_and_marks_dirty() {
        let mut session = session_with(&[Category::Inner1]);
        session.begin_edit(Category::Inner1).unwrap();
        session
            .update_draft(Category::Inner1, DraftField::Type, "니트".into())
            .unwrap();
        session
            .update_draft(Category::Inner1, DraftField::Pattern, "체크".into())
            .unwrap();

        assert_eq!(session.save_edit(Category::Inner1), Ok(true));
        let item = &session.result().unwrap().uploaded_items[&Category::Inner1];
        assert_eq!(item.kind.label, "니트");
        assert_eq!(item.pattern.label, "체크");
        assert_eq!(session.card_mode(Category::Inner1), &CardMode::Display);
        assert!(session.is_dirty());
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut session = session_with(&[Category::Bottom]);
        session.begin_edit(Category::Bottom).unwrap();
        session
            .update_draft(Category::Bottom, DraftField::Type, "슬랙스".into())
            .unwrap();
        session.cancel_edit(Category::Bottom).unwrap();

        let item = &session.result().unwrap().uploaded_items[&Category::Bottom];
        assert_eq!(item.kind.label, "맨투맨");
        assert!(!session.is_dirty());
        assert_eq!(
            session.cancel_edit(Category::Bottom),
            Err(SessionError::NotEditing(Category::Bottom))
        );
    }

    #[test]
    fn test_repeated_saves_stay_dirty_once() {
        let mut session = session_with(&[Category::Outer, Category::Bottom]);
        session.begin_edit(Category::Outer).unwrap();
        session.begin_edit(Category::Bottom).unwrap();
        assert_eq!(session.save_edit(Category::Outer), Ok(true));
        assert_eq!(session.save_edit(Category::Bottom), Ok(false));
        assert!(session.is_dirty());
    }

    #[test]
    fn test_save_without_edit_fails() {
        let mut session = session_with(&[Category::Outer]);
        assert_eq!(
            session.save_edit(Category::Outer),
            Err(SessionError::NotEditing(Category::Outer))
        );
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_re_recommend_only_when_dirty() {
        let mut session = session_with(&[Category::Outer]);
        assert!(matches!(
            session.re_recommend_request(),
            Err(SessionError::NotDirty)
        ));
        session.begin_edit(Category::Outer).unwrap();
        session.save_edit(Category::Outer).unwrap();
        let request = session.re_recommend_request().unwrap();
        assert!(request.uploaded_items.contains_key(&Category::Outer));
    }

    #[test]
    fn test_apply_recommendation_cleans_session() {
        let mut session = session_with(&[Category::Outer]);
        session.begin_edit(Category::Outer).unwrap();
        session.save_edit(Category::Outer).unwrap();
        session.begin_edit(Category::Outer).unwrap();

        session
            .apply_recommendation(Recommendation {
                style_direction: "미니멀".into(),
                ..Default::default()
            })
            .unwrap();
        assert!(!session.is_dirty());
        assert_eq!(session.card_mode(Category::Outer), &CardMode::Display);
        assert_eq!(
            session.result().unwrap().recommendation.as_ref().unwrap().style_direction,
            "미니멀"
        );
    }

    #[test]
    fn test_replace_resets_edit_state() {
        let mut session = session_with(&[Category::Outer]);
        session.begin_edit(Category::Outer).unwrap();
        session.save_edit(Category::Outer).unwrap();
        session.begin_edit(Category::Outer).unwrap();

        session.replace(AnalysisResult::default());
        assert!(!session.is_dirty());
        assert_eq!(session.card_mode(Category::Outer), &CardMode::Display);
    }
}
