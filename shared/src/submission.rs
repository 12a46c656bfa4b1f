use crate::error::ValidationError;
use crate::model::{Category, UserField, UserInfo};
use crate::upload::UploadSlots;

/// A validated analysis request, ready to be turned into a multipart body.
#[derive(Debug)]
pub struct Submission<'a, F> {
    pub fields: Vec<(&'static str, &'a str)>,
    pub files: Vec<(Category, &'a F)>,
}

pub fn missing_field(user_info: &UserInfo) -> Option<UserField> {
    user_info
        .fields()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
}

/// Checks the form in the order the user sees it: the info fields first,
/// then that at least one photo is attached.
pub fn prepare<'a, F>(
    user_info: &'a UserInfo,
    slots: &'a UploadSlots<F>,
) -> Result<Submission<'a, F>, ValidationError> {
    if let Some(field) = missing_field(user_info) {
        return Err(ValidationError::MissingUserInfo(field));
    }

    let files: Vec<_> = slots.files().collect();
    if files.is_empty() {
        return Err(ValidationError::NoImages);
    }

    let fields = user_info
        .fields()
        .map(|(field, value)| (field.form_name(), value))
        .collect();

    Ok(Submission { fields, files })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::{SelectedFile, SlotSource};

    #[derive(Debug)]
    struct Photo;

    impl SelectedFile for Photo {
        fn file_name(&self) -> String {
            "photo.jpg".into()
        }

        fn mime_type(&self) -> String {
            "image/jpeg".into()
        }
    }

    fn filled() -> UserInfo {
        UserInfo {
            gender: "여성".into(),
            age_group: "20대 초반".into(),
            body_type: "보통".into(),
            tpo: "등교".into(),
        }
    }

    #[test]
    fn test_each_missing_field_blocks_submission() {
        let mut slots = UploadSlots::new();
        slots.select(Category::Outer, Photo, SlotSource::Click).unwrap();

        for field in [
            UserField::Gender,
            UserField::AgeGroup,
            UserField::BodyType,
            UserField::Tpo,
        ] {
            let mut info = filled();
            info.set(field, "  ");
            let err = prepare(&info, &slots).unwrap_err();
            assert_eq!(err, ValidationError::MissingUserInfo(field));
        }
    }

    #[test]
    fn test_fields_checked_before_files() {
        let slots = UploadSlots::<Photo>::new();
        let err = prepare(&UserInfo::default(), &slots).unwrap_err();
        assert_eq!(err, ValidationError::MissingUserInfo(UserField::Gender));
    }

    #[test]
    fn test_no_files_blocks_submission() {
        let slots = UploadSlots::<Photo>::new();
        let err = prepare(&filled(), &slots).unwrap_err();
        assert_eq!(err, ValidationError::NoImages);
    }

    #[test]
    fn test_submission_parts() {
        let mut slots = UploadSlots::new();
        slots.select(Category::Inner2, Photo, SlotSource::Drop).unwrap();
        slots.select(Category::Outer, Photo, SlotSource::Click).unwrap();
        let info = filled();

        let submission = prepare(&info, &slots).unwrap();
        assert_eq!(
            submission.fields,
            [
                ("gender", "여성"),
                ("age_group", "20대 초반"),
                ("body_type", "보통"),
                ("tpo", "등교"),
            ]
        );
        let parts: Vec<_> = submission.files.iter().map(|(c, _)| c.field_name()).collect();
        assert_eq!(parts, ["outer", "inner2"]);
    }
}
