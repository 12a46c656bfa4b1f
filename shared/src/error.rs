use crate::model::{Category, UserField};
use thiserror::Error;

/// Client-side checks that stop an action before any request is made.
/// Display texts are shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("기본 정보를 모두 입력해주세요! (누락: {0})")]
    MissingUserInfo(UserField),

    #[error("최소 1개 이상의 옷 사진을 업로드해주세요!")]
    NoImages,

    #[error("이미지 파일만 업로드 가능합니다. ({name}: {mime})")]
    NotAnImage { name: String, mime: String },

    #[error("{} 항목은 업로드할 수 없습니다.", .0.display_name())]
    NotUploadable(Category),
}

/// Invalid transitions of the result session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("데이터가 없습니다. 다시 업로드해주세요.")]
    NoResult,

    #[error("{} 분석 결과가 없습니다.", .0.display_name())]
    NotUploaded(Category),

    #[error("{} 항목은 수정 중이 아닙니다.", .0.display_name())]
    NotEditing(Category),

    #[error("재추천할 수정사항이 없습니다.")]
    NotDirty,
}
