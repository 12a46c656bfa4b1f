//! Domain types and browser-independent logic of the outfit recommendation
//! client: the response model, upload slots, submission checks, the result
//! session with its edit state machine, and the result view builder.

pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod markup;
pub mod model;
pub mod session;
pub mod submission;
pub mod upload;
pub mod view;

pub use config::{ClientConfig, ExportConfig};
pub use error::{SessionError, ValidationError};
pub use model::{
    AnalysisResult, AnalyzedItem, Category, ColorInfo, Label, ReRecommendRequest,
    ReRecommendResponse, Recommendation, RecommendedItem, UserField, UserInfo,
};
pub use session::{CardMode, DraftField, EditDraft, Session};
pub use upload::{ReadTicket, SelectedFile, SlotSource, SlotState, UploadSlots};
pub use view::ResultView;
