pub mod export_buttons;
pub mod handlers;
pub mod header;
pub mod item_card;
pub mod re_recommend_bar;
pub mod recommendation;
pub mod results;
pub mod upload_section;
pub mod user_form;
pub mod utils;
