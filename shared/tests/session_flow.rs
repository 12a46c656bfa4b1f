use serde_json::{Value, json};
use shared::view::ReadyView;
use shared::{
    AnalysisResult, CardMode, Category, DraftField, ReRecommendResponse, ResultView, Session,
};

fn analyze_response() -> Value {
    json!({
        "success": true,
        "user_info": {
            "gender": "여성",
            "age_group": "20대 초반",
            "body_type": "보통",
            "tpo": "등교"
        },
        "uploaded_items": {
            "inner1": {
                "type": {"label": "맨투맨", "confidence": 81.4},
                "colors": [
                    {"name": "아이보리", "rgb": [240, 234, 214], "percentage": 71.2},
                    {"name": "기타", "rgb": [128, 128, 128], "percentage": 12.0}
                ],
                "pattern": {"label": "무지", "confidence": 93.05},
                "image_path": "uploads/inner1_sweat.jpg"
            },
            "bottom": {
                "type": {"label": "청바지", "confidence": 99.1},
                "colors": [],
                "pattern": {"label": "무지", "confidence": 88},
                "image_path": "uploads/bottom_jeans.jpg"
            }
        },
        "recommendation": {
            "recommendations": {
                "inner1": {"item": "맨투맨", "color": "아이보리", "pattern": "무지", "reason": "사용자가 업로드한 아이템", "uploaded": true},
                "outer": {"item": "더플코트", "color": "카멜", "pattern": "무지", "reason": "캠퍼스 룩"},
                "shoes": {"item": "스니커즈", "color": "화이트", "reason": "깔끔함"}
            },
            "style_direction": "따뜻한 캐주얼",
            "styling_tips": ["**머플러**로 포인트"]
        }
    })
}

fn ready(session: &Session) -> ReadyView {
    match ResultView::build(session.result().unwrap()) {
        ResultView::Ready(view) => view,
        ResultView::Failed => panic!("analysis should render"),
    }
}

fn loaded_session() -> Session {
    let result: AnalysisResult = serde_json::from_value(analyze_response()).unwrap();
    let mut session = Session::new();
    session.replace(result);
    session
}

#[test]
fn edit_then_re_recommend_keeps_items_and_user_info() {
    let mut session = loaded_session();

    session.begin_edit(Category::Inner1).unwrap();
    session
        .update_draft(Category::Inner1, DraftField::Type, "니트".into())
        .unwrap();
    session
        .update_draft(Category::Inner1, DraftField::Pattern, "체크".into())
        .unwrap();
    assert_eq!(session.save_edit(Category::Inner1), Ok(true));

    let card = ready(&session)
        .items
        .into_iter()
        .find(|card| card.category == Category::Inner1)
        .unwrap();
    assert_eq!(card.type_label, "니트");
    assert_eq!(card.pattern_label, "체크");
    assert!(session.is_dirty());

    let body = serde_json::to_value(session.re_recommend_request().unwrap()).unwrap();
    assert_eq!(body["uploaded_items"]["inner1"]["type"]["label"], "니트");
    assert_eq!(body["uploaded_items"]["inner1"]["pattern"]["label"], "체크");
    assert_eq!(
        body["uploaded_items"]["inner1"]["image_path"],
        "uploads/inner1_sweat.jpg"
    );
    assert_eq!(body["user_info"]["tpo"], "등교");

    let before = session.result().unwrap();
    let items_before = serde_json::to_string(&before.uploaded_items).unwrap();
    let user_before = serde_json::to_string(&before.user_info).unwrap();

    let response: ReRecommendResponse = serde_json::from_value(json!({
        "recommendation": {
            "recommendations": {
                "outer": {"item": "패딩", "color": "네이비", "pattern": "무지", "reason": "보온"}
            },
            "style_direction": "스포티",
            "styling_tips": []
        }
    }))
    .unwrap();
    session.apply_recommendation(response.recommendation).unwrap();

    let after = session.result().unwrap();
    assert_eq!(serde_json::to_string(&after.uploaded_items).unwrap(), items_before);
    assert_eq!(serde_json::to_string(&after.user_info).unwrap(), user_before);
    assert!(!session.is_dirty());

    let rec = ready(&session).recommendation.unwrap();
    assert_eq!(rec.style_direction.as_deref(), Some("스포티"));
    assert_eq!(rec.cards.len(), 1);
    assert_eq!(rec.cards[0].item, "패딩");
}

#[test]
fn cards_render_in_display_order_with_color_fallback() {
    let session = loaded_session();
    let view = ready(&session);

    let categories: Vec<_> = view.items.iter().map(|card| card.category).collect();
    assert_eq!(categories, [Category::Inner1, Category::Bottom]);
    assert_eq!(view.items[0].colors.len(), 2);
    assert_eq!(view.items[0].colors[0].text(), "아이보리 (71.2%)");
    assert!(view.items[1].colors.is_empty());

    let rec = view.recommendation.unwrap();
    let rec_categories: Vec<_> = rec.cards.iter().map(|card| card.category).collect();
    assert_eq!(rec_categories, [Category::Outer, Category::Shoes]);
    assert_eq!(rec.cards[1].pattern, None);
}

#[test]
fn several_cards_may_edit_at_once() {
    let mut session = loaded_session();
    session.begin_edit(Category::Inner1).unwrap();
    session.begin_edit(Category::Bottom).unwrap();
    assert!(matches!(session.card_mode(Category::Inner1), CardMode::Editing(_)));
    assert!(matches!(session.card_mode(Category::Bottom), CardMode::Editing(_)));

    session.cancel_edit(Category::Inner1).unwrap();
    assert_eq!(session.card_mode(Category::Inner1), &CardMode::Display);
    assert!(matches!(session.card_mode(Category::Bottom), CardMode::Editing(_)));
}

#[test]
fn new_analysis_replaces_everything() {
    let mut session = loaded_session();
    session.begin_edit(Category::Bottom).unwrap();
    session.save_edit(Category::Bottom).unwrap();

    let failed: AnalysisResult = serde_json::from_value(json!({"success": false})).unwrap();
    session.replace(failed);
    assert!(!session.is_dirty());
    assert_eq!(ResultView::build(session.result().unwrap()), ResultView::Failed);
}

#[test]
fn untouched_save_of_unlabelled_item_keeps_what_was_shown() {
    let mut response = analyze_response();
    response["uploaded_items"]["bottom"]["type"] = json!({"confidence": 12});
    let result: AnalysisResult = serde_json::from_value(response).unwrap();
    let mut session = Session::new();
    session.replace(result);

    session.begin_edit(Category::Bottom).unwrap();
    let CardMode::Editing(draft) = session.card_mode(Category::Bottom).clone() else {
        panic!("bottom should be editing");
    };
    let shown = shared::catalog::type_select_options(Category::Bottom, &draft.type_label)
        .into_iter()
        .find(|option| option.selected)
        .expect("one option is selected");

    session.save_edit(Category::Bottom).unwrap();
    let saved = &session.result().unwrap().uploaded_items[&Category::Bottom];
    assert_eq!(saved.kind.label, shown.value);
    assert_eq!(saved.kind.label, "");
}
