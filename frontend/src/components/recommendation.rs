use shared::markup::TipSegment;
use shared::view::{RecommendationCard, RecommendationView};
use yew::prelude::*;

pub fn render_recommendation(view: &RecommendationView) -> Html {
    html! {
        <div class="recommendation">
            <h3>{"✨ AI 코디 추천"}</h3>
            {
                if let Some(direction) = &view.style_direction {
                    html! { <div class="style-direction">
                            <h4>{"💡 전체 스타일 방향"}</h4>
                            <p>{ direction.clone() }</p>
                        </div> }
                } else {
                    html! {}
                }
            }
            {
                if let Some(notice) = &view.notice {
                    html! { <p class="notice">{ notice.clone() }</p> }
                } else {
                    html! {}
                }
            }
            <div class="recommendation-grid">
                { for view.cards.iter().map(render_card) }
            </div>
            { render_tips(&view.tips) }
        </div>
    }
}

fn render_card(card: &RecommendationCard) -> Html {
    html! {
        <div class="recommendation-card" data-category={card.category.to_string()}>
            <h4>{ card.title }</h4>
            <p><strong>{"추천 아이템: "}</strong>{ card.item.clone() }</p>
            <p><strong>{"추천 색상: "}</strong>{ card.color.clone() }</p>
            {
                if let Some(pattern) = &card.pattern {
                    html! { <p><strong>{"추천 무늬: "}</strong>{ pattern.clone() }</p> }
                } else {
                    html! {}
                }
            }
            <p class="reason"><strong>{"추천 이유: "}</strong>{ card.reason.clone() }</p>
        </div>
    }
}

fn render_tips(tips: &[Vec<TipSegment>]) -> Html {
    if tips.is_empty() {
        return html! {};
    }
    html! {
        <div class="styling-tips">
            <h4>{"💡 스타일링 팁"}</h4>
            <ul>
                { for tips.iter().map(|segments| html! {
                    <li>
                        { for segments.iter().map(|segment| match segment {
                            TipSegment::Plain(text) => html! { { text.clone() } },
                            TipSegment::Strong(text) => html! { <strong>{ text.clone() }</strong> },
                        })}
                    </li>
                })}
            </ul>
        </div>
    }
}
