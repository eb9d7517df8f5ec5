use leptos::prelude::*;

fn polyline_icon(points: &'static [&'static str]) -> AnyView {
    view! {
        <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {points.iter().map(|p| view! { <polyline points=*p/> }).collect_view()}
        </svg>
    }
    .into_any()
}

/// Иконки таблиц и пагинации
pub fn icon(name: &str) -> AnyView {
    match name {
        "chevron-right" => polyline_icon(&["9 18 15 12 9 6"]),
        "chevron-left" => polyline_icon(&["15 18 9 12 15 6"]),
        "chevron-down" => polyline_icon(&["6 9 12 15 18 9"]),
        "chevrons-left" => polyline_icon(&["11 17 6 12 11 7", "18 17 13 12 18 7"]),
        "chevrons-right" => polyline_icon(&["13 17 18 12 13 7", "6 17 11 12 6 7"]),
        "x" => view! {
            <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <line x1="18" y1="6" x2="6" y2="18"/>
                <line x1="6" y1="6" x2="18" y2="18"/>
            </svg>
        }
        .into_any(),
        _ => view! {
            <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
                <circle cx="12" cy="12" r="10"/>
            </svg>
        }
        .into_any(),
    }
}
