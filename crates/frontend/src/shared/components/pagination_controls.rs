//! Навигация по страницам [`TableView`] и выбор размера страницы.

use crate::shared::icons::icon;
use crate::shared::table::TableView;
use leptos::prelude::*;

/// Подпись "страница / всего (строк)"; страницы нумеруются с 1
pub fn page_label(page: usize, total_pages: usize, total_count: usize) -> String {
    format!("{} / {} ({})", page + 1, total_pages.max(1), total_count)
}

/// Кнопка перехода: куда ведёт и доступна ли с текущей страницы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavButton {
    pub icon: &'static str,
    pub title: &'static str,
    pub target: usize,
    pub enabled: bool,
}

/// Первая, предыдущая, следующая и последняя страницы
pub fn nav_buttons(page: usize, total_pages: usize) -> [NavButton; 4] {
    let last = total_pages.max(1) - 1;
    let back = page > 0;
    let forward = page < last;
    [
        NavButton { icon: "chevrons-left", title: "Первая страница", target: 0, enabled: back },
        NavButton {
            icon: "chevron-left",
            title: "Предыдущая страница",
            target: page.saturating_sub(1),
            enabled: back,
        },
        NavButton {
            icon: "chevron-right",
            title: "Следующая страница",
            target: (page + 1).min(last),
            enabled: forward,
        },
        NavButton { icon: "chevrons-right", title: "Последняя страница", target: last, enabled: forward },
    ]
}

#[component]
pub fn PaginationControls(
    #[prop(into)]
    table_view: Signal<TableView>,
    #[prop(into)]
    page_size: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
    /// Допустимые размеры страницы
    page_size_options: Vec<usize>,
) -> impl IntoView {
    let buttons = move || table_view.with(|v| nav_buttons(v.page, v.total_pages));

    let size_options = page_size_options
        .into_iter()
        .map(|size| {
            view! {
                <option value={size.to_string()} selected=move || page_size.get() == size>
                    {size.to_string()}
                </option>
            }
        })
        .collect_view();

    let on_size = move |ev: leptos::ev::Event| match event_target_value(&ev).parse::<usize>() {
        Ok(size) => on_page_size_change.run(size),
        Err(_) => log::warn!("ignored non-numeric page size"),
    };

    let nav = move |slot: usize| {
        let button = move || buttons()[slot];
        view! {
            <button
                class="pagination-btn"
                title=move || button().title
                disabled=move || !button().enabled
                on:click=move |_| {
                    let button = button();
                    if button.enabled {
                        on_page_change.run(button.target);
                    }
                }
            >
                {icon(button().icon)}
            </button>
        }
    };

    view! {
        <div class="pagination-controls">
            {nav(0)}
            {nav(1)}
            <span class="pagination-info">
                {move || table_view.with(|v| page_label(v.page, v.total_pages, v.total_count))}
            </span>
            {nav(2)}
            {nav(3)}
            <select
                class="page-size-select"
                on:change=on_size
                prop:value=move || page_size.get().to_string()
            >
                {size_options}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_label() {
        assert_eq!(page_label(0, 3, 25), "1 / 3 (25)");
        assert_eq!(page_label(0, 0, 0), "1 / 1 (0)");
    }

    #[test]
    fn test_nav_on_middle_page() {
        let targets: Vec<(usize, bool)> =
            nav_buttons(1, 3).iter().map(|b| (b.target, b.enabled)).collect();
        assert_eq!(targets, vec![(0, true), (0, true), (2, true), (2, true)]);
    }

    #[test]
    fn test_nav_single_page_is_disabled() {
        assert!(nav_buttons(0, 1).iter().all(|b| !b.enabled));
        assert!(nav_buttons(0, 0).iter().all(|b| b.target == 0));
    }
}
