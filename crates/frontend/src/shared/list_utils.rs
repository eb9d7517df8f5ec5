/// Универсальные утилиты для списков: подсветка поиска, индикаторы сортировки, поле поиска
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Задержка перед применением поискового запроса, мс
const SEARCH_DEBOUNCE_MS: i32 = 300;

/// Разбивает текст на части: (фрагмент, совпадает ли с запросом). Без учёта регистра.
pub fn split_matches(text: &str, filter: &str) -> Vec<(String, bool)> {
    let filter = filter.trim();
    if filter.is_empty() {
        return vec![(text.to_string(), false)];
    }

    let filter_lower = filter.to_lowercase();
    let text_lower = text.to_lowercase();
    // Смещения нижнего регистра совпадают с исходными только при равной длине
    if text_lower.len() != text.len() || !text_lower.contains(&filter_lower) {
        return vec![(text.to_string(), false)];
    }

    let mut parts = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let actual_pos = last_pos + pos;
        if actual_pos > last_pos {
            parts.push((text[last_pos..actual_pos].to_string(), false));
        }
        let match_end = actual_pos + filter_lower.len();
        parts.push((text[actual_pos..match_end].to_string(), true));
        last_pos = match_end;
    }
    if last_pos < text.len() {
        parts.push((text[last_pos..].to_string(), false));
    }
    parts
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let parts = split_matches(text, filter)
        .into_iter()
        .map(|(part, matched)| {
            if matched {
                view! { <span class="table__search-match">{part}</span> }.into_any()
            } else {
                view! { <span>{part}</span> }.into_any()
            }
        })
        .collect_view();
    view! { <>{parts}</> }.into_any()
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Номер последнего отложенного запроса. Сработавший таймер применяет
/// свой запрос, только если после него ничего не вводили и не очищали.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchDebounce {
    generation: u64,
}

impl SearchDebounce {
    pub fn schedule(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn cancel(&mut self) {
        self.generation += 1;
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation == ticket
    }
}

/// Запущенный таймер debounce. Замыкание живёт, пока таймер может сработать.
struct PendingSearch {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра (для отображения)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Поиск...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let (input_value, set_input_value) = signal(String::new());
    let pending = StoredValue::new_local(None::<PendingSearch>);
    let debounce = StoredValue::new(SearchDebounce::default());

    // Снимает отложенный запрос; замыкание таймера освобождается вместе с ним
    let cancel_pending = move || {
        debounce.update_value(SearchDebounce::cancel);
        let Some(stale) = pending.try_update_value(Option::take).flatten() else {
            return;
        };
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(stale.handle);
        }
    };

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        cancel_pending();

        let Some(window) = web_sys::window() else {
            on_change.run(new_value);
            return;
        };

        let Some(ticket) = debounce.try_update_value(SearchDebounce::schedule) else {
            return;
        };
        let callback = Closure::once(move || {
            if debounce.with_value(|d| d.is_current(ticket)) {
                on_change.run(new_value);
            }
        });
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref::<js_sys::Function>(),
            SEARCH_DEBOUNCE_MS,
        ) {
            Ok(handle) => pending.set_value(Some(PendingSearch {
                handle,
                _callback: callback,
            })),
            Err(_) => log::warn!("setTimeout failed, search input is not debounced"),
        }
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        cancel_pending();
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="table__search">
            <input
                type="text"
                placeholder=placeholder
                class=move || if is_filter_active() { "table__search-input table__search-input--active" } else { "table__search-input" }
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="table__search-clear" on:click=clear_filter title="Очистить">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}
