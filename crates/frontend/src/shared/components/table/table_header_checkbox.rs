//! Чекбокс в заголовке таблицы для выбора всех строк текущей страницы

use leptos::prelude::*;
use thaw::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}

impl CheckboxState {
    pub fn from_flags(all_selected: bool, some_selected: bool) -> Self {
        if all_selected {
            CheckboxState::Checked
        } else if some_selected {
            CheckboxState::Indeterminate
        } else {
            CheckboxState::Unchecked
        }
    }
}

/// Три состояния: unchecked, checked, indeterminate.
/// Клик всегда вызывает `on_toggle`; что он значит, решает движок таблицы.
#[component]
pub fn TableHeaderCheckbox(
    #[prop(into)]
    state: Signal<CheckboxState>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <TableHeaderCell class="fixed-checkbox-column">
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || state.get() == CheckboxState::Checked
                prop:indeterminate=move || state.get() == CheckboxState::Indeterminate
                on:change=move |_| on_toggle.run(())
            />
        </TableHeaderCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkbox_state_from_flags() {
        assert_eq!(CheckboxState::from_flags(true, false), CheckboxState::Checked);
        assert_eq!(CheckboxState::from_flags(false, true), CheckboxState::Indeterminate);
        assert_eq!(CheckboxState::from_flags(false, false), CheckboxState::Unchecked);
    }
}
