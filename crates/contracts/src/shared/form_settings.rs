use serde::{Deserialize, Serialize};

use super::table::TableSettings;

/// Сохранённые настройки формы (списка) в виде JSON
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FormSettings {
    pub form_key: String,
    pub settings_json: String,
}

impl FormSettings {
    pub fn from_table_settings(
        form_key: &str,
        settings: &TableSettings,
    ) -> serde_json::Result<Self> {
        Ok(Self {
            form_key: form_key.to_string(),
            settings_json: serde_json::to_string(settings)?,
        })
    }

    /// Недостающие ключи заполняются значениями по умолчанию
    pub fn table_settings(&self) -> serde_json::Result<TableSettings> {
        serde_json::from_str(&self.settings_json)
    }
}
