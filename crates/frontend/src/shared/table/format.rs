use contracts::shared::table::{CellFormat, Column};
use serde_json::Value;

use super::compare::value_to_string;
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::number_format::{format_money, format_number_int, format_number_with_decimals};

/// Текст для пустой ячейки
pub const EMPTY_CELL: &str = "—";

/// Текст ячейки по формату колонки. Значение, не подходящее под формат,
/// выводится как есть.
pub fn format_cell(column: &Column, value: Option<&Value>) -> String {
    let Some(value) = value else {
        return EMPTY_CELL.to_string();
    };

    match (column.format, value) {
        (CellFormat::Number { decimals }, Value::Number(n)) => n
            .as_f64()
            .map(|v| format_number_with_decimals(v, decimals))
            .unwrap_or_else(|| n.to_string()),
        (CellFormat::Integer, Value::Number(n)) => n
            .as_f64()
            .map(format_number_int)
            .unwrap_or_else(|| n.to_string()),
        (CellFormat::Money, Value::Number(n)) => n
            .as_f64()
            .map(format_money)
            .unwrap_or_else(|| n.to_string()),
        (CellFormat::Boolean, Value::Bool(b)) => (if *b { "Да" } else { "Нет" }).to_string(),
        (CellFormat::Date, Value::String(s)) => format_date(s),
        (CellFormat::DateTime, Value::String(s)) => format_datetime(s),
        _ => {
            let text = value_to_string(value);
            if text.is_empty() {
                EMPTY_CELL.to_string()
            } else {
                text
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_value_is_dash() {
        let column = Column::new("amount", "Сумма").format(CellFormat::Money);
        assert_eq!(format_cell(&column, None), "—");
    }

    #[test]
    fn test_formats() {
        let money = Column::new("amount", "Сумма").format(CellFormat::Money);
        assert_eq!(format_cell(&money, Some(&json!(1234.5))), "1 234.50");

        let flag = Column::new("active", "Активен").format(CellFormat::Boolean);
        assert_eq!(format_cell(&flag, Some(&json!(false))), "Нет");

        let date = Column::new("created", "Создан").format(CellFormat::Date);
        assert_eq!(format_cell(&date, Some(&json!("2024-03-15"))), "15.03.2024");
    }

    #[test]
    fn test_mismatched_value_passes_through() {
        let money = Column::new("amount", "Сумма").format(CellFormat::Money);
        assert_eq!(format_cell(&money, Some(&json!("n/a"))), "n/a");
        let text = Column::new("name", "Имя");
        assert_eq!(format_cell(&text, Some(&json!(""))), "—");
    }
}
