//! Сравнение значений ячеек для сортировки.
//!
//! Пустые значения всегда в конце, числа сравниваются по величине, всё
//! остальное - как строки с учётом чисел внутри ("item2" < "item10").

use contracts::shared::table::SortDirection;
use serde_json::Value;
use std::cmp::Ordering;

/// Строковое представление значения для поиска и сравнения.
/// Вложенные объекты не имеют текста: их ключи не должны находиться поиском.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null | Value::Object(_) => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            // 1.0 -> "1"
            (_, _, Some(f)) => f.to_string(),
            _ => n.to_string(),
        },
        Value::Array(items) => items
            .iter()
            .map(value_to_string)
            .collect::<Vec<_>>()
            .join(","),
    }
}

pub fn compare_values(a: Option<&Value>, b: Option<&Value>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            let cmp = compare_present(a, b);
            if direction.is_ascending() {
                cmp
            } else {
                cmp.reverse()
            }
        }
    }
}

fn compare_present(a: &Value, b: &Value) -> Ordering {
    if let (Some(x), Some(y)) = (a.as_f64(), b.as_f64()) {
        return x.partial_cmp(&y).unwrap_or(Ordering::Equal);
    }
    natural_cmp(&value_to_string(a), &value_to_string(b))
}

/// Сравнение строк без учёта регистра, последовательности цифр сравниваются
/// как числа. При равенстве строчные буквы идут раньше заглавных.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    cmp_chunks(a, b).then_with(|| a.cmp(b).reverse())
}

fn cmp_chunks(a: &str, b: &str) -> Ordering {
    let mut ai = a.chars().peekable();
    let mut bi = b.chars().peekable();

    loop {
        let (ca, cb) = match (ai.peek(), bi.peek()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(&ca), Some(&cb)) => (ca, cb),
        };

        if ca.is_ascii_digit() && cb.is_ascii_digit() {
            let run_a = take_digits(&mut ai);
            let run_b = take_digits(&mut bi);
            let ord = cmp_digit_runs(&run_a, &run_b);
            if ord != Ordering::Equal {
                return ord;
            }
            continue;
        }

        let ord = ca.to_lowercase().cmp(cb.to_lowercase());
        if ord != Ordering::Equal {
            return ord;
        }
        ai.next();
        bi.next();
    }
}

fn take_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
