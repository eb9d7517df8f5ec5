//! Геометрия SVG-дуг для кольцевой диаграммы.
//!
//! Углы в градусах, 0 - "12 часов", отсчёт по часовой стрелке.

use contracts::shared::tiles::DisplayItem;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

pub fn polar_to_cartesian(cx: f64, cy: f64, radius: f64, angle_deg: f64) -> Point {
    let radians = (angle_deg - 90.0).to_radians();
    Point {
        x: cx + radius * radians.cos(),
        y: cy + radius * radians.sin(),
    }
}

/// Путь `d` для дуги от `start_deg` до `end_deg`.
/// Полный круг рисуется двумя полудугами: SVG не строит дугу с совпадающими концами.
pub fn describe_arc(cx: f64, cy: f64, radius: f64, start_deg: f64, end_deg: f64) -> String {
    let sweep = end_deg - start_deg;
    if sweep <= 0.0 {
        return String::new();
    }
    if sweep >= 360.0 {
        let top = polar_to_cartesian(cx, cy, radius, 0.0);
        let bottom = polar_to_cartesian(cx, cy, radius, 180.0);
        return format!(
            "M {:.3} {:.3} A {r:.3} {r:.3} 0 1 1 {:.3} {:.3} A {r:.3} {r:.3} 0 1 1 {:.3} {:.3}",
            top.x,
            top.y,
            bottom.x,
            bottom.y,
            top.x,
            top.y,
            r = radius
        );
    }

    let start = polar_to_cartesian(cx, cy, radius, start_deg);
    let end = polar_to_cartesian(cx, cy, radius, end_deg);
    let large_arc = if sweep > 180.0 { 1 } else { 0 };
    format!(
        "M {:.3} {:.3} A {r:.3} {r:.3} 0 {} 1 {:.3} {:.3}",
        start.x,
        start.y,
        large_arc,
        end.x,
        end.y,
        r = radius
    )
}

/// Сегмент диаграммы для элемента представления
#[derive(Debug, Clone, PartialEq)]
pub struct SliceArc {
    /// Индекс в `display_items`
    pub index: usize,
    pub start_deg: f64,
    pub end_deg: f64,
}

/// Углы сегментов пропорционально значениям. Элементы с неположительным
/// значением сегмента не получают; нулевая сумма - пустой список.
pub fn slice_arcs(items: &[DisplayItem]) -> Vec<SliceArc> {
    let total: f64 = items.iter().map(|item| item.value.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angle = 0.0;
    let mut arcs = Vec::new();
    for (index, item) in items.iter().enumerate() {
        if item.value <= 0.0 {
            continue;
        }
        let sweep = item.value / total * 360.0;
        arcs.push(SliceArc {
            index,
            start_deg: angle,
            end_deg: angle + sweep,
        });
        angle += sweep;
    }
    arcs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(value: f64) -> DisplayItem {
        DisplayItem {
            label: "x".to_string(),
            value,
            color: "#000".to_string(),
            selected: None,
            is_other: false,
            source_index: None,
        }
    }

    #[test]
    fn test_polar_to_cartesian() {
        let p = polar_to_cartesian(50.0, 50.0, 10.0, 90.0);
        assert!((p.x - 60.0).abs() < 1e-9);
        assert!((p.y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_describe_arc_flags() {
        assert_eq!(
            describe_arc(50.0, 50.0, 10.0, 0.0, 90.0),
            "M 50.000 40.000 A 10.000 10.000 0 0 1 60.000 50.000"
        );
        assert!(describe_arc(50.0, 50.0, 10.0, 0.0, 270.0).contains(" 0 1 1 "));
        assert!(describe_arc(50.0, 50.0, 10.0, 10.0, 10.0).is_empty());
    }

    #[test]
    fn test_full_circle_uses_two_arcs() {
        let d = describe_arc(50.0, 50.0, 10.0, 0.0, 360.0);
        assert_eq!(d.matches('A').count(), 2);
    }

    #[test]
    fn test_slice_arcs_cover_circle() {
        let arcs = slice_arcs(&[item(1.0), item(0.0), item(3.0)]);
        assert_eq!(arcs.len(), 2);
        assert_eq!(arcs[0].index, 0);
        assert!((arcs[0].end_deg - 90.0).abs() < 1e-9);
        assert_eq!(arcs[1].index, 2);
        assert!((arcs[1].end_deg - 360.0).abs() < 1e-9);
        assert!(slice_arcs(&[item(0.0)]).is_empty());
    }
}
