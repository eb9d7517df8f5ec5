/// Палитра по умолчанию (9 цветов)
pub const DEFAULT_PALETTE: [&str; 9] = [
    "#5899DA", "#E8743B", "#19A979", "#ED4A7B", "#945ECF", "#13A4B4", "#525DF4", "#BF399E",
    "#6C8893",
];

/// Приглушённый цвет корзины "Other"
pub const OTHER_COLOR: &str = "#A9A9A9";

pub const OTHER_LABEL: &str = "Other";

/// Цвет по позиции в исходном порядке; пустая палитра заменяется стандартной
pub fn palette_color(colors: &[String], index: usize) -> String {
    if colors.is_empty() {
        DEFAULT_PALETTE[index % DEFAULT_PALETTE.len()].to_string()
    } else {
        colors[index % colors.len()].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_wraps() {
        assert_eq!(palette_color(&[], 0), "#5899DA");
        assert_eq!(palette_color(&[], 9), "#5899DA");
        let custom = vec!["red".to_string(), "blue".to_string()];
        assert_eq!(palette_color(&custom, 3), "blue");
    }
}
