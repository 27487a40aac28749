/// "for payers" -> "For Payers"
pub fn capitalize_words(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_percentage(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn capitalizes_each_word() {
        assert_eq!(capitalize_words("payers"), "Payers");
        assert_eq!(capitalize_words("hEALTH insurance providers"), "Health Insurance Providers");
        assert_eq!(capitalize_words(""), "");
    }

    #[test]
    fn keeps_repeated_spaces() {
        assert_eq!(capitalize_words("a  b"), "A  B");
    }

    #[test]
    fn formats_percentages() {
        assert_eq!(format_percentage(97.0, 0), "97%");
        assert_eq!(format_percentage(42.456, 1), "42.5%");
    }
}
