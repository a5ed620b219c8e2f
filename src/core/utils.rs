/// Upper-cases the first character only; the rest is left as is.
pub fn capitalize_first_letter(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Service units are tenths (decimetres, hectograms). Prints like `value / 10` would.
pub fn format_tenths(value: u32) -> String {
    if value % 10 == 0 {
        format!("{}", value / 10)
    } else {
        format!("{}.{}", value / 10, value % 10)
    }
}

pub fn join_capitalized<'a, I>(names: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    names
        .into_iter()
        .map(capitalize_first_letter)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_first_letter() {
        assert_eq!(capitalize_first_letter("pikachu"), "Pikachu");
        assert_eq!(capitalize_first_letter("mr-mime"), "Mr-mime");
        assert_eq!(capitalize_first_letter("Pikachu"), "Pikachu");
        assert_eq!(capitalize_first_letter(""), "");
    }

    #[test]
    fn test_format_tenths() {
        assert_eq!(format_tenths(4), "0.4");
        assert_eq!(format_tenths(60), "6");
        assert_eq!(format_tenths(905), "90.5");
        assert_eq!(format_tenths(0), "0");
    }
}
