// SPDX-License-Identifier: GPL-3.0-only

/// Uppercases the first character and keeps the rest as is, hyphens included.
pub fn capitalize_string(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first_char) => first_char.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Capitalizes every type name and joins them with commas, as shown on the cards
pub fn join_type_names(types: &[String]) -> String {
    types
        .iter()
        .map(|name| capitalize_string(name))
        .collect::<Vec<String>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("pikachu", "Pikachu")]
    #[case("mr-mime", "Mr-mime")]
    #[case("nidoran-f", "Nidoran-f")]
    #[case("", "")]
    fn capitalizes_first_letter_only(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(capitalize_string(input), expected);
    }

    #[test]
    fn joins_types_in_order() {
        let types = vec![String::from("grass"), String::from("poison")];
        assert_eq!(join_type_names(&types), "Grass, Poison");
        assert_eq!(join_type_names(&[]), "");
    }
}
