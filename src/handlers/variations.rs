use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Domain suffix an address must end with (case-insensitively) to be expanded.
pub const GMAIL_DOMAIN_SUFFIX: &str = "gmail.com";

/// Numeric suffixes appended to every casing variant, in emission order.
/// The empty string stands for "no suffix".
pub const NUMBER_SUFFIXES: [&str; 6] = ["", "1", "7", "42", "123", "2024"];

/// A single generated address together with its display identifier.
///
/// The identifier only exists so clients can key list items; it is derived
/// from the position in the result and carries no other meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Variation {
    /// Display identifier (`variation-0`, `variation-1`, ...)
    pub id: String,
    /// Generated email address
    pub address: String,
}

/// Generates casing and numeric-suffix variations of a Gmail address.
///
/// Returns an empty vector when `base_email` does not split into exactly two
/// `@`-separated parts or when the domain part does not end with `gmail.com`
/// (case-insensitively). No other input is rejected.
///
/// # Ordering
/// Unsuffixed casing variants come first, followed by the suffixed forms of
/// each casing variant in [`NUMBER_SUFFIXES`] order. Duplicates keep their
/// first position.
///
/// # Examples
/// ```
/// use gmail_variator::handlers::variations::generate_variations;
///
/// let variations = generate_variations("John.Doe@GMAIL.com");
/// assert_eq!(variations[0].address, "john.doe@gmail.com");
/// assert!(variations.iter().all(|v| v.address.ends_with("@gmail.com")));
///
/// assert!(generate_variations("not-an-email").is_empty());
/// ```
pub fn generate_variations(base_email: &str) -> Vec<Variation> {
    let Some((local_part, domain)) = split_gmail_address(base_email) else {
        return Vec::new();
    };

    let casings = casing_variants(local_part);
    let mut addresses: IndexSet<String> = IndexSet::new();

    for casing in &casings {
        addresses.insert(format!("{casing}@{domain}"));
    }

    for casing in &casings {
        for suffix in NUMBER_SUFFIXES {
            // Already emitted above as the plain original address.
            if suffix.is_empty() && casing == local_part {
                continue;
            }
            addresses.insert(format!("{casing}{suffix}@{domain}"));
        }
    }

    addresses
        .into_iter()
        .enumerate()
        .map(|(index, address)| Variation {
            id: format!("variation-{index}"),
            address,
        })
        .collect()
}

/// Splits an address into its original local-part and lowercased domain.
fn split_gmail_address(base_email: &str) -> Option<(&str, String)> {
    let (local_part, domain) = base_email.split_once('@')?;
    if domain.contains('@') {
        return None;
    }

    let domain = domain.to_lowercase();
    domain
        .ends_with(GMAIL_DOMAIN_SUFFIX)
        .then_some((local_part, domain))
}

/// Builds the unique casing variants of a local-part in first-seen order.
fn casing_variants(local_part: &str) -> IndexSet<String> {
    let chars: Vec<char> = local_part.chars().collect();

    let mut variants: IndexSet<String> = IndexSet::new();
    variants.insert(local_part.to_lowercase());
    variants.insert(local_part.to_uppercase());
    variants.insert(capitalize(&chars));
    variants.insert(local_part.to_string());

    if chars.len() > 2 {
        let mut second_upper = chars[..1].iter().collect::<String>().to_lowercase();
        second_upper.push_str(&chars[1..2].iter().collect::<String>().to_uppercase());
        second_upper.push_str(&chars[2..].iter().collect::<String>().to_lowercase());
        variants.insert(second_upper);

        let last = chars.len() - 1;
        let mut last_upper = chars[..last].iter().collect::<String>().to_lowercase();
        last_upper.push_str(&chars[last..].iter().collect::<String>().to_uppercase());
        variants.insert(last_upper);
    }

    variants
}

fn capitalize(chars: &[char]) -> String {
    match chars.split_first() {
        Some((first, rest)) => {
            let mut capitalized: String = first.to_uppercase().collect();
            capitalized.push_str(&rest.iter().collect::<String>().to_lowercase());
            capitalized
        }
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn addresses(input: &str) -> Vec<String> {
        generate_variations(input)
            .into_iter()
            .map(|v| v.address)
            .collect()
    }

    #[test]
    fn test_rejects_malformed_input() {
        assert!(generate_variations("").is_empty());
        assert!(generate_variations("not-an-email").is_empty());
        assert!(generate_variations("a@b@gmail.com").is_empty());
        assert!(generate_variations("user@yahoo.com").is_empty());
        assert!(generate_variations("user@gmail.com.au").is_empty());
    }

    #[test]
    fn test_domain_check_is_a_suffix_match() {
        let result = addresses("user@notgmail.com");
        // user, USER, User, uSer, useR
        assert_eq!(result.len(), 30);
        for address in &result {
            assert!(address.ends_with("@notgmail.com"), "{address}");
        }

        let result = addresses("u@Mail.GMAIL.com");
        assert!(!result.is_empty());
        for address in &result {
            assert!(address.ends_with("@mail.gmail.com"), "{address}");
        }
    }

    #[test]
    fn test_domain_is_lowercased() {
        let result = addresses("User@GMAIL.COM");
        assert!(!result.is_empty());
        for address in &result {
            assert!(
                address.ends_with("@gmail.com"),
                "{address} should end with the lowercase domain"
            );
        }
    }

    #[test]
    fn test_addresses_are_unique() {
        for input in ["john.doe@gmail.com", "ab@gmail.com", "ABC@Gmail.com", "x@gmail.com"] {
            let result = addresses(input);
            let unique: HashSet<&String> = result.iter().collect();
            assert_eq!(unique.len(), result.len(), "duplicates for {input}");
        }
    }

    #[test]
    fn test_expected_variations_for_john_doe() {
        let result = addresses("john.doe@gmail.com");

        for expected in [
            "john.doe@gmail.com",
            "JOHN.DOE@gmail.com",
            "John.doe@gmail.com",
            "jOhn.doe@gmail.com",
            "john.doE@gmail.com",
            "john.doe1@gmail.com",
            "john.doe2024@gmail.com",
            "JOHN.DOE42@gmail.com",
        ] {
            assert!(result.contains(&expected.to_string()), "missing {expected}");
        }

        // 5 unique casings, each with 6 suffixes
        assert_eq!(result.len(), 30);
    }

    #[test]
    fn test_ordering_puts_plain_casings_first() {
        let result = addresses("john.doe@gmail.com");
        assert_eq!(
            &result[..6],
            &[
                "john.doe@gmail.com",
                "JOHN.DOE@gmail.com",
                "John.doe@gmail.com",
                "jOhn.doe@gmail.com",
                "john.doE@gmail.com",
                "john.doe1@gmail.com",
            ]
        );
        assert_eq!(result.last().unwrap(), "john.doE2024@gmail.com");
    }

    #[test]
    fn test_short_local_part_skips_mixed_casings() {
        let result = addresses("ab@gmail.com");

        // ab, AB, Ab (original collapses into lowercase) times 6 suffixes
        assert_eq!(result.len(), 18);
        assert!(!result.contains(&"aB@gmail.com".to_string()));
        assert!(result.contains(&"Ab123@gmail.com".to_string()));
    }

    #[test]
    fn test_single_character_local_part() {
        let result = addresses("x@gmail.com");
        // x, X (capitalized equals uppercase)
        assert_eq!(result.len(), 12);
        assert_eq!(result[0], "x@gmail.com");
        assert_eq!(result[1], "X@gmail.com");
    }

    #[test]
    fn test_original_casing_is_kept() {
        let result = addresses("jOHn@gmail.com");
        assert!(result.contains(&"jOHn@gmail.com".to_string()));
        assert!(result.contains(&"jOHn7@gmail.com".to_string()));
    }

    #[test]
    fn test_empty_local_part_is_not_rejected() {
        let result = addresses("@gmail.com");
        assert_eq!(result[0], "@gmail.com");
        assert!(result.contains(&"2024@gmail.com".to_string()));
        assert_eq!(result.len(), 6);
    }

    #[test]
    fn test_ids_follow_positions() {
        let variations = generate_variations("ab@gmail.com");
        for (index, variation) in variations.iter().enumerate() {
            assert_eq!(variation.id, format!("variation-{index}"));
        }
    }

    #[test]
    fn test_repeated_calls_yield_same_addresses() {
        assert_eq!(
            addresses("Jane.Smith@gmail.com"),
            addresses("Jane.Smith@gmail.com")
        );
    }

    #[test]
    fn test_non_ascii_local_part() {
        let result = addresses("élan@gmail.com");
        assert!(result.contains(&"ÉLAN@gmail.com".to_string()));
        assert!(result.contains(&"éLan@gmail.com".to_string()));
        assert!(result.contains(&"élaN@gmail.com".to_string()));
    }
}
