//! URL slug generation.

/// Builds a URL slug from a display name.
///
/// Lowercases the input, transliterates Cyrillic letters to Latin, and collapses
/// every run of other characters into a single `-`. Leading and trailing dashes
/// are trimmed.
///
/// # Arguments
/// - `input` - Product, category or post name
///
/// # Returns
/// - `String` - Slug, possibly empty when the input has no letters or digits
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for ch in input.chars().flat_map(char::to_lowercase) {
        let mapped = if ch.is_ascii_alphanumeric() {
            Some(ch.to_string())
        } else {
            transliterate(ch).map(str::to_string)
        };

        match mapped {
            Some(part) if !part.is_empty() => {
                if pending_dash && !slug.is_empty() {
                    slug.push('-');
                }
                pending_dash = false;
                slug.push_str(&part);
            }
            // Soft and hard signs vanish without splitting the word.
            Some(_) => {}
            None => pending_dash = true,
        }
    }

    slug
}

/// Uses the user-supplied slug when present, otherwise derives one from `name`.
///
/// Supplied slugs are normalised through `slugify` as well.
pub fn resolve_slug(explicit: Option<&str>, name: &str) -> String {
    match explicit.map(str::trim).filter(|s| !s.is_empty()) {
        Some(slug) => slugify(slug),
        None => slugify(name),
    }
}

fn transliterate(ch: char) -> Option<&'static str> {
    let latin = match ch {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' => "e",
        'ё' => "e",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' => "y",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "h",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "sch",
        'ъ' => "",
        'ы' => "y",
        'ь' => "",
        'э' => "e",
        'ю' => "yu",
        'я' => "ya",
        _ => return None,
    };

    Some(latin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transliterates_cyrillic() {
        assert_eq!(slugify("Чайник электрический"), "chaynik-elektricheskiy");
        assert_eq!(slugify("Подъёмник"), "podemnik");
    }

    #[test]
    fn collapses_separators() {
        assert_eq!(slugify("  Hello,   World!! "), "hello-world");
        assert_eq!(slugify("iPhone 15 Pro / 256GB"), "iphone-15-pro-256gb");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn prefers_explicit_slug() {
        assert_eq!(resolve_slug(Some("My Custom"), "ignored"), "my-custom");
        assert_eq!(resolve_slug(Some("   "), "Новости"), "novosti");
        assert_eq!(resolve_slug(None, "Новости"), "novosti");
    }
}
