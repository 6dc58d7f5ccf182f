use uuid::Uuid;

/// Lowercase, alphanumeric, hyphen-separated. Consecutive separators collapse
/// into one hyphen and leading/trailing hyphens are stripped.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_hyphen = true;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    slug
}

/// SKU from the product name plus a random suffix, e.g. `PRD-MECHA-4F2A`.
pub fn generate_sku(name: &str) -> String {
    let base: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(5)
        .collect::<String>()
        .to_ascii_uppercase();

    let unique_part = Uuid::new_v4().simple().to_string()[..4].to_ascii_uppercase();

    format!("PRD-{base}-{unique_part}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("Mechanical  Keyboard!"), "mechanical-keyboard");
        assert_eq!(slugify("  USB-C Hub "), "usb-c-hub");
        assert_eq!(slugify("Café crème"), "caf-cr-me");
    }

    #[test]
    fn sku_has_prefix_and_suffix() {
        let sku = generate_sku("Mechanical Keyboard");
        assert!(sku.starts_with("PRD-MECHA-"));
        assert_eq!(sku.len(), "PRD-MECHA-".len() + 4);
    }
}
