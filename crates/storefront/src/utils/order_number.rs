use anyhow::Result;
use chrono::Utc;
use shared::utils::generate_random_string;

/// Order numbers look like `ORD-20260829-Ab12Cd34`. The random suffix is not
/// guaranteed unique on its own; the command repository retries on a
/// unique-constraint conflict.
pub fn generate_order_number() -> Result<String> {
    let date = Utc::now().format("%Y%m%d");
    let suffix = generate_random_string(8)?;

    Ok(format!("ORD-{date}-{suffix}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_expected_shape() {
        let number = generate_order_number().unwrap();
        let parts: Vec<&str> = number.split('-').collect();

        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "ORD");
        assert_eq!(parts[1].len(), 8);
        assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
        assert_eq!(parts[2].len(), 8);
        assert!(parts[2].chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn two_numbers_rarely_collide() {
        let a = generate_order_number().unwrap();
        let b = generate_order_number().unwrap();
        assert_ne!(a, b);
    }
}
