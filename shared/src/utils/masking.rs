//! Log masking helpers

/// Mask an email address for logging: `user@example.com` -> `u***@example.com`
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        None => String::from("***"),
    }
}
