use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Contact details that must not show up in log output.
///
/// `Debug` and `Display` print a placeholder; serialization passes the real
/// value through so it still reaches the payment provider.
#[derive(Clone, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Masked<T>(pub T);

const MASK: &str = "********";

impl<T> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(MASK)
    }
}

impl<T> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(MASK)
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_formatting() {
        let email = Masked("visitor@example.com".to_string());
        assert_eq!(format!("{}", email), MASK);
        assert_eq!(format!("{:?}", email), MASK);
        assert_eq!(email.0, "visitor@example.com");
    }

    #[test]
    fn test_masked_deserializes_plain_value() {
        let email: Masked<String> = serde_json::from_str(r#""visitor@example.com""#).unwrap();
        assert_eq!(email.0, "visitor@example.com");
    }
}
