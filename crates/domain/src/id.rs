//! Typed identifier newtypes backed by UUIDs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(uuid::Uuid);

        impl Default for $name {
            fn default() -> Self {
                Self(uuid::Uuid::new_v4())
            }
        }

        impl $name {
            /// Generate a new random identifier.
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                uuid::Uuid::parse_str(s).map(Self)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`Service`](crate::service::Service).
    ServiceId
);

define_id!(
    /// Unique identifier for an [`Order`](crate::order::Order).
    OrderId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_generate_unique_ids_when_called_twice() {
        let a = ServiceId::new();
        let b = ServiceId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn should_keep_lowercase_hyphenated_form_through_display() {
        let text = "86b423fd-950c-4052-b4ca-4933b88da587";
        let id: ServiceId = text.parse().unwrap();
        assert_eq!(id.to_string(), text);
    }

    #[test]
    fn should_serialize_as_plain_string_in_json() {
        let id: OrderId = "d235ab9c-0213-4600-bb6f-21bed122aa24".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"d235ab9c-0213-4600-bb6f-21bed122aa24\"");
    }

    #[test]
    fn should_return_error_when_parsing_invalid_uuid() {
        let result = OrderId::from_str("not-a-uuid");
        assert!(result.is_err());
    }
}
