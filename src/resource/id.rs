//! Resource identifiers

use std::fmt;

/// Scalar resource identifier substituted into `{id}` path segments
///
/// The client does not validate the format; the value is placed into the
/// path verbatim and escaped only as a URL path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceId(String);

impl ResourceId {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ResourceId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ResourceId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<&String> for ResourceId {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

impl From<&ResourceId> for ResourceId {
    fn from(value: &ResourceId) -> Self {
        value.clone()
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ResourceId {
                fn from(value: $t) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

impl_from_integer!(u32, u64, i32, i64, usize);
