// third-party imports
use serde_json as json;

// local imports
use crate::error::{Error, Result};

// ---

/// A compiled dotted property path, such as `billing.address.id`.
///
/// An accessor is parsed once and can then be applied to any number of
/// [`json::Value`] trees, reading or writing through chains of possibly
/// missing hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessor {
    segments: Vec<String>,
}

impl Accessor {
    /// Compiles a dotted path into an accessor.
    ///
    /// Empty paths and empty segments are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use strkit::path::Accessor;
    ///
    /// assert!(Accessor::parse("billing.address.id").is_ok());
    /// assert!(Accessor::parse("").is_err());
    /// assert!(Accessor::parse("billing..id").is_err());
    /// ```
    pub fn parse(path: &str) -> Result<Self> {
        let segments: Vec<String> = path.split('.').map(str::to_owned).collect();
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(Error::InvalidPath(path.to_owned()));
        }
        Ok(Self { segments })
    }

    /// Compiles a path whose first segment names the host object itself and
    /// drops it; at least two segments are required.
    pub fn parse_rooted(path: &str) -> Result<Self> {
        let mut accessor = Self::parse(path)?;
        if accessor.segments.len() < 2 {
            return Err(Error::InvalidPath(path.to_owned()));
        }
        accessor.segments.remove(0);
        Ok(accessor)
    }

    /// Reads the value at the path, returning `None` as soon as any step is
    /// missing, `null`, or not an object.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use strkit::path::Accessor;
    ///
    /// let customer = json!({"billing": {"address": {"id": 12}}});
    /// let accessor = Accessor::parse("billing.address.id").unwrap();
    /// assert_eq!(accessor.get(&customer), Some(&json!(12)));
    ///
    /// let detached = json!({"billing": null});
    /// assert_eq!(accessor.get(&detached), None);
    /// ```
    pub fn get<'a>(&self, root: &'a json::Value) -> Option<&'a json::Value> {
        let mut value = root;
        for segment in &self.segments {
            value = value.as_object()?.get(segment)?;
        }
        if value.is_null() { None } else { Some(value) }
    }

    /// Writes `value` at the path, returning whether the assignment
    /// happened.
    ///
    /// Interior steps that are missing or `null` are created as empty
    /// objects when `create_missing` is set; otherwise the assignment
    /// aborts and the tree is left untouched. Interior steps holding
    /// non-object values always abort.
    pub fn set(&self, root: &mut json::Value, value: json::Value, create_missing: bool) -> bool {
        let Some((last, interior)) = self.segments.split_last() else {
            return false;
        };

        let mut host = root;
        for segment in interior {
            let json::Value::Object(map) = host else {
                return false;
            };
            if create_missing {
                let child = map
                    .entry(segment.clone())
                    .or_insert_with(|| json::Value::Object(json::Map::new()));
                if child.is_null() {
                    *child = json::Value::Object(json::Map::new());
                }
                host = child;
            } else {
                host = match map.get_mut(segment) {
                    Some(child) if !child.is_null() => child,
                    _ => return false,
                };
            }
        }

        let json::Value::Object(map) = host else {
            return false;
        };
        map.insert(last.clone(), value);
        true
    }
}

#[cfg(test)]
mod tests;
