//! Order-preserving JSON object decoding

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::fmt;
use std::marker::PhantomData;

/// A JSON object decoded as key/value pairs in document order.
///
/// A key that appears twice keeps its first position and its last value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OrderedPairs<V>(pub Vec<(String, V)>);

impl<V> OrderedPairs<V> {
    fn upsert(&mut self, key: String, value: V) {
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.0.push((key, value)),
        }
    }
}

struct PairsVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for PairsVisitor<V> {
    type Value = OrderedPairs<V>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut pairs = OrderedPairs(Vec::with_capacity(access.size_hint().unwrap_or(0)));
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            pairs.upsert(key, value);
        }
        Ok(pairs)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedPairs<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(PairsVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_document_order() {
        let pairs: OrderedPairs<u32> = serde_json::from_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let keys: Vec<&str> = pairs.0.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn test_duplicate_key_last_value_wins() {
        let pairs: OrderedPairs<u32> = serde_json::from_str(r#"{"a": 1, "b": 2, "a": 3}"#).unwrap();
        assert_eq!(pairs.0, vec![("a".to_string(), 3), ("b".to_string(), 2)]);
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(serde_json::from_str::<OrderedPairs<u32>>("[1, 2]").is_err());
    }
}
