use std::fmt;
use std::marker::PhantomData;

use log::trace;
use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use super::RingList;

/// Upper bound on the room reserved from a sequence's size hint.
const MAX_PREALLOC: usize = 4096;

/// Serializes the elements as a sequence, from the back to the front.
impl<T: Default + Serialize> Serialize for RingList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Default + Deserialize<'de>> Deserialize<'de> for RingList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut list = RingList::new();
        list.decode(deserializer)?;
        Ok(list)
    }
}

impl<T: Default> RingList<T> {
    /// Replaces the contents of the list with a sequence read from
    /// `deserializer`. The buffer and policies are kept.
    ///
    /// The elements are appended as they are read: if decoding fails half
    /// way, the list keeps the elements read before the failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingList;
    ///
    /// let mut list: RingList<i32> = vec![7, 7].into_iter().collect();
    /// let mut de = serde_json::Deserializer::from_str("[1, 2, \"x\", 4]");
    /// assert!(list.decode(&mut de).is_err());
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
    /// ```
    pub fn decode<'de, D>(&mut self, deserializer: D) -> Result<(), D::Error>
        where D: Deserializer<'de>,
              T: Deserialize<'de>
    {
        self.clear();
        let result = deserializer.deserialize_seq(AppendVisitor {
            list: &mut *self,
            marker: PhantomData,
        });
        if result.is_err() {
            trace!("ringlist: decode stopped after {} elements", self.len());
        }
        result
    }
}

struct AppendVisitor<'a, 'de, T: 'a> {
    list: &'a mut RingList<T>,
    marker: PhantomData<&'de ()>,
}

impl<'a, 'de, T> Visitor<'de> for AppendVisitor<'a, 'de, T>
    where T: Default + Deserialize<'de>
{
    type Value = ();

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<(), A::Error> {
        if let Some(hint) = seq.size_hint() {
            self.list.grow(hint.min(MAX_PREALLOC)).map_err(de::Error::custom)?;
        }
        while let Some(value) = seq.next_element()? {
            self.list.push_front(value).map_err(de::Error::custom)?;
        }
        Ok(())
    }
}
