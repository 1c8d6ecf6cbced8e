use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// NewType pattern for type safety
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WishlistId(pub String);

impl fmt::Display for WishlistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One extracted wishlist item. No identity beyond its position in the
/// containing wishlist; duplicates are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: String,
    pub author: String,
}

/// A named wishlist. Created by the index builder with an explicit empty
/// `books` vector; the paginator only ever appends to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wishlist {
    pub id: WishlistId,
    pub name: String,
    pub books: Vec<BookRecord>,
}

impl Wishlist {
    pub fn new(id: WishlistId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            books: Vec::new(),
        }
    }
}

/// Aggregated output of one run. Wishlists stay in sidebar discovery order;
/// the JSON form is a map from wishlist id to `{ name, books }`, emitted in
/// that same order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    wishlists: Vec<Wishlist>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, wishlist: Wishlist) {
        self.wishlists.push(wishlist);
    }

    pub fn len(&self) -> usize {
        self.wishlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wishlists.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Wishlist> {
        self.wishlists.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Wishlist> {
        self.wishlists.iter_mut()
    }

    pub fn get(&self, id: &WishlistId) -> Option<&Wishlist> {
        self.wishlists.iter().find(|w| &w.id == id)
    }
}

#[derive(Serialize)]
struct EntryRef<'a> {
    name: &'a str,
    books: &'a [BookRecord],
}

#[derive(Deserialize)]
struct EntryOwned {
    name: String,
    #[serde(default)]
    books: Vec<BookRecord>,
}

impl Serialize for ResultSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.wishlists.len()))?;
        for wishlist in &self.wishlists {
            map.serialize_entry(
                &wishlist.id.0,
                &EntryRef {
                    name: &wishlist.name,
                    books: &wishlist.books,
                },
            )?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ResultSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ResultSetVisitor;

        impl<'de> Visitor<'de> for ResultSetVisitor {
            type Value = ResultSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from wishlist id to { name, books }")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut wishlists = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((id, entry)) = access.next_entry::<String, EntryOwned>()? {
                    wishlists.push(Wishlist {
                        id: WishlistId(id),
                        name: entry.name,
                        books: entry.books,
                    });
                }
                Ok(ResultSet { wishlists })
            }
        }

        deserializer.deserialize_map(ResultSetVisitor)
    }
}
