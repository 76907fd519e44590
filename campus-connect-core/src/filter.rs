//! Client-side search filtering.

/// An item that can be matched against a live search query.
pub trait Searchable {
    /// The designated primary match field (name or title).
    fn primary_field(&self) -> &str;

    /// Additional fields matched with OR semantics (instructor,
    /// description). Empty by default.
    fn secondary_fields(&self) -> Vec<&str> {
        Vec::new()
    }
}

/// Filters a collection against a live query.
///
/// Pure and synchronous; recomputed eagerly on every keystroke. Matching
/// is case-insensitive substring containment against the primary field or
/// any secondary field. An empty query keeps every item visible. The
/// result is always a subset of `items`, in original order.
pub fn filter_items<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    if query.is_empty() {
        return items.iter().collect();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.primary_field().to_lowercase().contains(&needle)
                || item
                    .secondary_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

impl Searchable for campus_connect_backend::UserSummary {
    fn primary_field(&self) -> &str {
        &self.name
    }
}

impl Searchable for campus_connect_backend::Course {
    fn primary_field(&self) -> &str {
        &self.title
    }

    fn secondary_fields(&self) -> Vec<&str> {
        vec![&self.instructor, &self.description]
    }
}

impl Searchable for campus_connect_backend::Quiz {
    fn primary_field(&self) -> &str {
        &self.title
    }
}
