//! Client-side view state
//!
//! Owned snapshots of server responses. Every mutation method consumes the
//! snapshot and returns a new one with the server's response merged in, so
//! the client never refetches after a successful call and never holds a
//! half-applied update.
//!
//! Sorting is a pure reordering of the snapshot and is never persisted.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::models::{BookNote, ListBookDetail, ListDetail};

/// Sort orders for the books on a list view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Newest membership first
    CreatedDesc,
    /// Oldest membership first
    CreatedAsc,
    /// Book title, case-insensitive
    Title,
    /// Book author, case-insensitive
    Author,
    /// Reading status, unread first
    Status,
}

/// A sort string that does not name a known order
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("unknown sort order: {0}")]
pub struct InvalidSortOrder(pub String);

impl SortOrder {
    /// All orders, default first
    pub const ALL: [SortOrder; 5] = [
        SortOrder::CreatedDesc,
        SortOrder::CreatedAsc,
        SortOrder::Title,
        SortOrder::Author,
        SortOrder::Status,
    ];

    /// The wire form of this order
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::CreatedDesc => "createdAt:desc",
            SortOrder::CreatedAsc => "createdAt:asc",
            SortOrder::Title => "alphabetical:title",
            SortOrder::Author => "alphabetical:author",
            SortOrder::Status => "status",
        }
    }

    fn compare(&self, a: &ListBookDetail, b: &ListBookDetail) -> Ordering {
        match self {
            SortOrder::CreatedDesc => b.created_at.cmp(&a.created_at),
            SortOrder::CreatedAsc => a.created_at.cmp(&b.created_at),
            SortOrder::Title => compare_case_insensitive(&a.book.title, &b.book.title),
            SortOrder::Author => compare_case_insensitive(&a.book.author, &b.book.author),
            SortOrder::Status => a.status.cmp(&b.status),
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::CreatedDesc
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = InvalidSortOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "createdAt:desc" => Ok(SortOrder::CreatedDesc),
            "createdAt:asc" => Ok(SortOrder::CreatedAsc),
            "alphabetical:title" => Ok(SortOrder::Title),
            "alphabetical:author" => Ok(SortOrder::Author),
            "status" => Ok(SortOrder::Status),
            other => Err(InvalidSortOrder(other.to_string())),
        }
    }
}

fn compare_case_insensitive(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Snapshot of one list and its memberships
#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    detail: ListDetail,
}

impl ListView {
    /// Build a view from a fetched list
    pub fn new(detail: ListDetail) -> Self {
        Self { detail }
    }

    /// The underlying detail
    pub fn detail(&self) -> &ListDetail {
        &self.detail
    }

    /// The list name
    pub fn name(&self) -> &str {
        &self.detail.name
    }

    /// The memberships in view order
    pub fn books(&self) -> &[ListBookDetail] {
        &self.detail.books
    }

    /// Merge a freshly added membership at the head of the view
    #[must_use]
    pub fn with_book_added(mut self, membership: ListBookDetail) -> Self {
        self.detail.books.insert(0, membership);
        self
    }

    /// Drop a removed membership from the view
    ///
    /// An id that is not in the view leaves the snapshot unchanged.
    #[must_use]
    pub fn with_book_removed(mut self, membership_id: i64) -> Self {
        self.detail.books.retain(|book| book.id != membership_id);
        self
    }

    /// Replace an updated membership in place
    ///
    /// An id that is not in the view leaves the snapshot unchanged.
    #[must_use]
    pub fn with_book_updated(mut self, membership: ListBookDetail) -> Self {
        if let Some(existing) = self
            .detail
            .books
            .iter_mut()
            .find(|book| book.id == membership.id)
        {
            *existing = membership;
        }
        self
    }

    /// Append a note to its membership
    #[must_use]
    pub fn with_note_added(mut self, note: BookNote) -> Self {
        if let Some(membership) = self
            .detail
            .books
            .iter_mut()
            .find(|book| book.id == note.membership_id)
        {
            membership.notes.push(note);
        }
        self
    }

    /// Apply a server-confirmed rename
    #[must_use]
    pub fn renamed(mut self, name: impl Into<String>) -> Self {
        self.detail.name = name.into();
        self
    }

    /// Reorder the view
    ///
    /// The sort is stable: entries that compare equal keep their present
    /// relative order, so repeated sorts are deterministic.
    #[must_use]
    pub fn sorted(mut self, order: SortOrder) -> Self {
        self.detail.books.sort_by(|a, b| order.compare(a, b));
        self
    }
}

/// Snapshot of the top-level list collection
#[derive(Debug, Clone, PartialEq)]
pub struct HomeView {
    lists: Vec<ListDetail>,
}

impl HomeView {
    /// Build a view from the fetched collection
    pub fn new(lists: Vec<ListDetail>) -> Self {
        Self { lists }
    }

    /// The lists in view order
    pub fn lists(&self) -> &[ListDetail] {
        &self.lists
    }

    /// Merge a freshly created list at the head of the view
    #[must_use]
    pub fn with_list_added(mut self, list: ListDetail) -> Self {
        self.lists.insert(0, list);
        self
    }

    /// Drop a deleted list from the view
    ///
    /// An id that is not in the view leaves the snapshot unchanged.
    #[must_use]
    pub fn with_list_removed(mut self, list_id: i64) -> Self {
        self.lists.retain(|list| list.id != list_id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Book, BookNote, List, Status};
    use chrono::{Duration, Utc};

    fn membership(id: i64, title: &str, author: &str, status: Status, age_mins: i64) -> ListBookDetail {
        let list = List::new(1, "Sci-Fi");
        let mut book = Book::new(id + 100, format!("isbn-{}", id), title, author);
        let created = Utc::now() - Duration::minutes(age_mins);
        book.created_at = created;
        book.updated_at = created;

        ListBookDetail {
            id,
            list_id: list.id,
            book_id: book.id,
            status,
            created_at: created,
            updated_at: created,
            book,
            list,
            notes: Vec::new(),
        }
    }

    fn view_with(books: Vec<ListBookDetail>) -> ListView {
        let list = List::new(1, "Sci-Fi");
        ListView::new(ListDetail {
            id: list.id,
            name: list.name,
            created_at: list.created_at,
            updated_at: list.updated_at,
            books,
        })
    }

    #[test]
    fn test_sort_order_parse() {
        assert_eq!(
            "createdAt:desc".parse::<SortOrder>().unwrap(),
            SortOrder::CreatedDesc
        );
        assert_eq!(
            "alphabetical:author".parse::<SortOrder>().unwrap(),
            SortOrder::Author
        );
        assert_eq!("status".parse::<SortOrder>().unwrap(), SortOrder::Status);
        assert!("alphabetical:isbn".parse::<SortOrder>().is_err());
        assert!("".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_sort_order_round_trip() {
        for order in SortOrder::ALL {
            assert_eq!(order.as_str().parse::<SortOrder>().unwrap(), order);
        }
    }

    #[test]
    fn test_add_inserts_at_head() {
        let view = view_with(vec![membership(1, "Dune", "Frank Herbert", Status::Unread, 60)]);
        let view = view.with_book_added(membership(2, "Foundation", "Isaac Asimov", Status::Unread, 0));

        assert_eq!(view.books().len(), 2);
        assert_eq!(view.books()[0].id, 2);
        assert_eq!(view.books()[1].id, 1);
    }

    #[test]
    fn test_remove_by_membership_id() {
        let view = view_with(vec![
            membership(1, "Dune", "Frank Herbert", Status::Unread, 60),
            membership(2, "Foundation", "Isaac Asimov", Status::Unread, 30),
        ]);

        let view = view.with_book_removed(1);
        assert_eq!(view.books().len(), 1);
        assert_eq!(view.books()[0].id, 2);
    }

    #[test]
    fn test_remove_unknown_id_is_a_no_op() {
        let view = view_with(vec![
            membership(1, "Dune", "Frank Herbert", Status::Unread, 60),
            membership(2, "Foundation", "Isaac Asimov", Status::Unread, 30),
        ]);

        let view = view.with_book_removed(42);
        assert_eq!(view.books().len(), 2);
    }

    #[test]
    fn test_update_replaces_in_place() {
        let view = view_with(vec![
            membership(1, "Dune", "Frank Herbert", Status::Unread, 60),
            membership(2, "Foundation", "Isaac Asimov", Status::Unread, 30),
        ]);

        let mut updated = membership(1, "Dune", "Frank Herbert", Status::InProgress, 60);
        updated.notes = vec![BookNote::new(9, 1, "started")];
        let view = view.with_book_updated(updated);

        assert_eq!(view.books().len(), 2);
        assert_eq!(view.books()[0].id, 1);
        assert_eq!(view.books()[0].status, Status::InProgress);
        assert_eq!(view.books()[0].notes.len(), 1);
    }

    #[test]
    fn test_note_lands_on_its_membership() {
        let view = view_with(vec![
            membership(1, "Dune", "Frank Herbert", Status::Unread, 60),
            membership(2, "Foundation", "Isaac Asimov", Status::Unread, 30),
        ]);

        let view = view.with_note_added(BookNote::new(5, 2, "solid start"));
        assert!(view.books()[0].notes.is_empty());
        assert_eq!(view.books()[1].notes.len(), 1);
    }

    #[test]
    fn test_renamed() {
        let view = view_with(vec![membership(1, "Dune", "Frank Herbert", Status::Unread, 60)]);
        let view = view.renamed("Science Fiction");
        assert_eq!(view.name(), "Science Fiction");
        assert_eq!(view.detail().name, "Science Fiction");
        // The memberships survive the rename merge untouched
        assert_eq!(view.books().len(), 1);
    }

    #[test]
    fn test_sort_by_created_reverses() {
        let view = view_with(vec![
            membership(1, "Dune", "Frank Herbert", Status::Unread, 0),
            membership(2, "Foundation", "Isaac Asimov", Status::Unread, 30),
            membership(3, "Hyperion", "Dan Simmons", Status::Unread, 60),
        ]);

        let asc = view.clone().sorted(SortOrder::CreatedAsc);
        let ids: Vec<i64> = asc.books().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);

        let desc = asc.sorted(SortOrder::CreatedDesc);
        let ids: Vec<i64> = desc.books().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_by_title_ignores_case() {
        let view = view_with(vec![
            membership(1, "dune", "Frank Herbert", Status::Unread, 0),
            membership(2, "Consider Phlebas", "Iain M. Banks", Status::Unread, 30),
            membership(3, "Foundation", "Isaac Asimov", Status::Unread, 60),
        ]);

        let sorted = view.sorted(SortOrder::Title);
        let titles: Vec<&str> = sorted.books().iter().map(|b| b.book.title.as_str()).collect();
        assert_eq!(titles, vec!["Consider Phlebas", "dune", "Foundation"]);
    }

    #[test]
    fn test_sort_by_status_keeps_ties_stable() {
        let view = view_with(vec![
            membership(1, "Dune", "Frank Herbert", Status::Finished, 0),
            membership(2, "Foundation", "Isaac Asimov", Status::Unread, 30),
            membership(3, "Hyperion", "Dan Simmons", Status::Unread, 60),
            membership(4, "Ubik", "Philip K. Dick", Status::InProgress, 90),
        ]);

        let sorted = view.sorted(SortOrder::Status);
        let ids: Vec<i64> = sorted.books().iter().map(|b| b.id).collect();
        // Unread entries keep their incoming relative order
        assert_eq!(ids, vec![2, 3, 4, 1]);
    }

    #[test]
    fn test_home_view_add_and_remove() {
        let first = List::new(1, "Sci-Fi");
        let home = HomeView::new(vec![ListDetail {
            id: first.id,
            name: first.name,
            created_at: first.created_at,
            updated_at: first.updated_at,
            books: Vec::new(),
        }]);

        let second = List::new(2, "History");
        let home = home.with_list_added(ListDetail {
            id: second.id,
            name: second.name,
            created_at: second.created_at,
            updated_at: second.updated_at,
            books: Vec::new(),
        });

        assert_eq!(home.lists().len(), 2);
        assert_eq!(home.lists()[0].id, 2);

        let home = home.with_list_removed(1);
        assert_eq!(home.lists().len(), 1);
        assert_eq!(home.lists()[0].id, 2);

        // Removing an unknown id changes nothing
        let home = home.with_list_removed(99);
        assert_eq!(home.lists().len(), 1);
    }
}
