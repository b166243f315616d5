//! BookShelf - the reading list in display order.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, info};

use planner_models::{Book, BookDetails, BookId};
use planner_persistence::{BookRepository, Database, SqliteBookRepository};

use crate::changes::{order_override, BookChanges, UpdateMode};
use crate::error::{Result, ShelfError};

/// One position assignment in a reorder request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderAssignment {
    pub id: BookId,
    pub order: i64,
}

impl OrderAssignment {
    pub fn new(id: BookId, order: i64) -> Self {
        Self { id, order }
    }
}

/// Reading list manager backed by the record store.
#[derive(Clone)]
pub struct BookShelf {
    db: Arc<Database>,
}

impl BookShelf {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Lists books by `order`, ties broken by id.
    pub fn list(&self) -> Result<Vec<Book>> {
        self.db
            .with_conn(|conn| Ok(SqliteBookRepository::new(conn).list_books()?))
    }

    pub fn get(&self, id: BookId) -> Result<Book> {
        self.db.with_conn(|conn| find(&SqliteBookRepository::new(conn), id))
    }

    /// Creates a book from a full field map. `order` defaults to 0.
    pub fn create(&self, fields: &Map<String, Value>) -> Result<Book> {
        let order = order_override(fields)?.unwrap_or_default();
        let changes = BookChanges::parse(fields, UpdateMode::Full)?;

        let mut details = BookDetails::default().with_order(order);
        changes.apply(&mut details);

        let book = self.db.transaction(|tx| {
            Ok::<_, ShelfError>(SqliteBookRepository::new(tx).insert_book(&details)?)
        })?;
        info!(book_id = %book.id, title = %book.details.title, "added book");
        Ok(book)
    }

    /// Updates a book from a field map.
    ///
    /// An explicit `order` is committed first, on its own. The remaining
    /// fields are validated afterwards, so a validation error leaves the
    /// new order in place.
    pub fn update(
        &self,
        id: BookId,
        fields: &Map<String, Value>,
        mode: UpdateMode,
    ) -> Result<Book> {
        self.db.transaction(|tx| {
            let books = SqliteBookRepository::new(tx);
            find(&books, id)?;
            if let Some(order) = order_override(fields)? {
                books.set_book_order(id, order)?;
                debug!(book_id = %id, order, "committed order override");
            }
            Ok::<_, ShelfError>(())
        })?;

        let changes = BookChanges::parse(fields, mode)?;

        self.db.transaction(|tx| {
            let books = SqliteBookRepository::new(tx);
            let mut book = find(&books, id)?;
            changes.apply(&mut book.details);
            books.update_book(&book)?;
            Ok(book)
        })
    }

    /// Assigns new positions in input order.
    ///
    /// Either every assignment is applied or none is: the first unknown id
    /// aborts the call and rolls back the earlier ones.
    pub fn reorder(&self, assignments: &[OrderAssignment]) -> Result<()> {
        self.db.transaction(|tx| {
            let books = SqliteBookRepository::new(tx);
            for assignment in assignments {
                if !books.set_book_order(assignment.id, assignment.order)? {
                    return Err(ShelfError::NotFound(assignment.id));
                }
            }
            Ok(())
        })?;
        info!(count = assignments.len(), "reordered books");
        Ok(())
    }

    /// Removes a book permanently.
    pub fn delete(&self, id: BookId) -> Result<()> {
        let removed = self.db.transaction(|tx| {
            Ok::<_, ShelfError>(SqliteBookRepository::new(tx).delete_book(id)?)
        })?;
        if !removed {
            return Err(ShelfError::NotFound(id));
        }
        info!(book_id = %id, "deleted book");
        Ok(())
    }
}

fn find(books: &impl BookRepository, id: BookId) -> Result<Book> {
    books.get_book(id)?.ok_or(ShelfError::NotFound(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn shelf() -> BookShelf {
        BookShelf::new(Arc::new(Database::open_in_memory().unwrap()))
    }

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    fn add(shelf: &BookShelf, title: &str, order: i64) -> Book {
        shelf
            .create(&fields(json!({
                "title": title,
                "author": "Someone",
                "status": "to-read",
                "order": order,
            })))
            .unwrap()
    }

    #[test]
    fn test_create_defaults_order_and_validates() {
        let shelf = shelf();
        let book = shelf
            .create(&fields(json!({
                "title": "Dune",
                "author": "Frank Herbert",
                "status": "reading",
                "startDate": "2024-01-15",
                "endDate": "",
            })))
            .unwrap();
        assert_eq!(book.details.order, 0);
        assert_eq!(book.details.start_date.map(|d| d.to_string()).as_deref(), Some("2024-01-15"));
        assert_eq!(book.details.end_date, None);

        let err = shelf.create(&fields(json!({"title": "No author"}))).unwrap_err();
        assert!(matches!(err, ShelfError::Validation(_)));
        assert_eq!(shelf.list().unwrap().len(), 1);
    }

    #[test]
    fn test_list_sorted_by_order() {
        let shelf = shelf();
        add(&shelf, "C", 3);
        add(&shelf, "A", 1);
        add(&shelf, "B", 2);

        let titles: Vec<String> = shelf
            .list()
            .unwrap()
            .into_iter()
            .map(|book| book.details.title)
            .collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_reorder_swaps_positions() {
        let shelf = shelf();
        let a = add(&shelf, "A", 0);
        let b = add(&shelf, "B", 1);

        shelf
            .reorder(&[OrderAssignment::new(a.id, 1), OrderAssignment::new(b.id, 0)])
            .unwrap();

        let ids: Vec<BookId> = shelf.list().unwrap().into_iter().map(|book| book.id).collect();
        assert_eq!(ids, vec![b.id, a.id]);
    }

    #[test]
    fn test_reorder_unknown_id_rolls_back() {
        let shelf = shelf();
        let a = add(&shelf, "A", 0);
        let missing = BookId::new(999);

        let err = shelf
            .reorder(&[OrderAssignment::new(a.id, 5), OrderAssignment::new(missing, 1)])
            .unwrap_err();

        assert!(matches!(err, ShelfError::NotFound(id) if id == missing));
        assert_eq!(err.to_string(), "Book with ID 999 does not exist.");
        assert_eq!(shelf.get(a.id).unwrap().details.order, 0);
    }

    #[test]
    fn test_update_order_survives_validation_failure() {
        let shelf = shelf();
        let book = add(&shelf, "Dune", 0);

        let err = shelf
            .update(
                book.id,
                &fields(json!({"order": "5", "title": ""})),
                UpdateMode::Partial,
            )
            .unwrap_err();
        assert!(matches!(err, ShelfError::Validation(ref e) if e.has_field("title")));

        let stored = shelf.get(book.id).unwrap();
        assert_eq!(stored.details.order, 5);
        assert_eq!(stored.details.title, "Dune");
    }

    #[test]
    fn test_full_update_replaces_fields() {
        let shelf = shelf();
        let book = add(&shelf, "Dune", 2);

        let updated = shelf
            .update(
                book.id,
                &fields(json!({
                    "id": book.id,
                    "title": "Dune Messiah",
                    "author": "Frank Herbert",
                    "status": "finished",
                    "pages": 256,
                })),
                UpdateMode::Full,
            )
            .unwrap();

        assert_eq!(updated.details.title, "Dune Messiah");
        assert_eq!(updated.details.pages, Some(256));
        assert_eq!(updated.details.order, 2);
        assert_eq!(shelf.get(book.id).unwrap(), updated);
    }

    #[test]
    fn test_update_and_delete_missing_book() {
        let shelf = shelf();
        let missing = BookId::new(12);

        let err = shelf
            .update(missing, &fields(json!({"order": 1})), UpdateMode::Partial)
            .unwrap_err();
        assert!(matches!(err, ShelfError::NotFound(_)));

        assert!(matches!(shelf.delete(missing).unwrap_err(), ShelfError::NotFound(_)));
    }

    #[test]
    fn test_update_missing_book_reported_before_bad_order() {
        let shelf = shelf();
        let err = shelf
            .update(BookId::new(999), &fields(json!({"order": "x"})), UpdateMode::Full)
            .unwrap_err();
        assert!(matches!(err, ShelfError::NotFound(id) if id == BookId::new(999)));
    }

    #[test]
    fn test_update_bad_order_writes_nothing() {
        let shelf = shelf();
        let book = add(&shelf, "Dune", 3);

        let err = shelf
            .update(
                book.id,
                &fields(json!({"order": "x", "title": "Changed"})),
                UpdateMode::Partial,
            )
            .unwrap_err();
        assert!(matches!(err, ShelfError::Validation(ref e) if e.has_field("order")));
        assert_eq!(shelf.get(book.id).unwrap(), book);
    }

    #[test]
    fn test_delete_removes_book() {
        let shelf = shelf();
        let book = add(&shelf, "Dune", 0);
        shelf.delete(book.id).unwrap();
        assert!(shelf.list().unwrap().is_empty());
    }
}
