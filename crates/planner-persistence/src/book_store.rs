//! Book table access.

use rusqlite::{params, Connection, OptionalExtension, Row};

use planner_models::{Book, BookDetails, BookId};

use crate::error::Result;

const BOOK_SELECT_SQL: &str = "SELECT
    id,
    title,
    author,
    status,
    start_date,
    end_date,
    thumbnail,
    pages,
    \"order\",
    notes
FROM books";

/// Repository interface for the reading list.
pub trait BookRepository {
    /// Lists books by display position, ties broken by id.
    fn list_books(&self) -> Result<Vec<Book>>;
    fn get_book(&self, id: BookId) -> Result<Option<Book>>;
    fn insert_book(&self, details: &BookDetails) -> Result<Book>;
    fn update_book(&self, book: &Book) -> Result<bool>;
    /// Writes only the order column; returns false if the id is unknown.
    fn set_book_order(&self, id: BookId, order: i64) -> Result<bool>;
    fn delete_book(&self, id: BookId) -> Result<bool>;
}

/// SQLite-backed book repository.
pub struct SqliteBookRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBookRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl BookRepository for SqliteBookRepository<'_> {
    fn list_books(&self) -> Result<Vec<Book>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{BOOK_SELECT_SQL} ORDER BY \"order\" ASC, id ASC"))?;
        let books = stmt
            .query_map([], book_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(books)
    }

    fn get_book(&self, id: BookId) -> Result<Option<Book>> {
        let book = self
            .conn
            .query_row(
                &format!("{BOOK_SELECT_SQL} WHERE id = ?1"),
                params![id.get()],
                book_from_row,
            )
            .optional()?;
        Ok(book)
    }

    fn insert_book(&self, details: &BookDetails) -> Result<Book> {
        self.conn.execute(
            "INSERT INTO books (
                title,
                author,
                status,
                start_date,
                end_date,
                thumbnail,
                pages,
                \"order\",
                notes
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                details.title,
                details.author,
                details.status,
                details.start_date,
                details.end_date,
                details.thumbnail,
                details.pages,
                details.order,
                details.notes,
            ],
        )?;

        Ok(Book {
            id: BookId::new(self.conn.last_insert_rowid()),
            details: details.clone(),
        })
    }

    fn update_book(&self, book: &Book) -> Result<bool> {
        let details = &book.details;
        let changed = self.conn.execute(
            "UPDATE books
             SET
                title = ?1,
                author = ?2,
                status = ?3,
                start_date = ?4,
                end_date = ?5,
                thumbnail = ?6,
                pages = ?7,
                \"order\" = ?8,
                notes = ?9
             WHERE id = ?10",
            params![
                details.title,
                details.author,
                details.status,
                details.start_date,
                details.end_date,
                details.thumbnail,
                details.pages,
                details.order,
                details.notes,
                book.id.get(),
            ],
        )?;
        Ok(changed > 0)
    }

    fn set_book_order(&self, id: BookId, order: i64) -> Result<bool> {
        let changed = self.conn.execute(
            "UPDATE books SET \"order\" = ?1 WHERE id = ?2",
            params![order, id.get()],
        )?;
        Ok(changed > 0)
    }

    fn delete_book(&self, id: BookId) -> Result<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM books WHERE id = ?1", params![id.get()])?;
        Ok(changed > 0)
    }
}

fn book_from_row(row: &Row<'_>) -> rusqlite::Result<Book> {
    Ok(Book {
        id: BookId::new(row.get(0)?),
        details: BookDetails {
            title: row.get(1)?,
            author: row.get(2)?,
            status: row.get(3)?,
            start_date: row.get(4)?,
            end_date: row.get(5)?,
            thumbnail: row.get(6)?,
            pages: row.get(7)?,
            order: row.get(8)?,
            notes: row.get(9)?,
        },
    })
}
