use std::sync::Arc;

use parking_lot::RwLock;

use crate::datamodel::{Author, Book, SEED_AUTHORS, SEED_BOOKS};
use crate::error::CatalogError;

struct Tables {
    authors: Vec<Author>,
    books: Vec<Book>,
    next_author_id: i32,
    next_book_id: i32,
}

/// In-memory store of authors and books.
///
/// Cloning is cheap and every clone refers to the same tables. Ids come from
/// per-collection counters, so an id is never handed out twice even after
/// deletions.
pub struct Catalog {
    tables: Arc<RwLock<Tables>>,
}

impl Clone for Catalog {
    fn clone(&self) -> Self {
        Self {
            tables: self.tables.clone(),
        }
    }
}

impl Catalog {
    pub fn new(authors: Vec<Author>, books: Vec<Book>) -> Self {
        let next_author_id = authors.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        let next_book_id = books.iter().map(|b| b.id).max().unwrap_or(0) + 1;

        let tables = Tables {
            authors,
            books,
            next_author_id,
            next_book_id,
        };
        Self {
            tables: Arc::new(RwLock::new(tables)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(
            SEED_AUTHORS.iter().map(Author::from).collect(),
            SEED_BOOKS.iter().map(Book::from).collect(),
        )
    }

    pub fn books(&self) -> Vec<Book> {
        self.tables.read().books.clone()
    }

    pub fn book(&self, id: i32) -> Option<Book> {
        self.tables.read().books.iter().find(|b| b.id == id).cloned()
    }

    pub fn authors(&self) -> Vec<Author> {
        self.tables.read().authors.clone()
    }

    pub fn author(&self, id: i32) -> Option<Author> {
        self.tables
            .read()
            .authors
            .iter()
            .find(|a| a.id == id)
            .cloned()
    }

    /// All books whose `author_id` matches, in store order.
    pub fn books_by_author(&self, author_id: i32) -> Vec<Book> {
        self.tables
            .read()
            .books
            .iter()
            .filter(|b| b.author_id == author_id)
            .cloned()
            .collect()
    }

    pub fn add_book(&self, name: String, author_id: i32) -> Book {
        let mut tables = self.tables.write();
        let book = Book {
            id: tables.next_book_id,
            name,
            author_id,
        };
        tables.next_book_id += 1;
        tables.books.push(book.clone());

        tracing::debug!(id = book.id, author_id, "added book");
        book
    }

    pub fn update_book(&self, id: i32, name: String, author_id: i32) -> Result<Book, CatalogError> {
        let mut tables = self.tables.write();
        let book = tables
            .books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(CatalogError::BookNotFound(id))?;

        book.name = name;
        book.author_id = author_id;

        tracing::debug!(id, author_id, "updated book");
        Ok(book.clone())
    }

    /// Removes the book with `id`, leaving the store untouched if there is none.
    pub fn delete_book(&self, id: i32) -> Option<Book> {
        let mut tables = self.tables.write();
        let index = tables.books.iter().position(|b| b.id == id)?;
        let book = tables.books.remove(index);

        tracing::debug!(id, "deleted book");
        Some(book)
    }

    pub fn add_author(&self, name: String) -> Author {
        let mut tables = self.tables.write();
        let author = Author {
            id: tables.next_author_id,
            name,
        };
        tables.next_author_id += 1;
        tables.authors.push(author.clone());

        tracing::debug!(id = author.id, "added author");
        author
    }
}
