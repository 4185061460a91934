use async_graphql::{ComplexObject, Context, ErrorExtensions, Object, Result};

use crate::catalog::Catalog;
use crate::datamodel::{Author, Book};

#[ComplexObject]
impl Book {
    /// The author this book refers to, if one with a matching id exists.
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<Author>> {
        Ok(ctx.data::<Catalog>()?.author(self.author_id))
    }
}

#[ComplexObject]
impl Author {
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
        Ok(ctx.data::<Catalog>()?.books_by_author(self.id))
    }
}

pub struct Query;

#[Object]
impl Query {
    async fn books(&self, ctx: &Context<'_>) -> Result<Vec<Book>> {
        Ok(ctx.data::<Catalog>()?.books())
    }

    async fn book(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<Book>> {
        let catalog = ctx.data::<Catalog>()?;
        Ok(id.and_then(|id| catalog.book(id)))
    }

    async fn authors(&self, ctx: &Context<'_>) -> Result<Vec<Author>> {
        Ok(ctx.data::<Catalog>()?.authors())
    }

    async fn author(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<Author>> {
        let catalog = ctx.data::<Catalog>()?;
        Ok(id.and_then(|id| catalog.author(id)))
    }
}

pub struct Mutation;

#[Object]
impl Mutation {
    async fn add_book(&self, ctx: &Context<'_>, name: String, author_id: i32) -> Result<Book> {
        Ok(ctx.data::<Catalog>()?.add_book(name, author_id))
    }

    /// Overwrites the name and author of an existing book.
    async fn update_book(
        &self,
        ctx: &Context<'_>,
        id: i32,
        name: String,
        author_id: i32,
    ) -> Result<Book> {
        ctx.data::<Catalog>()?
            .update_book(id, name, author_id)
            .map_err(|e| e.extend())
    }

    /// Returns the removed book, or null when there was nothing to remove.
    async fn delete_book(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Book>> {
        Ok(ctx.data::<Catalog>()?.delete_book(id))
    }

    async fn add_author(&self, ctx: &Context<'_>, name: String) -> Result<Author> {
        Ok(ctx.data::<Catalog>()?.add_author(name))
    }
}
