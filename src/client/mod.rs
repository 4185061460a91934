use cynic::http::{CynicReqwestError, ReqwestExt};
use cynic::serde;
use reqwest::Url;

pub struct Client {
    client: reqwest::Client,
    url: Url,
}

impl Client {
    pub fn new(url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    /// Sends a query or mutation built with cynic's `QueryBuilder` or `MutationBuilder`.
    pub async fn run<Query, Input>(
        &self,
        op: cynic::Operation<Query, Input>,
    ) -> Result<cynic::GraphQlResponse<Query>, CynicReqwestError>
    where
        Input: serde::Serialize,
        Query: serde::de::DeserializeOwned + 'static,
    {
        self.client.post(self.url.clone()).run_graphql(op).await
    }
}

#[cynic::schema("catalog")]
mod schema {}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Query")]
pub struct Library {
    pub books: Vec<BookWithAuthor>,
    pub authors: Vec<AuthorWithBooks>,
}

#[derive(cynic::QueryFragment, Debug, PartialEq)]
pub struct Book {
    pub id: i32,
    pub name: String,
    pub author_id: i32,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Book")]
pub struct BookWithAuthor {
    pub name: String,
    pub author: Option<AuthorName>,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Author")]
pub struct AuthorName {
    pub name: String,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Author")]
pub struct AuthorWithBooks {
    pub id: i32,
    pub name: String,
    pub books: Vec<Book>,
}

#[derive(cynic::QueryFragment, Debug, PartialEq)]
pub struct Author {
    pub id: i32,
    pub name: String,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct BookArguments {
    pub id: Option<i32>,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Query", variables = "BookArguments")]
pub struct BookById {
    #[arguments(id: $id)]
    pub book: Option<Book>,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct AddBookArguments {
    pub name: String,
    pub author_id: i32,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Mutation", variables = "AddBookArguments")]
pub struct AddBook {
    #[arguments(name: $name, authorId: $author_id)]
    pub add_book: Book,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct UpdateBookArguments {
    pub id: i32,
    pub name: String,
    pub author_id: i32,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Mutation", variables = "UpdateBookArguments")]
pub struct UpdateBook {
    #[arguments(id: $id, name: $name, authorId: $author_id)]
    pub update_book: Book,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct DeleteBookArguments {
    pub id: i32,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Mutation", variables = "DeleteBookArguments")]
pub struct DeleteBook {
    #[arguments(id: $id)]
    pub delete_book: Option<Book>,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct AddAuthorArguments {
    pub name: String,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Mutation", variables = "AddAuthorArguments")]
pub struct AddAuthor {
    #[arguments(name: $name)]
    pub add_author: Author,
}
