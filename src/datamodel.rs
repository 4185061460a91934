use async_graphql::SimpleObject;

#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
#[graphql(complex)]
pub struct Author {
    pub id: i32,
    pub name: String,
}

#[derive(SimpleObject, Clone, Debug, PartialEq, Eq)]
#[graphql(complex)]
pub struct Book {
    pub id: i32,
    pub name: String,
    pub author_id: i32,
}

pub struct SeedAuthor {
    pub id: i32,
    pub name: &'static str,
}

pub struct SeedBook {
    pub id: i32,
    pub name: &'static str,
    pub author_id: i32,
}

impl From<&SeedAuthor> for Author {
    fn from(seed: &SeedAuthor) -> Self {
        Self {
            id: seed.id,
            name: seed.name.into(),
        }
    }
}

impl From<&SeedBook> for Book {
    fn from(seed: &SeedBook) -> Self {
        Self {
            id: seed.id,
            name: seed.name.into(),
            author_id: seed.author_id,
        }
    }
}

pub static SEED_AUTHORS: &[SeedAuthor] = &[
    SeedAuthor {
        id: 1,
        name: "J.K. Rowling",
    },
    SeedAuthor {
        id: 2,
        name: "J.R.R. Tolkien",
    },
    SeedAuthor {
        id: 3,
        name: "Brent Weeks",
    },
];

pub static SEED_BOOKS: &[SeedBook] = &[
    SeedBook {
        id: 1,
        name: "Harry Potter 1",
        author_id: 1,
    },
    SeedBook {
        id: 2,
        name: "Harry Potter 2",
        author_id: 1,
    },
    SeedBook {
        id: 3,
        name: "Harry Potter 3",
        author_id: 1,
    },
    SeedBook {
        id: 4,
        name: "The Fellowship",
        author_id: 2,
    },
    SeedBook {
        id: 5,
        name: "The Two Towers",
        author_id: 2,
    },
    SeedBook {
        id: 6,
        name: "The Return",
        author_id: 2,
    },
    SeedBook {
        id: 7,
        name: "The Way of Shadows",
        author_id: 3,
    },
    SeedBook {
        id: 8,
        name: "Beyond The Shadows",
        author_id: 3,
    },
];
