use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "User 1")]
    pub name: String,
    #[schema(example = "3E1aA@example.com")]
    pub email: String,
    #[schema(example = 25)]
    pub age: u32,
}

#[derive(Debug, Clone, Copy)]
pub struct StaticUser {
    pub id: i32,
    pub name: &'static str,
    pub email: &'static str,
    pub age: u32,
}

impl From<&StaticUser> for User {
    fn from(u: &StaticUser) -> Self {
        Self {
            id: u.id,
            name: u.name.to_string(),
            email: u.email.to_string(),
            age: u.age,
        }
    }
}

pub static USERS: [StaticUser; 2] = [
    StaticUser {
        id: 1,
        name: "User 1",
        email: "3E1aA@example.com",
        age: 25,
    },
    StaticUser {
        id: 2,
        name: "User 2",
        email: "Gv7Gg@example.com",
        age: 30,
    },
];

/// Owned copies of a static user list.
pub fn to_users(users: &[StaticUser]) -> Vec<User> {
    users.iter().map(User::from).collect()
}
