#![allow(dead_code)]

use quarry::prelude::*;

pub fn mysql() -> Select {
    quarry::select(Dialect::MySQL)
}

pub fn postgres() -> Select {
    quarry::select(Dialect::PostgreSQL)
}

pub fn sqlite() -> Select {
    quarry::select(Dialect::SQLite)
}

pub fn oracle() -> Select {
    quarry::select(Dialect::Oracle)
}

/// `users AS u` with id and name, the base of most fixtures.
pub fn users(mut select: Select) -> Select {
    select
        .from("users AS u", ["id", "name"])
        .expect("from users");
    select
}
