use common::{mysql, users};
use quarry::error::QuarryError;
use quarry::prelude::*;
use quarry::select::UnionTarget;

mod common;

fn member(table: &str) -> Select {
    let mut s = mysql();
    s.from(table, "id").unwrap();
    s
}

#[test]
fn union_of_two_selects() {
    let mut s = mysql();
    s.union([member("a"), member("b")], UnionType::Union).unwrap();
    assert_eq!(
        s.assemble().unwrap(),
        "SELECT `a`.`id` FROM `a` UNION SELECT `b`.`id` FROM `b`"
    );
}

#[test]
fn where_after_union_is_rejected() {
    let mut s = mysql();
    s.union([member("a"), member("b")], UnionType::Union).unwrap();
    assert_eq!(
        s.r#where("id = 1").unwrap_err(),
        QuarryError::WhereWithUnion
    );
    assert_eq!(
        s.from("c", "*").unwrap_err(),
        QuarryError::TableWithUnion
    );
}

#[test]
fn union_after_from_or_where_is_rejected() {
    let mut s = users(mysql());
    assert_eq!(
        s.union([member("a")], UnionType::Union).unwrap_err(),
        QuarryError::UnionWithTable
    );
}

#[test]
fn union_all_with_raw_members_and_order() {
    let mut s = mysql();
    s.union(
        [
            UnionTarget::from("SELECT 1 AS n"),
            UnionTarget::from(member("a")),
        ],
        UnionType::UnionAll,
    )
    .unwrap()
    .order("1")
    .limit(5, 0);
    assert_eq!(
        s.assemble().unwrap(),
        "SELECT 1 AS n UNION ALL SELECT `a`.`id` FROM `a` ORDER BY 1 ASC LIMIT 5"
    );
}

#[test]
fn union_keyword_parses() {
    assert_eq!("union all".parse::<UnionType>(), Ok(UnionType::UnionAll));
    assert_eq!(
        "intersect".parse::<UnionType>(),
        Err(QuarryError::InvalidUnionType("intersect".into()))
    );
}
