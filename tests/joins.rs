use common::{mysql, postgres, users};
use quarry::error::QuarryError;
use quarry::prelude::*;

mod common;

#[test]
fn left_join_keeps_column_order() {
    let mut s = mysql();
    s.from("a", "*")
        .unwrap()
        .join_left("b", "a.x = b.y", "*")
        .unwrap();
    assert_eq!(
        s.assemble().unwrap(),
        "SELECT `a`.*, `b`.* FROM `a`\n LEFT JOIN `b` ON a.x = b.y"
    );
}

#[test]
fn every_conditional_join_type() {
    let mut s = users(mysql());
    s.join("posts AS p", "p.user_id = u.id", ())
        .unwrap()
        .join_right("teams AS t", "t.id = u.team_id", ())
        .unwrap()
        .join_full("roles AS r", "r.id = u.role_id", ())
        .unwrap();
    assert_eq!(
        s.assemble().unwrap(),
        "SELECT `u`.`id`, `u`.`name` FROM `users` AS `u`\n \
         INNER JOIN `posts` AS `p` ON p.user_id = u.id\n \
         RIGHT JOIN `teams` AS `t` ON t.id = u.team_id\n \
         FULL JOIN `roles` AS `r` ON r.id = u.role_id"
    );
}

#[test]
fn cross_and_natural_joins_take_no_condition() {
    let mut s = users(mysql());
    s.join_cross("sizes", "label")
        .unwrap()
        .join_natural("profiles", ())
        .unwrap();
    assert_eq!(
        s.assemble().unwrap(),
        "SELECT `u`.`id`, `u`.`name`, `sizes`.`label` FROM `users` AS `u`\n \
         CROSS JOIN `sizes`\n NATURAL JOIN `profiles`"
    );

    let mut s = users(mysql());
    s.join_with(JoinType::Cross, "sizes", Some("ignored = 1"), (), None)
        .unwrap();
    assert!(!s.assemble().unwrap().contains("ignored"));
}

#[test]
fn later_from_tables_precede_joins() {
    let mut s = mysql();
    s.from("a", "x")
        .unwrap()
        .join_left("b", "b.a_id = a.id", "y")
        .unwrap()
        .from("c", "z")
        .unwrap();
    assert_eq!(
        s.assemble().unwrap(),
        "SELECT `a`.`x`, `c`.`z`, `b`.`y` FROM `a`\n INNER JOIN `c`\n \
         LEFT JOIN `b` ON b.a_id = a.id"
    );
}

#[test]
fn join_before_from_matches_from_before_join() {
    let mut joined_first = mysql();
    joined_first
        .join_left("b", "b.a_id = a.id", "y")
        .unwrap()
        .from("a", "x")
        .unwrap();

    let mut from_first = mysql();
    from_first
        .from("a", "x")
        .unwrap()
        .join_left("b", "b.a_id = a.id", "y")
        .unwrap();

    assert_eq!(
        joined_first.assemble().unwrap(),
        "SELECT `a`.`x`, `b`.`y` FROM `a`\n LEFT JOIN `b` ON b.a_id = a.id"
    );
    assert_eq!(joined_first.assemble(), from_first.assemble());
}

#[test]
fn self_join_gets_unique_correlation() {
    let mut s = mysql();
    s.from("employees", "name")
        .unwrap()
        .join_left("employees", "employees_2.id = employees.manager_id", "name AS manager")
        .unwrap();
    assert_eq!(
        s.assemble().unwrap(),
        "SELECT `employees`.`name`, `employees_2`.`name` AS `manager` FROM `employees`\n \
         LEFT JOIN `employees` AS `employees_2` ON employees_2.id = employees.manager_id"
    );
}

#[test]
fn duplicate_alias_is_rejected() {
    let mut s = users(mysql());
    assert_eq!(
        s.join("posts AS u", "1 = 1", ()).unwrap_err(),
        QuarryError::DuplicateCorrelation("u".into())
    );
}

#[test]
fn join_using_builds_equality_condition() {
    let mut s = postgres();
    s.from("orders AS o", "id")
        .unwrap()
        .join_left_using("customers AS c", &["customer_id", "region"], "name")
        .unwrap();
    assert_eq!(
        s.assemble().unwrap(),
        "SELECT \"o\".\"id\", \"c\".\"name\" FROM \"orders\" AS \"o\"\n \
         LEFT JOIN \"customers\" AS \"c\" ON \"c\".\"customer_id\" = \"o\".\"customer_id\" \
         AND \"c\".\"region\" = \"o\".\"region\""
    );
}

#[test]
fn join_using_without_alias_uses_derived_correlation() {
    let mut s = users(mysql());
    s.join_using("profiles", &["user_id"], ()).unwrap();
    assert!(
        s.assemble()
            .unwrap()
            .ends_with("INNER JOIN `profiles` ON `profiles`.`user_id` = `u`.`user_id`")
    );
}

#[test]
fn join_using_errors() {
    let mut s = mysql();
    assert_eq!(
        s.join_using("profiles", &["user_id"], ()).unwrap_err(),
        QuarryError::JoinUsingWithoutFrom
    );

    let mut s = users(mysql());
    assert_eq!(
        s.join_using_with(JoinType::Cross, "sizes", &["id"], (), None)
            .unwrap_err(),
        QuarryError::UsingNotSupported(JoinType::Cross)
    );
    assert_eq!(
        s.join_using("", &["id"], ()).unwrap_err(),
        QuarryError::MissingJoinTable
    );
}

#[test]
fn join_types_parse_from_keywords() {
    assert_eq!("LEFT  JOIN".parse::<JoinType>(), Ok(JoinType::Left));
    assert_eq!("join".parse::<JoinType>(), Ok(JoinType::Inner));
    assert_eq!(
        "outer join".parse::<JoinType>(),
        Err(QuarryError::InvalidJoinType("outer join".into()))
    );
}
