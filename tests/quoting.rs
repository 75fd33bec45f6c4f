use quarry::ident::{Identifier, Segment};
use quarry::prelude::*;

#[test]
fn quote_identifier_per_dialect() {
    let expected = [
        (Dialect::MySQL, "`db`.`t`"),
        (Dialect::PostgreSQL, r#""db"."t""#),
        (Dialect::SQLite, r#""db"."t""#),
        (Dialect::Oracle, r#""db"."t""#),
    ];
    for (dialect, quoted) in expected {
        assert_eq!(
            Adapter::new(dialect).quote_identifier("db.t", true).unwrap(),
            quoted,
            "{dialect}"
        );
    }
}

#[test]
fn custom_quote_symbol_is_doubled_inside_names() {
    let adapter = Adapter::new(Dialect::MySQL).with_quote_symbol('"');
    assert_eq!(
        adapter.quote_identifier("a\"b", true).unwrap(),
        r#""a""b""#
    );
}

#[test]
fn identifier_segments_and_subqueries() {
    let adapter = Adapter::new(Dialect::MySQL);
    let ident = Identifier::from(vec![
        Segment::Name("t".into()),
        Segment::Raw(Expr::new("*")),
    ]);
    assert_eq!(adapter.quote_identifier(ident, true).unwrap(), "`t`.*");

    let mut inner = adapter.select();
    inner.from("t", "id").unwrap();
    assert_eq!(
        adapter.quote_table_as(inner, Some("sub"), true).unwrap(),
        "(SELECT `t`.`id` FROM `t`) AS `sub`"
    );
}

#[test]
fn text_round_trips_through_standard_escaping() {
    let adapter = Adapter::new(Dialect::PostgreSQL);
    for text in ["plain", "it's", "''", "a'b'c", "tab\there"] {
        let quoted = adapter.quote(&text.into(), None).unwrap();
        let inner = &quoted[1..quoted.len() - 1];
        assert_eq!(inner.replace("''", "'"), text);
    }
}

#[test]
fn quote_identifier_round_trips() {
    let adapters = Dialect::ALL
        .into_iter()
        .map(Adapter::new)
        .chain([Adapter::new(Dialect::PostgreSQL).with_quote_symbol('`')]);
    for adapter in adapters {
        let q = adapter.quote_symbol().to_string();
        for name in ["plain", "we`ird", "dq\"name", "``", "sp ace"] {
            let quoted = adapter.quote_identifier(name, true).unwrap();
            assert!(quoted.starts_with(&q) && quoted.ends_with(&q), "{quoted}");
            let inner = &quoted[q.len()..quoted.len() - q.len()];
            assert_eq!(inner.replace(&q.repeat(2), &q), name, "{quoted}");
        }
    }
}

#[test]
fn non_finite_float_never_reaches_the_statement() {
    let mut s = quarry::select(Dialect::MySQL);
    s.from("t", "*").unwrap();
    assert_eq!(
        s.where_bind("x < ?", f64::INFINITY).unwrap_err(),
        quarry::error::QuarryError::NonFiniteFloat("inf".to_string())
    );
    assert!(s.where_typed("x < ?", f64::NAN, QuoteType::Float).is_err());
    assert_eq!(s.assemble().unwrap(), "SELECT `t`.* FROM `t`");
}

#[test]
fn mysql_escapes_control_characters() {
    let adapter = Adapter::new(Dialect::MySQL);
    assert_eq!(
        adapter.quote(&"a\0b\r\n\x1a\\'\"".into(), None).unwrap(),
        r#"'a\0b\r\n\Z\\\'\"'"#
    );
}

#[test]
fn quote_values_without_hint() {
    let adapter = Adapter::new(Dialect::SQLite);
    assert_eq!(adapter.quote(&Value::Null, None).unwrap(), "NULL");
    assert_eq!(adapter.quote(&false.into(), None).unwrap(), "0");
    assert_eq!(adapter.quote(&(-3i64).into(), None).unwrap(), "-3");
    assert_eq!(adapter.quote(&0.25.into(), None).unwrap(), "0.250000");
    assert_eq!(
        adapter.quote(&vec!["a", "b"].into(), None).unwrap(),
        "'a', 'b'"
    );
    assert_eq!(
        adapter.quote(&Some(5).into(), None).unwrap(),
        "5"
    );
}

#[test]
fn numeric_hints_from_type_names() {
    let adapter = Adapter::new(Dialect::MySQL);
    let hint: QuoteType = "BIGINT".parse().unwrap();
    assert_eq!(adapter.quote(&"0XfF".into(), Some(hint)).unwrap(), "0XfF");
    assert_eq!(adapter.quote(&"-12e3x".into(), Some(hint)).unwrap(), "-12e3");

    let hint: QuoteType = "decimal".parse().unwrap();
    assert_eq!(adapter.quote(&"3".into(), Some(hint)).unwrap(), "3.000000");
    assert_eq!(
        adapter.quote(&vec!["1", "x"].into(), Some(QuoteType::Int)).unwrap(),
        "1, 0"
    );
}

#[test]
fn quote_into_counts_left_to_right() {
    let adapter = Adapter::new(Dialect::MySQL);
    assert_eq!(
        adapter
            .quote_into("a = ? AND b = ? AND c = ?", &"x".into(), None, Some(2))
            .unwrap(),
        "a = 'x' AND b = 'x' AND c = ?"
    );
    assert_eq!(
        adapter
            .quote_into("a = ?", &7.into(), None, Some(0))
            .unwrap(),
        "a = ?"
    );
}

#[test]
fn disabled_auto_quoting_still_allows_forced_quotes() {
    let adapter = Adapter::new(Dialect::MySQL).with_auto_quote_identifiers(false);
    assert_eq!(adapter.quote_identifier("t", true).unwrap(), "t");
    assert_eq!(adapter.quote_identifier("t", false).unwrap(), "`t`");
    assert_eq!(adapter.quote_name("t", false), "`t`");
}

#[cfg(feature = "serde")]
#[test]
fn adapter_config_from_json() {
    let config: AdapterConfig = serde_json::from_str(
        r#"{"dialect":"postgresql","quote_symbol":"`","auto_quote_identifiers":true}"#,
    )
    .unwrap();
    let adapter = Adapter::from(config);
    assert_eq!(adapter.quote_identifier("t", true).unwrap(), "`t`");
    assert_eq!(adapter.dialect(), Dialect::PostgreSQL);
}
