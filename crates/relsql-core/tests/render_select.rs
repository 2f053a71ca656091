//! Tests for rendering SELECT statements: clause shapes, joins,
//! sub-selects, quoting and configuration.

mod common;
use common::*;

use std::sync::Arc;
use std::thread;

use relsql_core::ast::{NullOrdering, OrderByField};
use relsql_core::dialect::{DialectKind, MYSQL, POSTGRES};
use relsql_core::{
    Conditions, Expressions, Functions, Identifier, Quoting, RenderConfig, Select, SqlRenderer,
    Table,
};

fn users_by_name() -> Select {
    let users = aliased("users", "u");
    let name = users.column("name").unwrap();
    Select::builder()
        .select([users.column("id").unwrap(), name.clone()])
        .from([users])
        .where_clause(Conditions::like(&name, Expressions::string("A%")))
        .order_by([name])
        .build()
        .unwrap()
}

#[test]
fn simple_select() {
    let users = table("users");
    let select = Select::builder()
        .select(users.columns(["id", "name"]).unwrap())
        .from([users])
        .build()
        .unwrap();
    assert_eq!(render(&select), "SELECT users.id, users.name FROM users");
}

#[test]
fn select_asterisk_from_several_tables() {
    let a = table("a");
    let b = table("b");
    let select = Select::builder()
        .select([Expressions::asterisk()])
        .from([a, b])
        .build()
        .unwrap();
    assert_eq!(render(&select), "SELECT * FROM a, b");
}

#[test]
fn comparison_and_like_shapes() {
    assert_eq!(
        render(&users_by_name()),
        "SELECT u.id, u.name FROM users AS u WHERE u.name LIKE 'A%' ORDER BY u.name"
    );

    let users = table("users");
    let age = users.column("age").unwrap();
    let select = Select::builder()
        .select([&age])
        .from([users])
        .where_clause(Conditions::is_greater_or_equal_to(&age, Expressions::integer(18)))
        .build()
        .unwrap();
    assert_eq!(
        render(&select),
        "SELECT users.age FROM users WHERE users.age >= 18"
    );
}

#[test]
fn all_join_types() {
    let a = table("a");
    let b = table("b");
    let c = table("c");
    let d = table("d");
    let e = table("e");
    let id = a.column("id").unwrap();
    let on = |t: &Table| Conditions::is_equal(&id, t.column("a_id").unwrap());

    let select = Select::builder()
        .select([&id])
        .from([a.clone()])
        .join(b.clone(), on(&b))
        .left_outer_join(c.clone(), on(&c))
        .right_outer_join(d.clone(), on(&d))
        .full_outer_join(e.clone(), on(&e))
        .build()
        .unwrap();

    assert_eq!(
        render(&select),
        "SELECT a.id FROM a \
         JOIN b ON a.id = b.a_id \
         LEFT OUTER JOIN c ON a.id = c.a_id \
         RIGHT OUTER JOIN d ON a.id = d.a_id \
         FULL OUTER JOIN e ON a.id = e.a_id"
    );
}

#[test]
fn in_sub_select() {
    let floo = table("floo");
    let bah = floo.column("bah").unwrap();
    let inner = Select::builder()
        .select([&bah])
        .from([floo])
        .where_clause(Conditions::is_not_null(&bah))
        .build()
        .unwrap();

    let users = table("users");
    let id = users.column("id").unwrap();
    let select = Select::builder()
        .select([&id])
        .from([users])
        .where_clause(Conditions::in_select(&id, inner))
        .build()
        .unwrap();

    assert_eq!(
        render(&select),
        "SELECT users.id FROM users WHERE users.id IN \
         (SELECT floo.bah FROM floo WHERE floo.bah IS NOT NULL)"
    );
}

#[test]
fn in_list_and_not_in_one() {
    let users = table("users");
    let status = users.column("status").unwrap();
    let select = Select::builder()
        .select([users.asterisk()])
        .from([users])
        .where_clause(
            Conditions::in_list(&status, [Expressions::string("a"), Expressions::string("b")])
                .unwrap(),
        )
        .and(Conditions::not_in_one(&status, Expressions::string("c")))
        .build()
        .unwrap();

    assert_eq!(
        render(&select),
        "SELECT users.* FROM users WHERE users.status IN ('a', 'b') \
         AND users.status NOT IN ('c')"
    );
}

#[test]
fn sub_select_in_select_list() {
    let orders = table("orders");
    let count = Select::builder()
        .select([Functions::count(Expressions::asterisk())])
        .from([orders])
        .build()
        .unwrap();

    let users = table("users");
    let select = Select::builder()
        .select([users.column("id").unwrap().into(), Expressions::sub_select(count)])
        .from([users])
        .build()
        .unwrap();

    assert_eq!(
        render(&select),
        "SELECT users.id, (SELECT COUNT(*) FROM orders) FROM users"
    );
}

#[test]
fn nested_and_negated_conditions() {
    let users = table("users");
    let a = users.column("a").unwrap();
    let b = users.column("b").unwrap();
    let select = Select::builder()
        .select([&a])
        .from([users])
        .where_clause(Conditions::not(Conditions::nest(Conditions::or(
            Conditions::is_equal(&a, Expressions::bind_marker()),
            Conditions::is_less(&b, Expressions::named_bind_marker("max").unwrap()),
        ))))
        .build()
        .unwrap();

    assert_eq!(
        render(&select),
        "SELECT users.a FROM users WHERE NOT (users.a = ? OR users.b < :max)"
    );
}

#[test]
fn order_by_direction_and_nulls() {
    let users = table("users");
    let name = users.column("name").unwrap();
    let age = users.column("age").unwrap();
    let select = Select::builder()
        .select([&name])
        .from([users])
        .order_by([
            OrderByField::of(&age).desc().nulls(NullOrdering::First),
            OrderByField::of(&name).asc(),
        ])
        .build()
        .unwrap();

    assert_eq!(
        render(&select),
        "SELECT users.name FROM users ORDER BY users.age DESC NULLS FIRST, users.name ASC"
    );
}

#[test]
fn quoted_identifiers() {
    let order = Table::from_identifier(Identifier::quoted("order").unwrap());
    let select = Select::builder()
        .select([order.column("id").unwrap()])
        .from([order])
        .build()
        .unwrap();

    assert_eq!(render(&select), "SELECT \"order\".id FROM \"order\"");
    assert_eq!(render_with(&MYSQL, &select), "SELECT `order`.id FROM `order`");

    let never = SqlRenderer::new(RenderConfig::default().with_quoting(Quoting::Never));
    assert_eq!(never.render(&select).unwrap(), "SELECT order.id FROM order");
}

#[test]
fn rendering_is_idempotent() {
    let select = users_by_name();
    let renderer = SqlRenderer::with_dialect(&POSTGRES);
    assert_eq!(renderer.render(&select).unwrap(), renderer.render(&select).unwrap());
}

#[test]
fn concurrent_renders_agree() {
    let select = Arc::new(users_by_name());
    let expected = render(&select);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let select = Arc::clone(&select);
            thread::spawn(move || SqlRenderer::default().render(&select).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn config_from_json() {
    let config: RenderConfig =
        serde_json::from_str(r#"{"dialect": "sqlserver", "quoting": "always"}"#).unwrap();
    assert_eq!(config.dialect, DialectKind::SqlServer);
    assert_eq!(config.quoting, Quoting::Always);

    let defaults: RenderConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(defaults, RenderConfig::default());
    assert_eq!(
        serde_json::to_string(&defaults).unwrap(),
        r#"{"dialect":"ansi","quoting":"as-declared"}"#
    );

    let users = table("users");
    let select = Select::builder()
        .select([users.column("id").unwrap()])
        .from([users])
        .build()
        .unwrap();
    assert_eq!(
        SqlRenderer::new(config).render(&select).unwrap(),
        "SELECT \"users\".\"id\" FROM \"users\""
    );
}
