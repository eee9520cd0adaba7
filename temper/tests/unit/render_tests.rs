use temper::prelude::*;

#[test]
fn test_single_rule() {
    let mut sheet = Stylesheet::new();
    sheet.open("div", |div| {
        div.set("color", "red");
    });

    assert_eq!(sheet.render(), "div {\n    color: red;\n}\n");
}

#[test]
fn test_empty_parent_block_precedes_pseudo_child() {
    let mut sheet = Stylesheet::new();
    sheet.open("a", |a| {
        a.open(":hover", |hover| {
            hover.set("color", "blue");
        });
    });

    assert_eq!(sheet.render(), "a {\n}\na:hover {\n    color: blue;\n}\n");
}

#[test]
fn test_nesting_combinators() {
    let mut sheet = Stylesheet::new();
    sheet.open("div", |div| {
        div.open(":hover", |_| {});
        div.open(".item", |item| {
            item.open(":hover", |_| {});
        });
    });

    let selectors = sheet
        .render()
        .lines()
        .filter(|line| line.ends_with(" {"))
        .map(|line| line.trim_end_matches(" {").to_string())
        .collect::<Vec<_>>();
    assert_eq!(selectors, vec!["div", "div:hover", "div .item", "div .item:hover"]);
}

#[test]
fn test_property_order_after_overwrite() {
    let mut sheet = Stylesheet::new();
    sheet.open("p", |p| {
        p.set("color", "red").set("width", "1px").set("color", "green");
    });

    assert_eq!(sheet.render(), "p {\n    color: green;\n    width: 1px;\n}\n");
}

#[test]
fn test_default_read_leaves_no_line() {
    let mut sheet = Stylesheet::new();
    sheet.open("p", |p| {
        assert_eq!(p.get_or("width", "10"), "10");
        assert!(p.get("width").is_err());
    });

    assert_eq!(sheet.render(), "p {\n}\n");
}

#[test]
fn test_pre_order_across_siblings() {
    let mut sheet = Stylesheet::new();
    sheet.open("nav", |nav| {
        nav.open("ul", |ul| {
            ul.set("margin", "0");
        });
        nav.open("a", |_| {});
    });
    sheet.open("footer", |footer| {
        footer.set("height", "3rem");
    });

    let expected = "\
nav {
}
nav ul {
    margin: 0;
}
nav a {
}
footer {
    height: 3rem;
}
";
    assert_eq!(sheet.render(), expected);
}

#[test]
fn test_empty_stylesheet() {
    assert_eq!(Stylesheet::new().render(), "");
}

#[test]
fn test_render_under_parent() {
    let rule = CssRule::new(":focus").property("outline", "none");
    assert_eq!(rule.render_under("input"), "input:focus {\n    outline: none;\n}\n");
    assert_eq!(rule.render(), ":focus {\n    outline: none;\n}\n");
}

#[test]
fn test_built_selectors_render() {
    let mut sheet = Stylesheet::new();
    sheet.open(a().with([Selector::from(attribute("target").equals("_blank"))]), |a| {
        a.open(PseudoClass::Visited, |visited| {
            visited.color("purple");
        });
    });

    assert_eq!(
        sheet.render(),
        "a[target=_blank] {\n}\na[target=_blank]:visited {\n    color: purple;\n}\n"
    );
}

#[test]
fn test_custom_indent() {
    let mut sheet = Stylesheet::new();
    sheet.open("b", |b| {
        b.set("font-weight", "bold");
    });
    let config = RenderConfig {
        indent: 2,
        ..RenderConfig::default()
    };

    assert_eq!(sheet.render_with(&config), "b {\n  font-weight: bold;\n}\n");
}
