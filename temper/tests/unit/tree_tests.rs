use temper::prelude::*;

#[test]
fn test_open_links_child_after_body() {
    let mut sheet = Stylesheet::new();
    sheet.open("div", |div| {
        div.set("color", "red");
        div.open(".item", |item| {
            item.set("width", "10px");
        });
    });

    assert_eq!(sheet.rules().len(), 1);
    let div = &sheet.rules()[0];
    assert_eq!(div.selector(), "div");
    assert_eq!(div.get("color"), Ok("red"));
    assert_eq!(div.rules().len(), 1);
    assert_eq!(div.rules()[0].selector(), ".item");
}

#[test]
fn test_open_accepts_selectors() {
    let mut sheet = Stylesheet::new();
    sheet
        .open(div().with([class("card")]), |_| {})
        .open(attribute("disabled"), |_| {})
        .open(PseudoClass::Root, |_| {})
        .open(String::from("p"), |_| {});

    let selectors = sheet.rules().iter().map(CssRule::selector).collect::<Vec<_>>();
    assert_eq!(selectors, vec!["div.card", "[disabled]", ":root", "p"]);
}

#[test]
fn test_scoped_helpers() {
    let mut sheet = Stylesheet::new();
    sheet.id("main", |_| {});
    sheet.class(join(Some(class("a")), Some(class("b"))).unwrap(), |_| {});
    sheet.for_any([h1(), h2()], |_| {});

    let selectors = sheet.rules().iter().map(CssRule::selector).collect::<Vec<_>>();
    assert_eq!(selectors, vec!["#main", ".a .b", "(h1,h2)"]);
}

#[test]
fn test_children_keep_insertion_order() {
    let mut sheet = Stylesheet::new();
    sheet.open("ul", |ul| {
        ul.open("li", |_| {}).open(":hover", |_| {}).open("a", |_| {});
    });

    let ul = &sheet.rules()[0];
    let selectors = ul.rules().iter().map(CssRule::selector).collect::<Vec<_>>();
    assert_eq!(selectors, vec!["li", ":hover", "a"]);
}

#[test]
fn test_value_builders_mix_with_scoped_construction() {
    let mut sheet: Stylesheet = vec![CssRule::new("html").property("margin", "0")]
        .into_iter()
        .collect();
    sheet.push(CssRule::new("nav").child(CssRule::new(":active").property("color", "red")));
    sheet.open("footer", |_| {});

    assert_eq!(sheet.rules().len(), 3);
    assert_eq!(sheet.rules()[1].rules()[0].get("color"), Ok("red"));
}

#[test]
fn test_typed_setters_store_text() {
    let mut rule = CssRule::new("div");
    rule.width("10px")
        .color("red")
        .border_style(BorderStyle::Dotted)
        .font_weight(700)
        .float("left");

    assert_eq!(rule.get("width"), Ok("10px"));
    assert_eq!(rule.get("border-style"), Ok("dotted"));
    assert_eq!(rule.get("font-weight"), Ok("700"));
    assert_eq!(rule.get("float"), Ok("left"));
}

#[test]
fn test_defaulted_getters() {
    let mut rule = CssRule::new("div");
    assert_eq!(rule.border_radius_or_default(), "0px");
    assert_eq!(rule.overflow_or_default(), "inherit");
    assert_eq!(rule.text_align_or_default(), "inherit");

    rule.overflow("hidden");
    assert_eq!(rule.overflow_or_default(), "hidden");
    assert!(rule.get("border-radius").is_err());
}
