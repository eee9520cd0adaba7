use anyhow::Context;
use temper::prelude::*;

fn layout() -> Vec<CssRule> {
    vec![
        CssRule::new(":root")
            .property("--neutral-300", "#404040")
            .property("--neutral-950", "#fafafa")
            .property("--emerald-500", "#10b981"),
        CssRule::new("footer")
            .property("background-color", "var(--neutral-950)")
            .property("height", "3rem")
            .property("display", "flex"),
    ]
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    let config = temper::load_config().context("Failed to load .temper.toml")?;

    let mut sheet = Stylesheet::new();
    sheet.extend(layout());

    sheet.open(tag("header"), |header| {
        header
            .background_color("var(--neutral-950)")
            .height("4rem")
            .display("flex");
        header.open(nav(), |nav| {
            nav.padding("0.5rem").border_radius("0.25rem");
            nav.open(PseudoClass::Hover, |hover| {
                hover.color("var(--neutral-100)");
            });
        });
    });

    sheet.try_open(div().classes("card"), |card| {
        card.border("0.1rem solid var(--neutral-300)")?;
        card.open(attribute("data-state").equals("active"), |active| {
            active.border_color("var(--emerald-500)");
        });
        Ok::<_, StyleError>(())
    })?;

    sheet.for_any([a(), button()], |clickable| {
        clickable.set("cursor", "pointer");
    });

    print!("{}", sheet.render_with(&config));
    Ok(())
}

fn nav() -> Tag {
    tag("nav")
}
