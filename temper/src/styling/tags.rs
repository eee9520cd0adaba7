use crate::styling::selector::Tag;

// Tag shorthands for common elements
macro_rules! tags {
    ($($name:ident),* $(,)?) => {
        $(
            pub fn $name() -> Tag {
                Tag::new(stringify!($name))
            }
        )*
    };
}

pub fn any() -> Tag {
    Tag::new(Tag::ANY)
}

tags! {
    a, b, body, button, canvas, div, em, fieldset, form, h1, h2, h3, h4, h5, hr, i, img,
    input, legend, label, ol, p, select, span, small, strong, blockquote, table, textarea,
    ul, li, option, optgroup, tr, tbody, td, th, dl, dt, dd,
}
