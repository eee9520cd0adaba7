use crate::error::StyleError;
use crate::styling::css::CssRule;
use regex::Regex;
use std::sync::LazyLock;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

type Pattern = LazyLock<Result<Regex, regex::Error>>;

static DIMENSION: Pattern = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+(\.\d+)?|\.\d+)(px|em|rem|ex|ch|vw|vh|vmin|vmax|cm|mm|q|in|pt|pc|%)$")
});

static HEX_COLOR: Pattern =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$"));

static FUNCTIONAL_COLOR: Pattern =
    LazyLock::new(|| Regex::new(r"^(rgba?|hsla?|var)\([^()\s]+\)$"));

// A pattern that failed to compile matches nothing.
fn matches(pattern: &Pattern, token: &str) -> bool {
    pattern.as_ref().is_ok_and(|re| re.is_match(token))
}

const WIDTH_KEYWORDS: [&str; 3] = ["thin", "medium", "thick"];

const NAMED_COLORS: [&str; 150] = [
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue",
    "darkcyan", "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki",
    "darkmagenta", "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon",
    "darkseagreen", "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise",
    "darkviolet", "deeppink", "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick",
    "floralwhite", "forestgreen", "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod",
    "gray", "green", "greenyellow", "grey", "honeydew", "hotpink", "indianred", "indigo",
    "ivory", "khaki", "lavender", "lavenderblush", "lawngreen", "lemonchiffon", "lightblue",
    "lightcoral", "lightcyan", "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey",
    "lightpink", "lightsalmon", "lightseagreen", "lightskyblue", "lightslategray",
    "lightslategrey", "lightsteelblue", "lightyellow", "lime", "limegreen", "linen", "magenta",
    "maroon", "mediumaquamarine", "mediumblue", "mediumorchid", "mediumpurple",
    "mediumseagreen", "mediumslateblue", "mediumspringgreen", "mediumturquoise",
    "mediumvioletred", "midnightblue", "mintcream", "mistyrose", "moccasin", "navajowhite",
    "navy", "oldlace", "olive", "olivedrab", "orange", "orangered", "orchid", "palegoldenrod",
    "palegreen", "paleturquoise", "palevioletred", "papayawhip", "peachpuff", "peru", "pink",
    "plum", "powderblue", "purple", "rebeccapurple", "red", "rosybrown", "royalblue",
    "saddlebrown", "salmon", "sandybrown", "seagreen", "seashell", "sienna", "silver",
    "skyblue", "slateblue", "slategray", "slategrey", "snow", "springgreen", "steelblue", "tan",
    "teal", "thistle", "tomato", "turquoise", "violet", "wheat", "white", "whitesmoke",
    "yellow", "yellowgreen", "transparent", "currentcolor",
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum BorderStyle {
    None,
    Hidden,
    Dotted,
    Dashed,
    Solid,
    Double,
    Groove,
    Ridge,
    Inset,
    Outset,
}

/// One classified token of a border shorthand.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BorderToken<'a> {
    Width(&'a str),
    Color(&'a str),
    Style(BorderStyle),
}

pub fn is_dimension(token: &str) -> bool {
    token == "0" || matches(&DIMENSION, token) || WIDTH_KEYWORDS.contains(&token)
}

pub fn is_color(token: &str) -> bool {
    matches(&HEX_COLOR, token)
        || matches(&FUNCTIONAL_COLOR, token)
        || NAMED_COLORS.contains(&token.to_ascii_lowercase().as_str())
}

pub fn classify(token: &str) -> Option<BorderToken<'_>> {
    if is_dimension(token) {
        Some(BorderToken::Width(token))
    } else if is_color(token) {
        Some(BorderToken::Color(token))
    } else {
        token.parse::<BorderStyle>().ok().map(BorderToken::Style)
    }
}

impl CssRule {
    /// Expands a `border` shorthand into its width, color and style
    /// components. Nothing is set unless every token is recognised.
    pub fn border(&mut self, value: &str) -> Result<&mut Self, StyleError> {
        let tokens = value
            .split_whitespace()
            .map(|token| {
                classify(token).ok_or_else(|| {
                    tracing::warn!(selector = self.selector(), token, "rejected border token");
                    StyleError::InvalidToken {
                        property: "border".to_string(),
                        token: token.to_string(),
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        for token in tokens {
            match token {
                BorderToken::Width(width) => self.set("border-width", width),
                BorderToken::Color(color) => self.set("border-color", color),
                BorderToken::Style(style) => self.set("border-style", style.to_string()),
            };
        }
        Ok(self)
    }
}
