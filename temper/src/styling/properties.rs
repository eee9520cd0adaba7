//! Named setters for the common properties. Values are rendered with
//! `Display` and stored as text.

use crate::styling::css::CssRule;
use std::fmt::Display;

macro_rules! properties {
    ($($method:ident => $name:literal),* $(,)?) => {
        impl CssRule {
            $(
                #[doc = concat!("Sets `", $name, "`.")]
                pub fn $method(&mut self, value: impl Display) -> &mut Self {
                    self.set($name, value.to_string())
                }
            )*
        }
    };
}

macro_rules! defaulted_properties {
    ($($method:ident => $name:literal or $default:literal),* $(,)?) => {
        impl CssRule {
            $(
                #[doc = concat!("Reads `", $name, "`, falling back to `", $default, "`.")]
                pub fn $method(&self) -> &str {
                    self.get_or($name, $default)
                }
            )*
        }
    };
}

properties! {
    background_attachment => "background-attachment",
    background_color => "background-color",
    background_image => "background-image",
    background_position => "background-position",
    background_repeat => "background-repeat",
    border_color => "border-color",
    border_radius => "border-radius",
    border_bottom_left_radius => "border-bottom-left-radius",
    border_bottom_right_radius => "border-bottom-right-radius",
    border_top_left_radius => "border-top-left-radius",
    border_top_right_radius => "border-top-right-radius",
    border_style => "border-style",
    border_width => "border-width",
    clear => "clear",
    color => "color",
    display => "display",
    float => "float",
    font_family => "font-family",
    font_size => "font-size",
    font_weight => "font-weight",
    height => "height",
    line_height => "line-height",
    margin => "margin",
    margin_top => "margin-top",
    margin_bottom => "margin-bottom",
    margin_left => "margin-left",
    margin_right => "margin-right",
    max_height => "max-height",
    max_width => "max-width",
    min_height => "min-height",
    min_width => "min-width",
    overflow => "overflow",
    padding => "padding",
    padding_top => "padding-top",
    padding_bottom => "padding-bottom",
    padding_left => "padding-left",
    padding_right => "padding-right",
    text_align => "text-align",
    vertical_align => "vertical-align",
    width => "width",
}

defaulted_properties! {
    border_radius_or_default => "border-radius" or "0px",
    border_bottom_left_radius_or_default => "border-bottom-left-radius" or "0px",
    border_bottom_right_radius_or_default => "border-bottom-right-radius" or "0px",
    border_top_left_radius_or_default => "border-top-left-radius" or "0px",
    border_top_right_radius_or_default => "border-top-right-radius" or "0px",
    border_width_or_default => "border-width" or "0px",
    overflow_or_default => "overflow" or "inherit",
    text_align_or_default => "text-align" or "inherit",
    vertical_align_or_default => "vertical-align" or "inherit",
}
