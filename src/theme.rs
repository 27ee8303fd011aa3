//! Handle the color theme
use ratatui::style::{Color, Modifier, Style};

use crate::options::SelectOptions;

/// The color scheme of the select widget
///
/// <pre>
/// +------------------------------+
/// | Mint × Mango × que|   × ▼ |  --> chip, query, indicator
/// +------------------------------+
/// +------------------------------+
/// | Chocolate                    |  --> focused
/// | Blueberry                    |  --> disabled
/// | Vanilla                      |  --> normal
/// +------------------------------+  --> border
/// </pre>
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ColorTheme {
    /// Option rows and general text
    pub normal: Style,
    /// Row under the keyboard focus
    pub focused: Style,
    /// Disabled option rows
    pub disabled: Style,
    /// Selected option chips (multi mode)
    pub chip: Style,
    /// Search text or selected label
    pub query: Style,
    /// Placeholder text
    pub placeholder: Style,
    /// Clear and open/close indicators
    pub indicator: Style,
    /// No results message
    pub no_results: Style,
    /// Borders
    pub border: Style,
}

impl ColorTheme {
    /// Setup the theme from the options
    pub fn init_from_options(options: &SelectOptions) -> ColorTheme {
        if let Some(color) = options.color.as_deref() {
            ColorTheme::from_options(color)
        } else {
            // Check for NO_COLOR environment variable
            match std::env::var_os("NO_COLOR") {
                Some(no_color) if !no_color.is_empty() => ColorTheme::none(),
                _ => ColorTheme::dark256(),
            }
        }
    }

    fn none() -> Self {
        Self {
            focused: Style::default().reversed(),
            disabled: Style::default().dim(),
            ..ColorTheme::default()
        }
    }

    fn bw() -> Self {
        let base = ColorTheme::none();
        ColorTheme {
            chip: base.chip.underlined(),
            placeholder: base.placeholder.dim(),
            disabled: base.disabled.crossed_out(),
            ..base
        }
    }

    fn default16() -> Self {
        let base = ColorTheme::none();
        ColorTheme {
            focused: Style::default().fg(Color::Black).bg(Color::White),
            disabled: base.disabled.fg(Color::DarkGray),
            chip: base.chip.fg(Color::Black).bg(Color::Gray),
            query: base.query.fg(Color::White),
            placeholder: base.placeholder.fg(Color::DarkGray),
            indicator: base.indicator.fg(Color::Red),
            no_results: base.no_results.fg(Color::DarkGray),
            border: base.border.fg(Color::Gray),
            ..base
        }
    }

    fn dark256() -> Self {
        let base = ColorTheme::none();
        ColorTheme {
            focused: Style::default().bg(Color::Indexed(236)),
            disabled: base.disabled.fg(Color::Indexed(243)),
            chip: base.chip.fg(Color::Indexed(0)).bg(Color::Indexed(250)),
            query: base.query.fg(Color::Indexed(252)),
            placeholder: base.placeholder.fg(Color::Indexed(243)),
            indicator: base.indicator.fg(Color::Indexed(161)),
            no_results: base.no_results.fg(Color::Indexed(144)),
            border: base.border.fg(Color::Indexed(59)),
            ..base
        }
    }

    fn light256() -> Self {
        let base = ColorTheme::none();
        ColorTheme {
            focused: Style::default().bg(Color::Indexed(251)),
            disabled: base.disabled.fg(Color::Indexed(248)),
            chip: base.chip.fg(Color::Indexed(0)).bg(Color::Indexed(252)),
            query: base.query.fg(Color::Indexed(0)),
            placeholder: base.placeholder.fg(Color::Indexed(245)),
            indicator: base.indicator.fg(Color::Indexed(161)),
            no_results: base.no_results.fg(Color::Indexed(101)),
            border: base.border.fg(Color::Indexed(145)),
            ..base
        }
    }

    fn set_color(&mut self, name: &str, spec: &str) {
        let spec_parts: Vec<_> = spec.split(['+', ':']).collect();

        let raw_color = spec_parts[0];
        let new_color = if raw_color.len() == 7 && raw_color.is_ascii() && raw_color.starts_with('#') {
            // RGB Hex color
            let r = u8::from_str_radix(&raw_color[1..3], 16).unwrap_or(255);
            let g = u8::from_str_radix(&raw_color[3..5], 16).unwrap_or(255);
            let b = u8::from_str_radix(&raw_color[5..7], 16).unwrap_or(255);
            Some(Color::Rgb(r, g, b))
        } else {
            raw_color.parse::<u8>().ok().map(Color::Indexed).or_else(|| {
                debug!("Unknown color '{}'", raw_color);
                None
            })
        };

        let mut modifier = Modifier::empty();
        for part in spec_parts.iter().skip(1) {
            modifier |= match *part {
                "b" | "bold" => Modifier::BOLD,
                "u" | "underlined" => Modifier::UNDERLINED,
                "d" | "dim" => Modifier::DIM,
                "i" | "italic" => Modifier::ITALIC,
                "r" | "reverse" => Modifier::REVERSED,
                m => {
                    debug!("Unknown modifier '{m}'");
                    Modifier::empty()
                }
            };
        }

        let (component_name, layer) = match name.strip_suffix("_bg").or_else(|| name.strip_suffix("-bg")) {
            Some(component) => (component, "bg"),
            None => (name.strip_suffix("_fg").or_else(|| name.strip_suffix("-fg")).unwrap_or(name), "fg"),
        };

        let style = match component_name {
            "" | "normal" => &mut self.normal,
            "focused" | "current" => &mut self.focused,
            "disabled" => &mut self.disabled,
            "chip" | "selected" => &mut self.chip,
            "query" => &mut self.query,
            "placeholder" => &mut self.placeholder,
            "indicator" => &mut self.indicator,
            "no_results" | "info" => &mut self.no_results,
            "border" => &mut self.border,
            c => {
                debug!("Unknown theme component '{c}'");
                return;
            }
        };
        set_style(style, layer, new_color, modifier);
    }

    pub(crate) fn from_options(color: &str) -> Self {
        let mut theme = ColorTheme::dark256();
        for pair in color.split(',') {
            if let Some((name, spec)) = pair.split_once(':') {
                theme.set_color(name, spec);
            } else {
                theme = match pair {
                    "light" => ColorTheme::light256(),
                    "16" => ColorTheme::default16(),
                    "bw" => ColorTheme::bw(),
                    "none" | "empty" => ColorTheme::none(),
                    "dark" | "default" => ColorTheme::dark256(),
                    t => {
                        debug!("Unknown color theme '{t}'");
                        ColorTheme::dark256()
                    }
                };
            }
        }
        theme
    }
}

fn set_style(s: &mut Style, layer: &str, color: Option<Color>, modifier: Modifier) {
    if let Some(c) = color {
        *s = match layer {
            "bg" => s.bg(c),
            _ => s.fg(c),
        }
    }
    *s = s.add_modifier(modifier);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_themes() {
        let none = ColorTheme::none();
        assert!(none.focused.add_modifier.contains(Modifier::REVERSED));

        let bw = ColorTheme::bw();
        assert!(bw.chip.add_modifier.contains(Modifier::UNDERLINED));

        let dark = ColorTheme::dark256();
        assert_eq!(dark.focused.bg, Some(Color::Indexed(236)));

        let light = ColorTheme::light256();
        assert_eq!(light.focused.bg, Some(Color::Indexed(251)));
    }

    #[test]
    fn test_overrides() {
        let theme = ColorTheme::from_options("light,chip:110+bold,focused_bg:#ff0000");
        assert_eq!(theme.chip.fg, Some(Color::Indexed(110)));
        assert!(theme.chip.add_modifier.contains(Modifier::BOLD));
        assert_eq!(theme.focused.bg, Some(Color::Rgb(255, 0, 0)));
        assert_eq!(theme.border, ColorTheme::light256().border);
    }

    #[test]
    fn test_non_ascii_hex_is_ignored() {
        let theme = ColorTheme::from_options("focused:#ab€d");
        assert_eq!(theme.focused, ColorTheme::dark256().focused);
        let theme = ColorTheme::from_options("chip_bg:#é12345");
        assert_eq!(theme.chip, ColorTheme::dark256().chip);
    }

    #[test]
    fn test_unknown_theme_falls_back_to_dark() {
        assert_eq!(ColorTheme::from_options("solarized"), ColorTheme::dark256());
    }
}
