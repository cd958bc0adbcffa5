//! Built-in colour palettes.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgb,
    pub text: Rgb,
    pub accent: Rgb,
}

pub const DEFAULT_THEME: &str = "default";

static THEMES: &[Theme] = &[
    Theme {
        name: DEFAULT_THEME,
        background: Rgb(0x00, 0x00, 0x00),
        text: Rgb(0xff, 0xff, 0xff),
        accent: Rgb(0x97, 0xe0, 0xa6),
    },
    Theme {
        name: "shoom",
        background: Rgb(0x2b, 0x1b, 0x3d),
        text: Rgb(0xf3, 0xe8, 0xff),
        accent: Rgb(0xff, 0x79, 0xc6),
    },
    Theme {
        name: "matrix",
        background: Rgb(0x00, 0x00, 0x00),
        text: Rgb(0x00, 0xff, 0x41),
        accent: Rgb(0x00, 0x8f, 0x11),
    },
    Theme {
        name: "solarized",
        background: Rgb(0x00, 0x2b, 0x36),
        text: Rgb(0x83, 0x94, 0x96),
        accent: Rgb(0xb5, 0x89, 0x00),
    },
];

impl Theme {
    pub fn all() -> &'static [Theme] {
        THEMES
    }

    pub fn find(name: &str) -> Option<Theme> {
        THEMES.iter().find(|t| t.name == name).copied()
    }
}

impl Default for Theme {
    fn default() -> Self {
        THEMES[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colours_print_as_hex() {
        assert_eq!(Rgb(0x97, 0xe0, 0xa6).to_string(), "#97e0a6");
        assert_eq!(Rgb(0, 0, 0).to_string(), "#000000");
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(Theme::find("shoom").map(|t| t.name), Some("shoom"));
        assert!(Theme::find("Shoom").is_none());
        assert!(Theme::find("nope").is_none());
        assert_eq!(Theme::default().name, DEFAULT_THEME);
    }
}
