use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A named visual theme: display name plus the color tokens applied to the
/// rendered interface.
pub struct Theme {
    pub id: &'static str,
    pub name: &'static str,
    pub colors: HashMap<&'static str, &'static str>,
}

/// Theme assumed when a user has no stored preference.
pub const DEFAULT_THEME: &str = "dark";

static THEMES: Lazy<Vec<Theme>> = Lazy::new(|| {
    vec![
        Theme {
            id: "dark",
            name: "🌑 Классическая Тёмная",
            colors: HashMap::from([
                ("bg", "#121212"),
                ("card", "#1e1e1e"),
                ("text", "#e0e0e0"),
                ("primary", "#bb86fc"),
                ("accent", "#03dac6"),
            ]),
        },
        Theme {
            id: "purple",
            name: "💜 Фиолетовая Галактика",
            colors: HashMap::from([
                ("bg", "#1a1a2e"),
                ("card", "#16213e"),
                ("text", "#e6e6e6"),
                ("primary", "#8a4fff"),
                ("accent", "#ff2e63"),
            ]),
        },
        Theme {
            id: "blue",
            name: "🔷 Глубокий Океан",
            colors: HashMap::from([
                ("bg", "#0f172a"),
                ("card", "#1e293b"),
                ("text", "#f1f5f9"),
                ("primary", "#3b82f6"),
                ("accent", "#06b6d4"),
            ]),
        },
    ]
});

/// All registered themes, in presentation order.
pub fn list() -> &'static [Theme] {
    &THEMES
}

/// Look up a theme by id. Unknown ids resolve to the default theme, so a
/// stale stored preference can never fail a render.
pub fn get(id: &str) -> &'static Theme {
    THEMES
        .iter()
        .find(|theme| theme.id == id)
        .unwrap_or_else(default)
}

/// The baseline theme.
pub fn default() -> &'static Theme {
    THEMES
        .iter()
        .find(|theme| theme.id == DEFAULT_THEME)
        .expect("default theme registered")
}

pub fn contains(id: &str) -> bool {
    THEMES.iter().any(|theme| theme.id == id)
}
