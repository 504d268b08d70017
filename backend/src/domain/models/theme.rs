/// Themes seeded on first boot, in display order
pub const DEFAULT_THEMES: &[(&str, &str)] = &[
    ("light", "Light"),
    ("dark", "Dark"),
    ("nord", "Nord"),
    ("dracula", "Dracula"),
    ("solarized", "Solarized"),
    ("ocean", "Ocean"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct DomainTheme {
    pub name: String,
    pub display_name: String,
}
