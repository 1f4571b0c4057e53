use colored::Color;

const GRAY: Color = Color::TrueColor {
    r: 107,
    g: 114,
    b: 128,
};

/// Dot color for a repository's primary language.
pub fn language_color(language: &str) -> Color {
    match language {
        "JavaScript" => Color::Yellow,
        "TypeScript" => Color::Blue,
        "Python" => Color::Green,
        "Java" => Color::Red,
        "C++" => Color::Magenta,
        "Go" => Color::Cyan,
        "Rust" => Color::TrueColor {
            r: 249,
            g: 115,
            b: 22,
        },
        "PHP" => Color::TrueColor {
            r: 99,
            g: 102,
            b: 241,
        },
        "Ruby" => Color::TrueColor {
            r: 220,
            g: 38,
            b: 38,
        },
        "Swift" => Color::TrueColor {
            r: 234,
            g: 88,
            b: 12,
        },
        _ => GRAY,
    }
}
