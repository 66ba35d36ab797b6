//! Scoped styles: declarations are registered in a sheet and referenced by generated class.

use core::fmt;

use indexmap::IndexMap;

/// An idle color and the color shown while the button is pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonPalette {
    pub color: &'static str,
    pub active_color: &'static str,
}

impl ButtonPalette {
    pub const PLUS: ButtonPalette = ButtonPalette {
        color: "#d44765",
        active_color: "#f49bae",
    };

    pub const MINUS: ButtonPalette = ButtonPalette {
        color: "#2f878b",
        active_color: "#7ec3c6",
    };
}

/// An ordered list of CSS declarations plus the ones applied while `:active`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    declarations: Vec<(String, String)>,
    active: Vec<(String, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, property: &str, value: impl Into<String>) -> Self {
        self.declarations.push((property.to_owned(), value.into()));
        self
    }

    pub fn with_active(mut self, property: &str, value: impl Into<String>) -> Self {
        self.active.push((property.to_owned(), value.into()));
        self
    }

    /// Value of a declaration, last one wins.
    pub fn get(&self, property: &str) -> Option<&str> {
        lookup(&self.declarations, property)
    }

    pub fn get_active(&self, property: &str) -> Option<&str> {
        lookup(&self.active, property)
    }
}

fn lookup<'a>(declarations: &'a [(String, String)], property: &str) -> Option<&'a str> {
    declarations
        .iter()
        .rev()
        .find(|(name, _)| name == property)
        .map(|(_, value)| value.as_str())
}

fn write_block(f: &mut impl fmt::Write, declarations: &[(String, String)]) -> fmt::Result {
    f.write_char('{')?;
    for (property, value) in declarations {
        write!(f, "{property}:{value};")?;
    }
    f.write_char('}')
}

/// A generated class name, unique within one [`StyleSheet`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClassName(String);

impl ClassName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Style registry scoped to one document.
///
/// Inserting the same [`Style`] twice yields the same class, so re-rendering
/// never grows the sheet.
#[derive(Debug, Default)]
pub struct StyleSheet {
    rules: IndexMap<Style, ClassName>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, style: &Style) -> ClassName {
        if let Some(class) = self.rules.get(style) {
            return class.clone();
        }
        let class = ClassName(format!("css-{}", self.rules.len()));
        self.rules.insert(style.clone(), class.clone());
        class
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The style registered under `class`, if any.
    pub fn style_of(&self, class: &ClassName) -> Option<&Style> {
        self.rules
            .iter()
            .find(|(_, registered)| *registered == class)
            .map(|(style, _)| style)
    }

    /// All rules in insertion order, one per line.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        for (style, class) in &self.rules {
            // Writing into a String cannot fail.
            let _ = write_rule(&mut css, class, style);
        }
        css
    }
}

fn write_rule(css: &mut String, class: &ClassName, style: &Style) -> fmt::Result {
    use fmt::Write;

    write!(css, ".{class}")?;
    write_block(css, &style.declarations)?;
    css.push('\n');
    if !style.active.is_empty() {
        write!(css, ".{class}:active")?;
        write_block(css, &style.active)?;
        css.push('\n');
    }
    Ok(())
}

pub fn button_style(palette: ButtonPalette) -> Style {
    Style::new()
        .with("cursor", "pointer")
        .with("background-color", "transparent")
        .with("box-sizing", "border-box")
        .with("border-radius", "3px")
        .with("border", format!("2px solid {}", palette.color))
        .with("color", palette.color)
        .with("font-size", "14px")
        .with("height", "28px")
        .with("width", "70px")
        .with("outline", "none")
        .with_active("background-color", palette.active_color)
}

pub fn wrapper_style() -> Style {
    Style::new()
        .with("display", "flex")
        .with("flex-direction", "column")
        .with("width", "400px")
        .with("height", "200px")
        .with("border-radius", "3px")
        .with("padding", "10px")
        .with("box-shadow", "0 3px 6px #d3d3d3")
}

pub fn counter_style() -> Style {
    Style::new()
        .with("display", "flex")
        .with("justify-content", "center")
        .with("align-items", "center")
        .with("width", "400px")
        .with("flex", "1 1 auto")
        .with("color", "#434343")
}

pub fn buttons_style() -> Style {
    Style::new()
        .with("width", "400px")
        .with("display", "flex")
        .with("justify-content", "space-between")
}
