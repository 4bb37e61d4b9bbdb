use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::page::{PageDefinition, PageId, PageKind};
use crate::app::controllers::pages::PageRegistry;

/// The eight named color scales of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleName {
    Primary,
    Secondary,
    Accent,
    Neutral,
    Success,
    Warning,
    Error,
    Info,
}

impl ScaleName {
    pub const ALL: [ScaleName; 8] = [
        ScaleName::Primary,
        ScaleName::Secondary,
        ScaleName::Accent,
        ScaleName::Neutral,
        ScaleName::Success,
        ScaleName::Warning,
        ScaleName::Error,
        ScaleName::Info,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScaleName::Primary => "primary",
            ScaleName::Secondary => "secondary",
            ScaleName::Accent => "accent",
            ScaleName::Neutral => "neutral",
            ScaleName::Success => "success",
            ScaleName::Warning => "warning",
            ScaleName::Error => "error",
            ScaleName::Info => "info",
        }
    }

    pub fn parse(s: &str) -> Option<ScaleName> {
        ScaleName::ALL.into_iter().find(|n| n.as_str() == s)
    }
}

/// One step of a color scale, 50 (lightest) through 950 (darkest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shade {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S950,
}

impl Shade {
    pub const ALL: [Shade; 11] = [
        Shade::S50,
        Shade::S100,
        Shade::S200,
        Shade::S300,
        Shade::S400,
        Shade::S500,
        Shade::S600,
        Shade::S700,
        Shade::S800,
        Shade::S900,
        Shade::S950,
    ];

    pub fn value(&self) -> u16 {
        match self {
            Shade::S50 => 50,
            Shade::S100 => 100,
            Shade::S200 => 200,
            Shade::S300 => 300,
            Shade::S400 => 400,
            Shade::S500 => 500,
            Shade::S600 => 600,
            Shade::S700 => 700,
            Shade::S800 => 800,
            Shade::S900 => 900,
            Shade::S950 => 950,
        }
    }

    pub fn from_value(value: u16) -> Option<Shade> {
        Shade::ALL.into_iter().find(|s| s.value() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScale {
    #[serde(rename = "50")]
    pub s50: String,
    #[serde(rename = "100")]
    pub s100: String,
    #[serde(rename = "200")]
    pub s200: String,
    #[serde(rename = "300")]
    pub s300: String,
    #[serde(rename = "400")]
    pub s400: String,
    #[serde(rename = "500")]
    pub s500: String,
    #[serde(rename = "600")]
    pub s600: String,
    #[serde(rename = "700")]
    pub s700: String,
    #[serde(rename = "800")]
    pub s800: String,
    #[serde(rename = "900")]
    pub s900: String,
    #[serde(rename = "950")]
    pub s950: String,
}

impl ColorScale {
    /// Build a scale from eleven values ordered 50..950.
    pub fn from_shades(shades: [&str; 11]) -> Self {
        let [s50, s100, s200, s300, s400, s500, s600, s700, s800, s900, s950] =
            shades.map(str::to_string);
        Self { s50, s100, s200, s300, s400, s500, s600, s700, s800, s900, s950 }
    }

    pub fn get(&self, shade: Shade) -> &str {
        match shade {
            Shade::S50 => &self.s50,
            Shade::S100 => &self.s100,
            Shade::S200 => &self.s200,
            Shade::S300 => &self.s300,
            Shade::S400 => &self.s400,
            Shade::S500 => &self.s500,
            Shade::S600 => &self.s600,
            Shade::S700 => &self.s700,
            Shade::S800 => &self.s800,
            Shade::S900 => &self.s900,
            Shade::S950 => &self.s950,
        }
    }

    pub fn set(&mut self, shade: Shade, value: impl Into<String>) {
        let slot = match shade {
            Shade::S50 => &mut self.s50,
            Shade::S100 => &mut self.s100,
            Shade::S200 => &mut self.s200,
            Shade::S300 => &mut self.s300,
            Shade::S400 => &mut self.s400,
            Shade::S500 => &mut self.s500,
            Shade::S600 => &mut self.s600,
            Shade::S700 => &mut self.s700,
            Shade::S800 => &mut self.s800,
            Shade::S900 => &mut self.s900,
            Shade::S950 => &mut self.s950,
        };
        *slot = value.into();
    }

    /// Shades in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (Shade, &str)> {
        Shade::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundColors {
    pub primary: String,
    pub secondary: String,
    pub tertiary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextColors {
    pub primary: String,
    pub secondary: String,
    pub tertiary: String,
    pub inverse: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderColors {
    pub light: String,
    pub medium: String,
    pub dark: String,
}

/// Flat role colors addressed by the editor's role pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleColor {
    BackgroundPrimary,
    BackgroundSecondary,
    BackgroundTertiary,
    TextPrimary,
    TextSecondary,
    TextTertiary,
    TextInverse,
    BorderLight,
    BorderMedium,
    BorderDark,
}

impl RoleColor {
    pub fn label(&self) -> &'static str {
        match self {
            RoleColor::BackgroundPrimary => "background.primary",
            RoleColor::BackgroundSecondary => "background.secondary",
            RoleColor::BackgroundTertiary => "background.tertiary",
            RoleColor::TextPrimary => "text.primary",
            RoleColor::TextSecondary => "text.secondary",
            RoleColor::TextTertiary => "text.tertiary",
            RoleColor::TextInverse => "text.inverse",
            RoleColor::BorderLight => "border.light",
            RoleColor::BorderMedium => "border.medium",
            RoleColor::BorderDark => "border.dark",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Colors {
    pub primary: ColorScale,
    pub secondary: ColorScale,
    pub accent: ColorScale,
    pub neutral: ColorScale,
    pub success: ColorScale,
    pub warning: ColorScale,
    pub error: ColorScale,
    pub info: ColorScale,
    pub background: BackgroundColors,
    pub text: TextColors,
    pub border: BorderColors,
}

impl Colors {
    pub fn scale(&self, name: ScaleName) -> &ColorScale {
        match name {
            ScaleName::Primary => &self.primary,
            ScaleName::Secondary => &self.secondary,
            ScaleName::Accent => &self.accent,
            ScaleName::Neutral => &self.neutral,
            ScaleName::Success => &self.success,
            ScaleName::Warning => &self.warning,
            ScaleName::Error => &self.error,
            ScaleName::Info => &self.info,
        }
    }

    pub fn scale_mut(&mut self, name: ScaleName) -> &mut ColorScale {
        match name {
            ScaleName::Primary => &mut self.primary,
            ScaleName::Secondary => &mut self.secondary,
            ScaleName::Accent => &mut self.accent,
            ScaleName::Neutral => &mut self.neutral,
            ScaleName::Success => &mut self.success,
            ScaleName::Warning => &mut self.warning,
            ScaleName::Error => &mut self.error,
            ScaleName::Info => &mut self.info,
        }
    }

    pub fn role(&self, role: RoleColor) -> &str {
        match role {
            RoleColor::BackgroundPrimary => &self.background.primary,
            RoleColor::BackgroundSecondary => &self.background.secondary,
            RoleColor::BackgroundTertiary => &self.background.tertiary,
            RoleColor::TextPrimary => &self.text.primary,
            RoleColor::TextSecondary => &self.text.secondary,
            RoleColor::TextTertiary => &self.text.tertiary,
            RoleColor::TextInverse => &self.text.inverse,
            RoleColor::BorderLight => &self.border.light,
            RoleColor::BorderMedium => &self.border.medium,
            RoleColor::BorderDark => &self.border.dark,
        }
    }

    pub fn set_role(&mut self, role: RoleColor, value: impl Into<String>) {
        let slot = match role {
            RoleColor::BackgroundPrimary => &mut self.background.primary,
            RoleColor::BackgroundSecondary => &mut self.background.secondary,
            RoleColor::BackgroundTertiary => &mut self.background.tertiary,
            RoleColor::TextPrimary => &mut self.text.primary,
            RoleColor::TextSecondary => &mut self.text.secondary,
            RoleColor::TextTertiary => &mut self.text.tertiary,
            RoleColor::TextInverse => &mut self.text.inverse,
            RoleColor::BorderLight => &mut self.border.light,
            RoleColor::BorderMedium => &mut self.border.medium,
            RoleColor::BorderDark => &mut self.border.dark,
        };
        *slot = value.into();
    }
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            primary: ColorScale::from_shades([
                "#eff6ff", "#dbeafe", "#bfdbfe", "#93c5fd", "#60a5fa", "#3b82f6",
                "#2563eb", "#1d4ed8", "#1e40af", "#1e3a8a", "#172554",
            ]),
            secondary: ColorScale::from_shades([
                "#faf5ff", "#f3e8ff", "#e9d5ff", "#d8b4fe", "#c084fc", "#a855f7",
                "#9333ea", "#7e22ce", "#6b21a8", "#581c87", "#3b0764",
            ]),
            accent: ColorScale::from_shades([
                "#fffbeb", "#fef3c7", "#fde68a", "#fcd34d", "#fbbf24", "#f59e0b",
                "#d97706", "#b45309", "#92400e", "#78350f", "#451a03",
            ]),
            neutral: ColorScale::from_shades([
                "#f9fafb", "#f3f4f6", "#e5e7eb", "#d1d5db", "#9ca3af", "#6b7280",
                "#4b5563", "#374151", "#1f2937", "#111827", "#030712",
            ]),
            success: ColorScale::from_shades([
                "#f0fdf4", "#dcfce7", "#bbf7d0", "#86efac", "#4ade80", "#22c55e",
                "#16a34a", "#15803d", "#166534", "#14532d", "#052e16",
            ]),
            warning: ColorScale::from_shades([
                "#fefce8", "#fef9c3", "#fef08a", "#fde047", "#facc15", "#eab308",
                "#ca8a04", "#a16207", "#854d0e", "#713f12", "#422006",
            ]),
            error: ColorScale::from_shades([
                "#fef2f2", "#fee2e2", "#fecaca", "#fca5a5", "#f87171", "#ef4444",
                "#dc2626", "#b91c1c", "#991b1b", "#7f1d1d", "#450a0a",
            ]),
            info: ColorScale::from_shades([
                "#ecfeff", "#cffafe", "#a5f3fc", "#67e8f9", "#22d3ee", "#06b6d4",
                "#0891b2", "#0e7490", "#155e75", "#164e63", "#083344",
            ]),
            background: BackgroundColors {
                primary: "#ffffff".to_string(),
                secondary: "#f9fafb".to_string(),
                tertiary: "#f3f4f6".to_string(),
            },
            text: TextColors {
                primary: "#111827".to_string(),
                secondary: "#4b5563".to_string(),
                tertiary: "#9ca3af".to_string(),
                inverse: "#ffffff".to_string(),
            },
            border: BorderColors {
                light: "#f3f4f6".to_string(),
                medium: "#e5e7eb".to_string(),
                dark: "#d1d5db".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFamilyKind {
    Sans,
    Serif,
    Mono,
}

impl FontFamilyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontFamilyKind::Sans => "sans",
            FontFamilyKind::Serif => "serif",
            FontFamilyKind::Mono => "mono",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontFamilies {
    pub sans: String,
    pub serif: String,
    pub mono: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSizes {
    pub xs: String,
    pub sm: String,
    pub base: String,
    pub lg: String,
    pub xl: String,
    #[serde(rename = "2xl")]
    pub xxl: String,
    #[serde(rename = "3xl")]
    pub xxxl: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontWeights {
    pub light: u16,
    pub normal: u16,
    pub medium: u16,
    pub semibold: u16,
    pub bold: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineHeights {
    pub tight: String,
    pub normal: String,
    pub relaxed: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Typography {
    pub font_family: FontFamilies,
    pub font_size: FontSizes,
    pub font_weight: FontWeights,
    pub line_height: LineHeights,
}

impl Typography {
    pub fn family(&self, kind: FontFamilyKind) -> &str {
        match kind {
            FontFamilyKind::Sans => &self.font_family.sans,
            FontFamilyKind::Serif => &self.font_family.serif,
            FontFamilyKind::Mono => &self.font_family.mono,
        }
    }

    pub fn set_family(&mut self, kind: FontFamilyKind, value: impl Into<String>) {
        let slot = match kind {
            FontFamilyKind::Sans => &mut self.font_family.sans,
            FontFamilyKind::Serif => &mut self.font_family.serif,
            FontFamilyKind::Mono => &mut self.font_family.mono,
        };
        *slot = value.into();
    }
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font_family: FontFamilies {
                sans: "Inter, system-ui, sans-serif".to_string(),
                serif: "Georgia, Cambria, serif".to_string(),
                mono: "'JetBrains Mono', Menlo, monospace".to_string(),
            },
            font_size: FontSizes {
                xs: "0.75rem".to_string(),
                sm: "0.875rem".to_string(),
                base: "1rem".to_string(),
                lg: "1.125rem".to_string(),
                xl: "1.25rem".to_string(),
                xxl: "1.5rem".to_string(),
                xxxl: "1.875rem".to_string(),
            },
            font_weight: FontWeights {
                light: 300,
                normal: 400,
                medium: 500,
                semibold: 600,
                bold: 700,
            },
            line_height: LineHeights {
                tight: "1.25".to_string(),
                normal: "1.5".to_string(),
                relaxed: "1.75".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spacing {
    pub xs: String,
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
    #[serde(rename = "2xl")]
    pub xxl: String,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            xs: "0.25rem".to_string(),
            sm: "0.5rem".to_string(),
            md: "1rem".to_string(),
            lg: "1.5rem".to_string(),
            xl: "2rem".to_string(),
            xxl: "3rem".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Radii {
    pub none: String,
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub full: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorderWidths {
    pub thin: String,
    pub medium: String,
    pub thick: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Borders {
    pub radius: Radii,
    pub width: BorderWidths,
}

impl Default for Borders {
    fn default() -> Self {
        Self {
            radius: Radii {
                none: "0".to_string(),
                sm: "0.125rem".to_string(),
                md: "0.375rem".to_string(),
                lg: "0.5rem".to_string(),
                full: "9999px".to_string(),
            },
            width: BorderWidths {
                thin: "1px".to_string(),
                medium: "2px".to_string(),
                thick: "4px".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shadows {
    pub sm: String,
    pub md: String,
    pub lg: String,
    pub xl: String,
}

impl Default for Shadows {
    fn default() -> Self {
        Self {
            sm: "0 1px 2px 0 rgb(0 0 0 / 0.05)".to_string(),
            md: "0 4px 6px -1px rgb(0 0 0 / 0.1)".to_string(),
            lg: "0 10px 15px -3px rgb(0 0 0 / 0.1)".to_string(),
            xl: "0 20px 25px -5px rgb(0 0 0 / 0.1)".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Durations {
    pub fast: String,
    pub normal: String,
    pub slow: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animations {
    pub duration: Durations,
    pub easing: String,
}

impl Default for Animations {
    fn default() -> Self {
        Self {
            duration: Durations {
                fast: "150ms".to_string(),
                normal: "300ms".to_string(),
                slow: "500ms".to_string(),
            },
            easing: "cubic-bezier(0.4, 0, 0.2, 1)".to_string(),
        }
    }
}

/// Property -> value declarations for one component (button, card, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentStyle {
    pub properties: BTreeMap<String, String>,
}

impl ComponentStyle {
    pub fn with(mut self, property: &str, value: &str) -> Self {
        self.properties.insert(property.to_string(), value.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub container_max_width: String,
    pub header_height: String,
    pub sidebar_width: String,
    pub grid_columns: u32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            container_max_width: "1200px".to_string(),
            header_height: "64px".to_string(),
            sidebar_width: "256px".to_string(),
            grid_columns: 12,
        }
    }
}

fn default_component_styles() -> BTreeMap<String, ComponentStyle> {
    let mut styles = BTreeMap::new();
    styles.insert(
        "button".to_string(),
        ComponentStyle::default()
            .with("background", "var(--color-primary)")
            .with("color", "var(--text-inverse)")
            .with("border-radius", "var(--radius-md)")
            .with("padding", "var(--spacing-sm) var(--spacing-md)"),
    );
    styles.insert(
        "card".to_string(),
        ComponentStyle::default()
            .with("background", "var(--bg-primary)")
            .with("border", "1px solid var(--border-color)")
            .with("border-radius", "var(--radius-lg)")
            .with("box-shadow", "var(--shadow-md)")
            .with("padding", "var(--spacing-lg)"),
    );
    styles
}

/// Root aggregate edited by the theme editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfiguration {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub colors: Colors,
    #[serde(default)]
    pub typography: Typography,
    #[serde(default)]
    pub spacing: Spacing,
    #[serde(default)]
    pub borders: Borders,
    #[serde(default)]
    pub shadows: Shadows,
    #[serde(default)]
    pub animations: Animations,
    #[serde(default = "default_component_styles")]
    pub component_styles: BTreeMap<String, ComponentStyle>,
    #[serde(default)]
    pub layout: Layout,
    #[serde(default)]
    pub pages: PageRegistry,
    #[serde(default)]
    pub custom_css: String,
    #[serde(default)]
    pub custom_js: String,
}

fn default_name() -> String {
    "My Store".to_string()
}

fn default_pages() -> PageRegistry {
    let mut pages = PageRegistry::new();
    pages.add_page(PageDefinition::new(
        PageId::from("home"),
        "Home",
        "/",
        PageKind::Homepage,
    ));
    pages.add_page(PageDefinition::new(
        PageId::from("about"),
        "About",
        "/about",
        PageKind::About,
    ));
    pages.add_page(PageDefinition::new(
        PageId::from("contact"),
        "Contact",
        "/contact",
        PageKind::Contact,
    ));
    pages
}

impl Default for ThemeConfiguration {
    fn default() -> Self {
        Self {
            name: default_name(),
            colors: Colors::default(),
            typography: Typography::default(),
            spacing: Spacing::default(),
            borders: Borders::default(),
            shadows: Shadows::default(),
            animations: Animations::default(),
            component_styles: default_component_styles(),
            layout: Layout::default(),
            pages: default_pages(),
            custom_css: String::new(),
            custom_js: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_has_three_pages() {
        let theme = ThemeConfiguration::default();
        assert_eq!(theme.pages.len(), 3);
        assert_eq!(theme.pages.homepage().unwrap().slug, "/");
    }

    #[test]
    fn test_scale_lookup_by_name() {
        let colors = Colors::default();
        assert_eq!(colors.scale(ScaleName::Primary).get(Shade::S500), "#3b82f6");
        assert_eq!(colors.scale(ScaleName::Error).get(Shade::S50), "#fef2f2");
        assert_eq!(colors.scale(ScaleName::Info).get(Shade::S950), "#083344");
    }

    #[test]
    fn test_scale_mut_updates_only_that_scale() {
        let mut colors = Colors::default();
        colors.scale_mut(ScaleName::Accent).set(Shade::S500, "#ff00ff");
        assert_eq!(colors.accent.s500, "#ff00ff");
        assert_eq!(colors.primary.s500, "#3b82f6");
    }

    #[test]
    fn test_scale_iter_is_ordered() {
        let scale = Colors::default().neutral;
        let values: Vec<u16> = scale.iter().map(|(s, _)| s.value()).collect();
        assert_eq!(values, vec![50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950]);
    }

    #[test]
    fn test_shade_and_scale_parsing() {
        assert_eq!(Shade::from_value(950), Some(Shade::S950));
        assert_eq!(Shade::from_value(550), None);
        assert_eq!(ScaleName::parse("warning"), Some(ScaleName::Warning));
        assert_eq!(ScaleName::parse("purple"), None);
    }

    #[test]
    fn test_color_scale_json_uses_shade_names() {
        let json = serde_json::to_value(&Colors::default().primary).unwrap();
        assert_eq!(json["500"], "#3b82f6");
        assert_eq!(json.as_object().unwrap().len(), 11);
    }

    #[test]
    fn test_role_colors() {
        let mut colors = Colors::default();
        colors.set_role(RoleColor::TextPrimary, "#000000");
        assert_eq!(colors.role(RoleColor::TextPrimary), "#000000");
        assert_eq!(colors.text.primary, "#000000");
        assert_eq!(RoleColor::BorderDark.label(), "border.dark");
    }

    #[test]
    fn test_partial_theme_uses_defaults() {
        let json = r#"{"name": "Shop", "custom_css": "body{}"}"#;
        let theme: ThemeConfiguration = serde_json::from_str(json).unwrap();
        assert_eq!(theme.name, "Shop");
        assert_eq!(theme.custom_css, "body{}");
        assert_eq!(theme.colors, Colors::default());
        assert_eq!(theme.pages.len(), 0);
    }

    #[test]
    fn test_font_family_accessors() {
        let mut typography = Typography::default();
        typography.set_family(FontFamilyKind::Serif, "Merriweather, serif");
        assert_eq!(typography.family(FontFamilyKind::Serif), "Merriweather, serif");
        assert!(typography.family(FontFamilyKind::Sans).starts_with("Inter"));
    }
}
