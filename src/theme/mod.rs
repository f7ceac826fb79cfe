use iced::Color;

/// Complete theme definition with semantic color naming
#[derive(Debug, Clone, PartialEq)]
pub struct AppTheme {
    pub name: String,

    // === Background Layers (progressive depth) ===
    pub bg_base: Color,     // App background (deepest)
    pub bg_surface: Color,  // Cards, containers
    pub bg_elevated: Color, // Inputs
    pub bg_hover: Color,    // Hover states

    // === Foreground/Text ===
    pub fg_primary: Color,   // Main text
    pub fg_secondary: Color, // Less important text
    pub fg_muted: Color,     // Disabled/placeholder text
    pub fg_on_accent: Color, // Text on accent colors

    // === Semantic Colors ===
    pub accent: Color,    // Brand/primary actions
    pub highlight: Color, // Secondary brand color (avatars, badges)
    pub success: Color,   // Online badge
    pub danger: Color,    // Destructive actions
    pub info: Color,      // Help text

    // === Borders ===
    pub border: Color,        // Default borders
    pub border_strong: Color, // Emphasized borders

    // === Shadows ===
    pub shadow_color: Color,
}

impl AppTheme {
    /// Creates a theme from RGB hex values for easier definition
    pub fn from_hex(
        name: &str,
        bg_base: u32,
        bg_surface: u32,
        bg_elevated: u32,
        bg_hover: u32,
        fg_primary: u32,
        fg_secondary: u32,
        fg_muted: u32,
        fg_on_accent: u32,
        accent: u32,
        highlight: u32,
        success: u32,
        danger: u32,
        info: u32,
        border: u32,
        border_strong: u32,
    ) -> Self {
        Self {
            name: name.to_string(),
            bg_base: hex_to_color(bg_base),
            bg_surface: hex_to_color(bg_surface),
            bg_elevated: hex_to_color(bg_elevated),
            bg_hover: hex_to_color(bg_hover),
            fg_primary: hex_to_color(fg_primary),
            fg_secondary: hex_to_color(fg_secondary),
            fg_muted: hex_to_color(fg_muted),
            fg_on_accent: hex_to_color(fg_on_accent),
            accent: hex_to_color(accent),
            highlight: hex_to_color(highlight),
            success: hex_to_color(success),
            danger: hex_to_color(danger),
            info: hex_to_color(info),
            border: hex_to_color(border),
            border_strong: hex_to_color(border_strong),
            shadow_color: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
        }
    }

    /// Warm off-white background, forest green accent, gold highlight
    pub fn brand() -> Self {
        Self::from_hex(
            "Brand", 0x00fd_fbf7, 0x00ff_ffff, 0x00ff_ffff, 0x00f8_f5ee, 0x000f_172a,
            0x0047_5569, 0x0094_a3b8, 0x00ff_ffff, 0x0015_5e37, 0x00be_9d63, 0x0016_a34a,
            0x00dc_2626, 0x001e_40af, 0x00e2_e8f0, 0x00be_9d63,
        )
    }

    pub fn is_light(&self) -> bool {
        luminance(self.bg_base) > 0.5
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::brand()
    }
}

#[allow(clippy::cast_precision_loss)]
fn hex_to_color(hex: u32) -> Color {
    let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
    let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
    let b = (hex & 0xFF) as f32 / 255.0;
    Color::from_rgb(r, g, b)
}

fn luminance(color: Color) -> f32 {
    0.2126 * color.r + 0.7152 * color.g + 0.0722 * color.b
}
