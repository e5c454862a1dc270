//! Theme system
//! Warm sunrise palette in light mode, deep ink in dark mode

use iced::color;
use iced::font::Weight;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

pub const BOLD_WEIGHT: Weight = Weight::Bold;
pub const BLACK_WEIGHT: Weight = Weight::Black;

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark
            | Theme::Dracula
            | Theme::Nord
            | Theme::SolarizedDark
            | Theme::GruvboxDark
            | Theme::CatppuccinMocha
            | Theme::TokyoNight
            | Theme::Moonfly
            | Theme::Nightfly
            | Theme::Oxocarbon
    )
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x17110d);
    pub const SURFACE: Color = color!(0x241b15);
    pub const SURFACE_SOFT: Color = color!(0x30241b);
    pub const BORDER: Color = color!(0x3d2f25);
    pub const TEXT_MUTED: Color = color!(0x9c8b7e);
    pub const TEXT_SECONDARY: Color = color!(0xcbbcae);
    pub const TEXT_PRIMARY: Color = color!(0xfff7ed);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xfff7ed);
    pub const SURFACE: Color = color!(0xffffff);
    pub const SURFACE_SOFT: Color = color!(0xffedd5);
    pub const BORDER: Color = color!(0xfed7aa);
    pub const TEXT_MUTED: Color = color!(0x9ca3af);
    pub const TEXT_SECONDARY: Color = color!(0x6b7280);
    pub const TEXT_PRIMARY: Color = color!(0x111827);
}

pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

/// Tinted surface for highlighted blocks (selected package, memo row)
pub fn surface_soft(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE_SOFT
    } else {
        light::SURFACE_SOFT
    }
}

pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

// Fixed accents (same for both modes)
pub const ACCENT_ORANGE: Color = color!(0xea580c);
pub const ACCENT_ORANGE_HOVER: Color = color!(0xf97316);
pub const ACCENT_PINK: Color = color!(0xec4899);
pub const GOLD: Color = color!(0xfacc15);
pub const INK: Color = color!(0x111827);
pub const INK_HOVER: Color = color!(0x1f2937);
pub const SUCCESS: Color = color!(0x22c55e);
pub const DANGER: Color = color!(0xdc2626);
pub const DANGER_SOFT: Color = color!(0xfee2e2);
pub const BANK_GREEN: Color = color!(0x059669);
pub const BANK_GREEN_DARK: Color = color!(0x065f46);

/// Scale a color's alpha
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

// ============================================================================
// Container Styles
// ============================================================================

/// Page background
pub fn page(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Landing page package card
pub fn package_card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 24.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.98, 0.57, 0.24, 0.15),
            offset: Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    }
}

/// Floating panel (modal body, success banner) faded by `opacity`
pub fn floating_panel(theme: &Theme, opacity: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(with_alpha(surface(theme), opacity))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 28.0.into(),
            width: 2.0,
            color: with_alpha(border_color(theme), opacity),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.98, 0.57, 0.24, 0.4 * opacity),
            offset: Vector::new(0.0, 20.0),
            blur_radius: 60.0,
        },
        ..Default::default()
    }
}

/// Dimmed backdrop behind the modal
pub fn backdrop(opacity: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.8 * opacity))),
        ..Default::default()
    }
}

/// Dark header strip of the modal
pub fn modal_header(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(INK)),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: iced::border::Radius::new(0.0).top(28.0),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Highlighted block (selected package, memo row)
pub fn soft_block(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface_soft(theme))),
        border: Border {
            radius: 16.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    }
}

/// Bank card look
pub fn bank_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Gradient(
            iced::gradient::Linear::new(iced::Radians(2.4))
                .add_stop(0.0, BANK_GREEN)
                .add_stop(1.0, BANK_GREEN_DARK)
                .into(),
        )),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: 14.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
            offset: Vector::new(0.0, 6.0),
            blur_radius: 16.0,
        },
        ..Default::default()
    }
}

/// Small red pill
pub fn warning_pill(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(DANGER_SOFT)),
        text_color: Some(DANGER),
        border: Border {
            radius: 999.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Gradient strip along the top of the success banner
pub fn banner_strip(opacity: f32) -> container::Style {
    container::Style {
        background: Some(Background::Gradient(
            iced::gradient::Linear::new(iced::Radians(std::f32::consts::FRAC_PI_2))
                .add_stop(0.0, with_alpha(color!(0xfb923c), opacity))
                .add_stop(0.5, with_alpha(color!(0xef4444), opacity))
                .add_stop(1.0, with_alpha(ACCENT_PINK, opacity))
                .into(),
        )),
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Solid ink button (confirm, dismiss)
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => INK_HOVER,
        _ => INK,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::WHITE,
        border: Border {
            radius: 14.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
            offset: Vector::new(0.0, 8.0),
            blur_radius: 20.0,
        },
        ..Default::default()
    }
}

/// Orange call-to-action on package cards
pub fn accent_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => ACCENT_ORANGE_HOVER,
        _ => ACCENT_ORANGE,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::WHITE,
        border: Border {
            radius: 999.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Copy button; turns green while the "copied" indicator is on
pub fn copy_button(copied: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let (background, text_color) = if copied {
            (SUCCESS, Color::WHITE)
        } else {
            match status {
                button::Status::Hovered => (surface_soft(theme), text_primary(theme)),
                _ => (surface(theme), text_primary(theme)),
            }
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                radius: 10.0.into(),
                width: if copied { 0.0 } else { 1.0 },
                color: border_color(theme),
            },
            ..Default::default()
        }
    }
}

/// Transparent button wrapping clickable content (account alias, close icon)
pub fn ghost_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color::from_rgba(1.0, 1.0, 1.0, 0.15))),
        _ => None,
    };
    button::Style {
        background,
        text_color: Color::WHITE,
        border: Border {
            radius: 999.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_detection() {
        assert!(is_dark(&Theme::Dark));
        assert!(!is_dark(&Theme::Light));
    }

    #[test]
    fn test_with_alpha_scales() {
        let faded = with_alpha(ACCENT_PINK, 0.5);
        assert_eq!(faded.r, ACCENT_PINK.r);
        assert!((faded.a - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_copy_button_goes_green() {
        let style = copy_button(true)(&Theme::Light, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(SUCCESS)));
    }
}
