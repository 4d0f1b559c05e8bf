// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, size and spacing value used by the club screens lives here so the
auth form, dashboard, gallery and roster share one visual language.

## Organization

- **Palette**: Club colors and neutrals
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes (tiles, avatars, modals)
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use club_hub::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let backdrop = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Neutrals
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.067, 0.094, 0.153);
    pub const GRAY_600: Color = Color::from_rgb(0.294, 0.333, 0.388);
    pub const GRAY_500: Color = Color::from_rgb(0.420, 0.447, 0.502);
    pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686);
    pub const GRAY_200: Color = Color::from_rgb(0.898, 0.906, 0.922);

    // Club colors (navy/blue scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.859, 0.918, 0.996);
    pub const PRIMARY_500: Color = Color::from_rgb(0.231, 0.510, 0.965);
    pub const PRIMARY_600: Color = Color::from_rgb(0.145, 0.388, 0.922);
    pub const PRIMARY_800: Color = Color::from_rgb(0.118, 0.251, 0.686);
    pub const PRIMARY_900: Color = Color::from_rgb(0.118, 0.227, 0.541);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.937, 0.267, 0.267);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;

    /// Semi-transparent panels such as toasts.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_XL: f32 = 48.0;

    /// Notification count bubble on the dashboard bell.
    pub const BADGE: f32 = 20.0;

    // Content blocks
    pub const FORM_WIDTH: f32 = 380.0;
    pub const TILE_HEIGHT: f32 = 120.0;
    pub const GRID_CELL: f32 = 160.0;
    pub const AVATAR_SM: f32 = 56.0;
    pub const AVATAR_LG: f32 = 96.0;
    pub const PREVIEW_HEIGHT: f32 = 200.0;
    pub const MODAL_WIDTH: f32 = 480.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const PROGRESS_BAR_HEIGHT: f32 = 8.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Titles: screen headings and the club name on the splash
    //! - Body: primary content text
    //! - Caption: timestamps, authors, badges

    /// Splash and auth headings.
    pub const TITLE_LG: f32 = 30.0;

    /// Screen headers.
    pub const TITLE_MD: f32 = 22.0;

    /// Section headers, player names.
    pub const TITLE_SM: f32 = 18.0;

    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    pub const BODY_SM: f32 = 13.0;

    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Selected tabs, toast accents, dashed pick area.
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 3.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    assert!(sizing::AVATAR_LG > sizing::AVATAR_SM);
    assert!(sizing::MODAL_WIDTH > sizing::TOAST_WIDTH);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(sizing::ICON_XL > sizing::ICON_MD);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn grid_cells_fit_in_a_modal() {
        assert!(sizing::GRID_CELL * 2.0 < sizing::MODAL_WIDTH);
    }
}
