// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors and notification accents
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use otp_entry::ui::design_tokens::{palette, spacing};

let accent = palette::NOTIFY_BLUE;
let padding = spacing::MD; // 16px
assert!(padding > 0.0);
assert!(accent.b > accent.r);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Notification backgrounds
    pub const SUCCESS_BG: Color = Color::from_rgb8(0x22, 0xc5, 0x5e);
    pub const FAILURE_BG: Color = Color::from_rgb8(0xef, 0x44, 0x44);

    // Notification border pulse endpoints
    pub const NOTIFY_BLUE: Color = Color::from_rgb8(0x3b, 0x82, 0xf6);
    pub const NOTIFY_GREEN: Color = Color::from_rgb8(0x10, 0xb9, 0x81);
    pub const NOTIFY_RED: Color = Color::from_rgb8(0xef, 0x44, 0x44);
    pub const NOTIFY_ORANGE: Color = Color::from_rgb8(0xf9, 0x73, 0x16);
}

// ============================================================================
// Spacing Scale (8px grid)
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
// Component Sizing
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;

    pub const SLOT_WIDTH: f32 = 44.0;

    pub const FORM_WIDTH: f32 = 360.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Digits inside the slots.
    pub const SLOT_DIGIT: f32 = 24.0;

    pub const TITLE_MD: f32 = 20.0;

    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Border Width Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;

    /// Focus rings and notification accents.
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
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

    assert!(sizing::FORM_WIDTH > sizing::SLOT_WIDTH);

    assert!(typography::SLOT_DIGIT > typography::TITLE_MD);
    assert!(typography::BODY_LG > typography::BODY);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
