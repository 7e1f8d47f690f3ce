// SPDX-License-Identifier: MPL-2.0
//! Text input styles.

use crate::ui::design_tokens::{border, palette, radius};
use iced::widget::text_input;
use iced::{Border, Theme};

/// One OTP slot: rounded box with a brand-colored ring while focused.
pub fn slot(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let base = text_input::default(theme, status);

    let (color, width) = match status {
        text_input::Status::Focused { .. } => (palette::PRIMARY_500, border::WIDTH_MD),
        text_input::Status::Hovered => (palette::PRIMARY_400, border::WIDTH_SM),
        text_input::Status::Active | text_input::Status::Disabled => {
            (theme.extended_palette().background.strong.color, border::WIDTH_SM)
        }
    };

    text_input::Style {
        border: Border {
            color,
            width,
            radius: radius::MD.into(),
        },
        ..base
    }
}
