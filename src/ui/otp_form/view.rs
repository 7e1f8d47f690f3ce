// SPDX-License-Identifier: MPL-2.0
//! Form layout: a centered card with title, six slots and submit button,
//! and the toast in the top-right corner.

use super::{Message, State, ViewContext};
use crate::domain::otp::SlotIndex;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

pub fn render<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let title = Text::new(i18n.tr("otp-title")).size(typography::TITLE_MD);

    let placeholder = i18n.tr("otp-slot-placeholder");
    let slots = SlotIndex::all().fold(Row::new().spacing(spacing::XS), |row, index| {
        row.push(slot(state, index, &placeholder))
    });

    let submit = button(
        Container::new(Text::new(i18n.tr("otp-submit-button")).size(typography::BODY))
            .center_x(Length::Fill),
    )
    .on_press(Message::Submit)
    .width(Length::Fill)
    .height(sizing::BUTTON_HEIGHT)
    .style(styles::button::primary);

    let form = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(slots)
        .push(submit);

    let card = Container::new(form)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::card);

    let layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(Container::new(card).center(Length::Fill));

    match state.toast() {
        Some(toast) => layers
            .push(
                Container::new(toast.view(state.now()))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(alignment::Horizontal::Right)
                    .align_y(alignment::Vertical::Top)
                    .padding(spacing::MD),
            )
            .into(),
        None => layers.into(),
    }
}

fn slot<'a>(state: &'a State, index: SlotIndex, placeholder: &str) -> Element<'a, Message> {
    text_input(placeholder, &state.digits().slot_text(index))
        .id(state.slot_id(index))
        .on_input(move |value| Message::SlotInput { index, value })
        .on_paste(move |_| Message::SlotPasted(index))
        .on_submit(Message::Submit)
        .size(typography::SLOT_DIGIT)
        .width(Length::Fixed(sizing::SLOT_WIDTH))
        .padding(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .style(styles::text_input::slot)
        .into()
}
