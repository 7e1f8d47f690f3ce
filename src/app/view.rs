// SPDX-License-Identifier: MPL-2.0
//! Root view: the form filling the window.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::otp_form;
use iced::widget::Container;
use iced::{Element, Length};

/// Contextual data needed to render the application.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub form: &'a otp_form::State,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let form = ctx
        .form
        .view(otp_form::ViewContext { i18n: ctx.i18n })
        .map(Message::Form);

    Container::new(form)
        .padding(spacing::XL)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
