//! The counter's view components.

use crate::provider::{Context, View};
use crate::reducer::{Action, CounterState};
use crate::style::{button_style, buttons_style, counter_style, wrapper_style, ButtonPalette, Style};
use crate::view::Element;
use crate::Dispatch;

pub const PLUS_LABEL: &str = "plus";
pub const MINUS_LABEL: &str = "minus";

/// A button that dispatches `action` when clicked.
pub fn button(label: &str, style: Style, action: Action, dispatch: &Dispatch<Action>) -> Element {
    let dispatch = dispatch.clone();
    Element::new("button")
        .styled(style)
        .text(label)
        .on_click(move || dispatch.dispatch(action))
}

pub fn plus_button(dispatch: &Dispatch<Action>) -> Element {
    button(
        PLUS_LABEL,
        button_style(ButtonPalette::PLUS),
        Action::Increment,
        dispatch,
    )
}

pub fn minus_button(dispatch: &Dispatch<Action>) -> Element {
    button(
        MINUS_LABEL,
        button_style(ButtonPalette::MINUS),
        Action::Decrement,
        dispatch,
    )
}

/// The count above a minus/plus row.
#[derive(Clone, Copy, Debug, Default)]
pub struct App;

impl View<CounterState, Action, Element> for App {
    fn view(&self, cx: &Context<'_, CounterState, Action>) -> Element {
        Element::new("div")
            .styled(wrapper_style())
            .child(
                Element::new("div")
                    .styled(counter_style())
                    .text(cx.state.count.to_string()),
            )
            .child(
                Element::new("div")
                    .styled(buttons_style())
                    .child(minus_button(cx.dispatch))
                    .child(plus_button(cx.dispatch)),
            )
    }
}
