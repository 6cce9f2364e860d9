//! Guest composition dropdown: clamped steppers for adults, children and
//! rooms plus one age select per child.

use crate::state::AppState;
use dioxus::prelude::*;
use yatra_search::guests::{
    GuestComposition, ADULTS_MAX, ADULTS_MIN, CHILDREN_MAX, CHILD_AGE_MAX, ROOMS_MAX, ROOMS_MIN,
};

const STEPPER_STYLE: &str = "width: 28px; height: 28px; border: 1px solid #D0D0D0; \
                             border-radius: 50%; background: #FFF; cursor: pointer; font-size: 14px;";

#[derive(Props, Clone, PartialEq)]
struct StepperRowProps {
    label: String,
    value: u8,
    at_min: bool,
    at_max: bool,
    on_decrement: EventHandler<()>,
    on_increment: EventHandler<()>,
}

/// One "label  [-] n [+]" row. Buttons are disabled at the clamp bounds;
/// the clamping itself lives in `GuestComposition`.
#[component]
fn StepperRow(props: StepperRowProps) -> Element {
    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 12px; margin: 8px 0;",
            span { style: "flex: 1; font-size: 14px;", "{props.label}" }
            button {
                style: STEPPER_STYLE,
                disabled: props.at_min,
                onclick: move |_| props.on_decrement.call(()),
                "-"
            }
            span { style: "width: 24px; text-align: center; font-size: 14px;", "{props.value}" }
            button {
                style: STEPPER_STYLE,
                disabled: props.at_max,
                onclick: move |_| props.on_increment.call(()),
                "+"
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ChildAgeRowProps {
    index: usize,
    age: u8,
}

/// Age select for one child slot.
#[component]
fn ChildAgeRow(props: ChildAgeRowProps) -> Element {
    let mut state = use_context::<AppState>();
    let index = props.index;
    let number = index + 1;

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 12px; margin: 4px 0 4px 12px;",
            span {
                style: "flex: 1; font-size: 13px; color: #757575;",
                "Child {number} age"
            }
            select {
                style: "padding: 4px; font-size: 13px;",
                onchange: move |evt: Event<FormData>| {
                    if let Ok(new_age) = evt.value().parse::<u8>() {
                        state.guests.with_mut(|g| g.set_child_age(index, new_age));
                    }
                },
                for option_age in 0..=CHILD_AGE_MAX {
                    option {
                        value: "{option_age}",
                        selected: option_age == props.age,
                        "{option_age}"
                    }
                }
            }
        }
    }
}

/// The guests dropdown panel.
#[component]
pub fn GuestEditor() -> Element {
    let mut state = use_context::<AppState>();
    let guests: GuestComposition = (state.guests)();

    rsx! {
        div {
            style: "position: absolute; top: 100%; right: 0; z-index: 20; margin-top: 8px; \
                    width: 280px; padding: 12px 16px; background: #FFF; border: 1px solid #E0E0E0; \
                    border-radius: 8px; box-shadow: 0 8px 24px rgba(0,0,0,0.12);",

            StepperRow {
                label: "Adults".to_string(),
                value: guests.adults,
                at_min: guests.adults <= ADULTS_MIN,
                at_max: guests.adults >= ADULTS_MAX,
                on_decrement: move |_| state.guests.with_mut(|g| g.remove_adult()),
                on_increment: move |_| state.guests.with_mut(|g| g.add_adult()),
            }
            StepperRow {
                label: "Children".to_string(),
                value: guests.children,
                at_min: guests.children == 0,
                at_max: guests.children >= CHILDREN_MAX,
                on_decrement: move |_| state.guests.with_mut(|g| g.remove_child()),
                on_increment: move |_| state.guests.with_mut(|g| g.add_child()),
            }

            // One age select per child, kept in lockstep with the count.
            for (index, age) in guests.children_ages.iter().copied().enumerate() {
                ChildAgeRow { index, age }
            }

            StepperRow {
                label: "Rooms".to_string(),
                value: guests.rooms,
                at_min: guests.rooms <= ROOMS_MIN,
                at_max: guests.rooms >= ROOMS_MAX,
                on_decrement: move |_| state.guests.with_mut(|g| g.remove_room()),
                on_increment: move |_| state.guests.with_mut(|g| g.add_room()),
            }

            div {
                style: "margin-top: 8px; padding-top: 8px; border-top: 1px solid #EEE; \
                        font-size: 13px; color: #616161;",
                "{guests.summary()}"
            }
        }
    }
}
