//! Filter Chips Component
//!
//! Horizontal row of mutually exclusive filter chips. The pressed chip is
//! exposed through `aria-pressed` and the `chip active` class.

use dioxus::prelude::*;

/// A chip's visible label and the value it filters by
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ChipOption {
    pub label: String,
    pub value: String,
}

impl ChipOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Properties for the FilterChips component
#[derive(Clone, PartialEq, Props)]
pub struct FilterChipsProps {
    /// Available chips, in display order
    pub options: Vec<ChipOption>,
    /// Value of the pressed chip
    pub selected: String,
    /// Handler called with the value of the clicked chip
    pub on_select: EventHandler<String>,
}

/// Value for `aria-pressed`
pub fn pressed_attr(pressed: bool) -> &'static str {
    if pressed {
        "true"
    } else {
        "false"
    }
}

/// Displays a row of filter chips
///
/// # Example
///
/// ```rust,ignore
/// let mut tag = use_signal(|| "all".to_string());
///
/// rsx! {
///     FilterChips {
///         options: vec![ChipOption::new("All", "all"), ChipOption::new("Java", "java")],
///         selected: tag(),
///         on_select: move |value| tag.set(value)
///     }
/// }
/// ```
#[component]
pub fn FilterChips(props: FilterChipsProps) -> Element {
    let selected = props.selected.clone();

    rsx! {
        div {
            class: "filter-chips",
            role: "group",
            "aria-label": "Filter projects",
            for chip in props.options.iter() {
                {
                    let value = chip.value.clone();
                    let is_pressed = selected == chip.value;
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            r#type: "button",
                            class: if is_pressed { "chip active" } else { "chip" },
                            "aria-pressed": pressed_attr(is_pressed),
                            "data-filter": "{chip.value}",
                            onclick: move |_| {
                                on_select.call(value.clone());
                            },
                            "{chip.label}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressed_attr_values() {
        assert_eq!(pressed_attr(true), "true");
        assert_eq!(pressed_attr(false), "false");
    }

    #[test]
    fn chip_option_new() {
        let chip = ChipOption::new("C++", "c++");
        assert_eq!(chip.label, "C++");
        assert_eq!(chip.value, "c++");
    }
}
