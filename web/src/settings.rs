use apagao_core::{CellCount, Coord, PuzzleConfig};
use serde::{Deserialize, Serialize};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::theme::Theme;

pub(crate) const SIZE_PRESETS: &[Coord] = &[3, 4, 5, 6];
pub(crate) const MIN_UI_STEPS: CellCount = 1;
pub(crate) const MAX_UI_STEPS: CellCount = 40;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct Settings {
    pub puzzle: PuzzleConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            puzzle: PuzzleConfig::default(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsProps {
    #[prop_or_default]
    pub open: bool,
    pub settings: Settings,
    pub on_apply: Callback<Settings>,
    pub on_cancel: Callback<()>,
}

/// Settings dialog: grid size, scramble intensity, theme.
///
/// Applying starts a new puzzle; the theme switch takes effect immediately
/// and lasts for the session only.
#[function_component]
pub(crate) fn SettingsView(props: &SettingsProps) -> Html {
    let size_ref = use_node_ref();
    let steps_ref = use_node_ref();
    let steps_label = use_state(|| props.settings.puzzle.steps);

    let on_steps_input = {
        let steps_label = steps_label.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Ok(steps) = input.value().parse::<CellCount>() {
                steps_label.set(steps);
            }
        })
    };

    let on_apply = {
        let size_ref = size_ref.clone();
        let steps_ref = steps_ref.clone();
        let on_apply = props.on_apply.clone();
        Callback::from(move |_: MouseEvent| {
            let size = size_ref
                .cast::<HtmlSelectElement>()
                .and_then(|select| select.value().parse::<Coord>().ok())
                .unwrap_or(PuzzleConfig::default().size);
            let steps = steps_ref
                .cast::<HtmlInputElement>()
                .and_then(|input| input.value().parse::<CellCount>().ok())
                .unwrap_or(apagao_core::DEFAULT_STEPS);
            log::debug!("apply settings: size={}, steps={}", size, steps);
            on_apply.emit(Settings {
                puzzle: PuzzleConfig::new(size, steps),
            });
        })
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let theme_button = |label: &'static str, theme: Option<Theme>| {
        html! {
            <button type="button" onclick={Callback::from(move |_| Theme::apply(theme))}>
                {label}
            </button>
        }
    };

    html! {
        <dialog id="settings" open={props.open}>
            <article>
                <h2>{"Settings"}</h2>
                <label for="size">{"Grid size"}</label>
                <select id="size" ref={size_ref}>
                    {
                        for SIZE_PRESETS.iter().map(|&size| html! {
                            <option
                                value={size.to_string()}
                                selected={size == props.settings.puzzle.size}
                            >
                                {format!("{0} × {0}", size)}
                            </option>
                        })
                    }
                </select>
                <label for="randomness">{format!("Scramble steps: {}", *steps_label)}</label>
                <input
                    id="randomness"
                    type="range"
                    ref={steps_ref}
                    min={MIN_UI_STEPS.to_string()}
                    max={MAX_UI_STEPS.to_string()}
                    value={props.settings.puzzle.steps.to_string()}
                    oninput={on_steps_input}
                />
                <ul class="themes">
                    <li>{theme_button("Auto", None)}</li>
                    <li>{theme_button("Light", Some(Theme::Light))}</li>
                    <li>{theme_button("Dark", Some(Theme::Dark))}</li>
                </ul>
                <footer>
                    <button type="reset" onclick={on_cancel}>{"Cancel"}</button>
                    <button onclick={on_apply}>{"Apply"}</button>
                </footer>
            </article>
        </dialog>
    }
}
