use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PasswordInputProps {
    pub id: AttrValue,
    pub value: AttrValue,
    pub visible: bool,
    pub oninput: Callback<String>,
    pub ontoggle: Callback<()>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub describedby: Option<AttrValue>,
}

#[function_component(PasswordInput)]
pub fn password_input(props: &PasswordInputProps) -> Html {
    let on_input = {
        let oninput = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            {
                oninput.emit(input.value());
            }
        })
    };

    let on_toggle = {
        let ontoggle = props.ontoggle.clone();
        Callback::from(move |_: MouseEvent| ontoggle.emit(()))
    };

    let input_type = if props.visible { "text" } else { "password" };
    let toggle_label = if props.visible {
        "Hide password"
    } else {
        "Show password"
    };

    html! {
        <div class="password-input">
            <input
                type={input_type}
                id={props.id.clone()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                aria-describedby={props.describedby.clone()}
                oninput={on_input}
            />
            <button
                type="button"
                class="password-toggle"
                aria-label={toggle_label}
                onclick={on_toggle}
            >
                { if props.visible { eye_off_icon() } else { eye_icon() } }
            </button>
        </div>
    }
}

fn eye_icon() -> Html {
    html! {
        <svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"
            stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <path d="M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z" />
            <circle cx="12" cy="12" r="3" />
        </svg>
    }
}

fn eye_off_icon() -> Html {
    html! {
        <svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"
            stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <path d="M9.88 9.88a3 3 0 1 0 4.24 4.24" />
            <path d="M10.73 5.08A10.43 10.43 0 0 1 12 5c7 0 10 7 10 7a13.16 13.16 0 0 1-1.67 2.68" />
            <path d="M6.61 6.61A13.526 13.526 0 0 0 2 12s3 7 10 7a9.74 9.74 0 0 0 5.39-1.61" />
            <line x1="2" x2="22" y1="2" y2="22" />
        </svg>
    }
}
