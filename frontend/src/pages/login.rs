use std::rc::Rc;

use shared::{Field, LoginForm, LoginValues};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{error_id, FormField, GoogleButton, PasswordInput};

pub enum LoginAction {
    SetField(Field, String),
    ToggleVisibility,
    Submitted(LoginForm),
}

#[derive(Default, PartialEq)]
struct FormState(LoginForm);

impl Reducible for FormState {
    type Action = LoginAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut form = self.0.clone();
        match action {
            LoginAction::SetField(field, value) => form.set_field(field, value),
            LoginAction::ToggleVisibility => form.toggle_visibility(),
            LoginAction::Submitted(submitted) => form = submitted,
        }
        Rc::new(FormState(form))
    }
}

#[derive(Properties, PartialEq)]
pub struct LoginProps {
    pub on_valid_submit: Callback<LoginValues>,
}

#[function_component(Login)]
pub fn login(props: &LoginProps) -> Html {
    let state = use_reducer(FormState::default);
    let form = &state.0;

    let on_email_input = {
        let state = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            {
                state.dispatch(LoginAction::SetField(Field::Email, input.value()));
            }
        })
    };

    let on_password_input = {
        let state = state.dispatcher();
        Callback::from(move |value: String| {
            state.dispatch(LoginAction::SetField(Field::Password, value));
        })
    };

    let on_toggle = {
        let state = state.dispatcher();
        Callback::from(move |_: ()| state.dispatch(LoginAction::ToggleVisibility))
    };

    let on_submit = {
        let state = state.clone();
        let on_valid_submit = props.on_valid_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut form = state.0.clone();
            // Failures are kept on the form and rendered inline.
            let _ = form.submit(&mut |values: LoginValues| on_valid_submit.emit(values));
            state.dispatch(LoginAction::Submitted(form));
        })
    };

    let message = |field: Field| form.errors().message(field).map(AttrValue::from);

    html! {
        <main class="login-page">
            <section class="login-column">
                <div class="login-panel">
                    <h1 class="login-title">{ "Sign in" }</h1>

                    <form class="login-form" onsubmit={on_submit} novalidate=true aria-label="Login form">
                        <FormField field={Field::Email} error={message(Field::Email)}>
                            <input
                                type="email"
                                id={Field::Email.name()}
                                placeholder="you@email.com"
                                value={form.value(Field::Email).to_string()}
                                aria-describedby={error_id(Field::Email)}
                                oninput={on_email_input}
                            />
                        </FormField>

                        <FormField field={Field::Password} error={message(Field::Password)}>
                            <PasswordInput
                                id={Field::Password.name()}
                                value={form.value(Field::Password).to_string()}
                                visible={form.is_password_visible()}
                                placeholder="Enter your password"
                                describedby={error_id(Field::Password)}
                                oninput={on_password_input}
                                ontoggle={on_toggle}
                            />
                        </FormField>

                        <button type="submit" class="btn btn-submit">{ "Sign in" }</button>
                    </form>

                    <div class="separator" role="separator" aria-label="or">
                        <span>{ "Or continue with" }</span>
                    </div>

                    <GoogleButton />
                </div>
            </section>

            <section class="login-decoration" aria-hidden="true">
                <div class="login-decoration-glow" />
            </section>
        </main>
    }
}
