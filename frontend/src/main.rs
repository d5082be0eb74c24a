use shared::{LogSubmit, LoginValues, SubmitHandler};
use yew::prelude::*;

mod components;
mod pages;

#[function_component(App)]
fn app() -> Html {
    let on_valid_submit = Callback::from(|values: LoginValues| {
        LogSubmit.on_valid_submit(values);
    });

    html! { <pages::login::Login {on_valid_submit} /> }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
