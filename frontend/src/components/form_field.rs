use shared::Field;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub field: Field,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub children: Html,
}

pub fn error_id(field: Field) -> String {
    format!("{}-error", field.name())
}

/// Label, control and inline message for one form field.
#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let field = props.field;
    let class = classes!("form-group", props.error.is_some().then_some("has-error"));

    html! {
        <div {class}>
            <label for={field.name()}>{ field.label() }</label>
            { props.children.clone() }
            <p id={error_id(field)} class="form-message" aria-live="polite">
                { props.error.as_deref().unwrap_or_default() }
            </p>
        </div>
    }
}
