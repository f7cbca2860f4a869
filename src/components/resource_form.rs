use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{File, FileReader, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, ProgressEvent};
use yew::prelude::*;

use crate::hooks::use_resource::create_error_message;
use crate::hooks::use_session;
use crate::models::{push_listed, FieldKind, FormField, FormValues, Resource, SelectOption};
use crate::services::ApiClient;
use crate::state::SessionAccess;

/// Values typed so far plus the drop-down entries fetched for select fields
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub values: FormValues,
    pub options: HashMap<&'static str, Vec<SelectOption>>,
}

pub enum FormAction {
    Set(&'static str, String),
    /// Adds one entry to a multi-value field
    Push(&'static str, String),
    Options(&'static str, Vec<SelectOption>),
    /// Clears the values, keeps the fetched options
    Reset,
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Set(key, value) => {
                next.values.insert(key, value);
            }
            FormAction::Push(key, entry) => push_listed(&mut next.values, key, entry),
            FormAction::Options(key, options) => {
                next.options.insert(key, options);
            }
            FormAction::Reset => next.values.clear(),
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct ResourceFormProps<R: Resource> {
    pub on_created: Callback<R>,
    pub on_cancel: Callback<()>,
}

/// Create form generated from `R::form_fields()`
#[function_component(ResourceForm)]
pub fn resource_form<R>(props: &ResourceFormProps<R>) -> Html
where
    R: Resource,
{
    let session = use_session();
    let state = use_reducer(FormState::default);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);
    let token = session.token();

    // Fill the drop-downs
    {
        let state = state.clone();
        use_effect_with(token.clone(), move |token| {
            if let Ok(client) = ApiClient::authorized(token.as_deref()) {
                for field in R::form_fields() {
                    let FieldKind::Select(kind) = field.kind else {
                        continue;
                    };
                    let client = client.clone();
                    let state = state.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        match client.options(kind).await {
                            Ok(options) => state.dispatch(FormAction::Options(field.key, options)),
                            Err(e) => log::error!("❌ Error loading options for {}: {}", field.label, e),
                        }
                    });
                }
            }
            || ()
        });
    }

    let dispatch = {
        let state = state.clone();
        Callback::from(move |action: FormAction| state.dispatch(action))
    };

    let on_submit = {
        let state = state.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let on_created = props.on_created.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let draft = match R::draft_from_form(&state.values) {
                Ok(draft) => draft,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };
            let client = match ApiClient::authorized(token.as_deref()) {
                Ok(client) => client,
                Err(e) => {
                    error.set(Some(e.to_string()));
                    return;
                }
            };
            submitting.set(true);
            error.set(None);

            let state = state.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            let on_created = on_created.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match client.create::<R>(&draft).await {
                    Ok(created) => {
                        state.dispatch(FormAction::Reset);
                        on_created.emit(created);
                    }
                    Err(e) => {
                        log::error!("❌ Error creating {}: {}", R::SINGULAR, e);
                        error.set(Some(create_error_message::<R>()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    html! {
        <form class="resource-form" onsubmit={on_submit}>
            if let Some(message) = &*error {
                <p class="form-error">{ message.clone() }</p>
            }
            { for R::form_fields().into_iter().map(|field| render_field(&field, &state, &dispatch)) }
            <div class="form-actions">
                <button type="button" class="btn btn-secondary" onclick={on_cancel}>{"Cancel"}</button>
                <button type="submit" class="btn btn-primary" disabled={*submitting}>
                    { if *submitting { "Saving..." } else { "Save" } }
                </button>
            </div>
        </form>
    }
}

fn render_field(field: &FormField, state: &FormState, dispatch: &Callback<FormAction>) -> Html {
    let key = field.key;
    let current = state.values.get(key).cloned().unwrap_or_default();

    let input = match field.kind {
        FieldKind::Text | FieldKind::Number => {
            let oninput = dispatch.reform(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                FormAction::Set(key, input.value())
            });
            let (kind, step) = if field.kind == FieldKind::Number {
                ("number", Some("any"))
            } else {
                ("text", None)
            };
            html! {
                <input id={key} type={kind} step={step} value={current}
                    required={field.required} {oninput} />
            }
        }
        FieldKind::TextArea => {
            let oninput = dispatch.reform(move |e: InputEvent| {
                let input: HtmlTextAreaElement = e.target_unchecked_into();
                FormAction::Set(key, input.value())
            });
            html! { <textarea id={key} value={current} required={field.required} {oninput} /> }
        }
        FieldKind::Select(_) => {
            let onchange = dispatch.reform(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                FormAction::Set(key, select.value())
            });
            let options = state.options.get(key).cloned().unwrap_or_default();
            html! {
                <select id={key} required={field.required} {onchange}>
                    <option value="" selected={current.is_empty()}>
                        { format!("Select {}", field.label.to_lowercase()) }
                    </option>
                    { for options.into_iter().map(|option| {
                        let value = option.id.to_string();
                        let selected = value == current;
                        html! {
                            <option {selected} {value}>{ option.label }</option>
                        }
                    }) }
                </select>
            }
        }
        FieldKind::Images => {
            let dispatch = dispatch.clone();
            let onchange = Callback::from(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                if let Some(files) = input.files() {
                    for index in 0..files.length() {
                        if let Some(file) = files.get(index) {
                            let dispatch = dispatch.clone();
                            let on_loaded =
                                Callback::from(move |url: String| dispatch.emit(FormAction::Push(key, url)));
                            read_data_url(file, on_loaded);
                        }
                    }
                }
                // Same file can be picked again
                input.set_value("");
            });
            let images: Vec<String> = current.lines().map(str::to_string).collect();
            html! {
                <>
                    <input id={key} type="file" accept="image/*" multiple={true} {onchange} />
                    if !images.is_empty() {
                        <div class="image-previews">
                            { for images.into_iter().map(|src| html! { <img class="image-preview" src={src} /> }) }
                        </div>
                    }
                </>
            }
        }
        FieldKind::Checkbox => {
            let onchange = dispatch.reform(move |e: Event| {
                let input: HtmlInputElement = e.target_unchecked_into();
                FormAction::Set(key, input.checked().to_string())
            });
            return html! {
                <div class="form-group form-check">
                    <label for={key}>
                        <input id={key} type="checkbox" checked={current == "true"} {onchange} />
                        { field.label }
                    </label>
                </div>
            };
        }
    };

    html! {
        <div class="form-group">
            <label for={key}>{ field.label }</label>
            { input }
        </div>
    }
}

/// Reads `file` as a `data:` URL and hands it to `on_loaded`
fn read_data_url(file: File, on_loaded: Callback<String>) {
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            log::warn!("⚠️ FileReader unavailable: {:?}", e);
            return;
        }
    };
    let name = file.name();
    let onload = {
        let reader = reader.clone();
        let name = name.clone();
        Closure::once_into_js(move |_: ProgressEvent| {
            match reader.result().ok().and_then(|result| result.as_string()) {
                Some(url) => on_loaded.emit(url),
                None => log::warn!("⚠️ Could not read image {}", name),
            }
        })
    };
    reader.set_onload(Some(onload.unchecked_ref()));
    if let Err(e) = reader.read_as_data_url(&file) {
        log::warn!("⚠️ Could not read image {}: {:?}", name, e);
    }
}
