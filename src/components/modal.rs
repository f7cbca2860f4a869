use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    pub children: Children,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    // Clicks inside the dialog must not reach the backdrop
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={on_backdrop}>
            <div class="modal" onclick={stop}>
                <h3 class="modal-title">{ props.title.clone() }</h3>
                { props.children.clone() }
            </div>
        </div>
    }
}
