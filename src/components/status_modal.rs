use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusModalProps {
    pub shipment_id: i64,
    pub on_submit: Callback<(i64, String)>,
    pub on_close: Callback<()>,
    #[prop_or(false)]
    pub submitting: bool,
}

#[function_component(StatusModal)]
pub fn status_modal(props: &StatusModalProps) -> Html {
    let status = use_state(String::new);

    let on_input = {
        let status = status.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            status.set(input.value());
        })
    };

    let on_submit = {
        let status = status.clone();
        let on_submit = props.on_submit.clone();
        let shipment_id = props.shipment_id;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit((shipment_id, (*status).clone()));
        })
    };

    let on_cancel = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div class="modal show">
            <div class="modal-content">
                <div class="modal-header">
                    <h3>{format!("Update Shipment #{}", props.shipment_id)}</h3>
                </div>
                <form onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="shipment-status">{"Shipment Status"}</label>
                        <input
                            id="shipment-status"
                            type="text"
                            placeholder="Shipment Status"
                            value={(*status).clone()}
                            oninput={on_input}
                        />
                    </div>
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" onclick={on_cancel}>{"Cancel"}</button>
                        <button type="submit" class="btn-primary" disabled={props.submitting}>{"Update"}</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
