use yew::prelude::*;

use crate::viewmodels::ShipmentForm;

#[derive(Properties, PartialEq)]
pub struct ShipmentFormModalProps {
    pub on_submit: Callback<ShipmentForm>,
    pub on_close: Callback<()>,
    #[prop_or(false)]
    pub submitting: bool,
}

/// (label, input type, setter, getter)
type FormField = (&'static str, &'static str, fn(&mut ShipmentForm, String), fn(&ShipmentForm) -> &str);

const FIELDS: [FormField; 13] = [
    ("Recipient Name", "text", |f, v| f.recipient_name = v, |f| f.recipient_name.as_str()),
    ("Recipient Address", "text", |f, v| f.recipient_address = v, |f| f.recipient_address.as_str()),
    ("Package Weight", "number", |f, v| f.package_weight = v, |f| f.package_weight.as_str()),
    ("Package Description", "text", |f, v| f.package_description = v, |f| f.package_description.as_str()),
    ("Package Dimensions", "text", |f, v| f.package_dimensions = v, |f| f.package_dimensions.as_str()),
    ("Expected Delivery Date", "date", |f, v| f.expected_delivery_date = v, |f| f.expected_delivery_date.as_str()),
    ("Shipment Status", "text", |f, v| f.shipment_status = v, |f| f.shipment_status.as_str()),
    ("Tracking Number", "text", |f, v| f.tracking_number = v, |f| f.tracking_number.as_str()),
    ("Shipping Method", "text", |f, v| f.shipping_method = v, |f| f.shipping_method.as_str()),
    ("Insurance Value", "number", |f, v| f.insurance_value = v, |f| f.insurance_value.as_str()),
    ("Special Instructions", "text", |f, v| f.special_instructions = v, |f| f.special_instructions.as_str()),
    ("Shipment Cost", "number", |f, v| f.shipment_cost = v, |f| f.shipment_cost.as_str()),
    ("Payment Method", "text", |f, v| f.payment_method = v, |f| f.payment_method.as_str()),
];

#[function_component(ShipmentFormModal)]
pub fn shipment_form_modal(props: &ShipmentFormModalProps) -> Html {
    let form = use_state(ShipmentForm::default);

    let on_submit = {
        let form = form.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit((*form).clone());
        })
    };

    let on_cancel = props.on_close.reform(|_: MouseEvent| ());

    let inputs = FIELDS.iter().map(|(label, kind, set, get)| {
        let set = *set;
        let oninput = {
            let form = form.clone();
            Callback::from(move |e: InputEvent| {
                let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                let mut next = (*form).clone();
                set(&mut next, input.value());
                form.set(next);
            })
        };
        let id = label.to_lowercase().replace(' ', "-");
        html! {
            <div class="form-group" key={id.clone()}>
                <label for={id.clone()}>{*label}</label>
                <input
                    id={id}
                    type={*kind}
                    step="any"
                    placeholder={*label}
                    value={get(&form).to_string()}
                    {oninput}
                />
            </div>
        }
    });

    html! {
        <div class="modal show">
            <div class="modal-content modal-wide">
                <div class="modal-header">
                    <h3>{"Create a Shipment"}</h3>
                </div>
                <form onsubmit={on_submit}>
                    { for inputs }
                    <div class="modal-actions">
                        <button type="button" class="btn-secondary" onclick={on_cancel}>{"Cancel"}</button>
                        <button type="submit" class="btn-primary" disabled={props.submitting}>{"Create"}</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
