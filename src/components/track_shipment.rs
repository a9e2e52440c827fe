use yew::prelude::*;

use crate::hooks::{use_app_context, Toast};
use crate::viewmodels::{TrackingDetails, TrackingViewModel};

#[derive(Properties, PartialEq)]
pub struct ShipmentDetailsProps {
    pub details: TrackingDetails,
    pub on_close: Callback<()>,
}

/// Details panel, history rows in the order the backend returned them
#[function_component(ShipmentDetails)]
pub fn shipment_details(props: &ShipmentDetailsProps) -> Html {
    let details = &props.details;
    let on_close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div class="modal show">
            <div class="modal-content">
                <div class="modal-header">
                    <h3>{format!("{} | Shipment Details", details.tracking_number)}</h3>
                    <button type="button" class="btn-close" onclick={on_close}>{"✕"}</button>
                </div>
                <dl class="details-list">
                    { for details.fields.iter().map(|(label, value)| html! {
                        <>
                            <dt>{*label}</dt>
                            <dd>{value.clone()}</dd>
                        </>
                    }) }
                    <dt>{"Shipment Status"}</dt>
                    <dd><span class="badge badge-processing">{details.status.clone()}</span></dd>
                    <dt>{"Status History"}</dt>
                    <dd>
                        <ol class="status-history">
                            { for details.history.iter().map(|line| html! {
                                <li>{format!("{}: {}", line.at, line.status)}</li>
                            }) }
                        </ol>
                    </dd>
                </dl>
            </div>
        </div>
    }
}

#[function_component(TrackShipment)]
pub fn track_shipment() -> Html {
    let ctx = use_app_context();
    let tracking_number = use_state(String::new);
    let details = use_state(|| None::<TrackingDetails>);
    let loading = use_state(|| false);
    let Some(ctx) = ctx else {
        return html! {};
    };

    let on_input = {
        let tracking_number = tracking_number.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            tracking_number.set(input.value());
        })
    };

    let on_submit = {
        let tracking_number = tracking_number.clone();
        let details = details.clone();
        let loading = loading.clone();
        let vm = TrackingViewModel::new(ctx.services.gateway.clone());
        let open_toast = ctx.toast.open.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let number = (*tracking_number).clone();
            let tracking_number = tracking_number.clone();
            let details = details.clone();
            let loading = loading.clone();
            let vm = vm.clone();
            let open_toast = open_toast.clone();

            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match vm.track(&number).await {
                    Ok(found) => {
                        details.set(Some(found));
                        open_toast.emit(Toast::success("shipmentData", "Shipment Info fetched successfully"));
                        tracking_number.set(String::new());
                    }
                    Err(e) => open_toast.emit(Toast::error("shipmentData", e.to_string())),
                }
                loading.set(false);
            });
        })
    };

    let on_close = {
        let details = details.clone();
        Callback::from(move |_| details.set(None))
    };

    html! {
        <section class="track-shipment">
            <h1>{"Welcome to Courier Service App"}</h1>
            <p>{"You can track your shipment by entering tracking code in the following field"}</p>
            <form class="track-form" onsubmit={on_submit}>
                <input
                    type="text"
                    placeholder="Tracking Number"
                    value={(*tracking_number).clone()}
                    oninput={on_input}
                />
                <button type="submit" class="btn-primary" disabled={*loading}>
                    {if *loading { "Tracking..." } else { "Track" }}
                </button>
            </form>
            if let Some(found) = (*details).clone() {
                <ShipmentDetails details={found} {on_close} />
            }
        </section>
    }
}
