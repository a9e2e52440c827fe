// ============================================================================
// DASHBOARD - Role-aware shipment table with create, status and delete
// ============================================================================
// Loads only after the guard has confirmed the session for this route. A
// failed mutation leaves the table as it was.
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::components::shipment_form_modal::ShipmentFormModal;
use crate::components::status_modal::StatusModal;
use crate::hooks::{use_app_context, Toast};
use crate::models::Shipment;
use crate::state::Route;
use crate::viewmodels::{row_cells, DashboardPermissions, DashboardViewModel, ShipmentForm, TABLE_COLUMNS};

/// Reload trigger. Dispatching always advances from the latest value, so
/// overlapping mutations each cause a reload.
#[derive(Default, PartialEq)]
struct ReloadTick(u32);

impl Reducible for ReloadTick {
    type Action = ();

    fn reduce(self: Rc<Self>, _: ()) -> Rc<Self> {
        Rc::new(ReloadTick(self.0.wrapping_add(1)))
    }
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let ctx = use_app_context();
    let shipments = use_state(Vec::<Shipment>::new);
    let loading = use_state(|| false);
    let submitting = use_state(|| false);
    let reload = use_reducer(ReloadTick::default);
    // Ticket of the latest listing request; older responses are dropped
    let load_generation = use_mut_ref(|| 0u64);
    let show_create = use_state(|| false);
    let status_target = use_state(|| None::<i64>);

    let session = ctx.as_ref().and_then(|ctx| ctx.auth.session_for(Route::Dashboard));
    let gateway = ctx.as_ref().map(|ctx| ctx.services.gateway.clone());
    let open_toast = ctx.as_ref().map(|ctx| ctx.toast.open.clone());

    // Load on session change and on every explicit reload
    {
        let shipments = shipments.clone();
        let loading = loading.clone();
        let load_generation = load_generation.clone();
        use_effect_with((session.clone(), reload.0), move |(session, _)| {
            if let (Some(session), Some(gateway), Some(open_toast)) = (session.clone(), gateway, open_toast) {
                let vm = DashboardViewModel::new(gateway);
                let ticket = {
                    let mut counter = load_generation.borrow_mut();
                    *counter += 1;
                    *counter
                };
                loading.set(true);
                wasm_bindgen_futures::spawn_local(async move {
                    let result = vm.load_shipments(&session).await;
                    if *load_generation.borrow() != ticket {
                        return;
                    }
                    match result {
                        Ok(list) => {
                            log::info!("📦 Loaded {} shipments", list.len());
                            shipments.set(list);
                        }
                        Err(e) => {
                            log::error!("❌ Failed to load shipments: {}", e);
                            open_toast.emit(Toast::error("shipments", e.to_string()));
                        }
                    }
                    loading.set(false);
                });
            }
            || ()
        });
    }

    let Some(ctx) = ctx else {
        return html! {};
    };

    let Some(session) = session else {
        let message = if ctx.auth.status.is_validating() || ctx.auth.status.is_authenticated() {
            "Validating session..."
        } else {
            "Redirecting to login..."
        };
        return html! {
            <section class="dashboard">
                <p class="placeholder">{message}</p>
            </section>
        };
    };

    let permissions = DashboardPermissions::for_role(session.role);
    let vm = DashboardViewModel::new(ctx.services.gateway.clone());
    let open_toast = ctx.toast.open.clone();

    let on_reload = {
        let reload = reload.clone();
        Callback::from(move |_: MouseEvent| reload.dispatch(()))
    };

    let on_open_create = {
        let show_create = show_create.clone();
        Callback::from(move |_: MouseEvent| show_create.set(true))
    };

    let on_close_create = {
        let show_create = show_create.clone();
        Callback::from(move |_| show_create.set(false))
    };

    let on_create = {
        let vm = vm.clone();
        let open_toast = open_toast.clone();
        let submitting = submitting.clone();
        let show_create = show_create.clone();
        let reload = reload.clone();
        Callback::from(move |form: ShipmentForm| {
            let vm = vm.clone();
            let open_toast = open_toast.clone();
            let submitting = submitting.clone();
            let show_create = show_create.clone();
            let reload = reload.clone();
            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match vm.create_shipment(&form).await {
                    Ok(created) => {
                        log::info!("✅ Shipment created: {:?}", created.id);
                        open_toast.emit(Toast::success("createShipment", "Shipment created successfully"));
                        show_create.set(false);
                        reload.dispatch(());
                    }
                    Err(e) => open_toast.emit(Toast::error("createShipment", e.to_string())),
                }
                submitting.set(false);
            });
        })
    };

    let on_close_status = {
        let status_target = status_target.clone();
        Callback::from(move |_| status_target.set(None))
    };

    let on_update_status = {
        let vm = vm.clone();
        let open_toast = open_toast.clone();
        let submitting = submitting.clone();
        let status_target = status_target.clone();
        let reload = reload.clone();
        Callback::from(move |(shipment_id, status): (i64, String)| {
            let vm = vm.clone();
            let open_toast = open_toast.clone();
            let submitting = submitting.clone();
            let status_target = status_target.clone();
            let reload = reload.clone();
            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match vm.update_status(shipment_id, &status).await {
                    Ok(_) => {
                        open_toast.emit(Toast::success("updateStatus", "Shipment status updated successfully"));
                        status_target.set(None);
                        reload.dispatch(());
                    }
                    Err(e) => open_toast.emit(Toast::error("updateStatus", e.to_string())),
                }
                submitting.set(false);
            });
        })
    };

    let on_delete = {
        let vm = vm.clone();
        let open_toast = open_toast.clone();
        let reload = reload.clone();
        Callback::from(move |shipment_id: i64| {
            let vm = vm.clone();
            let open_toast = open_toast.clone();
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match vm.delete_shipment(shipment_id).await {
                    Ok(_) => {
                        open_toast.emit(Toast::success("deleteShipment", "Shipment deleted successfully"));
                        reload.dispatch(());
                    }
                    Err(e) => open_toast.emit(Toast::error("deleteShipment", e.to_string())),
                }
            });
        })
    };

    let rows = shipments.iter().map(|shipment| {
        let key = shipment.id.unwrap_or_default();
        let actions = shipment.id.map(|id| {
            let on_status = {
                let status_target = status_target.clone();
                Callback::from(move |_: MouseEvent| status_target.set(Some(id)))
            };
            let on_remove = on_delete.reform(move |_: MouseEvent| id);
            html! {
                <>
                    if permissions.can_update_status {
                        <button class="btn-secondary" onclick={on_status}>{"Update Status"}</button>
                    }
                    if permissions.can_delete {
                        <button class="btn-danger" onclick={on_remove}>{"Delete"}</button>
                    }
                </>
            }
        });
        html! {
            <tr key={key}>
                { for row_cells(shipment).into_iter().map(|cell| html! { <td>{cell}</td> }) }
                <td class="actions">{ for actions }</td>
            </tr>
        }
    });

    html! {
        <section class="dashboard">
            <div class="dashboard-header">
                <h1>{"Shipments"}</h1>
                <div class="dashboard-actions">
                    <button class="btn-secondary" onclick={on_reload} disabled={*loading}>
                        {if *loading { "Loading..." } else { "Reload" }}
                    </button>
                    if permissions.can_create {
                        <button class="btn-primary" onclick={on_open_create}>{"Create Shipment"}</button>
                    }
                </div>
            </div>

            if shipments.is_empty() && !*loading {
                <p class="placeholder">{"No shipments yet"}</p>
            } else {
                <div class="table-wrapper">
                    <table class="shipments-table">
                        <thead>
                            <tr>
                                { for TABLE_COLUMNS.iter().map(|column| html! { <th>{*column}</th> }) }
                                <th>{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>{ for rows }</tbody>
                    </table>
                </div>
            }

            if *show_create {
                <ShipmentFormModal
                    on_submit={on_create}
                    on_close={on_close_create}
                    submitting={*submitting}
                />
            }
            if let Some(shipment_id) = *status_target {
                <StatusModal
                    {shipment_id}
                    on_submit={on_update_status}
                    on_close={on_close_status}
                    submitting={*submitting}
                />
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_reload_advances_from_the_latest_tick() {
        let first = Rc::new(ReloadTick::default()).reduce(());
        let second = first.clone().reduce(());
        assert_eq!(first.0, 1);
        assert_eq!(second.0, 2);
    }

    #[test]
    fn reload_tick_wraps_instead_of_overflowing() {
        let last = Rc::new(ReloadTick(u32::MAX)).reduce(());
        assert_eq!(last.0, 0);
    }
}
