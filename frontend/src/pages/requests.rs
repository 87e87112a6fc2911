use std::rc::Rc;

use approval_desk_shared::{
    desk::{ActionOutcome, DeskEvent, DeskSink, DeskState, RefreshOutcome, RequestDesk},
    modal::DetailSeed,
    FilterCriteria, RequestAction, StatusFilter,
};
use yew::prelude::*;

use crate::{
    api::HttpRequestApi,
    components::{
        detail_modal::DetailModal, request_table::RequestTable, search_bar::SearchBar,
        toast::ToastStack,
    },
    config::API_BASE,
    utils::{log_error, today_range, DocumentCookies},
};

type Desk = RequestDesk<HttpRequestApi<DocumentCookies>>;

#[derive(Clone, PartialEq)]
struct PageState {
    desk: DeskState,
}

impl Reducible for PageState {
    type Action = DeskEvent;

    fn reduce(self: Rc<Self>, action: DeskEvent) -> Rc<Self> {
        let mut next = (*self).clone();
        next.desk.apply(action);
        Rc::new(next)
    }
}

// Events from async workflows go through the dispatcher so they apply to
// the latest state, not the snapshot of the render that spawned them.
fn sink(dispatcher: UseReducerDispatcher<PageState>) -> impl DeskSink + 'static {
    move |event: DeskEvent| dispatcher.dispatch(event)
}

#[function_component(RequestsPage)]
pub fn requests_page() -> Html {
    let state = use_reducer(|| PageState {
        desk: DeskState::new(today_range()),
    });
    let desk = use_memo((), |_| -> Desk {
        RequestDesk::new(HttpRequestApi::new(API_BASE, DocumentCookies))
    });

    // Post-action reloads read this, not the filter of the render that
    // started the action.
    let latest_filter = use_mut_ref(FilterCriteria::default);
    *latest_filter.borrow_mut() = state.desk.filter.clone();

    let refresh = {
        let desk = desk.clone();
        let dispatcher = state.dispatcher();
        Callback::from(move |filter: FilterCriteria| {
            let desk = desk.clone();
            let sink = sink(dispatcher.clone());
            wasm_bindgen_futures::spawn_local(async move {
                if let RefreshOutcome::Failed(err) = desk.refresh(&filter, &sink).await {
                    log_error("Failed to load requests", &err);
                }
            });
        })
    };

    {
        let refresh = refresh.clone();
        let filter = state.desk.filter.clone();
        use_effect_with((), move |_| {
            refresh.emit(filter);
            || ()
        });
    }

    let on_search = {
        let refresh = refresh.clone();
        let state = state.clone();
        Callback::from(move |_: ()| refresh.emit(state.desk.filter.clone()))
    };

    let on_date_change = {
        let dispatcher = state.dispatcher();
        Callback::from(move |value: String| dispatcher.dispatch(DeskEvent::DateRangeEdited(value)))
    };

    let on_status_change = {
        let dispatcher = state.dispatcher();
        Callback::from(move |status: StatusFilter| {
            dispatcher.dispatch(DeskEvent::StatusSelected(status))
        })
    };

    let on_view = {
        let desk = desk.clone();
        let dispatcher = state.dispatcher();
        Callback::from(move |seed: DetailSeed| desk.open_detail(seed, &sink(dispatcher.clone())))
    };

    let run_action = {
        let desk = desk.clone();
        let state = state.clone();
        let latest_filter = latest_filter.clone();
        Callback::from(move |action: RequestAction| {
            let Some(submission) = state.desk.submission() else {
                return;
            };
            let latest_filter = latest_filter.clone();
            let current_filter = move || latest_filter.borrow().clone();
            let desk = desk.clone();
            let sink = sink(state.dispatcher());
            wasm_bindgen_futures::spawn_local(async move {
                match desk.dispatch(action, submission, &current_filter, &sink).await {
                    ActionOutcome::Failed(err) => log_error("Request action failed", &err),
                    ActionOutcome::Completed {
                        refresh: RefreshOutcome::Failed(err),
                    } => log_error("Failed to reload requests", &err),
                    _ => {},
                }
            });
        })
    };

    let on_accept = {
        let run_action = run_action.clone();
        Callback::from(move |_: ()| run_action.emit(RequestAction::Accept))
    };
    let on_reject = {
        let run_action = run_action.clone();
        Callback::from(move |_: ()| run_action.emit(RequestAction::Reject))
    };

    let on_reason_change = {
        let dispatcher = state.dispatcher();
        Callback::from(move |reason: String| dispatcher.dispatch(DeskEvent::ReasonEdited(reason)))
    };
    let on_close = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(DeskEvent::ModalClosed))
    };
    let on_dismiss = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id: u64| dispatcher.dispatch(DeskEvent::ToastDismissed(id)))
    };

    let view = &state.desk;

    html! {
        <main class={classes!("mx-auto", "max-w-7xl", "px-4", "py-6", "space-y-5")}>
            <header class={classes!("flex", "flex-wrap", "items-end", "justify-between", "gap-4")}>
                <div>
                    <h1 class={classes!("text-2xl", "font-semibold")}>{ "Shipper requests" }</h1>
                    <p class={classes!("text-sm", "text-[var(--muted)]")}>
                        { format!("{} request(s)", view.table.rows().len()) }
                    </p>
                </div>
                <SearchBar
                    date_range={view.filter.date_range.clone()}
                    status={view.filter.status}
                    loading={view.is_loading()}
                    {on_date_change}
                    {on_status_change}
                    {on_search}
                />
            </header>

            <RequestTable
                rows={view.table.rows().to_vec()}
                loading={view.is_loading()}
                {on_view}
            />

            <DetailModal
                modal={view.modal.clone()}
                actions_enabled={view.modal_actions_enabled()}
                {on_reason_change}
                {on_accept}
                {on_reject}
                {on_close}
            />

            <ToastStack toasts={view.toasts.iter().cloned().collect::<Vec<_>>()} {on_dismiss} />
        </main>
    }
}
