use approval_desk_shared::modal::DetailModal as DetailModalState;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DetailModalProps {
    pub modal: DetailModalState,
    /// `false` once the request is decided or while an action is pending.
    pub actions_enabled: bool,
    pub on_reason_change: Callback<String>,
    pub on_accept: Callback<()>,
    pub on_reject: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(DetailModal)]
pub fn detail_modal(props: &DetailModalProps) -> Html {
    let Some(seed) = props.modal.seed().filter(|_| props.modal.is_visible()) else {
        return Html::default();
    };

    let on_reason = {
        let on_reason_change = props.on_reason_change.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            on_reason_change.emit(area.value());
        })
    };
    let close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let accept_click = {
        let on_accept = props.on_accept.clone();
        Callback::from(move |_: MouseEvent| on_accept.emit(()))
    };
    let reject_click = {
        let on_reject = props.on_reject.clone();
        Callback::from(move |_: MouseEvent| on_reject.emit(()))
    };

    let field = |label: &'static str, value: String| {
        html! {
            <label class={classes!("flex", "flex-col", "gap-1", "text-sm")}>
                <span class={classes!("text-[var(--muted)]")}>{ label }</span>
                <input
                    type="text"
                    readonly={true}
                    class={classes!("rounded-lg", "border", "border-[var(--border)]", "bg-[var(--surface-alt)]", "px-2", "py-1")}
                    value={value}
                />
            </label>
        }
    };

    html! {
        <div
            class={classes!("fixed", "inset-0", "z-40", "flex", "items-center", "justify-center", "bg-black/30", "dark:bg-black/60")}
            role="dialog"
            aria-modal="true"
        >
            <div class={classes!("w-full", "max-w-lg", "rounded-2xl", "bg-[var(--surface)]", "p-6", "shadow-xl", "space-y-4")}>
                <header class={classes!("flex", "items-center", "justify-between")}>
                    <h3 class={classes!("text-lg", "font-semibold")}>{ format!("Request #{}", seed.request_id) }</h3>
                    <button type="button" class={classes!("text-lg")} aria-label="Close" onclick={close_click.clone()}>
                        { "×" }
                    </button>
                </header>
                { field("Bill code", seed.bill_code.clone()) }
                { field("Type", props.modal.type_label().to_string()) }
                <label class={classes!("flex", "flex-col", "gap-1", "text-sm")}>
                    <span class={classes!("text-[var(--muted)]")}>{ "Content" }</span>
                    <textarea
                        readonly={true}
                        rows="3"
                        class={classes!("rounded-lg", "border", "border-[var(--border)]", "bg-[var(--surface-alt)]", "px-2", "py-1")}
                        value={seed.content.clone()}
                    />
                </label>
                <label class={classes!("flex", "flex-col", "gap-1", "text-sm")}>
                    <span class={classes!("text-[var(--muted)]")}>{ "Reason" }</span>
                    <textarea
                        rows="3"
                        class={classes!("rounded-lg", "border", "border-[var(--border)]", "px-2", "py-1")}
                        value={props.modal.reason().to_string()}
                        oninput={on_reason}
                        disabled={!props.actions_enabled}
                    />
                </label>
                <footer class={classes!("flex", "justify-end", "gap-2")}>
                    <button type="button" class={classes!("btn-fluent-secondary")} onclick={close_click}>
                        { "Close" }
                    </button>
                    <button
                        type="button"
                        class={classes!("btn-fluent-secondary")}
                        onclick={reject_click}
                        disabled={!props.actions_enabled}
                    >
                        { "Reject" }
                    </button>
                    <button
                        type="button"
                        class={classes!("btn-fluent-primary")}
                        onclick={accept_click}
                        disabled={!props.actions_enabled}
                    >
                        { "Accept" }
                    </button>
                </footer>
            </div>
        </div>
    }
}
