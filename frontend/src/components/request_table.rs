use approval_desk_shared::{
    modal::DetailSeed,
    table::{RequestRow, COLUMNS},
};
use yew::prelude::*;

fn status_badge_class(status: &str) -> Classes {
    let base = classes!(
        "inline-flex",
        "items-center",
        "rounded-full",
        "px-2",
        "py-0.5",
        "text-xs",
        "font-semibold",
        "uppercase",
        "tracking-[0.06em]"
    );
    match status {
        "CREATE" => classes!(base, "bg-amber-500/15", "text-amber-700", "dark:text-amber-200"),
        "ACCEPTED" => classes!(base, "bg-emerald-500/15", "text-emerald-700", "dark:text-emerald-200"),
        "REJECTED" => classes!(base, "bg-red-500/15", "text-red-700", "dark:text-red-200"),
        _ => classes!(base, "bg-[var(--surface-alt)]", "text-[var(--muted)]"),
    }
}

#[derive(Properties, PartialEq)]
pub struct RequestTableProps {
    pub rows: Vec<RequestRow>,
    #[prop_or(false)]
    pub loading: bool,
    pub on_view: Callback<DetailSeed>,
}

#[function_component(RequestTable)]
pub fn request_table(props: &RequestTableProps) -> Html {
    let cell = classes!("py-2", "pr-3", "align-top");

    let body = if props.rows.is_empty() {
        let message = if props.loading { "Loading..." } else { "No requests match the filter." };
        html! {
            <tr>
                <td colspan={COLUMNS.len().to_string()} class={classes!("py-6", "text-center", "text-[var(--muted)]")}>
                    { message }
                </td>
            </tr>
        }
    } else {
        html! {
            { for props.rows.iter().map(|row| {
                let view_click = {
                    let on_view = props.on_view.clone();
                    let seed = row.detail_seed();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        on_view.emit(seed.clone());
                    })
                };

                html! {
                    <tr key={row.request_id} class={classes!("border-t", "border-[var(--border)]")}>
                        <td class={cell.clone()}>{ row.request_id }</td>
                        <td class={cell.clone()}>{ row.bill_code.clone() }</td>
                        <td class={cell.clone()} title={row.request_type.clone()}>{ row.type_label.clone() }</td>
                        <td class={classes!(cell.clone(), "max-w-md", "break-words")}>{ row.content.clone() }</td>
                        <td class={cell.clone()}>
                            <span class={status_badge_class(&row.status)}>{ row.status.clone() }</span>
                        </td>
                        <td class={cell.clone()}>{ row.approver.clone() }</td>
                        <td class={cell.clone()}>{ row.reason.clone() }</td>
                        <td class={classes!(cell.clone(), "whitespace-nowrap")}>{ row.create_at.clone() }</td>
                        <td class={classes!(cell.clone(), "whitespace-nowrap")}>{ row.approved_at.clone() }</td>
                        <td class={cell.clone()}>
                            <button
                                type="button"
                                class={classes!("text-[var(--primary)]", "underline")}
                                aria-label={format!("View request {}", row.request_id)}
                                onclick={view_click}
                            >
                                { "View" }
                            </button>
                        </td>
                    </tr>
                }
            }) }
        }
    };

    html! {
        <div class={classes!("overflow-x-auto")}>
            <table class={classes!("w-full", "text-sm")}>
                <thead>
                    <tr class={classes!("text-left", "text-[var(--muted)]")}>
                        { for COLUMNS.iter().map(|title| html! {
                            <th class={classes!("py-2", "pr-3")}>{ *title }</th>
                        }) }
                    </tr>
                </thead>
                <tbody>
                    { body }
                </tbody>
            </table>
        </div>
    }
}
