//! Request list synchronization and the accept/reject workflow.
//!
//! All presentation state lives in [`DeskState`] and only changes by applying
//! [`DeskEvent`]s. Workflows in [`RequestDesk`] never touch the view directly;
//! they emit events into a [`DeskSink`] in a fixed order:
//!
//! - refresh: `RefreshStarted`, then on success `RowsReplaced`, then
//!   `RefreshSettled`. Responses of a refresh that has been superseded emit
//!   nothing.
//! - action: `ActionStarted`, the command, then on HTTP 200 `ModalClosed`,
//!   a full refresh, `Notified`; always `ActionSettled` last. Failed commands
//!   only log.

use std::{
    cell::{Cell, RefCell},
    collections::{BTreeSet, HashSet},
    rc::Rc,
};

use tracing::{debug, warn};

use crate::{
    api::{ActionBody, ApiError, FilterCriteria, ListQuery, RequestAction, RequestApi},
    modal::{DetailModal, DetailSeed},
    notification::{Notification, ToastStack},
    request::StatusFilter,
    table::{RequestRow, RequestTable},
};

/// A change to the presentation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeskEvent {
    /// The date range input changed.
    DateRangeEdited(String),
    /// A status was picked in the select.
    StatusSelected(StatusFilter),
    /// A listing call was issued.
    RefreshStarted,
    /// The latest listing call succeeded; these rows replace the table.
    RowsReplaced(Vec<RequestRow>),
    /// The latest listing call finished, successfully or not.
    RefreshSettled,
    /// A row's view action was used.
    ModalOpened(DetailSeed),
    /// The modal was dismissed or an action succeeded.
    ModalClosed,
    /// The reason textarea changed.
    ReasonEdited(String),
    /// An accept or reject call for this request was issued.
    ActionStarted(i64),
    /// The call for this request finished.
    ActionSettled(i64),
    /// A toast should be shown.
    Notified(Notification),
    /// A toast was closed or timed out.
    ToastDismissed(u64),
}

/// Receiver of [`DeskEvent`]s.
pub trait DeskSink {
    /// Delivers one event.
    fn emit(&self, event: DeskEvent);
}

impl<F> DeskSink for F
where
    F: Fn(DeskEvent),
{
    fn emit(&self, event: DeskEvent) {
        self(event)
    }
}

/// Everything the page shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeskState {
    /// Search bar values.
    pub filter: FilterCriteria,
    /// Table body.
    pub table: RequestTable,
    /// Detail modal.
    pub modal: DetailModal,
    /// Visible toasts.
    pub toasts: ToastStack,
    busy: BTreeSet<i64>,
    loading: bool,
}

impl DeskState {
    /// Initial state with the given date range in the search bar.
    pub fn new(date_range: impl Into<String>) -> Self {
        Self {
            filter: FilterCriteria {
                date_range: date_range.into(),
                status: StatusFilter::default(),
            },
            ..Self::default()
        }
    }

    /// Applies one event.
    pub fn apply(&mut self, event: DeskEvent) {
        match event {
            DeskEvent::DateRangeEdited(value) => self.filter.date_range = value,
            DeskEvent::StatusSelected(status) => self.filter.status = status,
            DeskEvent::RefreshStarted => self.loading = true,
            DeskEvent::RowsReplaced(rows) => self.table.replace(rows),
            DeskEvent::RefreshSettled => self.loading = false,
            DeskEvent::ModalOpened(seed) => self.modal.open(seed),
            DeskEvent::ModalClosed => self.modal.close(),
            DeskEvent::ReasonEdited(reason) => self.modal.set_reason(reason),
            DeskEvent::ActionStarted(request_id) => {
                self.busy.insert(request_id);
            },
            DeskEvent::ActionSettled(request_id) => {
                self.busy.remove(&request_id);
            },
            DeskEvent::Notified(notification) => {
                self.toasts.push(notification);
            },
            DeskEvent::ToastDismissed(id) => self.toasts.dismiss(id),
        }
    }

    /// Whether a listing call is pending.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether an action for `request_id` is pending.
    pub fn is_busy(&self, request_id: i64) -> bool {
        self.busy.contains(&request_id)
    }

    /// Whether the modal's accept and reject buttons can be pressed.
    pub fn modal_actions_enabled(&self) -> bool {
        self.modal.actions_enabled()
            && self
                .modal
                .request_id()
                .is_some_and(|request_id| !self.is_busy(request_id))
    }

    /// What the modal's buttons would submit.
    pub fn submission(&self) -> Option<ActionSubmission> {
        let seed = self.modal.seed()?;
        Some(ActionSubmission {
            request_id: seed.request_id,
            bill_code: seed.bill_code.clone(),
            reason: self.modal.reason().to_string(),
        })
    }
}

/// Input of an accept or reject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSubmission {
    /// Target request.
    pub request_id: i64,
    /// Only used in the notification text.
    pub bill_code: String,
    /// Sent as-is, empty reasons included.
    pub reason: String,
}

/// Result of a table refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The table now holds this many rows.
    Replaced(usize),
    /// A newer refresh was issued meanwhile; the response was dropped.
    Stale,
    /// The call failed; the table was left as it was.
    Failed(ApiError),
}

/// Result of an accept or reject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The backend answered 200 and the follow-up refresh ran.
    Completed {
        /// How the follow-up refresh went.
        refresh: RefreshOutcome,
    },
    /// Another action for the same request was still pending.
    Suppressed,
    /// The command failed; nothing on screen changed.
    Failed(ApiError),
}

/// Numbers refreshes so only the latest one may touch the table.
#[derive(Debug, Clone, Default)]
pub struct RefreshSequence(Rc<Cell<u64>>);

impl RefreshSequence {
    /// Starts a refresh and returns its number.
    pub fn begin(&self) -> u64 {
        let next = self.0.get() + 1;
        self.0.set(next);
        next
    }

    /// Whether `ticket` is still the latest refresh.
    pub fn is_latest(&self, ticket: u64) -> bool {
        self.0.get() == ticket
    }
}

/// Request ids with an accept or reject in flight.
#[derive(Debug, Clone, Default)]
pub struct InFlightGuard(Rc<RefCell<HashSet<i64>>>);

impl InFlightGuard {
    /// Claims `request_id`; `None` if it is already claimed.
    pub fn try_acquire(&self, request_id: i64) -> Option<InFlightTicket> {
        if !self.0.borrow_mut().insert(request_id) {
            return None;
        }
        Some(InFlightTicket {
            guard: self.clone(),
            request_id,
        })
    }

    /// Whether `request_id` is claimed.
    pub fn contains(&self, request_id: i64) -> bool {
        self.0.borrow().contains(&request_id)
    }
}

/// Claim on a request id, released on drop.
#[derive(Debug)]
pub struct InFlightTicket {
    guard: InFlightGuard,
    request_id: i64,
}

impl Drop for InFlightTicket {
    fn drop(&mut self) {
        self.guard.0.borrow_mut().remove(&self.request_id);
    }
}

/// Drives the table and the accept/reject commands against a [`RequestApi`].
pub struct RequestDesk<A> {
    api: A,
    refresh_seq: RefreshSequence,
    inflight: InFlightGuard,
}

impl<A: RequestApi> RequestDesk<A> {
    /// Wraps a backend.
    pub fn new(api: A) -> Self {
        Self {
            api,
            refresh_seq: RefreshSequence::default(),
            inflight: InFlightGuard::default(),
        }
    }

    /// The wrapped backend.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Whether an action for `request_id` is pending.
    pub fn is_in_flight(&self, request_id: i64) -> bool {
        self.inflight.contains(request_id)
    }

    /// Shows the detail modal for a row.
    pub fn open_detail(&self, seed: DetailSeed, sink: &impl DeskSink) {
        sink.emit(DeskEvent::ModalOpened(seed));
    }

    /// Fetches the list for `filter` and replaces the whole table with it.
    pub async fn refresh(&self, filter: &FilterCriteria, sink: &impl DeskSink) -> RefreshOutcome {
        let ticket = self.refresh_seq.begin();
        let query = ListQuery::from_filter(filter);
        sink.emit(DeskEvent::RefreshStarted);

        let result = self.api.list_requests(&query).await;
        if !self.refresh_seq.is_latest(ticket) {
            debug!(ticket, "dropping response of superseded refresh");
            return RefreshOutcome::Stale;
        }

        let outcome = match result {
            Ok(requests) => {
                let rows = RequestTable::build_rows(&requests);
                let count = rows.len();
                sink.emit(DeskEvent::RowsReplaced(rows));
                RefreshOutcome::Replaced(count)
            },
            Err(err) => {
                warn!(error = %err, query = %query.to_query_string(), "failed to list requests");
                RefreshOutcome::Failed(err)
            },
        };
        sink.emit(DeskEvent::RefreshSettled);
        outcome
    }

    /// Accepts a request.
    pub async fn accept(
        &self,
        submission: ActionSubmission,
        current_filter: &impl Fn() -> FilterCriteria,
        sink: &impl DeskSink,
    ) -> ActionOutcome {
        self.dispatch(RequestAction::Accept, submission, current_filter, sink).await
    }

    /// Rejects a request.
    pub async fn reject(
        &self,
        submission: ActionSubmission,
        current_filter: &impl Fn() -> FilterCriteria,
        sink: &impl DeskSink,
    ) -> ActionOutcome {
        self.dispatch(RequestAction::Reject, submission, current_filter, sink).await
    }

    /// Sends `action`, then on success closes the modal, refreshes the table
    /// and notifies.
    ///
    /// `current_filter` is read once the backend has answered, so the reload
    /// uses whatever the search bar holds at that point.
    pub async fn dispatch(
        &self,
        action: RequestAction,
        submission: ActionSubmission,
        current_filter: &impl Fn() -> FilterCriteria,
        sink: &impl DeskSink,
    ) -> ActionOutcome {
        let request_id = submission.request_id;
        let Some(_ticket) = self.inflight.try_acquire(request_id) else {
            debug!(request_id, ?action, "action already in flight");
            return ActionOutcome::Suppressed;
        };
        sink.emit(DeskEvent::ActionStarted(request_id));

        let body = ActionBody {
            request_id,
            reason: submission.reason,
        };
        let outcome = match self.api.send_action(action, &body).await {
            Ok(()) => {
                sink.emit(DeskEvent::ModalClosed);
                let filter = current_filter();
                let refresh = self.refresh(&filter, sink).await;
                sink.emit(DeskEvent::Notified(Notification::success(
                    "Success",
                    format!("{} request {}", action.past_tense(), submission.bill_code),
                )));
                ActionOutcome::Completed {
                    refresh,
                }
            },
            Err(err) => {
                warn!(request_id, ?action, error = %err, "request action failed");
                ActionOutcome::Failed(err)
            },
        };
        sink.emit(DeskEvent::ActionSettled(request_id));
        outcome
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use async_trait::async_trait;
    use tokio::sync::oneshot;

    use super::*;
    use crate::{notification::NotifyLevel, request::UserRequest};

    #[derive(Debug, Clone, PartialEq)]
    enum Step {
        List(String),
        Action(RequestAction, ActionBody),
        Event(DeskEvent),
    }

    type Trace = Rc<RefCell<Vec<Step>>>;

    enum Reply<T> {
        Ready(Result<T, ApiError>),
        Gated(oneshot::Receiver<Result<T, ApiError>>),
    }

    impl<T> Reply<T> {
        async fn resolve(self) -> Result<T, ApiError> {
            match self {
                Reply::Ready(result) => result,
                Reply::Gated(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(ApiError::Network("gate dropped".to_string()))),
            }
        }
    }

    #[derive(Default)]
    struct ScriptedApi {
        trace: Trace,
        lists: RefCell<VecDeque<Reply<Vec<UserRequest>>>>,
        actions: RefCell<VecDeque<Reply<()>>>,
    }

    impl ScriptedApi {
        fn with_trace(trace: &Trace) -> Self {
            Self {
                trace: trace.clone(),
                ..Self::default()
            }
        }

        fn list(self, reply: Reply<Vec<UserRequest>>) -> Self {
            self.lists.borrow_mut().push_back(reply);
            self
        }

        fn action(self, reply: Reply<()>) -> Self {
            self.actions.borrow_mut().push_back(reply);
            self
        }
    }

    #[async_trait(?Send)]
    impl RequestApi for ScriptedApi {
        async fn list_requests(&self, query: &ListQuery) -> Result<Vec<UserRequest>, ApiError> {
            self.trace
                .borrow_mut()
                .push(Step::List(query.to_query_string()));
            let reply = self.lists.borrow_mut().pop_front();
            match reply {
                Some(reply) => reply.resolve().await,
                None => Err(ApiError::Network("no scripted listing".to_string())),
            }
        }

        async fn send_action(&self, action: RequestAction, body: &ActionBody) -> Result<(), ApiError> {
            self.trace
                .borrow_mut()
                .push(Step::Action(action, body.clone()));
            let reply = self.actions.borrow_mut().pop_front();
            match reply {
                Some(reply) => reply.resolve().await,
                None => Err(ApiError::Network("no scripted action".to_string())),
            }
        }
    }

    fn recorder(trace: &Trace) -> impl DeskSink {
        let trace = trace.clone();
        move |event: DeskEvent| trace.borrow_mut().push(Step::Event(event))
    }

    fn events(trace: &Trace) -> Vec<DeskEvent> {
        trace
            .borrow()
            .iter()
            .filter_map(|step| match step {
                Step::Event(event) => Some(event.clone()),
                _ => None,
            })
            .collect()
    }

    fn index_of(steps: &[Step], wanted: impl Fn(&Step) -> bool) -> Option<usize> {
        steps.iter().position(wanted)
    }

    fn replay(trace: &Trace, state: &mut DeskState) {
        for event in events(trace) {
            state.apply(event);
        }
    }

    fn request(request_id: i64, status: &str) -> UserRequest {
        UserRequest {
            request_id,
            bill_code: Some(format!("HD{request_id:06}")),
            request_type: Some("REMOVE_BILL".to_string()),
            content: Some("remove".to_string()),
            status: status.to_string(),
            approver: None,
            reason: None,
            create_at: Some("2024-01-02T08:30:00".to_string()),
            approved_at: None,
        }
    }

    fn filter() -> FilterCriteria {
        FilterCriteria {
            date_range: "01/02/2024 - 03/04/2024".to_string(),
            status: StatusFilter::Create,
        }
    }

    fn submission(request_id: i64) -> ActionSubmission {
        ActionSubmission {
            request_id,
            bill_code: format!("HD{request_id:06}"),
            reason: String::new(),
        }
    }

    fn opened_state(request_id: i64) -> DeskState {
        let mut state = DeskState::new("01/02/2024 - 03/04/2024");
        state.apply(DeskEvent::RowsReplaced(RequestTable::build_rows(&[request(
            request_id, "CREATE",
        )])));
        if let Some(row) = state.table.row(request_id).cloned() {
            state.apply(DeskEvent::ModalOpened(row.detail_seed()));
        }
        state
    }

    #[tokio::test]
    async fn refresh_replaces_table_with_fetched_rows() {
        let trace = Trace::default();
        let api = ScriptedApi::with_trace(&trace).list(Reply::Ready(Ok(vec![
            request(1, "CREATE"),
            request(2, "ACCEPTED"),
            request(3, "REJECTED"),
        ])));
        let desk = RequestDesk::new(api);
        let mut state = DeskState::new("01/02/2024 - 03/04/2024");
        state.apply(DeskEvent::RowsReplaced(RequestTable::build_rows(&[request(99, "CREATE")])));

        let outcome = desk.refresh(&filter(), &recorder(&trace)).await;
        replay(&trace, &mut state);

        assert_eq!(outcome, RefreshOutcome::Replaced(3));
        assert_eq!(
            trace.borrow()[1],
            Step::List("from_date=20240102&to_date=20240304&request_status=CREATE".to_string())
        );
        let ids: Vec<i64> = state.table.rows().iter().map(|row| row.request_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(state.table.rows()[0].create_at, "2024-01-02 08:30:00");
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_rows() {
        let trace = Trace::default();
        let api = ScriptedApi::with_trace(&trace)
            .list(Reply::Ready(Err(ApiError::Status {
                status: 500,
                detail: None,
            })));
        let desk = RequestDesk::new(api);
        let mut state = DeskState::new("");
        state.apply(DeskEvent::RowsReplaced(RequestTable::build_rows(&[request(7, "CREATE")])));

        let outcome = desk.refresh(&filter(), &recorder(&trace)).await;
        replay(&trace, &mut state);

        assert!(matches!(outcome, RefreshOutcome::Failed(ApiError::Status { status: 500, .. })));
        assert_eq!(events(&trace), vec![DeskEvent::RefreshStarted, DeskEvent::RefreshSettled]);
        assert_eq!(state.table.rows().len(), 1);
        assert_eq!(state.table.generation(), 1);
    }

    #[tokio::test]
    async fn superseded_refresh_response_is_dropped() {
        let trace = Trace::default();
        let (older_tx, older_rx) = oneshot::channel();
        let (newer_tx, newer_rx) = oneshot::channel();
        let api = ScriptedApi::with_trace(&trace)
            .list(Reply::Gated(older_rx))
            .list(Reply::Gated(newer_rx));
        let desk = RequestDesk::new(api);
        let sink = recorder(&trace);
        let criteria = filter();

        let (older, newer, ()) = tokio::join!(
            desk.refresh(&criteria, &sink),
            desk.refresh(&criteria, &sink),
            async move {
                let _ = newer_tx.send(Ok(vec![request(2, "CREATE")]));
                tokio::task::yield_now().await;
                let _ = older_tx.send(Ok(vec![request(1, "CREATE"), request(3, "CREATE")]));
            }
        );

        assert_eq!(older, RefreshOutcome::Stale);
        assert_eq!(newer, RefreshOutcome::Replaced(1));
        let mut state = DeskState::new("");
        replay(&trace, &mut state);
        let ids: Vec<i64> = state.table.rows().iter().map(|row| row.request_id).collect();
        assert_eq!(ids, vec![2]);
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn successful_action_closes_modal_then_refreshes_then_notifies() {
        let trace = Trace::default();
        let api = ScriptedApi::with_trace(&trace)
            .action(Reply::Ready(Ok(())))
            .list(Reply::Ready(Ok(vec![request(5, "ACCEPTED")])));
        let desk = RequestDesk::new(api);
        let mut state = opened_state(5);
        let mut submission = submission(5);
        submission.reason = "checked with shipper".to_string();

        let outcome = desk.accept(submission, &filter, &recorder(&trace)).await;

        assert_eq!(
            outcome,
            ActionOutcome::Completed {
                refresh: RefreshOutcome::Replaced(1)
            }
        );
        let steps = trace.borrow().clone();
        let command = index_of(&steps, |step| matches!(step, Step::Action(RequestAction::Accept, _)));
        let hidden = index_of(&steps, |step| matches!(step, Step::Event(DeskEvent::ModalClosed)));
        let fetched = index_of(&steps, |step| matches!(step, Step::List(_)));
        let notified = index_of(&steps, |step| matches!(step, Step::Event(DeskEvent::Notified(_))));
        assert!(command.is_some() && notified.is_some());
        assert!(command < hidden && hidden < fetched && fetched < notified);

        assert_eq!(
            steps[command.unwrap_or_default()],
            Step::Action(RequestAction::Accept, ActionBody {
                request_id: 5,
                reason: "checked with shipper".to_string(),
            })
        );

        replay(&trace, &mut state);
        assert!(!state.modal.is_visible());
        assert_eq!(state.toasts.len(), 1);
        let toast = state.toasts.iter().next().map(|toast| toast.notification.clone());
        let toast = toast.unwrap_or_else(|| Notification::success("", ""));
        assert_eq!(toast.level, NotifyLevel::Success);
        assert!(toast.message.contains("HD000005"));
        assert!(toast.message.starts_with("Accepted"));
        assert_eq!(state.table.row(5).map(|row| row.status.as_str()), Some("ACCEPTED"));
        assert!(!state.is_busy(5));
    }

    #[tokio::test]
    async fn reject_notifies_even_if_follow_up_refresh_fails() {
        let trace = Trace::default();
        let api = ScriptedApi::with_trace(&trace)
            .action(Reply::Ready(Ok(())))
            .list(Reply::Ready(Err(ApiError::Network("offline".to_string()))));
        let desk = RequestDesk::new(api);

        let outcome = desk.reject(submission(8), &filter, &recorder(&trace)).await;

        assert!(matches!(
            outcome,
            ActionOutcome::Completed {
                refresh: RefreshOutcome::Failed(ApiError::Network(_))
            }
        ));
        let notes: Vec<Notification> = events(&trace)
            .into_iter()
            .filter_map(|event| match event {
                DeskEvent::Notified(note) => Some(note),
                _ => None,
            })
            .collect();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].message, "Rejected request HD000008");
    }

    #[tokio::test]
    async fn failed_action_changes_nothing_on_screen() {
        for error in [
            ApiError::Status {
                status: 401,
                detail: Some("Authentication Failed".to_string()),
            },
            ApiError::Network("connection refused".to_string()),
        ] {
            let trace = Trace::default();
            let api = ScriptedApi::with_trace(&trace).action(Reply::Ready(Err(error.clone())));
            let desk = RequestDesk::new(api);
            let mut state = opened_state(4);
            let before = state.clone();

            let outcome = desk.accept(submission(4), &filter, &recorder(&trace)).await;

            assert_eq!(outcome, ActionOutcome::Failed(error));
            assert!(!trace.borrow().iter().any(|step| matches!(step, Step::List(_))));
            assert_eq!(events(&trace), vec![DeskEvent::ActionStarted(4), DeskEvent::ActionSettled(4)]);
            replay(&trace, &mut state);
            assert_eq!(state, before);
            assert!(state.modal.is_visible());
        }
    }

    #[tokio::test]
    async fn duplicate_action_while_in_flight_is_suppressed() {
        let trace = Trace::default();
        let (tx, rx) = oneshot::channel();
        let api = ScriptedApi::with_trace(&trace)
            .action(Reply::Gated(rx))
            .list(Reply::Ready(Ok(Vec::new())));
        let desk = RequestDesk::new(api);
        let sink = recorder(&trace);

        let (first, second, ()) = tokio::join!(
            desk.accept(submission(6), &filter, &sink),
            desk.reject(submission(6), &filter, &sink),
            async move {
                tokio::task::yield_now().await;
                let _ = tx.send(Ok(()));
            }
        );

        assert!(matches!(first, ActionOutcome::Completed { .. }));
        assert_eq!(second, ActionOutcome::Suppressed);
        let commands = trace
            .borrow()
            .iter()
            .filter(|step| matches!(step, Step::Action(..)))
            .count();
        assert_eq!(commands, 1);
        assert!(!desk.is_in_flight(6));
    }

    #[tokio::test]
    async fn guard_is_released_after_failure() {
        let trace = Trace::default();
        let api = ScriptedApi::with_trace(&trace)
            .action(Reply::Ready(Err(ApiError::Network("timeout".to_string()))))
            .action(Reply::Ready(Ok(())))
            .list(Reply::Ready(Ok(Vec::new())));
        let desk = RequestDesk::new(api);
        let sink = recorder(&trace);

        let first = desk.accept(submission(2), &filter, &sink).await;
        let second = desk.accept(submission(2), &filter, &sink).await;

        assert!(matches!(first, ActionOutcome::Failed(_)));
        assert!(matches!(second, ActionOutcome::Completed { .. }));
    }

    #[tokio::test]
    async fn follow_up_refresh_reads_filter_when_action_settles() {
        let trace = Trace::default();
        let (tx, rx) = oneshot::channel();
        let api = ScriptedApi::with_trace(&trace)
            .action(Reply::Gated(rx))
            .list(Reply::Ready(Ok(Vec::new())));
        let desk = RequestDesk::new(api);
        let sink = recorder(&trace);
        let search_bar = Rc::new(RefCell::new(filter()));
        let current = {
            let search_bar = search_bar.clone();
            move || search_bar.borrow().clone()
        };

        let (outcome, ()) = tokio::join!(desk.reject(submission(3), &current, &sink), async move {
            tokio::task::yield_now().await;
            *search_bar.borrow_mut() = FilterCriteria {
                date_range: "05/06/2024 - 05/07/2024".to_string(),
                status: StatusFilter::All,
            };
            let _ = tx.send(Ok(()));
        });

        assert!(matches!(outcome, ActionOutcome::Completed { .. }));
        let lists: Vec<Step> = trace
            .borrow()
            .iter()
            .filter(|step| matches!(step, Step::List(_)))
            .cloned()
            .collect();
        assert_eq!(lists, vec![Step::List("from_date=20240506&to_date=20240507".to_string())]);
    }

    #[test]
    fn modal_gating_follows_status_and_busy_state() {
        let mut state = opened_state(3);
        assert!(state.modal_actions_enabled());

        state.apply(DeskEvent::ActionStarted(3));
        assert!(!state.modal_actions_enabled());
        state.apply(DeskEvent::ActionSettled(3));
        assert!(state.modal_actions_enabled());

        state.apply(DeskEvent::ModalOpened(DetailSeed {
            request_id: 3,
            bill_code: "HD000003".to_string(),
            request_type: "REMOVE_BILL".to_string(),
            content: String::new(),
            status: "REJECTED".to_string(),
        }));
        assert!(!state.modal_actions_enabled());
    }

    #[test]
    fn submission_uses_modal_fields() {
        let mut state = opened_state(12);
        state.apply(DeskEvent::ReasonEdited("duplicate".to_string()));
        assert_eq!(
            state.submission(),
            Some(ActionSubmission {
                request_id: 12,
                bill_code: "HD000012".to_string(),
                reason: "duplicate".to_string(),
            })
        );
        assert_eq!(DeskState::default().submission(), None);
    }

    #[test]
    fn filter_events_update_search_bar() {
        let mut state = DeskState::new("01/01/2024 - 01/01/2024");
        state.apply(DeskEvent::StatusSelected(StatusFilter::All));
        state.apply(DeskEvent::DateRangeEdited("02/01/2024 - 02/29/2024".to_string()));
        assert_eq!(state.filter.status, StatusFilter::All);
        assert_eq!(ListQuery::from_filter(&state.filter).to_query_string(), "from_date=20240201&to_date=20240229");
    }
}
