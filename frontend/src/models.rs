// 重新导出shared crate的数据模型
pub use approval_desk_shared::UserRequest;

// =============== Mock 数据 ===============

#[cfg(feature = "mock")]
use std::cell::RefCell;

#[cfg(feature = "mock")]
use approval_desk_shared::{
    api::{ActionBody, ApiError, ListQuery, RequestAction},
    date_range::parse_date_key,
};

#[cfg(feature = "mock")]
thread_local! {
    static MOCK_REQUESTS: RefCell<Vec<UserRequest>> = RefCell::new(mock_requests());
}

/// Ten requests created today, half of them still pending.
#[cfg(feature = "mock")]
fn mock_requests() -> Vec<UserRequest> {
    let now = js_sys::Date::new_0();
    let today = format!("{:04}-{:02}-{:02}", now.get_full_year(), now.get_month() + 1, now.get_date());
    let shippers = ["Nguyen Van An", "Tran Thi Binh", "Le Van Cuong"];
    (1..=10)
        .map(|i: i64| {
            let bill_code = format!("HD{:06}", 26070 + i);
            let shipper = shippers[(i as usize) % shippers.len()];
            let (request_type, content) = if i % 2 == 0 {
                ("CHANGE_COD", format!("Shipper {} asked to change COD of {} to {}", shipper, bill_code, i * 10_000))
            } else {
                ("REMOVE_BILL", format!("Shipper {} asked to remove {}", shipper, bill_code))
            };
            let status = match i % 4 {
                0 => "ACCEPTED",
                3 => "REJECTED",
                _ => "CREATE",
            };
            let decided = status != "CREATE";
            UserRequest {
                request_id: i,
                bill_code: Some(bill_code),
                request_type: Some(request_type.to_string()),
                content: Some(content),
                status: status.to_string(),
                approver: decided.then(|| "manager".to_string()),
                reason: decided.then(|| "checked".to_string()),
                create_at: Some(format!("{}T08:{:02}:00", today, i * 3)),
                approved_at: decided.then(|| format!("{}T17:00:00", today)),
            }
        })
        .collect()
}

// create_at "YYYY-MM-DDTHH:MM:SS" -> business date key
#[cfg(feature = "mock")]
fn business_date(request: &UserRequest) -> Option<i64> {
    let date = request.create_at.as_deref()?.get(..10)?;
    let mut parts = date.split('-');
    let (year, month, day) = (parts.next()?, parts.next()?, parts.next()?);
    parse_date_key(&format!("{month}/{day}/{year}")).value()
}

#[cfg(feature = "mock")]
pub fn mock_list_requests(query: &ListQuery) -> Result<Vec<UserRequest>, ApiError> {
    let (Some(from), Some(to)) = (query.from_date.value(), query.to_date.value()) else {
        return Err(ApiError::Status {
            status: 422,
            detail: Some("from_date and to_date must be integers".to_string()),
        });
    };
    Ok(MOCK_REQUESTS.with(|requests| {
        requests
            .borrow()
            .iter()
            .filter(|request| business_date(request).is_some_and(|day| (from..=to).contains(&day)))
            .filter(|request| query.status.query_value().map_or(true, |status| request.status == status))
            .cloned()
            .collect()
    }))
}

#[cfg(feature = "mock")]
pub fn mock_send_action(action: RequestAction, body: &ActionBody) -> Result<(), ApiError> {
    MOCK_REQUESTS.with(|requests| {
        let mut requests = requests.borrow_mut();
        let request = requests
            .iter_mut()
            .find(|request| request.request_id == body.request_id)
            .ok_or_else(|| ApiError::Status {
                status: 404,
                detail: Some("Request not found".to_string()),
            })?;
        request.status = match action {
            RequestAction::Accept => "ACCEPTED",
            RequestAction::Reject => "REJECTED",
        }
        .to_string();
        request.approver = Some("mock-manager".to_string());
        request.reason = Some(body.reason.clone());
        request.approved_at = request.create_at.as_deref().map(|at| at.replacen("08:", "18:", 1));
        Ok(())
    })
}
