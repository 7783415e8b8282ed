mod errors;
mod issued_item_service;
mod selection;

pub use errors::{IssuedItemApplicationError, Result};
pub use issued_item_service::{
    IssuedItemSummary, get_all_issuable_acc_records, get_due_date,
    get_issued_item_summary, get_late_fee, get_random_issuable_acc_record, issue_item,
    return_item,
};
pub use selection::{CopySelector, FirstAvailable, RandomAvailable};
