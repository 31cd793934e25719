use crate::types::delegate::{NewDelegate, RDelegationCreate};
use crate::types::error::AppError;

/// Slots per delegation form, head included.
pub const MAX_DELEGATES: usize = 10;

fn clean_category(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim).filter(|c| !c.is_empty()).map(str::to_string)
}

/// Validates one delegation form and returns the records to insert, head
/// first, in slot order. Stops at the first bad slot; on error nothing is
/// returned so the caller can never insert a partial team.
pub fn validate_delegation(req: &RDelegationCreate) -> Result<Vec<NewDelegate>, AppError> {
    if req.slots.len() > MAX_DELEGATES - 1 {
        return Err(AppError::Validation(format!(
            "At most {MAX_DELEGATES} delegates per delegation"
        )));
    }

    let head_name = req.head.name.trim();
    if head_name.is_empty() {
        return Err(AppError::Validation("Delegate 1 name is required".into()));
    }

    let mut records = Vec::with_capacity(req.slots.len() + 1);
    records.push(NewDelegate {
        name: head_name.to_string(),
        category: clean_category(req.head.category.as_deref()),
        is_head: true,
    });

    for (idx, slot) in req.slots.iter().enumerate() {
        let number = idx + 2;
        if !slot.included {
            continue;
        }
        let name = slot.name.trim();
        if name.is_empty() {
            return Err(AppError::Validation(format!(
                "Delegate {number} name is required when included"
            )));
        }
        records.push(NewDelegate {
            name: name.to_string(),
            category: clean_category(slot.category.as_deref()),
            is_head: false,
        });
    }

    Ok(records)
}
