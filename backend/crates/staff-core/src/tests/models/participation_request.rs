use crate::ParticipationRequest;

fn sample() -> ParticipationRequest {
    ParticipationRequest::new(Some(1042), Some(7), Some("developer".to_string()), 0.5)
}

// =========================================================================
// Construction
// =========================================================================

#[test]
fn given_default_when_created_then_all_fields_unset() {
    // When
    let request = ParticipationRequest::default();

    // Then
    assert_eq!(request.employee_id, None);
    assert_eq!(request.project_id, None);
    assert_eq!(request.role, None);
    assert_eq!(request.percentage, 0.0);
}

#[test]
fn given_values_when_new_then_fields_hold_them() {
    // When
    let request = sample();

    // Then
    assert_eq!(request.employee_id, Some(1042));
    assert_eq!(request.project_id, Some(7));
    assert_eq!(request.role.as_deref(), Some("developer"));
    assert_eq!(request.percentage, 0.5);
}

#[test]
fn given_default_when_fields_set_one_by_one_then_each_reads_back() {
    // Given
    let mut request = ParticipationRequest::default();

    // When
    request.employee_id = Some(-3);
    request.role = Some(String::new());

    // Then
    assert_eq!(request.employee_id, Some(-3));
    assert_eq!(request.project_id, None);
    assert_eq!(request.role.as_deref(), Some(""));
}

// =========================================================================
// Equality & Hashing
// =========================================================================

#[test]
fn given_identical_fields_when_compared_then_equal_with_same_hash() {
    let left = sample();
    let right = sample();

    assert_eq!(left, right);
    assert_eq!(left.content_hash(), right.content_hash());
}

#[test]
fn given_different_role_when_compared_then_not_equal() {
    let left = sample();
    let mut right = sample();
    right.role = Some("tester".to_string());

    assert_ne!(left, right);
}

#[test]
fn given_unset_and_zero_employee_when_compared_then_not_equal() {
    let mut left = sample();
    let mut right = sample();
    left.employee_id = None;
    right.employee_id = Some(0);

    assert_ne!(left, right);
}

#[test]
fn given_nan_percentages_when_compared_then_equal_with_same_hash() {
    let mut left = sample();
    let mut right = sample();
    left.percentage = f32::NAN;
    right.percentage = -f32::NAN;

    assert_eq!(left, right);
    assert_eq!(left.content_hash(), right.content_hash());
}

#[test]
fn given_signed_zero_percentages_when_compared_then_not_equal() {
    let mut left = sample();
    let mut right = sample();
    left.percentage = 0.0;
    right.percentage = -0.0;

    assert_ne!(left, right);
}

// =========================================================================
// Display
// =========================================================================

#[test]
fn given_populated_request_when_displayed_then_lists_all_fields() {
    let rendered = sample().to_string();

    assert_eq!(
        rendered,
        "ParticipationRequest(employee_id=1042, project_id=7, role=developer, percentage=0.5)"
    );
}

#[test]
fn given_default_request_when_displayed_then_unset_fields_are_null() {
    let rendered = ParticipationRequest::default().to_string();

    assert_eq!(
        rendered,
        "ParticipationRequest(employee_id=null, project_id=null, role=null, percentage=0)"
    );
}
