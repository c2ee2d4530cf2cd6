use super::*;

// =============================================================================
// endpoint construction
// =============================================================================

#[test]
fn collection_endpoint_shape() {
    assert_eq!(collection_endpoint(resources::BLOGS), "/api/blogs");
    assert_eq!(collection_endpoint(resources::TEAM_MEMBERS), "/api/team-members");
}

#[test]
fn record_endpoint_shape() {
    assert_eq!(record_endpoint(resources::CAREERS, "abc-123"), "/api/careers/abc-123");
}

#[test]
fn every_resource_has_distinct_path() {
    let all = [
        resources::BLOGS,
        resources::BLOG_CATEGORIES,
        resources::NEWS,
        resources::PROJECTS,
        resources::PROJECT_CATEGORIES,
        resources::CLIENTS,
        resources::CAREERS,
        resources::TEAM_MEMBERS,
        resources::SLIDER,
    ];
    let mut paths: Vec<String> = all.iter().map(|r| collection_endpoint(r)).collect();
    paths.sort();
    paths.dedup();
    assert_eq!(paths.len(), all.len());
}

// =============================================================================
// failure messages
// =============================================================================

#[test]
fn not_found_message_names_resource() {
    assert_eq!(request_failed_message("projects", 404), "projects: not found");
}

#[test]
fn unauthorized_message_prompts_sign_in() {
    assert_eq!(request_failed_message("blogs", 401), "session expired, sign in again");
}

#[test]
fn other_statuses_carry_code() {
    assert_eq!(request_failed_message("news", 500), "news: request failed (500)");
}
