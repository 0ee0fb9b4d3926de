//! Payload-shape classification for webhook events.
//!
//! Each supported event name maps to a predicate over the payload's field
//! set, mirroring the provider's documented webhook payload schemas. Events
//! that share a primary field (`issues` / `issue_comment`, the
//! `pull_request*` family) are separated by discriminator keys that must be
//! absent.

use serde_json::Value;

/// Field-set rule identifying one webhook event kind.
struct EventRule {
    name: &'static str,
    /// Keys the payload must carry.
    required: &'static [&'static str],
    /// Keys the payload must not carry.
    absent: &'static [&'static str],
}

#[rustfmt::skip]
static RULES: &[EventRule] = &[
    EventRule { name: "check_run", required: &["check_run"], absent: &["deployment"] },
    EventRule { name: "check_suite", required: &["check_suite"], absent: &[] },
    EventRule { name: "commit_comment", required: &["comment"], absent: &["issue", "pull_request"] },
    EventRule { name: "create", required: &["ref", "ref_type", "master_branch"], absent: &["commits"] },
    EventRule { name: "delete", required: &["ref", "ref_type"], absent: &["master_branch", "commits"] },
    EventRule { name: "deployment", required: &["deployment"], absent: &["deployment_status"] },
    EventRule { name: "deployment_status", required: &["deployment_status", "deployment"], absent: &[] },
    EventRule { name: "fork", required: &["forkee"], absent: &[] },
    EventRule { name: "gollum", required: &["pages"], absent: &[] },
    EventRule { name: "issue_comment", required: &["issue", "comment"], absent: &[] },
    EventRule { name: "issues", required: &["issue"], absent: &["comment"] },
    EventRule { name: "label", required: &["label"], absent: &["issue", "pull_request"] },
    EventRule { name: "member", required: &["member"], absent: &[] },
    EventRule { name: "milestone", required: &["milestone"], absent: &["issue"] },
    EventRule { name: "page_build", required: &["build"], absent: &[] },
    EventRule { name: "ping", required: &["zen", "hook_id"], absent: &[] },
    EventRule { name: "pull_request", required: &["pull_request", "number"], absent: &["comment", "review"] },
    EventRule { name: "pull_request_review", required: &["review", "pull_request"], absent: &[] },
    EventRule { name: "pull_request_review_comment", required: &["comment", "pull_request"], absent: &["review"] },
    EventRule { name: "push", required: &["ref", "before", "after", "commits"], absent: &[] },
    EventRule { name: "release", required: &["release"], absent: &[] },
    EventRule { name: "star", required: &["starred_at"], absent: &[] },
    EventRule { name: "status", required: &["sha", "state", "context"], absent: &[] },
    EventRule { name: "team_add", required: &["team", "repository"], absent: &[] },
    EventRule { name: "workflow_job", required: &["workflow_job"], absent: &[] },
    EventRule { name: "workflow_run", required: &["workflow_run"], absent: &["deployment"] },
];

impl EventRule {
    fn applies_to(&self, body: &serde_json::Map<String, Value>) -> bool {
        self.required.iter().all(|key| body.contains_key(*key))
            && self.absent.iter().all(|key| !body.contains_key(*key))
    }
}

/// Decide whether `payload` is shaped like the named webhook event.
///
/// Unknown event names never match, so a filter against an event this table
/// does not know degrades to "no match" rather than failing validation.
/// Non-object payloads match nothing.
pub fn matches(event: &str, payload: &Value) -> bool {
    let body = match payload.as_object() {
        Some(body) => body,
        None => return false,
    };

    RULES
        .iter()
        .find(|rule| rule.name == event)
        .is_some_and(|rule| rule.applies_to(body))
}

/// Classify a payload, returning the name of the event it is shaped like.
///
/// The rules are mutually exclusive for documented payloads; the first
/// applicable rule in table order wins.
pub fn classify(payload: &Value) -> Option<&'static str> {
    let body = payload.as_object()?;

    RULES
        .iter()
        .find(|rule| rule.applies_to(body))
        .map(|rule| rule.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_matches_push_payload() {
        let payload = json!({
            "ref": "refs/heads/main",
            "before": "abc",
            "after": "def",
            "commits": []
        });

        assert!(matches("push", &payload));
        assert!(!matches("issues", &payload));
    }

    #[test]
    fn test_matches_issues_payload() {
        let payload = json!({
            "action": "opened",
            "issue": {"number": 1, "title": "Bug"}
        });

        assert!(matches("issues", &payload));
        assert!(!matches("push", &payload));
    }

    #[test]
    fn test_issue_comment_not_issues() {
        // A comment on an issue carries both keys; the bare `issues` rule
        // must not claim it.
        let payload = json!({
            "action": "created",
            "issue": {"number": 1},
            "comment": {"body": "hi"}
        });

        assert!(matches("issue_comment", &payload));
        assert!(!matches("issues", &payload));
        assert!(!matches("commit_comment", &payload));
    }

    #[test]
    fn test_pull_request_family() {
        let pr = json!({"action": "opened", "number": 7, "pull_request": {}});
        assert!(matches("pull_request", &pr));
        assert!(!matches("pull_request_review", &pr));
        assert!(!matches("pull_request_review_comment", &pr));

        let review = json!({"action": "submitted", "review": {}, "pull_request": {}});
        assert!(matches("pull_request_review", &review));
        assert!(!matches("pull_request", &review));

        let review_comment = json!({"action": "created", "comment": {}, "pull_request": {}});
        assert!(matches("pull_request_review_comment", &review_comment));
        assert!(!matches("commit_comment", &review_comment));
    }

    #[test]
    fn test_create_vs_delete() {
        let create = json!({"ref": "feature", "ref_type": "branch", "master_branch": "main"});
        assert!(matches("create", &create));
        assert!(!matches("delete", &create));

        let delete = json!({"ref": "feature", "ref_type": "branch"});
        assert!(matches("delete", &delete));
        assert!(!matches("create", &delete));
    }

    #[test]
    fn test_unknown_event_never_matches() {
        let payload = json!({"issue": {}});
        assert!(!matches("not_a_real_event", &payload));
        assert!(!matches("", &payload));
    }

    #[test]
    fn test_non_object_payload_matches_nothing() {
        assert!(!matches("push", &Value::Null));
        assert!(!matches("push", &json!("push")));
        assert!(!matches("push", &json!([1, 2, 3])));
    }

    #[test]
    fn test_classify() {
        let payload = json!({
            "ref": "refs/heads/main",
            "before": "abc",
            "after": "def",
            "commits": []
        });
        assert_eq!(classify(&payload), Some("push"));

        assert_eq!(classify(&json!({"zen": "Design for failure.", "hook_id": 1})), Some("ping"));
        assert_eq!(classify(&json!({"something": "else"})), None);
        assert_eq!(classify(&Value::Null), None);
    }

    #[test]
    fn test_classify_deployment_status_over_deployment() {
        let payload = json!({"deployment_status": {}, "deployment": {}});
        assert_eq!(classify(&payload), Some("deployment_status"));
        assert!(!matches("deployment", &payload));
    }
}
