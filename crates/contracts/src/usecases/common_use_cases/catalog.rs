use super::item::UseCaseItem;

const DOCS_BASE: &str = "https://keptn.sh/docs/concepts";

/// Built-in list of use cases advertised on the settings page, in display order.
pub fn default_catalog() -> Vec<UseCaseItem> {
    vec![
        UseCaseItem::new(
            "continuous-delivery",
            "Continuous delivery",
            "Describe your stages and delivery sequences in a shipyard and let each \
             sequence deploy, test and evaluate new artifacts stage by stage.",
        )
        .with_icon("deploy")
        .with_learn_more(format!("{}/delivery/", DOCS_BASE)),
        UseCaseItem::new(
            "quality-gates",
            "Quality gates",
            "Evaluate service level objectives against the metrics of a deployment \
             and promote only artifacts that pass the gate.",
        )
        .with_icon("quality-gate")
        .with_learn_more(format!("{}/quality_gates/", DOCS_BASE)),
        UseCaseItem::new(
            "auto-remediation",
            "Auto-remediation",
            "Attach remediation actions to problem types so that incoming problems \
             trigger the configured actions and get re-evaluated afterwards.",
        )
        .with_icon("remediation")
        .with_learn_more(format!("{}/automated_operations/", DOCS_BASE)),
        UseCaseItem::new(
            "webhooks",
            "Webhook integrations",
            "Call external tools from any task of a sequence with a webhook \
             subscription, including secrets and custom payloads.",
        )
        .with_icon("webhook")
        .with_learn_more(format!("{}/webhooks/", DOCS_BASE)),
        UseCaseItem::new(
            "sequence-hooks",
            "Sequence hooks",
            "Pause, resume or abort running sequences and wait for approvals \
             before a sequence continues in the next stage.",
        )
        .with_icon("sequence")
        .with_learn_more(format!("{}/sequences/", DOCS_BASE)),
        UseCaseItem::new(
            "git-upstream",
            "Git upstream",
            "Connect a Git upstream repository to keep the project configuration \
             under version control and review changes as commits.",
        )
        .with_icon("git")
        .with_learn_more(format!("{}/git_upstream/", DOCS_BASE)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique() {
        let items = default_catalog();
        let ids: HashSet<_> = items.iter().map(|i| i.id.clone()).collect();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn test_catalog_entries_have_icons() {
        assert!(default_catalog().iter().all(|i| i.icon_id.is_some()));
    }
}
